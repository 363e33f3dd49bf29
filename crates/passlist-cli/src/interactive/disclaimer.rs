use std::io::{self, BufRead, Write};

use super::Prompter;

const DISCLAIMER: &str = "\
WARNING: AUTHORIZED USE ONLY

passlist builds password candidate lists from personal information.
Use it only to audit accounts you own or are explicitly authorized to test,
for example during a contracted penetration test or an internal password
policy review. Generating lists about other people without their consent
may be illegal. You are solely responsible for how the output is used.";

/// Shows the disclaimer until the operator answers yes or no.
///
/// End of input counts as a refusal.
pub fn confirm_disclaimer<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> io::Result<bool> {
    prompter.say(DISCLAIMER)?;
    loop {
        let Some(answer) = prompter.ask("Do you accept these terms? (y/n)")? else {
            return Ok(false);
        };
        match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => prompter.say("Please answer 'y' or 'n'.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(input: &str) -> bool {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input.as_bytes(), &mut output);
        confirm_disclaimer(&mut prompter).expect("io")
    }

    #[test]
    fn accepts_yes_in_any_case() {
        assert!(answer("YES\n"));
        assert!(answer("y\n"));
    }

    #[test]
    fn reprompts_until_clear_answer() {
        assert!(answer("maybe\n\ny\n"));
        assert!(!answer("what\nno\n"));
    }

    #[test]
    fn end_of_input_declines() {
        assert!(!answer(""));
        assert!(!answer("perhaps\n"));
    }
}
