//! Terminal prompts: the authorized-use disclaimer and profile collection.

mod disclaimer;
mod profile;

pub use disclaimer::confirm_disclaimer;
pub use profile::{collect_profile, select_country};

use std::io::{self, BufRead, Write};

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints `label` and reads one trimmed line; `None` once input is exhausted.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Prompter::ask`], treating end of input as an empty answer.
    pub fn ask_or_empty(&mut self, label: &str) -> io::Result<String> {
        Ok(self.ask(label)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_trims_and_detects_end_of_input() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new("  John \n".as_bytes(), &mut output);
        assert_eq!(prompter.ask("First name").expect("io"), Some("John".to_string()));
        assert_eq!(prompter.ask("Last name").expect("io"), None);
        assert_eq!(prompter.ask_or_empty("Pet").expect("io"), "");
        drop(prompter);
        assert_eq!(
            String::from_utf8(output).expect("utf8"),
            "First name: Last name: Pet: "
        );
    }
}
