mod config;
mod interactive;
mod logging;
mod output;
mod progress;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use config::{AppConfig, ConfigError};
use interactive::{Prompter, collect_profile, confirm_disclaimer, select_country};
use logging::{LogSession, LoggingError, open_session};
use output::{OutputError, write_wordlist};
use passlist_core::{
    ComplexityTier, Error as CoreError, PersonalInfo, find_country, supported_countries,
    validate_profile,
};
use passlist_generate::{GenerationEngine, GenerationError, GenerationResult};
use progress::BarProgress;

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("output error: {0}")]
    Output(#[from] OutputError),
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("generation produced no candidates; provide more profile information")]
    EmptyResult,
    #[error("disclaimer declined; nothing was generated")]
    DisclaimerDeclined,
}

#[derive(Parser, Debug)]
#[command(
    name = "passlist",
    version,
    about = "Personal-information wordlist generator for authorized security testing"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a wordlist from a profile file or interactive answers.
    Generate(GenerateArgs),
    /// List complexity tiers with their estimates.
    Tiers(TiersArgs),
    /// List supported countries and their identity documents.
    Countries,
    /// Print the JSON schema of profile files.
    ProfileSchema,
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Profile file (JSON, or TOML with a .toml extension).
    #[arg(long, value_name = "FILE", conflicts_with = "interactive")]
    profile: Option<PathBuf>,
    /// Collect the profile with prompts.
    #[arg(long, default_value_t = false)]
    interactive: bool,
    /// Country whose identity documents are requested.
    #[arg(long, value_name = "CODE")]
    country: Option<String>,
    /// Complexity tier: normal, sensitive or aggressive.
    #[arg(long)]
    tier: Option<String>,
    /// Number of concurrent workers.
    #[arg(long)]
    workers: Option<usize>,
    /// Directory the wordlist is written to.
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,
    /// TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Skip the interactive disclaimer prompt.
    #[arg(long, default_value_t = false)]
    accept_disclaimer: bool,
    /// Disable the progress bar.
    #[arg(long, default_value_t = false)]
    no_progress: bool,
}

#[derive(Args, Debug)]
struct TiersArgs {
    /// Worker count used for the duration estimate.
    #[arg(long)]
    workers: Option<usize>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Generate(GenerateArgs::default()));

    let result = match command {
        Command::Generate(args) => run_generate(args).await,
        Command::Tiers(args) => run_tiers(args),
        Command::Countries => run_countries(),
        Command::ProfileSchema => run_profile_schema(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let config = resolve_config(&args)?;
    let started_at = Local::now();
    let session = if config.enable_logging {
        open_session(&config.log_dir, &config.log_level, started_at)?
    } else {
        LogSession::disabled()
    };
    let _guard = tracing::dispatcher::set_default(&session.dispatch);
    let log_file = session
        .path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    tracing::info!(
        event = "session_started",
        tier = %config.tier,
        workers = config.workers,
        log_file = %log_file,
    );

    let info = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());

        if !args.accept_disclaimer && !confirm_disclaimer(&mut prompter)? {
            tracing::warn!(event = "disclaimer_declined");
            return Err(CliError::DisclaimerDeclined);
        }
        tracing::info!(event = "disclaimer_accepted");

        obtain_profile(&args, &mut prompter)?
    };

    let issues = validate_profile(&info);
    for issue in &issues {
        tracing::warn!(event = "profile_issue", code = issue.code(), detail = %issue);
        eprintln!("warning: {issue}");
    }

    let tier = config.tier;
    println!(
        "Generating {tier} wordlist with {} workers (estimated {}, {}, up to ~{} candidates)",
        config.workers,
        format_duration(tier.estimated_duration(config.workers)),
        tier.memory_hint(),
        tier.max_candidates_hint()
    );

    let mut engine = GenerationEngine::new(config.generate_options())
        .with_dispatch(session.dispatch.clone());
    let bar = if config.enable_progress {
        let bar = Arc::new(BarProgress::new(tier.max_candidates_hint()));
        engine = engine.with_progress(bar.clone());
        Some(bar)
    } else {
        None
    };

    let result = engine.run(info.clone()).await?;
    if let Some(bar) = &bar {
        bar.finish(result.len());
    }

    if result.is_empty() {
        tracing::warn!(event = "empty_result", run_id = %result.run_id);
        return Err(CliError::EmptyResult);
    }

    let path = write_wordlist(
        &config.output_dir,
        &info,
        &result.candidates,
        Local::now().date_naive(),
    )?;
    tracing::info!(
        event = "wordlist_written",
        run_id = %result.run_id,
        path = %path.display(),
        candidates = result.len()
    );

    print_summary(&result, &path);
    Ok(())
}

fn resolve_config(args: &GenerateArgs) -> Result<AppConfig, CliError> {
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(tier) = &args.tier {
        config.tier = tier
            .parse::<ComplexityTier>()
            .map_err(|_| GenerationError::InvalidComplexityTier(tier.clone()))?;
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if args.no_progress {
        config.enable_progress = false;
    }
    config.validate()?;
    Ok(config)
}

fn obtain_profile<R, W>(
    args: &GenerateArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<PersonalInfo, CliError>
where
    R: io::BufRead,
    W: io::Write,
{
    let country = args.country.as_deref().map(find_country).transpose()?;

    if let Some(path) = &args.profile {
        let mut info = load_profile(path)?;
        if info.country.is_none() {
            info.country = country.map(|country| country.code.to_string());
        }
        tracing::info!(event = "profile_loaded", path = %path.display());
        return Ok(info);
    }

    let country = match country {
        Some(country) => country,
        None => select_country(prompter)?,
    };
    let info = collect_profile(prompter, Some(country))?;
    tracing::info!(event = "profile_collected", country = country.code);
    Ok(info)
}

fn load_profile(path: &Path) -> Result<PersonalInfo, CliError> {
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let info = if is_toml {
        PersonalInfo::from_toml_str(&content)?
    } else {
        PersonalInfo::from_json_str(&content)?
    };
    Ok(info)
}

fn print_summary(result: &GenerationResult, path: &Path) {
    println!("Wordlist written to {}", path.display());
    println!("  candidates: {}", result.len());
    println!("  generated before dedup: {}", result.emitted);
    println!("  tier: {}", result.tier);
    println!("  workers: {}", result.workers);
    println!("  duration: {}", format_duration(result.duration));
    if result.has_faults() {
        println!("  recovered faults: {}", result.faults.len());
        for fault in &result.faults {
            println!("    {}: {:?}", fault.unit, fault.outcome);
        }
    }
}

fn run_tiers(args: TiersArgs) -> Result<(), CliError> {
    let workers = args.workers.unwrap_or(AppConfig::default().workers);
    for tier in ComplexityTier::ALL {
        println!("{tier}");
        println!("  {}", tier.description());
        println!(
            "  up to ~{} candidates, {} memory, about {} with {workers} workers",
            tier.max_candidates_hint(),
            tier.memory_hint(),
            format_duration(tier.estimated_duration(workers))
        );
    }
    Ok(())
}

fn run_countries() -> Result<(), CliError> {
    for country in supported_countries() {
        println!("{} - {}", country.code, country.name);
        for document in country.documents {
            let required = if document.required { " (required)" } else { "" };
            println!("  {:<26} {}{required}", document.kind, document.name);
        }
    }
    Ok(())
}

fn run_profile_schema() -> Result<(), CliError> {
    let schema = schemars::schema_for!(PersonalInfo);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m{:02}s", secs / 60, secs % 60)
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "passlist",
            "generate",
            "--profile",
            "john.json",
            "--tier",
            "sensitive",
            "--workers",
            "8",
            "--accept-disclaimer",
            "--no-progress",
        ])
        .expect("valid arguments");

        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.profile, Some(PathBuf::from("john.json")));
        assert_eq!(args.workers, Some(8));
        assert!(args.accept_disclaimer);
        assert!(args.no_progress);
    }

    #[test]
    fn profile_and_interactive_conflict() {
        let parsed = Cli::try_parse_from([
            "passlist",
            "generate",
            "--profile",
            "john.json",
            "--interactive",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn flags_override_config() {
        let args = GenerateArgs {
            tier: Some("Aggressive".to_string()),
            workers: Some(2),
            no_progress: true,
            ..GenerateArgs::default()
        };
        let config = resolve_config(&args).expect("valid configuration");
        assert_eq!(config.tier, ComplexityTier::Aggressive);
        assert_eq!(config.workers, 2);
        assert!(!config.enable_progress);
    }

    #[test]
    fn unknown_tier_flag_is_rejected() {
        let args = GenerateArgs {
            tier: Some("extreme".to_string()),
            ..GenerateArgs::default()
        };
        assert!(matches!(
            resolve_config(&args),
            Err(CliError::Generation(GenerationError::InvalidComplexityTier(_)))
        ));
    }

    #[test]
    fn durations_are_human_readable() {
        assert_eq!(format_duration(Duration::from_secs(45)), "45s");
        assert_eq!(format_duration(Duration::from_secs(150)), "2m30s");
    }
}
