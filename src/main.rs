use clap::{Args, Parser, Subcommand};
use mentor_match::batch::run_batch;
use mentor_match::config::{LoggingSettings, Settings};
use mentor_match::error::MatchError;
use mentor_match::models::DisciplineMode;
use mentor_match::services::normalize_survey_file;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Mentor matching CLI
#[derive(Parser)]
#[command(name = "mentor-match")]
#[command(about = "Match mentees to mentors from survey rosters", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "MENTOR_MATCH_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Match mentees to mentors and write the report (default)
    Match(MatchArgs),
    /// Convert raw survey answers into interest flag columns
    Survey {
        /// Survey export, one respondent's answers per line
        #[arg(short, long)]
        input: PathBuf,
        /// Where to write the flag rows
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args, Default)]
struct MatchArgs {
    /// Mentee roster (header row, then id,role,band,email,name,flags...)
    #[arg(long)]
    mentees: Option<PathBuf>,
    /// Mentor roster, same layout as the mentee roster
    #[arg(long)]
    mentors: Option<PathBuf>,
    /// Combined survey sheet; replaces --mentees/--mentors
    #[arg(long)]
    roster: Option<PathBuf>,
    /// Report output path
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Optional JSON run summary path
    #[arg(long)]
    summary: Option<PathBuf>,
    /// Maximum mentees per mentor
    #[arg(long)]
    max_mentees: Option<u32>,
    /// Discipline label to match within (repeatable)
    #[arg(short, long = "discipline")]
    disciplines: Vec<String>,
    /// Match within every role found in the rosters
    #[arg(long)]
    discover: bool,
    /// Select disciplines by substring instead of exact role
    #[arg(long)]
    legacy_substring: bool,
}

impl MatchArgs {
    fn apply(self, settings: &mut Settings) {
        if let Some(path) = self.mentees {
            settings.input.mentees = path;
        }
        if let Some(path) = self.mentors {
            settings.input.mentors = path;
        }
        if self.roster.is_some() {
            settings.input.roster = self.roster;
        }
        if let Some(path) = self.output {
            settings.output.report = path;
        }
        if self.summary.is_some() {
            settings.output.summary = self.summary;
        }
        if let Some(max) = self.max_mentees {
            settings.matching.max_mentees_per_mentor = max;
        }
        if !self.disciplines.is_empty() {
            settings.matching.disciplines = self.disciplines;
        }
        if self.discover {
            settings.matching.discover_disciplines = true;
        }
        if self.legacy_substring {
            settings.matching.discipline_mode = DisciplineMode::Substring;
        }
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` wins over `LOG_LEVEL`, which wins over the configured level.
fn init_logging(logging: &LoggingSettings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn run(cli: Cli, settings: Settings) -> Result<(), MatchError> {
    let mut settings = settings;

    match cli.command.unwrap_or(Command::Match(MatchArgs::default())) {
        Command::Match(args) => {
            args.apply(&mut settings);
            let summary = run_batch(&settings)?;
            info!(
                "Run {} finished: {} pairings, {} unmatched mentees",
                summary.run_id,
                summary.total_pairings,
                summary.unmatched_mentees.len()
            );
        }
        Command::Survey { input, output } => {
            normalize_survey_file(&input, &output)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref());
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting mentor matching...");

    match run(cli, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
