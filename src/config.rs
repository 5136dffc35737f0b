use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError, ValidationErrors};
use crate::models::DisciplineMode;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Roster locations
///
/// When `roster` is set the combined survey sheet is used and the split
/// mentee/mentor files are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    #[serde(default = "default_mentees_path")]
    pub mentees: PathBuf,
    #[serde(default = "default_mentors_path")]
    pub mentors: PathBuf,
    #[serde(default)]
    pub roster: Option<PathBuf>,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            mentees: default_mentees_path(),
            mentors: default_mentors_path(),
            roster: None,
        }
    }
}

fn default_mentees_path() -> PathBuf { PathBuf::from("files/mentees-input.csv") }
fn default_mentors_path() -> PathBuf { PathBuf::from("files/mentors-input.csv") }

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_report_path")]
    pub report: PathBuf,
    #[serde(default)]
    pub summary: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            report: default_report_path(),
            summary: None,
        }
    }
}

fn default_report_path() -> PathBuf { PathBuf::from("files/mentor-matched.csv") }

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_discipline_source"))]
pub struct MatchingSettings {
    #[validate(range(min = 1))]
    #[serde(default = "default_max_mentees")]
    pub max_mentees_per_mentor: u32,
    #[serde(default = "default_disciplines")]
    pub disciplines: Vec<String>,
    #[serde(default)]
    pub discipline_mode: DisciplineMode,
    /// Use every distinct role found in the rosters instead of `disciplines`
    #[serde(default)]
    pub discover_disciplines: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_mentees_per_mentor: default_max_mentees(),
            disciplines: default_disciplines(),
            discipline_mode: DisciplineMode::default(),
            discover_disciplines: false,
        }
    }
}

fn default_max_mentees() -> u32 { 1 }
fn default_disciplines() -> Vec<String> {
    vec!["Dev".to_string(), "PM".to_string(), "Data Sci".to_string()]
}

fn validate_discipline_source(matching: &MatchingSettings) -> Result<(), ValidationError> {
    if matching.discover_disciplines {
        return Ok(());
    }
    if matching.disciplines.iter().all(|d| d.trim().is_empty()) {
        return Err(ValidationError::new("no_disciplines"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the structs
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. An explicit file, if given
    /// 4. Environment variables (prefixed with MENTOR_MATCH)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            // e.g., MENTOR_MATCH__MATCHING__MAX_MENTEES_PER_MENTOR -> matching.max_mentees_per_mentor
            .add_source(
                Environment::with_prefix("MENTOR_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("matching.disciplines")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Check the settings that matching depends on
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.matching.validate()
    }
}
