//! CLI argument definitions for `CourseAdvisor`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_advisor::config::ConfigOverrides;
use course_advisor::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Level::from(*self).fmt(f)
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CatalogSubcommand {
    /// List every course as `CODE: NAME`.
    List,
    /// Show all attributes of one course.
    Show {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Inspect the course catalog.
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },
    /// Advise a student and optionally try enrollments.
    ///
    /// Prints the remaining credit hours and the advising list, failed
    /// courses first. Each `--enroll` is attempted in order.
    Advise {
        /// Current semester
        #[arg(long, value_name = "N")]
        semester: u32,

        /// Cumulative GPA
        #[arg(long, value_name = "CGPA", value_parser = crate::commands::parse_cgpa)]
        cgpa: f64,

        /// Passed course codes (comma-separated or repeated)
        #[arg(long, value_name = "CODES", value_delimiter = ',')]
        passed: Vec<String>,

        /// Failed course codes (comma-separated or repeated)
        #[arg(long, value_name = "CODES", value_delimiter = ',')]
        failed: Vec<String>,

        /// Course codes to enroll in, in order
        #[arg(long, value_name = "CODE")]
        enroll: Vec<String>,
    },
    /// Start an interactive advising session with student and advisor portals.
    Session,
}

#[derive(Parser, Debug)]
#[command(
    name = "courseadvisor",
    about = "CourseAdvisor command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog source
    #[arg(long = "config-catalog-file", value_name = "PATH")]
    pub config_catalog_file: Option<PathBuf>,

    /// Override config catalog source (short form)
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Override config university-common courses source
    #[arg(long = "config-uc-courses-file", value_name = "PATH")]
    pub config_uc_courses_file: Option<PathBuf>,

    /// Override config university-common courses source (short form)
    #[arg(long = "uc-courses", value_name = "PATH")]
    pub uc_courses: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--catalog`) take precedence over long-form
    /// flags (e.g., `--config-catalog-file`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            catalog_file: path_string(self.catalog.as_ref().or(self.config_catalog_file.as_ref())),
            uc_courses_file: path_string(
                self.uc_courses
                    .as_ref()
                    .or(self.config_uc_courses_file.as_ref()),
            ),
        }
    }
}
