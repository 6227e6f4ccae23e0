//! Command-line interface entry point for `CourseAdvisor`

mod args;
mod commands;

use args::{CatalogSubcommand, Cli, Command};
use clap::Parser;
use course_advisor::config::Config;
use course_advisor::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use course_advisor::{error, info};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    if let Command::Config { subcommand } = args.command {
        let stdin = io::stdin();
        let stdout = io::stdout();
        return match commands::config::run(
            subcommand,
            &mut config,
            &defaults,
            stdin.lock(),
            &mut stdout.lock(),
        ) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut catalog = match commands::load_configured_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{e}");
            eprintln!("✗ Failed to load course catalog: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match args.command {
        Command::Config { .. } => Ok(()),
        Command::Catalog { subcommand } => match subcommand {
            CatalogSubcommand::List => commands::catalog::list(&catalog, &mut out),
            CatalogSubcommand::Show { code } => commands::catalog::show(&catalog, &code, &mut out),
        },
        Command::Advise {
            semester,
            cgpa,
            passed,
            failed,
            enroll,
        } => {
            let profile = commands::StudentProfile {
                semester,
                cgpa,
                passed,
                failed,
            };
            commands::advise::run(&catalog, &profile, &enroll, &mut out)
        }
        Command::Session => {
            let stdin = io::stdin();
            commands::session::run(&mut catalog, stdin.lock(), &mut out)
        }
    };

    match result.and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
