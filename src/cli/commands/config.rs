//! Config command handler

use crate::args::ConfigSubcommand;
use course_advisor::config::Config;
use course_advisor::core::loader::SourceFormat;
use course_advisor::warn;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Settable keys with their section and meaning
const KEYS: [(&str, &str, &str); 5] = [
    ("level", "logging", "log level (error, warn, info, debug)"),
    ("file", "logging", "log file path, empty for console only"),
    ("verbose", "logging", "verbose console output (true/false)"),
    ("catalog_file", "catalog", "course table (.csv, .xlsx, .xlsm, .xls, .ods)"),
    ("uc_courses_file", "catalog", "extra university-common courses table, optional"),
];

fn io_error(e: io::Error) -> String {
    format!("Failed to write output: {e}")
}

fn is_source_key(key: &str) -> bool {
    matches!(
        key,
        "catalog_file" | "catalog-file" | "uc_courses_file" | "uc-courses-file"
    )
}

/// Reject catalog sources the loader cannot read
///
/// An empty value clears the setting and is always accepted. A supported path
/// that does not exist yet is accepted with a warning.
///
/// # Errors
/// Returns the loader's message for unsupported extensions
pub fn check_source(key: &str, value: &str) -> Result<(), String> {
    if !is_source_key(key) || value.is_empty() {
        return Ok(());
    }
    let path = Path::new(value);
    SourceFormat::detect(path).map_err(|e| e.to_string())?;
    if !path.exists() {
        warn!("{key} points to a missing file: {value}");
    }
    Ok(())
}

/// Validate and apply `config set` without saving
///
/// # Errors
/// Returns an error for unknown keys, bad booleans, or unreadable catalog formats
pub fn apply_set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    check_source(key, value)?;
    config.set(key, value)
}

/// Dispatch config subcommands
///
/// # Errors
/// Returns a message for unknown keys, invalid values, or failed saves
pub fn run<R: BufRead, W: Write>(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
    input: R,
    out: &mut W,
) -> Result<(), String> {
    match subcommand {
        None => handle_config_get(config, None, out),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key.as_deref(), out),
        Some(ConfigSubcommand::Set { key, value }) => {
            apply_set(config, &key, &value)?;
            config
                .save()
                .map_err(|e| format!("Failed to save config: {e}"))?;
            writeln!(out, "✓ Set {key} = {value}").map_err(io_error)
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            config
                .save()
                .map_err(|e| format!("Failed to save config: {e}"))?;
            writeln!(out, "✓ Reset {key} to default").map_err(io_error)
        }
        Some(ConfigSubcommand::Reset) => handle_config_reset(defaults, input, out),
    }
}

/// Print one value, or the whole config followed by the key reference
///
/// # Errors
/// Returns an error naming the known keys when `key` is not one of them
pub fn handle_config_get<W: Write>(
    config: &Config,
    key: Option<&str>,
    out: &mut W,
) -> Result<(), String> {
    if let Some(k) = key {
        let value = config.get(k).ok_or_else(|| {
            let known: Vec<&str> = KEYS.iter().map(|(name, _, _)| *name).collect();
            format!("Unknown config key: '{k}' (known: {})", known.join(", "))
        })?;
        return writeln!(out, "{value}").map_err(io_error);
    }

    write!(out, "\n=== Configuration ===\n\n{config}").map_err(io_error)?;
    writeln!(out, "\nKeys:").map_err(io_error)?;
    for (name, section, about) in KEYS {
        writeln!(out, "  {name:<16} [{section}] {about}").map_err(io_error)?;
    }
    Ok(())
}

/// Delete the config file after confirmation and report the default catalog
///
/// # Errors
/// Returns an error if the file cannot be removed or output fails
pub fn handle_config_reset<R: BufRead, W: Write>(
    defaults: &Config,
    mut input: R,
    out: &mut W,
) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        return writeln!(out, "✓ Config is already at defaults").map_err(io_error);
    }

    write!(out, "Are you sure you want to reset config to defaults? (y/n): ").map_err(io_error)?;
    out.flush().map_err(io_error)?;

    let mut response = String::new();
    input.read_line(&mut response).map_err(io_error)?;
    let response = response.trim();
    if !(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")) {
        return writeln!(out, "✗ Reset cancelled").map_err(io_error);
    }

    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    writeln!(out, "✓ Config reset to defaults").map_err(io_error)?;
    writeln!(out, "  catalog_file = \"{}\"", defaults.catalog.file).map_err(io_error)?;
    check_source("catalog_file", &defaults.catalog.file)
}
