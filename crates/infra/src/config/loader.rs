//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MAILVAN_SMARTRESPONDER_BASE_URL`: API root (required)
//! - `MAILVAN_SMARTRESPONDER_API_KEY`: API key (required)
//! - `MAILVAN_SMARTRESPONDER_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `MAILVAN_SMARTRESPONDER_MAX_ATTEMPTS`: Total HTTP attempts per command
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./mailvan.json` or `./mailvan.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in `..` and `../..`
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use mailvan_domain::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS};
use mailvan_domain::{ApiKey, Config, MailvanError, Result, SmartResponderConfig};

/// Environment variables read by [`load_from_env`]
pub const BASE_URL_VAR: &str = "MAILVAN_SMARTRESPONDER_BASE_URL";
pub const API_KEY_VAR: &str = "MAILVAN_SMARTRESPONDER_API_KEY";
pub const TIMEOUT_SECS_VAR: &str = "MAILVAN_SMARTRESPONDER_TIMEOUT_SECS";
pub const MAX_ATTEMPTS_VAR: &str = "MAILVAN_SMARTRESPONDER_MAX_ATTEMPTS";

const CONFIG_FILE_NAMES: [&str; 4] = ["mailvan.json", "mailvan.toml", "config.json", "config.toml"];
const SEARCH_DIRS: [&str; 3] = [".", "..", "../.."];

/// Load configuration with automatic fallback strategy
///
/// Uses environment variables when either required variable is set, and
/// a config file only when neither is. Once the environment is in use its
/// errors are returned, never papered over by a file.
///
/// # Errors
/// Returns `MailvanError::Config` if:
/// - An environment value is missing, unparsable or invalid
/// - No config file is found when the environment is not used
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    if !env_configured() {
        tracing::debug!("No SmartResponder environment variables set, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// The base URL and API key must be present; the numeric settings fall
/// back to their defaults when unset but must parse when set.
///
/// # Errors
/// Returns `MailvanError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var(BASE_URL_VAR)?;
    let api_key = ApiKey::new(env_var(API_KEY_VAR)?);

    let timeout_secs = env_parse(TIMEOUT_SECS_VAR, "timeout", DEFAULT_TIMEOUT_SECS)?;
    let max_attempts = env_parse(MAX_ATTEMPTS_VAR, "max attempts", DEFAULT_MAX_ATTEMPTS)?;

    let config =
        Config { smartresponder: SmartResponderConfig { base_url, api_key, timeout_secs, max_attempts } };
    config.smartresponder.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `MailvanError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MailvanError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MailvanError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MailvanError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.smartresponder.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`); a path
/// without an extension is treated as JSON.
///
/// # Errors
/// Returns `MailvanError::Config` if format is invalid or parsing fails.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MailvanError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MailvanError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MailvanError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory and its two parents, then the
/// executable's directory and its two parents. Within each directory
/// `mailvan.*` wins over `config.*` and JSON over TOML.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots.iter().flat_map(|root| candidates_in(root)).find(|path| path.exists())
}

fn candidates_in(root: &Path) -> Vec<PathBuf> {
    SEARCH_DIRS
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| root.join(dir).join(name)))
        .collect()
}

/// Whether the environment is meant to supply the configuration
fn env_configured() -> bool {
    [BASE_URL_VAR, API_KEY_VAR]
        .iter()
        .any(|key| std::env::var_os(key).is_some_and(|value| !value.is_empty()))
}

/// Get required environment variable
///
/// Blank values count as missing.
///
/// # Errors
/// Returns `MailvanError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MailvanError::Config(format!("Missing required environment variable: {}", key))),
    }
}

fn env_parse<T>(key: &str, what: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| MailvanError::Config(format!("Invalid {} in {}: {}", what, key, e))),
        Err(_) => Ok(default),
    }
}
