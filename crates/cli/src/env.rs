use crate::error::CliError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const SHELL_VAR: &str = "SQLFS_SHELL";
pub const LOG_VAR: &str = "SQLFS_LOG";
pub const DRY_RUN_VAR: &str = "SQLFS_DRY_RUN";

/// Variables from the process environment, optionally overlaid with a
/// `.env` style file.
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn new() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Load variables from a .env file; file values win over the process env.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    line_num + 1
                )));
            }

            self.vars
                .insert(key.to_string(), Self::unquote_value(value));
        }

        Ok(())
    }

    fn unquote_value(value: &str) -> String {
        let value = value.trim();

        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
                return value[1..value.len() - 1].to_string();
            }
        }

        value.to_string()
    }
}

/// Runtime settings for the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Shell the commands are handed to, as `<shell> -c <command>`.
    pub shell: String,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shell: "sh".to_string(),
            log_level: "info".to_string(),
            dry_run: false,
        }
    }
}

impl Settings {
    pub fn from_env(env: &EnvManager) -> Result<Self, CliError> {
        let defaults = Settings::default();

        let dry_run = match env.get(DRY_RUN_VAR).map(|v| v.trim().to_lowercase()) {
            None => defaults.dry_run,
            Some(value) => match value.as_str() {
                "1" | "true" | "yes" => true,
                "" | "0" | "false" | "no" => false,
                other => {
                    return Err(CliError::Config(format!(
                        "{DRY_RUN_VAR} must be a boolean, got '{other}'"
                    )));
                }
            },
        };

        Ok(Self {
            shell: non_empty(env.get(SHELL_VAR)).unwrap_or(defaults.shell),
            log_level: non_empty(env.get(LOG_VAR)).unwrap_or(defaults.log_level),
            dry_run,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
