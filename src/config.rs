//! Runtime settings for the `subnet-calc` binary.
//!
//! Defaults live here as constants. `main` loads a `.env` file with `dotenv`,
//! then [`Settings::from_env`] applies any `SUBNET_CALC_*` overrides.

use clap::ValueEnum;

/// Default log4rs configuration file.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// CIDRs offered by `--examples`.
pub const EXAMPLE_CIDRS: [&str; 4] = [
    "192.168.1.0/24",
    "10.0.0.0/8",
    "172.16.0.0/12",
    "203.0.113.0/24",
];

pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_BINARY_SEPARATOR: &str = "SUBNET_CALC_BINARY_SEPARATOR";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_NO_COLOR: &str = "SUBNET_CALC_NO_COLOR";

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    /// Placed between octets of binary output.
    pub binary_separator: String,
    pub log_config: String,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            format: OutputFormat::Text,
            binary_separator: crate::output::BINARY_GROUP_SEPARATOR.to_string(),
            log_config: LOG_CONFIG_FILE.to_string(),
            color: true,
        }
    }
}

impl Settings {
    /// Defaults overridden by process environment variables.
    ///
    /// Also returns a message for every value that was ignored, to be logged
    /// once logging is set up.
    pub fn from_env() -> (Settings, Vec<String>) {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `SUBNET_CALC_*` key.
    pub fn from_lookup<F>(lookup: F) -> (Settings, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let mut ignored = Vec::new();

        if let Some(format) = lookup(ENV_FORMAT) {
            match OutputFormat::from_str(format.trim(), true) {
                Ok(f) => settings.format = f,
                Err(_) => ignored.push(format!(
                    "Ignoring {ENV_FORMAT}={format}: expected text, json or csv"
                )),
            }
        }
        if let Some(separator) = lookup(ENV_BINARY_SEPARATOR) {
            settings.binary_separator = separator;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            settings.log_config = path;
        }
        if let Some(no_color) = lookup(ENV_NO_COLOR) {
            settings.color = matches!(no_color.trim(), "" | "0" | "false");
        }

        (settings, ignored)
    }
}
