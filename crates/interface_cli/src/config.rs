//! Console configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use core_kernel::{CoreError, Timezone};
use serde::Deserialize;

/// Optional settings file read from the working directory
pub const CONFIG_FILE: &str = "osic.toml";

/// Prefix of environment overrides, e.g. `OSIC_DATA_DIR`
pub const ENV_PREFIX: &str = "OSIC";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Console configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Directory holding the data files
    pub data_dir: PathBuf,
    /// Rate parameters file name
    pub defaults_file: String,
    /// Policy ledger file name
    pub policies_file: String,
    /// Log level
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// IANA zone the invoice date is taken in
    pub timezone: String,
    /// Dots printed by the progress bar
    pub progress_steps: u32,
    /// Pause before each dot
    pub progress_step_millis: u64,
    /// Reprint every stored policy when the operator stops
    pub reprint_on_exit: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            defaults_file: "OSICDef.dat".to_string(),
            policies_file: "Policies.dat".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            timezone: "America/St_Johns".to_string(),
            progress_steps: 10,
            progress_step_millis: 500,
            reprint_on_exit: true,
        }
    }
}

impl CliConfig {
    /// Loads defaults, then `osic.toml` if present, then `OSIC_*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Same as [`CliConfig::load`] with an explicit settings file
    pub fn load_from(file: &Path) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("data_dir", defaults.data_dir.display().to_string())?
            .set_default("defaults_file", defaults.defaults_file)?
            .set_default("policies_file", defaults.policies_file)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "text")?
            .set_default("timezone", defaults.timezone)?
            .set_default("progress_steps", i64::from(defaults.progress_steps))?
            .set_default("progress_step_millis", defaults.progress_step_millis as i64)?
            .set_default("reprint_on_exit", defaults.reprint_on_exit)?
            .add_source(config::File::from(file).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn defaults_path(&self) -> PathBuf {
        self.data_dir.join(&self.defaults_file)
    }

    pub fn policies_path(&self) -> PathBuf {
        self.data_dir.join(&self.policies_file)
    }

    /// Parses the configured zone
    pub fn timezone(&self) -> Result<Timezone, CoreError> {
        self.timezone.parse()
    }

    pub fn progress_delay(&self) -> Duration {
        Duration::from_millis(self.progress_step_millis)
    }
}
