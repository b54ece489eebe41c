//! Application configuration. Data directory, seed file, startup banner.

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_SEED_FILE: &str = "./transaction.json";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding transactions.db. Read from TXSTATS_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// JSON file used to seed an empty store. Read from TXSTATS_SEED_FILE.
    #[serde(default)]
    pub seed_file: Option<String>,

    /// Print the figlet banner at startup. Read from TXSTATS_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TXSTATS"));
        if let Ok(path) = std::env::var("TXSTATS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    pub fn seed_file_or_default(&self) -> PathBuf {
        PathBuf::from(self.seed_file.as_deref().unwrap_or(DEFAULT_SEED_FILE))
    }

    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }
}
