/// Runtime configuration for the dashboard
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default location of the class API.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Default address the front end listens on.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the class API, without a trailing resource path
    pub api_base_url: String,
    /// Address for `classboard serve`
    pub bind_addr: SocketAddr,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// First hour row of the timetable
    pub first_hour: u32,
    /// Last hour row of the timetable (inclusive)
    pub last_hour: u32,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            first_hour: 7,
            last_hour: 18,
            user_agent: concat!("classboard/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON file
    ///
    /// # Returns
    /// * `Ok(Config)` - The parsed and validated configuration
    /// * `Err` - If the file can't be read, parsed or validated
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the base URL is absolute and the hour range is sensible.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        let url = Url::parse(&self.api_base_url)?;
        if url.cannot_be_a_base() {
            return Err(format!("api_base_url is not a base URL: {}", self.api_base_url).into());
        }
        if self.first_hour > self.last_hour || self.last_hour > 23 {
            return Err(format!(
                "invalid timetable hours {}..={}",
                self.first_hour, self.last_hour
            )
            .into());
        }
        Ok(())
    }

    /// The hour rows of the timetable.
    pub fn hours(&self) -> RangeInclusive<u32> {
        self.first_hour..=self.last_hour
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
