use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the scheduling server, without a trailing path.
    pub server: String,
    pub endpoint: String,
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: "http://127.0.0.1:5000".to_string(),
            endpoint: "/schedule".to_string(),
            window_title: "CPU Scheduler".to_string(),
        }
    }
}

impl Config {
    /// Read `config.json` from the working directory, or fall back to the defaults.
    pub fn load() -> Self {
        match std::env::current_dir() {
            Ok(mut path) => {
                path.push(CONFIG_FILE);
                Self::from_path(&path)
            }
            Err(error) => {
                log::warn!("no working directory ({}), using default config", error);
                Config::default()
            }
        }
    }

    pub fn from_path(path: &Path) -> Self {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => {
                log::info!("{} not found, using default config", path.display());
                return Config::default();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(config) => config,
            Err(error) => {
                log::warn!("ignoring malformed {}: {}", path.display(), error);
                Config::default()
            }
        }
    }

    pub fn schedule_url(&self) -> String {
        let server = self.server.trim_end_matches('/');
        if self.endpoint.starts_with('/') {
            format!("{}{}", server, self.endpoint)
        } else {
            format!("{}/{}", server, self.endpoint)
        }
    }
}
