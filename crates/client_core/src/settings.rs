use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

use crate::{DEFAULT_API_URL, DEFAULT_RESULT_COUNT};

pub const SETTINGS_FILE: &str = "directory.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub result_count: usize,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            result_count: DEFAULT_RESULT_COUNT,
            request_timeout_secs: 15,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_url: Option<String>,
    results: Option<usize>,
    timeout_secs: Option<u64>,
}

/// Defaults, then `directory.toml` in the working directory, then the
/// process environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.api_url {
                    settings.api_url = v;
                }
                if let Some(v) = file_cfg.results {
                    settings.result_count = v;
                }
                match file_cfg.timeout_secs {
                    Some(0) => warn!(path = %path.display(), "ignoring zero request timeout"),
                    Some(v) => settings.request_timeout_secs = v,
                    None => {}
                }
            }
            Err(err) => warn!(path = %path.display(), "ignoring malformed settings file: {err}"),
        }
    }

    for name in ["DIRECTORY_API_URL", "APP__API_URL"] {
        if let Some(v) = non_empty(&env, name) {
            settings.api_url = v;
        }
    }

    for name in ["DIRECTORY_RESULTS", "APP__RESULTS"] {
        if let Some(v) = non_empty(&env, name) {
            match v.parse::<usize>() {
                Ok(parsed) => settings.result_count = parsed,
                Err(_) => warn!(variable = name, value = %v, "ignoring non-numeric result count"),
            }
        }
    }

    for name in ["DIRECTORY_TIMEOUT_SECS", "APP__TIMEOUT_SECS"] {
        if let Some(v) = non_empty(&env, name) {
            match v.parse::<u64>() {
                Ok(0) => warn!(variable = name, "ignoring zero request timeout"),
                Ok(parsed) => settings.request_timeout_secs = parsed,
                Err(_) => warn!(variable = name, value = %v, "ignoring non-numeric timeout"),
            }
        }
    }

    settings
}

fn non_empty(env: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    env(name).filter(|value| !value.trim().is_empty())
}
