//! # Client configuration: `diary.toml`
//!
//! Defines the settings the shells start from. The desktop shell layers them
//! from `diary.toml` (filename: [`DiaryConfig::filename`]) and the environment;
//! the web shell only takes the base URL at build time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [notices]
//! error_secs = 5       # auth/entry errors
//! response_secs = 30   # auto response after saving
//! success_secs = 5     # "saved" banner
//!
//! [insights]
//! top_words = 50
//! ```
//!
//! Every field has a serde default, so a missing or empty config file is
//! equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `diary.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notices: NoticeConfig,
    #[serde(default)]
    pub insights: InsightsConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// How long transient notices stay on screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    #[serde(default = "default_error_secs")]
    pub error_secs: u64,
    #[serde(default = "default_response_secs")]
    pub response_secs: u64,
    #[serde(default = "default_success_secs")]
    pub success_secs: u64,
}

fn default_error_secs() -> u64 {
    5
}

fn default_response_secs() -> u64 {
    30
}

fn default_success_secs() -> u64 {
    5
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            error_secs: default_error_secs(),
            response_secs: default_response_secs(),
            success_secs: default_success_secs(),
        }
    }
}

impl NoticeConfig {
    pub fn error(&self) -> Duration {
        Duration::from_secs(self.error_secs)
    }

    pub fn response(&self) -> Duration {
        Duration::from_secs(self.response_secs)
    }

    pub fn success(&self) -> Duration {
        Duration::from_secs(self.success_secs)
    }
}

/// Word cloud settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsightsConfig {
    #[serde(default = "default_top_words")]
    pub top_words: usize,
}

fn default_top_words() -> usize {
    crate::insights::TOP_WORDS
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            top_words: default_top_words(),
        }
    }
}

impl InsightsConfig {
    /// Words to show in the cloud. Configured values above
    /// [`TOP_WORDS`](crate::insights::TOP_WORDS) are capped.
    pub fn word_limit(&self) -> usize {
        self.top_words.min(crate::insights::TOP_WORDS)
    }
}

impl DiaryConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "diary.toml"
    }
}
