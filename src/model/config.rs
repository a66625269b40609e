use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabConfig {
    pub version: u32,

    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// When false, saved findings stay local and are never posted.
    #[serde(default = "default_true")]
    pub remote_sync: bool,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
            remote_sync: true,
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}
