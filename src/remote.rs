//! Blocking client for the lab backend's REST API.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::model::LabConfig;

mod http_client;

mod types;
pub use self::types::*;
mod calculate;
mod catalog;
mod experiment;
mod findings;

pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: &LabConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("vlab")
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Result of a read that degrades instead of failing: on error the value is
/// a placeholder and `error` carries the reason for a connectivity notice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fetched<T> {
    pub value: T,
    pub error: Option<String>,
}

impl<T: Default> Fetched<T> {
    pub fn from_result(label: &str, res: Result<T>) -> Self {
        match res {
            Ok(value) => Self { value, error: None },
            Err(err) => {
                let error = format!("{:#}", err);
                tracing::warn!(label, error = %error, "using placeholder data");
                Self {
                    value: T::default(),
                    error: Some(error),
                }
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}
