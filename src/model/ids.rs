use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FindingId(pub String);

impl FindingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `finding_` followed by 16 hex chars hashed from the creation time and
    /// fresh OS entropy.
    pub fn generate(created_at: &str) -> Result<Self> {
        let mut nonce = [0u8; 16];
        getrandom::getrandom(&mut nonce).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;

        let mut hasher = blake3::Hasher::new();
        hasher.update(created_at.as_bytes());
        hasher.update(b"\n");
        hasher.update(&nonce);
        let hex = hasher.finalize().to_hex();
        Ok(FindingId(format!("finding_{}", &hex.as_str()[..16])))
    }
}

impl From<&str> for FindingId {
    fn from(s: &str) -> Self {
        FindingId(s.to_string())
    }
}

impl std::fmt::Display for FindingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}
