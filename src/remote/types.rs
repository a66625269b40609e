//! DTOs and payload types for remote API requests/responses.

use crate::model::{Finding, FindingId, lenient_string, now_ts};

/// Body of `POST /findings`.
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct PostFindingRequest {
    pub id: String,
    pub title: String,
    pub content: String,
    pub experiment: String,
    pub lab: String,
    pub observations: String,
    pub conclusion: String,
}

impl From<&Finding> for PostFindingRequest {
    fn from(f: &Finding) -> Self {
        Self {
            id: f.id.to_string(),
            title: f.title.clone(),
            content: f.notes.clone(),
            experiment: f.chemicals.join(", "),
            lab: f.lab.clone(),
            observations: f.observations.clone(),
            conclusion: f.conclusion.clone(),
        }
    }
}

/// A finding as the backend stores it. Everything is optional on the wire.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct RemoteFinding {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub experiment: String,
    #[serde(default)]
    pub lab: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub conclusion: String,
    #[serde(default)]
    pub safety: String,
    #[serde(default)]
    pub chemicals: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl RemoteFinding {
    /// `None` when the record has no usable id and so cannot be merged.
    pub fn into_finding(self) -> Option<Finding> {
        let id = self.id.trim();
        if id.is_empty() {
            return None;
        }

        let chemicals = if self.chemicals.is_empty() {
            split_list(&self.experiment)
        } else {
            self.chemicals
        };
        let title = if self.title.trim().is_empty() {
            "Untitled Finding".to_string()
        } else {
            self.title
        };
        let created_at = if self.timestamp.trim().is_empty() {
            now_ts()
        } else {
            self.timestamp
        };

        let mut finding = Finding::with_id(FindingId(id.to_string()), title, created_at);
        finding.notes = self.content;
        finding.observations = self.observations;
        finding.conclusion = self.conclusion;
        if !self.safety.trim().is_empty() {
            finding.safety = self.safety;
        }
        finding.chemicals = chemicals;
        finding.tools = self.tools;
        finding.lab = self.lab;
        Some(finding)
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MolecularWeight {
    #[serde(default)]
    pub formula: String,
    #[serde(default)]
    pub molecular_weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Molarity {
    #[serde(default)]
    pub moles: f64,
    /// Liters.
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub molarity: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhReading {
    #[serde(default)]
    pub h_concentration: f64,
    #[serde(default, rename = "pH")]
    pub ph: f64,
    #[serde(default, rename = "pOH")]
    pub poh: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stoichiometry {
    #[serde(default)]
    pub reactant_moles: f64,
    #[serde(default)]
    pub product_moles: f64,
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
