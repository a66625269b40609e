use anyhow::Result;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::experiment::{ExperimentResponse, LabKind, Measurements};
use super::ids::{FindingId, now_ts};

const DEFAULT_SAFETY: &str = "Standard lab safety";

/// One saved experiment or note in the notebook.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: FindingId,
    pub title: String,

    #[serde(default)]
    pub notes: String,
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
    #[serde(default)]
    pub lab: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,

    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Finding {
    /// Blank finding with a fresh id, as produced by the notebook's "New" action.
    pub fn draft(title: impl Into<String>) -> Result<Self> {
        let created_at = now_ts();
        let id = FindingId::generate(&created_at)?;
        Ok(Self::with_id(id, title, created_at))
    }

    pub fn with_id(id: FindingId, title: impl Into<String>, created_at: String) -> Self {
        Self {
            id,
            title: title.into(),
            notes: String::new(),
            observations: String::new(),
            conclusion: String::new(),
            safety: DEFAULT_SAFETY.to_string(),
            chemicals: Vec::new(),
            tools: Vec::new(),
            lab: String::new(),
            measurements: None,
            created_at,
            updated_at: None,
        }
    }

    /// Builds the finding recorded after a successful experiment run.
    pub fn from_experiment(
        lab: LabKind,
        chemicals: &[String],
        tools: &[String],
        resp: &ExperimentResponse,
    ) -> Result<Self> {
        // Keep the server's time when it is a proper RFC 3339 stamp.
        let created_at = OffsetDateTime::parse(&resp.timestamp, &Rfc3339)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok())
            .unwrap_or_else(now_ts);
        let id = FindingId::generate(&created_at)?;

        let subject = resp
            .reaction
            .as_ref()
            .map(|r| r.name.trim())
            .filter(|n| !n.is_empty())
            .or_else(|| chemicals.first().map(|c| c.as_str()))
            .unwrap_or("Unknown mixture");

        let mut notes = format!("Experimental run - mixed chemicals in {} lab", lab.label());
        if !tools.is_empty() {
            notes.push_str(" using ");
            notes.push_str(&tools.join(", "));
        }
        for note in &resp.tool_notes {
            notes.push_str("\n- ");
            notes.push_str(note);
        }

        let safety = if resp.safety.trim().is_empty() {
            DEFAULT_SAFETY.to_string()
        } else {
            resp.safety.clone()
        };

        Ok(Self {
            id,
            title: format!("{} Experiment: {}", lab.label(), subject),
            notes,
            observations: resp.observation.clone(),
            conclusion: resp.result.clone(),
            safety,
            chemicals: chemicals.to_vec(),
            tools: tools.to_vec(),
            lab: lab.label().to_string(),
            measurements: resp.measurements.clone(),
            created_at,
            updated_at: None,
        })
    }

    /// Shallow merge: every field present in the patch replaces the current one.
    pub fn apply_patch(&mut self, patch: FindingPatch, updated_at: String) {
        let FindingPatch {
            title,
            notes,
            observations,
            conclusion,
            safety,
            chemicals,
            tools,
            lab,
            measurements,
        } = patch;

        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = notes {
            self.notes = v;
        }
        if let Some(v) = observations {
            self.observations = v;
        }
        if let Some(v) = conclusion {
            self.conclusion = v;
        }
        if let Some(v) = safety {
            self.safety = v;
        }
        if let Some(v) = chemicals {
            self.chemicals = v;
        }
        if let Some(v) = tools {
            self.tools = v;
        }
        if let Some(v) = lab {
            self.lab = v;
        }
        if let Some(v) = measurements {
            self.measurements = Some(v);
        }
        self.updated_at = Some(updated_at);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FindingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemicals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
}

impl FindingPatch {
    pub fn is_empty(&self) -> bool {
        *self == FindingPatch::default()
    }
}

#[cfg(test)]
#[path = "../tests/model/finding_tests.rs"]
mod tests;
