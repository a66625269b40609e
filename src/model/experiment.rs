//! Wire shapes for `POST /run-experiment`.
//!
//! Every response field defaults, so a partial or oddly typed reply still
//! produces a usable value instead of failing the whole run.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabKind {
    #[default]
    Chemistry,
    Biology,
    Physics,
}

impl LabKind {
    pub const ALL: [LabKind; 3] = [LabKind::Chemistry, LabKind::Biology, LabKind::Physics];

    pub fn label(self) -> &'static str {
        match self {
            LabKind::Chemistry => "Chemistry",
            LabKind::Biology => "Biology",
            LabKind::Physics => "Physics",
        }
    }

    /// Value of the request's `type` field.
    pub fn as_type(self) -> &'static str {
        match self {
            LabKind::Chemistry => "chemistry",
            LabKind::Biology => "biology",
            LabKind::Physics => "physics",
        }
    }

    pub fn parse(s: &str) -> Option<LabKind> {
        LabKind::ALL
            .into_iter()
            .find(|k| k.as_type().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for LabKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExperimentRequest {
    pub chemicals: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub tools: Vec<String>,
    pub heat: u8,
    pub volume_ml: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(default)]
    pub temperature_c: f64,
    #[serde(default)]
    pub ph: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rate: String,
    #[serde(default)]
    pub heat_level: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionSummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub equation: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, rename = "energyRelease")]
    pub energy_release: Option<f64>,
    #[serde(default)]
    pub category: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResponse {
    #[serde(default)]
    pub observation: String,
    #[serde(default)]
    pub result: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub safety: String,
    #[serde(default)]
    pub measurements: Option<Measurements>,
    #[serde(default)]
    pub reaction: Option<ReactionSummary>,
    #[serde(default, rename = "toolNotes")]
    pub tool_notes: Vec<String>,
    #[serde(default)]
    pub timestamp: String,
}

/// Accepts strings, numbers and booleans; anything else becomes empty.
pub(crate) fn lenient_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(de)?;
    Ok(match v {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}
