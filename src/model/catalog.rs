//! Read-only catalog records and the client-side filters over them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_reactions: u64,
    #[serde(default)]
    pub total_tools: u64,
    #[serde(default)]
    pub total_experiments: u64,
    #[serde(default)]
    pub categories: u64,
    #[serde(default)]
    pub exothermic: u64,
    #[serde(default)]
    pub endothermic: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Species {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub amount: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub equation: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reactants: Vec<Species>,
    #[serde(default)]
    pub products: Vec<Species>,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, rename = "energyRelease")]
    pub energy_release: Option<f64>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub hazard: String,
}

impl Reaction {
    pub fn is_exothermic(&self) -> bool {
        self.kind.contains("Exothermic")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chemical {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: String,
}

/// A guided experiment listed under `GET /experiments`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentTemplate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub lab: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub chemicals: Vec<String>,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub safety: String,
    #[serde(default)]
    pub duration: String,
}

/// Case-insensitive match of `query` against name, equation and description,
/// optionally narrowed to one category. Blank inputs match everything.
pub fn filter_reactions<'a>(
    reactions: &'a [Reaction],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a Reaction> {
    let q = query.trim().to_lowercase();
    let category = category.map(str::trim).filter(|c| !c.is_empty());
    reactions
        .iter()
        .filter(|r| {
            q.is_empty()
                || r.name.to_lowercase().contains(&q)
                || r.equation.to_lowercase().contains(&q)
                || r.description.to_lowercase().contains(&q)
        })
        .filter(|r| category.is_none_or(|c| r.category == c))
        .collect()
}

pub fn filter_tools<'a>(tools: &'a [Tool], category: Option<&str>) -> Vec<&'a Tool> {
    let category = category.map(str::trim).filter(|c| !c.is_empty());
    tools
        .iter()
        .filter(|t| category.is_none_or(|c| t.category == c))
        .collect()
}

#[cfg(test)]
#[path = "../tests/model/catalog_tests.rs"]
mod tests;
