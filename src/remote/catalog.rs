use super::*;

use crate::model::{Chemical, ExperimentTemplate, Reaction, Stats, Tool};

impl RemoteClient {
    pub fn stats(&self) -> Result<Stats> {
        self.get_json("/stats", "get stats")
    }

    pub fn reactions(&self, category: Option<&str>) -> Result<Vec<Reaction>> {
        let path = match category {
            Some(c) => format!("/reactions?category={}", encode(c)),
            None => "/reactions".to_string(),
        };
        self.get_json(&path, "list reactions")
    }

    pub fn reaction(&self, id: &str) -> Result<Reaction> {
        self.get_json(&item_path("reactions", id)?, "get reaction")
    }

    pub fn categories(&self) -> Result<Vec<String>> {
        self.get_json("/categories", "list categories")
    }

    pub fn tools(&self, category: Option<&str>) -> Result<Vec<Tool>> {
        let path = match category {
            Some(c) => format!("/tools?category={}", encode(c)),
            None => "/tools".to_string(),
        };
        self.get_json(&path, "list tools")
    }

    pub fn tool(&self, id: &str) -> Result<Tool> {
        self.get_json(&item_path("tools", id)?, "get tool")
    }

    pub fn tool_categories(&self) -> Result<Vec<String>> {
        self.get_json("/tool-categories", "list tool categories")
    }

    pub fn chemicals(&self) -> Result<Vec<Chemical>> {
        self.get_json("/chemicals", "list chemicals")
    }

    pub fn experiments(&self, lab: Option<&str>) -> Result<Vec<ExperimentTemplate>> {
        let path = match lab {
            Some(l) => format!("/experiments?lab={}", encode(l)),
            None => "/experiments".to_string(),
        };
        self.get_json(&path, "list experiments")
    }

    pub fn experiment(&self, id: &str) -> Result<ExperimentTemplate> {
        self.get_json(&item_path("experiments", id)?, "get experiment")
    }

    pub fn search(&self, query: &str) -> Result<Vec<Reaction>> {
        self.get_json(&format!("/search?q={}", encode(query)), "search reactions")
    }

    /// Catalog reads used by the UI: never fail, fall back to placeholders.
    pub fn stats_soft(&self) -> Fetched<Stats> {
        Fetched::from_result("stats", self.stats())
    }

    pub fn reactions_soft(&self) -> Fetched<Vec<Reaction>> {
        Fetched::from_result("reactions", self.reactions(None))
    }

    pub fn categories_soft(&self) -> Fetched<Vec<String>> {
        Fetched::from_result("categories", self.categories())
    }

    pub fn tools_soft(&self) -> Fetched<Vec<Tool>> {
        Fetched::from_result("tools", self.tools(None))
    }

    pub fn tool_categories_soft(&self) -> Fetched<Vec<String>> {
        Fetched::from_result("tool categories", self.tool_categories())
    }

    pub fn chemicals_soft(&self) -> Fetched<Vec<Chemical>> {
        Fetched::from_result("chemicals", self.chemicals())
    }
}

/// Form encoding, for query values only.
fn encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// `/<collection>/<id>` with `id` percent-encoded as one path segment.
fn item_path(collection: &str, id: &str) -> Result<String> {
    let mut url = url::Url::parse("http://localhost/").context("parse path base")?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("path base cannot hold segments"))?
        .clear()
        .push(collection)
        .push(id);
    Ok(url.path().to_string())
}

#[cfg(test)]
#[path = "../tests/remote/catalog_tests.rs"]
mod tests;
