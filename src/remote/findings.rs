use super::*;

use crate::model::Finding;
use crate::notebook::FindingsRemote;

impl RemoteClient {
    /// Remote snapshot. Records without an id, or that do not look like a
    /// finding at all, are skipped rather than failing the whole list.
    pub fn list_findings(&self) -> Result<Vec<Finding>> {
        let body: serde_json::Value = self.get_json("/findings", "list findings")?;
        let items = match body {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(mut obj) => match obj.remove("findings") {
                Some(serde_json::Value::Array(items)) => items,
                _ => anyhow::bail!("list findings: unexpected response shape"),
            },
            _ => anyhow::bail!("list findings: unexpected response shape"),
        };

        let total = items.len();
        let findings: Vec<Finding> = items
            .into_iter()
            .filter_map(|v| serde_json::from_value::<RemoteFinding>(v).ok())
            .filter_map(RemoteFinding::into_finding)
            .collect();
        if findings.len() < total {
            tracing::debug!(skipped = total - findings.len(), "ignored malformed remote findings");
        }
        Ok(findings)
    }

    pub fn create_finding(&self, finding: &Finding) -> Result<()> {
        let body = PostFindingRequest::from(finding);
        let resp = self
            .client
            .post(self.url("/findings"))
            .json(&body)
            .send()
            .context("send create finding")?;
        // Response body is not needed.
        self.ensure_ok(resp, "create finding")?;
        Ok(())
    }
}

impl FindingsRemote for RemoteClient {
    fn fetch_findings(&self) -> Result<Vec<Finding>> {
        self.list_findings()
    }

    fn post_finding(&self, finding: &Finding) -> Result<()> {
        self.create_finding(finding)
    }
}
