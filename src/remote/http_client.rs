use super::*;

pub(super) fn with_retries<T>(label: &str, mut f: impl FnMut() -> Result<T>) -> Result<T> {
    const ATTEMPTS: usize = 3;
    let mut last: Option<anyhow::Error> = None;
    for i in 0..ATTEMPTS {
        match f() {
            Ok(v) => return Ok(v),
            Err(err) => {
                tracing::debug!(label, attempt = i + 1, error = %format!("{:#}", err), "request failed");
                last = Some(err);
                if i + 1 < ATTEMPTS {
                    std::thread::sleep(std::time::Duration::from_millis(200 * (1 << i)));
                }
            }
        }
    }
    Err(last
        .unwrap_or_else(|| anyhow::anyhow!("unknown error"))
        .context(label.to_string()))
}

/// Server-provided `error` text, or a generic fallback naming the status.
pub(super) fn error_message(body: &serde_json::Value, status: reqwest::StatusCode) -> String {
    body.get("error")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body: serde_json::Value = resp.json().unwrap_or(serde_json::Value::Null);
        if status == reqwest::StatusCode::NOT_FOUND && body.get("error").is_none() {
            anyhow::bail!("{}: endpoint not found (check the api base url)", label);
        }
        anyhow::bail!("{}: {}", label, error_message(&body, status));
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn get_json<T>(&self, path: &str, label: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        with_retries(label, || {
            let resp = self
                .client
                .get(self.url(path))
                .send()
                .with_context(|| format!("send {}", label))?;
            self.ensure_ok(resp, label)?
                .json()
                .with_context(|| format!("parse {}", label))
        })
    }

    pub(super) fn post_json<B, T>(&self, path: &str, body: &B, label: &str) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .with_context(|| format!("send {}", label))?;
        self.ensure_ok(resp, label)?
            .json()
            .with_context(|| format!("parse {}", label))
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
