use serde::Serialize;
use url::Url;

/// Query parameter consulted when the path is not a canonical tab path.
pub const TAB_QUERY_PARAM: &str = "tab";

const PARSE_BASE: &str = "http://localhost/";

/// The address-bar state the router reads: path, query pairs and fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub fragment: Option<String>,
}

impl Location {
    /// Accepts a full URL (`http://host/lab?tab=x#y`) or anything relative to
    /// the site root (`/lab`, `?tab=lab`, `#notebook`). Never fails; input
    /// that cannot be parsed is kept verbatim as the path.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let parsed = Url::parse(input).or_else(|_| {
            Url::parse(PARSE_BASE).and_then(|base| base.join(input))
        });
        match parsed {
            Ok(url) => Self::from_url(&url),
            Err(err) => {
                tracing::debug!(input, error = %err, "unparseable location, keeping raw path");
                Self {
                    path: input.to_string(),
                    query: Vec::new(),
                    fragment: None,
                }
            }
        }
    }

    pub fn from_url(url: &Url) -> Self {
        Self {
            path: url.path().to_string(),
            query: url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
            fragment: url.fragment().map(str::to_string),
        }
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Path with trailing slashes removed; the bare root stays `/`.
    pub fn normalized_path(&self) -> &str {
        let trimmed = self.path.trim_end_matches('/');
        if trimmed.is_empty() { "/" } else { trimmed }
    }

    /// Fragment without its optional leading `/` (`#/lab` and `#lab` agree).
    pub fn fragment_slug(&self) -> Option<&str> {
        self.fragment
            .as_deref()
            .map(|f| f.trim_start_matches('/'))
            .filter(|f| !f.is_empty())
    }

    pub fn to_href(&self) -> String {
        let mut out = self.path.clone();
        if !self.query.is_empty() {
            let pairs = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>();
            out.push('?');
            out.push_str(&pairs.join("&"));
        }
        if let Some(f) = &self.fragment {
            out.push('#');
            out.push_str(f);
        }
        out
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_href())
    }
}
