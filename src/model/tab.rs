use serde::{Deserialize, Serialize};

/// Application screens. Each one owns exactly one canonical path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Vlab,
    Home,
    Reactions,
    Tools,
    Periodic,
    Lab,
    Notebook,
    About,
}

/// Coarse UI context, derived from the active tab's group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Web,
    App,
}

impl Tab {
    pub const ALL: [Tab; 8] = [
        Tab::Vlab,
        Tab::Home,
        Tab::Reactions,
        Tab::Tools,
        Tab::Periodic,
        Tab::Lab,
        Tab::Notebook,
        Tab::About,
    ];

    pub const DEFAULT: Tab = Tab::Vlab;

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Vlab => "vlab",
            Tab::Home => "home",
            Tab::Reactions => "reactions",
            Tab::Tools => "tools",
            Tab::Periodic => "periodic",
            Tab::Lab => "lab",
            Tab::Notebook => "notebook",
            Tab::About => "about",
        }
    }

    pub fn canonical_path(self) -> &'static str {
        match self {
            Tab::Vlab => "/",
            Tab::Home => "/home",
            Tab::Reactions => "/reactions",
            Tab::Tools => "/tools",
            Tab::Periodic => "/periodic",
            Tab::Lab => "/lab",
            Tab::Notebook => "/notebook",
            Tab::About => "/about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Vlab => "Virtual Lab",
            Tab::Home => "Home",
            Tab::Reactions => "Reactions",
            Tab::Tools => "Tools",
            Tab::Periodic => "Periodic Table",
            Tab::Lab => "Lab",
            Tab::Notebook => "Notebook",
            Tab::About => "About",
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            Tab::Vlab | Tab::About => Mode::Web,
            Tab::Home
            | Tab::Reactions
            | Tab::Tools
            | Tab::Periodic
            | Tab::Lab
            | Tab::Notebook => Mode::App,
        }
    }

    /// Case-insensitive slug lookup. Surrounding whitespace is ignored.
    pub fn from_slug(s: &str) -> Option<Tab> {
        let s = s.trim();
        Tab::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(s))
    }

    /// Exact lookup of an already-normalized path.
    pub fn from_canonical_path(path: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.canonical_path() == path)
    }

    /// Unknown input maps to [`Tab::DEFAULT`].
    pub fn normalize(s: &str) -> Tab {
        Tab::from_slug(s).unwrap_or(Tab::DEFAULT)
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl Mode {
    /// Tab shown when switching into this mode without a specific target.
    pub fn representative_tab(self) -> Tab {
        match self {
            Mode::Web => Tab::Vlab,
            Mode::App => Tab::Home,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Web => "web",
            Mode::App => "app",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
