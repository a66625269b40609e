//! Tab routing: keeps the active tab and the history stack in agreement.

use serde::Serialize;

use crate::model::{Mode, Tab};

mod history;
mod location;

pub use self::history::{History, MemoryHistory};
pub use self::location::{Location, TAB_QUERY_PARAM};

/// Resolves a location to a tab. Precedence: canonical path, `?tab=`
/// parameter, fragment, then [`Tab::DEFAULT`]. Total over all input.
pub fn resolve_tab(location: &Location) -> Tab {
    if let Some(tab) = Tab::from_canonical_path(location.normalized_path()) {
        return tab;
    }
    if let Some(tab) = location.query_param(TAB_QUERY_PARAM).and_then(Tab::from_slug) {
        return tab;
    }
    if let Some(tab) = location.fragment_slug().and_then(Tab::from_slug) {
        return tab;
    }
    Tab::DEFAULT
}

pub fn resolve_tab_str(input: &str) -> Tab {
    resolve_tab(&Location::parse(input))
}

/// Outcome of one state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TabChange {
    pub previous: Tab,
    pub current: Tab,
    /// True when a history entry was pushed for this change.
    pub pushed: bool,
}

impl TabChange {
    pub fn mode_changed(&self) -> bool {
        self.previous.mode() != self.current.mode()
    }
}

pub struct TabController<H: History> {
    history: H,
    active: Tab,
}

impl<H: History> TabController<H> {
    /// Resolves the initial tab and, when the address bar path is not already
    /// its canonical path, rewrites the current entry in place (no push, so a
    /// deep link does not leave an extra back step).
    pub fn mount(mut history: H) -> Self {
        let location = history.location();
        let active = resolve_tab(&location);
        let canonical = active.canonical_path();
        if location.path != canonical {
            tracing::debug!(from = %location, to = canonical, "normalizing initial location");
            history.replace(canonical);
        }
        Self { history, active }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn mode(&self) -> Mode {
        self.active.mode()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn into_history(self) -> H {
        self.history
    }

    /// Activates `tab`, pushing a history entry only when the path changes.
    pub fn navigate(&mut self, tab: Tab) -> TabChange {
        let previous = self.active;
        self.active = tab;

        let canonical = tab.canonical_path();
        let pushed = self.history.location().path != canonical;
        if pushed {
            self.history.push(canonical);
        }

        let change = TabChange {
            previous,
            current: tab,
            pushed,
        };
        log_change(&change);
        change
    }

    /// Like [`navigate`](Self::navigate) for untrusted input; unknown slugs
    /// land on the default tab.
    pub fn navigate_slug(&mut self, slug: &str) -> TabChange {
        self.navigate(Tab::normalize(slug))
    }

    /// Handler for back/forward notifications: re-resolves from the new
    /// location and never writes to history.
    pub fn on_history_change(&mut self) -> TabChange {
        let previous = self.active;
        self.active = resolve_tab(&self.history.location());
        let change = TabChange {
            previous,
            current: self.active,
            pushed: false,
        };
        log_change(&change);
        change
    }

    pub fn back(&mut self) -> Option<TabChange> {
        self.history.back().then(|| self.on_history_change())
    }

    pub fn forward(&mut self) -> Option<TabChange> {
        self.history.forward().then(|| self.on_history_change())
    }

    /// Enters `mode` through its representative tab. Already being in that
    /// mode keeps the current tab.
    pub fn switch_mode(&mut self, mode: Mode) -> TabChange {
        if self.mode() == mode {
            return TabChange {
                previous: self.active,
                current: self.active,
                pushed: false,
            };
        }
        self.navigate(mode.representative_tab())
    }
}

fn log_change(change: &TabChange) {
    if change.previous == change.current {
        return;
    }
    tracing::debug!(
        from = %change.previous,
        to = %change.current,
        mode = %change.current.mode(),
        pushed = change.pushed,
        "tab changed"
    );
}

#[cfg(test)]
#[path = "tests/router/router_tests.rs"]
mod tests;
