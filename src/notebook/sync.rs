use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use anyhow::Result;

use crate::model::Finding;

/// Remote findings collection. Treated as append-only and best-effort.
pub trait FindingsRemote: Send + Sync {
    fn fetch_findings(&self) -> Result<Vec<Finding>>;
    fn post_finding(&self, finding: &Finding) -> Result<()>;
}

/// Fire-and-forget poster for newly appended findings.
#[derive(Default)]
pub struct RemoteSync {
    remote: Option<Arc<dyn FindingsRemote>>,
    inflight: Vec<JoinHandle<()>>,
}

impl RemoteSync {
    pub fn new(remote: Arc<dyn FindingsRemote>) -> Self {
        Self {
            remote: Some(remote),
            inflight: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.remote.is_some()
    }

    pub fn remote(&self) -> Option<Arc<dyn FindingsRemote>> {
        self.remote.clone()
    }

    /// Posts on a background thread. Failures are logged and dropped; the
    /// caller never waits on or observes the outcome.
    pub fn post(&mut self, finding: &Finding) {
        let Some(remote) = self.remote.clone() else {
            return;
        };
        self.inflight.retain(|h| !h.is_finished());

        let finding = finding.clone();
        let spawned = std::thread::Builder::new()
            .name("vlab-sync".to_string())
            .spawn(move || {
                if let Err(err) = remote.post_finding(&finding) {
                    tracing::warn!(id = %finding.id, error = %format!("{:#}", err), "remote sync failed");
                } else {
                    tracing::debug!(id = %finding.id, "finding synced");
                }
            });
        match spawned {
            Ok(handle) => self.inflight.push(handle),
            Err(err) => tracing::warn!(error = %err, "could not start remote sync"),
        }
    }

    /// Blocks until every outstanding post has finished (successfully or not).
    pub fn flush(&mut self) {
        for handle in self.inflight.drain(..) {
            if handle.join().is_err() {
                tracing::warn!("remote sync thread panicked");
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.inflight.iter().filter(|h| !h.is_finished()).count()
    }
}

/// Disposed flag for a consumer that may go away before a fetch resolves.
#[derive(Clone, Debug, Default)]
pub struct MountGuard {
    disposed: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}

/// A remote snapshot being fetched in the background.
pub struct PendingFetch {
    handle: JoinHandle<Vec<Finding>>,
}

impl PendingFetch {
    pub fn is_ready(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the snapshot. A failed fetch yields an empty snapshot.
    pub fn wait(self) -> Vec<Finding> {
        match self.handle.join() {
            Ok(findings) => findings,
            Err(_) => {
                tracing::warn!("remote fetch thread panicked");
                Vec::new()
            }
        }
    }
}

pub fn spawn_remote_fetch(remote: Arc<dyn FindingsRemote>) -> PendingFetch {
    let handle = std::thread::spawn(move || match remote.fetch_findings() {
        Ok(findings) => findings,
        Err(err) => {
            tracing::warn!(error = %format!("{:#}", err), "remote findings unavailable");
            Vec::new()
        }
    });
    PendingFetch { handle }
}
