//! Client-side notebook of findings.
//!
//! The local sequence is authoritative. It is kept most-recent-first, holds
//! at most [`NOTEBOOK_CAPACITY`] entries with unique ids, and is written back
//! to storage before any mutating call returns. A remote collection is merged
//! in opportunistically and receives new findings on a best-effort basis.

use std::collections::HashSet;

use anyhow::{Context, Result};

use crate::model::{Finding, FindingId, FindingPatch, now_ts};

mod storage;
mod sync;

pub use self::storage::{FileStorage, MemoryStorage, Storage};
pub(crate) use self::storage::write_atomic;
pub use self::sync::{FindingsRemote, MountGuard, PendingFetch, RemoteSync, spawn_remote_fetch};

pub const NOTEBOOK_CAPACITY: usize = 500;
pub const FINDINGS_KEY: &str = "vlab.findings";

/// Reads the persisted sequence. Missing, unreadable or malformed data all
/// yield an empty notebook.
pub fn load<S: Storage>(storage: &S) -> Vec<Finding> {
    let raw = match storage.get(FINDINGS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(error = %format!("{:#}", err), "notebook storage unreadable, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Finding>>(&raw) {
        Ok(findings) => normalize(findings),
        Err(err) => {
            tracing::warn!(error = %err, "notebook storage corrupt, starting empty");
            Vec::new()
        }
    }
}

/// Drops repeated ids (first occurrence wins) and enforces capacity.
fn normalize(findings: Vec<Finding>) -> Vec<Finding> {
    let mut seen = HashSet::new();
    let mut out: Vec<Finding> = findings
        .into_iter()
        .filter(|f| seen.insert(f.id.clone()))
        .collect();
    out.truncate(NOTEBOOK_CAPACITY);
    out
}

pub struct NotebookStore<S: Storage> {
    storage: S,
    findings: Vec<Finding>,
    active: Option<FindingId>,
    sync: RemoteSync,
}

impl<S: Storage> NotebookStore<S> {
    pub fn open(storage: S, sync: RemoteSync) -> Self {
        let findings = load(&storage);
        tracing::debug!(count = findings.len(), "notebook loaded");
        Self {
            storage,
            findings,
            active: None,
            sync,
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Finding> {
        self.findings.iter().find(|f| f.id.as_str() == id)
    }

    pub fn active(&self) -> Option<&Finding> {
        self.active.as_ref().and_then(|id| self.get(id.as_str()))
    }

    /// Marks an existing finding as the active selection.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.active = Some(FindingId::from(id));
        true
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn sync_mut(&mut self) -> &mut RemoteSync {
        &mut self.sync
    }

    /// Inserts at the head and selects it. An entry with the same id is
    /// replaced rather than duplicated. The remote post starts after the
    /// local write and is never awaited.
    pub fn append(&mut self, finding: Finding) -> Result<()> {
        let mut next = Vec::with_capacity(self.findings.len() + 1);
        next.push(finding.clone());
        next.extend(
            self.findings
                .iter()
                .filter(|f| f.id != finding.id)
                .cloned(),
        );
        next.truncate(NOTEBOOK_CAPACITY);

        self.commit(next)?;
        self.active = Some(finding.id.clone());
        tracing::info!(id = %finding.id, title = %finding.title, "finding saved");

        self.sync.post(&finding);
        Ok(())
    }

    /// Prepends remote-only findings in remote order; ids already present
    /// locally keep their local copy. Only the first [`NOTEBOOK_CAPACITY`]
    /// entries of the snapshot are considered, and eviction never drops an
    /// entry whose id is among them, so re-merging the same snapshot changes
    /// nothing.
    ///
    /// Returns how many findings were added.
    pub fn merge_remote(&mut self, remote: Vec<Finding>) -> Result<usize> {
        let considered: Vec<Finding> = remote.into_iter().take(NOTEBOOK_CAPACITY).collect();
        let snapshot_ids: HashSet<FindingId> = considered.iter().map(|f| f.id.clone()).collect();

        let mut seen: HashSet<FindingId> = self.findings.iter().map(|f| f.id.clone()).collect();
        let fresh: Vec<Finding> = considered
            .into_iter()
            .filter(|f| seen.insert(f.id.clone()))
            .collect();
        if fresh.is_empty() {
            return Ok(0);
        }

        let added = fresh.len();
        let mut next = fresh;
        next.extend(self.findings.iter().cloned());
        evict_outside(&mut next, &snapshot_ids);

        self.commit(next)?;
        let evicted = self
            .active
            .as_ref()
            .is_some_and(|id| self.get(id.as_str()).is_none());
        if evicted {
            self.active = None;
        }
        tracing::info!(added, total = self.findings.len(), "merged remote findings");
        Ok(added)
    }

    /// Shallow-merges `patch` into the finding with `id` and stamps
    /// `updated_at`. Unknown ids are a no-op (returns false).
    pub fn update(&mut self, id: &str, patch: FindingPatch) -> Result<bool> {
        let Some(idx) = self.findings.iter().position(|f| f.id.as_str() == id) else {
            tracing::debug!(id, "update skipped, no such finding");
            return Ok(false);
        };

        let mut next = self.findings.clone();
        next[idx].apply_patch(patch, now_ts());
        self.commit(next)?;
        tracing::info!(id, "finding updated");
        Ok(true)
    }

    /// Deletes the finding with `id` once `confirm` agrees. Unknown ids and
    /// declined confirmations leave the notebook untouched.
    pub fn remove<F>(&mut self, id: &str, confirm: F) -> Result<bool>
    where
        F: FnOnce(&Finding) -> bool,
    {
        let Some(finding) = self.get(id) else {
            return Ok(false);
        };
        if !confirm(finding) {
            return Ok(false);
        }

        let next: Vec<Finding> = self
            .findings
            .iter()
            .filter(|f| f.id.as_str() != id)
            .cloned()
            .collect();
        self.commit(next)?;
        if self.active.as_ref().is_some_and(|a| a.as_str() == id) {
            self.active = None;
        }
        tracing::info!(id, "finding deleted");
        Ok(true)
    }

    /// Writes the full current sequence to storage.
    pub fn persist(&mut self) -> Result<()> {
        write_findings(&mut self.storage, &self.findings)
    }

    /// Waits for `pending` and merges it, unless `guard` was disposed in the
    /// meantime. Returns `None` when the late result was dropped.
    pub fn apply_fetch(&mut self, pending: PendingFetch, guard: &MountGuard) -> Result<Option<usize>> {
        let snapshot = pending.wait();
        if guard.is_disposed() {
            tracing::debug!(count = snapshot.len(), "dropping remote findings for disposed view");
            return Ok(None);
        }
        self.merge_remote(snapshot).map(Some)
    }

    /// Persists `next` first so a failed write leaves memory unchanged.
    fn commit(&mut self, next: Vec<Finding>) -> Result<()> {
        write_findings(&mut self.storage, &next)?;
        self.findings = next;
        Ok(())
    }
}

/// Trims `findings` to capacity by dropping the oldest entries whose ids are
/// not in `keep`. `keep` never holds more than [`NOTEBOOK_CAPACITY`] ids.
fn evict_outside(findings: &mut Vec<Finding>, keep: &HashSet<FindingId>) {
    let mut excess = findings.len().saturating_sub(NOTEBOOK_CAPACITY);
    if excess == 0 {
        return;
    }
    let mut evict = vec![false; findings.len()];
    for (idx, f) in findings.iter().enumerate().rev() {
        if excess == 0 {
            break;
        }
        if !keep.contains(&f.id) {
            evict[idx] = true;
            excess -= 1;
        }
    }
    let mut idx = 0;
    findings.retain(|_| {
        let kept = !evict[idx];
        idx += 1;
        kept
    });
    findings.truncate(NOTEBOOK_CAPACITY);
}

fn write_findings<S: Storage>(storage: &mut S, findings: &[Finding]) -> Result<()> {
    let json = serde_json::to_string(findings).context("serialize findings")?;
    storage.set(FINDINGS_KEY, &json).context("persist findings")
}

#[cfg(test)]
#[path = "tests/notebook/notebook_tests.rs"]
mod tests;
