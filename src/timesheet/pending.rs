use tokio::sync::RwLock;

use crate::timesheet::models::Submission;

/// In-memory, insertion-ordered batch of submissions awaiting
/// reconciliation. Never persisted; lives and dies with the process.
///
/// Reconciliation works on a `snapshot()` and, once it completes, removes
/// exactly the snapshotted prefix with `discard_first()`. Appends are only
/// ever at the tail, so a submission that arrives mid-reconciliation stays
/// queued for the next batch instead of being silently dropped.
pub struct PendingStore {
    submissions: RwLock<Vec<Submission>>,
}

impl PendingStore {
    pub fn new() -> Self {
        Self {
            submissions: RwLock::new(Vec::new()),
        }
    }

    pub async fn append(&self, submission: Submission) {
        let mut submissions = self.submissions.write().await;
        submissions.push(submission);
    }

    pub async fn snapshot(&self) -> Vec<Submission> {
        let submissions = self.submissions.read().await;
        submissions.clone()
    }

    pub async fn count(&self) -> usize {
        let submissions = self.submissions.read().await;
        submissions.len()
    }

    /// Drop the first `n` submissions — the prefix a completed
    /// reconciliation just processed.
    pub async fn discard_first(&self, n: usize) {
        let mut submissions = self.submissions.write().await;
        let n = n.min(submissions.len());
        submissions.drain(..n);
    }

    /// Reset to empty. Idempotent.
    pub async fn clear(&self) {
        let mut submissions = self.submissions.write().await;
        submissions.clear();
    }
}

impl Default for PendingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn submission(code: &str) -> Submission {
        Submission {
            code: code.to_string(),
            starting_km: None,
            ending_km: None,
            shift_start: None,
            load_out: None,
            first_stop: None,
            last_stop: None,
            last_reattempt: None,
            station_return: None,
            clock_out: None,
            zone: None,
            uta: None,
            utl: None,
            nsl: None,
            bc: None,
            rej_dmg: None,
            oodt: None,
            fdd: None,
            extra: None,
            received_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_append_snapshot_clear() {
        let store = PendingStore::new();
        assert_eq!(store.count().await, 0);

        store.append(submission("AB1")).await;
        store.append(submission("CD2")).await;

        let batch = store.snapshot().await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].code, "AB1");
        assert_eq!(batch[1].code, "CD2");

        // Snapshot does not mutate
        assert_eq!(store.count().await, 2);

        store.clear().await;
        assert_eq!(store.count().await, 0);
        // clear is idempotent
        store.clear().await;
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_discard_first_keeps_later_appends() {
        let store = PendingStore::new();
        store.append(submission("AB1")).await;
        store.append(submission("CD2")).await;

        let batch = store.snapshot().await;

        // A submission arriving while the snapshot is being reconciled
        store.append(submission("EF3")).await;

        store.discard_first(batch.len()).await;

        let remaining = store.snapshot().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].code, "EF3");
    }
}
