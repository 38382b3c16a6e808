use log::debug;
use std::future::Future;
use tokio::sync::watch;

/// Lifecycle of a mutation: `Idle -> Pending -> {Idle, Failed}`.
///
/// `Failed` re-enables controls; the next run goes back through `Pending`.
/// There is no automatic retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Failed,
}

/// Observable pending/settled state for one mutation kind (save or delete).
///
/// The UI subscribes to disable controls while pending and to surface a
/// visible failure state.
pub struct MutationTracker {
    name: &'static str,
    tx: watch::Sender<MutationStatus>,
}

impl MutationTracker {
    pub fn new(name: &'static str) -> Self {
        let (tx, _rx) = watch::channel(MutationStatus::Idle);
        Self { name, tx }
    }

    pub fn status(&self) -> MutationStatus {
        *self.tx.borrow()
    }

    pub fn is_pending(&self) -> bool {
        self.status() == MutationStatus::Pending
    }

    /// Watch status transitions (for reactive UIs).
    pub fn subscribe(&self) -> watch::Receiver<MutationStatus> {
        self.tx.subscribe()
    }

    /// Drive `fut` through the state machine: Pending while in flight, Idle
    /// on success, Failed on error. The result passes through unchanged.
    pub async fn run<T, E, Fut>(&self, fut: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        self.tx.send_replace(MutationStatus::Pending);
        debug!("mutation '{}' pending", self.name);
        match fut.await {
            Ok(value) => {
                self.tx.send_replace(MutationStatus::Idle);
                debug!("mutation '{}' settled ok", self.name);
                Ok(value)
            }
            Err(err) => {
                self.tx.send_replace(MutationStatus::Failed);
                debug!("mutation '{}' failed", self.name);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_returns_to_idle() {
        let tracker = MutationTracker::new("save");
        assert_eq!(tracker.status(), MutationStatus::Idle);

        let out: Result<u32, ()> = tracker.run(async { Ok(7) }).await;
        assert_eq!(out, Ok(7));
        assert_eq!(tracker.status(), MutationStatus::Idle);
    }

    #[tokio::test]
    async fn error_lands_in_failed_and_next_run_recovers() {
        let tracker = MutationTracker::new("delete");

        let out: Result<(), &str> = tracker.run(async { Err("boom") }).await;
        assert!(out.is_err());
        assert_eq!(tracker.status(), MutationStatus::Failed);

        let out: Result<(), &str> = tracker.run(async { Ok(()) }).await;
        assert!(out.is_ok());
        assert_eq!(tracker.status(), MutationStatus::Idle);
    }

    #[tokio::test]
    async fn subscribers_observe_pending() {
        let tracker = MutationTracker::new("save");
        let mut rx = tracker.subscribe();

        let _: Result<(), ()> = tracker
            .run(async {
                // Still pending while the future runs.
                Ok(())
            })
            .await;

        // The receiver saw at least one change away from Idle.
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), MutationStatus::Idle);
    }
}
