//! In-flight session counter used for draining on shutdown

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

#[derive(Default)]
struct Inner {
    active: AtomicUsize,
    idle: Notify,
}

/// Counts sessions that are still running
#[derive(Clone, Default)]
pub struct SessionTracker {
    inner: Arc<Inner>,
}

/// Held by a running session; releases its slot on drop
pub struct SessionGuard {
    inner: Arc<Inner>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new in-flight session
    pub fn track(&self) -> SessionGuard {
        self.inner.active.fetch_add(1, Ordering::SeqCst);
        SessionGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of sessions currently running
    pub fn active(&self) -> usize {
        self.inner.active.load(Ordering::SeqCst)
    }

    /// Wait until no sessions are running
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.inner.idle.notified();
            if self.active() == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Wait until idle or until `grace` elapses. Returns true if idle.
    pub async fn drain(&self, grace: Duration) -> bool {
        tokio::time::timeout(grace, self.wait_idle()).await.is_ok()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if self.inner.active.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.idle.notify_waiters();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_counts_sessions() {
        let tracker = SessionTracker::new();
        assert_eq!(tracker.active(), 0);
        let a = tracker.track();
        let b = tracker.track();
        assert_eq!(tracker.active(), 2);
        drop(a);
        assert_eq!(tracker.active(), 1);
        drop(b);
        assert_eq!(tracker.active(), 0);
    }

    #[tokio::test]
    async fn drain_returns_immediately_when_idle() {
        let tracker = SessionTracker::new();
        assert!(tracker.drain(Duration::from_millis(10)).await);
    }

    #[tokio::test]
    async fn drain_waits_for_guards() {
        let tracker = SessionTracker::new();
        let guard = tracker.track();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            drop(guard);
        });
        assert!(tracker.drain(Duration::from_secs(5)).await);
        assert_eq!(tracker.active(), 0);
    }

    #[tokio::test]
    async fn drain_gives_up_after_grace() {
        let tracker = SessionTracker::new();
        let _guard = tracker.track();
        assert!(!tracker.drain(Duration::from_millis(20)).await);
    }
}
