//! Per-session turn serialization.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::SessionId;

/// Hands out one async mutex per session id so that turns for the same
/// session run one after another while different sessions proceed freely.
#[derive(Debug, Clone, Default)]
pub struct SessionLocks {
    inner: Arc<Mutex<HashMap<SessionId, Arc<Mutex<()>>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other turn holds the session, then returns the guard.
    pub async fn acquire(&self, id: &SessionId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            // Entries nobody is holding or waiting on can go.
            map.retain(|_, lock| Arc::strong_count(lock) > 1);
            map.entry(id.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of sessions with a turn in flight or queued.
    pub async fn active(&self) -> usize {
        self.inner
            .lock()
            .await
            .values()
            .filter(|lock| Arc::strong_count(lock) > 1)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_session_waits_for_release() {
        let locks = SessionLocks::new();
        let id = SessionId::new("session_a").unwrap();

        let guard = locks.acquire(&id).await;
        let waiter = {
            let locks = locks.clone();
            let id = id.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire(&id).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .unwrap();
    }

    #[tokio::test]
    async fn different_sessions_do_not_block() {
        let locks = SessionLocks::new();
        let _a = locks.acquire(&SessionId::new("session_a").unwrap()).await;

        let b = tokio::time::timeout(
            Duration::from_millis(100),
            locks.acquire(&SessionId::new("session_b").unwrap()),
        )
        .await;

        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn released_sessions_are_pruned() {
        let locks = SessionLocks::new();
        let id = SessionId::new("session_a").unwrap();

        drop(locks.acquire(&id).await);
        let _other = locks.acquire(&SessionId::new("session_b").unwrap()).await;

        assert_eq!(locks.active().await, 1);
        assert_eq!(locks.inner.lock().await.len(), 1);
    }
}
