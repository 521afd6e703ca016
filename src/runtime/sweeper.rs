//! Optional periodic purge of expired sessions
//!
//! Reads already purge lazily; the sweeper only bounds how long an
//! abandoned call's entry can linger when no other traffic arrives.

use crate::session::SessionStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Start purging expired sessions every `interval` until `cancel` fires
pub fn spawn_session_sweeper(
    sessions: Arc<SessionStore>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let purged = sessions.purge_expired();
                    if purged > 0 {
                        tracing::debug!(purged, "Swept expired sessions");
                    }
                }
            }
        }
        tracing::info!("Session sweeper stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ManualClock;

    #[tokio::test]
    async fn test_sweeper_purges_until_cancelled() {
        let clock = ManualClock::new();
        let sessions = Arc::new(SessionStore::with_clock(
            Duration::from_secs(60),
            Arc::new(clock.clone()),
        ));
        sessions.create_session("CA-abandoned", None);
        clock.advance(chrono::Duration::minutes(5));

        let cancel = CancellationToken::new();
        let handle =
            spawn_session_sweeper(Arc::clone(&sessions), Duration::from_millis(5), cancel.clone());

        tokio::time::sleep(Duration::from_millis(50)).await;
        // The sweeper got there first
        assert_eq!(sessions.purge_expired(), 0);

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweeper should stop after cancel")
            .unwrap();
    }
}
