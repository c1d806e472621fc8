//! Sweeper service — periodic eviction of idle chat conversations.
//!
//! Open conversations live only in memory and anyone can open a general
//! one, so a background task drops those left idle past
//! `PortalConfig::conversation_idle`.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::state::AppState;

/// Spawn the background sweeper task. Returns a handle for shutdown.
pub fn spawn_sweeper_task(state: AppState) -> JoinHandle<()> {
    let idle = state.config.conversation_idle;
    // `interval` panics on a zero period.
    let every = state.config.sweep_interval.max(Duration::from_millis(1));
    info!(idle_secs = idle.as_secs(), sweep_secs = every.as_secs(), "conversation sweeper configured");

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let evicted = state.evict_idle_conversations(idle).await;
            if evicted > 0 {
                debug!(evicted, "idle conversations evicted");
            }
        }
    })
}

#[cfg(test)]
#[path = "sweeper_test.rs"]
mod tests;
