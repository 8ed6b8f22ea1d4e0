use skilltime::TimerPhase;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::action_queue::{Action, ActionTx};

/// One-second tick source, alive only while the timer is running.
///
/// At most one task exists at a time: a new phase always aborts the old task
/// before a new one is spawned.
pub(super) struct Ticker {
    handle: Option<JoinHandle<()>>,
    phase: TimerPhase,
    tx: ActionTx,
}

impl Ticker {
    pub(super) fn new(tx: ActionTx) -> Self {
        Self {
            handle: None,
            phase: TimerPhase::Idle,
            tx,
        }
    }

    /// Match the tick task to the timer phase.
    pub(super) fn sync(&mut self, phase: TimerPhase) {
        if phase == self.phase && (phase != TimerPhase::Running || self.handle.is_some()) {
            return;
        }
        self.phase = phase;
        self.stop();
        if phase == TimerPhase::Running {
            let tx = self.tx.clone();
            self.handle = Some(tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(1));
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // The first tick completes immediately.
                interval.tick().await;
                loop {
                    interval.tick().await;
                    if tx.send(Action::Tick).is_err() {
                        break;
                    }
                }
            }));
            tracing::debug!("tick source started");
        }
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("tick source stopped");
        }
    }

    pub(super) fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
