//! Tokio-backed tick source for the interactive session.

use std::time::Duration;

use rd_core::{ArmId, TickHandle, TickSource};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Spawns one interval task per arming. Each task sends its [`ArmId`] on a
/// shared channel; the event loop feeds those back into the timer.
#[derive(Debug)]
pub struct IntervalTicks {
    tx: UnboundedSender<ArmId>,
}

impl IntervalTicks {
    /// Create the source together with the receiving end of its ticks.
    pub fn channel() -> (Self, UnboundedReceiver<ArmId>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }
}

/// Aborts the interval task when disarmed or dropped.
#[derive(Debug)]
pub struct IntervalHandle(JoinHandle<()>);

impl TickHandle for IntervalHandle {
    fn disarm(self) {
        self.0.abort();
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl TickSource for IntervalTicks {
    type Handle = IntervalHandle;

    fn arm(&mut self, arm: ArmId, period: Duration) -> IntervalHandle {
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                if tx.send(arm).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(%arm, ?period, "tick source armed");
        IntervalHandle(task)
    }
}
