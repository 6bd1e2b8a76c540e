use super::actions::Action;
use tokio::sync::mpsc;
use tokio::time::Duration;

/// Delivers actions back to the event loop after a fixed delay.
///
/// Used for the notification auto-dismiss and the deferred map focus. There
/// is no cancellation: a delivery that arrives late is filtered by the
/// receiver (the notification expiry carries the id it was scheduled for,
/// and the map focus is ignored once the map is hidden again).
pub struct Scheduler {
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Scheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { action_tx: tx }, rx)
    }

    /// Fire-and-forget delayed delivery
    pub fn schedule(&self, delay: Duration, action: Action) {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(action);
        });
    }
}
