// Debounced mirror of a watch channel
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::debug;

pub struct Debouncer;

impl Debouncer {
    /// Spawns a task that copies `input` into the returned receiver once the
    /// input has stayed unchanged for `delay`. Each new input value restarts
    /// the wait, so a burst of updates produces a single output change.
    /// The task stops when the input sender or every output receiver is dropped.
    pub fn spawn<T>(mut input: watch::Receiver<T>, delay: Duration) -> watch::Receiver<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let (tx, rx) = watch::channel(input.borrow_and_update().clone());

        tokio::spawn(async move {
            while input.changed().await.is_ok() {
                loop {
                    tokio::select! {
                        _ = sleep(delay) => break,
                        changed = input.changed() => {
                            if changed.is_err() {
                                return;
                            }
                        }
                    }
                }

                let settled = input.borrow_and_update().clone();
                if tx.send(settled).is_err() {
                    break;
                }
                debug!("Debounced value adopted");
            }
        });

        rx
    }
}
