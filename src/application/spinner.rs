use crate::domain::reel::ReelUpdate;
use crate::domain::symbol::Alphabet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// One reel's animation task.
///
/// Starting from a randomly drawn index, the spinner emits the currently
/// shown symbol on every tick and advances cyclically through the
/// alphabet, so after the random start the visual pattern is
/// deterministic. The first tick whose timestamp lies past the stop
/// deadline ends the loop; the last emitted symbol is the reel's final
/// resting symbol.
pub struct ReelSpinner {
    pub reel: usize,
    pub alphabet: Arc<Alphabet>,
    pub start_index: usize,
    pub tick: Duration,
    pub deadline: Instant,
}

impl ReelSpinner {
    pub async fn run(self, events: mpsc::Sender<ReelUpdate>) {
        let mut index = self.start_index;
        let mut ticks = interval_at(Instant::now() + self.tick, self.tick);
        // A slow consumer must not cause a burst of catch-up ticks.
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let tick = ticks.tick().await;
            if tick > self.deadline {
                break;
            }

            let update = ReelUpdate {
                reel: self.reel,
                symbol: self.alphabet.get(index),
            };
            // Receiver gone means the session is over; stop quietly.
            if events.send(update).await.is_err() {
                break;
            }

            index = self.alphabet.advance(index);
        }

        tracing::debug!(reel = self.reel, "reel stopped");
    }
}
