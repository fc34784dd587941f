use crate::application::prize::PrizeEngine;
use crate::application::spinner::ReelSpinner;
use crate::config::SlotConfig;
use crate::domain::payout::Bet;
use crate::domain::ports::{DisplaySinkBox, SymbolSourceBox};
use crate::domain::reel::{ReelState, ReelUpdate};
use crate::domain::symbol::{Alphabet, Symbol};
use crate::error::Result;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep, sleep_until};

/// The final state of one spin session.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    /// Resting symbol per reel; `None` for a reel that never ticked.
    pub symbols: Vec<Option<Symbol>>,
    pub payout: Decimal,
}

impl SpinOutcome {
    pub fn is_win(&self) -> bool {
        self.payout > Decimal::ZERO
    }
}

/// Owns one machine: orchestrates the spinner tasks, renders the
/// animation through the display sink, and settles the bet.
///
/// Each session spawns one task per reel. Reel `i` stops `(i+1) x stagger`
/// after session start; the session as a whole stops consuming events at
/// `reels x stagger`. All communication with the spinners goes through a
/// single bounded channel, so reel state stays single-writer with no
/// locking.
pub struct SpinController {
    config: SlotConfig,
    engine: PrizeEngine,
    alphabet: Arc<Alphabet>,
    source: SymbolSourceBox,
    sink: DisplaySinkBox,
}

impl SpinController {
    pub fn new(config: SlotConfig, source: SymbolSourceBox, sink: DisplaySinkBox) -> Result<Self> {
        config.validate()?;
        let alphabet = Arc::new(config.symbols.clone());
        let engine = PrizeEngine::new(config.payout.clone());
        Ok(Self {
            config,
            engine,
            alphabet,
            source,
            sink,
        })
    }

    /// Runs one full session: spin, animate, settle, report.
    pub async fn spin(&mut self, bet: Bet) -> Result<SpinOutcome> {
        let timing = self.config.timing;
        let reels = self.config.reels;
        let start = Instant::now();
        let global_deadline = start + timing.stagger() * reels as u32;

        let (events, mut updates) = mpsc::channel(reels);
        for reel in 0..reels {
            let spinner = ReelSpinner {
                reel,
                alphabet: Arc::clone(&self.alphabet),
                start_index: self.source.next_index(self.alphabet.len()),
                tick: timing.tick(),
                deadline: start + timing.stagger() * (reel as u32 + 1),
            };
            tokio::spawn(spinner.run(events.clone()));
        }
        drop(events);
        tracing::debug!(reels, "spin session started");

        let mut states: Vec<ReelState> = (0..reels).map(ReelState::new).collect();
        let mut last_frame = String::new();

        let stop = sleep_until(global_deadline);
        tokio::pin!(stop);
        loop {
            tokio::select! {
                update = updates.recv() => {
                    // None: every spinner has hit its own deadline.
                    let Some(ReelUpdate { reel, symbol }) = update else {
                        break;
                    };
                    states[reel].symbol = Some(symbol);

                    let frame = render_frame(&states);
                    self.sink.show_frame(&frame).await?;
                    sleep(timing.frame_pause()).await;
                    self.sink.clear_frame().await?;
                    last_frame = frame;
                }
                _ = &mut stop => break,
            }
        }
        // Any spinner still running sees a closed channel and exits.
        updates.close();

        let symbols: Vec<Option<Symbol>> = states.iter().map(|state| state.symbol).collect();
        let payout = match symbols.iter().copied().collect::<Option<Vec<Symbol>>>() {
            Some(line) => self.engine.evaluate(bet, &line),
            // A reel that never ticked matches no rule.
            None => Decimal::ZERO,
        };

        self.sink
            .show_result(&result_line(&last_frame, payout))
            .await?;
        sleep(timing.result_pause()).await;
        tracing::debug!(%payout, "spin session settled");

        Ok(SpinOutcome { symbols, payout })
    }
}

/// Joins the currently set reel symbols with `|`, omitting unset reels.
fn render_frame(states: &[ReelState]) -> String {
    states
        .iter()
        .filter_map(|state| state.symbol)
        .map(|symbol| symbol.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

fn result_line(frame: &str, payout: Decimal) -> String {
    if payout > Decimal::ZERO {
        format!("{frame} You win {payout:.2}")
    } else {
        format!("{frame} You lose")
    }
}
