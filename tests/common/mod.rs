use reelspin::application::controller::SpinController;
use reelspin::config::SlotConfig;
use reelspin::domain::payout::Bet;
use reelspin::infrastructure::entropy::StripSource;
use reelspin::infrastructure::in_memory::MemorySink;
use rust_decimal::Decimal;

/// Builds a fully deterministic session: starting draws come from `strip`
/// and the display is recorded for inspection.
pub fn session(config: SlotConfig, strip: Vec<usize>) -> (SpinController, MemorySink) {
    let sink = MemorySink::new();
    let controller = SpinController::new(
        config,
        Box::new(StripSource::new(strip)),
        Box::new(sink.clone()),
    )
    .expect("test config must be valid");
    (controller, sink)
}

pub fn bet(amount: Decimal) -> Bet {
    Bet::new(amount).expect("test bet must be positive")
}
