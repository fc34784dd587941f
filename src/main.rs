use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reelspin::application::controller::SpinController;
use reelspin::config::SlotConfig;
use reelspin::domain::payout::Bet;
use reelspin::domain::ports::{DisplaySinkBox, SymbolSourceBox};
use reelspin::infrastructure::entropy::OsEntropySource;
use reelspin::interfaces::terminal::TerminalSink;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bet amount for this spin
    bet: Decimal,

    /// Number of reels (overrides the config file)
    #[arg(long)]
    reels: Option<usize>,

    /// Path to a TOML machine configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout belongs to the animation.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => SlotConfig::load(&path).into_diagnostic()?,
        None => SlotConfig::default(),
    };
    if let Some(reels) = cli.reels {
        config.reels = reels;
    }

    let bet = Bet::new(cli.bet).into_diagnostic()?;

    let source: SymbolSourceBox = Box::new(OsEntropySource::new());
    let sink: DisplaySinkBox = Box::new(TerminalSink::new());
    let mut controller = SpinController::new(config, source, sink).into_diagnostic()?;
    controller.spin(bet).await.into_diagnostic()?;

    Ok(())
}
