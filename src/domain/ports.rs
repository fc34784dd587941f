use crate::error::Result;
use async_trait::async_trait;

/// Source of uniformly distributed symbol indices.
///
/// Implementations must draw uniformly over `[0, bound)`. The production
/// implementation is backed by the operating system CSPRNG and treats an
/// unavailable entropy source as fatal, terminating the process; there is
/// no recoverable failure mode at this port.
pub trait SymbolSource: Send {
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Where the animation goes.
///
/// A frame is a single formatted line; `clear_frame` undoes the most recent
/// `show_frame` so the next frame renders in place. The result line is
/// printed once and left on screen.
#[async_trait]
pub trait DisplaySink: Send {
    async fn show_frame(&mut self, line: &str) -> Result<()>;
    async fn clear_frame(&mut self) -> Result<()>;
    async fn show_result(&mut self, line: &str) -> Result<()>;
}

pub type SymbolSourceBox = Box<dyn SymbolSource>;
pub type DisplaySinkBox = Box<dyn DisplaySink>;
