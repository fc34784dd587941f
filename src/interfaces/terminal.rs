use crate::domain::ports::DisplaySink;
use crate::error::Result;
use async_trait::async_trait;
use crossterm::cursor::MoveUp;
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{Stdout, stdout};

/// Renders the animation in place on stdout.
///
/// Each frame is printed on its own line; clearing moves the cursor back
/// up and wipes the line, so consecutive frames overwrite each other
/// instead of scrolling.
pub struct TerminalSink {
    out: Stdout,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self { out: stdout() }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DisplaySink for TerminalSink {
    async fn show_frame(&mut self, line: &str) -> Result<()> {
        execute!(self.out, Print(line), Print("\n"))?;
        Ok(())
    }

    async fn clear_frame(&mut self) -> Result<()> {
        execute!(self.out, MoveUp(1), Clear(ClearType::CurrentLine))?;
        Ok(())
    }

    async fn show_result(&mut self, line: &str) -> Result<()> {
        execute!(self.out, Print(line), Print("\n"))?;
        Ok(())
    }
}
