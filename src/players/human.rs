//! Human player reading `row col` pairs from a text stream.

use super::PlayerStrategy;
use crate::games::tictactoe::{Board, GameError, Position, Symbol};
use std::io::{BufRead, Stdout, Write};
use tracing::{debug, instrument, warn};

/// Source of newline-terminated input.
///
/// Lines are raw bytes; decoding is left to the caller so that bytes which
/// are not UTF-8 count as bad input rather than a stream failure.
pub trait LineSource {
    /// Appends the next line to `buf`, returning 0 at end of input.
    fn next_line(&mut self, buf: &mut Vec<u8>) -> std::io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self, buf: &mut Vec<u8>) -> std::io::Result<usize> {
        self.read_until(b'\n', buf)
    }
}

/// Process stdin, locked only while a line is read so both players can
/// share it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn next_line(&mut self, buf: &mut Vec<u8>) -> std::io::Result<usize> {
        std::io::stdin().lock().read_until(b'\n', buf)
    }
}

/// Prompts on `output` and reads moves from `input` until one is valid.
///
/// Malformed lines and unavailable cells are reported and re-prompted.
/// A line holding a single number is taken as the row, and the column is
/// read from the next line without a new prompt. Only end of input or an
/// I/O failure ends the loop without a move.
#[derive(Debug)]
pub struct InteractiveStrategy<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> InteractiveStrategy<R, W> {
    /// Creates a player over arbitrary streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl InteractiveStrategy<StdinLines, Stdout> {
    /// Creates a player on the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, StdinLines, std::io::stdout())
    }
}

impl<R: LineSource, W: Write> PlayerStrategy for InteractiveStrategy<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn select_move(&mut self, board: &Board, symbol: Symbol) -> Result<Position, GameError> {
        let mut raw = Vec::new();
        let mut pending_row: Option<String> = None;
        loop {
            if pending_row.is_none() {
                write!(self.output, "{} ({}) - Enter row col: ", self.name, symbol)?;
                self.output.flush()?;
            }

            raw.clear();
            if self.input.next_line(&mut raw)? == 0 {
                warn!("Input closed while waiting for a move");
                return Err(GameError::InputClosed);
            }

            let line = String::from_utf8_lossy(&raw);
            let text = match pending_row.take() {
                Some(row) => format!("{} {}", row, line.trim()),
                None => line.trim().to_string(),
            };
            let text = text.trim();

            if text.parse::<usize>().is_ok() {
                debug!(row = text, "Waiting for column on next line");
                pending_row = Some(text.to_string());
                continue;
            }

            match text.parse::<Position>() {
                Ok(pos) if board.is_valid_move(pos) => {
                    debug!(%pos, "Accepted input");
                    return Ok(pos);
                }
                Ok(pos) => {
                    warn!(%pos, "Cell not available");
                    writeln!(self.output, "That cell is not available. Try again.")?;
                }
                Err(e) => {
                    warn!(error = %e, "Discarding malformed input");
                    writeln!(self.output, "Invalid input. Try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
