use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::{Board, StateId, Symbol};
use crate::error::{Error, Result};
use crate::participant::{Move, MoveKind};

const PROMPT: &str = "Enter co-ordinates of i and j: ";

/// A person entering moves as `i,j` (zero-based row, column).
///
/// Unparsable lines and occupied cells are asked again. Coordinates past the
/// edge of the board are not checked and panic when used.
pub struct Human {
    symbol: Symbol,
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    verbose: bool,
}

impl Human {
    pub fn new(symbol: Symbol, input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self {
            symbol,
            input,
            output,
            verbose: true,
        }
    }

    /// A human reading from stdin and prompting on stdout.
    pub fn stdio(symbol: Symbol) -> Self {
        Self::new(symbol, Box::new(io::stdin().lock()), Box::new(io::stdout()))
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Prompts until a well-formed pair naming an empty cell arrives, then plays it.
    ///
    /// # Panics
    ///
    /// Panics if the entered row or column is 3 or more.
    pub fn choose_move(&mut self, board: &mut Board) -> Result<Move> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            let Some((row, col)) = parse_coordinates(&line) else {
                debug!("ignoring malformed move {:?}", line.trim_end());
                continue;
            };
            if !board.is_empty(row, col) {
                debug!("cell ({row}, {col}) is taken");
                continue;
            }

            board.place(row, col, self.symbol);
            return Ok(Move {
                row,
                col,
                kind: MoveKind::Manual,
            });
        }
    }

    /// Asks a yes/no question. Only an answer starting with `n` is a no; a
    /// closed input counts as one too.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(!line.trim_start().to_lowercase().starts_with('n'))
    }

    /// Humans keep no trajectory.
    pub fn record_state(&mut self, _state: StateId) {}

    /// Humans do not learn from the outcome.
    pub fn update(&mut self, _final_reward: f64) {}
}

/// Parses `"i,j"`, allowing whitespace around either number.
pub fn parse_coordinates(line: &str) -> Option<(usize, usize)> {
    let (row, col) = line.trim().split_once(',')?;
    Some((row.trim().parse().ok()?, col.trim().parse().ok()?))
}
