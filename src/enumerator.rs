//! Exhaustive walk over every assignment of the nine cells.

use crate::board::{Board, Grid, LENGTH, NUM_CELLS, NUM_STATES, StateId, Symbol};

/// Classification of one grid assignment.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct StateRecord {
    pub state: StateId,
    pub winner: Option<Symbol>,
    pub terminal: bool,
}

/// Iterator over all `3^9` grids, including ones no game can reach.
///
/// Works as a base-3 odometer over the cells in row-major order with the last
/// cell turning fastest, each digit cycling empty, X, O. Every grid is scored
/// on a fresh [`Board`], so no cached status leaks between assignments.
#[derive(Debug, Clone)]
pub struct StateEnumerator {
    digits: [u8; NUM_CELLS],
    remaining: usize,
}

impl Default for StateEnumerator {
    fn default() -> Self {
        Self {
            digits: [0; NUM_CELLS],
            remaining: NUM_STATES,
        }
    }
}

impl StateEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn grid(&self) -> Grid {
        let mut grid: Grid = [[None; LENGTH]; LENGTH];
        for (k, &digit) in self.digits.iter().enumerate() {
            grid[k / LENGTH][k % LENGTH] = match digit {
                0 => None,
                1 => Some(Symbol::X),
                _ => Some(Symbol::O),
            };
        }
        grid
    }

    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            if *digit < 2 {
                *digit += 1;
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for StateEnumerator {
    type Item = StateRecord;

    fn next(&mut self) -> Option<StateRecord> {
        if self.remaining == 0 {
            return None;
        }

        let mut board = Board::from_grid(self.grid());
        let state = board.encode_state();
        let terminal = board.is_terminal(true);
        let record = StateRecord {
            state,
            winner: board.winner(),
            terminal,
        };

        self.remaining -= 1;
        self.advance();
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StateEnumerator {}

/// Starts a fresh enumeration of every grid.
pub fn enumerate_states() -> StateEnumerator {
    StateEnumerator::new()
}
