//! Text rendering of boards and of the values behind a greedy move.

use std::fmt::Write;

use crate::board::{Board, LENGTH};
use crate::participant::ValueGrid;

const BOARD_RULE: &str = "-------------";
const VALUES_RULE: &str = "------------------";

/// Renders the board as rows of `x`, `o` and blanks between horizontal rules.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in board.grid() {
        out.push_str(BOARD_RULE);
        out.push('\n');
        for cell in row {
            match cell {
                Some(symbol) => {
                    let _ = write!(out, "  {symbol} ");
                }
                None => out.push_str("    "),
            }
        }
        out.push('\n');
    }
    out.push_str(BOARD_RULE);
    out.push('\n');
    out
}

/// Renders the value of every cell a greedy agent weighed, and the symbols
/// already on `board` elsewhere.
pub fn render_values(board: &Board, values: &ValueGrid) -> String {
    let mut out = String::new();
    for i in 0..LENGTH {
        out.push_str(VALUES_RULE);
        out.push('\n');
        for j in 0..LENGTH {
            match (values[i][j], board.cell(i, j)) {
                (Some(value), _) => {
                    let _ = write!(out, " {value:.2}|");
                }
                (None, Some(symbol)) => {
                    let _ = write!(out, "  {symbol}  |");
                }
                (None, None) => out.push_str("     |"),
            }
        }
        out.push('\n');
    }
    out.push_str(VALUES_RULE);
    out.push('\n');
    out
}
