use std::ops::{Index, IndexMut};

use crate::board::{NUM_STATES, StateId, Symbol};
use crate::enumerator::StateRecord;

/// Starting value of every state where the game is still open.
pub const OPEN_STATE_VALUE: f64 = 0.5;
/// Value of a terminal state won by the table's owner.
pub const WIN_VALUE: f64 = 1.0;
/// Value of every other terminal state. Draws score like losses, which pushes
/// both agents toward decisive play.
pub const NO_WIN_VALUE: f64 = 0.0;

/// Dense estimate of V(s) for one agent, one entry per [`StateId`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable {
    values: Vec<f64>,
}

impl ValueTable {
    /// A table with every entry set to `value`.
    pub fn filled(value: f64) -> Self {
        Self {
            values: vec![value; NUM_STATES],
        }
    }

    /// Initial values from `symbol`'s point of view: 1.0 for terminal states it
    /// has won, 0.0 for any other terminal state (draws included), 0.5 for open
    /// states. Ids absent from `records` stay at 0.0.
    pub fn initial_for<I>(symbol: Symbol, records: I) -> Self
    where
        I: IntoIterator<Item = StateRecord>,
    {
        let mut table = Self::filled(0.0);
        for record in records {
            table[record.state] = match (record.terminal, record.winner) {
                (false, _) => OPEN_STATE_VALUE,
                (true, Some(winner)) if winner == symbol => WIN_VALUE,
                (true, _) => NO_WIN_VALUE,
            };
        }
        table
    }

    /// Initial table for the X player.
    pub fn initial_x<I>(records: I) -> Self
    where
        I: IntoIterator<Item = StateRecord>,
    {
        Self::initial_for(Symbol::X, records)
    }

    /// Initial table for the O player.
    pub fn initial_o<I>(records: I) -> Self
    where
        I: IntoIterator<Item = StateRecord>,
    {
        Self::initial_for(Symbol::O, records)
    }

    pub fn get(&self, state: StateId) -> f64 {
        self.values[state]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Index<StateId> for ValueTable {
    type Output = f64;

    fn index(&self, state: StateId) -> &f64 {
        &self.values[state]
    }
}

impl IndexMut<StateId> for ValueTable {
    fn index_mut(&mut self, state: StateId) -> &mut f64 {
        &mut self.values[state]
    }
}
