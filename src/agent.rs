use log::trace;

use crate::board::{Board, LENGTH, StateId, Symbol};
use crate::error::{Error, Result};
use crate::participant::{Move, MoveKind, ValueGrid};
use crate::random::RandomGenerator;
use crate::value_table::ValueTable;

/// Default probability of taking a random move.
pub const DEFAULT_EPSILON: f64 = 0.1;
/// Default step size of the TD update.
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

/// A tabular TD(0) player.
///
/// The agent plays epsilon-greedy over its own [`ValueTable`] and remembers every
/// state of the current game. Once the game ends, [`Agent::update`] walks that
/// trajectory backwards and pulls each value toward its successor's.
#[derive(Debug, Clone)]
pub struct Agent {
    symbol: Symbol,
    epsilon: f64,
    learning_rate: f64,
    values: ValueTable,
    trajectory: Vec<StateId>,
    verbose: bool,
}

/// A builder for creating instances of `Agent`.
pub struct AgentBuilder {
    symbol: Symbol,
    values: ValueTable,
    epsilon: f64,
    learning_rate: f64,
    verbose: bool,
}

impl AgentBuilder {
    /// Creates a new builder for an agent playing `symbol` with the given initial values.
    pub fn new(symbol: Symbol, values: ValueTable) -> Self {
        Self {
            symbol,
            values,
            epsilon: DEFAULT_EPSILON,
            learning_rate: DEFAULT_LEARNING_RATE,
            verbose: false,
        }
    }

    /// Sets the exploration rate.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Makes the agent report how it picks its moves.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Agent {
        Agent {
            symbol: self.symbol,
            epsilon: self.epsilon,
            learning_rate: self.learning_rate,
            values: self.values,
            trajectory: Vec::new(),
            verbose: self.verbose,
        }
    }
}

impl Agent {
    /// Returns a new builder for `Agent`.
    pub fn builder(symbol: Symbol, values: ValueTable) -> AgentBuilder {
        AgentBuilder::new(symbol, values)
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// States recorded since the last update, oldest first.
    pub fn trajectory(&self) -> &[StateId] {
        &self.trajectory
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Picks a move and plays it on `board`.
    ///
    /// With probability epsilon the move is uniform over the empty cells.
    /// Otherwise it is the empty cell whose resulting state has the highest
    /// value; on ties the first such cell in row-major order wins.
    pub fn choose_move<R: RandomGenerator>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<Move> {
        let empty_cells = board.empty_cells();

        let (row, col, kind) = if rng.next_f64() < self.epsilon {
            let &(row, col) = rng.choose(&empty_cells).ok_or(Error::NoValidMoves)?;
            trace!("{} explores ({row}, {col})", self.symbol);
            (row, col, MoveKind::Exploration)
        } else {
            let mut values: ValueGrid = [[None; LENGTH]; LENGTH];
            let mut best_value = -1.0;
            let mut best_cell = None;
            for &(i, j) in &empty_cells {
                let value = self.values[board.state_after(i, j, self.symbol)];
                values[i][j] = Some(value);
                if value > best_value {
                    best_value = value;
                    best_cell = Some((i, j));
                }
            }
            let (row, col) = best_cell.ok_or(Error::NoValidMoves)?;
            trace!("{} exploits ({row}, {col}) valued {best_value:.3}", self.symbol);
            (row, col, MoveKind::Greedy(values))
        };

        board.place(row, col, self.symbol);
        Ok(Move { row, col, kind })
    }

    /// Appends a state reached during the current game.
    pub fn record_state(&mut self, state: StateId) {
        self.trajectory.push(state);
    }

    /// Backward TD(0) pass over the recorded trajectory.
    ///
    /// Starting from `final_reward`, each state from newest to oldest moves a
    /// `learning_rate` step toward the target, and its new value becomes the
    /// target for the state before it. The trajectory is cleared afterwards.
    pub fn update(&mut self, final_reward: f64) {
        let mut target = final_reward;
        for &state in self.trajectory.iter().rev() {
            let value = self.values[state] + self.learning_rate * (target - self.values[state]);
            self.values[state] = value;
            target = value;
        }
        self.trajectory.clear();
    }
}
