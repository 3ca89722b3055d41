use crate::agent::Agent;
use crate::board::{Board, LENGTH, StateId, Symbol};
use crate::error::Result;
use crate::human::Human;
use crate::random::RandomGenerator;

/// Values a greedy agent saw for each empty cell, `None` where the cell was taken.
pub type ValueGrid = [[Option<f64>; LENGTH]; LENGTH];

/// How a move was picked.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveKind {
    /// Uniformly random empty cell.
    Exploration,
    /// Highest-valued cell, along with every value considered.
    Greedy(ValueGrid),
    /// Typed in by a person.
    Manual,
}

/// A move that has already been played on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub kind: MoveKind,
}

/// Anyone who can take a seat at the board.
///
/// Humans accept [`Participant::record_state`] and [`Participant::update`] but
/// ignore both.
pub enum Participant<'a> {
    Agent(&'a mut Agent),
    Human(&'a mut Human),
}

impl Participant<'_> {
    pub fn symbol(&self) -> Symbol {
        match self {
            Participant::Agent(agent) => agent.symbol(),
            Participant::Human(human) => human.symbol(),
        }
    }

    /// Whether the board should be shown before this participant moves.
    pub fn is_verbose(&self) -> bool {
        match self {
            Participant::Agent(agent) => agent.is_verbose(),
            Participant::Human(human) => human.is_verbose(),
        }
    }

    /// Picks a move and commits it to `board`.
    pub fn choose_move<R: RandomGenerator>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<Move> {
        match self {
            Participant::Agent(agent) => agent.choose_move(board, rng),
            Participant::Human(human) => human.choose_move(board),
        }
    }

    pub fn record_state(&mut self, state: StateId) {
        match self {
            Participant::Agent(agent) => agent.record_state(state),
            Participant::Human(human) => human.record_state(state),
        }
    }

    pub fn update(&mut self, final_reward: f64) {
        match self {
            Participant::Agent(agent) => agent.update(final_reward),
            Participant::Human(human) => human.update(final_reward),
        }
    }
}
