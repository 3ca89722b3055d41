use std::io;

use log::{debug, info};

use crate::agent::Agent;
use crate::board::{Board, Symbol};
use crate::config::TrainingConfig;
use crate::enumerator::{StateRecord, enumerate_states};
use crate::error::Result;
use crate::game::play_game;
use crate::participant::Participant;
use crate::random::RandomGenerator;
use crate::value_table::ValueTable;

/// Outcome counts of a training run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl TrainingSummary {
    fn record(&mut self, winner: Option<Symbol>) {
        self.games += 1;
        match winner {
            Some(Symbol::X) => self.x_wins += 1,
            Some(Symbol::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

/// Builds the X and O agents with their initial value tables, sharing one
/// enumeration of the state space.
pub fn build_agents(config: &TrainingConfig) -> (Agent, Agent) {
    let records: Vec<StateRecord> = enumerate_states().collect();
    debug!("enumerated {} states", records.len());

    let agent_x = Agent::builder(Symbol::X, ValueTable::initial_x(records.iter().copied()))
        .with_epsilon(config.epsilon)
        .with_learning_rate(config.learning_rate)
        .build();
    let agent_o = Agent::builder(Symbol::O, ValueTable::initial_o(records.iter().copied()))
        .with_epsilon(config.epsilon)
        .with_learning_rate(config.learning_rate)
        .build();
    (agent_x, agent_o)
}

/// Plays `config.games` self-play games, X always moving first, each on a fresh board.
pub fn train<R: RandomGenerator>(
    agent_x: &mut Agent,
    agent_o: &mut Agent,
    config: &TrainingConfig,
    rng: &mut R,
) -> Result<TrainingSummary> {
    config.validate()?;

    let mut summary = TrainingSummary::default();
    for game in 0..config.games {
        if game % config.report_every == 0 {
            info!("training game {game}/{}", config.games);
        }

        let winner = play_game(
            &mut Participant::Agent(&mut *agent_x),
            &mut Participant::Agent(&mut *agent_o),
            &mut Board::new(),
            rng,
            &mut io::sink(),
        )?;
        summary.record(winner);
    }

    info!(
        "trained on {} games: x won {}, o won {}, {} draws",
        summary.games, summary.x_wins, summary.o_wins, summary.draws
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{NUM_STATES, StateId};
    use crate::error::Error;
    use crate::random::SeededRandomGenerator;

    fn config(games: usize, seed: u64) -> TrainingConfig {
        TrainingConfig {
            games,
            seed: Some(seed),
            ..TrainingConfig::default()
        }
    }

    fn trained(games: usize, seed: u64) -> (Agent, Agent, TrainingSummary) {
        let config = config(games, seed);
        let (mut x, mut o) = build_agents(&config);
        let mut rng = SeededRandomGenerator::new(seed);
        let summary = train(&mut x, &mut o, &config, &mut rng).unwrap();
        (x, o, summary)
    }

    #[test]
    fn builds_agents_from_config() {
        let config = TrainingConfig {
            epsilon: 0.3,
            learning_rate: 0.2,
            ..TrainingConfig::default()
        };
        let (x, o) = build_agents(&config);
        assert_eq!(x.symbol(), Symbol::X);
        assert_eq!(o.symbol(), Symbol::O);
        assert_eq!(x.epsilon(), 0.3);
        assert_eq!(o.learning_rate(), 0.2);
        assert_eq!(x.values()[0], 0.5);
        assert_eq!(x.values()[1 + 3 + 9], 1.0);
        assert_eq!(o.values()[1 + 3 + 9], 0.0);
    }

    #[test]
    fn summary_counts_every_game() {
        let (x, o, summary) = trained(300, 3);
        assert_eq!(summary.games, 300);
        assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 300);
        assert!(x.trajectory().is_empty());
        assert!(o.trajectory().is_empty());
    }

    #[test]
    fn same_seed_trains_identical_tables() {
        let (x1, o1, s1) = trained(200, 99);
        let (x2, o2, s2) = trained(200, 99);
        assert_eq!(s1, s2);
        assert_eq!(x1.values(), x2.values());
        assert_eq!(o1.values(), o2.values());
    }

    #[test]
    fn invalid_config_is_rejected_before_playing() {
        let config = TrainingConfig {
            epsilon: -0.5,
            ..config(10, 1)
        };
        let (mut x, mut o) = build_agents(&TrainingConfig::default());
        let result = train(&mut x, &mut o, &config, &mut SeededRandomGenerator::new(1));
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
        assert_eq!(x.values(), build_agents(&TrainingConfig::default()).0.values());
    }

    #[test]
    fn values_near_a_win_rise_above_opening_values() {
        let (x, _, _) = trained(5_000, 17);
        let initial = 0.5;

        let mut near_win = Vec::new();
        let mut openings = Vec::new();
        for state in 0..NUM_STATES {
            let value = x.values()[state];
            if value == initial {
                continue;
            }
            let mut board = Board::from_state(state);
            if board.is_terminal(true) {
                continue;
            }
            let marks = |symbol: Symbol| {
                board
                    .grid()
                    .iter()
                    .flatten()
                    .filter(|c| **c == Some(symbol))
                    .count()
            };
            let (xs, os) = (marks(Symbol::X), marks(Symbol::O));

            if xs == 1 && os == 0 {
                openings.push(value);
            } else if xs == os && can_win_now(&board, Symbol::X) {
                near_win.push(value);
            }
        }

        let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
        assert!(!near_win.is_empty());
        assert!(!openings.is_empty());
        assert!(
            mean(near_win.as_slice()) > mean(openings.as_slice()),
            "near win {:.3}, openings {:.3}",
            mean(near_win.as_slice()),
            mean(openings.as_slice())
        );
    }

    fn can_win_now(board: &Board, symbol: Symbol) -> bool {
        board.empty_cells().into_iter().any(|(i, j)| {
            let next: StateId = board.state_after(i, j, symbol);
            Board::from_state(next).winning_symbol_if_any() == Some(symbol)
        })
    }
}
