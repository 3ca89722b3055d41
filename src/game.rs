use std::io::Write;

use log::debug;

use crate::board::{Board, Symbol};
use crate::display::{render, render_values};
use crate::error::Result;
use crate::participant::{MoveKind, Participant};
use crate::random::RandomGenerator;

/// Plays one game on `board` until it is over and returns the winner.
///
/// `first` moves first and the two strictly alternate. After every half-move the
/// new state is recorded by both participants, and once the game ends each one
/// is updated with its own reward. The board is written to `out` before every
/// move of a verbose participant, and once more at the end if either is verbose.
pub fn play_game<'a, R, W>(
    first: &mut Participant<'a>,
    second: &mut Participant<'a>,
    board: &mut Board,
    rng: &mut R,
    out: &mut W,
) -> Result<Option<Symbol>>
where
    R: RandomGenerator,
    W: Write,
{
    let mut first_to_move = true;
    while !board.is_terminal(false) {
        let current = if first_to_move { &mut *first } else { &mut *second };

        if current.is_verbose() {
            write!(out, "{}", render(board))?;
        }

        let before = board.clone();
        let played = current.choose_move(board, rng)?;
        if current.is_verbose() {
            match &played.kind {
                MoveKind::Exploration => writeln!(out, "Taking a random action")?,
                MoveKind::Greedy(values) => {
                    writeln!(out, "Taking a greedy action")?;
                    write!(out, "{}", render_values(&before, values))?;
                }
                MoveKind::Manual => {}
            }
        }

        let state = board.encode_state();
        first.record_state(state);
        second.record_state(state);
        first_to_move = !first_to_move;
    }

    if first.is_verbose() || second.is_verbose() {
        write!(out, "{}", render(board))?;
    }

    let winner = board.winner();
    debug!("game over, winner: {winner:?}");

    let first_reward = board.reward(first.symbol());
    first.update(first_reward);
    let second_reward = board.reward(second.symbol());
    second.update(second_reward);

    Ok(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use crate::enumerator::{StateRecord, enumerate_states};
    use crate::human::Human;
    use crate::random::{CustomNumberGenerator, SeededRandomGenerator};
    use crate::value_table::ValueTable;
    use std::io::{self, Cursor};

    fn greedy_pair() -> (Agent, Agent) {
        let records: Vec<StateRecord> = enumerate_states().collect();
        let x = Agent::builder(Symbol::X, ValueTable::initial_x(records.iter().copied()))
            .with_epsilon(0.0)
            .build();
        let o = Agent::builder(Symbol::O, ValueTable::initial_o(records.iter().copied()))
            .with_epsilon(0.0)
            .build();
        (x, o)
    }

    #[test]
    fn greedy_x_does_not_lose_from_an_empty_board() {
        // arrange
        let (mut x, mut o) = greedy_pair();
        let mut board = Board::new();
        let mut rng = CustomNumberGenerator::default();

        // act
        let winner = play_game(
            &mut Participant::Agent(&mut x),
            &mut Participant::Agent(&mut o),
            &mut board,
            &mut rng,
            &mut io::sink(),
        )
        .unwrap();

        // assert
        assert_ne!(winner, Some(Symbol::O));
        // X: (0,0) (0,2) (1,1) (2,0); O: (0,1) (1,0) (1,2)
        assert_eq!(winner, Some(Symbol::X));
        assert_eq!(board.cell(2, 0), Some(Symbol::X));
        assert_eq!(board.empty_cells(), vec![(2, 1), (2, 2)]);
    }

    #[test]
    fn both_agents_learn_from_every_half_move() {
        let (mut x, mut o) = greedy_pair();
        let before_x = x.values().clone();
        let before_o = o.values().clone();
        let mut board = Board::new();

        play_game(
            &mut Participant::Agent(&mut x),
            &mut Participant::Agent(&mut o),
            &mut board,
            &mut CustomNumberGenerator::default(),
            &mut io::sink(),
        )
        .unwrap();

        assert!(x.trajectory().is_empty());
        assert!(o.trajectory().is_empty());

        // The state after X's first move, (0,0), is seen by both agents.
        let opening = 1;
        assert!(x.values()[opening] > before_x[opening]);
        assert!(o.values()[opening] < before_o[opening]);
    }

    #[test]
    fn strictly_alternates_moves() {
        let mut rng = SeededRandomGenerator::new(5);
        for _ in 0..25 {
            let mut x = Agent::builder(Symbol::X, ValueTable::filled(0.5))
                .with_epsilon(1.0)
                .build();
            let mut o = Agent::builder(Symbol::O, ValueTable::filled(0.5))
                .with_epsilon(1.0)
                .build();
            let mut board = Board::new();

            play_game(
                &mut Participant::Agent(&mut x),
                &mut Participant::Agent(&mut o),
                &mut board,
                &mut rng,
                &mut io::sink(),
            )
            .unwrap();

            let marks = board.grid().iter().flatten();
            let xs = marks.clone().filter(|c| **c == Some(Symbol::X)).count();
            let os = marks.filter(|c| **c == Some(Symbol::O)).count();
            assert!(xs == os || xs == os + 1, "x={xs} o={os}");
            assert!(board.is_terminal(false));
        }
    }

    #[test]
    fn human_can_beat_an_untrained_agent() {
        // The greedy O agent takes the first empty cell in row-major order.
        let (_, mut o) = greedy_pair();
        let mut human = Human::new(
            Symbol::X,
            Box::new(Cursor::new(b"1,1\n0,2\n2,0\n".to_vec())),
            Box::new(io::sink()),
        );
        let mut board = Board::new();
        let mut shown = Vec::new();

        let winner = play_game(
            &mut Participant::Human(&mut human),
            &mut Participant::Agent(&mut o),
            &mut board,
            &mut CustomNumberGenerator::default(),
            &mut shown,
        )
        .unwrap();

        assert_eq!(winner, Some(Symbol::X));
        assert!(o.trajectory().is_empty());
        let text = String::from_utf8(shown).unwrap();
        // One rendering before each of the three human moves, one at the end.
        assert_eq!(text.matches("-------------\n").count(), 4 * 4);
    }

    #[test]
    fn verbose_agent_reports_its_choice() {
        let (mut x, mut o) = greedy_pair();
        x.set_verbose(true);
        let mut out = Vec::new();

        play_game(
            &mut Participant::Agent(&mut x),
            &mut Participant::Agent(&mut o),
            &mut Board::new(),
            &mut CustomNumberGenerator::default(),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Taking a greedy action").count(), 4);
        assert!(text.contains(" 0.50|"));
        assert!(text.contains(" 1.00|"));
    }
}
