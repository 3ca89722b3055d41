extern crate td_tictactoe;

use std::io;

use td_tictactoe::board::Board;
use td_tictactoe::config::TrainingConfig;
use td_tictactoe::game::play_game;
use td_tictactoe::participant::Participant;
use td_tictactoe::random::SeededRandomGenerator;
use td_tictactoe::training::{build_agents, train};

fn main() {
    // Short, reproducible training run
    let config = TrainingConfig {
        games: 2_000,
        seed: Some(42),
        ..TrainingConfig::default()
    };
    let (mut agent_x, mut agent_o) = build_agents(&config);
    let mut rng = SeededRandomGenerator::from_optional_seed(config.seed);
    let summary = train(&mut agent_x, &mut agent_o, &config, &mut rng).unwrap();

    println!(
        "After {} games: x won {}, o won {}, {} draws",
        summary.games, summary.x_wins, summary.o_wins, summary.draws
    );

    // Watch the trained X agent play one more game, showing the values it weighs
    agent_x.set_verbose(true);
    let winner = play_game(
        &mut Participant::Agent(&mut agent_x),
        &mut Participant::Agent(&mut agent_o),
        &mut Board::new(),
        &mut rng,
        &mut io::stdout(),
    )
    .unwrap();

    match winner {
        Some(symbol) => println!("{symbol} wins"),
        None => println!("Draw"),
    }
}
