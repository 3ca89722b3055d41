use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use td_tictactoe::board::{Board, Symbol};
use td_tictactoe::config::{DEFAULT_GAMES, TrainingConfig};
use td_tictactoe::game::play_game;
use td_tictactoe::human::Human;
use td_tictactoe::participant::Participant;
use td_tictactoe::random::SeededRandomGenerator;
use td_tictactoe::training::{build_agents, train};

/// Train two tic-tac-toe agents against each other, then play the result.
#[derive(Parser)]
#[command(name = "td-tictactoe")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Probability of a random move during training and play
    #[arg(long, default_value_t = 0.1)]
    epsilon: f64,

    /// TD(0) step size
    #[arg(long, default_value_t = 0.5)]
    learning_rate: f64,

    /// Number of self-play games
    #[arg(long, default_value_t = DEFAULT_GAMES)]
    games: usize,

    /// Seed for reproducible training and play
    #[arg(long)]
    seed: Option<u64>,

    /// Symbol you play; X always moves first
    #[arg(long, value_enum, default_value_t = Side::O)]
    play_as: Side,

    /// Train and exit without an interactive game
    #[arg(long)]
    no_play: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Symbol {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Symbol::X,
            Side::O => Symbol::O,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = TrainingConfig {
        epsilon: cli.epsilon,
        learning_rate: cli.learning_rate,
        games: cli.games,
        seed: cli.seed,
        ..TrainingConfig::default()
    };
    config.validate().context("checking training settings")?;

    let mut rng = SeededRandomGenerator::from_optional_seed(config.seed);
    let (mut agent_x, mut agent_o) = build_agents(&config);
    train(&mut agent_x, &mut agent_o, &config, &mut rng).context("training agents")?;

    if cli.no_play {
        return Ok(());
    }

    let human_symbol = Symbol::from(cli.play_as);
    let mut human = Human::stdio(human_symbol);
    let opponent = match human_symbol.opponent() {
        Symbol::X => &mut agent_x,
        Symbol::O => &mut agent_o,
    };
    opponent.set_verbose(true);
    info!("you play {human_symbol}, enter moves as row,column");

    loop {
        let mut agent = Participant::Agent(&mut *opponent);
        let mut person = Participant::Human(&mut human);
        let (first, second) = if human_symbol == Symbol::X {
            (&mut person, &mut agent)
        } else {
            (&mut agent, &mut person)
        };

        let winner = play_game(first, second, &mut Board::new(), &mut rng, &mut io::stdout())
            .context("playing against the agent")?;
        match winner {
            Some(symbol) if symbol == human_symbol => println!("You win!"),
            Some(_) => println!("The agent wins."),
            None => println!("Draw."),
        }

        if !human.confirm("Play again? [Y/n]: ")? {
            break;
        }
    }

    Ok(())
}
