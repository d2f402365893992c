mod config;
mod render;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tictactoe_engine::{
    GameError, GameMode, GameRegistry, GameStatus, log, logger, make_bot_move,
};

use config::{CONFIG_FILE, load_config};

const SESSION_ID: &str = "local";

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum ModeArg {
    Classic,
    Random,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => GameMode::Classic,
            ModeArg::Random => GameMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    /// Game mode; overrides the config file
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Fixed RNG seed for reproducible games; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args.config)?;

    logger::init(config.log_prefix.clone());

    let mode = args.mode.map(GameMode::from).unwrap_or(config.mode);
    let seed = args.seed.or(config.seed);

    let mut registry = GameRegistry::new();
    start_game(&mut registry, mode, seed)?;

    println!("Enter a move as 'row col', 'new' for a new game, 'quit' to exit.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "new" => start_game(&mut registry, mode, seed)?,
            input => handle_move(&mut registry, input)?,
        }
    }

    registry.remove(SESSION_ID);
    Ok(())
}

fn start_game(
    registry: &mut GameRegistry,
    mode: GameMode,
    seed: Option<u64>,
) -> Result<(), GameError> {
    let game = match seed {
        Some(seed) => registry.new_game_with_seed(SESSION_ID, mode, seed),
        None => registry.new_game(SESSION_ID, mode),
    };

    if mode == GameMode::Random {
        game.randomize_sides()?;
    }

    println!("{}", render::describe_start(game));
    println!("{}", render::render_board(game.board()));
    Ok(())
}

fn handle_move(registry: &mut GameRegistry, input: &str) -> Result<(), GameError> {
    let Some((row, col)) = parse_move(input) else {
        println!("Could not read that. Enter a move as 'row col', e.g. '0 2'.");
        return Ok(());
    };

    let Some(game) = registry.get_mut(SESSION_ID) else {
        println!("No game running. Enter 'new' to start one.");
        return Ok(());
    };

    let applied = match game.place_mark(row, col) {
        Ok(applied) => applied,
        Err(err) => {
            println!("Move rejected: {err}");
            return Ok(());
        }
    };
    println!("Your move placed {}.", applied.mark);

    if game.status() == GameStatus::InProgress {
        if let Some(pos) = make_bot_move(game)? {
            log!("Bot moved to ({}, {})", pos.row, pos.col);
            println!("Bot moved to ({}, {}).", pos.row, pos.col);
        }
    }

    println!("{}", render::render_board(game.board()));
    if let Some(outcome) = render::describe_outcome(game) {
        println!("{outcome}");
        println!("Enter 'new' to play again.");
    }

    Ok(())
}

fn parse_move(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}
