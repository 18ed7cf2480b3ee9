use std::{
    io::BufRead,
    path::{Path, PathBuf},
    process::ExitCode,
};

use chesslogic::{tools, Board, Game, GameStatus, Move};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Plays a two player game of chess on the console.
///
/// Moves are read from stdin in coordinate notation (`e2e4`, `e7e8n`) and submitted for
/// the side to move. The log level is taken from `RUST_LOG`.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Start from the position drawn in this file instead of the standard one.
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Print the perft node count of the position at this depth and exit.
    #[arg(long, value_name = "DEPTH")]
    perft: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();

    let args = Args::parse();

    let board = match &args.layout {
        Some(path) => match load_layout(path) {
            Ok(board) => board,
            Err(message) => {
                eprintln!("{message}");
                return ExitCode::FAILURE;
            }
        },
        None => Board::starting_position(),
    };

    match args.perft {
        Some(0) => {
            eprintln!("Perft depth must be at least 1");
            return ExitCode::FAILURE;
        }
        Some(depth) => {
            tools::perft(depth, &board);
        }
        None => message_loop(board),
    }

    ExitCode::SUCCESS
}

fn load_layout(path: &Path) -> Result<Board, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("Cannot read '{}': {e}", path.display()))?;
    let board: Board = text.parse().map_err(|e| format!("Invalid layout in '{}': {e}", path.display()))?;

    tracing::info!(path = %path.display(), "loaded layout");
    Ok(board)
}

fn message_loop(board: Board) {
    let initial = board.duplicate();
    let mut game = Game::new(board);

    print_board(&game);

    for line in std::io::stdin().lock().lines() {
        let Ok(command) = line else {
            break;
        };

        let tokens = command.split_whitespace().collect::<Vec<_>>();
        match tokens.as_slice() {
            [] => continue,

            ["board"] => print_board(&game),
            ["moves"] => print_moves(&game),
            ["new"] => {
                game = Game::new(initial.duplicate());
                print_board(&game);
            }
            ["perft", depth] => match depth.parse() {
                Ok(depth) if depth > 0 => {
                    tools::perft(depth, &game.snapshot());
                }
                _ => eprintln!("Invalid depth: '{depth}'"),
            },

            ["quit"] => break,

            [token] => match token.parse::<Move>() {
                Ok(mv) => make_move(&game, mv),
                Err(e) => eprintln!("Invalid move '{token}': {e}"),
            },

            _ => eprintln!("Unknown command: '{}'", command.trim_end()),
        }
    }
}

fn make_move(game: &Game, mv: Move) {
    let side = game.with_board(Board::side_to_move);

    if !game.player(side).apply_move(mv) {
        let reason = game.with_board(|board| board.validate(mv, side)).err();
        match reason {
            Some(reason) => println!("Illegal move {mv}: {reason}"),
            None => println!("Illegal move {mv}"),
        }
        return;
    }

    print_board(game);
}

fn print_board(game: &Game) {
    let board = game.snapshot();

    println!("{}", board.to_layout());
    match board.status() {
        GameStatus::Ongoing => println!("{} to move", board.side_to_move()),
        GameStatus::Check => println!("{} to move, in check", board.side_to_move()),
        GameStatus::Checkmate => println!("Checkmate, {} wins", !board.side_to_move()),
        GameStatus::Stalemate => println!("Stalemate"),
    }
}

fn print_moves(game: &Game) {
    let moves = game.with_board(Board::legal_moves);
    let moves = moves.iter().map(Move::to_string).collect::<Vec<_>>();

    println!("{}", moves.join(" "));
}
