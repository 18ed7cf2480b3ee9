//! Perft used for testing and debugging the rule set.
//! This is achieved by enumerating the number of leaf nodes for a given depth.
//!
//! See [Perft](https://www.chessprogramming.org/Perft) for more information.

use std::time::Instant;

use crate::{board::Board, types::Move};

/// Runs a performance test on the `Board` with the specified depth, printing the node
/// count of every root move.
pub fn perft(depth: usize, board: &Board) -> u64 {
    println!("{}", "-".repeat(60));
    println!("{:>12} {:>12} {:>13} {:>15}", "Move", "Nodes", "Elapsed", "NPS");
    println!("{}", "-".repeat(60));

    let now = Instant::now();

    let mut nodes = 0;

    for (index, (mv, count)) in divide(board, depth).into_iter().enumerate() {
        nodes += count;
        println!("{:>3} {mv:>8} {count:>12}", index + 1);
    }

    let seconds = now.elapsed().as_secs_f64();
    let knps = nodes as f64 / seconds / 1000.0;

    println!("{}", "-".repeat(60));
    println!("{:>12} {nodes:>12} {seconds:>12.3}s {knps:>15.3} kN/s", "Total");
    println!("{}", "-".repeat(60));

    nodes
}

/// Counts the leaf nodes of the legal move tree of `board` at the specified depth.
pub fn count(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves.into_iter().map(|mv| count(&play(board, mv), depth - 1)).sum()
}

/// Splits the node count of `board` by root move.
///
/// # Panics
///
/// Panics if `depth` is zero.
pub fn divide(board: &Board, depth: usize) -> Vec<(Move, u64)> {
    assert!(depth > 0, "perft divide needs a depth of at least one");

    board.legal_moves().into_iter().map(|mv| (mv, count(&play(board, mv), depth - 1))).collect()
}

fn play(board: &Board, mv: Move) -> Board {
    let mut child = board.duplicate();
    let side = child.side_to_move();
    child.attempt_move(mv, side);
    child
}
