use super::Board;
use crate::{tools, types::Side};

macro_rules! assert_perft {
    ($($name:ident: [$($row:literal),*], [$($nodes:expr),*],)*) => {$(
        #[test]
        fn $name() {
            let board = Board::from_layout(concat!($($row, " "),*)).unwrap();
            assert_eq!(board.side_to_move(), Side::PlayerOne);

            for (depth, &nodes) in [$($nodes),*].iter().enumerate() {
                assert_eq!(tools::count(&board, depth + 1), nodes);
            }
        }
    )*};
}

// Test cases from https://www.chessprogramming.org/Perft_Results, with the colors swapped
// so that the side to move is the lowercase one.
assert_perft!(
    starting_position: ["RNBQKBNR", "PPPPPPPP", "eeeeeeee", "eeeeeeee", "eeeeeeee", "eeeeeeee", "pppppppp", "rnbqkbnr"], [20, 400, 8902, 197281],
    kiwipete: ["ReeeKeeR", "PePPQPBe", "BNeePNPe", "eeepneee", "ePeepeee", "eeneeqeP", "pppbbppp", "reeekeer"], [48, 2039, 97862],
    position_3: ["eeeeeeee", "eePeeeee", "eeePeeee", "kpeeeeeR", "ereeePeK", "eeeeeeee", "eeeepepe", "eeeeeeee"], [14, 191, 2812, 43238],
    position_4: ["ReeeKeeR", "pPPPePPP", "eBeeeNBn", "Npeeeeee", "bbpepeee", "Qeeeenee", "pPepeepp", "reeqerke"], [6, 264, 9467],
    position_5: ["RNBQeKeR", "PPepBPPP", "eePeeeee", "eeeeeeee", "eebeeeee", "eeeeeeee", "pppenNpp", "rnbqkeer"], [44, 1486, 62379],
);

#[test]
fn duplicate_is_independent() {
    let original = Board::starting_position();
    let mut copy = original.duplicate();

    assert!(copy.attempt_move("e2e4".parse().unwrap(), Side::PlayerOne));
    assert_ne!(copy, original);
    assert_eq!(original, Board::starting_position());
}

#[test]
fn divide_matches_count() {
    let board = Board::starting_position();
    let split = tools::divide(&board, 3);

    assert_eq!(split.len(), 20);
    assert_eq!(split.iter().map(|&(_, nodes)| nodes).sum::<u64>(), tools::count(&board, 3));
}
