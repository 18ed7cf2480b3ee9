mod perft;

pub use perft::{count, divide, perft};
