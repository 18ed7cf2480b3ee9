mod moves;
mod piece;
mod side;
mod square;

pub use moves::*;
pub use piece::*;
pub use side::*;
pub use square::*;
