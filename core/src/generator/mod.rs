use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Produces the board for a new game or a reset. Each call yields a fresh board.
pub trait BoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Board>;
}
