use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Purely random boards: a palette drawn without replacement from [`Color::ALL`], then every cell painted
/// uniformly from that palette.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator<R = SmallRng> {
    rng: R,
}

impl RandomBoardGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(&mut self, config: GameConfig) -> Result<Board> {
        config.validate()?;

        let palette = Palette::new(
            Color::ALL
                .choose_multiple(&mut self.rng, config.colors.into())
                .copied(),
        )?;

        let size = usize::from(config.size);
        let choices = usize::from(palette.len());
        let colors = Array2::from_shape_simple_fn((size, size), || {
            palette[self.rng.random_range(0..choices)]
        });

        log::debug!(
            "Generated {}x{} board with palette {:?}",
            config.size,
            config.size,
            palette.as_slice()
        );
        Board::from_colors(palette, colors)
    }
}
