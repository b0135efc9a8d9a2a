use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// Owns the board and drives it from ticks, selections and resets.
#[derive(Clone, Debug)]
pub struct Game<G = RandomBoardGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    flood: FloodEngine,
    attempts: Saturating<Attempts>,
    target: Color,
    animating: bool,
    status: GameStatus,
}

impl<G: BoardGenerator> Game<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        config.validate()?;
        let board = generator.generate(config)?;
        let target = board.origin().color();
        log::debug!(
            "New {}x{} game with {} colors, {} attempts allowed",
            config.size,
            config.size,
            config.colors,
            config.max_attempts()
        );

        Ok(Self {
            config,
            generator,
            board,
            flood: FloodEngine::new(),
            attempts: Saturating(0),
            target,
            animating: false,
            status: Default::default(),
        })
    }

    /// Throws the current game away and generates a new board with the same configuration.
    ///
    /// Accepted at any time, including mid-flood and after the game ended.
    pub fn reset(&mut self) -> Result<()> {
        self.rebuild(self.config)
    }

    /// Like [`Game::reset`] but with a new configuration. On error the current game is left untouched.
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<()> {
        self.rebuild(config)
    }

    fn rebuild(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        let board = self.generator.generate(config)?;

        self.target = board.origin().color();
        self.board = board;
        self.config = config;
        self.flood = FloodEngine::new();
        self.attempts = Saturating(0);
        self.animating = false;
        self.status = GameStatus::Playing;
        log::debug!("Game reset to {:?}", config);
        Ok(())
    }
}

impl<G> Game<G> {
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn flood(&self) -> &FloodEngine {
        &self.flood
    }

    pub fn flood_phase(&self) -> FloodPhase {
        self.flood.phase()
    }

    pub fn attempts(&self) -> Attempts {
        self.attempts.0
    }

    pub fn max_attempts(&self) -> Attempts {
        self.config.max_attempts()
    }

    pub fn target_color(&self) -> Color {
        self.target
    }

    /// A selection was accepted and its episode has not completed yet.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_finished()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    /// Advances the flood by one adjacency layer.
    ///
    /// Without a pending selection this re-walks the flooded region with the current target, which
    /// also absorbs cells around the origin that share its color.
    pub fn step(&mut self) -> TickOutcome {
        if self.status.is_finished() {
            return TickOutcome::NoChange;
        }

        let step = self.flood.step(&mut self.board, self.target);
        if step.restarted {
            log::trace!("Idle flood episode from the origin with {:?}", self.target);
        }
        let episode_complete = step.queued == 0;
        if episode_complete {
            self.animating = false;
        }

        match self.evaluate_game_over() {
            GameStatus::Won => TickOutcome::Won,
            GameStatus::Lost => TickOutcome::Lost,
            GameStatus::Playing if episode_complete => TickOutcome::EpisodeComplete,
            GameStatus::Playing => TickOutcome::Flooded,
        }
    }

    /// Steps until the running episode completes or the game ends.
    pub fn settle(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::NoChange;
        // an episode paints each cell at most once, plus the restart step
        for _ in 0..=self.board.total_cells() + 1 {
            outcome = self.step();
            if matches!(outcome, TickOutcome::Flooded) {
                continue;
            }
            break;
        }
        outcome
    }

    /// Picks the color of the cell at `coords` as the new target.
    ///
    /// Ignored while an episode is animating, after the game ended, outside the board, or on a
    /// flooded cell.
    pub fn select(&mut self, coords: Coord2) -> SelectOutcome {
        match self.board.validate_coords(coords) {
            Some(index) => self.select_index(index),
            None => SelectOutcome::NoChange,
        }
    }

    pub fn select_index(&mut self, index: CellIndex) -> SelectOutcome {
        if self.animating || self.status.is_finished() || index >= self.board.total_cells() {
            return SelectOutcome::NoChange;
        }

        let cell = self.board.cell(index);
        if cell.is_flooded() {
            return SelectOutcome::NoChange;
        }

        self.attempts += 1;
        self.target = cell.color();
        self.animating = true;
        // an idle episode only repaints flooded cells with their own color, dropping it loses nothing
        self.flood.restart();
        log::debug!(
            "Selected {:?} at {:?}, attempt {}/{}",
            self.target,
            cell.coords(),
            self.attempts,
            self.max_attempts()
        );
        SelectOutcome::Selected
    }

    /// Running out of attempts loses regardless of the board, otherwise a fully flooded board wins.
    pub fn evaluate_game_over(&mut self) -> GameStatus {
        if self.status.is_finished() {
            return self.status;
        }

        if self.attempts.0 > self.max_attempts() {
            self.status = GameStatus::Lost;
        } else if self.board.is_fully_flooded() {
            self.status = GameStatus::Won;
        }

        if self.status.is_finished() {
            log::debug!(
                "Game over: {:?} after {}/{} attempts",
                self.status,
                self.attempts,
                self.max_attempts()
            );
        }
        self.status
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_attempts(&mut self, attempts: Attempts) {
        self.attempts = Saturating(attempts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;
    use ndarray::{Array2, arr2};
    use Color::*;

    fn fixed(colors: Array2<Color>) -> Game<FixedBoardGenerator> {
        let palette = Palette::new([Red, Green, Blue]).unwrap();
        let generator = FixedBoardGenerator::new(palette, colors).unwrap();
        let config = generator.config();
        Game::new(config, generator).unwrap()
    }

    fn flooded<G>(game: &Game<G>) -> Vec<Coord2> {
        game.board()
            .cells()
            .filter(|cell| cell.is_flooded())
            .map(Cell::coords)
            .collect()
    }

    #[test]
    fn smallest_game() {
        let config = GameConfig::new(2, 3).unwrap();
        let game = Game::new(config, RandomBoardGenerator::from_seed(5)).unwrap();

        assert_eq!(game.board().cells().count(), 4);
        assert_eq!(game.max_attempts(), 2);
        assert_eq!(game.attempts(), 0);
        assert!(game.board().origin().is_flooded());
        assert_eq!(game.target_color(), game.board().origin().color());
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.flood_phase(), FloodPhase::Idle);
        assert!(!game.is_animating());
    }

    #[test]
    fn rejects_invalid_config_without_building() {
        let result = Game::new(
            GameConfig::new_unchecked(27, 4),
            RandomBoardGenerator::from_seed(0),
        );

        assert_eq!(result.err(), Some(ConfigError::SizeOutOfRange(27).into()));
    }

    #[test]
    fn fully_flooded_board_wins() {
        let config = GameConfig::new(10, 4).unwrap();
        let mut game = Game::new(config, RandomBoardGenerator::from_seed(9)).unwrap();
        game.board_mut().flood_all();

        assert_eq!(game.evaluate_game_over(), GameStatus::Won);
        assert!(game.is_game_over());
        assert!(game.is_won());
    }

    #[test]
    fn too_many_attempts_loses_even_when_flooded() {
        let config = GameConfig::new(6, 5).unwrap();
        let mut game = Game::new(config, RandomBoardGenerator::from_seed(2)).unwrap();
        game.board_mut().flood_all();
        game.set_attempts(game.max_attempts() + 1);

        assert_eq!(game.evaluate_game_over(), GameStatus::Lost);
        assert!(game.is_game_over());
        assert!(!game.is_won());
    }

    #[test]
    fn max_attempts_alone_does_not_lose() {
        let config = GameConfig::new(6, 5).unwrap();
        let mut game = Game::new(config, RandomBoardGenerator::from_seed(2)).unwrap();
        game.set_attempts(game.max_attempts());

        assert_eq!(game.evaluate_game_over(), GameStatus::Playing);
    }

    #[test]
    fn evaluate_game_over_is_idempotent() {
        let config = GameConfig::new(4, 3).unwrap();
        let mut game = Game::new(config, RandomBoardGenerator::from_seed(4)).unwrap();
        game.set_attempts(game.max_attempts() + 1);
        assert_eq!(game.evaluate_game_over(), GameStatus::Lost);

        // a now-full board must not flip the finished result
        game.board_mut().flood_all();
        game.set_attempts(0);
        assert_eq!(game.evaluate_game_over(), GameStatus::Lost);
        assert_eq!(game.evaluate_game_over(), GameStatus::Lost);
    }

    #[test]
    fn selection_counts_attempt_and_sets_target() {
        let mut game = fixed(arr2(&[[Red, Green, Blue], [Green, Green, Red], [Blue, Red, Red]]));

        assert_eq!(game.select((0, 2)), SelectOutcome::Selected);
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.target_color(), Blue);
        assert!(game.is_animating());

        assert_eq!(game.select((1, 2)), SelectOutcome::NoChange);
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.target_color(), Blue);
    }

    #[test]
    fn selection_ignores_flooded_and_outside_cells() {
        let mut game = fixed(arr2(&[[Red, Green, Blue], [Green, Green, Red], [Blue, Red, Red]]));

        assert_eq!(game.select((0, 0)), SelectOutcome::NoChange);
        assert_eq!(game.select((3, 0)), SelectOutcome::NoChange);
        assert_eq!(game.select_index(9), SelectOutcome::NoChange);
        assert_eq!(game.attempts(), 0);
        assert!(!game.is_animating());
    }

    #[test]
    fn ticks_spread_one_ring_each() {
        let mut game = fixed(arr2(&[[Red, Green, Blue], [Green, Green, Red], [Blue, Red, Red]]));
        game.select((0, 1));

        assert_eq!(game.step(), TickOutcome::Flooded);
        assert_eq!(flooded(&game), [(0, 0), (0, 1), (1, 0)]);

        assert_eq!(game.step(), TickOutcome::Flooded);
        assert_eq!(flooded(&game), [(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert!(game.is_animating());
        assert_eq!(game.select((0, 2)), SelectOutcome::NoChange);

        assert_eq!(game.step(), TickOutcome::EpisodeComplete);
        assert_eq!(flooded(&game), [(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert!(game.board().cells().filter(|c| c.is_flooded()).all(|c| c.color() == Green));
        assert!(!game.is_animating());
        assert_eq!(game.flood_phase(), FloodPhase::EpisodeComplete);

        assert_eq!(game.select((0, 2)), SelectOutcome::Selected);
        assert_eq!(game.attempts(), 2);
        assert_eq!(game.flood_phase(), FloodPhase::Idle);
    }

    #[test]
    fn empty_next_layer_completes_on_same_tick() {
        let mut game = fixed(arr2(&[[Red, Blue, Blue], [Blue, Blue, Blue], [Blue, Blue, Green]]));
        game.select((2, 2));

        assert_eq!(game.step(), TickOutcome::EpisodeComplete);
        assert!(!game.is_animating());
        assert_eq!(game.board().origin().color(), Green);

        // the idle tick after starts over from the origin and finds nothing either
        assert_eq!(game.step(), TickOutcome::EpisodeComplete);
        assert_eq!(game.flood().visited(), &BTreeSet::from([ORIGIN]));
        assert_eq!(flooded(&game), [(0, 0)]);
    }

    #[test]
    fn selection_restarts_idle_episode() {
        let mut game = fixed(arr2(&[[Red, Red, Blue], [Red, Green, Blue], [Green, Green, Blue]]));
        assert_eq!(game.step(), TickOutcome::Flooded);
        assert_eq!(game.flood_phase(), FloodPhase::Flooding);

        assert_eq!(game.select((1, 1)), SelectOutcome::Selected);

        assert_eq!(game.flood_phase(), FloodPhase::Idle);
        assert_eq!(game.flood().frontier().len(), 1);
        assert_eq!(game.settle(), TickOutcome::EpisodeComplete);
        assert_eq!(
            flooded(&game),
            [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn idle_ticks_absorb_origin_region() {
        let mut game = fixed(arr2(&[[Red, Red, Blue], [Red, Green, Blue], [Green, Green, Blue]]));

        assert_eq!(game.settle(), TickOutcome::EpisodeComplete);

        assert_eq!(flooded(&game), [(0, 0), (0, 1), (1, 0)]);
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn plays_to_a_win() {
        let mut game = fixed(arr2(&[[Red, Red, Green], [Green, Blue, Green], [Green, Green, Green]]));

        game.select((1, 0));
        assert_eq!(game.settle(), TickOutcome::EpisodeComplete);
        assert_eq!(game.board().flooded_count(), 8);
        assert!(!game.board()[(1, 1)].is_flooded());

        assert_eq!(game.select((1, 1)), SelectOutcome::Selected);
        assert_eq!(game.settle(), TickOutcome::Won);
        assert!(game.is_won());
        assert_eq!(game.attempts(), 2);

        // frozen once over
        assert_eq!(game.step(), TickOutcome::NoChange);
        assert_eq!(game.select((2, 2)), SelectOutcome::NoChange);
        assert_eq!(game.attempts(), 2);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let mut game = fixed(arr2(&[[Red, Blue, Red], [Blue, Red, Blue], [Red, Blue, Green]]));
        assert_eq!(game.max_attempts(), 3);

        let mut last = TickOutcome::NoChange;
        for coords in [(0, 1), (0, 2), (0, 1), (2, 2), (1, 2)] {
            if game.select(coords).has_update() {
                last = game.settle();
            }
        }

        assert_eq!(game.attempts(), 4);
        assert_eq!(last, TickOutcome::Lost);
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn attempts_never_decrease_until_reset() {
        let config = GameConfig::new(8, 4).unwrap();
        let mut game = Game::new(config, RandomBoardGenerator::from_seed(21)).unwrap();

        let mut previous = game.attempts();
        'play: for row in 0..8 {
            for col in 0..8 {
                game.select((row, col));
                game.settle();
                assert!(game.attempts() >= previous);
                previous = game.attempts();
                if game.is_game_over() {
                    break 'play;
                }
            }
        }
        assert!(previous > 0);

        game.reset().unwrap();
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn reset_rebuilds_everything() {
        let config = GameConfig::new(12, 5).unwrap();
        let mut game = Game::new(config, RandomBoardGenerator::from_seed(8)).unwrap();
        let before = game.board().colors();
        let unflooded = game
            .board()
            .cells()
            .find(|cell| !cell.is_flooded())
            .map(Cell::coords)
            .unwrap();
        game.select(unflooded);
        game.step();

        game.reset().unwrap();

        assert_ne!(game.board().colors(), before);
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.flood_phase(), FloodPhase::Idle);
        assert!(!game.is_animating());
        assert_eq!(game.board().flooded_count(), 1);
        assert!(game.board().origin().is_flooded());
        assert_eq!(game.target_color(), game.board().origin().color());
    }

    #[test]
    fn reset_revives_finished_game() {
        let mut game = fixed(arr2(&[[Red, Green, Blue], [Green, Green, Red], [Blue, Red, Red]]));
        game.set_attempts(10);
        assert_eq!(game.step(), TickOutcome::Lost);

        game.reset().unwrap();

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.select((2, 2)), SelectOutcome::Selected);
    }

    #[test]
    fn reconfigure_keeps_game_on_error() {
        let config = GameConfig::new(5, 3).unwrap();
        let mut game = Game::new(config, RandomBoardGenerator::from_seed(13)).unwrap();
        let before = game.board().clone();

        assert_eq!(
            game.reconfigure(GameConfig::new_unchecked(5, 12)),
            Err(ConfigError::ColorCountOutOfRange(12).into())
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.config(), config);

        game.reconfigure(GameConfig::new(20, 8).unwrap()).unwrap();
        assert_eq!(game.board().size(), 20);
        assert_eq!(game.board().palette().len(), 8);
        assert_eq!(game.max_attempts(), 20 + 5 * 6);
    }
}
