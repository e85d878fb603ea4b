//! # Generation Module
//!
//! Game configuration and the random initial population.
//!
//! A [`GameConfig`] is validated as a whole before anything is generated:
//! every violated rule is reported, not only the first one. Generation then
//! places every agent on a uniformly random free cell.

pub mod population;

pub use population::*;

use crate::{config, SimError, SimResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration of a single game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// World width in cells
    pub x_dim: u32,
    /// World height in cells
    pub y_dim: u32,
    /// Total number of zombies
    pub zombies: u32,
    /// Total number of humans
    pub humans: u32,
    /// How many of the zombies are player-controlled
    pub player_zombies: u32,
    /// How many of the humans are player-controlled
    pub player_humans: u32,
    /// Maximum number of turns
    pub turns: u32,
    /// Random seed; `None` seeds from system entropy
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration with no player-controlled agents.
    ///
    /// # Examples
    ///
    /// ```
    /// use zombies_vs_humans::GameConfig;
    ///
    /// let config = GameConfig::new(10, 10, 2, 5, 100);
    /// assert!(config.validate().is_ok());
    /// assert_eq!(config.agent_count(), 7);
    /// ```
    pub fn new(x_dim: u32, y_dim: u32, zombies: u32, humans: u32, turns: u32) -> Self {
        Self {
            x_dim,
            y_dim,
            zombies,
            humans,
            player_zombies: 0,
            player_humans: 0,
            turns,
            seed: None,
        }
    }

    /// Creates a small, seeded configuration for tests.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(10, 10, 3, 12, 50)
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the player-controlled subsets.
    pub fn with_players(mut self, player_zombies: u32, player_humans: u32) -> Self {
        self.player_zombies = player_zombies;
        self.player_humans = player_humans;
        self
    }

    /// Total number of agents.
    pub fn agent_count(&self) -> u64 {
        self.zombies as u64 + self.humans as u64
    }

    /// Number of cells in the world.
    pub fn cell_count(&self) -> u64 {
        self.x_dim as u64 * self.y_dim as u64
    }

    /// Lists every rule this configuration breaks.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.x_dim == 0 {
            errors.push("Horizontal dimension (x) must be > 0".to_string());
        }
        if self.y_dim == 0 {
            errors.push("Vertical dimension (y) must be > 0".to_string());
        }
        if self.zombies < self.player_zombies {
            errors.push(format!(
                "There are more player-controlled zombies ({}) than total zombies ({})",
                self.player_zombies, self.zombies
            ));
        }
        if self.humans < self.player_humans {
            errors.push(format!(
                "There are more player-controlled humans ({}) than total humans ({})",
                self.player_humans, self.humans
            ));
        }
        if self.agent_count() > self.cell_count() {
            errors.push(format!(
                "Too many agents ({}) for the game world (which contains {} cells)",
                self.agent_count(),
                self.cell_count()
            ));
        }

        errors
    }

    /// Validates the configuration, collecting all errors.
    pub fn validate(&self) -> SimResult<()> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SimError::InvalidConfig(errors))
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            config::DEFAULT_X_DIM,
            config::DEFAULT_Y_DIM,
            config::DEFAULT_ZOMBIES,
            config::DEFAULT_HUMANS,
            config::DEFAULT_TURNS,
        )
    }
}

/// Trait for generators of initial game content.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GameConfig, rng: &mut StdRng) -> SimResult<T>;

    /// Validates that the generated content matches the configuration.
    fn validate(&self, content: &T, config: &GameConfig) -> SimResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates the game's random number generator from the config.
    ///
    /// Seeded configs always produce the same stream; unseeded ones draw
    /// from system entropy.
    pub fn create_rng(config: &GameConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::for_testing(1).validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = GameConfig::new(0, 0, 0, 0, 10);
        assert_eq!(
            config.errors(),
            vec![
                "Horizontal dimension (x) must be > 0".to_string(),
                "Vertical dimension (y) must be > 0".to_string(),
            ]
        );
    }

    #[test]
    fn test_all_errors_are_collected() {
        let config = GameConfig::new(2, 2, 3, 2, 10).with_players(4, 3);
        let errors = config.errors();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors[0],
            "There are more player-controlled zombies (4) than total zombies (3)"
        );
        assert_eq!(
            errors[1],
            "There are more player-controlled humans (3) than total humans (2)"
        );
        assert_eq!(
            errors[2],
            "Too many agents (5) for the game world (which contains 4 cells)"
        );

        match config.validate() {
            Err(SimError::InvalidConfig(reported)) => assert_eq!(reported, errors),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_full_world_is_allowed() {
        assert!(GameConfig::new(3, 3, 4, 5, 10).validate().is_ok());
    }

    #[test]
    fn test_create_rng_is_deterministic() {
        let config = GameConfig::for_testing(777);
        let mut a = utils::create_rng(&config);
        let mut b = utils::create_rng(&config);
        let xs: Vec<u32> = (0..10).map(|_| a.gen()).collect();
        let ys: Vec<u32> = (0..10).map(|_| b.gen()).collect();
        assert_eq!(xs, ys);
    }
}
