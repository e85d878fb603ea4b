//! # Game State Module
//!
//! The turn scheduler.
//!
//! [`Game`] owns the world, the turn order and the random number generator.
//! Each turn it shuffles the order, lets every agent play, keeps the population
//! counts current and decides when the game is over. Rendering and player
//! input are injected on every call, so a game runs just as well headless.

use crate::generation::utils::create_rng;
use crate::{
    fisher_yates_shuffle, play_turn, Agent, AgentId, AgentKind, AgentMovement, GameConfig,
    Generator, InputSource, PopulationGenerator, ReadOnlyWorld, SimResult, UserInterface, World,
};
use log::{debug, info};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Population counts per kind and control type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub zombies: usize,
    pub player_zombies: usize,
    pub humans: usize,
    pub player_humans: usize,
}

impl PopulationStats {
    /// Counts a roster from scratch.
    pub fn count(agents: &[Agent]) -> Self {
        let mut stats = Self::default();
        for agent in agents {
            let player = agent.movement() == AgentMovement::Player;
            match agent.kind() {
                AgentKind::Zombie => {
                    stats.zombies += 1;
                    stats.player_zombies += player as usize;
                }
                AgentKind::Human => {
                    stats.humans += 1;
                    stats.player_humans += player as usize;
                }
            }
        }
        stats
    }

    /// Total number of agents.
    pub fn total(&self) -> usize {
        self.zombies + self.humans
    }

    /// Ordered key/value pairs for the info panel.
    pub fn info_panel(&self, turn: u32) -> Vec<(String, usize)> {
        vec![
            ("Turn".to_string(), turn as usize),
            ("Zombies".to_string(), self.zombies),
            ("Player zombies".to_string(), self.player_zombies),
            ("Humans".to_string(), self.humans),
            ("Player humans".to_string(), self.player_humans),
        ]
    }
}

/// Game completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// The last human was infected during `turn`
    ZombiesWon { turn: u32 },
    /// The turn budget ran out with humans still alive
    TurnsExhausted { turns: u32 },
}

impl GameCompletionState {
    /// Message announcing the result to the player.
    pub fn describe(&self) -> String {
        match self {
            GameCompletionState::Playing => "Game in progress".to_string(),
            GameCompletionState::ZombiesWon { turn } => format!("Zombies won at turn {}", turn),
            GameCompletionState::TurnsExhausted { turns } => {
                format!("Humans survived {} turns", turns)
            }
        }
    }
}

/// Serializable summary of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub completion_state: GameCompletionState,
    pub turns_played: u32,
    pub turn_budget: u32,
    pub population: PopulationStats,
}

/// Turn scheduler for one game.
#[derive(Debug, Clone)]
pub struct Game {
    /// The world with every agent in it
    world: World,
    /// Turn order; reshuffled every turn
    roster: Vec<AgentId>,
    /// Shared stream for placement and shuffling
    rng: StdRng,
    /// Maximum number of turns
    turn_budget: u32,
    /// Number of turns started so far
    turn: u32,
    stats: PopulationStats,
    completion_state: GameCompletionState,
}

impl Game {
    /// Sets up a game from a configuration, seeding the RNG from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use zombies_vs_humans::{Game, GameConfig};
    ///
    /// let game = Game::new(GameConfig::for_testing(12345)).unwrap();
    /// assert_eq!(game.turn(), 0);
    /// assert_eq!(game.stats().total(), 15);
    /// ```
    pub fn new(config: GameConfig) -> SimResult<Self> {
        let rng = create_rng(&config);
        Self::with_rng(config, rng)
    }

    /// Sets up a game using an injected RNG.
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> SimResult<Self> {
        let world = PopulationGenerator::new().generate(&config, &mut rng)?;
        Ok(Self::from_world(world, config.turns, rng))
    }

    /// Wraps an already populated world.
    pub fn from_world(world: World, turn_budget: u32, rng: StdRng) -> Self {
        let roster = (0..world.agents().len()).collect();
        let stats = PopulationStats::count(world.agents());
        info!(
            "New game: {} zombies, {} humans, {} turns",
            stats.zombies, stats.humans, turn_budget
        );
        Self {
            world,
            roster,
            rng,
            turn_budget,
            turn: 0,
            stats,
            completion_state: GameCompletionState::Playing,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current turn order.
    pub fn roster(&self) -> &[AgentId] {
        &self.roster
    }

    pub fn stats(&self) -> &PopulationStats {
        &self.stats
    }

    /// Number of turns started so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn turn_budget(&self) -> u32 {
        self.turn_budget
    }

    pub fn completion_state(&self) -> GameCompletionState {
        self.completion_state
    }

    pub fn is_game_ended(&self) -> bool {
        self.completion_state != GameCompletionState::Playing
    }

    /// Reorders the roster with a Fisher-Yates shuffle.
    pub fn shuffle_roster(&mut self) {
        fisher_yates_shuffle(&mut self.roster, &mut self.rng);
        debug!("turn {} order: {:?}", self.turn, self.roster);
    }

    /// Plays one full turn: shuffle, then every agent in the new order.
    ///
    /// Stops early once the last human is infected. Does nothing if the game
    /// has already ended. Errors only on world corruption.
    pub fn play_turn(
        &mut self,
        ui: &mut dyn UserInterface,
        input: &mut dyn InputSource,
    ) -> SimResult<()> {
        if self.check_finished() {
            return Ok(());
        }

        ui.render_message(&format!("Turn {}", self.turn));
        ui.render_info(&self.stats.info_panel(self.turn));

        self.shuffle_roster();

        for index in 0..self.roster.len() {
            let id = self.roster[index];
            let result = play_turn(&mut self.world, id, input)?;
            ui.render_message(&result.message);

            if result.population_changed {
                self.stats = PopulationStats::count(self.world.agents());
                ui.render_info(&self.stats.info_panel(self.turn));
                if self.stats.humans == 0 {
                    self.completion_state = GameCompletionState::ZombiesWon { turn: self.turn };
                    break;
                }
            }
        }

        ui.render_world(&self.world);
        self.turn += 1;
        self.check_finished();
        Ok(())
    }

    /// Runs the game to completion and reports how it ended.
    pub fn run(
        &mut self,
        ui: &mut dyn UserInterface,
        input: &mut dyn InputSource,
    ) -> SimResult<GameCompletionState> {
        ui.initialize(self.world.x_dim() as u32, self.world.y_dim() as u32);
        ui.render_world(&self.world);

        while !self.check_finished() {
            self.play_turn(ui, input)?;
        }

        let result = self.completion_state.describe();
        info!("{}", result);
        ui.render_message(&result);
        ui.render_info(&self.stats.info_panel(self.turn));
        ui.render_finish();
        Ok(self.completion_state)
    }

    /// Summary of the game so far.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            completion_state: self.completion_state,
            turns_played: self.turn,
            turn_budget: self.turn_budget,
            population: self.stats,
        }
    }

    /// Updates the completion state; returns whether the game is over.
    fn check_finished(&mut self) -> bool {
        if self.completion_state == GameCompletionState::Playing {
            if self.stats.humans == 0 {
                self.completion_state = GameCompletionState::ZombiesWon { turn: self.turn };
            } else if self.turn >= self.turn_budget {
                self.completion_state = GameCompletionState::TurnsExhausted { turns: self.turn };
            }
        }
        self.is_game_ended()
    }
}
