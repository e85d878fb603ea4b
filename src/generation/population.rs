//! # Population Generation
//!
//! Places the initial zombies and humans on the grid.

use crate::{
    Agent, AgentKind, AgentMovement, Coord, GameConfig, Generator, ReadOnlyWorld, SimError,
    SimResult, World,
};
use log::{info, warn};
use rand::{rngs::StdRng, Rng};

/// Builds a world and fills it with the configured agents.
///
/// IDs are handed out zombies first, then humans. Within each kind the first
/// `player_*` agents are player-controlled. Each agent lands on a uniformly
/// random free cell, found by drawing cells until an empty one comes up.
#[derive(Debug, Clone, Default)]
pub struct PopulationGenerator;

impl PopulationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draws random cells until an unoccupied one is found.
    ///
    /// Only terminates if the world has a free cell, which a validated
    /// configuration guarantees.
    pub fn random_free_cell(world: &World, rng: &mut StdRng) -> Coord {
        loop {
            let pos = Coord::new(
                rng.gen_range(0..world.x_dim()),
                rng.gen_range(0..world.y_dim()),
            );
            if !world.is_occupied(pos) {
                return pos;
            }
        }
    }

    fn spawn(
        world: &mut World,
        kind: AgentKind,
        movement: AgentMovement,
        rng: &mut StdRng,
    ) -> SimResult<()> {
        let id = world.agents().len();
        let pos = Self::random_free_cell(world, rng);
        world.add_agent(Agent::new(id, kind, movement, pos))?;
        Ok(())
    }
}

impl Generator<World> for PopulationGenerator {
    fn generate(&self, config: &GameConfig, rng: &mut StdRng) -> SimResult<World> {
        config.validate()?;
        let mut world = World::new(config.x_dim, config.y_dim)?;

        for (kind, total, players) in [
            (AgentKind::Zombie, config.zombies, config.player_zombies),
            (AgentKind::Human, config.humans, config.player_humans),
        ] {
            for i in 0..total {
                let movement = if i < players {
                    AgentMovement::Player
                } else {
                    AgentMovement::Ai
                };
                Self::spawn(&mut world, kind, movement, rng)?;
            }
        }

        if config.zombies == 0 {
            warn!("No zombies in the world; humans have nothing to run from");
        }
        info!(
            "{} placed {} agents on a {}x{} world",
            self.generator_type(),
            world.agents().len(),
            config.x_dim,
            config.y_dim
        );

        self.validate(&world, config)?;
        Ok(world)
    }

    fn validate(&self, content: &World, config: &GameConfig) -> SimResult<()> {
        content.check_consistency()?;

        let count = |kind: AgentKind, movement: AgentMovement| {
            content
                .agents()
                .iter()
                .filter(|a| a.kind() == kind && a.movement() == movement)
                .count() as u32
        };
        let player_zombies = count(AgentKind::Zombie, AgentMovement::Player);
        let ai_zombies = count(AgentKind::Zombie, AgentMovement::Ai);
        let player_humans = count(AgentKind::Human, AgentMovement::Player);
        let ai_humans = count(AgentKind::Human, AgentMovement::Ai);

        if player_zombies != config.player_zombies
            || player_zombies + ai_zombies != config.zombies
            || player_humans != config.player_humans
            || player_humans + ai_humans != config.humans
        {
            return Err(SimError::InvariantViolation(format!(
                "Generated population (zombies {}+{}, humans {}+{}) does not match the configuration",
                player_zombies, ai_zombies, player_humans, ai_humans
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "PopulationGenerator"
    }
}
