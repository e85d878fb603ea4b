//! # Movement Strategies
//!
//! Decide where an agent wants to go this turn.
//!
//! There are exactly two strategies: [`AiMovement`], a bounded nearest-enemy
//! search, and [`PlayerMovement`], which asks the input source. Both are
//! wrapped in [`ConcreteMovement`] so an agent can swap its strategy in place
//! when it gets infected.

use crate::{Agent, AgentKind, AgentMovement, Coord, Direction, InputSource, ReadOnlyWorld};
use serde::{Deserialize, Serialize};

/// A strategy's answer: where to go, and a narration of the attempt.
///
/// Returning the agent's own position means "do not move".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDecision {
    pub destination: Coord,
    pub message: String,
}

/// Behaviour shared by every movement strategy.
pub trait MovementStrategy {
    /// Picks a destination for `agent`.
    ///
    /// The world is read-only here; committing the move is the caller's job.
    fn where_to_move(
        &self,
        agent: &Agent,
        world: &dyn ReadOnlyWorld,
        input: &mut dyn InputSource,
    ) -> MoveDecision;

    /// Which kind of control this strategy represents.
    fn movement_kind(&self) -> AgentMovement;
}

/// Nearest-enemy movement: chase the closest enemy, or run away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMovement {
    /// Kind of agent to look for
    pub enemy: AgentKind,
    /// Move away from the enemy instead of towards it
    pub run_away: bool,
}

impl AiMovement {
    pub fn new(enemy: AgentKind, run_away: bool) -> Self {
        Self { enemy, run_away }
    }

    /// Zombies chase humans; humans run from zombies.
    pub fn for_kind(kind: AgentKind) -> Self {
        Self::new(kind.opposite(), kind == AgentKind::Human)
    }

    /// Largest ring radius searched on a world of this size.
    pub fn max_radius(world: &dyn ReadOnlyWorld) -> i32 {
        world.x_dim().max(world.y_dim()) / 2
    }

    /// Finds the nearest enemy of `agent` by expanding square rings.
    ///
    /// Ring `r` holds the cells at Chebyshev distance exactly `r`. Each ring
    /// is scanned column by column (`dx` outer, `dy` inner, both from `-r` to
    /// `r`), and the first enemy met wins. Enemies on the same ring are thus
    /// ranked by scan order, which favours negative `dx` and then negative `dy`.
    pub fn find_nearest_enemy<'w>(
        &self,
        agent: &Agent,
        world: &'w dyn ReadOnlyWorld,
    ) -> Option<&'w Agent> {
        let origin = agent.pos();
        for r in 1..=Self::max_radius(world) {
            for dx in -r..=r {
                for dy in -r..=r {
                    let offset = Coord::new(dx, dy);
                    // Interior cells were covered by smaller rings
                    if offset.chebyshev_len() != r {
                        continue;
                    }
                    let cell = origin + offset;
                    if let Some(other) = world.get_agent_at(cell) {
                        if other.id() != agent.id() && other.kind() == self.enemy {
                            return Some(other);
                        }
                    }
                }
            }
        }
        None
    }

    /// Whether a pursuing/fleeing agent may step onto `dest`.
    ///
    /// Free cells always qualify. When pursuing, a cell holding an enemy
    /// qualifies too, since stepping on it is an attack.
    fn can_enter(&self, world: &dyn ReadOnlyWorld, dest: Coord) -> bool {
        match world.get_agent_at(dest) {
            None => true,
            Some(occupant) => !self.run_away && occupant.kind() == self.enemy,
        }
    }
}

impl MovementStrategy for AiMovement {
    fn where_to_move(
        &self,
        agent: &Agent,
        world: &dyn ReadOnlyWorld,
        _input: &mut dyn InputSource,
    ) -> MoveDecision {
        let target = match self.find_nearest_enemy(agent, world) {
            Some(target) => target,
            None => {
                return MoveDecision {
                    destination: agent.pos(),
                    message: format!("{} didn't find enemies", agent),
                }
            }
        };

        let (vector, verb) = if self.run_away {
            (world.vector_between(target.pos(), agent.pos()), "run away from")
        } else {
            (world.vector_between(agent.pos(), target.pos()), "move towards")
        };
        let direction = Direction::from_vector(vector);

        let mut candidates = vec![direction];
        if direction.is_diagonal() {
            candidates.push(direction.horizontal());
            candidates.push(direction.vertical());
        }

        for candidate in candidates {
            let dest = world.get_neighbor(agent.pos(), candidate);
            if self.can_enter(world, dest) {
                return MoveDecision {
                    destination: dest,
                    message: format!(
                        "{} tried to {} {} going {}",
                        agent, verb, target, candidate
                    ),
                };
            }
        }

        MoveDecision {
            destination: agent.pos(),
            message: format!("{} tried to {} {} but was boxed in", agent, verb, target),
        }
    }

    fn movement_kind(&self) -> AgentMovement {
        AgentMovement::Ai
    }
}

/// Player-driven movement: the input source picks the direction.
///
/// The destination is not checked for occupancy here; walking into another
/// agent resolves as a bump (or an infection) during turn resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMovement;

impl MovementStrategy for PlayerMovement {
    fn where_to_move(
        &self,
        agent: &Agent,
        world: &dyn ReadOnlyWorld,
        input: &mut dyn InputSource,
    ) -> MoveDecision {
        let direction = input.input_direction(&agent.label());
        let message = match direction {
            Direction::None => format!("{} decided to stay", agent),
            _ => format!("{} tried to move {}", agent, direction),
        };
        MoveDecision {
            destination: world.get_neighbor(agent.pos(), direction),
            message,
        }
    }

    fn movement_kind(&self) -> AgentMovement {
        AgentMovement::Player
    }
}

/// The movement strategy attached to an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcreteMovement {
    Ai(AiMovement),
    Player(PlayerMovement),
}

impl ConcreteMovement {
    /// Default strategy for an agent of `kind` controlled by `movement`.
    pub fn for_agent(kind: AgentKind, movement: AgentMovement) -> Self {
        match movement {
            AgentMovement::Ai => ConcreteMovement::Ai(AiMovement::for_kind(kind)),
            AgentMovement::Player => ConcreteMovement::Player(PlayerMovement),
        }
    }
}

impl MovementStrategy for ConcreteMovement {
    fn where_to_move(
        &self,
        agent: &Agent,
        world: &dyn ReadOnlyWorld,
        input: &mut dyn InputSource,
    ) -> MoveDecision {
        match self {
            ConcreteMovement::Ai(ai) => ai.where_to_move(agent, world, input),
            ConcreteMovement::Player(player) => player.where_to_move(agent, world, input),
        }
    }

    fn movement_kind(&self) -> AgentMovement {
        match self {
            ConcreteMovement::Ai(ai) => ai.movement_kind(),
            ConcreteMovement::Player(player) => player.movement_kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScriptedInput, World};

    fn place(world: &mut World, kind: AgentKind, pos: Coord) -> usize {
        let id = world.agents().len();
        world
            .add_agent(Agent::new(id, kind, AgentMovement::Ai, pos))
            .unwrap()
    }

    fn decide(world: &World, id: usize) -> MoveDecision {
        let agent = world.agent(id).unwrap();
        agent
            .strategy()
            .where_to_move(agent, world, &mut ScriptedInput::default())
    }

    #[test]
    fn test_zombie_chases_across_the_edge() {
        let mut world = World::new(5, 5).unwrap();
        let zombie = place(&mut world, AgentKind::Zombie, Coord::new(0, 0));
        place(&mut world, AgentKind::Human, Coord::new(4, 0));

        let decision = decide(&world, zombie);
        assert_eq!(decision.destination, Coord::new(4, 0));
        assert!(decision.message.contains("move towards h1"));
    }

    #[test]
    fn test_human_runs_away() {
        let mut world = World::new(11, 11).unwrap();
        let human = place(&mut world, AgentKind::Human, Coord::new(5, 5));
        place(&mut world, AgentKind::Zombie, Coord::new(7, 4));

        let decision = decide(&world, human);
        assert_eq!(decision.destination, Coord::new(4, 6));
        assert!(decision.message.contains("run away from z1"));
    }

    #[test]
    fn test_no_enemies_means_no_move() {
        let mut world = World::new(6, 6).unwrap();
        let zombie = place(&mut world, AgentKind::Zombie, Coord::new(2, 2));
        place(&mut world, AgentKind::Zombie, Coord::new(3, 3));

        let decision = decide(&world, zombie);
        assert_eq!(decision.destination, Coord::new(2, 2));
        assert_eq!(decision.message, "z0 didn't find enemies");
    }

    #[test]
    fn test_search_is_bounded_by_max_radius() {
        let world = World::new(9, 4).unwrap();
        assert_eq!(AiMovement::max_radius(&world), 4);
        let world = World::new(1, 1).unwrap();
        assert_eq!(AiMovement::max_radius(&world), 0);
    }

    #[test]
    fn test_nearest_enemy_wins_over_farther_one() {
        let mut world = World::new(20, 20).unwrap();
        let zombie = place(&mut world, AgentKind::Zombie, Coord::new(10, 10));
        place(&mut world, AgentKind::Human, Coord::new(6, 10));
        let near = place(&mut world, AgentKind::Human, Coord::new(12, 12));

        let agent = world.agent(zombie).unwrap();
        let ai = AiMovement::for_kind(AgentKind::Zombie);
        assert_eq!(ai.find_nearest_enemy(agent, &world).map(|a| a.id()), Some(near));
    }

    #[test]
    fn test_ring_ties_follow_scan_order() {
        // Both humans sit on ring 2; (-2, 2) is scanned before (2, -2).
        let mut world = World::new(20, 20).unwrap();
        let zombie = place(&mut world, AgentKind::Zombie, Coord::new(10, 10));
        place(&mut world, AgentKind::Human, Coord::new(12, 8));
        let first = place(&mut world, AgentKind::Human, Coord::new(8, 12));

        let agent = world.agent(zombie).unwrap();
        let ai = AiMovement::for_kind(AgentKind::Zombie);
        assert_eq!(ai.find_nearest_enemy(agent, &world).map(|a| a.id()), Some(first));

        // Same column: smaller dy first.
        let mut world = World::new(20, 20).unwrap();
        let zombie = place(&mut world, AgentKind::Zombie, Coord::new(10, 10));
        place(&mut world, AgentKind::Human, Coord::new(7, 12));
        let first = place(&mut world, AgentKind::Human, Coord::new(7, 9));

        let agent = world.agent(zombie).unwrap();
        assert_eq!(ai.find_nearest_enemy(agent, &world).map(|a| a.id()), Some(first));
    }

    #[test]
    fn test_diagonal_fallback_tries_horizontal_then_vertical() {
        let mut world = World::new(11, 11).unwrap();
        let zombie = place(&mut world, AgentKind::Zombie, Coord::new(5, 5));
        place(&mut world, AgentKind::Human, Coord::new(8, 8));
        // Block the diagonal step with a fellow zombie
        place(&mut world, AgentKind::Zombie, Coord::new(6, 6));

        let decision = decide(&world, zombie);
        assert_eq!(decision.destination, Coord::new(6, 5));

        // Block the horizontal step as well
        place(&mut world, AgentKind::Zombie, Coord::new(6, 5));
        let decision = decide(&world, zombie);
        assert_eq!(decision.destination, Coord::new(5, 6));

        // And the vertical one: nowhere left to go
        place(&mut world, AgentKind::Zombie, Coord::new(5, 6));
        let decision = decide(&world, zombie);
        assert_eq!(decision.destination, Coord::new(5, 5));
        assert!(decision.message.contains("boxed in"));
    }

    #[test]
    fn test_straight_move_has_no_fallback() {
        let mut world = World::new(11, 11).unwrap();
        let human = place(&mut world, AgentKind::Human, Coord::new(5, 5));
        place(&mut world, AgentKind::Zombie, Coord::new(8, 5));
        place(&mut world, AgentKind::Human, Coord::new(4, 5));

        let decision = decide(&world, human);
        assert_eq!(decision.destination, Coord::new(5, 5));
    }

    #[test]
    fn test_boxed_in_runaway_stays() {
        let mut world = World::new(3, 3).unwrap();
        let human = place(&mut world, AgentKind::Human, Coord::new(1, 1));
        place(&mut world, AgentKind::Zombie, Coord::new(2, 2));
        for pos in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2)] {
            place(&mut world, AgentKind::Human, Coord::new(pos.0, pos.1));
        }

        let decision = decide(&world, human);
        assert_eq!(decision.destination, Coord::new(1, 1));
    }

    #[test]
    fn test_player_movement_uses_input() {
        let mut world = World::new(5, 5).unwrap();
        world
            .add_agent(Agent::new(0, AgentKind::Human, AgentMovement::Player, Coord::new(0, 0)))
            .unwrap();
        let agent = world.agent(0).unwrap();
        let mut input = ScriptedInput::new(vec![Direction::UpLeft]);

        let decision = agent.strategy().where_to_move(agent, &world, &mut input);
        assert_eq!(decision.destination, Coord::new(4, 4));
        assert_eq!(decision.message, "H0 tried to move UpLeft");
        assert_eq!(input.prompts(), &["H0".to_string()]);
    }

    #[test]
    fn test_concrete_movement_kind() {
        assert_eq!(
            ConcreteMovement::for_agent(AgentKind::Human, AgentMovement::Player).movement_kind(),
            AgentMovement::Player
        );
        assert_eq!(
            ConcreteMovement::for_agent(AgentKind::Human, AgentMovement::Ai).movement_kind(),
            AgentMovement::Ai
        );
    }
}
