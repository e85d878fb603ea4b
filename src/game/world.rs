//! # World Module
//!
//! Occupancy grid and toroidal geometry.
//!
//! The world is the only place that knows how coordinates wrap. Every
//! coordinate-accepting operation normalizes its input first, so callers may
//! hand in raw offsets such as `(-1, 7)` and let the world canonicalize them.

use crate::utils::{axis_distance, shortest_axis_delta, wrap_axis};
use crate::{Agent, AgentId, Coord, Direction, SimError, SimResult};

/// Read-only view of the world, handed to movement strategies and renderers.
///
/// Only [`x_dim`](ReadOnlyWorld::x_dim), [`y_dim`](ReadOnlyWorld::y_dim) and
/// [`get_agent_at`](ReadOnlyWorld::get_agent_at) need implementing; the
/// geometry is derived from the dimensions.
pub trait ReadOnlyWorld {
    /// Width of the world in cells.
    fn x_dim(&self) -> i32;

    /// Height of the world in cells.
    fn y_dim(&self) -> i32;

    /// Agent occupying the cell at `coord` (normalized), if any.
    fn get_agent_at(&self, coord: Coord) -> Option<&Agent>;

    /// Whether the cell at `coord` (normalized) holds an agent.
    fn is_occupied(&self, coord: Coord) -> bool {
        self.get_agent_at(coord).is_some()
    }

    /// Wraps both axes of `coord` into the world bounds.
    fn normalize(&self, coord: Coord) -> Coord {
        Coord::new(wrap_axis(coord.x, self.x_dim()), wrap_axis(coord.y, self.y_dim()))
    }

    /// Signed displacement from `a` to `b`, taking the shorter way round on each axis.
    fn vector_between(&self, a: Coord, b: Coord) -> Coord {
        Coord::new(
            shortest_axis_delta(a.x, b.x, self.x_dim()),
            shortest_axis_delta(a.y, b.y, self.y_dim()),
        )
    }

    /// Chebyshev distance between `a` and `b` on the torus.
    ///
    /// # Examples
    ///
    /// ```
    /// use zombies_vs_humans::{Coord, ReadOnlyWorld, World};
    ///
    /// let world = World::new(5, 5).unwrap();
    /// assert_eq!(world.distance_between(Coord::new(0, 0), Coord::new(4, 0)), 1);
    /// assert_eq!(world.distance_between(Coord::new(0, 0), Coord::new(2, 1)), 2);
    /// ```
    fn distance_between(&self, a: Coord, b: Coord) -> i32 {
        axis_distance(a.x, b.x, self.x_dim()).max(axis_distance(a.y, b.y, self.y_dim()))
    }

    /// Cell adjacent to `pos` in `direction`, normalized.
    fn get_neighbor(&self, pos: Coord, direction: Direction) -> Coord {
        self.normalize(pos + direction.to_delta())
    }

    /// Cell adjacent to `pos` in the direction `vector` points to.
    ///
    /// The vector is reduced to its per-axis sign before the lookup, so any
    /// length works.
    fn neighbor_towards(&self, pos: Coord, vector: Coord) -> Coord {
        self.get_neighbor(pos, Direction::from_vector(vector))
    }
}

/// The simulation world: a fixed-size toroidal grid plus the agent roster.
///
/// Each cell holds at most one agent ID. Agents are stored by ID, and the
/// world keeps each agent's cached position in step with the grid, so a cell
/// holds exactly the agent whose position equals that cell.
#[derive(Debug, Clone)]
pub struct World {
    x_dim: i32,
    y_dim: i32,
    /// Row-major occupancy grid
    cells: Vec<Option<AgentId>>,
    /// All agents, indexed by ID
    agents: Vec<Agent>,
}

impl World {
    /// Creates an empty world of the given dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use zombies_vs_humans::{ReadOnlyWorld, World};
    ///
    /// let world = World::new(8, 6).unwrap();
    /// assert_eq!(world.x_dim(), 8);
    /// assert_eq!(world.y_dim(), 6);
    /// assert!(World::new(0, 6).is_err());
    /// ```
    pub fn new(x_dim: u32, y_dim: u32) -> SimResult<Self> {
        let mut errors = Vec::new();
        if x_dim == 0 {
            errors.push("Horizontal dimension (x) must be > 0".to_string());
        }
        if y_dim == 0 {
            errors.push("Vertical dimension (y) must be > 0".to_string());
        }
        if x_dim > i32::MAX as u32 || y_dim > i32::MAX as u32 {
            errors.push(format!("World dimensions {}x{} are too large", x_dim, y_dim));
        }
        if !errors.is_empty() {
            return Err(SimError::InvalidConfig(errors));
        }

        Ok(Self {
            x_dim: x_dim as i32,
            y_dim: y_dim as i32,
            cells: vec![None; x_dim as usize * y_dim as usize],
            agents: Vec::new(),
        })
    }

    /// Number of cells in the world.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All agents, in ID order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Looks up an agent by ID.
    pub fn agent(&self, id: AgentId) -> SimResult<&Agent> {
        self.agents.get(id).ok_or(SimError::UnknownAgent(id))
    }

    /// Looks up an agent by ID for mutation.
    ///
    /// Position is not reachable through this handle; use
    /// [`move_agent`](World::move_agent) to relocate an agent.
    pub fn agent_mut(&mut self, id: AgentId) -> SimResult<&mut Agent> {
        self.agents.get_mut(id).ok_or(SimError::UnknownAgent(id))
    }

    /// Registers `agent` at its declared position.
    ///
    /// The agent's ID must be the next free roster slot and its (normalized)
    /// cell must be empty. Returns the agent's ID.
    pub fn add_agent(&mut self, mut agent: Agent) -> SimResult<AgentId> {
        let id = agent.id();
        if id != self.agents.len() {
            return Err(SimError::InvariantViolation(format!(
                "Tried to add agent {} but the next free roster slot is {}",
                id,
                self.agents.len()
            )));
        }

        let pos = self.normalize(agent.pos());
        if let Some(other) = self.occupant(pos) {
            return Err(SimError::InvariantViolation(format!(
                "Tried to place agent {} at position {} which was already occupied by agent {}",
                id, pos, other
            )));
        }

        agent.set_pos(pos);
        let index = self.index(pos);
        self.cells[index] = Some(id);
        self.agents.push(agent);
        Ok(id)
    }

    /// Moves an agent to `dest`.
    ///
    /// The agent must occupy its recorded cell and `dest` must be empty.
    /// Anything else means the grid is corrupt and is reported as an
    /// [`SimError::InvariantViolation`].
    pub fn move_agent(&mut self, id: AgentId, dest: Coord) -> SimResult<()> {
        let source = self.agent(id)?.pos();
        let dest = self.normalize(dest);

        if self.occupant(source) != Some(id) {
            return Err(SimError::InvariantViolation(format!(
                "Tried to move agent {} from {} to {}, but source location is occupied with {}",
                id,
                source,
                dest,
                match self.occupant(source) {
                    Some(other) => format!("agent {}", other),
                    None => "no agent".to_string(),
                }
            )));
        }

        if let Some(other) = self.occupant(dest) {
            return Err(SimError::InvariantViolation(format!(
                "Tried to move agent {} to position {} which was already occupied by agent {}",
                id, dest, other
            )));
        }

        let source_index = self.index(source);
        let dest_index = self.index(dest);
        self.cells[source_index] = None;
        self.cells[dest_index] = Some(id);
        self.agents[id].set_pos(dest);
        Ok(())
    }

    /// ID of the agent in the cell at `coord` (normalized), if any.
    pub fn occupant(&self, coord: Coord) -> Option<AgentId> {
        self.cells[self.index(coord)]
    }

    /// Checks that grid and roster agree cell by cell.
    pub fn check_consistency(&self) -> SimResult<()> {
        for agent in &self.agents {
            if self.occupant(agent.pos()) != Some(agent.id()) {
                return Err(SimError::InvariantViolation(format!(
                    "Agent {} claims {} but the cell does not hold it",
                    agent.id(),
                    agent.pos()
                )));
            }
        }

        let occupied = self.cells.iter().filter(|cell| cell.is_some()).count();
        if occupied != self.agents.len() {
            return Err(SimError::InvariantViolation(format!(
                "{} occupied cells for {} agents",
                occupied,
                self.agents.len()
            )));
        }

        Ok(())
    }

    fn index(&self, coord: Coord) -> usize {
        let pos = self.normalize(coord);
        pos.y as usize * self.x_dim as usize + pos.x as usize
    }
}

impl ReadOnlyWorld for World {
    fn x_dim(&self) -> i32 {
        self.x_dim
    }

    fn y_dim(&self) -> i32 {
        self.y_dim
    }

    fn get_agent_at(&self, coord: Coord) -> Option<&Agent> {
        self.occupant(coord).map(|id| &self.agents[id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AgentKind, AgentMovement};

    fn zombie(id: AgentId, pos: Coord) -> Agent {
        Agent::new(id, AgentKind::Zombie, AgentMovement::Ai, pos)
    }

    #[test]
    fn test_world_creation() {
        let world = World::new(10, 4).unwrap();
        assert_eq!(world.x_dim(), 10);
        assert_eq!(world.y_dim(), 4);
        assert_eq!(world.cell_count(), 40);
        assert!(world.agents().is_empty());
    }

    #[test]
    fn test_world_rejects_zero_dimensions() {
        match World::new(0, 0) {
            Err(SimError::InvalidConfig(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize() {
        let world = World::new(5, 7).unwrap();
        assert_eq!(world.normalize(Coord::new(-1, -1)), Coord::new(4, 6));
        assert_eq!(world.normalize(Coord::new(5, 7)), Coord::new(0, 0));
        assert_eq!(world.normalize(Coord::new(-11, 15)), Coord::new(4, 1));
        assert_eq!(world.normalize(Coord::new(2, 3)), Coord::new(2, 3));
    }

    #[test]
    fn test_vector_between_prefers_wrap() {
        let world = World::new(5, 5).unwrap();
        assert_eq!(
            world.vector_between(Coord::new(0, 0), Coord::new(4, 0)),
            Coord::new(-1, 0)
        );
        assert_eq!(
            world.vector_between(Coord::new(1, 1), Coord::new(3, 2)),
            Coord::new(2, 1)
        );
        assert_eq!(
            world.vector_between(Coord::new(0, 4), Coord::new(0, 0)),
            Coord::new(0, 1)
        );
    }

    #[test]
    fn test_distance_between_is_chebyshev() {
        let world = World::new(10, 10).unwrap();
        assert_eq!(world.distance_between(Coord::new(0, 0), Coord::new(3, 1)), 3);
        assert_eq!(world.distance_between(Coord::new(0, 0), Coord::new(9, 9)), 1);
        assert_eq!(world.distance_between(Coord::new(2, 2), Coord::new(2, 2)), 0);
        assert_eq!(world.distance_between(Coord::new(0, 0), Coord::new(5, 5)), 5);
    }

    #[test]
    fn test_get_neighbor_wraps() {
        let world = World::new(5, 5).unwrap();
        assert_eq!(world.get_neighbor(Coord::new(0, 0), Direction::Left), Coord::new(4, 0));
        assert_eq!(world.get_neighbor(Coord::new(0, 0), Direction::UpLeft), Coord::new(4, 4));
        assert_eq!(world.get_neighbor(Coord::new(4, 4), Direction::DownRight), Coord::new(0, 0));
        assert_eq!(world.get_neighbor(Coord::new(2, 2), Direction::None), Coord::new(2, 2));
    }

    #[test]
    fn test_neighbor_towards_uses_vector_sign() {
        let world = World::new(9, 9).unwrap();
        assert_eq!(
            world.neighbor_towards(Coord::new(4, 4), Coord::new(-3, 2)),
            Coord::new(3, 5)
        );
        assert_eq!(
            world.neighbor_towards(Coord::new(4, 4), Coord::new(0, 0)),
            Coord::new(4, 4)
        );
    }

    #[test]
    fn test_add_and_move_agent() {
        let mut world = World::new(5, 5).unwrap();
        world.add_agent(zombie(0, Coord::new(1, 1))).unwrap();

        assert!(world.is_occupied(Coord::new(1, 1)));
        assert_eq!(world.get_agent_at(Coord::new(6, 6)).map(|a| a.id()), Some(0));

        world.move_agent(0, Coord::new(-1, 1)).unwrap();
        assert!(!world.is_occupied(Coord::new(1, 1)));
        assert_eq!(world.agent(0).unwrap().pos(), Coord::new(4, 1));
        assert_eq!(world.occupant(Coord::new(4, 1)), Some(0));
        world.check_consistency().unwrap();
    }

    #[test]
    fn test_add_agent_normalizes_position() {
        let mut world = World::new(5, 5).unwrap();
        world.add_agent(zombie(0, Coord::new(-1, 12))).unwrap();
        assert_eq!(world.agent(0).unwrap().pos(), Coord::new(4, 2));
    }

    #[test]
    fn test_add_agent_into_occupied_cell_fails() {
        let mut world = World::new(5, 5).unwrap();
        world.add_agent(zombie(0, Coord::new(2, 2))).unwrap();
        let result = world.add_agent(zombie(1, Coord::new(2, 2)));
        assert!(matches!(result, Err(SimError::InvariantViolation(_))));
        assert_eq!(world.agents().len(), 1);
    }

    #[test]
    fn test_add_agent_out_of_order_id_fails() {
        let mut world = World::new(5, 5).unwrap();
        let result = world.add_agent(zombie(3, Coord::new(2, 2)));
        assert!(matches!(result, Err(SimError::InvariantViolation(_))));
    }

    #[test]
    fn test_move_into_occupied_cell_fails() {
        let mut world = World::new(5, 5).unwrap();
        world.add_agent(zombie(0, Coord::new(0, 0))).unwrap();
        world.add_agent(zombie(1, Coord::new(1, 0))).unwrap();

        let result = world.move_agent(0, Coord::new(1, 0));
        assert!(matches!(result, Err(SimError::InvariantViolation(_))));
        assert_eq!(world.agent(0).unwrap().pos(), Coord::new(0, 0));
        world.check_consistency().unwrap();
    }

    #[test]
    fn test_move_with_stale_position_fails() {
        let mut world = World::new(5, 5).unwrap();
        world.add_agent(zombie(0, Coord::new(0, 0))).unwrap();
        world.agent_mut(0).unwrap().set_pos(Coord::new(2, 2));

        match world.move_agent(0, Coord::new(3, 3)) {
            Err(SimError::InvariantViolation(message)) => {
                assert!(message.contains("source location is occupied with no agent"));
            }
            other => panic!("expected an invariant violation, got {:?}", other),
        }

        assert_eq!(world.occupant(Coord::new(0, 0)), Some(0));
        assert_eq!(world.occupant(Coord::new(2, 2)), None);
        assert_eq!(world.occupant(Coord::new(3, 3)), None);
        assert!(world.check_consistency().is_err());
    }

    #[test]
    fn test_move_unknown_agent_fails() {
        let mut world = World::new(5, 5).unwrap();
        assert!(matches!(
            world.move_agent(7, Coord::new(0, 0)),
            Err(SimError::UnknownAgent(7))
        ));
    }
}
