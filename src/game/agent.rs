//! # Agent Module
//!
//! Agents, their kinds, and the resolution of a single agent's turn.
//!
//! A turn goes through three steps: the agent's movement strategy picks a
//! destination, the destination is checked against the world, and exactly one
//! [`TurnOutcome`] is committed.

use crate::{
    AgentId, ConcreteMovement, Coord, InputSource, MovementStrategy, ReadOnlyWorld, SimResult,
    World,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of agent. A human turns into a zombie once infected,
/// never the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Zombie,
    Human,
}

impl AgentKind {
    /// The kind this kind hunts or flees from.
    pub fn opposite(self) -> AgentKind {
        match self {
            AgentKind::Zombie => AgentKind::Human,
            AgentKind::Human => AgentKind::Zombie,
        }
    }

    fn code(self) -> char {
        match self {
            AgentKind::Zombie => 'z',
            AgentKind::Human => 'h',
        }
    }
}

/// Who decides where an agent moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentMovement {
    /// Movement decided by the nearest-enemy search
    Ai,
    /// Movement decided by a player through the input source
    Player,
}

/// A zombie or human on the grid.
///
/// The ID never changes, not even on infection. The position is owned by the
/// [`World`], which updates it as part of every move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    pos: Coord,
    kind: AgentKind,
    strategy: ConcreteMovement,
}

impl Agent {
    /// Creates an agent with the default strategy for its kind and movement.
    ///
    /// # Examples
    ///
    /// ```
    /// use zombies_vs_humans::{Agent, AgentKind, AgentMovement, Coord};
    ///
    /// let agent = Agent::new(3, AgentKind::Human, AgentMovement::Player, Coord::new(1, 2));
    /// assert_eq!(agent.id(), 3);
    /// assert_eq!(agent.label(), "H3");
    /// ```
    pub fn new(id: AgentId, kind: AgentKind, movement: AgentMovement, pos: Coord) -> Self {
        Self::with_strategy(id, kind, ConcreteMovement::for_agent(kind, movement), pos)
    }

    /// Creates an agent with an explicit movement strategy.
    pub fn with_strategy(
        id: AgentId,
        kind: AgentKind,
        strategy: ConcreteMovement,
        pos: Coord,
    ) -> Self {
        Self {
            id,
            pos,
            kind,
            strategy,
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn pos(&self) -> Coord {
        self.pos
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    /// Whether the agent is AI- or player-controlled.
    pub fn movement(&self) -> AgentMovement {
        self.strategy.movement_kind()
    }

    pub fn strategy(&self) -> &ConcreteMovement {
        &self.strategy
    }

    /// Display label: kind code plus ID, uppercase when player-controlled.
    pub fn label(&self) -> String {
        let code = match self.movement() {
            AgentMovement::Ai => self.kind.code(),
            AgentMovement::Player => self.kind.code().to_ascii_uppercase(),
        };
        format!("{}{}", code, self.id)
    }

    /// Turns a human into an AI-controlled zombie hunting humans.
    ///
    /// ID and position are untouched. Returns whether the kind changed; an
    /// agent that already is a zombie is left as it is.
    pub fn infect(&mut self) -> bool {
        if self.kind == AgentKind::Zombie {
            return false;
        }
        self.kind = AgentKind::Zombie;
        self.strategy = ConcreteMovement::for_agent(AgentKind::Zombie, AgentMovement::Ai);
        true
    }

    pub(crate) fn set_pos(&mut self, pos: Coord) {
        self.pos = pos;
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// How a turn ended. Exactly one outcome occurs per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The agent moved into a free cell
    Moved,
    /// The strategy chose to stay in place
    Stationary,
    /// A zombie walked into a human and infected it
    Converted,
    /// The destination held an agent that could not be infected
    Blocked,
}

/// Result of one agent's turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub outcome: TurnOutcome,
    /// Narration of the turn for the render sink
    pub message: String,
    /// True exactly when the outcome is [`TurnOutcome::Converted`]
    pub population_changed: bool,
}

impl TurnResult {
    fn new(outcome: TurnOutcome, message: String) -> Self {
        Self {
            outcome,
            message,
            population_changed: outcome == TurnOutcome::Converted,
        }
    }
}

/// Plays one turn for agent `id`.
///
/// Asks the agent's strategy for a destination, then commits the move,
/// infects the occupant, or records a bump. Errors only when the world's
/// bookkeeping is found to be corrupt.
pub fn play_turn(
    world: &mut World,
    id: AgentId,
    input: &mut dyn InputSource,
) -> SimResult<TurnResult> {
    let agent = world.agent(id)?;
    let kind = agent.kind();
    let decision = agent.strategy().where_to_move(agent, &*world, input);
    let dest = world.normalize(decision.destination);

    let result = match world.occupant(dest) {
        None => {
            world.move_agent(id, dest)?;
            TurnResult::new(
                TurnOutcome::Moved,
                format!("{} and succeeded", decision.message),
            )
        }
        Some(other) if other == id => TurnResult::new(
            TurnOutcome::Stationary,
            format!("{} and failed to move", decision.message),
        ),
        Some(other) => {
            let target = world.agent_mut(other)?;
            let target_label = target.label();
            if kind == AgentKind::Zombie && target.kind() == AgentKind::Human {
                target.infect();
                TurnResult::new(
                    TurnOutcome::Converted,
                    format!("{} and infected {}", decision.message, target_label),
                )
            } else {
                TurnResult::new(
                    TurnOutcome::Blocked,
                    format!("{} but bumped into {}", decision.message, target_label),
                )
            }
        }
    };

    debug!("agent {} -> {:?}: {}", id, result.outcome, result.message);
    Ok(result)
}
