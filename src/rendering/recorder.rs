//! # UI Event Stream
//!
//! Serializable record of everything sent to a sink.
//!
//! [`RecordingUi`] keeps the events in memory, which is what the tests
//! inspect. [`JsonLinesUi`] writes each event as one line of JSON so another
//! program can follow a game as it runs.

use crate::{AgentId, AgentKind, AgentMovement, Coord, ReadOnlyWorld, UserInterface};
use log::warn;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One agent as seen in a world snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub label: String,
    pub kind: AgentKind,
    pub movement: AgentMovement,
    pub pos: Coord,
}

/// Owned copy of the world's occupancy, in row-major cell order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub x_dim: i32,
    pub y_dim: i32,
    pub agents: Vec<AgentSnapshot>,
}

impl WorldSnapshot {
    /// Captures any read-only world view.
    pub fn capture(world: &dyn ReadOnlyWorld) -> Self {
        let mut agents = Vec::new();
        for y in 0..world.y_dim() {
            for x in 0..world.x_dim() {
                if let Some(agent) = world.get_agent_at(Coord::new(x, y)) {
                    agents.push(AgentSnapshot {
                        id: agent.id(),
                        label: agent.label(),
                        kind: agent.kind(),
                        movement: agent.movement(),
                        pos: agent.pos(),
                    });
                }
            }
        }
        Self {
            x_dim: world.x_dim(),
            y_dim: world.y_dim(),
            agents,
        }
    }

    /// Number of agents of the given kind.
    pub fn count(&self, kind: AgentKind) -> usize {
        self.agents.iter().filter(|a| a.kind == kind).count()
    }
}

/// A single call made on a [`UserInterface`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    Initialize { x_dim: u32, y_dim: u32 },
    World { world: WorldSnapshot },
    Message { text: String },
    Info { entries: Vec<(String, usize)> },
    Error { text: String },
    Finish,
}

impl UiEvent {
    fn initialize(x_dim: u32, y_dim: u32) -> Self {
        UiEvent::Initialize { x_dim, y_dim }
    }

    fn world(world: &dyn ReadOnlyWorld) -> Self {
        UiEvent::World {
            world: WorldSnapshot::capture(world),
        }
    }

    fn info(info: &[(String, usize)]) -> Self {
        UiEvent::Info {
            entries: info.to_vec(),
        }
    }
}

/// Sink that stores every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingUi {
    pub events: Vec<UiEvent>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// All narration messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                UiEvent::Message { text } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent world snapshot.
    pub fn last_world(&self) -> Option<&WorldSnapshot> {
        self.events.iter().rev().find_map(|event| match event {
            UiEvent::World { world } => Some(world),
            _ => None,
        })
    }
}

impl UserInterface for RecordingUi {
    fn initialize(&mut self, x_dim: u32, y_dim: u32) {
        self.events.push(UiEvent::initialize(x_dim, y_dim));
    }

    fn render_world(&mut self, world: &dyn ReadOnlyWorld) {
        self.events.push(UiEvent::world(world));
    }

    fn render_message(&mut self, message: &str) {
        self.events.push(UiEvent::Message {
            text: message.to_string(),
        });
    }

    fn render_info(&mut self, info: &[(String, usize)]) {
        self.events.push(UiEvent::info(info));
    }

    fn render_error(&mut self, message: &str) {
        self.events.push(UiEvent::Error {
            text: message.to_string(),
        });
    }

    fn render_finish(&mut self) {
        self.events.push(UiEvent::Finish);
    }
}

/// Sink that writes every event as a line of JSON.
pub struct JsonLinesUi<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesUi<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &UiEvent) {
        let result = serde_json::to_writer(&mut self.out, event)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("could not write UI event: {}", e);
        }
    }
}

impl<W: Write> UserInterface for JsonLinesUi<W> {
    fn initialize(&mut self, x_dim: u32, y_dim: u32) {
        self.emit(&UiEvent::initialize(x_dim, y_dim));
    }

    fn render_world(&mut self, world: &dyn ReadOnlyWorld) {
        self.emit(&UiEvent::world(world));
    }

    fn render_message(&mut self, message: &str) {
        self.emit(&UiEvent::Message {
            text: message.to_string(),
        });
    }

    fn render_info(&mut self, info: &[(String, usize)]) {
        self.emit(&UiEvent::info(info));
    }

    fn render_error(&mut self, message: &str) {
        self.emit(&UiEvent::Error {
            text: message.to_string(),
        });
    }

    fn render_finish(&mut self) {
        self.emit(&UiEvent::Finish);
    }
}
