//! Scene changes requested during a tick

use crate::entity::Entity;
use mosaic_core::EntityId;
use std::fmt;

/// A change to the live set, applied after the current pass
pub enum SceneCommand<S> {
    Spawn(EntityId, Box<dyn Entity<S>>),
    Destroy(EntityId),
    ClearScene,
}

impl<S: 'static> fmt::Debug for SceneCommand<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneCommand::Spawn(id, entity) => write!(f, "Spawn({}, {})", id, entity.name()),
            SceneCommand::Destroy(id) => write!(f, "Destroy({})", id),
            SceneCommand::ClearScene => write!(f, "ClearScene"),
        }
    }
}

/// Queue that entities push to and the loop drains in issue order
pub struct SceneCommands<S> {
    commands: Vec<SceneCommand<S>>,
}

impl<S> Default for SceneCommands<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SceneCommands<S> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Push a command onto the queue
    pub fn push(&mut self, command: SceneCommand<S>) {
        self.commands.push(command);
    }

    /// Drain all commands, returning them in issue order
    pub fn drain(&mut self) -> Vec<SceneCommand<S>> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
