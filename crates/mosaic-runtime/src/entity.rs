//! The per-tick update contract

use crate::clock::FrameClock;
use crate::commands::{SceneCommand, SceneCommands};
use crate::pointer::PointerState;
use mosaic_core::EntityId;
use mosaic_render::RenderSurface;
use std::any::Any;
use std::time::Duration;

/// Downcasting support for boxed entities
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A unit of game logic updated once per tick.
///
/// `S` is the game state shared by every entity of one loop.
pub trait Entity<S>: AsAny {
    /// Read the pointer, draw, and request scene changes through `ctx`
    fn update(&mut self, ctx: &mut TickContext<'_, S>);

    /// Human-readable name for logs
    fn name(&self) -> &str {
        "entity"
    }
}

/// Hook invoked at an entity transition (activation, expiry)
pub type Callback<S> = Box<dyn FnMut(&mut TickContext<'_, S>)>;

/// Everything an entity sees during its update.
///
/// Scene changes are queued and applied once every entity present at
/// tick start has been updated.
pub struct TickContext<'a, S> {
    pub pointer: &'a PointerState,
    pub clock: &'a FrameClock,
    pub surface: &'a mut dyn RenderSurface,
    pub state: &'a mut S,
    commands: &'a mut SceneCommands<S>,
    entity_id: EntityId,
    resolution: u32,
}

impl<'a, S> TickContext<'a, S> {
    pub fn new(
        pointer: &'a PointerState,
        clock: &'a FrameClock,
        surface: &'a mut dyn RenderSurface,
        state: &'a mut S,
        commands: &'a mut SceneCommands<S>,
        entity_id: EntityId,
        resolution: u32,
    ) -> Self {
        Self {
            pointer,
            clock,
            surface,
            state,
            commands,
            entity_id,
            resolution,
        }
    }

    /// Id of the entity being updated
    pub fn id(&self) -> EntityId {
        self.entity_id
    }

    /// Tiles per side of the grid
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn delta_time(&self) -> Duration {
        self.clock.delta_time()
    }

    pub fn delta_secs(&self) -> f64 {
        self.clock.delta_secs()
    }

    /// Add an entity to the live set; it is first updated next tick
    pub fn instantiate(&mut self, entity: impl Entity<S> + 'static) -> EntityId {
        self.instantiate_boxed(Box::new(entity))
    }

    pub fn instantiate_boxed(&mut self, entity: Box<dyn Entity<S>>) -> EntityId {
        let id = EntityId::new();
        self.commands.push(SceneCommand::Spawn(id, entity));
        id
    }

    /// Remove an entity by id; a missing id is ignored
    pub fn destroy(&mut self, id: EntityId) {
        self.commands.push(SceneCommand::Destroy(id));
    }

    /// Remove the entity being updated
    pub fn destroy_self(&mut self) {
        let id = self.entity_id;
        self.destroy(id);
    }

    /// Empty the live set, including anything spawned earlier this tick
    pub fn clear_scene(&mut self) {
        self.commands.push(SceneCommand::ClearScene);
    }
}
