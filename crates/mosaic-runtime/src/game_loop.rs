//! The loop that owns the live set

use crate::clock::FrameClock;
use crate::commands::{SceneCommand, SceneCommands};
use crate::entity::{Entity, TickContext};
use crate::pointer::PointerState;
use mosaic_core::{EntityId, LoopConfig, Result};
use mosaic_render::RenderSurface;
use std::time::{Duration, Instant};

/// Owns every entity, the clock, and the game state `S`.
///
/// Each tick clears the surface, updates every entity in insertion order,
/// applies the scene changes those updates requested, then advances the
/// clock. The entities visited in a tick are exactly those live when it
/// started: anything instantiated during the tick is first updated on the
/// next one, and an entity destroyed mid-tick by another is still visited
/// if it comes later in the order.
pub struct GameLoop<S> {
    config: LoopConfig,
    clock: FrameClock,
    entities: Vec<(EntityId, Box<dyn Entity<S>>)>,
    pending: SceneCommands<S>,
    state: S,
    last_tick: Option<Instant>,
}

impl<S: 'static> GameLoop<S> {
    /// Create a loop; rejects configurations it cannot run with
    pub fn new(config: LoopConfig, state: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            clock: FrameClock::new(config.frames_per_second),
            config,
            entities: Vec::new(),
            pending: SceneCommands::new(),
            state,
            last_tick: None,
        })
    }

    /// Report `delta` on every tick instead of measured wall time
    pub fn with_fixed_delta(mut self, delta: Duration) -> Self {
        self.clock = FrameClock::with_fixed_delta(self.config.frames_per_second, delta);
        self
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Add an entity to the live set
    pub fn instantiate(&mut self, entity: impl Entity<S> + 'static) -> EntityId {
        self.instantiate_boxed(Box::new(entity))
    }

    pub fn instantiate_boxed(&mut self, entity: Box<dyn Entity<S>>) -> EntityId {
        let id = EntityId::new();
        log::debug!("Instantiate {} ({})", id, entity.name());
        self.entities.push((id, entity));
        id
    }

    /// Remove an entity by id; a missing id is ignored
    pub fn destroy(&mut self, id: EntityId) {
        self.entities.retain(|(live, _)| *live != id);
    }

    /// Remove every entity
    pub fn clear_scene(&mut self) {
        log::debug!("Clear scene ({} entities)", self.entities.len());
        self.entities.clear();
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.iter().any(|(live, _)| *live == id)
    }

    /// Ids of the live set in update order
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|(id, _)| *id).collect()
    }

    /// Borrow a live entity as its concrete type
    pub fn get<T: Entity<S>>(&self, id: EntityId) -> Option<&T> {
        self.entities
            .iter()
            .find(|(live, _)| *live == id)
            .and_then(|(_, entity)| (**entity).as_any().downcast_ref::<T>())
    }

    pub fn get_mut<T: Entity<S>>(&mut self, id: EntityId) -> Option<&mut T> {
        self.entities
            .iter_mut()
            .find(|(live, _)| *live == id)
            .and_then(|(_, entity)| (**entity).as_any_mut().downcast_mut::<T>())
    }

    /// Ids of every live entity of type `T`, in update order
    pub fn ids_of<T: Entity<S>>(&self) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, entity)| (**entity).as_any().is::<T>())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Run one tick at the current wall time
    pub fn tick(&mut self, pointer: &PointerState, surface: &mut dyn RenderSurface) -> usize {
        self.tick_at(Instant::now(), pointer, surface)
    }

    /// Run one tick stamped `now`. Returns the number of entities updated.
    pub fn tick_at(
        &mut self,
        now: Instant,
        pointer: &PointerState,
        surface: &mut dyn RenderSurface,
    ) -> usize {
        self.last_tick = Some(now);

        surface.clear();
        if self.config.is_grid_on {
            surface.draw_grid();
        }
        if self.config.is_frame_on {
            surface.draw_frame();
        }

        let resolution = self.config.resolution;
        let mut visited = 0;
        for (id, entity) in self.entities.iter_mut() {
            let mut ctx = TickContext::new(
                pointer,
                &self.clock,
                &mut *surface,
                &mut self.state,
                &mut self.pending,
                *id,
                resolution,
            );
            entity.update(&mut ctx);
            visited += 1;
        }

        self.apply_pending();
        self.clock.advance_to(now);
        log::trace!(
            "Tick {}: {} updated, {} live",
            self.clock.frame_count(),
            visited,
            self.entities.len()
        );
        visited
    }

    /// When the next tick is due on the fixed schedule.
    /// A late loop gets a deadline in the past; there is no catch-up.
    pub fn next_deadline(&self) -> Instant {
        match self.last_tick {
            Some(last) => last + self.clock.frame_interval(),
            None => Instant::now(),
        }
    }

    /// Tick forever at the configured rate, sampling the pointer before
    /// every tick. Ticks that run late are followed immediately by the next.
    pub fn start(
        &mut self,
        surface: &mut dyn RenderSurface,
        mut sample_pointer: impl FnMut() -> PointerState,
    ) -> ! {
        log::info!(
            "Loop started: {} tiles, {} fps",
            self.config.resolution,
            self.config.frames_per_second
        );
        loop {
            let deadline = self.next_deadline();
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
            let pointer = sample_pointer();
            self.tick(&pointer, surface);
        }
    }

    fn apply_pending(&mut self) {
        for command in self.pending.drain() {
            log::debug!("Apply {:?}", command);
            match command {
                SceneCommand::Spawn(id, entity) => self.entities.push((id, entity)),
                SceneCommand::Destroy(id) => self.destroy(id),
                SceneCommand::ClearScene => self.entities.clear(),
            }
        }
    }
}
