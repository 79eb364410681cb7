//! Scene control shared by the loop and a running tick

use crate::entity::{Entity, TickContext};
use crate::game_loop::GameLoop;
use mosaic_core::EntityId;

/// Operations game flows need, whether run at startup against the loop
/// or from an entity's update against its tick context.
///
/// Changes made through a tick context take effect after the pass.
pub trait Scene<S> {
    fn instantiate_boxed(&mut self, entity: Box<dyn Entity<S>>) -> EntityId;

    fn destroy(&mut self, id: EntityId);

    fn clear_scene(&mut self);

    fn state_mut(&mut self) -> &mut S;

    fn resolution(&self) -> u32;
}

impl<S: 'static> Scene<S> for GameLoop<S> {
    fn instantiate_boxed(&mut self, entity: Box<dyn Entity<S>>) -> EntityId {
        GameLoop::instantiate_boxed(self, entity)
    }

    fn destroy(&mut self, id: EntityId) {
        GameLoop::destroy(self, id)
    }

    fn clear_scene(&mut self) {
        GameLoop::clear_scene(self)
    }

    fn state_mut(&mut self) -> &mut S {
        GameLoop::state_mut(self)
    }

    fn resolution(&self) -> u32 {
        self.config().resolution
    }
}

impl<S> Scene<S> for TickContext<'_, S> {
    fn instantiate_boxed(&mut self, entity: Box<dyn Entity<S>>) -> EntityId {
        TickContext::instantiate_boxed(self, entity)
    }

    fn destroy(&mut self, id: EntityId) {
        TickContext::destroy(self, id)
    }

    fn clear_scene(&mut self) {
        TickContext::clear_scene(self)
    }

    fn state_mut(&mut self) -> &mut S {
        self.state
    }

    fn resolution(&self) -> u32 {
        TickContext::resolution(self)
    }
}
