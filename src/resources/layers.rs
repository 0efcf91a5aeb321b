//! Ordered world layers.
//!
//! The ECS world stores entities in no particular order, so [`WorldLayers`]
//! keeps the insertion order of each layer. Systems that care about order
//! (collision pairs, drawing) walk the layers through [`WorldLayers::iter`],
//! which yields the level layer before the characters layer.

use bevy_ecs::prelude::*;

use crate::components::layer::Layer;

#[derive(Resource, Debug, Clone, Default)]
pub struct WorldLayers {
    level: Vec<Entity>,
    characters: Vec<Entity>,
}

impl WorldLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity at the end of a layer.
    pub fn push(&mut self, layer: Layer, entity: Entity) {
        self.layer_mut(layer).push(entity);
    }

    /// Entities of one layer in insertion order.
    pub fn layer(&self, layer: Layer) -> &[Entity] {
        match layer {
            Layer::Level => &self.level,
            Layer::Characters => &self.characters,
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut Vec<Entity> {
        match layer {
            Layer::Level => &mut self.level,
            Layer::Characters => &mut self.characters,
        }
    }

    /// All entities, level layer first.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        Layer::ALL
            .into_iter()
            .flat_map(move |layer| self.layer(layer).iter().copied())
    }

    pub fn len(&self) -> usize {
        self.level.len() + self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every entity. Used when the level is torn down.
    pub fn clear(&mut self) {
        self.level.clear();
        self.characters.clear();
    }
}
