//! Entity kind and its per-kind state.
//!
//! [`EntityKind`] is both the kind tag and the payload that goes with it, so
//! a player can never carry level-tile state or the other way round. Systems
//! that only need to branch on the kind use [`EntityKind::tag`].

use bevy_ecs::prelude::Component;

/// Movement state of the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerState {
    #[default]
    Idle,
    Running,
    /// Declared for the data model; nothing transitions into it yet.
    Jumping,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerData {
    pub state: PlayerState,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnemyData {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelData {}

/// What a simulated entity is, together with the state that kind needs.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player(PlayerData),
    Enemy(EnemyData),
    Projectile,
    LevelTile(LevelData),
}

/// Payload-free discriminant of [`EntityKind`], used as a dispatch key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindTag {
    Player,
    Enemy,
    Projectile,
    LevelTile,
}

impl EntityKind {
    /// A player starting in the idle state.
    pub fn player() -> Self {
        EntityKind::Player(PlayerData::default())
    }

    pub fn level_tile() -> Self {
        EntityKind::LevelTile(LevelData::default())
    }

    pub fn tag(&self) -> KindTag {
        match self {
            EntityKind::Player(_) => KindTag::Player,
            EntityKind::Enemy(_) => KindTag::Enemy,
            EntityKind::Projectile => KindTag::Projectile,
            EntityKind::LevelTile(_) => KindTag::LevelTile,
        }
    }

    /// Player state, if this is the player.
    pub fn player_state(&self) -> Option<PlayerState> {
        match self {
            EntityKind::Player(data) => Some(data.state),
            _ => None,
        }
    }
}
