//! Player state machine and horizontal movement.
//!
//! Reads the horizontal intent from [`InputState`] and drives every player
//! entity:
//!
//! 1. Facing turns towards a non-zero intent and is kept otherwise.
//! 2. The state machine runs. `Idle -> Running` on non-zero intent,
//!    `Running -> Idle` on zero intent. Entering a state swaps the sprite
//!    texture and the playing animation once; staying idle with no intent
//!    brakes the body instead.
//! 3. The intent acceleration is applied and the horizontal speed capped.
//!
//! Gravity has already been applied this frame by
//! [`gravity`](crate::systems::movement::gravity); positions are integrated
//! afterwards by [`movement`](crate::systems::movement::movement).

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::Animations;
use crate::components::facing::Facing;
use crate::components::kind::{EntityKind, PlayerState};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::gameassets::{ANIM_PLAYER_IDLE, ANIM_PLAYER_RUN, GameAssets};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// State the player moves to given its current state and this tick's intent.
///
/// `Jumping` has no transitions yet and is kept as is.
pub fn next_state(state: PlayerState, intent: f32) -> PlayerState {
    match state {
        PlayerState::Idle if intent != 0.0 => PlayerState::Running,
        PlayerState::Running if intent == 0.0 => PlayerState::Idle,
        other => other,
    }
}

/// Swap texture and animation for a freshly entered state.
fn enter_state(
    state: PlayerState,
    sprite: &mut Sprite,
    animations: &mut Animations,
    assets: &GameAssets,
) {
    match state {
        PlayerState::Idle => {
            sprite.tex = assets.idle;
            animations.set_current(Some(ANIM_PLAYER_IDLE));
        }
        PlayerState::Running => {
            sprite.tex = assets.running;
            animations.set_current(Some(ANIM_PLAYER_RUN));
        }
        PlayerState::Jumping => {}
    }
}

/// Run the player state machine and apply input-driven acceleration.
pub fn player_controller(
    mut query: Query<(
        &mut EntityKind,
        &mut RigidBody,
        &mut Facing,
        &mut Sprite,
        &mut Animations,
    )>,
    input: Res<InputState>,
    assets: Res<GameAssets>,
    time: Res<WorldTime>,
) {
    let intent = input.intent();
    let delta = time.delta;

    for (mut kind, mut rigidbody, mut facing, mut sprite, mut animations) in query.iter_mut() {
        let EntityKind::Player(data) = &mut *kind else {
            continue;
        };

        facing.face(intent);

        let state = next_state(data.state, intent);
        if state != data.state {
            debug!("Player {:?} -> {:?}", data.state, state);
            data.state = state;
            enter_state(state, &mut sprite, &mut animations, &assets);
        } else if state == PlayerState::Idle {
            rigidbody.decelerate_x(delta);
        }

        rigidbody.accelerate(intent, delta);
        rigidbody.clamp_horizontal(intent);
    }
}
