//! Simulation time.
//!
//! [`WorldTime`] carries the delta every system integrates with.
//! [`FrameClock`] turns the platform's monotonic millisecond ticks into that
//! delta.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

/// Derives per-frame deltas from monotonic millisecond ticks.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    previous_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick. The first tick returns zero, and so
    /// does a clock that went backwards.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let delta_ms = match self.previous_ms {
            Some(previous) => now_ms.saturating_sub(previous),
            None => 0,
        };
        self.previous_ms = Some(now_ms);
        delta_ms as f32 / 1000.0
    }
}
