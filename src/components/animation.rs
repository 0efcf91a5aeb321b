//! Sprite animation state.
//!
//! An [`Animation`] is a looping timer split into `frame_count` equal frames.
//! Definitions are built once by the asset setup and copied by value into
//! every entity that uses them, so each entity advances its own copy.
//! [`Animations`] is the per-entity list of tracks plus the active one.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    frame_count: usize,
    cycle_duration: f32,
    elapsed: f32,
}

impl Animation {
    /// Create an animation of `frame_count` frames looping every
    /// `cycle_duration` seconds.
    ///
    /// # Panics
    /// If `frame_count` is zero or `cycle_duration` is not strictly positive.
    pub fn new(frame_count: usize, cycle_duration: f32) -> Self {
        assert!(frame_count > 0, "animation needs at least one frame");
        assert!(
            cycle_duration > 0.0,
            "animation cycle duration must be positive, got {cycle_duration}"
        );
        Self {
            frame_count,
            cycle_duration,
            elapsed: 0.0,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn cycle_duration(&self) -> f32 {
        self.cycle_duration
    }

    /// Seconds into the current cycle, always in `[0, cycle_duration)`.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance the timer by `delta` seconds, wrapping with a modulo so a long
    /// frame cannot leave `elapsed` past the end of the cycle. Negative
    /// deltas are ignored.
    pub fn advance(&mut self, delta: f32) {
        let elapsed = (self.elapsed + delta.max(0.0)) % self.cycle_duration;
        // f32 rounding can land exactly on the bound
        self.elapsed = if elapsed >= self.cycle_duration {
            0.0
        } else {
            elapsed
        };
    }

    /// Index of the frame to show, in `[0, frame_count - 1]`.
    pub fn current_frame(&self) -> usize {
        let frame = (self.elapsed / self.cycle_duration * self.frame_count as f32) as usize;
        frame.min(self.frame_count - 1)
    }
}

/// The animation tracks an entity owns and which one is playing.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct Animations {
    tracks: Vec<Animation>,
    current: Option<usize>,
}

impl Animations {
    /// Tracks with nothing playing.
    pub fn new(tracks: Vec<Animation>) -> Self {
        Self {
            tracks,
            current: None,
        }
    }

    /// Start with track `index` playing.
    pub fn with_current(mut self, index: usize) -> Self {
        self.set_current(Some(index));
        self
    }

    /// Switch the playing track. Tracks keep their own elapsed time.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn set_current(&mut self, index: Option<usize>) {
        if let Some(i) = index {
            assert!(
                i < self.tracks.len(),
                "animation index {i} out of range ({} tracks)",
                self.tracks.len()
            );
        }
        self.current = index;
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&Animation> {
        self.current.map(|i| &self.tracks[i])
    }

    pub fn current_mut(&mut self) -> Option<&mut Animation> {
        self.current.map(|i| &mut self.tracks[i])
    }

    /// Frame of the playing track, or `None` when nothing plays.
    pub fn current_frame(&self) -> Option<usize> {
        self.current().map(Animation::current_frame)
    }

    pub fn tracks(&self) -> &[Animation] {
        &self.tracks
    }
}
