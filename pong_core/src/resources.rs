use serde::Serialize;

use crate::params::Params;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Discrete effects emitted during one tick, consumed fire-and-forget by
/// an external audio/effect sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub wall_hit: bool,
    pub paddle_hit: bool,
    pub left_scored: bool,
    pub right_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Single shared pseudo-random generator, seeded once at session creation.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// A fresh launch angle in degrees from vertical, uniform over the
    /// serve range.
    pub fn launch_angle_deg(&mut self) -> f32 {
        use rand::Rng;
        self.0
            .gen_range(Params::LAUNCH_ANGLE_MIN_DEG..Params::LAUNCH_ANGLE_MAX_DEG)
    }
}
