use glam::Vec2;

use crate::motion::{Body, SpeedLimits};
use crate::params::Params;

/// A stationary power-up marker on the field. `kind == 0` means consumed:
/// the pickup is parked off-field where it can never overlap anything.
#[derive(Debug, Clone, Copy)]
pub struct Pickup {
    pub body: Body,
    pub kind: u8,
}

impl Pickup {
    pub fn new(pos: Vec2, kind: u8) -> Self {
        Self {
            body: Body::new(pos, Vec2::splat(Params::PICKUP_EXTENT), SpeedLimits::NONE),
            kind,
        }
    }

    pub fn is_active(&self) -> bool {
        self.kind != 0
    }

    pub fn deactivate(&mut self) {
        self.kind = 0;
    }

    /// One tick: an inert pickup is pinned to the off-field park position.
    pub fn advance(&mut self) {
        if !self.is_active() {
            self.body.pos = Vec2::new(Params::PICKUP_PARK_X, Params::PICKUP_PARK_Y);
        }
    }
}
