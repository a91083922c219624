use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::motion::{Body, Contact, Field, SpeedLimits};
use crate::params::Params;

/// Which side of the field a paddle defends. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign convention used by the collision math: the ball moves toward
    /// this side when `vel.x * sign()` is positive.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Per-tick drive command for one paddle, produced by the input
/// collaborator or the AI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Drive {
    Up,
    Down,
    /// No command this tick; the paddle bleeds off velocity.
    #[default]
    Coast,
}

/// A paddle: vertically mobile, horizontally pinned to its side.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub body: Body,
    pub side: Side,
    /// Power-up level granted by pickups. Zero until one is collected.
    pub power: u8,
}

impl Paddle {
    pub fn new(side: Side, config: &MatchConfig) -> Self {
        let x = match side {
            Side::Left => config.paddle_wall_inset,
            Side::Right => config.field_width - config.paddle_wall_inset,
        };
        let body = Body::new(
            Vec2::new(x, config.field_height / 2.0),
            Vec2::new(config.paddle_width, config.paddle_height),
            SpeedLimits {
                x: Some(0.0), // never moves horizontally
                y: Some(config.paddle_speed_limit),
                total: None,
            },
        );
        Self {
            body,
            side,
            power: 0,
        }
    }

    /// Set vertical acceleration from a direction in {-1, 0, 1}.
    pub fn set_drive(&mut self, dir: i8) {
        self.body.accel.y = f32::from(dir) * Params::PADDLE_DRIVE_ACCEL;
    }

    /// Convert this tick's drive command into acceleration. Coasting bleeds
    /// velocity toward zero instead, modelling input release without an
    /// instant stop.
    pub fn apply_drive(&mut self, drive: Drive) {
        match drive {
            Drive::Up => self.set_drive(-1),
            Drive::Down => self.set_drive(1),
            Drive::Coast => {
                let vy = self.body.vel.y;
                if vy != 0.0 {
                    self.body.vel.y = vy - vy.signum() * vy.abs().min(Params::PADDLE_COAST_DECAY);
                }
            }
        }
    }

    /// One tick: integrate, stop dead on the top/bottom walls, then decay
    /// acceleration toward zero.
    pub fn advance(&mut self, field: &Field) {
        self.body.integrate();

        match field.contact(self.body.pos) {
            Contact::Top => {
                self.body.accel.y = 0.0;
                self.body.vel.y = 0.0;
                self.body.pos.y = 0.0;
            }
            Contact::Bottom => {
                self.body.accel.y = 0.0;
                self.body.vel.y = 0.0;
                self.body.pos.y = field.height;
            }
            _ => {}
        }

        let ay = self.body.accel.y;
        if ay != 0.0 {
            self.body.accel.y = ay - ay.signum() * ay.abs().min(Params::PADDLE_ACCEL_DECAY);
        }
    }
}
