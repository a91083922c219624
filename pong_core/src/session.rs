use glam::Vec2;
use serde::Serialize;
use tracing::{debug, info};

use crate::ai;
use crate::ball::Ball;
use crate::config::{ConfigError, Control, MatchConfig};
use crate::motion::Field;
use crate::paddle::{Drive, Paddle, Side};
use crate::params::Params;
use crate::pickup::Pickup;
use crate::resources::{Events, GameRng, Score};

/// Human drive commands for one tick, one per side. Ignored for sides
/// under CPU control.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: Drive,
    pub right: Drive,
}

/// Read-only view of one field object for an external renderer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObjectView {
    pub pos: Vec2,
    pub extent: Vec2,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub paddles: [ObjectView; 2],
    pub ball: ObjectView,
    pub pickup: ObjectView,
    pub pickup_active: bool,
    pub score: Score,
}

/// One match session: owns both paddles, the ball, the pickup, the score,
/// and the random generator, for as long as play lasts.
pub struct MatchState {
    pub config: MatchConfig,
    pub field: Field,
    /// Left then right.
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub pickup: Pickup,
    pub score: Score,
    rng: GameRng,
}

impl MatchState {
    /// Validates the configuration and builds the session. Malformed
    /// geometry is rejected here rather than producing undefined motion.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = Field::new(config.field_width, config.field_height);
        let mut rng = GameRng::new(config.seed);
        let paddles = [
            Paddle::new(Side::Left, &config),
            Paddle::new(Side::Right, &config),
        ];
        let ball = Ball::new(&config, &mut rng);
        let pickup = Pickup::new(Vec2::new(Params::PICKUP_SPAWN_X, Params::PICKUP_SPAWN_Y), 1);
        info!(
            width = field.width,
            height = field.height,
            controls = ?config.controls,
            "match session created"
        );
        Ok(Self {
            config,
            field,
            paddles,
            ball,
            pickup,
            score: Score::new(),
            rng,
        })
    }

    /// Advance the match by one fixed tick. Order is fixed: resolve drive
    /// commands, move paddles, move the ball (wall bounces, scoring, paddle
    /// deflections), move the pickup, then check pickup consumption.
    pub fn tick(&mut self, input: TickInput, events: &mut Events) {
        events.clear();

        let drives = [
            self.resolve_drive(0, input.left),
            self.resolve_drive(1, input.right),
        ];
        for (paddle, drive) in self.paddles.iter_mut().zip(drives) {
            paddle.apply_drive(drive);
            paddle.advance(&self.field);
        }

        let [left, right] = &self.paddles;
        self.ball.advance(
            &self.field,
            [left, right],
            &self.config,
            &mut self.score,
            events,
            &mut self.rng,
        );

        self.pickup.advance();
        self.consume_pickup();
    }

    fn resolve_drive(&self, index: usize, input: Drive) -> Drive {
        match self.config.controls[index] {
            Control::Human => input,
            Control::Cpu(level) => {
                ai::decide(&self.ball, &self.paddles[index], &self.field, level)
            }
        }
    }

    /// Grant an overlapped pickup to the paddle the ball is moving away
    /// from, then deactivate it. Inert pickups are parked off-field, so a
    /// later check can never fire again.
    fn consume_pickup(&mut self) {
        if !self.pickup.is_active() || !self.pickup.body.overlaps(&self.ball.body) {
            return;
        }
        let beneficiary = if self.ball.body.vel.x > 0.0 { 0 } else { 1 };
        self.paddles[beneficiary].power = self.pickup.kind;
        self.pickup.deactivate();
        debug!(
            side = ?self.paddles[beneficiary].side,
            kind = self.paddles[beneficiary].power,
            "pickup consumed"
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        let view = |body: &crate::motion::Body| ObjectView {
            pos: body.pos,
            extent: body.extent,
        };
        Snapshot {
            paddles: [view(&self.paddles[0].body), view(&self.paddles[1].body)],
            ball: view(&self.ball.body),
            pickup: view(&self.pickup.body),
            pickup_active: self.pickup.is_active(),
            score: self.score,
        }
    }
}
