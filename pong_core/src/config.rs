use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;

/// Who drives a paddle for one side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Drive commands arrive from an external input source each tick.
    Human,
    /// The built-in controller decides each tick; levels 0-3.
    Cpu(u8),
}

pub const AI_LEVEL_MAX: u8 = 3;

/// Session configuration supplied by the caller at match entry.
/// Field geometry and tuning are fixed for the session's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_wall_inset: f32,
    pub paddle_speed_limit: f32,
    pub ball_extent: f32,
    pub ball_launch_speed: f32,
    pub ball_speed_max: f32,
    /// Left then right.
    pub controls: [Control; 2],
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_wall_inset: Params::PADDLE_WALL_INSET,
            paddle_speed_limit: Params::PADDLE_SPEED_LIMIT,
            ball_extent: Params::BALL_EXTENT,
            ball_launch_speed: Params::BALL_LAUNCH_SPEED,
            ball_speed_max: Params::BALL_SPEED_MAX,
            controls: [Control::Human, Control::Cpu(3)],
            seed: 0,
        }
    }
}

/// Rejected configurations. Construction fails rather than producing
/// undefined motion.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field dimensions must be positive and finite, got {width}x{height}")]
    InvalidFieldSize { width: f32, height: f32 },
    #[error("paddle dimensions must be positive and finite, got {width}x{height}")]
    InvalidPaddleSize { width: f32, height: f32 },
    #[error("speed limit must be non-negative and finite, got {limit}")]
    InvalidSpeedLimit { limit: f32 },
    #[error("ball launch speed must be positive and finite, got {speed}")]
    InvalidLaunchSpeed { speed: f32 },
    #[error("AI level {level} out of range 0-{AI_LEVEL_MAX}")]
    InvalidAiLevel { level: u8 },
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_width.is_finite())
            || !(self.field_height > 0.0 && self.field_height.is_finite())
        {
            return Err(ConfigError::InvalidFieldSize {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !(self.paddle_width > 0.0 && self.paddle_width.is_finite())
            || !(self.paddle_height > 0.0 && self.paddle_height.is_finite())
        {
            return Err(ConfigError::InvalidPaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        for limit in [self.paddle_speed_limit, self.ball_speed_max] {
            if !(limit >= 0.0 && limit.is_finite()) {
                return Err(ConfigError::InvalidSpeedLimit { limit });
            }
        }
        if !(self.ball_launch_speed > 0.0 && self.ball_launch_speed.is_finite()) {
            return Err(ConfigError::InvalidLaunchSpeed {
                speed: self.ball_launch_speed,
            });
        }
        for control in self.controls {
            if let Control::Cpu(level) = control {
                if level > AI_LEVEL_MAX {
                    return Err(ConfigError::InvalidAiLevel { level });
                }
            }
        }
        Ok(())
    }
}
