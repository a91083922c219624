//! Deterministic two-player Pong match simulation.
//!
//! The crate is the physics and rules core only: it owns paddle, ball, and
//! pickup motion, collision and scoring, and the computer opponent. Input
//! sampling, rendering, audio playback, and frame pacing belong to the
//! caller, which drives [`MatchState::tick`] once per fixed tick and reads
//! back a [`Snapshot`] plus the [`Events`] emitted during the step.

pub mod ai;
pub mod ball;
pub mod config;
pub mod motion;
pub mod paddle;
pub mod params;
pub mod pickup;
pub mod resources;
pub mod session;

pub use ball::Ball;
pub use config::{ConfigError, Control, MatchConfig, AI_LEVEL_MAX};
pub use motion::{Body, Contact, Field, SpeedLimits};
pub use paddle::{Drive, Paddle, Side};
pub use params::Params;
pub use pickup::Pickup;
pub use resources::{Events, GameRng, Score};
pub use session::{MatchState, ObjectView, Snapshot, TickInput};
