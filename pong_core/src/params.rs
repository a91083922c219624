/// Game tuning parameters for the Pong match simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_WALL_INSET: f32 = 32.0;
    pub const PADDLE_SPEED_LIMIT: f32 = 16.0; // vertical units per tick
    pub const PADDLE_DRIVE_ACCEL: f32 = 2.0; // applied while a drive command is held
    pub const PADDLE_ACCEL_DECAY: f32 = 1.0; // per tick, toward zero
    pub const PADDLE_COAST_DECAY: f32 = 1.0; // velocity bleed per tick without a command

    // Ball
    pub const BALL_EXTENT: f32 = 8.0;
    pub const BALL_LAUNCH_SPEED: f32 = 10.0;
    pub const BALL_SPEED_MAX: f32 = 20.0; // logistic growth asymptote
    pub const BALL_SPEED_GROWTH: f32 = 0.2; // logistic growth rate per paddle hit
    pub const MAX_DEFLECTION_DEG: f32 = 20.0; // paddle-face normal tilt at the paddle's tip
    pub const CONE_HALF_ANGLE_DEG: f32 = 65.0; // forward cone about the horizontal axis
    pub const LAUNCH_ANGLE_MIN_DEG: f32 = 45.0; // from vertical
    pub const LAUNCH_ANGLE_MAX_DEG: f32 = 135.0;

    // Pickup
    pub const PICKUP_EXTENT: f32 = 50.0;
    pub const PICKUP_SPAWN_X: f32 = 200.0;
    pub const PICKUP_SPAWN_Y: f32 = 200.0;
    pub const PICKUP_PARK_X: f32 = -500.0;
    pub const PICKUP_PARK_Y: f32 = -500.0;

    // Scheduling (frame pacing belongs to the caller, not the core)
    pub const TICKS_PER_SECOND: u32 = 32;
}
