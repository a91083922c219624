//! Headless match driver: two CPU players, fixed tick pacing, structured
//! logs instead of a renderer. Stands in for the windowed front end and
//! exercises the one-tick-per-frame contract with the core.

use std::thread;
use std::time::Duration;

use pong_core::{
    ConfigError, Control, Events, MatchConfig, MatchState, Params, TickInput,
};
use tracing::info;

const POINT_CAP: u32 = 5;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt::init();

    let config = MatchConfig {
        controls: [Control::Cpu(3), Control::Cpu(2)],
        seed: rand::random(),
        ..Default::default()
    };
    let mut state = MatchState::new(config)?;
    let mut events = Events::new();

    let tick_duration = Duration::from_secs(1) / Params::TICKS_PER_SECOND;
    let mut last_score = state.score;

    loop {
        state.tick(TickInput::default(), &mut events);

        if state.score != last_score {
            last_score = state.score;
            info!(left = state.score.left, right = state.score.right, "point");
        }

        if state.score.left >= POINT_CAP || state.score.right >= POINT_CAP {
            break;
        }

        thread::sleep(tick_duration);
    }

    let snapshot = state.snapshot();
    info!(
        left = snapshot.score.left,
        right = snapshot.score.right,
        "match over"
    );
    Ok(())
}
