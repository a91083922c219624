use crate::ball::Ball;
use crate::motion::Field;
use crate::paddle::{Drive, Paddle};

/// Computer-controlled drive decision for one tick. Pure function of the
/// current ball and paddle state plus the difficulty level:
///
/// - 0: no action; the paddle drifts to rest.
/// - 1: tracks the ball only while it is heading toward this side.
/// - 2: as 1, but drifts back toward the vertical field center when not
///   tracking, unless already within one paddle height of it.
/// - 3: always tracks the ball.
pub fn decide(ball: &Ball, paddle: &Paddle, field: &Field, level: u8) -> Drive {
    if level == 0 {
        return Drive::Coast;
    }

    let approaching = ball.body.vel.x * paddle.side.sign() > 0.0;
    if approaching || level >= 3 {
        track(ball.body.pos.y - paddle.body.pos.y, paddle)
    } else if level >= 2 {
        let center = field.height / 2.0;
        let height = paddle.body.extent.y;
        if paddle.body.pos.y > center + height || paddle.body.pos.y < center - height {
            track(center - paddle.body.pos.y, paddle)
        } else {
            Drive::Coast
        }
    } else {
        Drive::Coast
    }
}

// Both comparisons deliberately share the same threshold; only an exact
// quarter-height offset yields no command.
fn track(difference: f32, paddle: &Paddle) -> Drive {
    let threshold = paddle.body.extent.y / 4.0;
    if difference > threshold {
        Drive::Down
    } else if difference < threshold {
        Drive::Up
    } else {
        Drive::Coast
    }
}
