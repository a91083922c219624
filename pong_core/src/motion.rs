use glam::Vec2;

/// Per-axis and combined speed caps. `None` means the axis is unconstrained.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedLimits {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub total: Option<f32>,
}

impl SpeedLimits {
    pub const NONE: SpeedLimits = SpeedLimits {
        x: None,
        y: None,
        total: None,
    };
}

/// A moving object on the field: centered bounding box plus kinematic state.
///
/// Every field entity (paddle, ball, pickup) is built around one of these.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    pub extent: Vec2,
    pub limits: SpeedLimits,
}

impl Body {
    pub fn new(pos: Vec2, extent: Vec2, limits: SpeedLimits) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            extent,
            limits,
        }
    }

    /// One integration step. Order is fixed: acceleration feeds velocity,
    /// velocity is clamped, and only then does the position move, so a
    /// limit violation can never become positional overshoot.
    pub fn integrate(&mut self) {
        self.vel += self.accel;
        self.clamp_velocity();
        self.pos += self.vel;
    }

    /// Apply the configured speed limits, preserving direction.
    pub fn clamp_velocity(&mut self) {
        if let Some(limit) = self.limits.x {
            if self.vel.x.abs() > limit {
                self.vel.x = limit.copysign(self.vel.x);
            }
        }
        if let Some(limit) = self.limits.y {
            if self.vel.y.abs() > limit {
                self.vel.y = limit.copysign(self.vel.y);
            }
        }
        if let Some(limit) = self.limits.total {
            let speed_sq = self.vel.length_squared();
            if speed_sq > limit * limit {
                self.vel *= limit / speed_sq.sqrt();
            }
        }
    }

    /// Centered-extent AABB overlap test. Edges touching counts as overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        let a = self.extent * 0.5;
        let b = other.extent * 0.5;
        self.pos.x + a.x >= other.pos.x - b.x
            && self.pos.x - a.x <= other.pos.x + b.x
            && self.pos.y + a.y >= other.pos.y - b.y
            && self.pos.y - a.y <= other.pos.y + b.y
    }
}

/// Which part of the field rectangle an object is touching, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Contact {
    pub fn touches_left(self) -> bool {
        matches!(self, Contact::Left | Contact::TopLeft | Contact::BottomLeft)
    }

    pub fn touches_right(self) -> bool {
        matches!(
            self,
            Contact::Right | Contact::TopRight | Contact::BottomRight
        )
    }
}

/// The play field rectangle, origin top-left, +y down.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Classify a bare position against the field edges. Used for paddles,
    /// whose travel limit already bakes in their own extent.
    pub fn contact(&self, pos: Vec2) -> Contact {
        self.classify(pos, Vec2::ZERO)
    }

    /// Classify a body's position inflated by half its extent, so the
    /// leading edge registers contact before the center crosses the wall.
    /// Used for the ball.
    pub fn edge_contact(&self, body: &Body) -> Contact {
        self.classify(body.pos, body.extent * 0.5)
    }

    fn classify(&self, pos: Vec2, half: Vec2) -> Contact {
        let left = pos.x - half.x <= 0.0;
        let right = pos.x + half.x >= self.width;
        let top = pos.y - half.y <= 0.0;
        let bottom = pos.y + half.y >= self.height;

        if left {
            if top {
                Contact::TopLeft
            } else if bottom {
                Contact::BottomLeft
            } else {
                Contact::Left
            }
        } else if right {
            if top {
                Contact::TopRight
            } else if bottom {
                Contact::BottomRight
            } else {
                Contact::Right
            }
        } else if top {
            Contact::Top
        } else if bottom {
            Contact::Bottom
        } else {
            Contact::None
        }
    }
}
