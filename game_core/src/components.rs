use glam::Vec2;

/// Which end of the table a paddle (and its player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // player 1
    Right, // player 2
}

impl Side {
    /// 1-based player number shown on screen
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // top edge
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Ball centre strictly between the paddle's top and bottom edges
    pub fn spans(&self, ball_y: f32, paddle_height: f32) -> bool {
        ball_y > self.y && ball_y < self.y + paddle_height
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to `center` moving diagonally in a random quadrant
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

        self.pos = center;
        self.vel = Vec2::new(sx * speed, sy * speed);
    }

    /// Start the next rally from `center`, sent back the other way
    pub fn serve_again(&mut self, center: Vec2) {
        self.pos = center;
        self.vel.x = -self.vel.x;
    }

    /// Set |DX| and |DY| to `speed` keeping the direction
    pub fn rescale(&mut self, speed: f32) {
        self.vel = Vec2::new(speed.copysign(self.vel.x), speed.copysign(self.vel.y));
    }
}
