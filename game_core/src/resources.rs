use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // player 1
    pub right: u8, // player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn increment_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0 && self.right == 0
    }

    /// A player wins when their score lands exactly on `win_score`
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left == win_score {
            Some(Side::Left)
        } else if self.right == win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Credit a point to `scorer` and report the winner, if any
    pub fn on_point_scored(&mut self, scorer: Side, win_score: u8) -> (Score, Option<Side>) {
        match scorer {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
        (*self, self.has_winner(win_score))
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    /// Player credited with a point because the ball left the far edge
    pub scorer: Option<Side>,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scorer = None;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
