use crate::{Difficulty, Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_spawn_y: f32,
    pub paddle_step: f32,
    pub ball_radius: f32,
    pub win_score: u8,
    pub difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_spawn_y: Params::PADDLE_SPAWN_Y,
            paddle_step: Params::PADDLE_STEP,
            ball_radius: Params::BALL_RADIUS,
            win_score: Params::WIN_SCORE,
            difficulty: Difficulty::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X of the paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.arena_width - self.paddle_width,
        }
    }

    /// Largest legal paddle Y (top edge)
    pub fn max_paddle_y(&self) -> f32 {
        self.arena_height - self.paddle_height
    }

    /// Whether a paddle top edge at `y` keeps the whole paddle on the playfield
    pub fn paddle_y_in_bounds(&self, y: f32) -> bool {
        (0.0..=self.max_paddle_y()).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 0.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 790.0, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_bounds() {
        let config = Config::new();
        assert_eq!(config.max_paddle_y(), 320.0);
        assert!(config.paddle_y_in_bounds(0.0));
        assert!(config.paddle_y_in_bounds(320.0));
        assert!(!config.paddle_y_in_bounds(-20.0));
        assert!(!config.paddle_y_in_bounds(340.0));
    }
}
