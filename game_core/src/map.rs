use crate::Config;
use glam::Vec2;

/// Fixed drawing bounds of the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.arena_width, config.arena_height)
    }

    /// Ball spawn point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Circle crosses the top or bottom edge
    pub fn touches_wall(&self, pos: Vec2, radius: f32) -> bool {
        pos.y + radius > self.height || pos.y - radius < 0.0
    }

    /// Circle is completely past the left edge
    pub fn exited_left(&self, pos: Vec2, radius: f32) -> bool {
        pos.x + radius < 0.0
    }

    /// Circle is completely past the right edge
    pub fn exited_right(&self, pos: Vec2, radius: f32) -> bool {
        pos.x - radius > self.width
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(Playfield::default().center(), Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_exit_needs_whole_ball_outside() {
        let field = Playfield::default();
        assert!(!field.exited_left(Vec2::new(-5.0, 200.0), 10.0));
        assert!(field.exited_left(Vec2::new(-10.5, 200.0), 10.0));
        assert!(!field.exited_right(Vec2::new(810.0, 200.0), 10.0));
        assert!(field.exited_right(Vec2::new(810.5, 200.0), 10.0));
    }

    #[test]
    fn test_touches_wall() {
        let field = Playfield::default();
        assert!(field.touches_wall(Vec2::new(400.0, 9.0), 10.0));
        assert!(field.touches_wall(Vec2::new(400.0, 391.0), 10.0));
        assert!(!field.touches_wall(Vec2::new(400.0, 10.0), 10.0));
        assert!(!field.touches_wall(Vec2::new(400.0, 390.0), 10.0));
    }
}
