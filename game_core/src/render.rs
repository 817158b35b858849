use crate::{Config, Side, Snapshot, Surface};

pub const SCORE_FONT: &str = "20px Arial";
pub const SCORE_COLOR: &str = "black";
pub const LEFT_PADDLE_COLOR: &str = "blue";
pub const RIGHT_PADDLE_COLOR: &str = "red";
pub const BALL_COLOR: &str = "green";

/// Draw one frame: clear, scores, paddles, ball
pub fn draw_frame(surface: &mut dyn Surface, snap: &Snapshot, config: &Config) {
    surface.clear_rect(0.0, 0.0, config.arena_width, config.arena_height);
    draw_scores(surface, snap, config);
    draw_paddles(surface, snap, config);
    draw_ball(surface, snap, config);
}

fn draw_scores(surface: &mut dyn Surface, snap: &Snapshot, config: &Config) {
    surface.fill_text(
        &format!("Player 1: {}", snap.score.left),
        20.0,
        30.0,
        SCORE_FONT,
        SCORE_COLOR,
    );
    surface.fill_text(
        &format!("Player 2: {}", snap.score.right),
        config.arena_width - 140.0,
        30.0,
        SCORE_FONT,
        SCORE_COLOR,
    );
}

fn draw_paddles(surface: &mut dyn Surface, snap: &Snapshot, config: &Config) {
    for (side, y, color) in [
        (Side::Left, snap.paddle_left_y, LEFT_PADDLE_COLOR),
        (Side::Right, snap.paddle_right_y, RIGHT_PADDLE_COLOR),
    ] {
        surface.fill_rect(
            config.paddle_x(side),
            y,
            config.paddle_width,
            config.paddle_height,
            color,
        );
    }
}

fn draw_ball(surface: &mut dyn Surface, snap: &Snapshot, config: &Config) {
    surface.fill_circle(snap.ball_x, snap.ball_y, config.ball_radius, BALL_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RunState, Score};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Surface for Recorder {
        fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(format!("clear {x} {y} {w} {h}"));
        }
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
            self.calls.push(format!("rect {x} {y} {w} {h} {color}"));
        }
        fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
            self.calls.push(format!("circle {x} {y} {radius} {color}"));
        }
        fn fill_text(&mut self, text: &str, x: f32, y: f32, _font: &str, _color: &str) {
            self.calls.push(format!("text {text} {x} {y}"));
        }
    }

    #[test]
    fn test_draw_order_and_positions() {
        let config = Config::new();
        let snap = Snapshot {
            ball_x: 400.0,
            ball_y: 200.0,
            paddle_left_y: 100.0,
            paddle_right_y: 220.0,
            score: Score { left: 2, right: 1 },
            state: RunState::Running,
        };
        let mut surface = Recorder::default();

        draw_frame(&mut surface, &snap, &config);

        assert_eq!(
            surface.calls,
            vec![
                "clear 0 0 800 400",
                "text Player 1: 2 20 30",
                "text Player 2: 1 660 30",
                "rect 0 100 10 80 blue",
                "rect 790 220 10 80 red",
                "circle 400 200 10 green",
            ]
        );
    }
}
