use crate::{Ball, Config, Events, Paddle, Playfield, Side};
use hecs::World;

/// Bounce the ball off the top/bottom walls and the paddles
pub fn check_collisions(world: &mut World, field: &Playfield, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // No clamping: an overshoot corrects itself on the following frames
        if field.touches_wall(ball.pos, radius) {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            let reached = match paddle.side {
                Side::Left => ball.pos.x - radius < config.paddle_width,
                Side::Right => ball.pos.x + radius > field.width - config.paddle_width,
            };

            if reached && paddle.spans(ball.pos.y, config.paddle_height) {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }
    }
}
