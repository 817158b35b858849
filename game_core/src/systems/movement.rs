use crate::Ball;
use hecs::World;

/// Integrate ball position by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_move_ball_adds_velocity() {
        let mut world = World::new();
        let ball = create_ball(&mut world, Vec2::new(400.0, 200.0), Vec2::new(-4.0, 4.0));

        move_ball(&mut world);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, Vec2::new(396.0, 204.0));
        assert_eq!(ball.vel, Vec2::new(-4.0, 4.0), "Velocity is untouched");
    }
}
