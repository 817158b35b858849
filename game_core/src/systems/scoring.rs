use crate::{Ball, Config, Events, Playfield, Side};
use hecs::World;

/// Detect the ball leaving the playfield sideways.
///
/// Only records who scored; the ball is left where it is for the caller to
/// re-serve.
pub fn check_scoring(world: &World, field: &Playfield, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        if field.exited_left(ball.pos, config.ball_radius) {
            // Past player 1's goal line
            events.scorer = Some(Side::Right);
        } else if field.exited_right(ball.pos, config.ball_radius) {
            events.scorer = Some(Side::Left);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config, Events, Playfield};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Playfield, Events) {
        let config = Config::new();
        let field = Playfield::from_config(&config);
        (hecs::World::new(), config, field, Events::new())
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, field, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(-11.0, 200.0), Vec2::new(-4.0, 0.0));

        check_scoring(&world, &field, &config, &mut events);

        assert_eq!(events.scorer, Some(Side::Right), "Right player should score");
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, field, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(field.width + 11.0, 200.0), Vec2::new(4.0, 0.0));

        check_scoring(&world, &field, &config, &mut events);

        assert_eq!(events.scorer, Some(Side::Left), "Left player should score");
    }

    #[test]
    fn test_ball_is_not_moved() {
        let (mut world, config, field, mut events) = setup_world();
        let entity = create_ball(&mut world, Vec2::new(-11.0, 200.0), Vec2::new(-4.0, 0.0));

        check_scoring(&world, &field, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, Vec2::new(-11.0, 200.0));
    }

    #[test]
    fn test_no_scoring_while_ball_partly_visible() {
        let (mut world, config, field, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(-9.0, 200.0), Vec2::new(-4.0, 0.0));

        check_scoring(&world, &field, &config, &mut events);

        assert_eq!(events.scorer, None);
    }
}
