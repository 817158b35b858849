pub mod components;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod fsm;
pub mod game_loop;
pub mod host;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use error::*;
pub use fsm::*;
pub use game_loop::*;
pub use host::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Advance the ball by one frame and resolve what it ran into.
///
/// `events` is cleared first and then describes this frame only.
pub fn advance(world: &mut World, field: &Playfield, config: &Config, events: &mut Events) {
    events.clear();

    // 1. Integrate position
    move_ball(world);

    // 2. Walls and paddles
    check_collisions(world, field, config, events);

    // 3. Ball fully off the left or right edge
    check_scoring(world, field, config, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
