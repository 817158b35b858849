use crate::{Config, Paddle, Side};
use hecs::World;

/// A recognised paddle control key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleKey {
    pub side: Side,
    pub dir: i8, // -1 = up, 1 = down
}

impl PaddleKey {
    /// Map a DOM `KeyboardEvent.key` value to a paddle move
    pub fn from_key(key: &str) -> Option<Self> {
        let (side, dir) = match key {
            "w" => (Side::Left, -1),
            "s" => (Side::Left, 1),
            "ArrowUp" => (Side::Right, -1),
            "ArrowDown" => (Side::Right, 1),
            _ => return None,
        };
        Some(Self { side, dir })
    }
}

/// Apply one discrete paddle step for a keydown event.
///
/// Returns the paddle's new Y, or `None` when the key is not a control or the
/// step would take the paddle off the playfield (the move is dropped).
pub fn handle_key_down(world: &mut World, config: &Config, key: &str) -> Option<(Side, f32)> {
    let PaddleKey { side, dir } = PaddleKey::from_key(key)?;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != side {
            continue;
        }

        let target = paddle.y + dir as f32 * config.paddle_step;
        if !config.paddle_y_in_bounds(target) {
            log::debug!("Rejected {key:?}: paddle {side:?} would move to {target}");
            return None;
        }

        paddle.y = target;
        return Some((side, target));
    }

    None
}
