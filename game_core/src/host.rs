//! Seams to the host environment
//!
//! The game loop only talks to the outside world through these traits so the
//! browser adapters can be swapped for recorders in tests.

use crate::{GameError, Score};

/// 2D drawing surface with fixed pixel dimensions
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Opaque id of a requested frame, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Frame-synchronised callback scheduler (one invocation per display refresh)
pub trait FrameScheduler {
    /// Ask for one callback; on error no callback will arrive
    fn request_frame(&mut self) -> Result<FrameHandle, GameError>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Remote persistence of the two score counters
pub trait ScoreStore {
    /// Overwrite the stored scores. Called fire-and-forget: an error is
    /// logged by the caller and play continues.
    fn set(&mut self, score: Score) -> Result<(), GameError>;
}

/// User-facing dialogs
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;
    fn notify(&mut self, message: &str);
}
