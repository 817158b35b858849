//! requestAnimationFrame-backed frame scheduler

use crate::GameSlot;
use game_core::{FrameHandle, FrameScheduler, GameError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// One callback, created up front, serves every frame request
pub struct AnimationFrames {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrames {
    pub fn new(window: Window, game: GameSlot) -> Self {
        let callback = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            let game = game.borrow().upgrade();
            if let Some(game) = game {
                game.borrow_mut().tick();
            }
        });
        Self { window, callback }
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&mut self) -> Result<FrameHandle, GameError> {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| GameError::Scheduling(format!("requestAnimationFrame failed: {e:?}")))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame({}) failed: {e:?}", handle.0);
        }
    }
}
