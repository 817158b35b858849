//! Browser host for the Pong game
//!
//! Wires the canvas, animation frames, dialogs, DOM controls and the score
//! store socket into a `game_core::GameLoop`.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod dialogs;
mod input;
mod scheduler;
mod store;

use canvas::{find_canvas, CanvasSurface};
use dialogs::BrowserPrompt;
use game_core::*;
use scheduler::AnimationFrames;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use store::{OfflineStore, SocketStore};
use wasm_bindgen::prelude::*;

/// Late-bound handle to the game, for callbacks created before it exists
pub(crate) type GameSlot = Rc<RefCell<Weak<RefCell<GameLoop>>>>;

/// Entry point called from the page once the module is loaded
#[wasm_bindgen]
pub fn run(canvas_id: &str, scores_url: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second call keeps the logger from the first one
    let _ = console_log::init_with_level(log::Level::Info);

    start(canvas_id, scores_url).map_err(|e| {
        log::error!("{e}");
        JsValue::from_str(&e.to_string())
    })
}

fn start(canvas_id: &str, scores_url: &str) -> Result<(), GameError> {
    let window =
        web_sys::window().ok_or_else(|| GameError::Initialization("No window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| GameError::Initialization("No document".to_string()))?;

    let canvas = find_canvas(&document, canvas_id)?;
    let surface = CanvasSurface::from_canvas(&canvas)?;

    let mut config = Config::new();
    config.arena_width = canvas.width() as f32;
    config.arena_height = canvas.height() as f32;
    if let Some(difficulty) = input::selected_difficulty(&document) {
        config.difficulty = difficulty;
    }

    let slot: GameSlot = Rc::new(RefCell::new(Weak::new()));

    let store: Box<dyn ScoreStore> = match SocketStore::connect(scores_url, slot.clone()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{e}; scores will not be shared");
            Box::new(OfflineStore)
        }
    };

    let host = Host {
        surface: Box::new(surface),
        scheduler: Box::new(AnimationFrames::new(window.clone(), slot.clone())),
        store,
        prompt: Box::new(BrowserPrompt::new(window)),
    };

    let seed = js_sys::Date::now() as u64;
    let session = GameSession::new(config, GameRng::new(seed));
    let game = Rc::new(RefCell::new(GameLoop::new(session, host)));
    *slot.borrow_mut() = Rc::downgrade(&game);

    input::bind_controls(&document, &game);
    game.borrow_mut().draw();

    log::info!("Pong ready ({}x{})", canvas.width(), canvas.height());
    Ok(())
}
