//! DOM event wiring: keys, buttons and the difficulty select

use game_core::{Difficulty, GameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlSelectElement, KeyboardEvent};

pub const START_BUTTON_ID: &str = "startBtn";
pub const PAUSE_BUTTON_ID: &str = "pauseBtn";
pub const DIFFICULTY_SELECT_ID: &str = "difficulty";

type SharedGame = Rc<RefCell<GameLoop>>;

pub fn bind_controls(document: &Document, game: &SharedGame) {
    bind_keys(document, game.clone());

    match document.get_element_by_id(START_BUTTON_ID) {
        Some(button) => on_click(&button, game.clone(), |game| game.start()),
        None => log::warn!("#{START_BUTTON_ID} not found"),
    }
    match document.get_element_by_id(PAUSE_BUTTON_ID) {
        Some(button) => on_click(&button, game.clone(), |game| game.pause()),
        None => log::warn!("#{PAUSE_BUTTON_ID} not found"),
    }
    match difficulty_select(document) {
        Some(select) => bind_difficulty(select, game.clone()),
        None => log::warn!("#{DIFFICULTY_SELECT_ID} not found"),
    }
}

/// Difficulty currently picked in the page, if the select exists
pub fn selected_difficulty(document: &Document) -> Option<Difficulty> {
    let value = difficulty_select(document)?.value();
    match value.parse() {
        Ok(difficulty) => Some(difficulty),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

fn difficulty_select(document: &Document) -> Option<HtmlSelectElement> {
    document
        .get_element_by_id(DIFFICULTY_SELECT_ID)?
        .dyn_into::<HtmlSelectElement>()
        .ok()
}

fn bind_keys(document: &Document, game: SharedGame) {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        if let Ok(mut game) = game.try_borrow_mut() {
            game.handle_key(&event.key());
        }
    });
    if let Err(e) =
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to listen for keydown: {e:?}");
    }
    closure.forget();
}

fn on_click(target: &EventTarget, game: SharedGame, action: fn(&mut GameLoop)) {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        if let Ok(mut game) = game.try_borrow_mut() {
            action(&mut game);
        }
    });
    if let Err(e) =
        target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to listen for click: {e:?}");
    }
    closure.forget();
}

fn bind_difficulty(select: HtmlSelectElement, game: SharedGame) {
    let source = select.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        match source.value().parse::<Difficulty>() {
            Ok(difficulty) => {
                if let Ok(mut game) = game.try_borrow_mut() {
                    game.change_difficulty(difficulty);
                }
            }
            Err(e) => log::warn!("{e}"),
        }
    });
    if let Err(e) =
        select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to listen for change: {e:?}");
    }
    closure.forget();
}
