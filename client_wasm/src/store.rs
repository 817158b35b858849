//! Score store client
//!
//! One WebSocket to the store carries both directions: writes go out as
//! `C2S::SetScores`, and every `S2C::Scores` push (greeting included) is fed
//! into the running game.

use crate::GameSlot;
use game_core::{GameError, RunState, Score, ScoreStore};
use proto::{ScoreRecord, C2S, S2C};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{BinaryType, CloseEvent, MessageEvent, WebSocket};

pub fn record_from_score(score: Score) -> ScoreRecord {
    ScoreRecord::new(score.left, score.right)
}

pub fn score_from_record(record: ScoreRecord) -> Score {
    Score {
        left: record.player1_score,
        right: record.player2_score,
    }
}

struct Connection {
    ws: WebSocket,
    // Latest write made before the socket opened
    unsent: Option<ScoreRecord>,
}

pub struct SocketStore {
    conn: Rc<RefCell<Connection>>,
}

impl SocketStore {
    /// Open the store socket and route its pushes into `game`
    pub fn connect(url: &str, game: GameSlot) -> Result<Self, GameError> {
        let ws = WebSocket::new(url)
            .map_err(|e| GameError::Persistence(format!("Failed to open {url}: {e:?}")))?;
        ws.set_binary_type(BinaryType::Arraybuffer);

        let conn = Rc::new(RefCell::new(Connection {
            ws: ws.clone(),
            unsent: None,
        }));

        let onmessage = Closure::<dyn FnMut(_)>::new(move |event: MessageEvent| {
            let Ok(buffer) = event.data().dyn_into::<js_sys::ArrayBuffer>() else {
                log::debug!("Ignoring non-binary store frame");
                return;
            };
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
            match S2C::from_bytes(&bytes) {
                Ok(S2C::Scores(record)) => deliver(&game, record),
                Err(e) => log::warn!("Bad store frame: {e:?}"),
            }
        });
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        let pending = conn.clone();
        let onopen = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            log::info!("Score store connected");
            let unsent = pending.borrow_mut().unsent.take();
            if let Some(record) = unsent {
                if let Err(e) = send(&pending.borrow().ws, record) {
                    log::warn!("Score push failed: {e}");
                }
            }
        });
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        let onclose = Closure::<dyn FnMut(_)>::new(move |event: CloseEvent| {
            log::warn!(
                "Score store disconnected (code {}, reason {:?}); playing offline",
                event.code(),
                event.reason()
            );
        });
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();

        Ok(Self { conn })
    }
}

impl ScoreStore for SocketStore {
    fn set(&mut self, score: Score) -> Result<(), GameError> {
        let record = record_from_score(score);
        let mut conn = self.conn.borrow_mut();
        match conn.ws.ready_state() {
            WebSocket::OPEN => send(&conn.ws, record),
            WebSocket::CONNECTING => {
                conn.unsent = Some(record);
                Ok(())
            }
            _ => Err(GameError::Persistence(
                "Score store connection is closed".to_string(),
            )),
        }
    }
}

/// Used when the socket could not even be created
pub struct OfflineStore;

impl ScoreStore for OfflineStore {
    fn set(&mut self, _score: Score) -> Result<(), GameError> {
        Err(GameError::Persistence("Score store unavailable".to_string()))
    }
}

fn send(ws: &WebSocket, record: ScoreRecord) -> Result<(), GameError> {
    let bytes = C2S::SetScores(record)
        .to_bytes()
        .map_err(|e| GameError::Persistence(format!("Failed to encode scores: {e:?}")))?;
    ws.send_with_u8_array(&bytes)
        .map_err(|e| GameError::Persistence(format!("Failed to send scores: {e:?}")))
}

fn deliver(game: &GameSlot, record: Option<ScoreRecord>) {
    let Some(game) = game.borrow().upgrade() else {
        return;
    };
    let Ok(mut game) = game.try_borrow_mut() else {
        log::warn!("Game busy, dropping remote scores {record:?}");
        return;
    };

    game.apply_remote_scores(record.map(score_from_record));
    if game.state() != RunState::Running {
        game.draw();
    }
}
