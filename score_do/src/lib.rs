use proto::*;
use std::cell::RefCell;
use worker::*;

mod board;
#[cfg(test)]
mod tests;

pub use board::{stored_or_missing, Environment, ScoreBoard, Subscriber, WasmEnv};

/// Holds the single shared score record and pushes every write to the
/// connected games.
#[durable_object]
pub struct ScoreStoreDO {
    state: State,
    #[allow(dead_code)]
    env: Env,
    board: RefCell<ScoreBoard>,
}

impl DurableObject for ScoreStoreDO {
    fn new(state: State, env: Env) -> Self {
        Self {
            state,
            env,
            board: RefCell::new(ScoreBoard::new(Box::new(WasmEnv))),
        }
    }

    async fn fetch(&self, mut req: Request) -> Result<Response> {
        console_log!("DO: Received request, method: {:?}", req.method());

        if let Err(e) = self.ensure_loaded().await {
            console_error!("DO: Failed to read stored scores: {:?}", e);
            return Response::error("Failed to read stored scores", 500);
        }

        let upgrade_header = req.headers().get("Upgrade");
        match upgrade_header {
            Ok(Some(header)) if header.to_lowercase() == "websocket" => {
                return self.accept_subscriber();
            }
            Ok(_) => {}
            Err(err) => {
                console_error!("DO: Failed to read Upgrade header: {:?}", err);
                return Response::error("Failed to read request headers", 500);
            }
        }

        match req.method() {
            Method::Get => {
                let current = self.board.borrow().current;
                Response::from_json(&current)
            }
            Method::Put => {
                let body = req.text().await?;
                let record = match ScoreRecord::from_json(&body) {
                    Ok(Some(record)) => record,
                    Ok(None) => return Response::error("Expected a score record", 400),
                    Err(e) => {
                        console_error!("DO: Rejected score body: {e}");
                        return Response::error("Invalid score record", 400);
                    }
                };
                self.store(record).await?;
                Response::from_json(&record)
            }
            _ => Response::error("Method not allowed", 405),
        }
    }

    async fn websocket_message(
        &self,
        _ws: WebSocket,
        message: durable::WebSocketIncomingMessage,
    ) -> Result<()> {
        match message {
            durable::WebSocketIncomingMessage::String(_text) => {
                // Ignore text messages
            }
            durable::WebSocketIncomingMessage::Binary(bytes) => {
                let parsed = self.board.borrow().parse_message(&bytes);
                match parsed {
                    Ok(record) => {
                        if let Err(e) = self.store(record).await {
                            console_error!("Error storing scores: {e:?}");
                        }
                    }
                    Err(e) => console_error!("{e:?}"),
                }
            }
        }
        Ok(())
    }

    async fn websocket_close(
        &self,
        _ws: WebSocket,
        code: usize,
        reason: String,
        _was_clean: bool,
    ) -> Result<()> {
        console_log!("DO: Subscriber left (code {}, reason {:?})", code, reason);
        Ok(())
    }

    async fn websocket_error(&self, _ws: WebSocket, error: Error) -> Result<()> {
        console_error!("DO: WebSocket error: {:?}", error);
        Ok(())
    }
}

impl ScoreStoreDO {
    #[allow(clippy::await_holding_refcell_ref)] // We drop the RefCell borrow before await
    async fn ensure_loaded(&self) -> Result<()> {
        if self.board.borrow().loaded {
            return Ok(());
        }

        let read = self.state.storage().get::<ScoreRecord>(STORE_KEY).await;
        self.board.borrow_mut().load(read)
    }

    fn accept_subscriber(&self) -> Result<Response> {
        let pair = match WebSocketPair::new() {
            Ok(pair) => pair,
            Err(err) => {
                console_error!("DO: Failed to create WebSocket pair: {:?}", err);
                return Response::error("Failed to create WebSocket pair", 500);
            }
        };

        let server = pair.server;
        let client = pair.client;

        #[allow(clippy::needless_borrows_for_generic_args)]
        self.state.accept_web_socket(&server);

        // New subscribers hear the current value straight away
        if let Err(e) = self.board.borrow().greet(&server) {
            console_error!("DO: Failed to greet subscriber: {:?}", e);
        }

        Response::from_websocket(client)
    }

    /// Persist, then fan out to every connected game
    async fn store(&self, record: ScoreRecord) -> Result<()> {
        self.state.storage().put(STORE_KEY, &record).await?;

        let sockets = self.state.get_websockets();
        let mut board = self.board.borrow_mut();
        board.set(record);
        let delivered = board.broadcast(&sockets);
        if delivered < sockets.len() {
            console_error!(
                "DO: Delivered scores to {}/{} subscribers",
                delivered,
                sockets.len()
            );
        }
        Ok(())
    }
}
