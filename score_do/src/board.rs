use proto::{ScoreRecord, C2S, S2C};
use worker::*;

// Abstract connection for testing
pub trait Subscriber {
    fn send_bytes(&self, bytes: &[u8]) -> Result<()>;
}

impl Subscriber for WebSocket {
    fn send_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.send_with_bytes(bytes)
    }
}

// Abstract environment (Logging)
pub trait Environment {
    fn log(&self, msg: String);
}

pub struct WasmEnv;

impl Environment for WasmEnv {
    fn log(&self, msg: String) {
        console_log!("{}", msg);
    }
}

/// What `Storage::get` fails with when the key was never written
pub const MISSING_VALUE: &str = "No such value in storage.";

/// Read result for the score key: a never-written key is "no record yet",
/// every other failure is passed on.
pub fn stored_or_missing(read: Result<ScoreRecord>) -> Result<Option<ScoreRecord>> {
    match read {
        Ok(record) => Ok(Some(record)),
        Err(Error::JsError(msg)) if msg == MISSING_VALUE => Ok(None),
        Err(e) => Err(e),
    }
}

/// In-memory view of the stored scores plus fan-out to subscribers
pub struct ScoreBoard {
    pub env: Box<dyn Environment>,
    pub current: Option<ScoreRecord>,
    pub loaded: bool, // storage has been read once
    pub writes: u64,
}

impl ScoreBoard {
    pub fn new(env: Box<dyn Environment>) -> Self {
        Self {
            env,
            current: None,
            loaded: false,
            writes: 0,
        }
    }

    /// Seed from durable storage on first use
    pub fn hydrate(&mut self, stored: Option<ScoreRecord>) {
        self.env
            .log(format!("DO: Hydrated scores from storage: {stored:?}"));
        self.current = stored;
        self.loaded = true;
    }

    /// Hydrate from a storage read. A failed read leaves the board unloaded
    /// so the next request tries again.
    pub fn load(&mut self, read: Result<ScoreRecord>) -> Result<()> {
        let stored = stored_or_missing(read)?;
        self.hydrate(stored);
        Ok(())
    }

    /// Message describing the current value
    pub fn state_message(&self) -> S2C {
        S2C::Scores(self.current)
    }

    /// Send the current value to a newly connected subscriber
    pub fn greet(&self, subscriber: &dyn Subscriber) -> Result<()> {
        let bytes = self
            .state_message()
            .to_bytes()
            .map_err(|e| Error::RustError(format!("Failed to serialize Scores: {e:?}")))?;
        subscriber.send_bytes(&bytes)
    }

    /// Decode a client frame into the record it wants stored
    pub fn parse_message(&self, bytes: &[u8]) -> Result<ScoreRecord> {
        match C2S::from_bytes(bytes) {
            Ok(C2S::SetScores(record)) => Ok(record),
            Err(e) => Err(Error::RustError(format!(
                "Failed to parse C2S message: {e:?}"
            ))),
        }
    }

    /// Overwrite the value. Last writer wins.
    pub fn set(&mut self, record: ScoreRecord) {
        self.writes += 1;
        if self.writes % 50 == 0 {
            self.env.log(format!("DO: {} score writes so far", self.writes));
        }
        self.current = Some(record);
    }

    /// Push the current value to every subscriber; returns how many got it
    pub fn broadcast<S: Subscriber>(&self, subscribers: &[S]) -> usize {
        let bytes = match self.state_message().to_bytes() {
            Ok(b) => b,
            Err(_) => return 0,
        };

        subscribers
            .iter()
            .filter(|sub| sub.send_bytes(&bytes).is_ok())
            .count()
    }
}
