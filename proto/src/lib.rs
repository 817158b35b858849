//! Score store protocol
//!
//! The stored value is a small JSON object (`{"player1Score":n,"player2Score":m}`);
//! WebSocket frames between the game and the store use postcard.

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

/// Durable Object binding name
pub const STORE_BINDING: &str = "SCORES";
/// Fixed key (and object name) the scores live under
pub const STORE_KEY: &str = "scores";
/// Route the game connects to
pub const STORE_ROUTE: &str = "/scores";

/// Persisted scores. Missing fields read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreRecord {
    pub player1_score: u8,
    pub player2_score: u8,
}

impl ScoreRecord {
    pub fn new(player1_score: u8, player2_score: u8) -> Self {
        Self {
            player1_score,
            player2_score,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a stored value; `null` means no record yet
    pub fn from_json(text: &str) -> Result<Option<Self>, serde_json::Error> {
        serde_json::from_str(text)
    }
}

// ============================================================================
// C2S Messages (Client to Store)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum C2S {
    /// Overwrite the stored scores
    SetScores(ScoreRecord),
}

// ============================================================================
// S2C Messages (Store to Client)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum S2C {
    /// Current value, sent on connect and after every write.
    /// `None` when nothing has been stored yet.
    Scores(Option<ScoreRecord>),
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl C2S {
    /// Serialize C2S message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize C2S message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl S2C {
    /// Serialize S2C message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize S2C message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
