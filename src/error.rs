//! Setup errors. In-game misses ("word not found") are evaluator outcomes, not errors.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to parse dictionary or config JSON")]
    Json(#[from] serde_json::Error),
    #[error("dictionary is empty")]
    EmptyDictionary,
    #[error("dictionary entry {index} has a blank word")]
    BlankWord { index: usize },
    #[error("word '{0}' contains characters the keyboard cannot type")]
    UntypableWord(String),
    #[error("word '{word}' has rank 0; ranks start at 1")]
    ZeroRank { word: String },
    #[error("rank {rank} is shared by '{first}' and '{second}'")]
    DuplicateRank {
        rank: u32,
        first: String,
        second: String,
    },
    #[error("word '{0}' appears more than once")]
    DuplicateWord(String),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
