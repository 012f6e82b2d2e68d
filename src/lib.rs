//! Heatwords core crate.
//!
//! A daily animal guessing game: every calendar day picks one secret animal from
//! a ranked list, and each guess is scored by how close its rank sits to the
//! secret's. The game logic in [`game`] is plain Rust and runs natively; the
//! browser shell in `web` wires it to the DOM.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod heat;
pub mod seed;
mod web;

pub use config::GameConfig;
pub use dictionary::{AnimalEntry, Dictionary};
pub use error::GameError;
pub use game::{Effect, GameSession, Key, Outcome, Phase, Step};
pub use heat::{Heat, ParticleKind, classify};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

/// Start today's game with the bundled animal list and default settings.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default(), Dictionary::bundled()?)
}

/// Start with a JSON config object and/or a JSON `[{word, rank}]` list.
/// Missing arguments fall back to the defaults.
#[wasm_bindgen]
pub fn start_game_with(
    config_json: Option<String>,
    dictionary_json: Option<String>,
) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => GameConfig::from_json(&json)?,
        None => GameConfig::default(),
    };
    let dictionary = match dictionary_json {
        Some(json) => Dictionary::from_json(&json)?,
        None => Dictionary::bundled()?,
    };
    web::start(config, dictionary)
}

/// Feed a logical key token (`A`-`Z`, `ENTER`, `SPACE`, `⌫`, `BACKSPACE`).
/// Returns false for unrecognised tokens.
#[wasm_bindgen]
pub fn handle_input(key: &str) -> bool {
    web::dispatch_token(key)
}

/// Reveal the secret word. `None` before a game has started.
#[wasm_bindgen]
pub fn reveal_hint() -> Option<String> {
    web::reveal_hint()
}
