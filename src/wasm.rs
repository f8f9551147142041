//! `wasm-bindgen` surface for the browser front-end.
//!
//! The front-end only maps clicks to `(row, col)` and draws whatever
//! `get_state` returns; every rule decision happens in the engine.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::GameInstance;

static GAME: Lazy<Mutex<Option<GameInstance>>> = Lazy::new(|| Mutex::new(None));

fn lock_game() -> MutexGuard<'static, Option<GameInstance>> {
    GAME.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_game<T>(f: impl FnOnce(&mut GameInstance) -> Result<T, JsError>) -> Result<T, JsError> {
    let mut guard = lock_game();
    let game = guard
        .as_mut()
        .ok_or_else(|| JsError::new("no game in progress"))?;
    f(game)
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()))
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Routes `log` output to the browser console.
#[wasm_bindgen]
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A second call keeps the first logger.
    let _ = console_log::init_with_level(level);
}

/// Starts a new game. `config` may be `undefined` or a partial
/// `{ difficulty, ai_enabled, think_time_ms, weights }` object, using the
/// same snake_case keys as the returned state.
#[wasm_bindgen]
pub fn new_game(config: JsValue) -> Result<JsValue, JsError> {
    let config: GameConfig = if config.is_undefined() || config.is_null() {
        GameConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|err| JsError::new(&err.to_string()))?
    };

    let game = GameInstance::new(&config)?;
    let state = to_js(&game.to_game_state())?;
    *lock_game() = Some(game);
    Ok(state)
}

#[wasm_bindgen]
pub fn restart() -> Result<JsValue, JsError> {
    with_game(|game| {
        game.restart();
        to_js(&game.to_game_state())
    })
}

#[wasm_bindgen]
pub fn get_state() -> Result<JsValue, JsError> {
    with_game(|game| to_js(&game.to_game_state()))
}

#[wasm_bindgen]
pub fn get_legal_moves() -> Result<JsValue, JsError> {
    with_game(|game| to_js(&game.legal_moves()))
}

#[wasm_bindgen]
pub fn place(row: u8, col: u8) -> Result<JsValue, JsError> {
    with_game(|game| {
        game.place(row, col)?;
        to_js(&game.to_game_state())
    })
}

#[wasm_bindgen]
pub fn ai_move() -> Result<JsValue, JsError> {
    with_game(|game| {
        game.do_ai_move()?;
        to_js(&game.to_game_state())
    })
}

/// `undefined` while the game is running.
#[wasm_bindgen]
pub fn get_result() -> Result<JsValue, JsError> {
    with_game(|game| to_js(&game.to_game_result()))
}

#[wasm_bindgen]
pub fn status_message() -> Result<String, JsError> {
    with_game(|game| Ok(game.status_message()))
}
