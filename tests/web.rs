//! Browser bindings. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use othello_core::wasm;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn new_game_accepts_partial_config() {
    let config = js_sys::Object::new();
    Reflect::set(&config, &"difficulty".into(), &JsValue::from(2)).unwrap();
    Reflect::set(&config, &"ai_enabled".into(), &JsValue::FALSE).unwrap();

    let state = wasm::new_game(config.into()).unwrap();
    assert!(wasm::ai_move().is_err());

    assert_eq!(field(&state, "current_player"), JsValue::from_str("dark"));
    assert_eq!(field(&state, "dark_count"), JsValue::from(2));
    assert_eq!(wasm::status_message().unwrap(), "Dark's turn");
}

#[wasm_bindgen_test]
fn human_then_ai_round_trip() {
    wasm::new_game(JsValue::UNDEFINED).unwrap();

    let state = wasm::place(2, 3).unwrap();
    assert_eq!(field(&state, "current_player"), JsValue::from_str("light"));

    let state = wasm::ai_move().unwrap();
    assert_eq!(field(&state, "current_player"), JsValue::from_str("dark"));
    assert_eq!(field(&state, "move_count"), JsValue::from(2));
    assert!(wasm::get_result().unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn invalid_difficulty_is_an_error() {
    let config = js_sys::Object::new();
    Reflect::set(&config, &"difficulty".into(), &JsValue::from(9)).unwrap();

    assert!(wasm::new_game(config.into()).is_err());
}

#[wasm_bindgen_test]
fn illegal_click_is_an_error() {
    wasm::new_game(JsValue::UNDEFINED).unwrap();

    assert!(wasm::place(0, 0).is_err());
    assert!(wasm::place(8, 0).is_err());
}
