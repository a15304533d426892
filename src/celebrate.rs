//! Completion Effect
//!
//! Alert plus a confetti burst from the page-global `confetti` function
//! (canvas-confetti, loaded by index.html).

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::EffectError;

pub const COMPLETION_MESSAGE: &str = "shopping completed";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = confetti, catch)]
    fn confetti(options: JsValue) -> Result<JsValue, JsValue>;
}

/// Options passed straight to canvas-confetti
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfettiOptions {
    pub particle_count: u32,
    pub start_velocity: u32,
    pub spread: u32,
    pub decay: f64,
    pub scalar: f64,
}

impl Default for ConfettiOptions {
    fn default() -> Self {
        Self {
            particle_count: 200,
            start_velocity: 30,
            spread: 360,
            decay: 0.9,
            scalar: 1.2,
        }
    }
}

/// Show the alert, then fire confetti
pub fn celebrate(options: &ConfettiOptions) -> Result<(), EffectError> {
    let window = web_sys::window().ok_or(EffectError::NoWindow)?;
    window
        .alert_with_message(COMPLETION_MESSAGE)
        .map_err(|e| EffectError::Js(format!("{:?}", e)))?;
    fire_confetti(options)
}

fn fire_confetti(options: &ConfettiOptions) -> Result<(), EffectError> {
    let loaded = js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("confetti"))
        .unwrap_or(false);
    if !loaded {
        return Err(EffectError::ConfettiMissing);
    }
    let js_options = serde_wasm_bindgen::to_value(options).map_err(|e| EffectError::Encode(e.to_string()))?;
    confetti(js_options).map_err(|e| EffectError::Js(format!("{:?}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_use_canvas_confetti_names() {
        let json = serde_json::to_value(ConfettiOptions::default()).unwrap();
        assert_eq!(json["particleCount"], 200);
        assert_eq!(json["startVelocity"], 30);
        assert_eq!(json["spread"], 360);
        assert_eq!(json["decay"], 0.9);
        assert_eq!(json["scalar"], 1.2);
    }

    #[test]
    fn test_partial_options_fall_back_to_defaults() {
        let options: ConfettiOptions = serde_json::from_str(r#"{ "spread": 90 }"#).unwrap();
        assert_eq!(options.spread, 90);
        assert_eq!(options.particle_count, 200);
    }
}
