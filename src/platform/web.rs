//! Browser bridge
//!
//! The page owns the canvas and the `requestAnimationFrame` loop; it calls
//! `frame` with the callback timestamp and stops rescheduling once `frame`
//! returns false.

use wasm_bindgen::prelude::*;

use super::entropy_seed;
use crate::session::Session;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already initialized by an earlier module instance
        return;
    }
    log::info!("Pirate Fishing (web) ready");
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Game handle exposed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game from optional settings JSON
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<WebGame, JsValue> {
        let settings = match settings_json {
            Some(json) => Settings::from_json(&json).map_err(js_error)?,
            None => Settings::default(),
        };
        let session = Session::from_settings(&settings, entropy_seed()).map_err(js_error)?;
        Ok(WebGame { session })
    }

    /// Advance to `now_ms`; returns whether another frame should be requested
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.session.frame(now_ms)
    }

    pub fn cast(&mut self) {
        self.session.cast();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) {
        self.session.toggle_pause();
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    #[wasm_bindgen(js_name = setDemoMode)]
    pub fn set_demo_mode(&mut self, enabled: bool) {
        self.session.set_demo_mode(enabled);
    }

    /// Current `GameState` as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.state()).map_err(js_error)
    }

    /// Leaderboard as JSON
    #[wasm_bindgen(js_name = highScores)]
    pub fn high_scores(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.high_scores()).map_err(js_error)
    }

    pub fn seed(&self) -> u64 {
        self.session.seed()
    }
}
