//! Browser bindings (wasm32 only)
//!
//! The page owns rendering and confirmation dialogs; it drives the tracker
//! through `WebTracker` and re-renders from `scoreboard()` / `history()`
//! after each call. Structured results cross the boundary as JSON strings
//! and failures are thrown as JS `Error`s.

use wasm_bindgen::prelude::*;

use crate::error::TrackerError;
use crate::ledger::parse_score;
use crate::persistence::LocalStorage;
use crate::settings::Settings;
use crate::tracker::Tracker;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Cambio tracker starting...");
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(to_js)
}

/// Score from a form field; rejects anything that is not an integer
fn score(input: &str) -> Result<i64, JsValue> {
    parse_score(input).map_err(|e| to_js(TrackerError::from(e)))
}

#[wasm_bindgen]
pub struct WebTracker {
    inner: Tracker<LocalStorage>,
}

#[wasm_bindgen]
impl WebTracker {
    /// Open the tracker saved in LocalStorage; throws if it cannot be read
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebTracker, JsValue> {
        let inner = Tracker::open(LocalStorage::default(), Settings::load()).map_err(to_js)?;
        Ok(WebTracker { inner })
    }

    #[wasm_bindgen(js_name = addRound)]
    pub fn add_round(&mut self, mike_score: &str, preeta_score: &str) -> Result<String, JsValue> {
        let round = self
            .inner
            .add_round(score(mike_score)?, score(preeta_score)?)
            .map_err(to_js)?;
        to_json(&round)
    }

    #[wasm_bindgen(js_name = editRound)]
    pub fn edit_round(
        &mut self,
        index: usize,
        mike_score: &str,
        preeta_score: &str,
    ) -> Result<(), JsValue> {
        self.inner
            .edit_round(index, score(mike_score)?, score(preeta_score)?)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = deleteRound)]
    pub fn delete_round(&mut self, index: usize) -> Result<(), JsValue> {
        self.inner.delete_round(index).map_err(to_js)
    }

    #[wasm_bindgen(js_name = startNewSession)]
    pub fn start_new_session(&mut self) -> Result<(), JsValue> {
        self.inner.start_new_session().map_err(to_js)
    }

    #[wasm_bindgen(js_name = clearAllData)]
    pub fn clear_all_data(&mut self) -> Result<(), JsValue> {
        self.inner.clear_all_data().map_err(to_js)
    }

    /// Replace all rounds with a CSV file's contents; returns the count
    #[wasm_bindgen(js_name = importCsv)]
    pub fn import_csv(&mut self, content: &str) -> Result<usize, JsValue> {
        self.inner.import_csv(content).map_err(to_js)
    }

    /// `{filename, content}` as JSON, or `undefined` when there are no rounds
    #[wasm_bindgen(js_name = exportCsv)]
    pub fn export_csv(&self) -> Result<Option<String>, JsValue> {
        self.inner.export_csv().map(|e| to_json(&e)).transpose()
    }

    pub fn scoreboard(&self) -> Result<String, JsValue> {
        to_json(&self.inner.scoreboard())
    }

    /// Newest-first rounds with their chronological index
    pub fn history(&self) -> Result<String, JsValue> {
        to_json(&self.inner.history())
    }
}
