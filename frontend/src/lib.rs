use log::{debug, info, warn};
use shared::DraftInspector;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod storage;

use config::Config;
use storage::BrowserStore;

/// Reads every tournament builder slot from localStorage and returns the
/// inspection report as JSON. Blocked storage shows up as unreadable slots.
#[wasm_bindgen]
pub fn inspect_draft() -> Result<String, JsValue> {
    let store = BrowserStore::new();
    if let Err(error) = &store {
        warn!("Browser storage unavailable: {}", error);
    }
    let inspector = DraftInspector::new(store, Config::storage_config());
    let report = inspector.inspect();
    debug!("Inspected {} slots, {} loaded", report.slots.len(), report.loaded_count());
    serde_json::to_string(&report).map_err(to_js_error)
}

/// Projects snapshot JSON text into the display view, as JSON
#[wasm_bindgen]
pub fn project_draft_json(text: &str) -> Result<String, JsValue> {
    let view = shared::project_json(text).map_err(to_js_error)?;
    serde_json::to_string(&view).map_err(to_js_error)
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    console_error_panic_hook::set_once();
    info!("Draft inspector initialized");
    Ok(())
}
