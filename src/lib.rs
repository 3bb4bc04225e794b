// ============================================================================
// TICKET TRACKER - browser-only ticket demo, MVVM over plain web-sys
// ============================================================================
// - models: ticket and contact-form data plus their validation rules
// - storage: key-value backend trait (browser localStorage / in-memory)
// - stores: ticket store and session gate, the owners of persisted state
// - services: notification sink and confirm dialog behind traits
// - viewmodels: auth, dashboard and route-guard orchestration
// - state: Rc<RefCell> shared app state and routing
// - dom/views: imperative element building and per-route render functions
// ============================================================================

pub mod app;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

// Global App instance, single-threaded by construction
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🚀 Ticket Tracker starting");

    let app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Tear down and rebuild the whole view tree. No-op until `main` has run,
/// which also makes it safe to call from native test code.
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Re-render failed: {:?}", e);
            }
        }
    });
}
