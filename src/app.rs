// ============================================================================
// APP - owns the root element and drives full re-renders
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::viewmodels::RouteGuard;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state =
            AppState::new().map_err(|e| JsValue::from_str(&format!("Storage error: {}", e)))?;

        Ok(Self { state, root })
    }

    /// Full re-render of the current route. The guard runs here, once per
    /// render, so a denied route is rewritten before any protected content
    /// is built.
    pub fn render(&self) -> Result<(), JsValue> {
        let requested = self.state.current_route();
        let resolved = RouteGuard::new(&self.state).resolve(requested);
        if resolved != requested {
            self.state.navigate(resolved);
        }

        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
