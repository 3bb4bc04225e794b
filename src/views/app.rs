// ============================================================================
// APP SHELL - header plus the page for the current route
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::AuthViewModel;
use crate::views::{render_dashboard, render_login, render_profile, render_signup};

/// Render the full application tree for the current route.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("app-container").build();

    append_child(&container, &render_header(state)?)?;

    let page = match state.current_route() {
        Route::Profile => render_profile(state)?,
        Route::Login => render_login(state)?,
        Route::Signup => render_signup(state)?,
        Route::Dashboard => render_dashboard(state)?,
    };
    append_child(&container, &page)?;

    Ok(container)
}

/// Top bar: brand plus navigation. The trailing button swaps between
/// Login and Logout depending on the session gate.
fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("app-header").build();

    let brand = ElementBuilder::new("div")?
        .class("brand")
        .text("Ticket Tracker")
        .build();
    append_child(&header, &brand)?;

    let nav = ElementBuilder::new("nav")?.class("app-nav").build();

    append_child(&nav, &nav_button(state, "Profile", Route::Profile)?)?;
    append_child(&nav, &nav_button(state, "Dashboard", Route::Dashboard)?)?;

    if state.gate.is_authenticated() {
        let logout_btn = ElementBuilder::new("button")?
            .class("nav-link nav-logout")
            .text("Logout")
            .build();
        let auth = AuthViewModel::new(state);
        on_click(&logout_btn, move |_| {
            auth.logout();
            crate::rerender_app();
        })?;
        append_child(&nav, &logout_btn)?;
    } else {
        append_child(&nav, &nav_button(state, "Login", Route::Login)?)?;
    }

    append_child(&header, &nav)?;
    Ok(header)
}

fn nav_button(state: &AppState, label: &str, target: Route) -> Result<Element, JsValue> {
    let active = state.current_route() == target;
    let class = if active {
        "nav-link active"
    } else {
        "nav-link"
    };
    let button = ElementBuilder::new("button")?.class(class).text(label).build();

    let state = state.clone();
    on_click(&button, move |_| {
        state.navigate(target);
        crate::rerender_app();
    })?;

    Ok(button)
}
