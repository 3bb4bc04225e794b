// ============================================================================
// SIGNUP VIEW - simulated account creation
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, on_click, on_submit, set_text_content, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::AuthViewModel;
use crate::views::login::create_form_group;

/// Render the signup page. Only the password pair is validated; the account
/// itself is never stored.
pub fn render_signup(state: &AppState) -> Result<Element, JsValue> {
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let confirm = Rc::new(RefCell::new(String::new()));

    let page = ElementBuilder::new("main")?.class("container auth-page").build();
    let card = ElementBuilder::new("div")?.class("card auth-card").build();

    let title = ElementBuilder::new("h2")?.text("Sign Up").build();
    append_child(&card, &title)?;

    let form = ElementBuilder::new("form")?
        .id("signup-form")?
        .attr("novalidate", "novalidate")?
        .build();

    append_child(
        &form,
        &create_form_group("username", "Username", "text", &username)?,
    )?;
    append_child(
        &form,
        &create_form_group("password", "Password", "password", &password)?,
    )?;
    append_child(
        &form,
        &create_form_group("confirm-password", "Confirm Password", "password", &confirm)?,
    )?;

    let error = ElementBuilder::new("p")?
        .id("signup-error")?
        .class("form-error")
        .build();
    if let Some(message) = state.signup_error.borrow().as_ref() {
        set_text_content(&error, message);
    }
    append_child(&form, &error)?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text("Sign Up")
        .build();
    append_child(&form, &submit)?;

    {
        let auth = AuthViewModel::new(state);
        let state = state.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        on_submit(&form, move |_| {
            auth.signup(&password.borrow(), &confirm.borrow());
            if state.current_route() != Route::Signup {
                crate::rerender_app();
            } else if let Some(slot) = get_element_by_id("signup-error") {
                let message = state.signup_error.borrow().clone().unwrap_or_default();
                set_text_content(&slot, &message);
            }
        })?;
    }

    append_child(&card, &form)?;

    let switch = ElementBuilder::new("p")?
        .class("auth-switch")
        .text("Already have an account? ")
        .build();
    let login_link = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("link-button")
        .text("Log in")
        .build();
    {
        let state = state.clone();
        on_click(&login_link, move |_| {
            state.navigate(Route::Login);
            crate::rerender_app();
        })?;
    }
    append_child(&switch, &login_link)?;
    append_child(&card, &switch)?;

    append_child(&page, &card)?;
    Ok(page)
}
