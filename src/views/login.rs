// ============================================================================
// LOGIN VIEW - credential form in front of the session gate
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, get_element_by_id, on_click, on_input, on_submit, set_text_content,
    ElementBuilder,
};
use crate::state::{AppState, Route};
use crate::utils::constants::{LOGIN_PASS, LOGIN_USER};
use crate::viewmodels::AuthViewModel;

/// Render the login page.
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    // Form state lives in the closures, not in AppState. A failed attempt
    // updates the error slot in place so typed values survive.
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let page = ElementBuilder::new("main")?.class("container auth-page").build();
    let card = ElementBuilder::new("div")?.class("card auth-card").build();

    let title = ElementBuilder::new("h2")?.text("Login").build();
    append_child(&card, &title)?;

    let hint = ElementBuilder::new("p")?
        .class("auth-hint")
        .text(&format!("Demo account: {} / {}", LOGIN_USER, LOGIN_PASS))
        .build();
    append_child(&card, &hint)?;

    let form = ElementBuilder::new("form")?
        .id("login-form")?
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

    let error = ElementBuilder::new("p")?
        .id("login-error")?
        .class("form-error")
        .build();
    if let Some(message) = state.login_error.borrow().as_ref() {
        set_text_content(&error, message);
    }
    append_child(&form, &error)?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text("Login")
        .build();
    append_child(&form, &submit)?;

    {
        let auth = AuthViewModel::new(state);
        let state = state.clone();
        let username = username.clone();
        let password = password.clone();
        on_submit(&form, move |_| {
            auth.login(&username.borrow(), &password.borrow());
            if state.current_route() != Route::Login {
                crate::rerender_app();
            } else if let Some(slot) = get_element_by_id("login-error") {
                let message = state.login_error.borrow().clone().unwrap_or_default();
                set_text_content(&slot, &message);
            }
        })?;
    }

    append_child(&card, &form)?;

    // Cross-link to the signup page
    let switch = ElementBuilder::new("p")?
        .class("auth-switch")
        .text("Don't have an account? ")
        .build();
    let signup_link = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("link-button")
        .text("Sign up")
        .build();
    {
        let state = state.clone();
        on_click(&signup_link, move |_| {
            state.navigate(Route::Signup);
            crate::rerender_app();
        })?;
    }
    append_child(&switch, &signup_link)?;
    append_child(&card, &switch)?;

    append_child(&page, &card)?;
    Ok(page)
}

/// Label + input pair wired to a shared string slot.
pub fn create_form_group(
    id: &str,
    label_text: &str,
    input_type: &str,
    value: &Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();
    append_child(&group, &label)?;

    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("name", id)?
        .build();
    {
        let value = value.clone();
        on_input(&input, move |e| {
            if let Some(target) = e.target() {
                if let Ok(input) = target.dyn_into::<HtmlInputElement>() {
                    *value.borrow_mut() = input.value();
                }
            }
        })?;
    }
    append_child(&group, &input)?;

    Ok(group)
}
