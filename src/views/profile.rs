// ============================================================================
// PROFILE VIEW - profile card, millisecond clock and contact form
// ============================================================================
// The contact form never triggers a re-render: validation feedback is
// written straight into the error slots so the rest of the page stays put.
// ============================================================================

use std::cell::Cell;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::{
    add_class, append_child, get_element_by_id, on_submit, remove_class, set_text_content,
    ElementBuilder,
};
use crate::models::{ContactField, ContactForm, FieldError};
use crate::state::AppState;
use crate::utils::constants::{CLOCK_TICK_MS, CONTACT_SUCCESS_MS};

thread_local! {
    static CLOCK_STARTED: Cell<bool> = Cell::new(false);
}

/// Render the public landing page.
pub fn render_profile(_state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("main")?
        .class("container profile-page")
        .build();

    append_child(&page, &render_profile_card()?)?;
    append_child(&page, &render_contact_section()?)?;

    ensure_clock_running();

    Ok(page)
}

fn render_profile_card() -> Result<Element, JsValue> {
    let card = ElementBuilder::new("section")?
        .class("card profile-card")
        .build();

    let avatar = ElementBuilder::new("div")?
        .class("profile-avatar")
        .text("🎫")
        .build();
    append_child(&card, &avatar)?;

    let name = ElementBuilder::new("h2")?.text("Alex Doe").build();
    append_child(&card, &name)?;

    let role = ElementBuilder::new("p")?
        .class("profile-role")
        .text("Support Engineer")
        .build();
    append_child(&card, &role)?;

    let bio = ElementBuilder::new("p")?
        .class("profile-bio")
        .text("Keeps the ticket queue moving and answers every message that lands in the inbox.")
        .build();
    append_child(&card, &bio)?;

    let time_row = ElementBuilder::new("p")?.class("profile-time").build();
    let time_label = ElementBuilder::new("span")?
        .text("Current time in milliseconds: ")
        .build();
    append_child(&time_row, &time_label)?;
    let time_value = ElementBuilder::new("span")?
        .id("user-time")?
        .attr("data-testid", "test-user-time")?
        .text(&format!("{}", js_sys::Date::now() as u64))
        .build();
    append_child(&time_row, &time_value)?;
    append_child(&card, &time_row)?;

    Ok(card)
}

/// Start the clock interval. Registered once for the whole app lifetime;
/// ticks are no-ops while the profile page is not mounted.
fn ensure_clock_running() {
    let already_running = CLOCK_STARTED.with(|started| started.replace(true));
    if already_running {
        return;
    }
    Interval::new(CLOCK_TICK_MS, || {
        if let Some(clock) = get_element_by_id("user-time") {
            set_text_content(&clock, &format!("{}", js_sys::Date::now() as u64));
        }
    })
    .forget();
}

fn render_contact_section() -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .class("card contact-section")
        .build();

    let heading = ElementBuilder::new("h2")?.text("Get in Touch").build();
    append_child(&section, &heading)?;

    let success = ElementBuilder::new("div")?
        .id("success-message")?
        .class("success-message hidden")
        .text("Thank you! Your message has been sent successfully.")
        .build();
    append_child(&section, &success)?;

    append_child(&section, &render_contact_form()?)?;

    Ok(section)
}

fn render_contact_form() -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .id("contact-form")?
        .attr("novalidate", "novalidate")?
        .build();

    contact_field(&form, ContactField::Name, "input", Some("text"))?;
    contact_field(&form, ContactField::Email, "input", Some("email"))?;
    contact_field(&form, ContactField::Subject, "input", Some("text"))?;
    contact_field(&form, ContactField::Message, "textarea", None)?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text("Send Message")
        .build();
    append_child(&form, &submit)?;

    {
        let form_el = form.clone();
        on_submit(&form, move |_| {
            if let Err(e) = handle_contact_submit(&form_el) {
                log::error!("❌ [CONTACT] Submit handling failed: {:?}", e);
            }
        })?;
    }

    Ok(form)
}

/// One labelled field with its own error slot underneath.
fn contact_field(
    form: &Element,
    field: ContactField,
    input_tag: &str,
    input_type: Option<&str>,
) -> Result<(), JsValue> {
    let key = field.key();
    let input_id = format!("contact-{}", key);

    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label_text = match field {
        ContactField::Subject => format!("{} (Optional)", field.display_name()),
        _ => field.display_name().to_string(),
    };
    let label = ElementBuilder::new("label")?
        .attr("for", &input_id)?
        .text(&label_text)
        .build();
    append_child(&group, &label)?;

    let mut builder = ElementBuilder::new(input_tag)?
        .id(&input_id)?
        .attr("name", key)?
        .attr("data-testid", &format!("test-contact-{}", key))?;
    if let Some(input_type) = input_type {
        builder = builder.attr("type", input_type)?;
    }
    append_child(&group, &builder.build())?;

    let error = ElementBuilder::new("div")?
        .id(&format!("error-{}", key))?
        .attr("data-testid", &format!("test-contact-error-{}", key))?
        .class("field-error")
        .build();
    append_child(&group, &error)?;

    append_child(form, &group)?;
    Ok(())
}

fn handle_contact_submit(form: &Element) -> Result<(), JsValue> {
    clear_field_errors();

    let record = ContactForm::new(
        &field_value(ContactField::Name),
        &field_value(ContactField::Email),
        &field_value(ContactField::Subject),
        &field_value(ContactField::Message),
    );

    match record.validate() {
        Ok(()) => show_success(form),
        Err(errors) => {
            for error in &errors {
                display_field_error(error);
            }
            Ok(())
        }
    }
}

/// Current raw value of a contact input, empty when the element is missing.
fn field_value(field: ContactField) -> String {
    let element = match get_element_by_id(&format!("contact-{}", field.key())) {
        Some(element) => element,
        None => return String::new(),
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn clear_field_errors() {
    for field in ContactField::all() {
        let key = field.key();
        if let Some(slot) = get_element_by_id(&format!("error-{}", key)) {
            set_text_content(&slot, "");
            let _ = remove_class(&slot, "visible");
        }
        if let Some(input) = get_element_by_id(&format!("contact-{}", key)) {
            let _ = remove_class(&input, "input-error");
            let _ = input.remove_attribute("aria-describedby");
        }
    }
}

fn display_field_error(error: &FieldError) {
    let key = error.field.key();
    if let Some(slot) = get_element_by_id(&format!("error-{}", key)) {
        set_text_content(&slot, &error.message);
        let _ = add_class(&slot, "visible");
    }
    // Highlight the input and point assistive tech at the message
    if let Some(input) = get_element_by_id(&format!("contact-{}", key)) {
        let _ = add_class(&input, "input-error");
        let _ = input.set_attribute("aria-describedby", &format!("error-{}", key));
    }
}

/// Swap the form for the success banner, then swap back after a delay.
fn show_success(form: &Element) -> Result<(), JsValue> {
    if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
        form.reset();
    }
    add_class(form, "hidden")?;
    if let Some(success) = get_element_by_id("success-message") {
        remove_class(&success, "hidden")?;
    }

    let form = form.clone();
    Timeout::new(CONTACT_SUCCESS_MS, move || {
        if let Some(success) = get_element_by_id("success-message") {
            let _ = add_class(&success, "hidden");
        }
        let _ = remove_class(&form, "hidden");
    })
    .forget();

    log::info!("✅ [CONTACT] Message accepted, form reset");
    Ok(())
}
