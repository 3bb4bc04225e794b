// ============================================================================
// DASHBOARD VIEW - stats, ticket form and ticket list
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{append_child, on_change, on_click, on_input, on_submit, window, ElementBuilder};
use crate::models::{Ticket, TicketStatus};
use crate::state::AppState;
use crate::stores::TicketStats;
use crate::viewmodels::DashboardViewModel;

/// Render the protected dashboard page.
pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let vm = DashboardViewModel::new(state);

    let main = ElementBuilder::new("main")?
        .class("container dashboard-page")
        .build();

    let stats_heading = ElementBuilder::new("h2")?.text("Summary Statistics").build();
    append_child(&main, &stats_heading)?;
    append_child(&main, &render_stats(&vm.stats())?)?;

    append_child(&main, &render_ticket_form(state)?)?;

    let list_heading = ElementBuilder::new("h2")?
        .text("Ticket Management List")
        .build();
    append_child(&main, &list_heading)?;
    append_child(&main, &render_ticket_list(state, &vm.tickets())?)?;

    Ok(main)
}

fn render_stats(stats: &TicketStats) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("dashboard-stats").build();
    append_child(&grid, &stat_card("Total Tickets", "stat-total", stats.total)?)?;
    append_child(&grid, &stat_card("Open Tickets", "stat-open", stats.open)?)?;
    append_child(
        &grid,
        &stat_card("Resolved Tickets", "stat-resolved", stats.closed)?,
    )?;
    Ok(grid)
}

fn stat_card(label: &str, value_id: &str, value: usize) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("card stat-card").build();

    let heading = ElementBuilder::new("h3")?.text(label).build();
    append_child(&card, &heading)?;

    let value_el = ElementBuilder::new("p")?
        .id(value_id)?
        .class("stat-value")
        .text(&value.to_string())
        .build();
    append_child(&card, &value_el)?;

    Ok(card)
}

/// Create/edit form. Input values are written through to the shared form
/// state on every keystroke so they survive a full re-render.
fn render_ticket_form(state: &AppState) -> Result<Element, JsValue> {
    let (editing_id, title_value, status_value, description_value) = {
        let form = state.ticket_form.borrow();
        (
            form.editing_id,
            form.title.clone(),
            form.status.clone(),
            form.description.clone(),
        )
    };

    let card = ElementBuilder::new("div")?.class("card form-card").build();

    let heading = ElementBuilder::new("h2")?
        .text(if editing_id.is_some() {
            "Edit Ticket"
        } else {
            "Create New Ticket"
        })
        .build();
    append_child(&card, &heading)?;

    let form = ElementBuilder::new("form")?
        .id("ticket-form")?
        .attr("novalidate", "novalidate")?
        .build();

    if let Some(message) = state.form_error.borrow().as_ref() {
        let error = ElementBuilder::new("p")?
            .class("error-message")
            .text(message)
            .build();
        append_child(&form, &error)?;
    }

    // Title
    let title_label = ElementBuilder::new("label")?
        .attr("for", "title")?
        .text("Title (Mandatory)")
        .build();
    append_child(&form, &title_label)?;

    let title_input = ElementBuilder::new("input")?
        .id("title")?
        .attr("type", "text")?
        .attr("name", "title")?
        .attr("value", &title_value)?
        .build();
    {
        let form_state = state.ticket_form.clone();
        on_input(&title_input, move |e| {
            if let Some(target) = e.target() {
                if let Ok(input) = target.dyn_into::<HtmlInputElement>() {
                    form_state.borrow_mut().title = input.value();
                }
            }
        })?;
    }
    append_child(&form, &title_input)?;

    // Status
    let status_label = ElementBuilder::new("label")?
        .attr("for", "status")?
        .text("Status (Mandatory)")
        .build();
    append_child(&form, &status_label)?;

    let select = ElementBuilder::new("select")?
        .id("status")?
        .attr("name", "status")?
        .build();
    for status in TicketStatus::all() {
        let option = ElementBuilder::new("option")?
            .attr("value", status.as_str())?
            .text(status.label());
        let option = if status_value == status.as_str() {
            option.attr("selected", "selected")?
        } else {
            option
        };
        append_child(&select, &option.build())?;
    }
    {
        let form_state = state.ticket_form.clone();
        on_change(&select, move |e| {
            if let Some(target) = e.target() {
                if let Ok(select) = target.dyn_into::<HtmlSelectElement>() {
                    form_state.borrow_mut().status = select.value();
                }
            }
        })?;
    }
    append_child(&form, &select)?;

    // Description
    let description_label = ElementBuilder::new("label")?
        .attr("for", "description")?
        .text("Description (Optional)")
        .build();
    append_child(&form, &description_label)?;

    let textarea = ElementBuilder::new("textarea")?
        .id("description")?
        .attr("name", "description")?
        .text(&description_value)
        .build();
    {
        let form_state = state.ticket_form.clone();
        on_input(&textarea, move |e| {
            if let Some(target) = e.target() {
                if let Ok(area) = target.dyn_into::<HtmlTextAreaElement>() {
                    form_state.borrow_mut().description = area.value();
                }
            }
        })?;
    }
    append_child(&form, &textarea)?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text(if editing_id.is_some() {
            "Update Ticket"
        } else {
            "Save New Ticket"
        })
        .build();
    append_child(&form, &submit)?;

    if editing_id.is_some() {
        let cancel = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn btn-cancel")
            .text("Cancel Edit")
            .build();
        let vm = DashboardViewModel::new(state);
        on_click(&cancel, move |_| {
            vm.cancel_edit();
            crate::rerender_app();
        })?;
        append_child(&form, &cancel)?;
    }

    {
        let vm = DashboardViewModel::new(state);
        on_submit(&form, move |_| {
            vm.submit();
            crate::rerender_app();
        })?;
    }

    append_child(&card, &form)?;
    Ok(card)
}

fn render_ticket_list(state: &AppState, tickets: &[Ticket]) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?
        .id("ticket-list")?
        .class("ticket-list")
        .build();

    for ticket in tickets {
        append_child(&list, &render_ticket_card(state, ticket)?)?;
    }

    if tickets.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-list")
            .text("No tickets available. Create a new one!")
            .build();
        append_child(&list, &empty)?;
    }

    Ok(list)
}

fn render_ticket_card(state: &AppState, ticket: &Ticket) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class(&format!("card ticket-card {}", ticket.status.as_str()))
        .attr("data-id", &ticket.id.to_string())?
        .build();

    let header = ElementBuilder::new("div")?.class("ticket-card-header").build();

    let title = ElementBuilder::new("h4")?.text(&ticket.title).build();
    append_child(&header, &title)?;

    let tag_text = ticket.status.as_str().replace('_', " ").to_uppercase();
    let tag = ElementBuilder::new("span")?
        .class(&format!("tag {}", ticket.status.as_str()))
        .text(&tag_text)
        .build();
    append_child(&header, &tag)?;
    append_child(&card, &header)?;

    let description = if ticket.description.is_empty() {
        "No description provided."
    } else {
        ticket.description.as_str()
    };
    let body = ElementBuilder::new("p")?
        .class("ticket-description")
        .text(description)
        .build();
    append_child(&card, &body)?;

    let actions = ElementBuilder::new("div")?.class("ticket-actions").build();

    let edit_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Edit")
        .build();
    {
        let vm = DashboardViewModel::new(state);
        let id = ticket.id;
        on_click(&edit_btn, move |_| {
            vm.start_edit(id);
            scroll_to_top();
            crate::rerender_app();
        })?;
    }
    append_child(&actions, &edit_btn)?;

    let delete_btn = ElementBuilder::new("button")?
        .class("btn btn-danger")
        .text("Delete")
        .build();
    {
        let vm = DashboardViewModel::new(state);
        let id = ticket.id;
        on_click(&delete_btn, move |_| {
            vm.request_delete(id);
            crate::rerender_app();
        })?;
    }
    append_child(&actions, &delete_btn)?;

    append_child(&card, &actions)?;
    Ok(card)
}

fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
