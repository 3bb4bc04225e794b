// ============================================================================
// DASHBOARD VIEWMODEL - ticket form, list actions and summary stats
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Ticket, TicketError};
use crate::services::{ConfirmDialog, NotificationSink, Severity};
use crate::state::{AppState, TicketFormState};
use crate::stores::{TicketStats, TicketStore};

/// Orchestrates everything on the dashboard: the shared create/edit form,
/// the ticket list actions and the derived summary counts.
pub struct DashboardViewModel {
    tickets: Rc<RefCell<TicketStore>>,
    notifier: Rc<dyn NotificationSink>,
    confirm: Rc<dyn ConfirmDialog>,
    form: Rc<RefCell<TicketFormState>>,
    form_error: Rc<RefCell<Option<String>>>,
}

impl DashboardViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            tickets: state.tickets.clone(),
            notifier: state.notifier.clone(),
            confirm: state.confirm.clone(),
            form: state.ticket_form.clone(),
            form_error: state.form_error.clone(),
        }
    }

    /// Submit the form: create when no ticket is loaded, update otherwise.
    /// Failures stay inline and keep the form contents for another try.
    pub fn submit(&self) {
        *self.form_error.borrow_mut() = None;

        let (editing_id, draft) = {
            let form = self.form.borrow();
            (form.editing_id, form.draft())
        };

        let result = match editing_id {
            Some(id) => self.tickets.borrow_mut().update(id, &draft),
            None => self.tickets.borrow_mut().create(&draft),
        };

        match result {
            Ok(_) => {
                let message = if editing_id.is_some() {
                    "Ticket updated successfully!"
                } else {
                    "New ticket created!"
                };
                self.notifier.notify(message, Severity::Success);
                self.form.borrow_mut().reset();
            }
            Err(e) => {
                *self.form_error.borrow_mut() = Some(e.to_string());
                let toast = match &e {
                    TicketError::Validation(_) => {
                        "Validation Failed: Title and Status required.".to_string()
                    }
                    TicketError::NotFound(_) => e.to_string(),
                };
                self.notifier.notify(&toast, Severity::Error);
            }
        }
    }

    /// Load a listed ticket into the form. The store is not touched.
    pub fn start_edit(&self, id: u64) {
        let store = self.tickets.borrow();
        match store.get(id) {
            Some(ticket) => self.form.borrow_mut().load(ticket),
            None => log::warn!("⚠️ Edit requested for unknown ticket #{}", id),
        }
    }

    /// Drop the loaded ticket and go back to the pristine create form.
    pub fn cancel_edit(&self) {
        self.form.borrow_mut().reset();
    }

    /// Ask for confirmation, then delete. A declined dialog aborts before
    /// any mutation.
    pub fn request_delete(&self, id: u64) {
        if !self
            .confirm
            .confirm("Are you sure you want to delete this ticket?")
        {
            log::info!("🚫 Deletion of ticket #{} cancelled", id);
            return;
        }

        match self.tickets.borrow_mut().delete(id) {
            Ok(()) => {
                self.notifier.notify(
                    &format!("Ticket #{} deleted successfully!", id),
                    Severity::Success,
                );
                let mut form = self.form.borrow_mut();
                if form.editing_id == Some(id) {
                    form.reset();
                }
            }
            Err(e) => self.notifier.notify(&e.to_string(), Severity::Error),
        }
    }

    /// Snapshot of the list for rendering.
    pub fn tickets(&self) -> Vec<Ticket> {
        self.tickets.borrow().list().to_vec()
    }

    /// Counts for the summary cards, recomputed from the live list.
    pub fn stats(&self) -> TicketStats {
        self.tickets.borrow().stats()
    }
}
