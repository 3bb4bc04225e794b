// ============================================================================
// APP STATE - everything the views share
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Ticket, TicketDraft};
use crate::services::{BrowserConfirm, ConfirmDialog, NotificationSink, ToastNotifier};
use crate::storage::{LocalStorage, StorageBackend, StorageError};
use crate::stores::{SessionGate, TicketStore};

/// Views the app can show. Dashboard is the only protected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Profile card landing page, with the contact form.
    Profile,
    Login,
    Signup,
    Dashboard,
}

impl Route {
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

/// Raw values of the create/edit ticket form. `editing_id` decides whether
/// a submit creates or updates.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketFormState {
    pub editing_id: Option<u64>,
    pub title: String,
    /// Select value; the dropdown starts on "open".
    pub status: String,
    pub description: String,
}

impl Default for TicketFormState {
    fn default() -> Self {
        Self {
            editing_id: None,
            title: String::new(),
            status: "open".to_string(),
            description: String::new(),
        }
    }
}

impl TicketFormState {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Fill the form from an existing ticket for editing.
    pub fn load(&mut self, ticket: &Ticket) {
        self.editing_id = Some(ticket.id);
        self.title = ticket.title.clone();
        self.status = ticket.status.as_str().to_string();
        self.description = ticket.description.clone();
    }

    /// Back to the pristine create form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn draft(&self) -> TicketDraft {
        TicketDraft::new(&self.title, &self.description, &self.status)
    }
}

/// Global application state. Cloning is cheap and every clone shares the
/// same underlying cells, so closures can capture their own copy.
#[derive(Clone)]
pub struct AppState {
    pub tickets: Rc<RefCell<TicketStore>>,
    pub gate: Rc<SessionGate>,
    pub notifier: Rc<dyn NotificationSink>,
    pub confirm: Rc<dyn ConfirmDialog>,

    pub route: Rc<RefCell<Route>>,
    pub ticket_form: Rc<RefCell<TicketFormState>>,

    // Inline error slots, one per form.
    pub form_error: Rc<RefCell<Option<String>>>,
    pub login_error: Rc<RefCell<Option<String>>>,
    pub signup_error: Rc<RefCell<Option<String>>>,
}

impl AppState {
    /// Wire the browser implementations together. Fails only when
    /// localStorage is blocked entirely.
    pub fn new() -> Result<Self, StorageError> {
        let storage: Rc<dyn StorageBackend> = Rc::new(LocalStorage::new()?);
        Ok(Self::with_parts(
            storage,
            Rc::new(ToastNotifier::new()),
            Rc::new(BrowserConfirm::new()),
        ))
    }

    /// Assemble the state from explicit collaborators.
    pub fn with_parts(
        storage: Rc<dyn StorageBackend>,
        notifier: Rc<dyn NotificationSink>,
        confirm: Rc<dyn ConfirmDialog>,
    ) -> Self {
        Self {
            tickets: Rc::new(RefCell::new(TicketStore::new(storage.clone()))),
            gate: Rc::new(SessionGate::new(storage)),
            notifier,
            confirm,
            route: Rc::new(RefCell::new(Route::Profile)),
            ticket_form: Rc::new(RefCell::new(TicketFormState::default())),
            form_error: Rc::new(RefCell::new(None)),
            login_error: Rc::new(RefCell::new(None)),
            signup_error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn current_route(&self) -> Route {
        *self.route.borrow()
    }

    /// Switch view and drop any stale inline errors.
    pub fn navigate(&self, route: Route) {
        *self.route.borrow_mut() = route;
        *self.form_error.borrow_mut() = None;
        *self.login_error.borrow_mut() = None;
        *self.signup_error.borrow_mut() = None;
    }
}
