pub mod contact;
pub mod ticket;

pub use contact::{ContactField, ContactForm, FieldError};
pub use ticket::{Ticket, TicketDraft, TicketError, TicketStatus};
