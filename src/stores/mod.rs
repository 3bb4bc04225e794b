pub mod session_gate;
pub mod ticket_store;

pub use session_gate::{AuthError, SessionGate};
pub use ticket_store::{TicketStats, TicketStore};
