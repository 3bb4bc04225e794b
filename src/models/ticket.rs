use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// TICKET MODEL - the one entity the dashboard manages
// ============================================================================

/// A single tracked ticket, as persisted in localStorage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    /// Unique numeric id, assigned by the store and never reused.
    pub id: u64,
    pub title: String,
    /// Optional free text. Empty string means "no description".
    #[serde(default)]
    pub description: String,
    pub status: TicketStatus,
}

/// Lifecycle state of a ticket. The set is closed; unknown strings in
/// storage fail deserialization and the whole list is discarded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TicketStatus {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "in_progress")]
    InProgress,
    #[serde(rename = "closed")]
    Closed,
}

impl TicketStatus {
    /// Label shown on the dashboard badges and in the status dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Closed => "Closed",
        }
    }

    /// Storage/form value, matching the serde renames.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Closed => "closed",
        }
    }

    /// All statuses in dropdown order.
    pub fn all() -> [TicketStatus; 3] {
        [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Closed,
        ]
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "closed" => Ok(TicketStatus::Closed),
            other => Err(TicketError::Validation(format!(
                "unknown status '{}'",
                other
            ))),
        }
    }
}

/// User-entered ticket fields before validation. The id comes from the
/// store, never from the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    /// Raw select value. Empty when the placeholder option is selected.
    pub status: String,
}

impl TicketDraft {
    pub fn new(title: &str, description: &str, status: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
        }
    }

    /// Check the mandatory fields and resolve the status string.
    ///
    /// Title must be non-empty after trimming and a status must be picked.
    /// Both failures share one message, mirroring the single inline error
    /// slot under the dashboard form.
    pub fn validate(&self) -> Result<(String, String, TicketStatus), TicketError> {
        let title = self.title.trim();
        if title.is_empty() || self.status.trim().is_empty() {
            return Err(TicketError::Validation(
                "Title and Status are mandatory.".to_string(),
            ));
        }
        let status = self.status.parse::<TicketStatus>()?;
        // Description is free-form and kept exactly as typed.
        Ok((title.to_string(), self.description.clone(), status))
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Failures surfaced by ticket operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TicketError {
    /// Draft rejected before touching the list.
    Validation(String),
    /// No ticket with this id.
    NotFound(u64),
}

impl fmt::Display for TicketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketError::Validation(msg) => write!(f, "{}", msg),
            TicketError::NotFound(id) => write!(f, "Ticket #{} not found", id),
        }
    }
}

impl std::error::Error for TicketError {}
