// ============================================================================
// TICKET STORE - canonical ticket list + persistence round-trip
// ============================================================================

use std::rc::Rc;

use crate::models::{Ticket, TicketDraft, TicketError, TicketStatus};
use crate::storage::StorageBackend;
use crate::utils::constants::TICKET_STORAGE_KEY;

/// Owns the canonical list of tickets. Every successful mutation rewrites
/// the whole serialized list under one storage key, so memory and storage
/// never diverge. Nothing else touches that key.
pub struct TicketStore {
    storage: Rc<dyn StorageBackend>,
    tickets: Vec<Ticket>,
    /// Next id to hand out. Never decreases within a store instance.
    next_id: u64,
}

/// Read-only counts shown on the dashboard. Recomputed from the live list
/// on demand, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
}

impl TicketStore {
    /// Build the store from whatever the storage key holds. Missing or
    /// unreadable data counts as an empty list, never an error.
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        let tickets = match storage.get_item(TICKET_STORAGE_KEY) {
            Some(json) => match serde_json::from_str::<Vec<Ticket>>(&json) {
                Ok(list) => list,
                Err(e) => {
                    log::warn!("⚠️ Discarding unreadable ticket data: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        let next_id = tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        log::info!("📋 Loaded {} tickets from storage", tickets.len());
        Self {
            storage,
            tickets,
            next_id,
        }
    }

    /// All tickets in insertion order.
    pub fn list(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn get(&self, id: u64) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Validate the draft, assign a fresh id, append and persist.
    /// A rejected draft leaves both memory and storage untouched.
    pub fn create(&mut self, draft: &TicketDraft) -> Result<Ticket, TicketError> {
        let (title, description, status) = draft.validate()?;
        let ticket = Ticket {
            id: self.next_id,
            title,
            description,
            status,
        };
        self.next_id += 1;
        self.tickets.push(ticket.clone());
        self.persist();
        log::info!("✅ Ticket #{} created", ticket.id);
        Ok(ticket)
    }

    /// Replace the fields of the ticket with this id, keeping the id.
    /// An unknown id fails before the draft is even validated.
    pub fn update(&mut self, id: u64, draft: &TicketDraft) -> Result<Ticket, TicketError> {
        let index = self
            .tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or(TicketError::NotFound(id))?;
        let (title, description, status) = draft.validate()?;
        let ticket = &mut self.tickets[index];
        ticket.title = title;
        ticket.description = description;
        ticket.status = status;
        let updated = ticket.clone();
        self.persist();
        log::info!("🔄 Ticket #{} updated", id);
        Ok(updated)
    }

    /// Remove the ticket with this id and persist the remaining list.
    pub fn delete(&mut self, id: u64) -> Result<(), TicketError> {
        let index = self
            .tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or(TicketError::NotFound(id))?;
        self.tickets.remove(index);
        self.persist();
        log::info!("🗑️ Ticket #{} deleted", id);
        Ok(())
    }

    /// Current counts for the summary cards.
    pub fn stats(&self) -> TicketStats {
        TicketStats {
            total: self.tickets.len(),
            open: self
                .tickets
                .iter()
                .filter(|t| t.status == TicketStatus::Open)
                .count(),
            closed: self
                .tickets
                .iter()
                .filter(|t| t.status == TicketStatus::Closed)
                .count(),
        }
    }

    fn persist(&self) {
        match serde_json::to_string(&self.tickets) {
            Ok(json) => {
                if let Err(e) = self.storage.set_item(TICKET_STORAGE_KEY, &json) {
                    log::error!("❌ Failed to persist tickets: {}", e);
                }
            }
            Err(e) => log::error!("❌ Failed to serialize tickets: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store_with(storage: &MemoryStorage) -> TicketStore {
        TicketStore::new(Rc::new(storage.clone()))
    }

    fn draft(title: &str, status: &str) -> TicketDraft {
        TicketDraft::new(title, "", status)
    }

    #[test]
    fn create_then_list_shows_the_new_ticket() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);

        let created = store
            .create(&TicketDraft::new("Printer jam", "", "open"))
            .unwrap();

        assert_eq!(store.list(), &[created.clone()]);
        assert_eq!(created.title, "Printer jam");
        assert_eq!(created.description, "");
        assert_eq!(created.status, TicketStatus::Open);

        let stats = store.stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.open, 1);
        assert_eq!(stats.closed, 0);
    }

    #[test]
    fn create_persists_the_full_list() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        store.create(&draft("One", "open")).unwrap();
        store.create(&draft("Two", "closed")).unwrap();

        let json = storage.get_item(TICKET_STORAGE_KEY).unwrap();
        let persisted: Vec<Ticket> = serde_json::from_str(&json).unwrap();
        assert_eq!(persisted, store.list());
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        let a = store.create(&draft("A", "open")).unwrap();
        let b = store.create(&draft("B", "open")).unwrap();
        let c = store.create(&draft("C", "open")).unwrap();
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));

        // Deleting the newest ticket must not free its id for reuse.
        store.delete(c.id).unwrap();
        let d = store.create(&draft("D", "open")).unwrap();
        assert_eq!(d.id, 4);
    }

    #[test]
    fn create_rejects_blank_title_and_leaves_everything_untouched() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);

        let err = store.create(&draft("   ", "open")).unwrap_err();
        assert!(matches!(err, TicketError::Validation(_)));
        assert!(store.is_empty());
        assert_eq!(storage.get_item(TICKET_STORAGE_KEY), None);
    }

    #[test]
    fn create_rejects_status_outside_the_enumeration() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        assert!(store.create(&draft("T", "resolved")).is_err());
        assert!(store.create(&draft("T", "")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn update_replaces_fields_and_keeps_id_and_count() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        let t = store.create(&draft("Printer jam", "open")).unwrap();

        let updated = store
            .update(t.id, &TicketDraft::new("Printer jam", "", "closed"))
            .unwrap();

        assert_eq!(updated.id, t.id);
        assert_eq!(updated.status, TicketStatus::Closed);
        assert_eq!(store.list().len(), 1);

        let stats = store.stats();
        assert_eq!(stats.open, 0);
        assert_eq!(stats.closed, 1);
    }

    #[test]
    fn update_unknown_id_fails_before_validation() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        // The draft is invalid too, but the id check comes first.
        let err = store.update(99, &draft("", "")).unwrap_err();
        assert_eq!(err, TicketError::NotFound(99));
    }

    #[test]
    fn update_with_invalid_draft_leaves_the_ticket_untouched() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        let t = store.create(&draft("Original", "open")).unwrap();

        let err = store.update(t.id, &draft("", "open")).unwrap_err();
        assert!(matches!(err, TicketError::Validation(_)));
        assert_eq!(store.get(t.id).unwrap().title, "Original");
    }

    #[test]
    fn delete_removes_exactly_one_ticket() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        let a = store.create(&draft("A", "open")).unwrap();
        let b = store.create(&draft("B", "open")).unwrap();

        store.delete(a.id).unwrap();
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].id, b.id);
    }

    #[test]
    fn delete_unknown_id_fails_and_changes_nothing() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        store.create(&draft("A", "open")).unwrap();

        assert_eq!(store.delete(42), Err(TicketError::NotFound(42)));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn reload_yields_an_identical_ordered_list() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        store.create(&TicketDraft::new("One", "first", "open")).unwrap();
        store
            .create(&TicketDraft::new("Two", "second", "in_progress"))
            .unwrap();
        let before: Vec<Ticket> = store.list().to_vec();

        let reloaded = store_with(&storage);
        assert_eq!(reloaded.list(), &before[..]);
    }

    #[test]
    fn id_sequence_resumes_after_reload() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        store.create(&draft("One", "open")).unwrap();
        store.create(&draft("Two", "open")).unwrap();

        let mut reloaded = store_with(&storage);
        let next = reloaded.create(&draft("Three", "open")).unwrap();
        assert_eq!(next.id, 3);
    }

    #[test]
    fn corrupt_storage_is_treated_as_empty() {
        let storage = MemoryStorage::new();
        storage.set_item(TICKET_STORAGE_KEY, "not json at all").unwrap();

        let mut store = store_with(&storage);
        assert!(store.is_empty());

        // The next create replaces the garbage with a clean serialization.
        store.create(&draft("Fresh", "open")).unwrap();
        let json = storage.get_item(TICKET_STORAGE_KEY).unwrap();
        let persisted: Vec<Ticket> = serde_json::from_str(&json).unwrap();
        assert_eq!(persisted.len(), 1);
    }

    #[test]
    fn unknown_status_in_storage_discards_the_list() {
        let storage = MemoryStorage::new();
        let json = r#"[{"id":1,"title":"T","description":"","status":"wontfix"}]"#;
        storage.set_item(TICKET_STORAGE_KEY, json).unwrap();

        let mut store = store_with(&storage);
        assert!(store.is_empty());
        // Ids restart from 1 since nothing survived the load.
        let t = store.create(&draft("Fresh", "open")).unwrap();
        assert_eq!(t.id, 1);
    }

    #[test]
    fn stats_track_every_mutation() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        assert_eq!(store.stats(), TicketStats::default());

        let a = store.create(&draft("A", "open")).unwrap();
        store.create(&draft("B", "in_progress")).unwrap();
        store.create(&draft("C", "closed")).unwrap();

        let stats = store.stats();
        assert_eq!((stats.total, stats.open, stats.closed), (3, 1, 1));

        store.delete(a.id).unwrap();
        let stats = store.stats();
        assert_eq!((stats.total, stats.open, stats.closed), (2, 0, 1));
    }
}
