use eventtracker_core::error::Result;
use eventtracker_core::events::{
    normalize_entry_date, validate_event_input, Event, EventId, EventInput, EventRecord,
};
use eventtracker_core::storage::{EventRepository, MissingRowPolicy};

/// Create, list, update and delete events.
///
/// Input dates are typed as `MM-DD-YYYY` and stored as `YYYY-MM-DD`.
pub struct EventStore<'a, R: ?Sized> {
    repo: &'a R,
    policy: MissingRowPolicy,
}

impl<'a, R: EventRepository + ?Sized> EventStore<'a, R> {
    /// Creates a store that reports missing rows as `NotFound`.
    pub fn new(repo: &'a R) -> Self {
        Self::with_policy(repo, MissingRowPolicy::default())
    }

    pub fn with_policy(repo: &'a R, policy: MissingRowPolicy) -> Self {
        Self { repo, policy }
    }

    /// Validates and stores a new event, returning its id.
    pub async fn add(&self, input: &EventInput) -> Result<EventId> {
        let record = prepare_record(input)?;
        let id = self.repo.create_event(&record).await?;
        tracing::info!(event_id = %id, date = %record.date, "Event added");
        Ok(id)
    }

    /// Replaces every field of an existing event.
    pub async fn update(&self, id: EventId, input: &EventInput) -> Result<()> {
        let record = prepare_record(input)?;
        let affected = self.repo.update_event(id, &record).await?;
        if affected == 0 {
            tracing::debug!(event_id = %id, policy = %self.policy, "Update matched no event");
        } else {
            tracing::info!(event_id = %id, date = %record.date, "Event updated");
        }
        self.policy.resolve(affected, "Event", id)?;
        Ok(())
    }

    /// Deletes an event by id.
    pub async fn delete(&self, id: EventId) -> Result<()> {
        let affected = self.repo.delete_event(id).await?;
        if affected == 0 {
            tracing::debug!(event_id = %id, policy = %self.policy, "Delete matched no event");
        } else {
            tracing::info!(event_id = %id, "Event deleted");
        }
        self.policy.resolve(affected, "Event", id)?;
        Ok(())
    }

    /// Gets a single event.
    pub async fn get(&self, id: EventId) -> Result<Option<Event>> {
        Ok(self.repo.get_event(id).await?)
    }

    /// Returns every event, oldest date first; same-day events keep insertion order.
    pub async fn list_all(&self) -> Result<Vec<Event>> {
        let events = self.repo.list_events().await?;
        tracing::debug!(count = events.len(), "Loaded events");
        Ok(events)
    }
}

/// Validates input and rewrites its date into stored form.
fn prepare_record(input: &EventInput) -> Result<EventRecord> {
    let validated = validate_event_input(input)?;

    let stored_date = match normalize_entry_date(&validated.date) {
        Some(date) => date,
        None => {
            tracing::warn!(
                date = %validated.date,
                "Could not normalize event date, storing it as entered"
            );
            validated.date.clone()
        }
    };

    Ok(validated.into_record(stored_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use eventtracker_core::error::{TrackerError, ValidationError};

    fn meeting() -> EventInput {
        EventInput::new("Meeting", "01-15-2024")
            .with_description("Desc")
            .with_time("10:00")
            .with_notifications(true)
    }

    fn not_found(id: i64) -> TrackerError {
        TrackerError::NotFound {
            entity_type: "Event",
            id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let repo = InMemoryRepository::new();
        let store = EventStore::new(&repo);

        let id = store.add(&meeting()).await.unwrap();

        let events = store.list_all().await.unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.id, id);
        assert_eq!(event.title, "Meeting");
        assert_eq!(event.description.as_deref(), Some("Desc"));
        assert_eq!(event.date, "2024-01-15");
        assert_eq!(event.time.as_deref(), Some("10:00"));
        assert!(event.notifications_enabled);
    }

    #[tokio::test]
    async fn test_add_rejects_impossible_date() {
        let repo = InMemoryRepository::new();
        let store = EventStore::new(&repo);

        let input = EventInput::new("Meeting", "02-30-2024").with_time("10:00");
        let result = store.add(&input).await;

        assert_eq!(
            result,
            Err(TrackerError::Validation(ValidationError::InvalidDate(
                "02-30-2024".to_string()
            )))
        );
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_missing_fields() {
        let repo = InMemoryRepository::new();
        let store = EventStore::new(&repo);

        assert_eq!(
            store.add(&EventInput::new("", "01-15-2024")).await,
            Err(TrackerError::Validation(ValidationError::EmptyTitle))
        );
        assert_eq!(
            store.add(&EventInput::new("Meeting", " ")).await,
            Err(TrackerError::Validation(ValidationError::EmptyDate))
        );
    }

    #[tokio::test]
    async fn test_list_is_chronological_regardless_of_insertion() {
        let repo = InMemoryRepository::new();
        let store = EventStore::new(&repo);

        for (title, date) in [
            ("New Year", "01-01-2025"),
            ("Spring", "03-20-2024"),
            ("Winter", "12-21-2023"),
            ("Autumn", "09-22-2024"),
        ] {
            store.add(&EventInput::new(title, date)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();

        assert_eq!(titles, vec!["Winter", "Spring", "Autumn", "New Year"]);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = InMemoryRepository::new();
        let store = EventStore::new(&repo);
        let id = store.add(&meeting()).await.unwrap();

        store
            .update(id, &EventInput::new("Standup", "02-01-2024"))
            .await
            .unwrap();

        let event = store.get(id).await.unwrap().unwrap();
        assert_eq!(event.title, "Standup");
        assert_eq!(event.date, "2024-02-01");
        assert_eq!(event.description, None);
        assert_eq!(event.time, None);
        assert!(!event.notifications_enabled);
    }

    #[tokio::test]
    async fn test_update_validates_like_add() {
        let repo = InMemoryRepository::new();
        let store = EventStore::new(&repo);
        let id = store.add(&meeting()).await.unwrap();

        let result = store.update(id, &EventInput::new("Meeting", "13-01-2024")).await;

        assert!(matches!(result, Err(TrackerError::Validation(_))));
        assert_eq!(store.get(id).await.unwrap().unwrap().date, "2024-01-15");
    }

    #[tokio::test]
    async fn test_missing_rows_with_not_found_policy() {
        let repo = InMemoryRepository::new();
        let store = EventStore::new(&repo);

        assert_eq!(store.delete(EventId(41)).await, Err(not_found(41)));
        assert_eq!(store.update(EventId(42), &meeting()).await, Err(not_found(42)));
    }

    #[tokio::test]
    async fn test_missing_rows_with_ignore_policy() {
        let repo = InMemoryRepository::new();
        let store = EventStore::with_policy(&repo, MissingRowPolicy::Ignore);

        assert_eq!(store.delete(EventId(41)).await, Ok(()));
        assert_eq!(store.update(EventId(42), &meeting()).await, Ok(()));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_event() {
        let repo = InMemoryRepository::new();
        let store = EventStore::new(&repo);
        let keep = store.add(&EventInput::new("Keep", "05-05-2024")).await.unwrap();
        let dropped = store.add(&EventInput::new("Drop", "05-04-2024")).await.unwrap();

        store.delete(dropped).await.unwrap();

        let ids: Vec<EventId> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![keep]);
        assert_eq!(store.delete(dropped).await, Err(not_found(dropped.0)));
    }

    #[test]
    fn test_prepare_record_normalizes_date() {
        let record = prepare_record(&EventInput::new("Trip", "07-04-2024")).unwrap();
        assert_eq!(record.date, "2024-07-04");
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_event_lifecycle_against_sqlite() {
        let repo = crate::storage::SqliteRepository::open_in_memory().await.unwrap();
        let store = EventStore::new(&repo);

        let later = store.add(&EventInput::new("Later", "03-01-2024")).await.unwrap();
        let id = store.add(&meeting()).await.unwrap();

        let events = store.list_all().await.unwrap();
        assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![id, later]);
        assert!(events[0].notifications_enabled);

        store
            .update(id, &EventInput::new("Meeting moved", "04-01-2024"))
            .await
            .unwrap();
        let events = store.list_all().await.unwrap();
        assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![later, id]);

        store.delete(later).await.unwrap();
        assert_eq!(store.delete(later).await, Err(not_found(later.0)));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }
}
