use chrono::{DateTime, Utc};
use tracing::instrument;

use schoople_core::AppError;
use schoople_db::Store;
use schoople_models::events::EventSummary;
use schoople_models::ids::SchoolId;

pub struct EventService;

impl EventService {
    /// Newest first, coloured against `now`.
    #[instrument(skip(store))]
    pub async fn list_events(
        store: &Store,
        school_id: SchoolId,
        now: DateTime<Utc>,
    ) -> Result<Vec<EventSummary>, AppError> {
        Ok(store
            .events_for_school(school_id)
            .await?
            .into_iter()
            .map(|event| EventSummary::from_event(event, now))
            .collect())
    }
}
