use tracing::instrument;

use schoople_core::AppError;
use schoople_db::Store;
use schoople_models::ids::SchoolId;
use schoople_models::transports::TransportSummary;

pub struct TransportService;

impl TransportService {
    #[instrument(skip(store))]
    pub async fn list_transports(
        store: &Store,
        school_id: SchoolId,
    ) -> Result<Vec<TransportSummary>, AppError> {
        Ok(store
            .transports_for_school(school_id)
            .await?
            .into_iter()
            .map(TransportSummary::from)
            .collect())
    }
}
