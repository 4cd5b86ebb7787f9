use tracing::instrument;

use schoople_core::AppError;
use schoople_db::Store;
use schoople_models::attendances::AttendanceRecord;
use schoople_models::ids::StudentId;

pub struct AttendanceService;

impl AttendanceService {
    #[instrument(skip(store))]
    pub async fn list_attendance(
        store: &Store,
        student_id: StudentId,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = store
            .attendances_for_student(student_id)
            .await?
            .into_iter()
            .map(AttendanceRecord::from)
            .collect();
        Ok(records)
    }
}
