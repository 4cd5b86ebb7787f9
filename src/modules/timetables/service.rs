use tracing::instrument;

use schoople_core::AppError;
use schoople_db::Store;
use schoople_models::ids::{AcademicYearId, GradeSectionId, SchoolId};
use schoople_models::timetables::TimetableEntry;

pub struct TimetableService;

impl TimetableService {
    /// Entries of the matching timetable in period order. No timetable yields an empty list.
    #[instrument(skip(store))]
    pub async fn get_timetable(
        store: &Store,
        school_id: SchoolId,
        academic_year_id: AcademicYearId,
        grade_section_id: GradeSectionId,
    ) -> Result<Vec<TimetableEntry>, AppError> {
        let Some(timetable) = store
            .find_timetable(school_id, academic_year_id, grade_section_id)
            .await?
        else {
            return Ok(Vec::new());
        };

        let entries = store
            .timetable_entries(timetable.id)
            .await?
            .into_iter()
            .map(TimetableEntry::from)
            .collect();

        Ok(entries)
    }
}
