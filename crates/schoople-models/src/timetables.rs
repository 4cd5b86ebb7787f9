//! Timetables and their per-period entries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::ids::{
    AcademicYearId, GradeSectionId, SchoolId, StaffId, SubjectId, TimeTableDetailId, TimeTableId,
};

/// Placeholder shown when a subject or staff member cannot be resolved.
pub const NOT_AVAILABLE: &str = "N/A";

/// A timetable for one (school, academic year, grade-section).
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct TimeTable {
    pub id: TimeTableId,
    pub school_id: SchoolId,
    pub academic_year_id: AcademicYearId,
    pub schools_grades_sections_id: GradeSectionId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct TimeTableDetail {
    pub id: TimeTableDetailId,
    pub time_table_id: TimeTableId,
    pub day_name: String,
    pub order_number: Option<i32>,
    pub time_slot: String,
    pub subject_id: SubjectId,
    pub staff_id: StaffId,
}

/// A detail row joined with its subject and staff member, either of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct TimetableEntryRow {
    pub id: TimeTableDetailId,
    pub day_name: String,
    pub order_number: Option<i32>,
    pub time_slot: String,
    pub subject_title: Option<String>,
    pub staff_first_name: Option<String>,
    pub staff_last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimetableEntry {
    pub day_name: String,
    pub order_number: Option<i32>,
    pub time_slot: String,
    /// Subject title, or "N/A".
    pub subject: String,
    /// Staff full name, or "N/A".
    pub staff: String,
}

impl From<TimetableEntryRow> for TimetableEntry {
    fn from(row: TimetableEntryRow) -> Self {
        let staff = match (row.staff_first_name, row.staff_last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => NOT_AVAILABLE.to_string(),
        };

        Self {
            day_name: row.day_name,
            order_number: row.order_number,
            time_slot: row.time_slot,
            subject: row
                .subject_title
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            staff,
        }
    }
}

/// Query string of `GET /api/timetable-details`. All three parameters are required.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimetableQuery {
    pub academic_year_id: Option<i32>,
    pub school_id: Option<i32>,
    pub school_grade_section_id: Option<i32>,
}

impl TimetableQuery {
    /// Returns the three keys when every parameter is present.
    pub fn keys(&self) -> Option<(SchoolId, AcademicYearId, GradeSectionId)> {
        Some((
            SchoolId(self.school_id?),
            AcademicYearId(self.academic_year_id?),
            GradeSectionId(self.school_grade_section_id?),
        ))
    }
}
