//! Daily attendance records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::{AttendanceId, GradeSectionId, StaffId, StudentId};

/// An `attendances` row. The date column keeps its historical spelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Attendance {
    pub id: AttendanceId,
    pub student_id: StudentId,
    pub staff_id: StaffId,
    pub schools_grades_sections_id: GradeSectionId,
    pub is_hourly: bool,
    pub attendence_date: NaiveDate,
    pub period: Option<String>,
    pub time_slot: Option<i32>,
    pub is_present_morning: bool,
    pub is_present_afternoon: bool,
    pub created_by: StaffId,
    pub created_on: NaiveDate,
    pub updated_by: Option<StaffId>,
    pub updated_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    pub attendence_date: NaiveDate,
    pub is_present_morning: bool,
    pub is_present_afternoon: bool,
    /// Present in both halves of the day.
    pub is_present_fullday: bool,
}

impl From<Attendance> for AttendanceRecord {
    fn from(row: Attendance) -> Self {
        Self {
            attendence_date: row.attendence_date,
            is_present_morning: row.is_present_morning,
            is_present_afternoon: row.is_present_afternoon,
            is_present_fullday: row.is_present_morning && row.is_present_afternoon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(morning: bool, afternoon: bool) -> Attendance {
        Attendance {
            attendence_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            is_present_morning: morning,
            is_present_afternoon: afternoon,
            ..Default::default()
        }
    }

    #[test]
    fn test_fullday_requires_both_halves() {
        assert!(AttendanceRecord::from(row(true, true)).is_present_fullday);
        assert!(!AttendanceRecord::from(row(true, false)).is_present_fullday);
        assert!(!AttendanceRecord::from(row(false, true)).is_present_fullday);
    }

    #[test]
    fn test_record_keeps_historical_key() {
        let json = serde_json::to_value(AttendanceRecord::from(row(true, false))).unwrap();
        assert_eq!(json["attendence_date"], "2025-06-02");
        assert!(json.get("attendance_date").is_none());
    }
}
