//! School hierarchy entities: schools, academic years, grades, sections and
//! the grade-section join that timetables and rosters attach to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::ids::{AcademicYearId, GradeId, GradeSectionId, SchoolId, SectionId};

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct School {
    pub id: SchoolId,
    /// Unique short code, e.g. "S1".
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Curriculum board, e.g. CBSE or ICSE.
    pub syllabus: Option<String>,
    pub status: bool,
}

/// An academic year. At most one row is expected to be `active`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct AcademicYear {
    pub id: AcademicYearId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Grade {
    pub id: GradeId,
    pub school_id: SchoolId,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Section {
    pub id: SectionId,
    pub school_id: SchoolId,
    pub title: String,
}

/// A `schools_grades_sections` row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct GradeSection {
    pub id: GradeSectionId,
    pub school_id: SchoolId,
    pub grade_id: GradeId,
    pub section_id: SectionId,
    pub academic_year_id: AcademicYearId,
}
