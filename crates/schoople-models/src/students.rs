//! Student entities, enrollments and the flat profile projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::{
    AcademicYearId, EnrollmentId, GradeSectionId, HouseId, SchoolId, StudentId, TransportId,
};
use crate::schools::{AcademicYear, School};

/// A `students` row, restricted to the columns the API projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: StudentId,
    pub school_id: SchoolId,
    pub student_code: Option<String>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub dob: Option<NaiveDate>,
    pub aadhar_number: Option<String>,
    pub photo: Option<String>,
    pub admission_number: Option<String>,
    pub hobbies: Option<String>,
    pub permanent_address: Option<String>,
    pub communication_address: Option<String>,
    pub mother_name: Option<String>,
    pub father_name: Option<String>,
    pub father_email: Option<String>,
    pub mother_email: Option<String>,
    pub annual_income: Option<String>,
    pub blood_group: Option<String>,
    pub status: Option<i32>,
}

/// A `school_student` row: one student's placement for one academic year.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student_id: StudentId,
    pub house_id: Option<HouseId>,
    /// Comma-separated club names.
    pub clubs: Option<String>,
    pub school_grade_section_id: Option<GradeSectionId>,
    pub academic_year_id: AcademicYearId,
    pub transport_id: Option<TransportId>,
    /// `true` marks the enrollment as active.
    pub status: bool,
    pub roll_number: Option<String>,
}

/// An enrollment joined with its grade-section, grade and section.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EnrollmentPlacement {
    pub enrollment_id: EnrollmentId,
    pub school_grade_section_id: GradeSectionId,
    /// School owning the grade-section.
    pub school_id: SchoolId,
    pub grade: Option<String>,
    pub section: Option<String>,
    pub roll_number: Option<String>,
}

/// Flat student profile returned by login and `/api/student-data/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentProfile {
    pub school_id: SchoolId,
    pub school_code: String,
    pub school_name: String,
    /// `null` when the student has no enrollment in the active year.
    pub school_grade_section_id: Option<GradeSectionId>,
    pub active_academic_year_id: AcademicYearId,
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub dob: Option<NaiveDate>,
    pub photo: Option<String>,
    pub admission_number: Option<String>,
    pub student_code: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub grade: Option<String>,
    pub section: Option<String>,
    pub roll_number: Option<String>,
    pub aadhar_number: Option<String>,
    pub permanent_address: Option<String>,
    pub communication_address: Option<String>,
    pub hobbies: Option<String>,
    pub father_email: Option<String>,
    pub mother_email: Option<String>,
    pub annual_income: Option<String>,
    pub blood_group: Option<String>,
    pub status: Option<i32>,
}

impl StudentProfile {
    /// Flattens already-resolved rows. Consistency between them is the caller's concern.
    pub fn assemble(
        student: Student,
        school: School,
        active_year: &AcademicYear,
        placement: Option<EnrollmentPlacement>,
    ) -> Self {
        let (school_grade_section_id, grade, section, roll_number) = match placement {
            Some(p) => (
                Some(p.school_grade_section_id),
                p.grade,
                p.section,
                p.roll_number,
            ),
            None => (None, None, None, None),
        };

        Self {
            school_id: school.id,
            school_code: school.code,
            school_name: school.title,
            school_grade_section_id,
            active_academic_year_id: active_year.id,
            student_id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            middle_name: student.middle_name,
            dob: student.dob,
            photo: student.photo,
            admission_number: student.admission_number,
            student_code: student.student_code,
            father_name: student.father_name,
            mother_name: student.mother_name,
            grade,
            section,
            roll_number,
            aadhar_number: student.aadhar_number,
            permanent_address: student.permanent_address,
            communication_address: student.communication_address,
            hobbies: student.hobbies,
            father_email: student.father_email,
            mother_email: student.mother_email,
            annual_income: student.annual_income,
            blood_group: student.blood_group,
            status: student.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentDataResponse {
    pub student_data: StudentProfile,
}
