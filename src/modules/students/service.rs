use anyhow::anyhow;
use tracing::instrument;

use schoople_core::AppError;
use schoople_db::Store;
use schoople_models::ids::StudentId;
use schoople_models::schools::AcademicYear;
use schoople_models::students::StudentProfile;

pub struct StudentService;

impl StudentService {
    /// The single active academic year.
    ///
    /// Zero or several active rows is a data-integrity fault, never resolved by picking one.
    #[instrument(skip(store))]
    pub async fn active_academic_year(store: &Store) -> Result<AcademicYear, AppError> {
        let mut years = store.active_academic_years().await?;
        match years.len() {
            1 => Ok(years.remove(0)),
            0 => Err(AppError::invalid_state(anyhow!("No active academic year"))),
            n => {
                tracing::error!(count = n, "several academic years are active");
                Err(AppError::invalid_state(anyhow!(
                    "Multiple active academic years found"
                )))
            }
        }
    }

    /// Projects the student's profile. `Ok(None)` when the student does not exist.
    #[instrument(skip(store))]
    pub async fn build_profile(
        store: &Store,
        student_id: StudentId,
    ) -> Result<Option<StudentProfile>, AppError> {
        let Some(student) = store.find_student(student_id).await? else {
            return Ok(None);
        };

        let active_year = Self::active_academic_year(store).await?;
        let placement = store.find_enrollment(student.id, active_year.id).await?;

        if let Some(placement) = &placement {
            if placement.school_id != student.school_id {
                tracing::error!(
                    student_id = %student.id,
                    student_school = %student.school_id,
                    grade_section = %placement.school_grade_section_id,
                    grade_section_school = %placement.school_id,
                    "enrollment points at another school's grade-section"
                );
                return Err(AppError::invalid_state(anyhow!(
                    "Student enrollment belongs to a different school"
                )));
            }
        }

        let school = store.find_school(student.school_id).await?.ok_or_else(|| {
            AppError::invalid_state(anyhow!("School of student {} is missing", student.id))
        })?;

        Ok(Some(StudentProfile::assemble(
            student,
            school,
            &active_year,
            placement,
        )))
    }

    #[instrument(skip(store))]
    pub async fn get_student_profile(
        store: &Store,
        student_id: StudentId,
    ) -> Result<StudentProfile, AppError> {
        Self::build_profile(store, student_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))
    }
}
