//! PostgreSQL queries behind [`crate::Store::Postgres`].

use sqlx::PgPool;

use schoople_models::attendances::Attendance;
use schoople_models::events::Event;
use schoople_models::ids::{
    AcademicYearId, GradeSectionId, SchoolId, StudentId, TimeTableId, UserId,
};
use schoople_models::schools::{AcademicYear, School};
use schoople_models::students::{EnrollmentPlacement, Student};
use schoople_models::timetables::{TimeTable, TimetableEntryRow};
use schoople_models::transports::TransportRouteRow;
use schoople_models::users::{Role, User, UserRole};

const USER_COLUMNS: &str = "id, staff_id, student_id, username, password, is_active";

const STUDENT_COLUMNS: &str = "id, school_id, student_code, first_name, middle_name, last_name, \
     dob, aadhar_number, photo, admission_number, hobbies, permanent_address, \
     communication_address, mother_name, father_name, father_email, mother_email, \
     annual_income, blood_group, status";

pub(crate) async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

pub(crate) async fn find_login_user(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = $1 AND is_active = true"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn find_user(pool: &PgPool, id: UserId) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn find_student(
    pool: &PgPool,
    id: StudentId,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!(
        "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn find_school(pool: &PgPool, id: SchoolId) -> Result<Option<School>, sqlx::Error> {
    sqlx::query_as::<_, School>(
        "SELECT id, code, title, description, address, phone, syllabus, status
         FROM schools WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn active_academic_years(pool: &PgPool) -> Result<Vec<AcademicYear>, sqlx::Error> {
    sqlx::query_as::<_, AcademicYear>(
        "SELECT id, start_date, end_date, active
         FROM academic_years WHERE active = true ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub(crate) async fn find_enrollment(
    pool: &PgPool,
    student_id: StudentId,
    academic_year_id: AcademicYearId,
) -> Result<Option<EnrollmentPlacement>, sqlx::Error> {
    sqlx::query_as::<_, EnrollmentPlacement>(
        r#"SELECT ss.id AS enrollment_id,
                  gs.id AS school_grade_section_id,
                  gs.school_id,
                  g.title AS grade,
                  s.title AS section,
                  ss.roll_number
           FROM school_student ss
           JOIN schools_grades_sections gs ON gs.id = ss.school_grade_section_id
           LEFT JOIN grades g ON g.id = gs.grade_id
           LEFT JOIN sections s ON s.id = gs.section_id
           WHERE ss.student_id = $1
             AND ss.academic_year_id = $2
             AND ss.status = true
           ORDER BY ss.id DESC
           LIMIT 1"#,
    )
    .bind(student_id)
    .bind(academic_year_id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn roles_for_user(pool: &PgPool, user_id: UserId) -> Result<Vec<Role>, sqlx::Error> {
    sqlx::query_as::<_, Role>(
        r#"SELECT DISTINCT r.id, r.role_name, r.role_type, r.is_active
           FROM roles r
           JOIN user_roles ur ON ur.role_id = r.id
           WHERE ur.user_id = $1
           ORDER BY r.id"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub(crate) async fn role_assignments(
    pool: &PgPool,
    user_id: UserId,
) -> Result<Vec<UserRole>, sqlx::Error> {
    sqlx::query_as::<_, UserRole>(
        "SELECT id, user_id, role_id FROM user_roles WHERE user_id = $1 ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub(crate) async fn find_timetable(
    pool: &PgPool,
    school_id: SchoolId,
    academic_year_id: AcademicYearId,
    grade_section_id: GradeSectionId,
) -> Result<Option<TimeTable>, sqlx::Error> {
    sqlx::query_as::<_, TimeTable>(
        r#"SELECT id, school_id, academic_year_id, schools_grades_sections_id
           FROM time_tables
           WHERE school_id = $1 AND academic_year_id = $2 AND schools_grades_sections_id = $3
           ORDER BY id
           LIMIT 1"#,
    )
    .bind(school_id)
    .bind(academic_year_id)
    .bind(grade_section_id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn timetable_entries(
    pool: &PgPool,
    time_table_id: TimeTableId,
) -> Result<Vec<TimetableEntryRow>, sqlx::Error> {
    sqlx::query_as::<_, TimetableEntryRow>(
        r#"SELECT d.id,
                  d.day_name,
                  d.order_number,
                  d.time_slot,
                  sub.title AS subject_title,
                  st.first_name AS staff_first_name,
                  st.last_name AS staff_last_name
           FROM time_table_details d
           LEFT JOIN subjects sub ON sub.id = d.subject_id
           LEFT JOIN staffs st ON st.id = d.staff_id
           WHERE d.time_table_id = $1
           ORDER BY d.order_number ASC NULLS LAST, d.id ASC"#,
    )
    .bind(time_table_id)
    .fetch_all(pool)
    .await
}

pub(crate) async fn attendances_for_student(
    pool: &PgPool,
    student_id: StudentId,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        r#"SELECT id, student_id, staff_id, schools_grades_sections_id, is_hourly,
                  attendence_date, period, time_slot, is_present_morning,
                  is_present_afternoon, created_by, created_on, updated_by, updated_on
           FROM attendances
           WHERE student_id = $1
           ORDER BY attendence_date ASC, id ASC"#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await
}

pub(crate) async fn transports_for_school(
    pool: &PgPool,
    school_id: SchoolId,
) -> Result<Vec<TransportRouteRow>, sqlx::Error> {
    sqlx::query_as::<_, TransportRouteRow>(
        r#"SELECT t.id,
                  t.driver_code,
                  t.vehicle_number,
                  t.route_number,
                  t.route_name,
                  t.vehicle_gps_device_id,
                  t.vehicle_tracking_url,
                  d.first_name AS driver_first_name,
                  d.last_name AS driver_last_name,
                  c.first_name AS in_charge_first_name,
                  c.last_name AS in_charge_last_name
           FROM transports t
           LEFT JOIN staffs d ON d.id = t.driver_id
           LEFT JOIN staffs c ON c.id = t.in_charge_id
           WHERE t.school_id = $1
           ORDER BY t.route_number ASC, t.id ASC"#,
    )
    .bind(school_id)
    .fetch_all(pool)
    .await
}

pub(crate) async fn events_for_school(
    pool: &PgPool,
    school_id: SchoolId,
) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"SELECT id, school_id, title, description, date
           FROM events
           WHERE school_id = $1
           ORDER BY date DESC, id DESC"#,
    )
    .bind(school_id)
    .fetch_all(pool)
    .await
}
