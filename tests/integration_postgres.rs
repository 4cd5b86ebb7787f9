//! Store queries against a real database. Run with
//! `DATABASE_URL=... cargo test -- --ignored`.

use schoople_db::Store;
use schoople_models::ids::{AcademicYearId, GradeSectionId, SchoolId, StudentId, UserId};
use sqlx::PgPool;

async fn seed(pool: &PgPool) {
    sqlx::raw_sql(
        r#"
        INSERT INTO schools (id, code, title) VALUES (1, 'S1', 'Springfield Elementary');
        INSERT INTO academic_years (id, start_date, end_date, active)
            VALUES (5, '2025-06-01', '2026-03-31', true);
        INSERT INTO grades (id, school_id, title) VALUES (3, 1, 'Grade 4');
        INSERT INTO sections (id, school_id, title) VALUES (1, 1, 'A');
        INSERT INTO schools_grades_sections (id, school_id, grade_id, section_id, academic_year_id)
            VALUES (9, 1, 3, 1, 5);
        INSERT INTO students (id, school_id, first_name, last_name) VALUES (100, 1, 'A', 'Simpson');
        INSERT INTO school_student (id, student_id, school_grade_section_id, academic_year_id, status, roll_number)
            VALUES (1, 100, 9, 5, true, '12'), (2, 100, 9, 5, false, '99');
        INSERT INTO staff_types (id, title) VALUES (1, 'Teacher');
        INSERT INTO staffs (id, school_id, staff_type_id, first_name, last_name)
            VALUES (20, 1, 1, 'Seymour', 'Skinner');
        INSERT INTO subjects (id, school_id, title) VALUES (30, 1, 'Mathematics');
        INSERT INTO time_tables (id, school_id, academic_year_id, schools_grades_sections_id)
            VALUES (40, 1, 5, 9);
        INSERT INTO time_table_details (id, time_table_id, day_name, order_number, time_slot, subject_id, staff_id)
            VALUES (1, 40, 'Monday', NULL, '13:00', 30, 20),
                   (2, 40, 'Monday', 2, '10:00', 30, 20),
                   (3, 40, 'Monday', 1, '09:00', 30, 20);
        INSERT INTO roles (id, role_name, role_type) VALUES (1, 'Student', 'student');
        INSERT INTO users (id, student_id, username, password, is_active)
            VALUES (7, 100, 'alice', 'hash', true), (8, NULL, 'dormant', 'hash', false);
        INSERT INTO user_roles (id, user_id, role_id) VALUES (1, 7, 1);
        "#,
    )
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_login_lookup_skips_inactive_users(pool: PgPool) {
    seed(&pool).await;
    let store = Store::from(pool);

    let alice = store.find_login_user("alice").await.unwrap().unwrap();
    assert_eq!(alice.id, UserId(7));
    assert_eq!(alice.student_id, Some(StudentId(100)));
    assert!(store.find_login_user("dormant").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_enrollment_uses_active_row(pool: PgPool) {
    seed(&pool).await;
    let store = Store::from(pool);

    let placement = store
        .find_enrollment(StudentId(100), AcademicYearId(5))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(placement.school_grade_section_id, GradeSectionId(9));
    assert_eq!(placement.school_id, SchoolId(1));
    assert_eq!(placement.grade.as_deref(), Some("Grade 4"));
    assert_eq!(placement.roll_number.as_deref(), Some("12"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_timetable_entries_null_order_last(pool: PgPool) {
    seed(&pool).await;
    let store = Store::from(pool);

    let timetable = store
        .find_timetable(SchoolId(1), AcademicYearId(5), GradeSectionId(9))
        .await
        .unwrap()
        .unwrap();
    let rows = store.timetable_entries(timetable.id).await.unwrap();
    let orders: Vec<_> = rows.iter().map(|r| r.order_number).collect();
    assert_eq!(orders, vec![Some(1), Some(2), None]);
    assert_eq!(rows[0].subject_title.as_deref(), Some("Mathematics"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_single_active_year_enforced(pool: PgPool) {
    seed(&pool).await;

    let result = sqlx::query(
        "INSERT INTO academic_years (start_date, end_date, active) VALUES ('2026-06-01', '2027-03-31', true)",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());

    let store = Store::from(pool);
    assert_eq!(store.active_academic_years().await.unwrap().len(), 1);
    assert_eq!(store.roles_for_user(UserId(7)).await.unwrap().len(), 1);
}
