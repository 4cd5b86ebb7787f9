//! Demo data for local development.
//!
//! Seeds one school with an active academic year, grades and sections, staff,
//! subjects, enrolled students with login accounts, a weekly timetable per
//! grade-section, recent attendance, transport routes and calendar events.

pub mod generate;

use std::time::Instant;

use chrono::{Datelike, NaiveDate, Utc};
use rand::Rng;
use sqlx::{PgPool, Postgres, Transaction};

use schoople_core::password::hash_password;
use schoople_models::ids::{
    AcademicYearId, GradeSectionId, SchoolId, StaffId, StudentId, SubjectId, UserId,
};
use schoople_models::users::RoleType;

use crate::academic_years::activate_year;
use crate::accounts::find_or_create_role;
use generate::{DAYS, SECTIONS, SLOTS, SUBJECTS};

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub grades: usize,
    pub students_per_section: usize,
    pub teachers: usize,
    pub events: usize,
    pub attendance_days: i64,
    /// Password given to every seeded account.
    pub password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            grades: 3,
            students_per_section: 10,
            teachers: 6,
            events: 8,
            attendance_days: 21,
            password: "password".to_string(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct SeedSummary {
    pub school_id: SchoolId,
    pub academic_year_id: AcademicYearId,
    pub grade_sections: usize,
    pub students: usize,
    pub users: usize,
    pub timetable_entries: usize,
    pub attendance_rows: usize,
    pub transports: usize,
    pub events: usize,
}

pub async fn seed_database(pool: &PgPool, config: &SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    let today = Utc::now().date_naive();
    let password_hash = seed_password_hash(&config.password)?;

    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    println!("🏫 Seeding school...");
    let school = generate::generate_school();
    let school_id: SchoolId = sqlx::query_scalar(
        r#"INSERT INTO schools (code, title, description, address, phone, syllabus, status)
           VALUES ($1, $2, 'Demo school', $3, $4, 'CBSE', true)
           RETURNING id"#,
    )
    .bind(&school.code)
    .bind(&school.title)
    .bind(&school.address)
    .bind(&school.phone)
    .fetch_one(&mut *tx)
    .await?;
    summary.school_id = school_id;

    let year_start = NaiveDate::from_ymd_opt(academic_start_year(today), 6, 1)
        .ok_or_else(|| anyhow::anyhow!("invalid academic year start"))?;
    let year_end = NaiveDate::from_ymd_opt(academic_start_year(today) + 1, 3, 31)
        .ok_or_else(|| anyhow::anyhow!("invalid academic year end"))?;
    let academic_year_id: AcademicYearId = sqlx::query_scalar(
        "INSERT INTO academic_years (start_date, end_date, active) VALUES ($1, $2, false) RETURNING id",
    )
    .bind(year_start)
    .bind(year_end)
    .fetch_one(&mut *tx)
    .await?;
    summary.academic_year_id = academic_year_id;

    println!("👩‍🏫 Seeding staff and subjects...");
    let teacher_type: i32 = insert_staff_type(&mut tx, "Teacher").await?;
    let driver_type: i32 = insert_staff_type(&mut tx, "Driver").await?;

    let mut teachers = Vec::with_capacity(config.teachers);
    for _ in 0..config.teachers.max(1) {
        teachers.push(insert_staff(&mut tx, school_id, teacher_type, false, today).await?);
    }
    let mut drivers = Vec::new();
    for _ in 0..2 {
        drivers.push(insert_staff(&mut tx, school_id, driver_type, false, today).await?);
    }
    let transport_in_charge = insert_staff(&mut tx, school_id, teacher_type, true, today).await?;

    let mut subjects: Vec<SubjectId> = Vec::with_capacity(SUBJECTS.len());
    for title in SUBJECTS {
        subjects.push(
            sqlx::query_scalar("INSERT INTO subjects (school_id, title) VALUES ($1, $2) RETURNING id")
                .bind(school_id)
                .bind(title)
                .fetch_one(&mut *tx)
                .await?,
        );
    }

    println!("🚌 Seeding transport routes...");
    let mut transports = Vec::with_capacity(drivers.len());
    for (i, driver) in drivers.iter().enumerate() {
        let id: i32 = sqlx::query_scalar(
            r#"INSERT INTO transports (school_id, driver_id, driver_code, vehicle_number,
                                       route_number, route_name, in_charge_id)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id"#,
        )
        .bind(school_id)
        .bind(*driver)
        .bind(format!("DRV{:03}", i + 1))
        .bind(format!("KA-01-{:04}", rand::thread_rng().gen_range(1000..10000)))
        .bind(format!("R{}", i + 1))
        .bind(format!("Route {}", i + 1))
        .bind(transport_in_charge)
        .fetch_one(&mut *tx)
        .await?;
        transports.push(id);
    }
    summary.transports = transports.len();

    println!("📚 Seeding grades, sections and students...");
    let student_role = find_or_create_role(&mut tx, RoleType::Student).await?;
    let admin_role = find_or_create_role(&mut tx, RoleType::Admin).await?;
    find_or_create_role(&mut tx, RoleType::Staff).await?;

    let mut section_ids = Vec::with_capacity(SECTIONS.len());
    for title in SECTIONS {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO sections (school_id, title) VALUES ($1, $2) RETURNING id")
                .bind(school_id)
                .bind(title)
                .fetch_one(&mut *tx)
                .await?;
        section_ids.push(id);
    }

    let attendance_plan = generate::generate_attendance(config.attendance_days, today);
    let mut student_counter = 0usize;

    for grade in 1..=config.grades {
        let grade_id: i32 =
            sqlx::query_scalar("INSERT INTO grades (school_id, title) VALUES ($1, $2) RETURNING id")
                .bind(school_id)
                .bind(format!("Grade {grade}"))
                .fetch_one(&mut *tx)
                .await?;

        for section_id in &section_ids {
            let gs_id: GradeSectionId = sqlx::query_scalar(
                r#"INSERT INTO schools_grades_sections (school_id, grade_id, section_id, academic_year_id)
                   VALUES ($1, $2, $3, $4)
                   RETURNING id"#,
            )
            .bind(school_id)
            .bind(grade_id)
            .bind(*section_id)
            .bind(academic_year_id)
            .fetch_one(&mut *tx)
            .await?;
            summary.grade_sections += 1;

            summary.timetable_entries += seed_timetable(
                &mut tx,
                school_id,
                academic_year_id,
                gs_id,
                &subjects,
                &teachers,
            )
            .await?;

            let students = generate::generate_students(config.students_per_section, today);
            for (roll, seed) in students.into_iter().enumerate() {
                student_counter += 1;
                let student_id: StudentId = sqlx::query_scalar(
                    r#"INSERT INTO students (school_id, student_code, first_name, last_name, dob,
                                             admission_number, father_name, mother_name,
                                             blood_group, status)
                       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 1)
                       RETURNING id"#,
                )
                .bind(school_id)
                .bind(format!("{}-{}", school.code, seed.student_code))
                .bind(&seed.person.first_name)
                .bind(&seed.person.last_name)
                .bind(seed.dob)
                .bind(format!("{}-{}", school.code, seed.admission_number))
                .bind(&seed.father_name)
                .bind(&seed.mother_name)
                .bind(seed.blood_group)
                .fetch_one(&mut *tx)
                .await?;

                sqlx::query(
                    r#"INSERT INTO school_student (student_id, school_grade_section_id,
                                                   academic_year_id, transport_id, status, roll_number)
                       VALUES ($1, $2, $3, $4, true, $5)"#,
                )
                .bind(student_id)
                .bind(gs_id)
                .bind(academic_year_id)
                .bind(transports.get(student_counter % transports.len().max(1)).copied())
                .bind((roll + 1).to_string())
                .execute(&mut *tx)
                .await?;

                let user_id: UserId = sqlx::query_scalar(
                    "INSERT INTO users (student_id, username, password, is_active) VALUES ($1, $2, $3, true) RETURNING id",
                )
                .bind(student_id)
                .bind(format!("student{student_counter}"))
                .bind(&password_hash)
                .fetch_one(&mut *tx)
                .await?;
                sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
                    .bind(user_id)
                    .bind(student_role)
                    .execute(&mut *tx)
                    .await?;
                summary.users += 1;

                let marked_by = teachers[student_counter % teachers.len()];
                for day in &attendance_plan {
                    sqlx::query(
                        r#"INSERT INTO attendances (student_id, staff_id, schools_grades_sections_id,
                                                    attendence_date, is_present_morning,
                                                    is_present_afternoon, created_by, created_on)
                           VALUES ($1, $2, $3, $4, $5, $6, $2, $4)"#,
                    )
                    .bind(student_id)
                    .bind(marked_by)
                    .bind(gs_id)
                    .bind(day.date)
                    .bind(day.morning)
                    .bind(day.afternoon)
                    .execute(&mut *tx)
                    .await?;
                    summary.attendance_rows += 1;
                }
            }
            summary.students = student_counter;
        }
    }

    let admin_user: UserId = sqlx::query_scalar(
        "INSERT INTO users (staff_id, username, password, is_active) VALUES ($1, $2, $3, true) RETURNING id",
    )
    .bind(teachers[0])
    .bind(format!("admin-{}", school.code.to_lowercase()))
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await?;
    sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
        .bind(admin_user)
        .bind(admin_role)
        .execute(&mut *tx)
        .await?;
    summary.users += 1;

    println!("📅 Seeding events...");
    for event in generate::generate_events(config.events, Utc::now().naive_utc()) {
        sqlx::query("INSERT INTO events (school_id, title, description, date) VALUES ($1, $2, $3, $4)")
            .bind(school_id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.date)
            .execute(&mut *tx)
            .await?;
        summary.events += 1;
    }

    tx.commit().await?;
    activate_year(pool, academic_year_id).await?;

    println!("   ✓ Seeded school {} in {:?}", school.code, start_time.elapsed());
    Ok(summary)
}

/// Academic years start in June.
fn academic_start_year(today: NaiveDate) -> i32 {
    if today.month() >= 6 {
        today.year()
    } else {
        today.year() - 1
    }
}

async fn insert_staff_type(tx: &mut Transaction<'_, Postgres>, title: &str) -> anyhow::Result<i32> {
    Ok(
        sqlx::query_scalar("INSERT INTO staff_types (title) VALUES ($1) RETURNING id")
            .bind(title)
            .fetch_one(&mut **tx)
            .await?,
    )
}

async fn insert_staff(
    tx: &mut Transaction<'_, Postgres>,
    school_id: SchoolId,
    staff_type_id: i32,
    is_transport_in_charge: bool,
    joining_date: NaiveDate,
) -> anyhow::Result<StaffId> {
    let person = generate::generate_person();
    Ok(sqlx::query_scalar(
        r#"INSERT INTO staffs (school_id, staff_type_id, first_name, last_name,
                               is_transport_in_charge, joining_date, status)
           VALUES ($1, $2, $3, $4, $5, $6, true)
           RETURNING id"#,
    )
    .bind(school_id)
    .bind(staff_type_id)
    .bind(&person.first_name)
    .bind(&person.last_name)
    .bind(is_transport_in_charge)
    .bind(joining_date)
    .fetch_one(&mut **tx)
    .await?)
}

async fn seed_timetable(
    tx: &mut Transaction<'_, Postgres>,
    school_id: SchoolId,
    academic_year_id: AcademicYearId,
    grade_section_id: GradeSectionId,
    subjects: &[SubjectId],
    teachers: &[StaffId],
) -> anyhow::Result<usize> {
    let time_table_id: i32 = sqlx::query_scalar(
        r#"INSERT INTO time_tables (school_id, academic_year_id, schools_grades_sections_id)
           VALUES ($1, $2, $3)
           RETURNING id"#,
    )
    .bind(school_id)
    .bind(academic_year_id)
    .bind(grade_section_id)
    .fetch_one(&mut **tx)
    .await?;

    let mut count = 0;
    let mut order_number = 0;
    for (day_index, day) in DAYS.iter().enumerate() {
        for (slot_index, slot) in SLOTS.iter().enumerate() {
            order_number += 1;
            let pick = day_index + slot_index;
            sqlx::query(
                r#"INSERT INTO time_table_details (time_table_id, day_name, order_number, time_slot,
                                                   subject_id, staff_id)
                   VALUES ($1, $2, $3, $4, $5, $6)"#,
            )
            .bind(time_table_id)
            .bind(*day)
            .bind(order_number)
            .bind(*slot)
            .bind(subjects[pick % subjects.len()])
            .bind(teachers[pick % teachers.len()])
            .execute(&mut **tx)
            .await?;
            count += 1;
        }
    }
    Ok(count)
}

/// Shared hash for every seeded account, at the cost login expects.
fn seed_password_hash(password: &str) -> anyhow::Result<String> {
    hash_password(password).map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoople_core::password::{dummy_hash_cost, hash_cost};

    #[test]
    fn test_academic_year_starts_in_june() {
        let may = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
        let june = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(academic_start_year(may), 2024);
        assert_eq!(academic_start_year(june), 2025);
    }

    #[test]
    fn test_default_config() {
        let config = SeedConfig::default();
        assert_eq!(config.grades, 3);
        assert_eq!(config.password, "password");
    }

    #[test]
    fn test_seeded_hash_cost_matches_login_dummy() {
        let hash = seed_password_hash("password").unwrap();
        assert_eq!(hash_cost(&hash), dummy_hash_cost());
    }
}
