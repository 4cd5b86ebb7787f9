//! Shared fixture: a small school backed by the in-memory store.

#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use schoople::router::init_router;
use schoople::state::AppState;
use schoople_auth::create_access_token;
use schoople_config::JwtConfig;
use schoople_core::{Clock, FixedClock};
use schoople_core::password::hash_password_with_cost;
use schoople_db::{MemoryStore, Store};
use schoople_models::attendances::Attendance;
use schoople_models::events::Event;
use schoople_models::ids::*;
use schoople_models::schools::{AcademicYear, Grade, GradeSection, School, Section};
use schoople_models::staff::{Staff, Subject};
use schoople_models::students::{Enrollment, Student};
use schoople_models::timetables::{TimeTable, TimeTableDetail};
use schoople_models::transports::Transport;
use schoople_models::users::{Role, User, UserRole};

pub const PASSWORD: &str = "secret123";
pub const JWT_SECRET: &str = "integration-test-secret";

pub const ADMIN_USER: UserId = UserId(1);
pub const ALICE: UserId = UserId(7);
pub const BOB: UserId = UserId(8);
pub const GHOST: UserId = UserId(9);
pub const INACTIVE: UserId = UserId(10);
pub const TEACHER: UserId = UserId(11);

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap()
}

fn password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password_with_cost(PASSWORD, 4).unwrap())
        .clone()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn user(id: i32, username: &str, student_id: Option<i32>, staff_id: Option<i32>) -> User {
    User {
        id: UserId(id),
        staff_id: staff_id.map(StaffId),
        student_id: student_id.map(StudentId),
        username: username.to_string(),
        password: password_hash(),
        is_active: true,
    }
}

fn role(id: i32, name: &str, role_type: &str) -> Role {
    Role {
        id: RoleId(id),
        role_name: name.to_string(),
        role_type: role_type.to_string(),
        is_active: true,
    }
}

fn user_role(id: i32, user_id: i32, role_id: i32) -> UserRole {
    UserRole {
        id: UserRoleId(id),
        user_id: UserId(user_id),
        role_id: RoleId(role_id),
    }
}

fn staff(id: i32, first_name: &str, last_name: &str) -> Staff {
    Staff {
        id: StaffId(id),
        school_id: SchoolId(1),
        staff_type_id: 1,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        status: true,
        ..Default::default()
    }
}

fn detail(id: i32, day: &str, order: Option<i32>, slot: &str, subject: i32, staff: i32) -> TimeTableDetail {
    TimeTableDetail {
        id: TimeTableDetailId(id),
        time_table_id: TimeTableId(40),
        day_name: day.to_string(),
        order_number: order,
        time_slot: slot.to_string(),
        subject_id: SubjectId(subject),
        staff_id: StaffId(staff),
    }
}

fn attendance(id: i32, on: NaiveDate, morning: bool, afternoon: bool) -> Attendance {
    Attendance {
        id: AttendanceId(id),
        student_id: StudentId(100),
        staff_id: StaffId(20),
        schools_grades_sections_id: GradeSectionId(9),
        attendence_date: on,
        is_present_morning: morning,
        is_present_afternoon: afternoon,
        created_by: StaffId(20),
        created_on: on,
        ..Default::default()
    }
}

fn event(id: i32, title: &str, at: DateTime<Utc>) -> Event {
    Event {
        id: EventId(id),
        school_id: SchoolId(1),
        title: title.to_string(),
        description: Some(format!("{title} description")),
        date: at.naive_utc(),
    }
}

/// School 1 ("S1") with active academic year 5, grade-section 9 and student 100
/// enrolled in it, plus accounts, a timetable, attendance, transports and events.
pub fn school_store() -> MemoryStore {
    school_store_without_active_year().with_academic_year(AcademicYear {
        id: AcademicYearId(5),
        start_date: date(2025, 6, 1),
        end_date: date(2026, 3, 31),
        active: true,
    })
}

/// [`school_store`] with academic year 5 left out, so no year is active.
pub fn school_store_without_active_year() -> MemoryStore {
    MemoryStore::new()
        .with_school(School {
            id: SchoolId(1),
            code: "S1".to_string(),
            title: "Springfield Elementary".to_string(),
            status: true,
            ..Default::default()
        })
        .with_school(School {
            id: SchoolId(2),
            code: "S2".to_string(),
            title: "Shelbyville Elementary".to_string(),
            status: true,
            ..Default::default()
        })
        .with_academic_year(AcademicYear {
            id: AcademicYearId(4),
            start_date: date(2024, 6, 1),
            end_date: date(2025, 3, 31),
            active: false,
        })
        .with_grade(Grade {
            id: GradeId(3),
            school_id: SchoolId(1),
            title: "Grade 4".to_string(),
        })
        .with_section(Section {
            id: SectionId(1),
            school_id: SchoolId(1),
            title: "A".to_string(),
        })
        .with_grade_section(GradeSection {
            id: GradeSectionId(9),
            school_id: SchoolId(1),
            grade_id: GradeId(3),
            section_id: SectionId(1),
            academic_year_id: AcademicYearId(5),
        })
        .with_student(Student {
            id: StudentId(100),
            school_id: SchoolId(1),
            first_name: "A".to_string(),
            last_name: "Simpson".to_string(),
            student_code: Some("S1-0100".to_string()),
            status: Some(1),
            ..Default::default()
        })
        .with_student(Student {
            id: StudentId(101),
            school_id: SchoolId(1),
            first_name: "B".to_string(),
            last_name: "Van Houten".to_string(),
            ..Default::default()
        })
        .with_enrollment(Enrollment {
            id: EnrollmentId(1),
            student_id: StudentId(100),
            school_grade_section_id: Some(GradeSectionId(9)),
            academic_year_id: AcademicYearId(5),
            status: true,
            roll_number: Some("12".to_string()),
            ..Default::default()
        })
        .with_role(role(1, "Administrator", "admin"))
        .with_role(role(2, "Student", "student"))
        .with_role(role(3, "Teacher", "staff"))
        .with_user(user(1, "principal", None, Some(20)))
        .with_user(user(7, "alice", Some(100), None))
        .with_user(user(8, "bob", Some(101), None))
        .with_user(user(9, "ghost", Some(999), None))
        .with_user(User {
            is_active: false,
            ..user(10, "dormant", Some(100), None)
        })
        .with_user(user(11, "teacher", None, Some(21)))
        .with_user_role(user_role(1, 1, 1))
        .with_user_role(user_role(2, 7, 2))
        .with_user_role(user_role(3, 8, 2))
        .with_user_role(user_role(4, 11, 3))
        .with_user_role(user_role(5, 1, 3))
        .with_staff(staff(20, "Seymour", "Skinner"))
        .with_staff(staff(21, "Edna", "Krabappel"))
        .with_staff(staff(22, "Otto", "Mann"))
        .with_subject(Subject {
            id: SubjectId(30),
            school_id: SchoolId(1),
            title: "Mathematics".to_string(),
        })
        .with_subject(Subject {
            id: SubjectId(31),
            school_id: SchoolId(1),
            title: "English".to_string(),
        })
        .with_timetable(TimeTable {
            id: TimeTableId(40),
            school_id: SchoolId(1),
            academic_year_id: AcademicYearId(5),
            schools_grades_sections_id: GradeSectionId(9),
        })
        .with_timetable_detail(detail(401, "Monday", Some(2), "09:45-10:30", 31, 21))
        .with_timetable_detail(detail(402, "Monday", None, "14:30-15:00", 30, 21))
        .with_timetable_detail(detail(403, "Monday", Some(1), "09:00-09:45", 30, 20))
        .with_timetable_detail(detail(404, "Monday", Some(3), "10:45-11:30", 99, 98))
        .with_attendance(attendance(502, date(2025, 5, 28), true, false))
        .with_attendance(attendance(501, date(2025, 5, 27), true, true))
        .with_attendance(attendance(503, date(2025, 5, 29), false, false))
        .with_transport(Transport {
            id: TransportId(60),
            school_id: SchoolId(1),
            driver_id: StaffId(22),
            driver_code: "DRV002".to_string(),
            vehicle_number: "KA-01-2222".to_string(),
            route_number: "R2".to_string(),
            route_name: "Evergreen Terrace".to_string(),
            in_charge_id: StaffId(77),
            ..Default::default()
        })
        .with_transport(Transport {
            id: TransportId(61),
            school_id: SchoolId(1),
            driver_id: StaffId(22),
            driver_code: "DRV001".to_string(),
            vehicle_number: "KA-01-1111".to_string(),
            route_number: "R1".to_string(),
            route_name: "Main Street".to_string(),
            vehicle_tracking_url: Some("https://track.example/61".to_string()),
            in_charge_id: StaffId(20),
            ..Default::default()
        })
        .with_event(event(70, "Sports day", start_time() + chrono::Duration::days(10)))
        .with_event(event(71, "Science fair", start_time() - chrono::Duration::days(3)))
        .with_event(event(72, "Assembly", start_time()))
}

pub struct TestApp {
    pub router: Router,
    pub clock: Arc<FixedClock>,
    pub jwt_config: JwtConfig,
    pub store: Store,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(school_store())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        let clock = Arc::new(FixedClock::new(start_time()));
        let jwt_config = JwtConfig::new(JWT_SECRET);
        let store = Store::from(store);
        let state = AppState::new(store.clone(), jwt_config.clone(), clock.clone());

        Self {
            router: init_router(state),
            clock,
            jwt_config,
            store,
        }
    }

    /// A token for a fixture user, signed at the current clock time.
    pub async fn token_for(&self, user_id: UserId) -> String {
        let user = self.store.find_user(user_id).await.unwrap().expect("fixture user");
        let roles = self.store.roles_for_user(user_id).await.unwrap();
        create_access_token(&user, &roles, &self.jwt_config, self.clock.now()).unwrap()
    }

    /// A token whose claims link the user to `student_id`, whatever the store says now.
    pub async fn token_with_student_link(&self, user_id: UserId, student_id: StudentId) -> String {
        let user = self.store.find_user(user_id).await.unwrap().expect("fixture user");
        let roles = self.store.roles_for_user(user_id).await.unwrap();
        let issued_as = User {
            student_id: Some(student_id),
            ..user
        };
        create_access_token(&issued_as, &roles, &self.jwt_config, self.clock.now()).unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.post_json(
            "/api/login",
            json!({ "username": username, "password": password }),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(Value::Null)
        };
        (status, body)
    }
}
