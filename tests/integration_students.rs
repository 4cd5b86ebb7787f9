mod common;

use axum::http::StatusCode;
use common::{
    ADMIN_USER, ALICE, BOB, INACTIVE, TEACHER, TestApp, school_store,
    school_store_without_active_year,
};
use schoople_models::ids::{AcademicYearId, EnrollmentId, GradeSectionId, SchoolId, StudentId};
use schoople_models::schools::{AcademicYear, GradeSection};
use schoople_models::students::Enrollment;

#[tokio::test]
async fn test_student_reads_own_profile() {
    let app = TestApp::new();
    let token = app.token_for(ALICE).await;

    let (status, body) = app.get("/api/student-data/100", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let profile = &body["student_data"];
    assert_eq!(profile["student_id"], 100);
    assert_eq!(profile["first_name"], "A");
    assert_eq!(profile["school_grade_section_id"], 9);
    assert_eq!(profile["active_academic_year_id"], 5);
}

#[tokio::test]
async fn test_student_cannot_read_other_profile() {
    let app = TestApp::new();
    let token = app.token_for(BOB).await;

    let (status, body) = app.get("/api/student-data/100", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You are not allowed to access this student's data");
}

#[tokio::test]
async fn test_staff_cannot_read_student_profile() {
    let app = TestApp::new();
    let token = app.token_for(TEACHER).await;

    let (status, _) = app.get("/api/student-data/100", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_deactivated_account_loses_access_before_token_expiry() {
    let app = TestApp::new();
    // "dormant" is linked to student 100 but inactive.
    let token = app.token_for(INACTIVE).await;

    let (status, body) = app.get("/api/student-data/100", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, _) = app.get("/api/attendances/100", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ownership_follows_current_student_link() {
    let app = TestApp::new();
    // Bob's token still claims student 100, but his account now points at 101.
    let token = app.token_with_student_link(BOB, StudentId(100)).await;

    let (status, _) = app.get("/api/student-data/100", Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.get("/api/attendances/100", Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.get("/api/student-data/101", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student_data"]["student_id"], 101);
}

#[tokio::test]
async fn test_admin_reads_any_profile() {
    let app = TestApp::new();
    let token = app.token_for(ADMIN_USER).await;

    let (status, body) = app.get("/api/student-data/101", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student_data"]["student_id"], 101);
    // No enrollment in the active year.
    assert!(body["student_data"]["school_grade_section_id"].is_null());
    assert!(body["student_data"]["grade"].is_null());
}

#[tokio::test]
async fn test_unknown_student_not_found() {
    let app = TestApp::new();
    let token = app.token_for(ADMIN_USER).await;

    let (status, body) = app.get("/api/student-data/555", Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn test_non_numeric_id_bad_request() {
    let app = TestApp::new();
    let token = app.token_for(ADMIN_USER).await;

    let (status, _) = app.get("/api/student-data/abc", Some(&token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_no_active_academic_year_conflict() {
    let app = TestApp::with_store(school_store_without_active_year());
    let token = app.token_for(ALICE).await;

    let (status, body) = app.get("/api/student-data/100", Some(&token)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "No active academic year");
}

#[tokio::test]
async fn test_two_active_academic_years_conflict() {
    let store = school_store().with_academic_year(AcademicYear {
        id: AcademicYearId(6),
        active: true,
        ..Default::default()
    });
    let app = TestApp::with_store(store);
    let token = app.token_for(ALICE).await;

    let (status, body) = app.get("/api/student-data/100", Some(&token)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Multiple active academic years found");
}

#[tokio::test]
async fn test_enrollment_in_foreign_grade_section_conflict() {
    let store = school_store()
        .with_grade_section(GradeSection {
            id: GradeSectionId(90),
            school_id: SchoolId(2),
            academic_year_id: AcademicYearId(5),
            ..Default::default()
        })
        .with_enrollment(Enrollment {
            id: EnrollmentId(2),
            student_id: StudentId(100),
            school_grade_section_id: Some(GradeSectionId(90)),
            academic_year_id: AcademicYearId(5),
            status: true,
            ..Default::default()
        });
    let app = TestApp::with_store(store);
    let token = app.token_for(ALICE).await;

    let (status, _) = app.get("/api/student-data/100", Some(&token)).await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_latest_active_enrollment_wins() {
    let store = school_store()
        .with_grade_section(GradeSection {
            id: GradeSectionId(10),
            school_id: SchoolId(1),
            academic_year_id: AcademicYearId(5),
            ..Default::default()
        })
        .with_enrollment(Enrollment {
            id: EnrollmentId(3),
            student_id: StudentId(100),
            school_grade_section_id: Some(GradeSectionId(10)),
            academic_year_id: AcademicYearId(5),
            status: true,
            ..Default::default()
        })
        .with_enrollment(Enrollment {
            id: EnrollmentId(4),
            student_id: StudentId(100),
            school_grade_section_id: Some(GradeSectionId(9)),
            academic_year_id: AcademicYearId(5),
            status: false,
            ..Default::default()
        });
    let app = TestApp::with_store(store);
    let token = app.token_for(ALICE).await;

    let (status, body) = app.get("/api/student-data/100", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student_data"]["school_grade_section_id"], 10);
}
