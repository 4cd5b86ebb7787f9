use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use schoople_models::attendances::AttendanceRecord;
use schoople_models::auth::{LoginRequest, LoginResponse};
use schoople_models::events::{EventColor, EventSummary};
use schoople_models::students::{StudentDataResponse, StudentProfile};
use schoople_models::timetables::TimetableEntry;
use schoople_models::transports::TransportSummary;
use schoople_models::users::{
    RoleAssignment, RoleSummary, RoleType, UserRolesResponse, UserTokenResponse,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health_check,
        crate::modules::auth::controller::login_user,
        crate::modules::students::controller::get_student_data,
        crate::modules::timetables::controller::get_timetable_details,
        crate::modules::attendances::controller::get_attendances,
        crate::modules::transports::controller::get_transports,
        crate::modules::events::controller::get_events,
        crate::modules::users::controller::get_user_by_id,
        crate::modules::users::controller::get_user_data,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            StudentProfile,
            StudentDataResponse,
            TimetableEntry,
            AttendanceRecord,
            TransportSummary,
            EventSummary,
            EventColor,
            RoleType,
            RoleSummary,
            RoleAssignment,
            UserRolesResponse,
            UserTokenResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Students", description = "Student profile"),
        (name = "Timetables", description = "Class timetables"),
        (name = "Attendance", description = "Student attendance"),
        (name = "Transports", description = "School transport routes"),
        (name = "Events", description = "School calendar"),
        (name = "Users", description = "Accounts and roles")
    ),
    info(
        title = "Schoople API",
        version = "0.1.0",
        description = "Read API over a school's students, timetables, attendance, transport and events.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
