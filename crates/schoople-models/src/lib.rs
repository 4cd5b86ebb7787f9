//! # Schoople Models
//!
//! Entities, typed ids and request/response DTOs for the Schoople API.
//!
//! Entities derive [`sqlx::FromRow`] and mirror the tables created by the
//! migration. Response DTOs derive [`utoipa::ToSchema`] and are what handlers
//! serialize.
//!
//! # Modules
//!
//! - [`ids`]: Typed integer ids
//! - [`schools`]: Schools, academic years, grades, sections
//! - [`students`]: Students, enrollments, the profile projection
//! - [`users`]: Accounts, roles, role assignments
//! - [`auth`]: Login DTOs
//! - [`staff`]: Staff and subjects
//! - [`timetables`], [`attendances`], [`transports`], [`events`]: Listings
//!
//! # Example
//!
//! ```ignore
//! use schoople_models::students::StudentProfile;
//! use schoople_models::timetables::{TimetableEntry, TimetableEntryRow};
//!
//! let entries: Vec<TimetableEntry> = rows.into_iter().map(Into::into).collect();
//! ```

pub mod attendances;
pub mod auth;
pub mod events;
pub mod ids;
pub mod schools;
pub mod staff;
pub mod students;
pub mod timetables;
pub mod transports;
pub mod users;

pub use attendances::{Attendance, AttendanceRecord};
pub use auth::{LoginRequest, LoginResponse};
pub use events::{Event, EventColor, EventSummary};
pub use schools::{AcademicYear, Grade, GradeSection, School, Section};
pub use staff::{Staff, Subject};
pub use students::{Enrollment, EnrollmentPlacement, Student, StudentDataResponse, StudentProfile};
pub use timetables::{
    NOT_AVAILABLE, TimeTable, TimeTableDetail, TimetableEntry, TimetableEntryRow, TimetableQuery,
};
pub use transports::{Transport, TransportRouteRow, TransportSummary};
pub use users::{
    Role, RoleAssignment, RoleSummary, RoleType, User, UserRole, UserRolesResponse,
    UserTokenResponse,
};
