pub mod attendances;
pub mod auth;
pub mod events;
pub mod students;
pub mod timetables;
pub mod transports;
pub mod users;
