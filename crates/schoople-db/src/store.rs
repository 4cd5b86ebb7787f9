use sqlx::PgPool;

#[cfg(feature = "memory")]
use std::sync::Arc;

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

#[cfg(feature = "memory")]
use crate::memory::MemoryStore;
use crate::postgres;

/// Read handle over the school database. Cheap to clone.
#[derive(Clone, Debug)]
pub enum Store {
    Postgres(PgPool),
    #[cfg(feature = "memory")]
    Memory(Arc<MemoryStore>),
}

impl From<PgPool> for Store {
    fn from(pool: PgPool) -> Self {
        Store::Postgres(pool)
    }
}

#[cfg(feature = "memory")]
impl From<MemoryStore> for Store {
    fn from(store: MemoryStore) -> Self {
        Store::Memory(Arc::new(store))
    }
}

impl Store {
    /// Round trip to the backend.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::ping(pool).await,
            #[cfg(feature = "memory")]
            Store::Memory(_) => Ok(()),
        }
    }

    /// Active account with this username.
    pub async fn find_login_user(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::find_login_user(pool, username).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.find_login_user(username)),
        }
    }

    pub async fn find_user(&self, id: UserId) -> Result<Option<User>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::find_user(pool, id).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.find_user(id)),
        }
    }

    pub async fn find_student(&self, id: StudentId) -> Result<Option<Student>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::find_student(pool, id).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.find_student(id)),
        }
    }

    pub async fn find_school(&self, id: SchoolId) -> Result<Option<School>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::find_school(pool, id).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.find_school(id)),
        }
    }

    /// Every academic year flagged active. Callers decide what anything but one row means.
    pub async fn active_academic_years(&self) -> Result<Vec<AcademicYear>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::active_academic_years(pool).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.active_academic_years()),
        }
    }

    /// The student's active enrollment in `academic_year_id` that names a
    /// grade-section. The highest id wins when several qualify.
    pub async fn find_enrollment(
        &self,
        student_id: StudentId,
        academic_year_id: AcademicYearId,
    ) -> Result<Option<EnrollmentPlacement>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => {
                postgres::find_enrollment(pool, student_id, academic_year_id).await
            }
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.find_enrollment(student_id, academic_year_id)),
        }
    }

    /// Roles assigned to the user, ordered by role id.
    pub async fn roles_for_user(&self, user_id: UserId) -> Result<Vec<Role>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::roles_for_user(pool, user_id).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.roles_for_user(user_id)),
        }
    }

    /// Raw `user_roles` rows of the user, ordered by id.
    pub async fn role_assignments(&self, user_id: UserId) -> Result<Vec<UserRole>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::role_assignments(pool, user_id).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.role_assignments(user_id)),
        }
    }

    pub async fn find_timetable(
        &self,
        school_id: SchoolId,
        academic_year_id: AcademicYearId,
        grade_section_id: GradeSectionId,
    ) -> Result<Option<TimeTable>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => {
                postgres::find_timetable(pool, school_id, academic_year_id, grade_section_id).await
            }
            #[cfg(feature = "memory")]
            Store::Memory(mem) => {
                Ok(mem.find_timetable(school_id, academic_year_id, grade_section_id))
            }
        }
    }

    /// Detail rows ordered by `order_number` (missing last), then id.
    pub async fn timetable_entries(
        &self,
        time_table_id: TimeTableId,
    ) -> Result<Vec<TimetableEntryRow>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::timetable_entries(pool, time_table_id).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.timetable_entries(time_table_id)),
        }
    }

    /// Ordered by date, then id.
    pub async fn attendances_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<Attendance>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::attendances_for_student(pool, student_id).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.attendances_for_student(student_id)),
        }
    }

    /// Ordered by route number, then id.
    pub async fn transports_for_school(
        &self,
        school_id: SchoolId,
    ) -> Result<Vec<TransportRouteRow>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::transports_for_school(pool, school_id).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.transports_for_school(school_id)),
        }
    }

    /// Newest first.
    pub async fn events_for_school(&self, school_id: SchoolId) -> Result<Vec<Event>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::events_for_school(pool, school_id).await,
            #[cfg(feature = "memory")]
            Store::Memory(mem) => Ok(mem.events_for_school(school_id)),
        }
    }
}
