//! Strongly-typed ID newtypes for domain entities.
//!
//! Every table keys its rows by a `SERIAL` integer. Wrapping each key in its own
//! type keeps a `StudentId` from being passed where a `UserId` is expected.
//!
//! ```ignore
//! use schoople_models::ids::{StudentId, UserId};
//!
//! fn load_profile(id: StudentId) { /* ... */ }
//!
//! load_profile(StudentId(100));   // OK
//! // load_profile(UserId(100));   // Compile error
//! ```

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgHasArrayType, PgTypeInfo},
};
use std::fmt;
use utoipa::ToSchema;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        #[schema(value_type = i32)]
        pub struct $name(pub i32);

        impl $name {
            #[inline]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            #[inline]
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            #[inline]
            fn from(id: $name) -> i32 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i32>().map(Self)
            }
        }

        impl Type<sqlx::Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <i32 as Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <i32 as Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <i32 as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <i32 as Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }

        impl PgHasArrayType for $name {
            fn array_type_info() -> PgTypeInfo {
                <i32 as PgHasArrayType>::array_type_info()
            }
        }
    };
}

define_id!(
    /// Key of a `schools` row.
    SchoolId
);

define_id!(
    /// Key of an `academic_years` row.
    AcademicYearId
);

define_id!(GradeId);

define_id!(SectionId);

define_id!(
    /// Key of a `schools_grades_sections` row: the unit timetables and rosters attach to.
    GradeSectionId
);

define_id!(StudentId);

define_id!(
    /// Key of a `school_student` enrollment row.
    EnrollmentId
);

define_id!(UserId);

define_id!(RoleId);

define_id!(UserRoleId);

define_id!(StaffId);

define_id!(SubjectId);

define_id!(HouseId);

define_id!(TransportId);

define_id!(TimeTableId);

define_id!(TimeTableDetailId);

define_id!(AttendanceId);

define_id!(EventId);
