//! Staff members and the subjects they teach.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::ids::{SchoolId, StaffId, SubjectId};

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Staff {
    pub id: StaffId,
    pub school_id: SchoolId,
    pub staff_type_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub qualification: Option<String>,
    pub is_section_in_charge: bool,
    pub is_transport_in_charge: bool,
    pub joining_date: Option<NaiveDate>,
    pub status: bool,
}

impl Staff {
    /// "First Last", the form every listing displays.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Subject {
    pub id: SubjectId,
    pub school_id: SchoolId,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_skips_middle_name() {
        let staff = Staff {
            first_name: "Edna".to_string(),
            middle_name: Some("K".to_string()),
            last_name: "Krabappel".to_string(),
            ..Default::default()
        };
        assert_eq!(staff.full_name(), "Edna Krabappel");
    }
}
