//! School transport routes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::{SchoolId, StaffId, TransportId};
use crate::timetables::NOT_AVAILABLE;

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Transport {
    pub id: TransportId,
    pub school_id: SchoolId,
    pub driver_id: StaffId,
    pub driver_code: String,
    pub vehicle_number: String,
    pub route_number: String,
    pub route_name: String,
    pub vehicle_gps_device_id: Option<String>,
    pub vehicle_tracking_url: Option<String>,
    pub in_charge_id: StaffId,
}

/// A transport joined with its driver and in-charge staff names.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct TransportRouteRow {
    pub id: TransportId,
    pub driver_code: String,
    pub vehicle_number: String,
    pub route_number: String,
    pub route_name: String,
    pub vehicle_gps_device_id: Option<String>,
    pub vehicle_tracking_url: Option<String>,
    pub driver_first_name: Option<String>,
    pub driver_last_name: Option<String>,
    pub in_charge_first_name: Option<String>,
    pub in_charge_last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TransportSummary {
    pub driver_name: String,
    pub driver_code: String,
    pub vehicle_number: String,
    pub route_number: String,
    pub route_name: String,
    pub vehicle_gps_device_id: Option<String>,
    pub vehicle_tracking_url: Option<String>,
    pub in_charge_name: String,
}

fn display_name(first: Option<String>, last: Option<String>) -> String {
    match (first, last) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

impl From<TransportRouteRow> for TransportSummary {
    fn from(row: TransportRouteRow) -> Self {
        Self {
            driver_name: display_name(row.driver_first_name, row.driver_last_name),
            driver_code: row.driver_code,
            vehicle_number: row.vehicle_number,
            route_number: row.route_number,
            route_name: row.route_name,
            vehicle_gps_device_id: row.vehicle_gps_device_id,
            vehicle_tracking_url: row.vehicle_tracking_url,
            in_charge_name: display_name(row.in_charge_first_name, row.in_charge_last_name),
        }
    }
}
