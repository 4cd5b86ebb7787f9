//! School calendar events.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::{EventId, SchoolId};

/// An `events` row. `date` is stored without a zone and read as UTC.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: EventId,
    pub school_id: SchoolId,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
}

/// Green for upcoming events, red for past ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EventColor {
    Green,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventSummary {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub color: EventColor,
}

impl EventSummary {
    pub fn from_event(event: Event, now: DateTime<Utc>) -> Self {
        let color = if event.date >= now.naive_utc() {
            EventColor::Green
        } else {
            EventColor::Red
        };

        Self {
            title: event.title,
            description: event.description,
            date: event.date,
            color,
        }
    }
}
