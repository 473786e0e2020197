use serde::{Deserialize, Serialize};

/// A single meeting-room booking, stored as-is in the reservations collection.
///
/// Every field defaults to an empty string when absent from the payload.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Reservation {
    pub room: String,
    pub time: String,
    pub reserved_by: String,
    pub company: String,
}

impl Reservation {
    pub fn new(
        room: impl Into<String>,
        time: impl Into<String>,
        reserved_by: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            room: room.into(),
            time: time.into(),
            reserved_by: reserved_by.into(),
            company: company.into(),
        }
    }
}
