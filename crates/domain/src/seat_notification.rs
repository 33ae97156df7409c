use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// A watch request: one user wanting to hear about one seat on one showtime.
///
/// `is_specifically_requested` is false for rows that stand in for an
/// "any seat opens up" subscription keyed to one seat slot; the email
/// phrasing differs between the two.
#[derive(Debug, Clone)]
pub struct SeatNotification {
    pub id: ID,
    pub user_email: String,
    pub seat_number: String,
    pub showtime_id: ID,
    /// When the user was last emailed about this seat, if ever.
    pub last_notified: Option<DateTime<Utc>>,
    pub is_specifically_requested: bool,
}

impl SeatNotification {
    pub fn new(
        user_email: &str,
        seat_number: &str,
        showtime_id: &ID,
        is_specifically_requested: bool,
    ) -> Self {
        Self {
            id: Default::default(),
            user_email: user_email.to_string(),
            seat_number: seat_number.to_string(),
            showtime_id: showtime_id.clone(),
            last_notified: None,
            is_specifically_requested,
        }
    }
}

impl Entity for SeatNotification {
    fn id(&self) -> &ID {
        &self.id
    }
}
