mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
pub use inmemory::InMemorySeatNotificationRepo;
pub use postgres::PostgresSeatNotificationRepo;
use seatwatch_domain::{SeatNotification, ID};

#[async_trait::async_trait]
pub trait ISeatNotificationRepo: Send + Sync {
    async fn insert(&self, notification: &SeatNotification) -> anyhow::Result<()>;
    /// Snapshot of every watch request, taken once at sweep start.
    async fn find_all(&self) -> anyhow::Result<Vec<SeatNotification>>;
    async fn set_last_notified(
        &self,
        notification_id: &ID,
        last_notified: DateTime<Utc>,
    ) -> anyhow::Result<()>;
    async fn delete(&self, notification_id: &ID) -> Option<SeatNotification>;
    async fn delete_by_showtime(&self, showtime_id: &ID) -> anyhow::Result<DeleteResult>;
}
