use super::ISeatNotificationRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use chrono::{DateTime, Utc};
use seatwatch_domain::{SeatNotification, ID};

pub struct InMemorySeatNotificationRepo {
    notifications: std::sync::Mutex<Vec<SeatNotification>>,
}

impl InMemorySeatNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISeatNotificationRepo for InMemorySeatNotificationRepo {
    async fn insert(&self, notification: &SeatNotification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<SeatNotification>> {
        Ok(all(&self.notifications))
    }

    async fn set_last_notified(
        &self,
        notification_id: &ID,
        last_notified: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        if let Some(mut notification) = find(notification_id, &self.notifications) {
            notification.last_notified = Some(last_notified);
            save(&notification, &self.notifications);
        }
        Ok(())
    }

    async fn delete(&self, notification_id: &ID) -> Option<SeatNotification> {
        delete(notification_id, &self.notifications)
    }

    async fn delete_by_showtime(&self, showtime_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = delete_by(&self.notifications, |notification| {
            notification.showtime_id == *showtime_id
        });
        Ok(res)
    }
}
