use super::ISeatNotificationRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use seatwatch_domain::{SeatNotification, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresSeatNotificationRepo {
    pool: PgPool,
}

impl PostgresSeatNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SeatNotificationRaw {
    notification_uid: Uuid,
    user_email: String,
    seat_number: String,
    showtime_uid: Uuid,
    last_notified: Option<DateTime<Utc>>,
    is_specifically_requested: bool,
}

impl From<SeatNotificationRaw> for SeatNotification {
    fn from(e: SeatNotificationRaw) -> Self {
        Self {
            id: e.notification_uid.into(),
            user_email: e.user_email,
            seat_number: e.seat_number,
            showtime_id: e.showtime_uid.into(),
            last_notified: e.last_notified,
            is_specifically_requested: e.is_specifically_requested,
        }
    }
}

#[async_trait::async_trait]
impl ISeatNotificationRepo for PostgresSeatNotificationRepo {
    async fn insert(&self, notification: &SeatNotification) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO seat_notifications
            (notification_uid, user_email, seat_number, showtime_uid, last_notified, is_specifically_requested)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(notification.id.inner_ref())
        .bind(&notification.user_email)
        .bind(&notification.seat_number)
        .bind(notification.showtime_id.inner_ref())
        .bind(notification.last_notified)
        .bind(notification.is_specifically_requested)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<SeatNotification>> {
        let notifications: Vec<SeatNotificationRaw> = sqlx::query_as(
            r#"
            SELECT * FROM seat_notifications
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications.into_iter().map(|n| n.into()).collect())
    }

    async fn set_last_notified(
        &self,
        notification_id: &ID,
        last_notified: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE seat_notifications
            SET last_notified = $2
            WHERE notification_uid = $1
            "#,
        )
        .bind(notification_id.inner_ref())
        .bind(last_notified)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to update seat notification: {:?}", e);
            e
        })?;
        Ok(())
    }

    async fn delete(&self, notification_id: &ID) -> Option<SeatNotification> {
        match sqlx::query_as(
            r#"
            DELETE FROM seat_notifications
            WHERE notification_uid = $1
            RETURNING *
            "#,
        )
        .bind(notification_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(notification) => {
                let notification: SeatNotificationRaw = notification;
                Some(notification.into())
            }
            Err(_) => None,
        }
    }

    async fn delete_by_showtime(&self, showtime_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM seat_notifications
            WHERE showtime_uid = $1
            "#,
        )
        .bind(showtime_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
