use crate::mail::render_notification;
use crate::sweep::throttle::should_notify;
use seatwatch_domain::{SeatNotification, ShowtimeContext};
use seatwatch_infra::Context;
use std::collections::HashSet;
use tracing::{debug, error, info};

/// Send the notification email for one watch request if its seat is
/// available and the throttle allows it. Returns whether an email was sent.
///
/// `last_notified` is persisted only after a confirmed successful send, so a
/// transient mail failure never silently suppresses the retry on the next
/// sweep.
pub async fn notify_if_available(
    notification: &SeatNotification,
    available: &HashSet<String>,
    meta: &ShowtimeContext,
    ctx: &Context,
) -> bool {
    if !available.contains(&notification.seat_number) {
        return false;
    }

    let decision = should_notify(
        notification.last_notified,
        ctx.sys.now(),
        ctx.config.sweep.cooldown,
    );
    if !decision.notify {
        debug!(
            "Seat {} for {} is available but {} was notified recently",
            notification.seat_number, meta.movie_name, notification.user_email
        );
        return false;
    }

    let email = render_notification(
        notification,
        meta,
        decision.first_time,
        &ctx.config.unsubscribe_base_url,
    );
    if let Err(e) = ctx.mailer.send(&email).await {
        error!("Failed to send email to {}: {:?}", notification.user_email, e);
        return false;
    }
    info!(
        "Notified {} about seat {} for {}",
        notification.user_email, notification.seat_number, meta.movie_name
    );

    if let Err(e) = ctx
        .repos
        .seat_notifications
        .set_last_notified(&notification.id, ctx.sys.now())
        .await
    {
        // The email is out; the worst case is one extra reminder next sweep.
        error!(
            "Email sent but failed to persist last_notified for {}: {:?}",
            notification.id, e
        );
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{setup, TestApp};
    use chrono::{TimeZone, Utc};
    use seatwatch_domain::{ShowtimeContext, ID};

    fn meta() -> ShowtimeContext {
        ShowtimeContext {
            showtime_id: ID::new(),
            seating_url: "https://example.com/seats/1".to_string(),
            movie_name: "The Movie".to_string(),
            theater_name: "Empire 25".to_string(),
            date_string: "Sunday, February 16, 2025".to_string(),
            time_string: "7:30 pm".to_string(),
        }
    }

    fn available(labels: &[&str]) -> HashSet<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    async fn insert_watch(app: &TestApp, seat: &str) -> SeatNotification {
        let notification = SeatNotification::new("user@example.com", seat, &ID::new(), true);
        app.ctx
            .repos
            .seat_notifications
            .insert(&notification)
            .await
            .unwrap();
        notification
    }

    #[tokio::test]
    async fn occupied_seat_never_dispatches() {
        let app = setup(Utc.with_ymd_and_hms(2025, 2, 16, 12, 0, 0).unwrap());
        let notification = insert_watch(&app, "A1").await;

        let sent = notify_if_available(&notification, &available(&["A2", "B1"]), &meta(), &app.ctx).await;

        assert!(!sent);
        assert!(app.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn available_seat_dispatches_and_persists_timestamp() {
        let now = Utc.with_ymd_and_hms(2025, 2, 16, 12, 0, 0).unwrap();
        let app = setup(now);
        let notification = insert_watch(&app, "A2").await;

        let sent = notify_if_available(&notification, &available(&["A2", "B1"]), &meta(), &app.ctx).await;

        assert!(sent);
        assert_eq!(app.mailer.sent().len(), 1);
        let stored = app.ctx.repos.seat_notifications.find_all().await.unwrap();
        assert_eq!(stored[0].last_notified, Some(now));
    }

    #[tokio::test]
    async fn failed_send_leaves_last_notified_untouched() {
        let app = setup(Utc.with_ymd_and_hms(2025, 2, 16, 12, 0, 0).unwrap());
        let notification = insert_watch(&app, "A2").await;
        app.mailer.set_failing(true);

        let sent = notify_if_available(&notification, &available(&["A2"]), &meta(), &app.ctx).await;

        assert!(!sent);
        let stored = app.ctx.repos.seat_notifications.find_all().await.unwrap();
        assert_eq!(stored[0].last_notified, None);
    }

    #[tokio::test]
    async fn suppressed_by_cooldown() {
        let now = Utc.with_ymd_and_hms(2025, 2, 16, 12, 0, 0).unwrap();
        let app = setup(now);
        let mut notification = insert_watch(&app, "A2").await;
        notification.last_notified = Some(now - chrono::Duration::hours(1));

        let sent = notify_if_available(&notification, &available(&["A2"]), &meta(), &app.ctx).await;

        assert!(!sent);
        assert!(app.mailer.sent().is_empty());
    }
}
