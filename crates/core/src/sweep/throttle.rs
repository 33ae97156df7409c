use chrono::{DateTime, Duration, Utc};

/// Whether a watch request may be notified, and whether the email should be
/// phrased as a first alert or a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleDecision {
    pub notify: bool,
    pub first_time: bool,
}

/// Pure function of elapsed time since the last notification. Seat state is
/// deliberately not an input here, so the re-notification policy stays
/// independent of availability detection.
pub fn should_notify(
    last_notified: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    cooldown: Duration,
) -> ThrottleDecision {
    match last_notified {
        None => ThrottleDecision {
            notify: true,
            first_time: true,
        },
        Some(last_notified) => ThrottleDecision {
            notify: now - last_notified > cooldown,
            first_time: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn cooldown() -> Duration {
        Duration::hours(6)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn never_notified_is_first_time() {
        assert_eq!(
            should_notify(None, now(), cooldown()),
            ThrottleDecision {
                notify: true,
                first_time: true
            }
        );
    }

    #[test]
    fn recent_notification_is_suppressed() {
        let last = now() - Duration::hours(5);
        assert_eq!(
            should_notify(Some(last), now(), cooldown()),
            ThrottleDecision {
                notify: false,
                first_time: false
            }
        );
    }

    #[test]
    fn stale_notification_becomes_reminder() {
        let last = now() - Duration::hours(7);
        assert_eq!(
            should_notify(Some(last), now(), cooldown()),
            ThrottleDecision {
                notify: true,
                first_time: false
            }
        );
    }

    #[test]
    fn exactly_at_cooldown_is_still_suppressed() {
        let last = now() - cooldown();
        assert!(!should_notify(Some(last), now(), cooldown()).notify);
    }
}
