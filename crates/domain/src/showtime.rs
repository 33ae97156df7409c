use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// One scheduled screening of a movie at a theater. `starts_at` is the
/// absolute instant; display strings are derived in the theater's timezone.
#[derive(Debug, Clone)]
pub struct Showtime {
    pub id: ID,
    pub movie_id: ID,
    pub theater_id: ID,
    pub starts_at: DateTime<Utc>,
    pub seating_url: String,
}

/// Theater-local display strings for a `Showtime`, e.g.
/// "Sunday, February 16, 2025" and "7:30 pm".
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedShowtime {
    pub date_string: String,
    pub time_string: String,
}

impl Showtime {
    pub fn new(movie_id: &ID, theater_id: &ID, starts_at: DateTime<Utc>, seating_url: &str) -> Self {
        Self {
            id: Default::default(),
            movie_id: movie_id.clone(),
            theater_id: theater_id.clone(),
            starts_at,
            seating_url: seating_url.to_string(),
        }
    }

    pub fn localize(&self, timezone: Tz) -> LocalizedShowtime {
        let local = self.starts_at.with_timezone(&timezone);
        LocalizedShowtime {
            date_string: local.format("%A, %B %d, %Y").to_string(),
            time_string: local.format("%-I:%M %p").to_string().to_lowercase(),
        }
    }
}

impl Entity for Showtime {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn localizes_into_theater_timezone() {
        // 2025-02-17 00:30 UTC is 2025-02-16 19:30 in New York
        let starts_at = Utc.with_ymd_and_hms(2025, 2, 17, 0, 30, 0).unwrap();
        let showtime = Showtime::new(
            &Default::default(),
            &Default::default(),
            starts_at,
            "https://example.com/seats/1",
        );

        let localized = showtime.localize(chrono_tz::America::New_York);
        assert_eq!(localized.date_string, "Sunday, February 16, 2025");
        assert_eq!(localized.time_string, "7:30 pm");
    }

    #[test]
    fn morning_times_have_no_leading_zero() {
        let starts_at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 5, 0).unwrap();
        let showtime = Showtime::new(
            &Default::default(),
            &Default::default(),
            starts_at,
            "https://example.com/seats/2",
        );

        let localized = showtime.localize(chrono_tz::UTC);
        assert_eq!(localized.time_string, "9:05 am");
    }
}
