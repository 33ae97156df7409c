use super::IShowtimeRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use seatwatch_domain::{Showtime, ID};

pub struct InMemoryShowtimeRepo {
    showtimes: std::sync::Mutex<Vec<Showtime>>,
}

impl InMemoryShowtimeRepo {
    pub fn new() -> Self {
        Self {
            showtimes: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IShowtimeRepo for InMemoryShowtimeRepo {
    async fn insert(&self, showtime: &Showtime) -> anyhow::Result<()> {
        insert(showtime, &self.showtimes);
        Ok(())
    }

    async fn find(&self, showtime_id: &ID) -> Option<Showtime> {
        find(showtime_id, &self.showtimes)
    }

    async fn find_by_movie(&self, movie_id: &ID) -> Vec<Showtime> {
        find_by(&self.showtimes, |showtime| showtime.movie_id == *movie_id)
    }

    async fn find_past(&self, now: DateTime<Utc>) -> Vec<Showtime> {
        find_by(&self.showtimes, |showtime| showtime.starts_at < now)
    }

    async fn delete(&self, showtime_id: &ID) -> Option<Showtime> {
        delete(showtime_id, &self.showtimes)
    }
}
