mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryShowtimeRepo;
pub use postgres::PostgresShowtimeRepo;
use seatwatch_domain::{Showtime, ID};

#[async_trait::async_trait]
pub trait IShowtimeRepo: Send + Sync {
    async fn insert(&self, showtime: &Showtime) -> anyhow::Result<()>;
    async fn find(&self, showtime_id: &ID) -> Option<Showtime>;
    async fn find_by_movie(&self, movie_id: &ID) -> Vec<Showtime>;
    /// Showtimes whose showing instant has already passed.
    async fn find_past(&self, now: DateTime<Utc>) -> Vec<Showtime>;
    async fn delete(&self, showtime_id: &ID) -> Option<Showtime>;
}
