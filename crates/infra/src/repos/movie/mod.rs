mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryMovieRepo;
pub use postgres::PostgresMovieRepo;
use seatwatch_domain::{Movie, ID};

#[async_trait::async_trait]
pub trait IMovieRepo: Send + Sync {
    async fn insert(&self, movie: &Movie) -> anyhow::Result<()>;
    async fn find(&self, movie_id: &ID) -> Option<Movie>;
    /// Movies whose `last_detected` is older than `before`, candidates for
    /// retention cleanup.
    async fn find_stale(&self, before: DateTime<Utc>) -> Vec<Movie>;
    async fn delete(&self, movie_id: &ID) -> Option<Movie>;
}
