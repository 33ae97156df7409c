mod inmemory;
mod postgres;

pub use inmemory::InMemoryTheaterRepo;
pub use postgres::PostgresTheaterRepo;
use seatwatch_domain::{Theater, ID};

#[async_trait::async_trait]
pub trait ITheaterRepo: Send + Sync {
    async fn insert(&self, theater: &Theater) -> anyhow::Result<()>;
    async fn find(&self, theater_id: &ID) -> Option<Theater>;
}
