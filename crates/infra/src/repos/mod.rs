mod movie;
mod seat_notification;
mod shared;
mod showtime;
mod theater;

use movie::{IMovieRepo, InMemoryMovieRepo, PostgresMovieRepo};
use seat_notification::{
    ISeatNotificationRepo, InMemorySeatNotificationRepo, PostgresSeatNotificationRepo,
};
use showtime::{IShowtimeRepo, InMemoryShowtimeRepo, PostgresShowtimeRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use theater::{ITheaterRepo, InMemoryTheaterRepo, PostgresTheaterRepo};
use tracing::info;

pub use shared::repo::DeleteResult;

#[derive(Clone)]
pub struct Repos {
    pub seat_notifications: Arc<dyn ISeatNotificationRepo>,
    pub showtimes: Arc<dyn IShowtimeRepo>,
    pub theaters: Arc<dyn ITheaterRepo>,
    pub movies: Arc<dyn IMovieRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            seat_notifications: Arc::new(PostgresSeatNotificationRepo::new(pool.clone())),
            showtimes: Arc::new(PostgresShowtimeRepo::new(pool.clone())),
            theaters: Arc::new(PostgresTheaterRepo::new(pool.clone())),
            movies: Arc::new(PostgresMovieRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            seat_notifications: Arc::new(InMemorySeatNotificationRepo::new()),
            showtimes: Arc::new(InMemoryShowtimeRepo::new()),
            theaters: Arc::new(InMemoryTheaterRepo::new()),
            movies: Arc::new(InMemoryMovieRepo::new()),
        }
    }
}
