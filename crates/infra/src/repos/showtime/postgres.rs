use super::IShowtimeRepo;
use chrono::{DateTime, Utc};
use seatwatch_domain::{Showtime, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresShowtimeRepo {
    pool: PgPool,
}

impl PostgresShowtimeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ShowtimeRaw {
    showtime_uid: Uuid,
    movie_uid: Uuid,
    theater_uid: Uuid,
    starts_at: DateTime<Utc>,
    seating_url: String,
}

impl From<ShowtimeRaw> for Showtime {
    fn from(e: ShowtimeRaw) -> Self {
        Self {
            id: e.showtime_uid.into(),
            movie_id: e.movie_uid.into(),
            theater_id: e.theater_uid.into(),
            starts_at: e.starts_at,
            seating_url: e.seating_url,
        }
    }
}

#[async_trait::async_trait]
impl IShowtimeRepo for PostgresShowtimeRepo {
    async fn insert(&self, showtime: &Showtime) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO showtimes(showtime_uid, movie_uid, theater_uid, starts_at, seating_url)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(showtime.id.inner_ref())
        .bind(showtime.movie_id.inner_ref())
        .bind(showtime.theater_id.inner_ref())
        .bind(showtime.starts_at)
        .bind(&showtime.seating_url)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, showtime_id: &ID) -> Option<Showtime> {
        let showtime: ShowtimeRaw = match sqlx::query_as(
            r#"
            SELECT * FROM showtimes
            WHERE showtime_uid = $1
            "#,
        )
        .bind(showtime_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(showtime) => showtime,
            Err(_) => return None,
        };
        Some(showtime.into())
    }

    async fn find_by_movie(&self, movie_id: &ID) -> Vec<Showtime> {
        sqlx::query_as(
            r#"
            SELECT * FROM showtimes
            WHERE movie_uid = $1
            "#,
        )
        .bind(movie_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|showtime: ShowtimeRaw| showtime.into())
        .collect()
    }

    async fn find_past(&self, now: DateTime<Utc>) -> Vec<Showtime> {
        sqlx::query_as(
            r#"
            SELECT * FROM showtimes
            WHERE starts_at < $1
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|showtime: ShowtimeRaw| showtime.into())
        .collect()
    }

    async fn delete(&self, showtime_id: &ID) -> Option<Showtime> {
        match sqlx::query_as(
            r#"
            DELETE FROM showtimes
            WHERE showtime_uid = $1
            RETURNING *
            "#,
        )
        .bind(showtime_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(showtime) => {
                let showtime: ShowtimeRaw = showtime;
                Some(showtime.into())
            }
            Err(_) => None,
        }
    }
}
