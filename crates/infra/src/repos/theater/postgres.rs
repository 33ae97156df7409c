use super::ITheaterRepo;
use chrono_tz::Tz;
use seatwatch_domain::{Theater, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresTheaterRepo {
    pool: PgPool,
}

impl PostgresTheaterRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TheaterRaw {
    theater_uid: Uuid,
    name: String,
    timezone: String,
}

impl TryFrom<TheaterRaw> for Theater {
    type Error = anyhow::Error;

    fn try_from(e: TheaterRaw) -> anyhow::Result<Self> {
        let timezone = e
            .timezone
            .parse::<Tz>()
            .map_err(|_| anyhow::anyhow!("Theater {} has invalid timezone: {}", e.theater_uid, e.timezone))?;
        Ok(Self {
            id: e.theater_uid.into(),
            name: e.name,
            timezone,
        })
    }
}

#[async_trait::async_trait]
impl ITheaterRepo for PostgresTheaterRepo {
    async fn insert(&self, theater: &Theater) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO theaters(theater_uid, name, timezone)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(theater.id.inner_ref())
        .bind(&theater.name)
        .bind(theater.timezone.name())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, theater_id: &ID) -> Option<Theater> {
        let theater: TheaterRaw = match sqlx::query_as(
            r#"
            SELECT * FROM theaters
            WHERE theater_uid = $1
            "#,
        )
        .bind(theater_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(theater) => theater,
            Err(_) => return None,
        };
        match theater.try_into() {
            Ok(theater) => Some(theater),
            Err(e) => {
                error!("Unable to map theater row: {:?}", e);
                None
            }
        }
    }
}
