use super::IMovieRepo;
use chrono::{DateTime, Utc};
use seatwatch_domain::{Movie, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresMovieRepo {
    pool: PgPool,
}

impl PostgresMovieRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MovieRaw {
    movie_uid: Uuid,
    name: String,
    last_detected: DateTime<Utc>,
}

impl From<MovieRaw> for Movie {
    fn from(e: MovieRaw) -> Self {
        Self {
            id: e.movie_uid.into(),
            name: e.name,
            last_detected: e.last_detected,
        }
    }
}

#[async_trait::async_trait]
impl IMovieRepo for PostgresMovieRepo {
    async fn insert(&self, movie: &Movie) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO movies(movie_uid, name, last_detected)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(movie.id.inner_ref())
        .bind(&movie.name)
        .bind(movie.last_detected)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, movie_id: &ID) -> Option<Movie> {
        let movie: MovieRaw = match sqlx::query_as(
            r#"
            SELECT * FROM movies
            WHERE movie_uid = $1
            "#,
        )
        .bind(movie_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(movie) => movie,
            Err(_) => return None,
        };
        Some(movie.into())
    }

    async fn find_stale(&self, before: DateTime<Utc>) -> Vec<Movie> {
        sqlx::query_as(
            r#"
            SELECT * FROM movies
            WHERE last_detected < $1
            "#,
        )
        .bind(before)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|movie: MovieRaw| movie.into())
        .collect()
    }

    async fn delete(&self, movie_id: &ID) -> Option<Movie> {
        match sqlx::query_as(
            r#"
            DELETE FROM movies
            WHERE movie_uid = $1
            RETURNING *
            "#,
        )
        .bind(movie_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(movie) => {
                let movie: MovieRaw = movie;
                Some(movie.into())
            }
            Err(_) => None,
        }
    }
}
