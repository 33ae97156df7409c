use super::IMovieRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use seatwatch_domain::{Movie, ID};

pub struct InMemoryMovieRepo {
    movies: std::sync::Mutex<Vec<Movie>>,
}

impl InMemoryMovieRepo {
    pub fn new() -> Self {
        Self {
            movies: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMovieRepo for InMemoryMovieRepo {
    async fn insert(&self, movie: &Movie) -> anyhow::Result<()> {
        insert(movie, &self.movies);
        Ok(())
    }

    async fn find(&self, movie_id: &ID) -> Option<Movie> {
        find(movie_id, &self.movies)
    }

    async fn find_stale(&self, before: DateTime<Utc>) -> Vec<Movie> {
        find_by(&self.movies, |movie| movie.last_detected < before)
    }

    async fn delete(&self, movie_id: &ID) -> Option<Movie> {
        delete(movie_id, &self.movies)
    }
}
