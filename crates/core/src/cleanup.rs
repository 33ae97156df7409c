use crate::shared::usecase::UseCase;
use seatwatch_domain::Showtime;
use seatwatch_infra::Context;
use thiserror::Error;
use tracing::{info, warn};

/// Purges catalog entries nobody can watch anymore: movies that have not
/// been detected on the theater site for the retention window, and showtimes
/// whose start has passed. Watch requests hanging off a removed showtime go
/// with it.
#[derive(Debug)]
pub struct CleanupUseCase;

#[derive(Debug, Default, PartialEq)]
pub struct CleanupSummary {
    pub movies_deleted: usize,
    pub showtimes_deleted: usize,
    pub notifications_deleted: i64,
}

#[derive(Debug, Error)]
pub enum UseCaseErrors {
    #[error("Cleanup storage failure: {0}")]
    Storage(String),
}

#[async_trait::async_trait]
impl UseCase for CleanupUseCase {
    type Response = CleanupSummary;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "Cleanup";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.now();
        let mut summary = CleanupSummary::default();

        let stale_movies = ctx
            .repos
            .movies
            .find_stale(now - ctx.config.cleanup.movie_retention)
            .await;
        for movie in stale_movies {
            info!("Removing stale movie: {}", movie.name);
            let showtimes = ctx.repos.showtimes.find_by_movie(&movie.id).await;
            for showtime in showtimes {
                delete_showtime(&showtime, &mut summary, ctx).await?;
            }
            if ctx.repos.movies.delete(&movie.id).await.is_some() {
                summary.movies_deleted += 1;
            } else {
                warn!("Movie {} was already removed", movie.id);
            }
        }

        for showtime in ctx.repos.showtimes.find_past(now).await {
            delete_showtime(&showtime, &mut summary, ctx).await?;
        }

        info!(
            "Cleanup removed {} movies, {} showtimes and {} watch requests",
            summary.movies_deleted, summary.showtimes_deleted, summary.notifications_deleted
        );
        Ok(summary)
    }
}

async fn delete_showtime(
    showtime: &Showtime,
    summary: &mut CleanupSummary,
    ctx: &Context,
) -> Result<(), UseCaseErrors> {
    let deleted = ctx
        .repos
        .seat_notifications
        .delete_by_showtime(&showtime.id)
        .await
        .map_err(|e| UseCaseErrors::Storage(e.to_string()))?;
    summary.notifications_deleted += deleted.deleted_count;

    if ctx.repos.showtimes.delete(&showtime.id).await.is_some() {
        summary.showtimes_deleted += 1;
    } else {
        warn!("Showtime {} was already removed", showtime.id);
    }
    Ok(())
}
