use crate::shared::usecase::UseCase;
use crate::sweep::block::is_blocked;
use crate::sweep::dispatch::notify_if_available;
use crate::sweep::seat_state::extract_seat_state;
use rand::seq::SliceRandom;
use seatwatch_domain::{SeatNotification, ShowtimeContext, SweepSummary, ID};
use seatwatch_infra::{Context, IBrowserSession};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, warn};

/// One full pass over every showtime with pending watch requests.
///
/// The sweep snapshots all watch requests up front and visits each distinct
/// showtime at most once, no matter how many requests reference it. A single
/// browser session is reused for the whole sweep and released
/// unconditionally at the end.
#[derive(Debug)]
pub struct RunSweepUseCase;

#[derive(Debug, Error)]
pub enum UseCaseErrors {
    #[error("Unable to load seat notifications: {0}")]
    Storage(String),
    #[error("Unable to open a browser session: {0}")]
    Browser(String),
}

#[async_trait::async_trait]
impl UseCase for RunSweepUseCase {
    type Response = SweepSummary;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "RunSweep";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let notifications = ctx
            .repos
            .seat_notifications
            .find_all()
            .await
            .map_err(|e| UseCaseErrors::Storage(e.to_string()))?;
        info!("Found {} watch requests to process", notifications.len());

        let mut summary = SweepSummary::default();

        let mut planned = Vec::new();
        for (showtime_id, group) in group_by_showtime(notifications) {
            match resolve_showtime_context(&showtime_id, ctx).await {
                Some(meta) => planned.push((meta, group)),
                None => {
                    warn!("Skipping showtime {}: unresolvable metadata", showtime_id);
                    summary.showtimes_skipped += 1;
                }
            }
        }

        // A different visiting order every sweep, so the request pattern
        // against the remote site is not predictable.
        planned.shuffle(&mut rand::thread_rng());

        let session = ctx
            .browser
            .open_session()
            .await
            .map_err(|e| UseCaseErrors::Browser(e.to_string()))?;
        self.visit_showtimes(session.as_ref(), &planned, &mut summary, ctx)
            .await;
        if let Err(e) = session.quit().await {
            warn!("Failed to release browser session: {:?}", e);
        }

        Ok(summary)
    }
}

impl RunSweepUseCase {
    async fn visit_showtimes(
        &self,
        session: &dyn IBrowserSession,
        planned: &[(ShowtimeContext, Vec<SeatNotification>)],
        summary: &mut SweepSummary,
        ctx: &Context,
    ) {
        for (i, (meta, group)) in planned.iter().enumerate() {
            if i > 0 {
                // Deliberate throttling between page visits, to avoid the
                // burstiness that trips anti-bot defenses.
                tokio::time::sleep(ctx.config.sweep.pacing).await;
            }

            if let Err(e) = session.navigate(&meta.seating_url).await {
                warn!(
                    "Failed to load seating page for {} at {}: {:?}",
                    meta.movie_name, meta.theater_name, e
                );
                summary.failures += 1;
                continue;
            }

            if is_blocked(session).await {
                // One block signal means the automation identity is flagged
                // right now; visiting more pages would only make it worse.
                warn!("Block page detected, aborting the remaining sweep");
                summary.blocked = true;
                break;
            }

            let state = match extract_seat_state(session, &ctx.config.sweep).await {
                Ok(state) => state,
                Err(e) => {
                    warn!(
                        "Failed to extract seats for {} at {}: {:?}",
                        meta.movie_name, meta.theater_name, e
                    );
                    summary.failures += 1;
                    continue;
                }
            };
            summary.showtimes_visited += 1;

            let available = state.available();
            for notification in group {
                if notify_if_available(notification, &available, meta, ctx).await {
                    summary.emails_sent += 1;
                }
            }
        }
    }
}

fn group_by_showtime(
    notifications: Vec<SeatNotification>,
) -> HashMap<ID, Vec<SeatNotification>> {
    let mut groups: HashMap<ID, Vec<SeatNotification>> = HashMap::new();
    for notification in notifications {
        groups
            .entry(notification.showtime_id.clone())
            .or_default()
            .push(notification);
    }
    groups
}

async fn resolve_showtime_context(showtime_id: &ID, ctx: &Context) -> Option<ShowtimeContext> {
    let showtime = ctx.repos.showtimes.find(showtime_id).await?;
    if showtime.seating_url.is_empty() {
        return None;
    }
    let movie = ctx.repos.movies.find(&showtime.movie_id).await?;
    let theater = ctx.repos.theaters.find(&showtime.theater_id).await?;
    let localized = showtime.localize(theater.timezone);

    Some(ShowtimeContext {
        showtime_id: showtime.id,
        seating_url: showtime.seating_url,
        movie_name: movie.name,
        theater_name: theater.name,
        date_string: localized.date_string,
        time_string: localized.time_string,
    })
}
