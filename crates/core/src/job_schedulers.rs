use crate::cleanup::CleanupUseCase;
use crate::shared::usecase::execute;
use crate::sweep::RunSweepUseCase;
use seatwatch_infra::Context;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// How long to wait after a sweep finished before starting the next one.
/// Sweep durations vary wildly with the number of showtimes, so the time the
/// sweep itself took is credited against the target interval, bounded below
/// by the floor.
pub fn next_sweep_delay(min_interval: Duration, floor: Duration, elapsed: Duration) -> Duration {
    min_interval.saturating_sub(elapsed).max(floor)
}

/// Sweep loop: run, then sleep the adaptive delay, until shutdown flips.
pub fn start_sweep_job(ctx: Context, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let started = std::time::Instant::now();
            match execute(RunSweepUseCase, &ctx).await {
                Ok(summary) => info!(
                    "Sweep done: {} showtimes visited, {} skipped, {} failures, {} emails sent{}",
                    summary.showtimes_visited,
                    summary.showtimes_skipped,
                    summary.failures,
                    summary.emails_sent,
                    if summary.blocked { ", aborted on block" } else { "" }
                ),
                Err(e) => error!("Sweep failed to run: {:?}", e),
            }

            let delay = next_sweep_delay(
                ctx.config.sweep.min_interval,
                ctx.config.sweep.floor,
                started.elapsed(),
            );
            info!("Next sweep in {:?}", delay);

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown.changed() => {
                    info!("Sweep job shutting down");
                    return;
                }
            }
        }
    })
}

/// Catalog cleanup loop. The first run happens one full interval after
/// startup; stale rows can wait, sweeps cannot.
pub fn start_cleanup_job(ctx: Context, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let interval = ctx.config.cleanup.interval;
        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = shutdown.changed() => {
                    info!("Cleanup job shutting down");
                    return;
                }
            }
            if let Err(e) = execute(CleanupUseCase, &ctx).await {
                error!("Cleanup failed to run: {:?}", e);
            }
        }
    })
}
