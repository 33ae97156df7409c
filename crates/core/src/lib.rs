pub mod cleanup;
pub mod job_schedulers;
pub mod mail;
pub mod shared;
pub mod sweep;
#[cfg(test)]
mod test_support;

use job_schedulers::{start_cleanup_job, start_sweep_job};
use seatwatch_infra::Context;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

/// The running application: the two background jobs plus the shutdown
/// signal that stops them.
pub struct Application {
    shutdown: watch::Sender<bool>,
    jobs: Vec<JoinHandle<()>>,
}

impl Application {
    pub fn start(ctx: Context) -> Self {
        let (shutdown, rx) = watch::channel(false);
        let jobs = vec![
            start_sweep_job(ctx.clone(), rx.clone()),
            start_cleanup_job(ctx, rx),
        ];
        Self { shutdown, jobs }
    }

    /// Signals the jobs to stop and waits for them to wind down. A sweep
    /// that is mid-visit finishes its current showtime list first.
    pub async fn stop(self) {
        if self.shutdown.send(true).is_err() {
            warn!("All jobs already stopped");
        }
        for job in self.jobs {
            if let Err(e) = job.await {
                warn!("Job did not shut down cleanly: {:?}", e);
            }
        }
    }
}
