use crate::shared::entity::ID;

/// Display metadata for one showtime, resolved once per sweep and passed by
/// value to dispatch so timezone conversions are not re-derived per watch
/// request.
#[derive(Debug, Clone)]
pub struct ShowtimeContext {
    pub showtime_id: ID,
    pub seating_url: String,
    pub movie_name: String,
    pub theater_name: String,
    pub date_string: String,
    pub time_string: String,
}

/// Outcome of one full sweep. Transient, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepSummary {
    /// Showtimes whose seating page was loaded and extracted.
    pub showtimes_visited: usize,
    /// Showtime groups skipped because their metadata could not be resolved.
    pub showtimes_skipped: usize,
    /// Per-showtime navigation or extraction failures.
    pub failures: usize,
    pub emails_sent: usize,
    /// True when a block page aborted the remaining sweep.
    pub blocked: bool,
}
