use std::time::Duration;
use tracing::warn;

/// Application configuration, read from environment variables with sensible
/// fallbacks. Every timing knob of the sweep engine lives here so nothing is
/// hard-coded at the call sites.
#[derive(Debug, Clone)]
pub struct Config {
    /// WebDriver endpoint the browser sessions connect to
    pub webdriver_url: String,
    /// Base URL of the external unsubscribe service embedded in emails
    pub unsubscribe_base_url: String,
    pub smtp: SmtpConfig,
    pub sweep: SweepConfig,
    pub cleanup: CleanupConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// From address on outgoing notification emails
    pub sender: String,
}

#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Target spacing between sweep starts. The observed sweep duration is
    /// subtracted from this before scheduling the next run.
    pub min_interval: Duration,
    /// Sweeps are never scheduled closer together than this floor.
    pub floor: Duration,
    /// Delay before every page visit except the first in a sweep.
    pub pacing: Duration,
    /// Minimum elapsed time between two notification emails for the same
    /// watch request.
    pub cooldown: chrono::Duration,
    /// Bounded wait for the seat grid to appear after navigation.
    pub grid_timeout: Duration,
    /// Bounded wait for the cookie/consent overlay. The overlay being absent
    /// is the common case, so this is short.
    pub overlay_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// Spacing between catalog cleanup runs.
    pub interval: Duration,
    /// Movies not detected for this long are purged with their showtimes.
    pub movie_retention: chrono::Duration,
}

fn get_env_u64(var: &str, default: u64) -> u64 {
    match std::env::var(var) {
        Ok(value) => match value.parse::<u64>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    var, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn get_env_string(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn new() -> Self {
        let smtp_password = match std::env::var("SMTP_PASSWORD") {
            Ok(password) => password,
            Err(_) => {
                warn!("Did not find SMTP_PASSWORD environment variable. Mail delivery will fail until it is set.");
                String::new()
            }
        };
        let smtp_port = get_env_u64("SMTP_PORT", 587) as u16;

        Self {
            webdriver_url: get_env_string("WEBDRIVER_URL", "http://localhost:9515"),
            unsubscribe_base_url: get_env_string(
                "UNSUBSCRIBE_BASE_URL",
                "http://localhost:5000",
            ),
            smtp: SmtpConfig {
                host: get_env_string("SMTP_HOST", "smtp.gmail.com"),
                port: smtp_port,
                username: get_env_string("SMTP_USERNAME", ""),
                password: smtp_password,
                sender: get_env_string("SMTP_SENDER", "seatwatch@localhost"),
            },
            sweep: SweepConfig {
                min_interval: Duration::from_secs(get_env_u64("SWEEP_MIN_INTERVAL_SECS", 600)),
                floor: Duration::from_secs(get_env_u64("SWEEP_FLOOR_SECS", 60)),
                pacing: Duration::from_secs(get_env_u64("SWEEP_PACING_SECS", 20)),
                cooldown: chrono::Duration::hours(get_env_u64("NOTIFY_COOLDOWN_HOURS", 6) as i64),
                grid_timeout: Duration::from_secs(get_env_u64("SEAT_GRID_TIMEOUT_SECS", 10)),
                overlay_timeout: Duration::from_secs(get_env_u64("COOKIE_OVERLAY_TIMEOUT_SECS", 2)),
            },
            cleanup: CleanupConfig {
                interval: Duration::from_secs(
                    get_env_u64("CLEANUP_INTERVAL_HOURS", 6) * 60 * 60,
                ),
                movie_retention: chrono::Duration::days(
                    get_env_u64("MOVIE_RETENTION_DAYS", 30) as i64
                ),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
