mod config;
mod repos;
mod services;
mod system;

pub use config::{CleanupConfig, Config, SmtpConfig, SweepConfig};
pub use repos::Repos;
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

/// Shared application context passed into every usecase: repositories,
/// configuration, clock and the two external collaborators (browser
/// automation gateway and mail transport).
#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub browser: Arc<dyn IBrowserGateway>,
    pub mailer: Arc<dyn IMailer>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl Context {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let config = Config::new();
        let repos = Repos::create_postgres(&params.postgres_connection_string).await?;
        let browser = Arc::new(FantocciniGateway::new(&config.webdriver_url));
        let mailer = Arc::new(SmtpMailer::new(&config.smtp)?);
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            browser,
            mailer,
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<Context> {
    Context::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
