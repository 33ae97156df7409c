mod telemetry;

use seatwatch_core::Application;
use seatwatch_infra::{run_migration, setup_context};
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine in deployed environments
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("seatwatch".into(), "info".into());
    init_subscriber(subscriber);

    run_migration().await?;
    let context = setup_context().await?;

    let app = Application::start(context);
    info!("Sweep and cleanup jobs started");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    app.stop().await;

    Ok(())
}
