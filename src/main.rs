mod telemetry;

use kit_scheduler_api::start_sync_events_job;
use kit_scheduler_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("kit_scheduler".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();
    start_sync_events_job(context);

    info!("Event sync job started");

    // The sync job runs on background tasks; park until interrupted
    tokio::signal::ctrl_c().await
}
