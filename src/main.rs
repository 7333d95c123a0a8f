use clap::Parser;
use eremetic::config::Config;
use eremetic::task::handlers::router;
use eremetic::task::queue::{SubmissionQueue, SubmissionReceiver};
use eremetic::task::registry::TaskRegistry;
use eremetic::task::service::TaskService;
use eremetic::task::types::{TASK_STAGING, TaskRecord};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Starting eremetic with {:?}", config);

    // 1. Registry:
    let registry = TaskRegistry::new();
    if let Some(interval) = config.sweep_interval() {
        registry.spawn_sweeper(interval);
        tracing::info!("Sweeping expired task records every {:?}", interval);
    }

    // 2. Queue + service:
    let (queue, receiver) = SubmissionQueue::new();
    let service = TaskService::new(registry.clone(), queue);

    // 3. Staging writer, standing in for the scheduler until one is attached:
    let ttl = config.record_ttl();
    tokio::spawn(async move {
        seed_staging_records(receiver, registry, ttl).await;
    });

    // 4. HTTP server:
    let app = router(service);
    let bind_addr = config.bind_addr();

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Drains the submission queue and makes each task visible as `TASK_STAGING`.
async fn seed_staging_records(
    mut receiver: SubmissionReceiver,
    registry: Arc<TaskRegistry>,
    ttl: Duration,
) {
    while let Some(submission) = receiver.recv().await {
        let record = TaskRecord::from_submission(&submission, TASK_STAGING, ttl);
        tracing::info!(
            "Staged task {} ({} launch(es) of {})",
            submission.task_id,
            submission.tasks_to_launch,
            submission.docker_image
        );
        registry.put(&submission.task_id, record);
    }

    tracing::info!("Submission queue closed, staging writer exiting");
}
