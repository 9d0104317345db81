use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::poll::PollService};

/// Starts the poll deadline scheduler.
///
/// The job runs every minute and closes open polls whose deadline has
/// passed, fanning out a `poll_closed` notification per closed poll. A
/// failing sweep is logged and retried on the next tick.
///
/// # Arguments
/// - `db` - Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Run at second 0 of every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = sweep_deadlines(&db).await {
                tracing::error!("Error sweeping poll deadlines: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Poll deadline scheduler started");

    Ok(())
}

/// Closes overdue polls and logs the sweep outcome.
async fn sweep_deadlines(db: &DatabaseConnection) -> Result<(), AppError> {
    let service = PollService::new(db);

    let closed = service.close_expired_polls().await?;
    if !closed.is_empty() {
        tracing::info!("Deadline sweep closed {} poll(s)", closed.len());
    }

    Ok(())
}
