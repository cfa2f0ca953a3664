//! Background job queue for asynchronous invoice processing
//!
//! Jobs are submitted to a bounded channel and drained by a spawned worker
//! task. Each task body runs under a soft time limit (logged) and a hard
//! time limit (abandoned), and its outcome is published on a result channel.
//!
//! Architecture:
//! - MPSC channel for job submission (multi-producer, single-consumer per worker)
//! - Worker tasks run until the submission channel closes
//! - Outcomes are reported on a separate channel so callers can observe results

pub mod config;

pub use config::QueueConfig;

use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Invoice processing job submitted to the queue
#[derive(Debug, Clone)]
pub struct InvoiceJob {
    pub invoice_id: Uuid,
}

/// Result record produced by a completed task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    pub status: String,
    pub invoice_id: Uuid,
}

/// Job sender (multi-producer) for submitting jobs to the queue
pub type JobSender = mpsc::Sender<InvoiceJob>;

/// Job receiver (single-consumer per worker) for receiving jobs from the queue
pub type JobReceiver = mpsc::Receiver<InvoiceJob>;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("task exceeded time limit of {0}s")]
    TimeLimitExceeded(u64),
}

/// Create a new job queue with the specified channel capacity.
///
/// The sender can be cloned and shared across tasks.
pub fn create_job_queue(capacity: usize) -> (JobSender, JobReceiver) {
    mpsc::channel(capacity)
}

/// Placeholder task body for invoice processing.
///
/// Returns a constant-shaped completion record; real processing is wired in
/// behind this signature later.
pub async fn process_invoice(job: &InvoiceJob) -> TaskOutcome {
    TaskOutcome {
        status: "completed".to_string(),
        invoice_id: job.invoice_id,
    }
}

/// Spawn a background worker that drains invoice jobs from the queue.
///
/// Each job runs under the configured time limits; outcomes are published on
/// `outcomes`. The worker stops when the submission channel closes or the
/// outcome channel is dropped.
pub fn spawn_invoice_worker(
    config: QueueConfig,
    mut receiver: JobReceiver,
    outcomes: mpsc::Sender<TaskOutcome>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        info!("Invoice worker started");

        while let Some(job) = receiver.recv().await {
            info!(invoice_id = %job.invoice_id, "Processing invoice job");

            match run_with_limits(process_invoice(&job), &config).await {
                Ok(outcome) => {
                    info!(invoice_id = %job.invoice_id, status = %outcome.status, "Invoice job finished");

                    if outcomes.send(outcome).await.is_err() {
                        warn!("Outcome channel closed; stopping invoice worker");
                        break;
                    }
                }
                Err(e) => {
                    error!(invoice_id = %job.invoice_id, error = %e, "Invoice job failed");
                }
            }
        }

        info!("Invoice worker stopped (channel closed)");
    })
}

/// Run a task future under the configured soft and hard time limits.
///
/// Crossing the soft limit logs a warning and keeps waiting; crossing the
/// hard limit abandons the task.
async fn run_with_limits<F>(task: F, config: &QueueConfig) -> Result<F::Output, QueueError>
where
    F: Future,
{
    let hard = Duration::from_secs(config.task_time_limit_secs);
    // A soft limit above the hard limit can never fire
    let soft = hard.min(Duration::from_secs(config.task_soft_time_limit_secs));

    tokio::pin!(task);

    match tokio::time::timeout(soft, &mut task).await {
        Ok(output) => Ok(output),
        Err(_) => {
            warn!(
                soft_limit_secs = config.task_soft_time_limit_secs,
                "Task exceeded soft time limit"
            );

            tokio::time::timeout(hard.saturating_sub(soft), &mut task)
                .await
                .map_err(|_| QueueError::TimeLimitExceeded(config.task_time_limit_secs))
        }
    }
}
