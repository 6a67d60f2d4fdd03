//! Background dispatch for match sessions.
//!
//! Plays the role of the task queue in front of the engine: scoring a
//! large batch is CPU-bound and should not run inline in a request path.
//! A single worker task drains a bounded channel and executes each session
//! on the blocking thread pool; the engine itself stays a pure function.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::core::ranker::CancellationToken;
use crate::core::session::MatchSession;
use crate::error::{EngineError, Result};
use crate::models::{ConsultantProfile, JobDescription, RankedResult};
use crate::services::notifier::MatchNotifier;

struct MatchTask {
    job: JobDescription,
    profiles: Vec<ConsultantProfile>,
    recipient: Option<String>,
    reply: oneshot::Sender<Result<RankedResult>>,
}

/// Hands match sessions to a background worker and pushes finished
/// results through the notification port.
pub struct MatchDispatcher {
    tx: mpsc::Sender<MatchTask>,
    worker: JoinHandle<()>,
    cancel: CancellationToken,
}

impl MatchDispatcher {
    /// Start the worker. `queue_depth` bounds the number of pending
    /// sessions; `submit` applies backpressure once the queue is full.
    pub fn spawn(
        session: MatchSession,
        notifier: Arc<dyn MatchNotifier>,
        queue_depth: usize,
    ) -> Self {
        let (tx, mut rx) = mpsc::channel::<MatchTask>(queue_depth.max(1));
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        let worker = tokio::spawn(async move {
            while let Some(task) = rx.recv().await {
                let MatchTask {
                    job,
                    profiles,
                    recipient,
                    reply,
                } = task;

                let job_id = job.id.clone();
                let session = session.clone();
                let run_cancel = worker_cancel.clone();

                let outcome = tokio::task::spawn_blocking(move || {
                    session.run_with_cancel(&job, &profiles, &run_cancel)
                })
                .await
                .unwrap_or_else(|e| {
                    Err(EngineError::Dispatch(format!("scoring task panicked: {e}")))
                });

                match &outcome {
                    Ok(result) => {
                        info!(
                            job_id = %job_id,
                            matches = result.ranked.len(),
                            candidates = result.total_candidates,
                            "match session completed"
                        );
                        if let Some(recipient) = &recipient {
                            notifier.notify(recipient, result);
                        }
                    }
                    Err(e) => warn!(job_id = %job_id, error = %e, "match session failed"),
                }

                // The caller may have given up waiting; that is not an
                // error for the worker.
                let _ = reply.send(outcome);
            }
        });

        Self { tx, worker, cancel }
    }

    /// Enqueue a session and await its result. `recipient`, when set,
    /// additionally receives the digest through the notifier.
    pub async fn submit(
        &self,
        job: JobDescription,
        profiles: Vec<ConsultantProfile>,
        recipient: Option<String>,
    ) -> Result<RankedResult> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send(MatchTask {
                job,
                profiles,
                recipient,
                reply: reply_tx,
            })
            .await
            .map_err(|_| EngineError::Dispatch("dispatch worker has stopped".to_string()))?;

        reply_rx
            .await
            .map_err(|_| EngineError::Dispatch("dispatch worker dropped the task".to_string()))?
    }

    /// Signal cooperative cancellation to in-flight and queued sessions.
    /// The token is not resettable: sessions submitted afterwards fail
    /// with `Cancelled` too.
    pub fn cancel_all(&self) {
        self.cancel.cancel();
    }

    /// Stop accepting work, drain the queue and wait for the worker.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.worker.await;
    }
}
