//! Notification port for delivering ranked results.
//!
//! The engine only produces data; whatever informs the recruiter lives
//! behind this trait. The default implementation simulates the original
//! email delivery by logging the digest.

use std::sync::Mutex;

use tracing::info;

use crate::models::RankedResult;

/// Sink that receives a finished ranking for a recruiter.
pub trait MatchNotifier: Send + Sync {
    fn notify(&self, recipient: &str, result: &RankedResult);
}

/// Renders the subject/body pair for a result digest.
///
/// Mirrors the recruiter email: one line per ranked consultant, or an
/// apology when the batch produced no matches.
pub fn format_digest(result: &RankedResult) -> (String, String) {
    if result.ranked.is_empty() {
        return (
            "No Matches Found".to_string(),
            format!(
                "We couldn't find a suitable profile for \"{}\".",
                result.job_title
            ),
        );
    }

    let subject = format!("Top Matches for {}", result.job_title);
    let body = result
        .ranked
        .iter()
        .enumerate()
        .map(|(i, score)| {
            format!(
                "{}. {} (ID: {}) - Score: {:.2}",
                i + 1,
                score.consultant_name,
                score.consultant_id,
                score.overall
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    (subject, body)
}

/// Email-simulation notifier: logs the digest instead of sending mail.
#[derive(Debug, Default)]
pub struct EmailSimulationNotifier;

impl MatchNotifier for EmailSimulationNotifier {
    fn notify(&self, recipient: &str, result: &RankedResult) {
        let (subject, body) = format_digest(result);
        info!(
            recipient,
            subject = subject.as_str(),
            job_id = %result.job_id,
            matches = result.ranked.len(),
            "simulated email delivery"
        );
        info!("\n{}", body);
    }
}

/// In-memory notifier that records every delivery. Used by tests and dry
/// runs.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    deliveries: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    /// (recipient, subject) pairs in delivery order.
    pub fn deliveries(&self) -> Vec<(String, String)> {
        self.deliveries.lock().unwrap().clone()
    }
}

impl MatchNotifier for RecordingNotifier {
    fn notify(&self, recipient: &str, result: &RankedResult) {
        let (subject, _) = format_digest(result);
        self.deliveries
            .lock()
            .unwrap()
            .push((recipient.to_string(), subject));
    }
}
