//! Reporting of finished background tasks

use tokio::task::JoinError;
use tracing::error;

/// Log how a spawned task ended. Returns true when it completed without error.
pub fn report_task(name: &str, outcome: Result<anyhow::Result<()>, JoinError>) -> bool {
    match outcome {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            error!("{} failed: {:#}", name, e);
            false
        }
        Err(e) => {
            error!("{} task panicked: {}", name, e);
            false
        }
    }
}
