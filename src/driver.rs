//! Rotation driver
//!
//! Walks the chunk sequence in order, one update in flight at a time,
//! sleeping the configured interval between sends. The interval also
//! serves as the expiry offset so each chunk expires right as the next
//! one lands.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::chunker::chunk_text;
use crate::credential::Credential;
use crate::helpers::time::expiry_after;
use crate::updater::StatusUpdater;

/// What to do when a single chunk update fails.
///
/// `Continue` is the default: one failed update should not abort the whole
/// rotation. `Halt` propagates the first failure and stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    Continue,
    Halt,
}

#[derive(Debug, Clone)]
pub struct Rotation {
    pub updater: StatusUpdater,
    pub chunk_length: usize,
    pub interval: Duration,
    pub repeat: bool,
    pub policy: FailurePolicy,
}

impl Rotation {
    /// Run the rotation: one pass over the chunks, or forever in loop mode.
    pub async fn run(&self, credential: &Credential, text: &str) -> Result<()> {
        loop {
            self.run_pass(credential, text).await?;
            if !self.repeat {
                return Ok(());
            }
            debug!("pass complete, restarting chunk sequence");
        }
    }

    async fn run_pass(&self, credential: &Credential, text: &str) -> Result<()> {
        for chunk in chunk_text(text, self.chunk_length) {
            let expires_at = expiry_after(Utc::now(), self.interval.as_secs());

            match self.updater.update(credential, &chunk, expires_at).await {
                Ok(()) => {}
                Err(e) => match self.policy {
                    FailurePolicy::Continue => {
                        warn!("status update failed, moving to next chunk: {e}");
                    }
                    FailurePolicy::Halt => return Err(e.into()),
                },
            }

            sleep(self.interval).await;
        }
        Ok(())
    }
}
