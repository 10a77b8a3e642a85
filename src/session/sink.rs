//! Accepted-reading sink — the external persistence collaborator.
//!
//! When a reading is accepted the session hands an [`AcceptedAttempt`] to an
//! [`AcceptedLogSink`].  Storage is the caller's business; a failing sink is
//! logged and reported as `log_saved = false`, it never fails the attempt.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// SinkError
// ---------------------------------------------------------------------------

/// Errors a sink may report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SinkError {
    /// The backing store rejected or failed the write.
    #[error("failed to store accepted attempt: {0}")]
    Storage(String),
}

// ---------------------------------------------------------------------------
// AcceptedAttempt
// ---------------------------------------------------------------------------

/// Record of a sentence the user read correctly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedAttempt {
    pub sentence: String,
    pub recognized_text: String,
    pub accuracy: f64,
    pub attempt_index: u32,
}

// ---------------------------------------------------------------------------
// AcceptedLogSink trait
// ---------------------------------------------------------------------------

/// Async sink for accepted readings.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// behind an `Arc<dyn AcceptedLogSink>`.
#[async_trait]
pub trait AcceptedLogSink: Send + Sync {
    async fn record(&self, entry: AcceptedAttempt) -> Result<(), SinkError>;
}

// ---------------------------------------------------------------------------
// MemorySink
// ---------------------------------------------------------------------------

/// In-process sink that keeps every accepted attempt in a vector.
///
/// ```rust
/// use speech_verify::session::{AcceptedAttempt, AcceptedLogSink, MemorySink};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let sink = MemorySink::new();
/// sink.record(AcceptedAttempt {
///     sentence: "하루입니다".into(),
///     recognized_text: "하루입니다".into(),
///     accuracy: 1.0,
///     attempt_index: 0,
/// })
/// .await
/// .unwrap();
/// assert_eq!(sink.entries().len(), 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<AcceptedAttempt>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn entries(&self) -> Vec<AcceptedAttempt> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl AcceptedLogSink for MemorySink {
    async fn record(&self, entry: AcceptedAttempt) -> Result<(), SinkError> {
        self.entries
            .lock()
            .map_err(|e| SinkError::Storage(format!("sink lock poisoned: {e}")))?
            .push(entry);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
