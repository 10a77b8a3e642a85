//! STT engine trait and error type.
//!
//! [`SttEngine`] is object-safe and `Send + Sync` so it can be held behind an
//! `Arc<dyn SttEngine>` and called from the blocking thread pool.  The crate
//! ships no production backend; callers plug in whichever provider they use.
//!
//! Backends hand back the provider's JSON body untouched; the session pulls
//! the transcript out with [`transcript_from_response`].
//!
//! [`MockSttEngine`] (available under `#[cfg(test)]`) returns a
//! pre-configured response and records the calls it saw.
//!
//! [`transcript_from_response`]: super::transcript_from_response

use serde_json::Value;
use thiserror::Error;

// ---------------------------------------------------------------------------
// SttError
// ---------------------------------------------------------------------------

/// Errors an STT backend may report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SttError {
    /// No audio bytes were supplied.
    #[error("audio payload is empty")]
    EmptyAudio,

    /// Transport or provider-side failure.
    #[error("STT request failed: {0}")]
    Request(String),

    /// The backend did not answer within its time budget.
    #[error("STT request timed out")]
    Timeout,

    /// The backend answered with a body that could not be interpreted.
    #[error("unexpected STT response: {0}")]
    Response(String),
}

// ---------------------------------------------------------------------------
// SttEngine trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for speech-to-text backends.
///
/// # Contract
///
/// - `audio` is the encoded recording exactly as the client uploaded it.
/// - `language` is the BCP-47 tag the provider should recognise
///   (`SttConfig::language`, `"ko-KR"` by default).
/// - Returns the provider's response body as JSON.
/// - Returns `Err(SttError::EmptyAudio)` when `audio` is empty.
pub trait SttEngine: Send + Sync {
    /// Transcribe `audio` in `language` and return the raw response body.
    fn transcribe(&self, audio: &[u8], language: &str) -> Result<Value, SttError>;
}

// Compile-time assertion: Box<dyn SttEngine> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SttEngine>) {}
};

// ---------------------------------------------------------------------------
// MockSttEngine  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured response.
#[cfg(test)]
pub struct MockSttEngine {
    response: Result<Value, SttError>,
    calls: std::sync::atomic::AtomicUsize,
    languages: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockSttEngine {
    /// Create a mock that answers `{ "text": text }`.
    pub fn ok(text: impl Into<String>) -> Self {
        Self::body(serde_json::json!({ "text": text.into() }))
    }

    /// Create a mock that answers with an arbitrary response body.
    pub fn body(body: Value) -> Self {
        Self::with_response(Ok(body))
    }

    /// Create a mock that always returns `Err(error)`.
    pub fn err(error: SttError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<Value, SttError>) -> Self {
        Self {
            response,
            calls: Default::default(),
            languages: Default::default(),
        }
    }

    /// Number of `transcribe` calls seen so far.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    /// Language tags passed to `transcribe`, in call order.
    pub fn languages(&self) -> Vec<String> {
        self.languages.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl SttEngine for MockSttEngine {
    fn transcribe(&self, audio: &[u8], language: &str) -> Result<Value, SttError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.languages.lock().unwrap().push(language.to_owned());
        // Enforce the empty-audio contract even in the mock so that callers
        // are tested against it.
        if audio.is_empty() {
            return Err(SttError::EmptyAudio);
        }
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
