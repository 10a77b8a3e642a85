//! Recognition session — drives one attempt from audio to report.
//!
//! # Flow
//!
//! ```text
//! validate target
//!   └─▶ spawn_blocking(stt.transcribe(audio, language))  (bounded by the STT timeout)
//!         ├─ Err / timeout → RecognitionReport::recognition_error
//!         └─ Ok(body)      → transcript_from_response ("" when absent)
//!               └─▶ VerificationOrchestrator::verify
//!               ├─ Accepted → sink.record (failure → log_saved = false)
//!               └─ else     → report retry / exhausted
//! ```
//!
//! STT work goes through `tokio::task::spawn_blocking` so the async runtime
//! never stalls on a slow backend.

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::stt::{transcript_from_response, SttEngine, SttError};
use crate::verify::orchestrator::validate_target;
use crate::verify::{as_percentage, VerificationOrchestrator, VerifyError};

use super::report::RecognitionReport;
use super::sink::{AcceptedAttempt, AcceptedLogSink};

/// Runs recognition attempts against a verifier, an STT backend and a sink.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use speech_verify::config::AppConfig;
/// use speech_verify::session::{MemorySink, SpeechSession};
/// # use speech_verify::stt::SttEngine;
/// # fn make_stt() -> Arc<dyn SttEngine> { unimplemented!() }
///
/// # async fn example() {
/// let session = SpeechSession::from_config(
///     &AppConfig::default(),
///     make_stt(),
///     Arc::new(MemorySink::new()),
/// )
/// .unwrap();
///
/// let audio: Vec<u8> = std::fs::read("attempt.wav").unwrap();
/// let report = session.recognize(audio, "오늘도 좋은 하루입니다", 0).await.unwrap();
/// println!("retry next time? {}", report.need_retry);
/// # }
/// ```
pub struct SpeechSession {
    verifier: VerificationOrchestrator,
    stt: Arc<dyn SttEngine>,
    sink: Arc<dyn AcceptedLogSink>,
    language: String,
    stt_timeout: Duration,
}

impl SpeechSession {
    /// Create a session.
    ///
    /// # Arguments
    ///
    /// * `verifier`    — scoring and retry policy.
    /// * `stt`         — STT backend producing the transcript.
    /// * `sink`        — receives accepted readings.
    /// * `language`    — language tag passed to every STT call.
    /// * `stt_timeout` — how long one STT call may take.
    pub fn new(
        verifier: VerificationOrchestrator,
        stt: Arc<dyn SttEngine>,
        sink: Arc<dyn AcceptedLogSink>,
        language: impl Into<String>,
        stt_timeout: Duration,
    ) -> Self {
        Self {
            verifier,
            stt,
            sink,
            language: language.into(),
            stt_timeout,
        }
    }

    /// Build a session from [`AppConfig`].
    pub fn from_config(
        config: &AppConfig,
        stt: Arc<dyn SttEngine>,
        sink: Arc<dyn AcceptedLogSink>,
    ) -> Result<Self, VerifyError> {
        let verifier = VerificationOrchestrator::new(config.verification)?;
        Ok(Self::new(
            verifier,
            stt,
            sink,
            config.stt.language.clone(),
            Duration::from_secs(config.stt.timeout_secs),
        ))
    }

    /// Transcribe `audio`, verify it against `target` and report.
    ///
    /// STT failures are not errors here: they are charged as an attempt and
    /// reported with the `RECOGNITION_ERROR` code.
    ///
    /// # Errors
    ///
    /// [`VerifyError::InvalidInput`] when `target` is empty; STT is not
    /// called in that case.
    pub async fn recognize(
        &self,
        audio: Vec<u8>,
        target: &str,
        attempt_index: u32,
    ) -> Result<RecognitionReport, VerifyError> {
        validate_target(target)?;

        log::info!(
            "session: recognition started (attempt {}/{})",
            attempt_index.saturating_add(1),
            self.verifier.tracker().max_attempts()
        );

        let transcript = match self.transcribe(audio).await {
            Ok(body) => transcript_from_response(&body).unwrap_or_default(),
            Err(e) => {
                log::warn!("session: STT failed on attempt {attempt_index}: {e}");
                return Ok(RecognitionReport::recognition_error(
                    self.verifier.tracker(),
                    attempt_index,
                ));
            }
        };

        log::info!("session: STT result {target:?} -> {transcript:?}");

        let result = self.verifier.verify(target, &transcript, attempt_index)?;

        let log_saved = if result.is_accepted() {
            self.record_accepted(target, &transcript, result.accuracy, attempt_index)
                .await
        } else {
            false
        };

        Ok(RecognitionReport::from_verification(
            self.verifier.tracker(),
            transcript,
            result,
            log_saved,
        ))
    }

    async fn transcribe(&self, audio: Vec<u8>) -> Result<serde_json::Value, SttError> {
        let stt = Arc::clone(&self.stt);
        let language = self.language.clone();
        let task = tokio::task::spawn_blocking(move || stt.transcribe(&audio, &language));

        match tokio::time::timeout(self.stt_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(SttError::Request(format!("STT task failed: {join_err}"))),
            Err(_elapsed) => Err(SttError::Timeout),
        }
    }

    async fn record_accepted(
        &self,
        target: &str,
        transcript: &str,
        accuracy: f64,
        attempt_index: u32,
    ) -> bool {
        let entry = AcceptedAttempt {
            sentence: target.to_owned(),
            recognized_text: transcript.to_owned(),
            accuracy,
            attempt_index,
        };

        match self.sink.record(entry).await {
            Ok(()) => {
                log::info!(
                    "session: accepted reading stored ({:.1}%)",
                    as_percentage(accuracy)
                );
                true
            }
            Err(e) => {
                log::warn!("session: accepted reading not stored: {e}");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
