//! Recognition sessions: STT → verification → accepted-reading sink.
//!
//! * [`SpeechSession`] — runs one attempt end to end.
//! * [`RecognitionReport`] — flags the client branches on.
//! * [`AcceptedLogSink`] / [`MemorySink`] — where accepted readings go.
//!
//! The verification core stays pure; this module is the thin async shell
//! that talks to the two external collaborators.

pub mod report;
pub mod runner;
pub mod sink;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use report::{RecognitionReport, RECOGNITION_ERROR};
pub use runner::SpeechSession;
pub use sink::{AcceptedAttempt, AcceptedLogSink, MemorySink, SinkError};
