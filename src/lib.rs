//! Pronunciation verification for read-aloud practice.
//!
//! A user is shown a target sentence, reads it aloud, and an external
//! speech-to-text backend turns the recording into a transcript.  This crate
//! decides how well the transcript matches and what happens next.
//!
//! # Modules
//!
//! * [`verify`]  — pure scoring core: edit distance, accuracy, word diff,
//!   retry state machine and the [`verify::VerificationOrchestrator`].
//! * [`config`]  — TOML-backed settings (attempt budget, threshold, STT).
//! * [`stt`]     — the STT collaborator seam and response parsing.
//! * [`session`] — async shell running STT, verification and the
//!   accepted-reading sink for one attempt.

pub mod config;
pub mod session;
pub mod stt;
pub mod verify;
