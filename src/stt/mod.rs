//! Speech-to-text collaborator boundary.
//!
//! Verification never looks at audio.  It consumes the transcript an
//! external STT backend produced, so this module only defines the seam:
//!
//! * [`SttEngine`] — object-safe trait any backend implements; it returns
//!   the provider's raw JSON body.
//! * [`SttError`] — failure variants a backend may report.
//! * [`transcript_from_response`] — pulls the recognised text out of a
//!   provider's JSON response body.
//!
//! # Quick start
//!
//! ```rust
//! use speech_verify::stt::transcript_from_response;
//!
//! let body = serde_json::json!({ "text": " 오늘도 좋은 하루입니다 " });
//! assert_eq!(
//!     transcript_from_response(&body).as_deref(),
//!     Some("오늘도 좋은 하루입니다")
//! );
//! ```

pub mod engine;
pub mod response;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use engine::{SttEngine, SttError};
pub use response::transcript_from_response;

// test-only re-export so the session tests can import MockSttEngine
// without `use crate::stt::engine::MockSttEngine`.
#[cfg(test)]
pub use engine::MockSttEngine;
