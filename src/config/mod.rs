//! Configuration module.
//!
//! Provides `AppConfig` (top-level settings), the per-subsystem configs,
//! `AppPaths` for the platform config directory, and TOML persistence via
//! `AppConfig::load` / `AppConfig::save_to`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, SttConfig, VerificationConfig};
