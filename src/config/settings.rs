//! Settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and handed to the
//! verification core at construction time.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::verify::VerifyError;

// ---------------------------------------------------------------------------
// VerificationConfig
// ---------------------------------------------------------------------------

/// Retry budget and acceptance threshold for pronunciation verification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Attempts allowed per sentence, counting the first one.
    pub max_attempts: u32,
    /// Minimum accuracy (0.0 – 1.0) for a reading to be accepted.
    pub accuracy_threshold: f64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            accuracy_threshold: 0.8,
        }
    }
}

impl VerificationConfig {
    /// Reject a zero attempt budget or a threshold outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), VerifyError> {
        if self.max_attempts == 0 {
            return Err(VerifyError::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.accuracy_threshold) {
            return Err(VerifyError::InvalidConfig(format!(
                "accuracy_threshold must be within 0.0..=1.0, got {}",
                self.accuracy_threshold
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SttConfig
// ---------------------------------------------------------------------------

/// Settings handed to the external speech-to-text backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SttConfig {
    /// BCP-47 language tag sent with each recognition request.
    pub language: String,
    /// Seconds a backend may take before the attempt counts as failed.
    pub timeout_secs: u64,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            language: "ko-KR".into(),
            timeout_secs: 15,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use speech_verify::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// assert!(config.verification.max_attempts >= 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub verification: VerificationConfig,
    pub stt: SttConfig,
}

impl AppConfig {
    /// Load configuration from the platform `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.verification.validate()?;
        Ok(config)
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.verification.max_attempts, 3);
        assert_eq!(cfg.verification.accuracy_threshold, 0.8);
        assert_eq!(cfg.stt.language, "ko-KR");
        assert_eq!(cfg.stt.timeout_secs, 15);
    }

    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let mut original = AppConfig::default();
        original.verification.max_attempts = 5;
        original.verification.accuracy_threshold = 0.75;
        original.stt.language = "en-US".into();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[verification]\nmax_attempts = 4\n").unwrap();

        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config.verification.max_attempts, 4);
        assert_eq!(config.verification.accuracy_threshold, 0.8);
        assert_eq!(config.stt, SttConfig::default());
    }

    #[test]
    fn out_of_range_threshold_fails_to_load() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[verification]\naccuracy_threshold = 1.5\n").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero = VerificationConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(VerifyError::InvalidConfig(_))));

        let nan = VerificationConfig {
            accuracy_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        assert!(VerificationConfig::default().validate().is_ok());
    }
}
