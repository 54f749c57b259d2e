use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a default — quill works out of the box against a local database.
pub struct Config {
    pub db_path: String,
    /// Minimum submitted-text length in characters. Shorter input is
    /// rejected before the extraction core is invoked; the core itself
    /// tolerates any string.
    pub min_text_chars: usize,
    /// Allowed CORS origin for the web API (FRONTEND_URL env var).
    /// Empty means all origins.
    #[cfg(feature = "web")]
    pub frontend_url: String,
}

/// Default floor for submitted text. Below this the fingerprint is mostly
/// noise, so the calling layer rejects it outright.
const DEFAULT_MIN_TEXT_CHARS: usize = 20;

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let min_text_chars = env::var("QUILL_MIN_TEXT_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MIN_TEXT_CHARS);

        #[cfg(feature = "web")]
        let frontend_url = env::var("FRONTEND_URL").unwrap_or_default();

        Ok(Self {
            db_path: env::var("QUILL_DB_PATH").unwrap_or_else(|_| "./quill.db".to_string()),
            min_text_chars,
            #[cfg(feature = "web")]
            frontend_url,
        })
    }

    /// Check that submitted text clears the minimum-length floor.
    /// Call this before handing text to the extraction core.
    pub fn require_text(&self, text: &str) -> Result<()> {
        if text.trim().chars().count() < self.min_text_chars {
            anyhow::bail!(
                "Text too short to analyze — need at least {} characters.",
                self.min_text_chars
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_floor(min_text_chars: usize) -> Config {
        Config {
            db_path: ":memory:".to_string(),
            min_text_chars,
            #[cfg(feature = "web")]
            frontend_url: String::new(),
        }
    }

    #[test]
    fn test_short_text_rejected() {
        let config = config_with_floor(20);
        assert!(config.require_text("too short").is_err());
    }

    #[test]
    fn test_whitespace_padding_does_not_count() {
        let config = config_with_floor(20);
        assert!(config.require_text("   abc   \n\n        ").is_err());
    }

    #[test]
    fn test_long_enough_text_accepted() {
        let config = config_with_floor(20);
        assert!(config
            .require_text("The cat sat on the mat and thought about dinner.")
            .is_ok());
    }
}
