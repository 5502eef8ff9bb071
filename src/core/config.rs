//! Interpreter configuration with documented constants
//!
//! The tunable thresholds of the dialogue pipeline are collected here with
//! explanations of their purpose.

/// Configuration for the command interpreter
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Minimum fuzzy score for a contact to be accepted as a match
    ///
    /// The score is a containment-biased character ratio in [0.0, 1.0]. At
    /// 0.5, a misheard token must share more than half of its characters with
    /// a contact's local-part before we risk proposing that contact. Raising
    /// it makes resolution stricter; below ~0.4 short tokens start matching
    /// nearly everything.
    pub fuzzy_threshold: f64,

    /// Maximum number of handles spoken in a contact listing
    ///
    /// Also bounds the directory sample read back in recipient re-prompts.
    /// Spoken lists longer than about six items are impossible to retain.
    pub max_listed_contacts: usize,

    /// Minimum character count for a token to be considered a recipient
    ///
    /// One- and two-letter tokens are almost always recognizer noise or
    /// connective words, not names.
    pub min_recipient_token_len: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.5,
            max_listed_contacts: 6,
            min_recipient_token_len: 3,
        }
    }
}

impl InterpreterConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(format!(
                "fuzzy_threshold ({}) must be within [0.0, 1.0]",
                self.fuzzy_threshold
            ));
        }

        if self.max_listed_contacts == 0 {
            return Err("max_listed_contacts must be at least 1".into());
        }

        if self.min_recipient_token_len == 0 {
            return Err("min_recipient_token_len must be at least 1".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<InterpreterConfig> = OnceLock::new();

/// Get the global interpreter config (initializes with defaults if not set)
pub fn config() -> &'static InterpreterConfig {
    CONFIG.get_or_init(InterpreterConfig::default)
}

/// Set the global interpreter config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: InterpreterConfig) -> Result<(), InterpreterConfig> {
    CONFIG.set(config)
}
