//! Runtime configuration
//!
//! Only ambient behaviour is configurable. The wire format itself (type-url
//! prefix, sign mode, timeout height, fee payer/granter) is fixed.

use crate::logging;

/// Environment variable enabling debug logging
pub const ENV_DEBUG: &str = "COSMOS_SIGNER_DEBUG";
/// Environment variable enabling pretty-printed JSON output
pub const ENV_PRETTY: &str = "COSMOS_SIGNER_PRETTY";

/// Signer settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignerConfig {
    /// Emit debug-level log lines to stderr
    pub debug_logging: bool,
    /// Pretty-print JSON written by the CLI
    pub pretty_json: bool,
}

impl SignerConfig {
    /// Build settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            debug_logging: lookup(ENV_DEBUG).as_deref().is_some_and(parse_flag),
            pretty_json: lookup(ENV_PRETTY).as_deref().is_some_and(parse_flag),
        }
    }

    pub fn with_debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = self.debug_logging || enabled;
        self
    }

    pub fn with_pretty_json(mut self, enabled: bool) -> Self {
        self.pretty_json = self.pretty_json || enabled;
        self
    }

    /// Install these settings into the process-wide logger
    pub fn apply(&self) {
        if self.debug_logging {
            logging::enable_debug();
        } else {
            logging::disable_debug();
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
