//! Authentication configuration.

/// Configuration for the session core.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Verification-code lifetime in seconds (default: 86_400 = 24 hours).
    pub code_lifetime_secs: u64,
    /// Welcome-notice lifetime in seconds (default: 5).
    pub notice_lifetime_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            code_lifetime_secs: 86_400,
            notice_lifetime_secs: 5,
        }
    }
}
