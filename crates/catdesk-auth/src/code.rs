//! Verification-code issuance and validation.
//!
//! A single shared code exists system-wide at a time. The code is a
//! low-value shared secret distributed to staff out-of-band, so a
//! non-cryptographic RNG draw is sufficient.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Characters a code is drawn from — the base-36 digits, uppercase.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every issued code.
pub const CODE_LENGTH: usize = 6;

/// A single issued code. Issuing a new one overwrites it — no history
/// is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    pub code: String,
    pub generated_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

/// Issues and checks the shared verification code.
#[derive(Debug)]
pub struct CodeIssuer {
    current: Option<VerificationCode>,
    lifetime: Duration,
}

impl CodeIssuer {
    pub fn new(lifetime_secs: u64) -> Self {
        Self {
            current: None,
            lifetime: Duration::seconds(lifetime_secs as i64),
        }
    }

    /// Issue a fresh code valid for the configured lifetime from now.
    /// The previous code, if any, is invalidated immediately.
    pub fn generate(&mut self) -> String {
        self.generate_at(Utc::now())
    }

    /// Issue a fresh code anchored at an explicit timestamp.
    pub fn generate_at(&mut self, now: DateTime<Utc>) -> String {
        let code = random_code();
        self.current = Some(VerificationCode {
            code: code.clone(),
            generated_at: now,
            valid_until: now + self.lifetime,
        });
        code
    }

    /// True iff a code has been issued, `presented` equals it exactly
    /// (case-sensitive), and it has not expired at `now`.
    pub fn accepts(&self, presented: &str, now: DateTime<Utc>) -> bool {
        match &self.current {
            None => false,
            Some(current) => presented == current.code && now <= current.valid_until,
        }
    }

    /// The active code, if one has been issued.
    pub fn current(&self) -> Option<&VerificationCode> {
        self.current.as_ref()
    }
}

impl Default for CodeIssuer {
    fn default() -> Self {
        Self::new(86_400)
    }
}

/// Uniform draw of [`CODE_LENGTH`] characters over the base-36 alphabet.
fn random_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
