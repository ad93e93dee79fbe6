//! System settings model.

use serde::{Deserialize, Serialize};

/// Shop opening hours. Consumed by the UI for display only; no auth
/// decision reads these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessHours {
    /// Opening time, `HH:MM`.
    pub open_time: String,
    /// Closing time, `HH:MM`.
    pub close_time: String,
    /// Weekday names the shop stays closed.
    pub rest_days: Vec<String>,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open_time: "10:00".into(),
            close_time: "20:00".into(),
            rest_days: Vec::new(),
        }
    }
}

/// Global settings. Mutable only by an authenticated admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemSettings {
    /// Whether non-admin logins must present a verification code.
    pub require_verification_code: bool,
    pub business_hours: BusinessHours,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            require_verification_code: true,
            business_hours: BusinessHours::default(),
        }
    }
}
