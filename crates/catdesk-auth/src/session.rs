//! Session orchestration — login, logout, and admin operations.

use catdesk_core::error::CatdeskError;
use catdesk_core::models::session::Session;
use catdesk_core::models::settings::SystemSettings;
use catdesk_core::models::user::{User, UserRole};
use catdesk_core::repository::CredentialStore;
use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use crate::code::CodeIssuer;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::settings::SettingsStore;

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
    /// Verification code. Absent on the first phase of a two-phase
    /// login; required in the second phase for gated roles.
    pub code: Option<String>,
}

/// Successful outcome of a login call.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// The session is now authenticated as this user.
    Authenticated(User),
    /// Credentials were accepted but the verification gate applies and
    /// no code was supplied. The caller should re-prompt for the code
    /// without asking for credentials again.
    VerificationRequired,
}

/// Transient notice shown after a successful login.
#[derive(Debug, Clone)]
struct Notice {
    message: String,
    expires_at: DateTime<Utc>,
}

/// The session/authorization core.
///
/// Owns the single process-wide [`Session`], the verification-code
/// issuer, and the persisted settings. Generic over the credential
/// store so this layer has no dependency on the database crate.
///
/// Methods take `&mut self`: exactly one logical session exists per
/// process and concurrent calls are not supported (single-user,
/// single-process client).
pub struct SessionManager<C: CredentialStore> {
    store: C,
    config: AuthConfig,
    settings: SettingsStore,
    session: Session,
    issuer: CodeIssuer,
    notice: Option<Notice>,
}

impl<C: CredentialStore> SessionManager<C> {
    pub fn new(store: C, settings: SettingsStore, config: AuthConfig) -> Self {
        let issuer = CodeIssuer::new(config.code_lifetime_secs);
        Self {
            store,
            config,
            settings,
            session: Session::default(),
            issuer,
            notice: None,
        }
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current system settings.
    pub fn settings(&self) -> &SystemSettings {
        self.settings.settings()
    }

    /// The credential store, for the user-management screens
    /// (create/list/disable/delete operate directly on the store).
    pub fn store(&self) -> &C {
        &self.store
    }

    /// Authenticate a user, enforcing the verification-code gate for
    /// non-admin roles.
    pub async fn login(&mut self, input: LoginInput) -> Result<LoginOutcome, AuthError> {
        // 1. Verify credentials against the store. This runs on every
        //    call, including the code-submission phase of a two-phase
        //    login.
        let user = match self
            .store
            .authenticate(&input.username, &input.password)
            .await
        {
            Ok(Some(user)) => user,
            Ok(None) => {
                info!(username = %input.username, "login rejected: bad credentials");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(store_error(e)),
        };

        // 2. A disabled account is indistinguishable from bad
        //    credentials to the caller.
        if !user.is_active {
            info!(username = %input.username, "login rejected: account disabled");
            return Err(AuthError::InvalidCredentials);
        }

        // 3. Verification gate. Admins skip it unconditionally.
        let gated =
            user.role != UserRole::Admin && self.settings.settings().require_verification_code;
        if gated {
            // Credentials are good: the session is now awaiting a code
            // until one is accepted or the caller logs out.
            self.session.verification_required = true;
            match input.code.as_deref() {
                None => return Ok(LoginOutcome::VerificationRequired),
                Some(code) => {
                    if !self.issuer.accepts(code, Utc::now()) {
                        info!(username = %input.username, "login rejected: bad verification code");
                        return Err(AuthError::InvalidVerificationCode);
                    }
                }
            }
        }

        // 4. Authenticated.
        info!(username = %user.username, role = ?user.role, "login succeeded");
        self.notice = Some(Notice {
            message: format!("Welcome back, {}!", user.name),
            expires_at: Utc::now() + Duration::seconds(self.config.notice_lifetime_secs as i64),
        });
        self.session = Session {
            user: Some(user.clone()),
            is_authenticated: true,
            verification_required: false,
        };
        Ok(LoginOutcome::Authenticated(user))
    }

    /// Drop the session unconditionally. Safe to call repeatedly.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.notice = None;
    }

    /// Issue a fresh verification code for out-of-band distribution to
    /// staff. Admin only. The previous code is invalidated immediately,
    /// even if it has not expired.
    pub fn generate_verification_code(&mut self) -> Result<String, AuthError> {
        self.require_admin()?;
        let code = self.issuer.generate();
        info!("verification code rotated");
        Ok(code)
    }

    /// Replace the system settings. Admin only; persisted immediately.
    pub fn update_settings(&mut self, settings: SystemSettings) -> Result<(), AuthError> {
        self.require_admin()?;
        self.settings
            .update(settings)
            .map_err(|e| AuthError::Unexpected(e.to_string()))
    }

    /// Welcome notice still active at `now`, if any.
    pub fn notice_at(&self, now: DateTime<Utc>) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| now <= n.expires_at)
            .map(|n| n.message.as_str())
    }

    /// Welcome notice still active, if any. Expires on its own a few
    /// seconds after login; no explicit dismissal is needed.
    pub fn notice(&self) -> Option<&str> {
        self.notice_at(Utc::now())
    }

    fn require_admin(&self) -> Result<(), AuthError> {
        match &self.session.user {
            Some(user) if self.session.is_authenticated && user.role == UserRole::Admin => Ok(()),
            _ => Err(AuthError::NotPermitted),
        }
    }
}

/// Convert a store failure into the auth taxonomy. Nothing from the
/// store escapes unconverted.
fn store_error(err: CatdeskError) -> AuthError {
    match err {
        CatdeskError::Database(msg) => {
            warn!(error = %msg, "credential store unavailable");
            AuthError::StoreUnavailable(msg)
        }
        other => AuthError::Unexpected(other.to_string()),
    }
}
