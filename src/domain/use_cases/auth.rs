use zeroize::Zeroizing;

use crate::constants::SESSION_KEY;
use crate::errors::AuthError;
use crate::repositories::backend::KeyValueBackend;
use crate::settings::AppConfig;

/// Credential gate, injected so no controller embeds the comparison.
/// Deliberately a local check with no token expiry or server
/// validation; unfit for real access control and kept that way.
pub trait Authenticator {
    fn verify(&self, email: &str, password: &str) -> bool;
}

pub struct ConfigCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl ConfigCredentials {
    pub fn from_config(config: &AppConfig) -> Self {
        ConfigCredentials {
            email: config.admin_email.clone(),
            password: config.admin_secret(),
        }
    }

    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        ConfigCredentials {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl Authenticator for ConfigCredentials {
    fn verify(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password.as_str()
    }
}

pub struct AuthHandler<A, B>
where
    A: Authenticator,
    B: KeyValueBackend,
{
    authenticator: A,
    sessions: B,
}

impl<A, B> AuthHandler<A, B>
where
    A: Authenticator,
    B: KeyValueBackend,
{
    pub fn new(authenticator: A, sessions: B) -> Self {
        AuthHandler { authenticator, sessions }
    }

    /// Sets the session flag on a successful credential match.
    pub fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if !self.authenticator.verify(email, password) {
            tracing::warn!("Rejected admin login attempt");
            return Err(AuthError::WrongCredentials);
        }

        self.sessions.set(SESSION_KEY, "true")?;
        tracing::info!("Admin session opened");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.sessions.remove(SESSION_KEY)?;
        tracing::info!("Admin session closed");
        Ok(())
    }

    /// A substrate failure reads as "no session"; the guard then
    /// redirects to login rather than failing open.
    pub fn is_admin(&self) -> bool {
        matches!(self.sessions.get(SESSION_KEY), Ok(Some(flag)) if flag == "true")
    }
}
