//! Login and registration forms.
//!
//! Passwords are held in [`Zeroizing`] buffers and never appear in `Debug`
//! output or the audit ledger.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::{AuthError, AuthResult};

/// A username/password pair submitted for login.
#[derive(Clone)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Create credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// The submitted password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Check that both fields were filled in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] if either field is empty.
    pub fn validate(&self) -> AuthResult<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A registration form.
#[derive(Clone)]
pub struct Registration {
    /// Requested account name.
    pub username: String,
    /// Contact address, if given.
    pub email: Option<String>,
    password: Zeroizing<String>,
    confirm_password: Zeroizing<String>,
}

impl Registration {
    /// Create a registration form.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: None,
            password: Zeroizing::new(password.into()),
            confirm_password: Zeroizing::new(confirm_password.into()),
        }
    }

    /// Set the contact address. Blank addresses are dropped.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.email = (!email.trim().is_empty()).then_some(email);
        self
    }

    /// The chosen password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The login form this registration implies.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.as_str())
    }

    /// Check required fields and that the confirmation matches.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] if username or password is
    /// empty, or [`AuthError::PasswordMismatch`] if the confirmation differs.
    pub fn validate(&self) -> AuthResult<()> {
        self.credentials().validate()?;
        if *self.password != *self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}
