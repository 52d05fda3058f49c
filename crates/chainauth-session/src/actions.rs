//! Action labels written to the ledger by the authenticator.

/// Successful login.
pub const LOGIN: &str = "User Login";

/// Successful registration.
pub const REGISTER: &str = "New Account Created";

/// Session ended by the user.
pub const LOGOUT: &str = "User Logout";

/// The identity provider refused a login.
pub const LOGIN_REJECTED: &str = "Login Rejected";

/// The identity provider refused a registration.
pub const REGISTRATION_REJECTED: &str = "Registration Rejected";
