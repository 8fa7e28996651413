//! Authentication models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /cliente/authenticate`
#[derive(Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account e-mail
    pub username: &'a str,

    /// Account password
    pub password: &'a str,
}

impl fmt::Debug for LoginRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login reply. Success carries `token`, failures usually carry `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}
