/// Session credential types
use serde::{Deserialize, Serialize};

/// Tokens issued by the backend on login or registration.
///
/// Held by a session store on the client; read on every outgoing request and
/// dropped on logout or when the backend answers 401.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredentials {
    /// Bearer token sent with each request
    pub access_token: String,
    /// Token for obtaining a new access token
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl SessionCredentials {
    /// Credentials with both tokens
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: Some(refresh_token.into()),
        }
    }

    /// Credentials without a refresh token
    pub fn access_only(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }
}
