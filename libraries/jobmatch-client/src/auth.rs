//! Authentication and profile operations for the jobmatch backend.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{AuthResponse, LoginRequest, ProfileUpdate, RegisterRequest, UserProfile};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Authentication client for the jobmatch backend.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Login with email and password.
    ///
    /// On success the issued tokens are written to the session store.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        debug!(email = %request.email, "Attempting login");
        let response: AuthResponse = self.client.post("/auth/login/", request).await?;
        self.remember(&response).await?;
        info!(username = ?response.username, "Login successful");
        Ok(response)
    }

    /// Create an account; a session is started if the backend issues tokens.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        debug!(email = %request.email, "Registering account");
        let response: AuthResponse = self.client.post("/auth/register/", request).await?;
        self.remember(&response).await?;
        info!(email = %request.email, "Registration successful");
        Ok(response)
    }

    /// End the session on the backend and drop the local tokens.
    ///
    /// Local tokens are cleared even when the backend call fails.
    pub async fn logout(&self) -> Result<Value> {
        let outcome = self.client.post_empty::<Value>("/auth/logout/").await;
        if let Err(e) = &outcome {
            warn!(error = %e, "Logout request failed, clearing local session anyway");
        }
        self.client.session().clear().await?;
        info!("Logged out");
        outcome
    }

    /// Current user's profile.
    pub async fn profile(&self) -> Result<UserProfile> {
        self.client.get("/auth/profile/").await
    }

    /// Update the current user's profile.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        self.client.patch("/auth/profile/", update).await
    }

    async fn remember(&self, response: &AuthResponse) -> Result<()> {
        match response.credentials() {
            Some(credentials) => self.client.session().store(&credentials).await,
            None => {
                warn!("Backend did not issue an access token");
                Ok(())
            }
        }
    }
}
