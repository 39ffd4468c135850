//! The auth interceptor pair installed on every client.
//!
//! `BearerAuth` attaches the stored access token to each request.
//! `UnauthorizedRedirect` watches for 401 answers, drops both tokens and
//! sends the user to the login route before handing the error back to the
//! caller. There is no refresh attempt and no per-call opt-out.

use crate::error::{ClientError, Result};
use crate::middleware::Middleware;
use crate::navigator::Navigator;
use crate::session::SessionContext;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Request, Response};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Request phase: `Authorization: Bearer <token>` when a token is stored.
pub struct BearerAuth {
    session: SessionContext,
}

impl BearerAuth {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Middleware for BearerAuth {
    fn name(&self) -> &'static str {
        "bearer-auth"
    }

    async fn on_request(&self, request: &mut Request) -> Result<()> {
        match self.session.access_token().await? {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ClientError::Session(format!("Unusable access token: {}", e)))?;
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            None => {
                debug!(url = %request.url(), "No access token, sending unauthenticated");
            }
        }
        Ok(())
    }
}

/// Response phase: on 401, clear the session and redirect to login.
pub struct UnauthorizedRedirect {
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl UnauthorizedRedirect {
    pub fn new(
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
        login_route: impl Into<String>,
    ) -> Self {
        Self {
            session,
            navigator,
            login_route: login_route.into(),
        }
    }
}

#[async_trait]
impl Middleware for UnauthorizedRedirect {
    fn name(&self) -> &'static str {
        "unauthorized-redirect"
    }

    async fn on_response(&self, outcome: Result<Response>) -> Result<Response> {
        let err = match outcome {
            Ok(response) => return Ok(response),
            Err(err) => err,
        };

        if err.is_unauthorized() {
            warn!(route = %self.login_route, "Backend rejected credentials, clearing session");
            // A failing store is logged; the caller still gets the 401.
            if let Err(clear_err) = self.session.clear().await {
                error!(error = %clear_err, "Failed to clear session tokens");
            }
            self.navigator.redirect(&self.login_route);
        }

        Err(err)
    }
}
