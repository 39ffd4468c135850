//! Main jobmatch API client.

use crate::ai::AiApi;
use crate::auth::AuthApi;
use crate::error::{ClientError, Result};
use crate::interceptors::{BearerAuth, UnauthorizedRedirect};
use crate::jobs::JobsApi;
use crate::middleware::{Middleware, MiddlewareChain};
use crate::navigator::{LogNavigator, Navigator};
use crate::resumes::ResumesApi;
use crate::session::SessionContext;
use crate::types::{ApiErrorBody, ClientConfig};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Main client for the jobmatch backend.
///
/// Every call goes through [`ApiClient::execute`], which runs the middleware
/// chain: the auth interceptor pair first, then any layers added through the
/// builder. The client performs no retries.
///
/// # Example
///
/// ```ignore
/// use jobmatch_client::{ApiClient, ClientConfig, MemorySessionStore};
///
/// let session = MemorySessionStore::new().into_context();
/// let client = ApiClient::builder(ClientConfig::default(), session).build()?;
///
/// let page = client.jobs().list(&Default::default()).await?;
/// println!("Found {} jobs", page.results.len());
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionContext,
    chain: MiddlewareChain,
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    config: ClientConfig,
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    extra: Vec<Arc<dyn Middleware>>,
}

impl ApiClientBuilder {
    /// Navigator told about redirects to the login route
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Append a middleware after the auth interceptors
    pub fn middleware(mut self, layer: impl Middleware + 'static) -> Self {
        self.extra.push(Arc::new(layer));
        self
    }

    /// Validate the configuration and build the client.
    pub fn build(self) -> Result<ApiClient> {
        let base_url = normalize_base_url(&self.config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(format!("jobmatch/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Transport)?;

        let mut chain = MiddlewareChain::new()
            .with(BearerAuth::new(self.session.clone()))
            .with(UnauthorizedRedirect::new(
                self.session.clone(),
                self.navigator,
                self.config.login_route,
            ));
        for layer in self.extra {
            chain.push(layer);
        }

        debug!(base_url = %base_url, layers = ?chain.names(), "API client ready");

        Ok(ApiClient {
            http,
            base_url,
            session: self.session,
            chain,
        })
    }
}

impl ApiClient {
    /// Create a client with the given configuration, session and navigator.
    pub fn new(
        config: ClientConfig,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        Self::builder(config, session).navigator(navigator).build()
    }

    /// Start building a client. Redirects are only logged unless a
    /// navigator is supplied.
    pub fn builder(config: ClientConfig, session: SessionContext) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            session,
            navigator: Arc::new(LogNavigator),
            extra: Vec::new(),
        }
    }

    /// Base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store shared with the interceptors.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Check if an access token is stored.
    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.session.access_token().await?.is_some())
    }

    /// Resume operations.
    pub fn resumes(&self) -> ResumesApi<'_> {
        ResumesApi::new(self)
    }

    /// AI service operations.
    pub fn ai(&self) -> AiApi<'_> {
        AiApi::new(self)
    }

    /// Job listing and application operations.
    pub fn jobs(&self) -> JobsApi<'_> {
        JobsApi::new(self)
    }

    /// Login, registration and profile operations.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(self.http.get(self.url(path))).await
    }

    /// GET `path` with query parameters and decode the JSON body.
    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.http.get(self.url(path)).query(query))
            .await
    }

    /// POST a JSON body to `path`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.http.post(self.url(path)).json(body))
            .await
    }

    /// POST to `path` without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(self.http.post(self.url(path))).await
    }

    /// POST a multipart form to `path`.
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        self.send_json(self.http.post(self.url(path)).multipart(form))
            .await
    }

    /// PATCH a JSON body to `path`.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.http.patch(self.url(path)).json(body))
            .await
    }

    /// DELETE `path`; any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.http.delete(self.url(path)).build()?;
        self.execute(request).await?;
        Ok(())
    }

    /// Send a prepared request through the middleware chain.
    ///
    /// Non-2xx answers become errors: 401 as [`ClientError::Unauthorized`],
    /// everything else as [`ClientError::Http`].
    pub async fn execute(&self, mut request: Request) -> Result<Response> {
        self.chain.run_request(&mut request).await?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(method = %method, url = %url, "Sending request");

        let outcome = match self.http.execute(request).await {
            Ok(response) => check_status(response).await,
            Err(e) => {
                warn!(method = %method, url = %url, error = %e, "Request failed without a response");
                Err(ClientError::Transport(e))
            }
        };

        self.chain.run_response(outcome).await
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        let path = request.url().path().to_string();
        let response = self.execute(request).await?;
        decode(response, &path).await
    }
}

/// Trim and validate the base URL.
fn normalize_base_url(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = raw.trim().trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    url::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;
    Ok(url)
}

/// Turn non-success statuses into errors, keeping the backend's message.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(ApiErrorBody::into_message)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                trimmed.to_string()
            }
        });

    debug!(status = status.as_u16(), message = %message, "Backend returned an error");

    if status.as_u16() == 401 {
        Err(ClientError::Unauthorized { message })
    } else {
        Err(ClientError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

/// Decode a JSON body; an empty body decodes as `null`.
async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T> {
    let bytes = response.bytes().await?;
    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes[..]
    };
    serde_json::from_slice(body)
        .map_err(|e| ClientError::Parse(format!("Failed to parse response from {}: {}", path, e)))
}
