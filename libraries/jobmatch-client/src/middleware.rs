//! Ordered request/response hooks around every backend call.

use crate::error::Result;
use async_trait::async_trait;
use reqwest::{Request, Response};
use std::fmt;
use std::sync::Arc;

/// A hook run on every outgoing request and every settled response.
///
/// Request hooks may rewrite the request or abort it with an error. Response
/// hooks see the outcome, success or failure, and return the outcome the
/// caller should get.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Called before the request is sent
    async fn on_request(&self, _request: &mut Request) -> Result<()> {
        Ok(())
    }

    /// Called once the request has settled
    async fn on_response(&self, outcome: Result<Response>) -> Result<Response> {
        outcome
    }
}

/// Middleware applied in insertion order, for requests and responses alike.
#[derive(Clone, Default)]
pub struct MiddlewareChain {
    layers: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    /// Empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer
    pub fn push(&mut self, layer: Arc<dyn Middleware>) {
        self.layers.push(layer);
    }

    /// Append a layer, builder style
    pub fn with(mut self, layer: impl Middleware + 'static) -> Self {
        self.layers.push(Arc::new(layer));
        self
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when no layer is installed
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer names, in order
    pub fn names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    /// Run every request hook; the first error aborts the call.
    pub async fn run_request(&self, request: &mut Request) -> Result<()> {
        for layer in &self.layers {
            layer.on_request(request).await?;
        }
        Ok(())
    }

    /// Thread the outcome through every response hook.
    pub async fn run_response(&self, mut outcome: Result<Response>) -> Result<Response> {
        for layer in &self.layers {
            outcome = layer.on_response(outcome).await;
        }
        outcome
    }
}

impl fmt::Debug for MiddlewareChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewareChain")
            .field("layers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use reqwest::Method;
    use std::sync::Mutex;

    struct Tag {
        name: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl Middleware for Tag {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn on_request(&self, request: &mut Request) -> Result<()> {
            self.seen.lock().unwrap().push(self.name);
            request
                .headers_mut()
                .append("x-layer", HeaderValue::from_static(self.name));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_request_hooks_run_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let chain = MiddlewareChain::new()
            .with(Tag {
                name: "first",
                seen: seen.clone(),
            })
            .with(Tag {
                name: "second",
                seen: seen.clone(),
            });

        let mut request = Request::new(Method::GET, "http://localhost/api/jobs/".parse().unwrap());
        chain.run_request(&mut request).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
        let layers: Vec<_> = request
            .headers()
            .get_all("x-layer")
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        assert_eq!(layers, vec!["first", "second"]);
        assert_eq!(chain.names(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_default_response_hook_passes_through() {
        let chain = MiddlewareChain::new().with(Tag {
            name: "only",
            seen: Arc::new(Mutex::new(Vec::new())),
        });

        let outcome = chain
            .run_response(Err(crate::ClientError::Parse("x".into())))
            .await;
        assert!(matches!(outcome, Err(crate::ClientError::Parse(_))));
    }
}
