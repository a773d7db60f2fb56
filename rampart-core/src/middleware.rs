// Middleware system for request/response processing
//
// The chain is the mount point for the security middlewares; the host
// application's handler sits at the end.

use crate::logging::{debug, trace};
use crate::{Error, HttpRequest, HttpResponse};
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for the next handler in the middleware chain
pub type Next = Box<
    dyn FnOnce(HttpRequest) -> Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>
        + Send,
>;

/// Type alias for handler functions
pub type HandlerFn = Arc<
    dyn Fn(HttpRequest) -> Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>
        + Send
        + Sync,
>;

/// Middleware trait for processing requests before they reach the handler
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Process the request and optionally pass to next middleware
    async fn handle(&self, req: HttpRequest, next: Next) -> Result<HttpResponse, Error>;
}

/// Middleware chain executor
#[derive(Clone)]
pub struct MiddlewareChain {
    middlewares: Arc<Vec<Arc<dyn Middleware>>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self {
            middlewares: Arc::new(Vec::new()),
        }
    }

    /// Add a middleware to the chain
    pub fn use_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        let mut mws = (*self.middlewares).clone();
        mws.push(Arc::new(middleware));
        self.middlewares = Arc::new(mws);
    }

    /// Execute the middleware chain with a handler
    pub async fn apply(&self, req: HttpRequest, handler: HandlerFn) -> Result<HttpResponse, Error> {
        debug!(
            middleware_count = self.middlewares.len(),
            path = %req.path,
            method = %req.method,
            "Executing middleware chain"
        );
        self.execute_from(0, req, handler).await
    }

    fn execute_from(
        &self,
        index: usize,
        req: HttpRequest,
        handler: HandlerFn,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>> {
        if index >= self.middlewares.len() {
            trace!("Middleware chain complete, calling handler");
            handler(req)
        } else {
            let middleware = self.middlewares[index].clone();
            let chain = self.clone();
            let handler_clone = handler.clone();

            trace!(middleware_index = index, "Executing middleware");
            Box::pin(async move {
                middleware
                    .handle(
                        req,
                        Box::new(move |req| chain.execute_from(index + 1, req, handler_clone)),
                    )
                    .await
            })
        }
    }
}

impl Default for MiddlewareChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TagResponse(&'static str);

    #[async_trait]
    impl Middleware for TagResponse {
        async fn handle(&self, req: HttpRequest, next: Next) -> Result<HttpResponse, Error> {
            let res = next(req).await?;
            Ok(res.with_header("X-Tag", self.0))
        }
    }

    struct RejectAll;

    #[async_trait]
    impl Middleware for RejectAll {
        async fn handle(&self, _req: HttpRequest, _next: Next) -> Result<HttpResponse, Error> {
            Err(Error::Forbidden("rejected".to_string()))
        }
    }

    fn ok_handler() -> HandlerFn {
        Arc::new(|_req: HttpRequest| {
            Box::pin(async { Ok(HttpResponse::ok()) })
                as Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>
        })
    }

    #[tokio::test]
    async fn test_empty_chain_calls_handler() {
        let chain = MiddlewareChain::new();
        let req = HttpRequest::new("GET", "/test");

        let result = chain.apply(req, ok_handler()).await;
        assert_eq!(result.unwrap().status, 200);
    }

    #[tokio::test]
    async fn test_middleware_wraps_response() {
        let mut chain = MiddlewareChain::new();
        chain.use_middleware(TagResponse("present"));

        let req = HttpRequest::new("GET", "/test");
        let response = chain.apply(req, ok_handler()).await.unwrap();

        assert_eq!(response.headers.get("X-Tag"), Some(&"present".to_string()));
    }

    #[tokio::test]
    async fn test_middleware_can_short_circuit() {
        let mut chain = MiddlewareChain::new();
        chain.use_middleware(RejectAll);
        chain.use_middleware(TagResponse("unreached"));

        let req = HttpRequest::new("GET", "/test");
        let result = chain.apply(req, ok_handler()).await;

        assert!(matches!(result, Err(Error::Forbidden(_))));
    }
}
