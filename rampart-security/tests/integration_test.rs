//! Integration tests for rampart-security

use rampart_security::*;

use rampart_core::{Error, HandlerFn, HttpRequest, HttpResponse, MiddlewareChain};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

fn ok_handler() -> HandlerFn {
    Arc::new(|_req: HttpRequest| {
        Box::pin(async { Ok(HttpResponse::ok()) })
            as Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>
    })
}

#[test]
fn test_default_headers() {
    let security = SecurityHeaders::new();
    let secured = security.apply(HttpResponse::ok());

    assert_eq!(
        secured.headers.get("X-XSS-Protection"),
        Some(&"1; mode=block".to_string())
    );
    assert_eq!(
        secured.headers.get("X-Content-Type-Options"),
        Some(&"nosniff".to_string())
    );
    assert_eq!(
        secured.headers.get("Referrer-Policy"),
        Some(&"strict-origin-when-cross-origin".to_string())
    );
    assert!(secured.headers.contains_key("Permissions-Policy"));
    assert!(!secured.headers.contains_key("Content-Security-Policy"));
}

#[test]
fn test_custom_configuration() {
    let security = SecurityHeaders::new()
        .with_xss_filter(XssFilter::Enabled)
        .with_referrer_policy(ReferrerPolicy::NoReferrer)
        .with_csp(
            CspConfig::new()
                .default_src(vec!["'self'".to_string()])
                .script_src(vec!["'self'".to_string(), "'unsafe-inline'".to_string()]),
        );

    let secured = security.apply(HttpResponse::ok());

    assert_eq!(
        secured.headers.get("X-XSS-Protection"),
        Some(&"1".to_string())
    );
    assert_eq!(
        secured.headers.get("Referrer-Policy"),
        Some(&"no-referrer".to_string())
    );
    assert_eq!(
        secured.headers.get("Content-Security-Policy"),
        Some(&"default-src 'self'; script-src 'self' 'unsafe-inline'".to_string())
    );
}

#[test]
fn test_handler_headers_win() {
    let security = SecurityHeaders::strict();
    let response = HttpResponse::ok()
        .with_header("Referrer-Policy", "no-referrer")
        .with_header("Content-Security-Policy", "default-src 'none'");

    let secured = security.apply(response);

    assert_eq!(
        secured.headers.get("Referrer-Policy"),
        Some(&"no-referrer".to_string())
    );
    assert_eq!(
        secured.headers.get("Content-Security-Policy"),
        Some(&"default-src 'none'".to_string())
    );
    // Headers the handler did not set are still added
    assert_eq!(
        secured.headers.get("X-Content-Type-Options"),
        Some(&"nosniff".to_string())
    );
}

#[test]
fn test_csp_directive_order() {
    let security = SecurityHeaders::strict();
    let secured = security.apply(HttpResponse::ok());

    let csp = secured.headers.get("Content-Security-Policy").unwrap();
    let directives: Vec<&str> = csp
        .split("; ")
        .map(|part| part.split(' ').next().unwrap())
        .collect();

    assert_eq!(
        directives,
        vec![
            "default-src",
            "script-src",
            "style-src",
            "img-src",
            "font-src",
            "connect-src",
            "frame-ancestors",
            "base-uri",
            "form-action",
        ]
    );
}

#[tokio::test]
async fn test_middleware_chain_applies_headers() {
    let mut chain = MiddlewareChain::new();
    chain.use_middleware(SecurityHeaders::new());

    let req = HttpRequest::new("GET", "/profile");
    let response = chain.apply(req, ok_handler()).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(
        response.headers.get("X-XSS-Protection"),
        Some(&"1; mode=block".to_string())
    );
    assert_eq!(
        response.headers.get("X-Content-Type-Options"),
        Some(&"nosniff".to_string())
    );
}

#[tokio::test]
async fn test_middleware_forwards_errors() {
    let mut chain = MiddlewareChain::new();
    chain.use_middleware(SecurityHeaders::new());

    let failing: HandlerFn = Arc::new(|_req: HttpRequest| {
        Box::pin(async { Err(Error::Internal("handler failed".to_string())) })
            as Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>
    });

    let req = HttpRequest::new("GET", "/profile");
    let result = chain.apply(req, failing).await;

    assert!(matches!(result, Err(Error::Internal(_))));
}
