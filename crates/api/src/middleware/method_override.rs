//! HTTP method override for HTML forms.
//!
//! Browsers can only submit forms as GET or POST. The edit and delete forms
//! post to `/mangas/{id}?_method=PUT` and `/mangas/{id}?_method=DELETE`; this
//! rewrites such requests to the named method before the router sees them.

use axum::extract::{Query, Request};
use axum::http::Method;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OverrideParams {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Rewrite a `POST ...?_method=PUT|PATCH|DELETE` request to that method.
///
/// Any other request passes through unchanged.
pub fn method_override(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }
    let Ok(Query(params)) = Query::<OverrideParams>::try_from_uri(req.uri()) else {
        return req;
    };
    let method = match params.method.map(|m| m.to_ascii_uppercase()).as_deref() {
        Some("PUT") => Method::PUT,
        Some("PATCH") => Method::PATCH,
        Some("DELETE") => Method::DELETE,
        _ => return req,
    };

    tracing::trace!(%method, uri = %req.uri(), "Overriding POST method");
    *req.method_mut() = method;
    req
}
