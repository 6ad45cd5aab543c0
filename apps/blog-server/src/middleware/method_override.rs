//! Method override middleware - lets HTML forms issue PUT and DELETE.
//!
//! Browsers can only submit GET and POST, so forms post to
//! `/posts/{id}?_method=PUT` and this rewrites the method before routing.

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
    web,
};
use serde::Deserialize;
use std::future::{Ready, ready};

/// Query parameter carrying the intended method.
pub const OVERRIDE_PARAM: &str = "_method";

#[derive(Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Middleware that rewrites `POST ...?_method=PUT|DELETE|PATCH`.
pub struct MethodOverride;

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MethodOverrideService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideService { service }))
    }
}

pub struct MethodOverrideService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if *req.method() == Method::POST {
            if let Some(method) = override_method(req.query_string()) {
                tracing::debug!(method = %method, path = %req.path(), "Overriding request method");
                req.head_mut().method = method;
            }
        }

        self.service.call(req)
    }
}

/// The method named in the query string, if it is one we rewrite to.
fn override_method(query: &str) -> Option<Method> {
    let query = web::Query::<OverrideQuery>::from_query(query).ok()?;
    match query.into_inner().method?.to_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        "PATCH" => Some(Method::PATCH),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_method() {
        assert_eq!(override_method("_method=PUT"), Some(Method::PUT));
        assert_eq!(override_method("_method=delete"), Some(Method::DELETE));
        assert_eq!(override_method("x=1&_method=PATCH"), Some(Method::PATCH));
    }

    #[test]
    fn test_no_override() {
        assert_eq!(override_method(""), None);
        assert_eq!(override_method("_method=GET"), None);
        assert_eq!(override_method("_method=CONNECT"), None);
        assert_eq!(override_method("page=2"), None);
    }
}
