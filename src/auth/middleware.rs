//! Actix middleware enforcing the Basic-auth gate on every request.

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};

use super::BasicAuthGate;
use crate::error::ErrorResponse;

/// Basic-auth middleware factory. A disabled gate passes every request
/// through untouched.
pub struct RequireBasicAuth {
    gate: BasicAuthGate,
}

impl RequireBasicAuth {
    pub fn new(gate: BasicAuthGate) -> Self {
        Self { gate }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireBasicAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireBasicAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireBasicAuthMiddleware {
            service,
            gate: self.gate.clone(),
        }))
    }
}

/// Basic-auth middleware service.
pub struct RequireBasicAuthMiddleware<S> {
    service: S,
    gate: BasicAuthGate,
}

impl<S> RequireBasicAuthMiddleware<S> {
    fn authorized(&self, req: &ServiceRequest) -> bool {
        if !self.gate.is_enabled() {
            return true;
        }
        req.headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| self.gate.verify_header(v))
            .unwrap_or(false)
    }
}

impl<S, B> Service<ServiceRequest> for RequireBasicAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.authorized(&req) {
            let response = HttpResponse::Unauthorized()
                .insert_header((header::WWW_AUTHENTICATE, "Basic realm=\"jobtrack\""))
                .json(ErrorResponse {
                    error: "UNAUTHORIZED".to_string(),
                    message: "Authentication required.".to_string(),
                })
                .map_into_right_body();
            return Box::pin(ready(Ok(req.into_response(response))));
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}
