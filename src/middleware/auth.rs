use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    Error,
};
use futures_util::future::LocalBoxFuture;
use sha2::{Digest, Sha256};
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::AppError;

/// Hex-encoded SHA-256 digest of an API key, as stored in configuration
pub fn hash_api_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Admin API key authentication middleware.
///
/// Every request must carry an `X-API-Key` header whose SHA-256 digest
/// matches the configured admin key hash. Liveness endpoints are exempt.
pub struct AdminKeyAuth {
    key_hash: String,
}

impl AdminKeyAuth {
    pub fn new(key_hash: String) -> Self {
        Self { key_hash }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminKeyAuthMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminKeyAuthMiddleware {
            service: Rc::new(service),
            key_hash: self.key_hash.clone(),
        }))
    }
}

pub struct AdminKeyAuthMiddleware<S> {
    service: Rc<S>,
    key_hash: String,
}

impl<S, B> Service<ServiceRequest> for AdminKeyAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let key_hash = self.key_hash.clone();

        Box::pin(async move {
            // Liveness endpoints stay reachable without a key
            let path = req.path();
            if path == "/health" || path == "/" {
                return service.call(req).await.map(ServiceResponse::map_into_left_body);
            }

            let authorized = req
                .headers()
                .get("X-API-Key")
                .and_then(|h| h.to_str().ok())
                .map(|key| hash_api_key(key) == key_hash)
                .unwrap_or(false);

            if !authorized {
                let (request, _payload) = req.into_parts();
                let response = AppError::unauthorized("Missing or invalid X-API-Key header")
                    .error_response()
                    .map_into_right_body();
                return Ok(ServiceResponse::new(request, response));
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}
