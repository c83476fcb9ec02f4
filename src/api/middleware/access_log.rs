//! HTTP access log middleware
//!
//! Logs method, route group, status and latency of every request. Server
//! errors go out at `warn`, everything else at `debug`.

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, warn};

#[derive(Clone, Default)]
pub struct AccessLog;

impl<S, B> Transform<S, ServiceRequest> for AccessLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessLogService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessLogService {
            service: Rc::new(service),
        }))
    }
}

pub struct AccessLogService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AccessLogService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();
        let method = req.method().clone();
        let endpoint = classify_endpoint(req.path());

        Box::pin(async move {
            let result = srv.call(req).await;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            match &result {
                Ok(response) if response.status().is_server_error() => warn!(
                    "{} {} -> {} ({:.2} ms)",
                    method,
                    endpoint,
                    response.status().as_u16(),
                    elapsed_ms
                ),
                Ok(response) => debug!(
                    "{} {} -> {} ({:.2} ms)",
                    method,
                    endpoint,
                    response.status().as_u16(),
                    elapsed_ms
                ),
                Err(e) => warn!("{} {} failed: {} ({:.2} ms)", method, endpoint, e, elapsed_ms),
            }

            result
        })
    }
}

/// Group request paths so the log stays greppable per feature.
fn classify_endpoint(path: &str) -> &'static str {
    if path.starts_with("/flowers") {
        "catalog"
    } else if path.starts_with("/customers") {
        "customers"
    } else if path.starts_with("/orders") {
        "orders"
    } else if path.starts_with("/api/") {
        "links"
    } else if path.starts_with("/t/") {
        "redirect"
    } else if path.starts_with("/health") {
        "health"
    } else {
        "other"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_endpoint() {
        assert_eq!(classify_endpoint("/flowers"), "catalog");
        assert_eq!(classify_endpoint("/orders/details/3"), "orders");
        assert_eq!(classify_endpoint("/api/link-stats/abc"), "links");
        assert_eq!(classify_endpoint("/t/abc"), "redirect");
        assert_eq!(classify_endpoint("/health"), "health");
        assert_eq!(classify_endpoint("/favicon.ico"), "other");
    }
}
