use actix_cors::Cors;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::Error;
use std::future::{Ready, ready};
use std::pin::Pin;
use std::time::{Duration, Instant};
use tracing::Instrument;
use uuid::Uuid;

/// CORS policy for the public API: any origin, method and header, with
/// credentials. The caller's origin is echoed back rather than `*` so
/// browsers accept credentialed responses.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Wraps each request in a tracing span with a generated request id and logs
/// the outcome once the response is ready.
pub struct RequestTracing;

impl<S, B> Transform<S, ServiceRequest> for RequestTracing
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTracingMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTracingMiddleware { service }))
    }
}

pub struct RequestTracingMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTracingMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let span = tracing::info_span!(
            "http_request",
            request_id = %Uuid::new_v4(),
            method = %req.method(),
            path = %req.path(),
        );
        let started = Instant::now();
        let fut = {
            let _entered = span.enter();
            self.service.call(req)
        };

        Box::pin(
            async move {
                let elapsed_ms = || millis(started.elapsed());
                match fut.await {
                    Ok(res) => {
                        let status = res.status().as_u16();
                        if res.status().is_server_error() {
                            tracing::warn!(status, elapsed_ms = elapsed_ms(), "request failed");
                        } else {
                            tracing::info!(status, elapsed_ms = elapsed_ms(), "request completed");
                        }
                        Ok(res)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, elapsed_ms = elapsed_ms(), "request errored");
                        Err(e)
                    }
                }
            }
            .instrument(span),
        )
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
