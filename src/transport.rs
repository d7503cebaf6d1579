use std::{
    future::{ready, Ready},
    task::{Context, Poll},
};

use bytes::Bytes;
use http::{header, Request, Response};
use http_body::Body;
use tower_service::Service;
use tracing::trace;

use crate::{
    body::{full, BoxBody},
    context::RequestExt,
    error::MissingRoutingContext,
    report::RouteReport,
};

/// Outbound-transport substitute that answers every send with a description
/// of the routing decision behind it, instead of dialing the upstream.
///
/// The transport reads the per-call [`RoutingContext`] off the request
/// extensions, serializes a [`RouteReport`] and returns it as the response
/// body with the request's protocol version mirrored and `cache-control:
/// no-cache` set. No I/O is performed and the call completes synchronously;
/// the only failure mode is a request with no routing context attached.
///
/// The transport holds no state of its own, so a single instance (or any
/// number of copies of it) can serve unsynchronized concurrent calls.
///
/// [`RoutingContext`]: crate::RoutingContext
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoTransport {
    _p: (),
}

impl EchoTransport {
    /// Create a new echo transport.
    pub fn new() -> Self {
        Self::default()
    }

    fn echo<B>(&self, request: &Request<B>) -> Result<Response<BoxBody>, crate::Error>
    where
        B: Body,
    {
        let context = request
            .routing_context()
            .ok_or_else(MissingRoutingContext::new)?;

        trace!(
            "echoing routing decision for {} {}",
            request.method(),
            request.uri()
        );

        let report = RouteReport::new(context, request).to_json()?;

        let response = Response::builder()
            .version(request.version())
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
            .body(full(Bytes::from(report)))?;

        Ok(response)
    }
}

impl<B> Service<Request<B>> for EchoTransport
where
    B: Body,
{
    type Response = Response<BoxBody>;
    type Error = crate::Error;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        ready(self.echo(&request))
    }
}

/// Selects the transport used for a client channel.
///
/// Configuration passes can run more than once for the same channel; a
/// transport built on an earlier pass is handed back and reused unchanged so
/// the channel is not rebuilt per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoTransportFactory {
    _p: (),
}

impl EchoTransportFactory {
    /// Create a new factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `existing` unchanged when the channel already carries a
    /// configured transport, or a fresh [`EchoTransport`] otherwise.
    pub fn create_client(&self, existing: Option<EchoTransport>) -> EchoTransport {
        existing.unwrap_or_else(EchoTransport::new)
    }
}
