use std::{error, fmt};

/// Crate-wide boxed error; the transport's `Service::Error`.
pub type Error = Box<dyn error::Error + Send + Sync>;

/// Error returned when an outbound request reaches the echo transport without
/// a [`RoutingContext`] attached to it.
///
/// A response cannot be produced without the routing decision, and answering
/// with an empty document would mislead whoever is diagnosing the proxy, so
/// the call fails instead. This indicates a wiring bug in the surrounding
/// engine: the middleware that resolves the route must insert the context
/// into the request extensions before the send.
///
/// [`RoutingContext`]: crate::RoutingContext
#[derive(Debug)]
pub struct MissingRoutingContext(());

impl MissingRoutingContext {
    pub(crate) fn new() -> Self {
        Self(())
    }
}

impl fmt::Display for MissingRoutingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no routing context attached to the outbound request")
    }
}

impl error::Error for MissingRoutingContext {}
