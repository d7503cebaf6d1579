//! A diagnostic outbound-transport substitute for reverse proxies.
//!
//! When a proxy is wired up against this crate instead of a real HTTP client,
//! nothing ever leaves the process: each outbound send is answered with a
//! synthetic response whose body describes the routing decision that produced
//! the request (route, cluster, destination) together with the request facts
//! the proxy was about to put on the wire (method, URI, protocol version,
//! headers). This lets an operator or an automated test verify what the proxy
//! *decided to send* without standing up a live backend.
//!
//! The proxy engine attaches its per-call [`RoutingContext`] to the outbound
//! request's extensions before handing the request to the transport; the
//! transport reads it back through [`RequestExt`]. Carrying the context on the
//! request itself means concurrent calls can never observe each other's
//! routing data.
//!
//! ```
//! use http_body_util::{BodyExt, Empty};
//! use route_echo::{EchoTransportFactory, RouteMatch, RoutingContext};
//! use tower::ServiceExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), route_echo::Error> {
//! let transport = EchoTransportFactory::new().create_client(None);
//!
//! let mut request = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com/api")
//!     .body(Empty::<bytes::Bytes>::new())?;
//! request.extensions_mut().insert(RoutingContext {
//!     route_id: "r1".into(),
//!     route_match: RouteMatch::default(),
//!     cluster_id: "c1".into(),
//!     destination_id: "d1".into(),
//!     destination_prefix: "https://backend1".into(),
//! });
//!
//! let response = transport.oneshot(request).await?;
//! let body = response.into_body().collect().await?.to_bytes();
//! # assert!(std::str::from_utf8(&body).unwrap().contains("\"RouteId\": \"r1\""));
//! # Ok(())
//! # }
//! ```

mod body;
mod context;
mod error;
mod report;
mod transport;

pub use crate::body::BoxBody;
pub use crate::context::{RequestExt, RouteMatch, RoutingContext, VersionPolicy};
pub use crate::error::{Error, MissingRoutingContext};
pub use crate::report::RouteReport;
pub use crate::transport::{EchoTransport, EchoTransportFactory};
