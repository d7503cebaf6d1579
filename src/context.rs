use http::Request;
use serde::Serialize;

/// The routing decision the proxy resolved for one in-flight request.
///
/// Created and owned by the surrounding proxy engine, one instance per
/// proxied call, and inserted into the outbound request's extensions before
/// the request is handed to the transport. The echo transport only reads it
/// for the duration of that one call; it is never mutated or retained.
#[derive(Debug, Clone)]
pub struct RoutingContext {
    /// Identifier of the route that matched the inbound request.
    pub route_id: String,
    /// What the route table matched on.
    pub route_match: RouteMatch,
    /// Identifier of the cluster the route forwards to.
    pub cluster_id: String,
    /// Identifier of the destination picked within the cluster.
    pub destination_id: String,
    /// Address prefix of the picked destination.
    pub destination_prefix: String,
}

/// The match specification of a configured route.
///
/// Every field is optional; a route typically constrains only a subset of
/// them. Unset fields are omitted when the decision is serialized.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteMatch {
    /// HTTP methods the route accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    /// Host names the route accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    /// Path pattern the route accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Query parameter constraints, as `name=value` pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<String>>,
}

/// How the transport is allowed to negotiate the protocol version relative to
/// the version requested on the outbound message.
///
/// Attached to the outbound request as an extension when the proxy pins a
/// policy for the upstream call; absent otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VersionPolicy {
    /// Use the requested version or any lower one the peer supports.
    RequestVersionOrLower,
    /// Use the requested version or any higher one the peer supports.
    RequestVersionOrHigher,
    /// Use exactly the requested version.
    RequestVersionExact,
}

mod sealed {
    pub trait Sealed {}
}

impl<T> sealed::Sealed for Request<T> {}

/// An extension trait for reading per-call routing data off an outbound
/// request.
pub trait RequestExt: sealed::Sealed {
    /// The routing decision attached to this request, if any.
    fn routing_context(&self) -> Option<&RoutingContext>;

    /// The transport version policy pinned for this request, if any.
    fn version_policy(&self) -> Option<VersionPolicy>;
}

impl<T> RequestExt for Request<T> {
    fn routing_context(&self) -> Option<&RoutingContext> {
        self.extensions().get::<RoutingContext>()
    }

    fn version_policy(&self) -> Option<VersionPolicy> {
        self.extensions().get::<VersionPolicy>().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_readable_through_the_extension_trait() {
        let mut request = Request::builder()
            .uri("http://example.com/")
            .body(())
            .unwrap();
        assert!(request.routing_context().is_none());
        assert!(request.version_policy().is_none());

        request.extensions_mut().insert(RoutingContext {
            route_id: "r1".into(),
            route_match: RouteMatch::default(),
            cluster_id: "c1".into(),
            destination_id: "d1".into(),
            destination_prefix: "https://backend1".into(),
        });
        request
            .extensions_mut()
            .insert(VersionPolicy::RequestVersionExact);

        assert_eq!(request.routing_context().unwrap().route_id, "r1");
        assert_eq!(
            request.version_policy(),
            Some(VersionPolicy::RequestVersionExact)
        );
    }

    #[test]
    fn unset_match_fields_are_omitted() {
        let route_match = RouteMatch {
            path: Some("/api/{**catch-all}".into()),
            ..RouteMatch::default()
        };
        let json = serde_json::to_value(&route_match).unwrap();
        assert_eq!(json, serde_json::json!({ "Path": "/api/{**catch-all}" }));
    }
}
