use http::{HeaderMap, HeaderName, Request, Version};
use http_body::Body;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

use crate::context::{RequestExt, RouteMatch, RoutingContext, VersionPolicy};

/// Description of one intercepted outbound send: the routing decision behind
/// it plus the request facts, captured verbatim at the moment of the call.
///
/// This is the document placed, pretty-printed, in the synthetic response
/// body. Facts that are absent on the source — no pinned version policy, no
/// body — are omitted from the output rather than emitted as null
/// placeholders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteReport<'a> {
    route_id: &'a str,
    route_match: &'a RouteMatch,
    cluster_id: &'a str,
    destination_id: &'a str,
    destination_prefix: &'a str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_policy: Option<VersionPolicy>,
    method: &'a str,
    uri: String,
    request_headers: MessageHeaders<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_headers: Option<EntityHeaders<'a>>,
}

impl<'a> RouteReport<'a> {
    /// Capture the routing decision and request facts for one call.
    ///
    /// Nothing is transformed, masked, or truncated; the report reflects the
    /// context and request exactly as they were at this moment.
    pub fn new<B: Body>(context: &'a RoutingContext, request: &'a Request<B>) -> Self {
        let has_body = !request.body().is_end_stream();

        RouteReport {
            route_id: &context.route_id,
            route_match: &context.route_match,
            cluster_id: &context.cluster_id,
            destination_id: &context.destination_id,
            destination_prefix: &context.destination_prefix,
            version: version_str(request.version()),
            version_policy: request.version_policy(),
            method: request.method().as_str(),
            uri: request.uri().to_string(),
            request_headers: MessageHeaders {
                headers: request.headers(),
                split_entity: has_body,
            },
            content_headers: has_body.then(|| EntityHeaders(request.headers())),
        }
    }

    /// Render the indented document placed in the response body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_11 => "1.1",
        Version::HTTP_2 => "2.0",
        Version::HTTP_3 => "3.0",
        _ => "unknown",
    }
}

// Entity headers travel with the payload; everything else is a message
// header. The split mirrors how diagnostic consumers read the report: what
// was sent about the message versus what was sent about its body.
fn is_entity_header(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "allow"
            | "content-disposition"
            | "content-encoding"
            | "content-language"
            | "content-length"
            | "content-location"
            | "content-range"
            | "content-type"
            | "expires"
            | "last-modified"
    )
}

/// Message headers of the outbound request, serialized as name → value list.
///
/// When the request carries a body the entity family is reported separately
/// under `ContentHeaders` and excluded here; with no body every header stays
/// in this map so nothing is dropped.
#[derive(Debug)]
struct MessageHeaders<'a> {
    headers: &'a HeaderMap,
    split_entity: bool,
}

impl Serialize for MessageHeaders<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for name in self.headers.keys() {
            if self.split_entity && is_entity_header(name) {
                continue;
            }
            map.serialize_entry(name.as_str(), &HeaderValues { headers: self.headers, name })?;
        }
        map.end()
    }
}

/// The entity-header subset of the request's header map.
#[derive(Debug)]
struct EntityHeaders<'a>(&'a HeaderMap);

impl Serialize for EntityHeaders<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for name in self.0.keys() {
            if is_entity_header(name) {
                map.serialize_entry(name.as_str(), &HeaderValues { headers: self.0, name })?;
            }
        }
        map.end()
    }
}

struct HeaderValues<'a> {
    headers: &'a HeaderMap,
    name: &'a HeaderName,
}

impl Serialize for HeaderValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for value in self.headers.get_all(self.name).iter() {
            // Header values are not required to be UTF-8; render them lossily
            // rather than failing the whole report.
            seq.serialize_element(&String::from_utf8_lossy(value.as_bytes()))?;
        }
        seq.end()
    }
}
