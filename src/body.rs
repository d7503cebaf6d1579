use bytes::Bytes;
use http_body::Body;
use http_body_util::{combinators::UnsyncBoxBody, BodyExt, Full};

/// Body type returned by the echo transport.
pub type BoxBody = UnsyncBoxBody<Bytes, crate::Error>;

pub(crate) fn boxed<B>(body: B) -> BoxBody
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<crate::Error>,
{
    body.map_err(Into::into).boxed_unsync()
}

pub(crate) fn full(data: Bytes) -> BoxBody {
    boxed(Full::new(data))
}
