//! Backend endpoint paths
//!
//! Camera ids are opaque strings chosen by the backend and frequently look like device paths
//! (e.g. */dev/video0*). Before an id is placed in a URL, a single leading `/` is stripped and the
//! remainder is percent-encoded as one path segment.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};


/// Lists all cameras known to the backend
pub const CAMERAS: &str = "/api/cameras";


/// Characters left unencoded in a path component
///
/// This is the unreserved set used by browsers' `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');


/// Action requested of a camera's stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamAction {
    Start,
    Stop,
}

impl fmt::Display for StreamAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamAction::Start => f.write_str("start"),
            StreamAction::Stop => f.write_str("stop"),
        }
    }
}


/// Strips exactly one leading `/` from a camera id
pub fn sanitize_id(id: &str) -> &str {
    id.strip_prefix('/').unwrap_or(id)
}


/// Percent-encodes a string for use as a single path segment
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}


/// Builds the backend path that performs `action` on the given camera's stream
pub fn stream(id: &str, action: StreamAction) -> String {
    format!("/api/stream/{}/{}", encode_component(sanitize_id(id)), action)
}
