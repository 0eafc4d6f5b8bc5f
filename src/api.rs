//! Types and decoding for the backend camera API

use log::{debug, trace, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde::de::Error as _;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::paths;
use crate::transport::{Method, Transport};


/// A camera known to the backend
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct Camera {

    /// Opaque identifier, possibly carrying a leading `/`
    #[serde(deserialize_with = "id_from_json")]
    pub id: String,

    /// Display name
    pub name: String,
}

/// Accepts string ids as well as the integer ids some backends emit
fn id_from_json<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where D: Deserializer<'de>
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("invalid camera id: {}", other))),
    }
}


/// Decoded body of a camera list response
#[derive(Debug, PartialEq)]
pub enum Listing {

    /// The body was an array of cameras
    Cameras(Vec<Camera>),

    /// The body was valid JSON, but not an array
    Unexpected,
}

impl Listing {

    /// Decodes a camera list response body
    ///
    /// Any JSON value other than an array yields `Listing::Unexpected`. Invalid JSON, or an array
    /// containing something other than camera objects, is an error.
    pub fn decode(body: &str) -> Result<Self> {

        let value: Value = serde_json::from_str(body)?;

        match value {
            Value::Array(_) => Ok(Listing::Cameras(serde_json::from_value(value)?)),
            other => {
                warn!("camera list response is not an array: {}", kind_of(&other));
                Ok(Listing::Unexpected)
            },
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


/// Retrieves the camera list from the backend
///
/// A response with a non-success status is an error; its body is not read as a listing.
pub async fn fetch_listing<T>(transport: &T) -> Result<Listing>
where T: Transport + ?Sized
{
    debug!("fetching camera list");
    let reply = transport.send(Method::GET, paths::CAMERAS)
        .await?;

    if !reply.status.is_success() {
        return Err(Error::Status(reply.status));
    }

    trace!("camera list body is {} bytes", reply.body.len());
    Listing::decode(&reply.body)
}
