//! Error handling


use std::env::VarError;
use std::io;
use std::result;

use reqwest::StatusCode;

#[cfg(feature = "portal")]
use actix_web::{HttpResponse, ResponseError};
#[cfg(feature = "portal")]
use actix_web::http::StatusCode as WebStatus;


/// Error type returned by camlist operations
#[derive(Debug, Display)]
pub enum Error {

    #[display(fmt = "environment error: {}", _0)]
    Env(VarError),

    #[display(fmt = "HTTP client error: {}", _0)]
    Http(reqwest::Error),

    #[display(fmt = "I/O error: {}", _0)]
    Io(io::Error),

    #[display(fmt = "JSON error: {}", _0)]
    Json(serde_json::Error),

    /// Backend answered with a non-success status
    #[display(fmt = "backend returned {}", _0)]
    Status(StatusCode),

    #[cfg(feature = "portal")]
    #[display(fmt = "template error: {}", _0)]
    Template(tera::Error),

    #[display(fmt = "invalid URL: {}", _0)]
    Url(url::ParseError),

    /// Error to be reported to a portal client with the given status
    #[cfg(feature = "portal")]
    #[display(fmt = "{}", _1)]
    Web(WebStatus, String),
}

impl std::error::Error for Error {}

impl From<VarError> for Error {
    fn from(err: VarError) -> Self {
        Error::Env(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

#[cfg(feature = "portal")]
impl From<tera::Error> for Error {
    fn from(err: tera::Error) -> Self {
        Error::Template(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err)
    }
}

#[cfg(feature = "portal")]
impl<S: Into<String>> From<(WebStatus, S)> for Error {
    fn from((status, msg): (WebStatus, S)) -> Self {
        Error::Web(status, msg.into())
    }
}

#[cfg(feature = "portal")]
impl ResponseError for Error {

    fn status_code(&self) -> WebStatus {
        match self {
            Error::Web(status, _) => *status,
            _ => WebStatus::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}


/// Result type returned by camlist operations
pub type Result<T> = result::Result<T, Error>;
