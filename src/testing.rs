//! Scripted backend used by unit tests

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::transport::{Method, Reply, StatusCode, Transport};


/// Records every request and answers GETs from a queue of scripted replies
///
/// Requests other than GET always succeed with an empty 200. A GET with nothing queued fails as
/// if the backend were unreachable.
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<VecDeque<Result<Reply>>>,
    requests: Mutex<Vec<(Method, String)>>,
    post_status: Mutex<Option<StatusCode>>,
}

impl FakeTransport {

    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply for the next GET
    pub fn reply(self, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.replies.lock().unwrap()
            .push_back(Ok(Reply { status, body: body.into() }));
        self
    }

    /// Queues a connection failure for the next GET
    pub fn fail(self) -> Self {
        let err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        self.replies.lock().unwrap()
            .push_back(Err(Error::Io(err)));
        self
    }

    /// Answers all non-GET requests with `status`
    pub fn post_status(self, status: u16) -> Self {
        *self.post_status.lock().unwrap() = Some(StatusCode::from_u16(status).unwrap());
        self
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.requests.lock().unwrap().clone()
    }

    /// Paths of all POST requests received so far
    pub fn posts(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|(method, _)| *method == Method::POST)
            .map(|(_, path)| path)
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {

    async fn send(&self, method: Method, path: &str) -> Result<Reply> {

        self.requests.lock().unwrap()
            .push((method.clone(), path.into()));

        if method != Method::GET {
            let status = self.post_status.lock().unwrap()
                .unwrap_or(StatusCode::OK);
            return Ok(Reply { status, body: String::new() });
        }

        self.replies.lock().unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Io(io::ErrorKind::NotConnected.into())))
    }
}
