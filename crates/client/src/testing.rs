//! Scripted in-process transport for tests. The pack has no HTTP mocking
//! crate, so network flows are tested through the `Transport` seam.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Error;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

pub(crate) struct ScriptedTransport {
    script: Mutex<HashMap<(Method, String), VecDeque<(u16, Value)>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queues one response for the given method and path. Responses for
    /// the same route are consumed in order; non-2xx statuses surface as
    /// `Error::Api` exactly like the real transport.
    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) {
        self.script
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back((status, body));
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests against one path.
    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        self.requests.lock().unwrap().push(request.clone());
        let scripted = self
            .script
            .lock()
            .unwrap()
            .get_mut(&(request.method, request.path.clone()))
            .and_then(VecDeque::pop_front);
        match scripted {
            Some((status, body)) if (200..300).contains(&status) => {
                Ok(ApiResponse { status, body })
            }
            Some((status, body)) => Err(Error::Api {
                status,
                message: body.to_string(),
            }),
            None => Err(Error::Api {
                status: 501,
                message: format!("unscripted route: {} {:?}", request.path, request.method),
            }),
        }
    }
}
