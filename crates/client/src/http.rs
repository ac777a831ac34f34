use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::Error;
use crate::session::SessionStore;
use crate::transport::{ApiRequest, ApiResponse, Body, Method, Part, Transport};

/// HTTP client timeout for portal requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed transport against the configured base URL.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Multipart(parts) => {
                let mut form = reqwest::multipart::Form::new();
                for part in parts {
                    form = match part {
                        Part::Text { name, value } => form.text(name, value),
                        Part::File {
                            name,
                            file_name,
                            bytes,
                        } => form.part(
                            name,
                            reqwest::multipart::Part::bytes(bytes).file_name(file_name),
                        ),
                    };
                }
                builder.multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        if !(200..300).contains(&status) {
            return Err(Error::Api {
                status,
                message: text,
            });
        }
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        Ok(ApiResponse { status, body })
    }
}

/// Thin typed wrapper over the transport. Attaches the current access
/// token to every request; no retries, no backoff, no cancellation of
/// in-flight requests.
pub struct Api {
    transport: Arc<dyn Transport>,
    session: Arc<SessionStore>,
}

impl Api {
    pub fn new(transport: Arc<dyn Transport>, session: Arc<SessionStore>) -> Self {
        Self { transport, session }
    }

    async fn execute(&self, method: Method, path: &str, body: Body) -> Result<ApiResponse, Error> {
        let bearer = self.session.access_token().await;
        self.transport
            .execute(ApiRequest {
                method,
                path: path.to_string(),
                body,
                bearer,
            })
            .await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self.execute(Method::Get, path, Body::Empty).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        let body = Body::Json(serde_json::to_value(body)?);
        let response = self.execute(Method::Post, path, body).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// POST whose response body is irrelevant to the caller.
    pub async fn post_unit(&self, path: &str, body: &impl Serialize) -> Result<(), Error> {
        let body = Body::Json(serde_json::to_value(body)?);
        self.execute(Method::Post, path, body).await?;
        Ok(())
    }

    /// POST with no payload at all (logout).
    pub async fn post_empty(&self, path: &str) -> Result<(), Error> {
        self.execute(Method::Post, path, Body::Empty).await?;
        Ok(())
    }

    pub async fn post_multipart(&self, path: &str, parts: Vec<Part>) -> Result<(), Error> {
        self.execute(Method::Post, path, Body::Multipart(parts))
            .await?;
        Ok(())
    }
}
