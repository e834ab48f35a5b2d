//! JSON-over-HTTP transport used by every service facade.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method,
};
use serde_json::Value;
use shared::protocol::HttpMethod;

use crate::{
    config::{ClientSettings, ConfigError},
    error::TransportError,
    observer::{TracingObserver, TransportEvent, TransportObserver},
};

#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// Issues one request and returns the decoded JSON body of a 2xx response.
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError>;
}

/// `reqwest`-backed transport: fixed base URL, fixed timeout, JSON headers, one attempt per call.
pub struct HttpTransport {
    http: Client,
    base_url: String,
    timeout: Duration,
    observer: Arc<dyn TransportObserver>,
}

impl HttpTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self, ConfigError> {
        Self::with_observer(settings, Arc::new(TracingObserver))
    }

    pub fn with_observer(
        settings: &ClientSettings,
        observer: Arc<dyn TransportObserver>,
    ) -> Result<Self, ConfigError> {
        let settings = settings.clone().validated()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(settings.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| ConfigError::HttpClient(err.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.api_base_url,
            timeout: settings.request_timeout,
            observer,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn classify(&self, method: HttpMethod, path: &str, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                method: method.as_str(),
                path: path.to_string(),
                timeout: self.timeout,
            }
        } else {
            TransportError::Network {
                method: method.as_str(),
                path: path.to_string(),
                message: err.to_string(),
            }
        }
    }

    fn fail(&self, err: TransportError) -> Result<Value, TransportError> {
        let (method, path) = match &err {
            TransportError::Timeout { method, path, .. }
            | TransportError::Network { method, path, .. }
            | TransportError::Status { method, path, .. }
            | TransportError::InvalidBody { method, path, .. } => (*method, path.clone()),
        };
        if let Some(body) = err.body() {
            tracing::debug!(method, path = %path, "error body: {body}");
        }
        self.observer.observe(&TransportEvent::Failed {
            method,
            path,
            status: err.status(),
            error: err.to_string(),
        });
        Err(err)
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

#[async_trait]
impl JsonTransport for HttpTransport {
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        self.observer.observe(&TransportEvent::Request {
            method: method.as_str(),
            path: path.to_string(),
        });

        let started = Instant::now();
        let mut request = self
            .http
            .request(to_reqwest_method(method), format!("{}{}", self.base_url, path));
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return self.fail(self.classify(method, path, err)),
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) if !status.is_success() => {
                tracing::debug!(method = method.as_str(), path, "unreadable error body: {err}");
                return self.fail(TransportError::Status {
                    method: method.as_str(),
                    path: path.to_string(),
                    status: status.as_u16(),
                    body: None,
                });
            }
            Err(err) => return self.fail(self.classify(method, path, err)),
        };

        if !status.is_success() {
            let body = if bytes.is_empty() {
                None
            } else {
                Some(serde_json::from_slice::<Value>(&bytes).unwrap_or_else(|_| {
                    Value::String(String::from_utf8_lossy(&bytes).into_owned())
                }))
            };
            return self.fail(TransportError::Status {
                method: method.as_str(),
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => value,
                Err(err) => {
                    return self.fail(TransportError::InvalidBody {
                        method: method.as_str(),
                        path: path.to_string(),
                        status: status.as_u16(),
                        message: err.to_string(),
                    })
                }
            }
        };

        self.observer.observe(&TransportEvent::Response {
            method: method.as_str(),
            path: path.to_string(),
            status: status.as_u16(),
            elapsed: started.elapsed(),
        });

        Ok(value)
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
