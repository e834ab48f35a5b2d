use std::time::Duration;

use serde_json::Value;
use shared::error::BackendErrorBody;
use thiserror::Error;

/// Any failure between dispatching a request and receiving a usable JSON body.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("{method} {path} timed out after {}s", timeout.as_secs())]
    Timeout {
        method: &'static str,
        path: String,
        timeout: Duration,
    },
    #[error("{method} {path} failed to reach server: {message}")]
    Network {
        method: &'static str,
        path: String,
        message: String,
    },
    #[error("{method} {path} returned HTTP {status}{}", detail_suffix(body))]
    Status {
        method: &'static str,
        path: String,
        status: u16,
        body: Option<Value>,
    },
    #[error("{method} {path} returned HTTP {status} with a non-JSON body: {message}")]
    InvalidBody {
        method: &'static str,
        path: String,
        status: u16,
        message: String,
    },
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } | TransportError::InvalidBody { status, .. } => {
                Some(*status)
            }
            TransportError::Timeout { .. } | TransportError::Network { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            TransportError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }
}

fn detail_suffix(body: &Option<Value>) -> String {
    let Some(body) = body else {
        return String::new();
    };
    match BackendErrorBody::from_value(body) {
        Some(parsed) => format!(": {}", parsed.summary()),
        None => format!(": {body}"),
    }
}

#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("response from {path} did not match the expected shape: {message}")]
    Schema { path: &'static str, message: String },
    #[error("failed to encode request for {path}: {message}")]
    Encode { path: &'static str, message: String },
}

impl ClientError {
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            ClientError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

/// A required field was blank after trimming. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}
