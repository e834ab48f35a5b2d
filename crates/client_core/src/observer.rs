//! Injectable hook for per-request transport events.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    Request {
        method: &'static str,
        path: String,
    },
    Response {
        method: &'static str,
        path: String,
        status: u16,
        elapsed: Duration,
    },
    Failed {
        method: &'static str,
        path: String,
        status: Option<u16>,
        error: String,
    },
}

pub trait TransportObserver: Send + Sync {
    fn observe(&self, event: &TransportEvent);
}

/// Emits one structured log line per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TransportObserver for TracingObserver {
    fn observe(&self, event: &TransportEvent) {
        match event {
            TransportEvent::Request { method, path } => {
                tracing::info!(method, path = %path, "sending request");
            }
            TransportEvent::Response {
                method,
                path,
                status,
                elapsed,
            } => {
                tracing::info!(
                    method,
                    path = %path,
                    status,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "received response"
                );
            }
            TransportEvent::Failed {
                method,
                path,
                status,
                error,
            } => {
                tracing::warn!(method, path = %path, status = ?status, "request failed: {error}");
            }
        }
    }
}
