use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use shared::protocol::HttpMethod;

use crate::{
    error::TransportError,
    observer::{TransportEvent, TransportObserver},
    transport::JsonTransport,
};

type Responder = dyn Fn(&str, Option<&Value>) -> Result<Value, TransportError> + Send + Sync;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

pub struct StubTransport {
    responder: Box<Responder>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&str, Option<&Value>) -> Result<Value, TransportError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(value: Value) -> Arc<Self> {
        Self::new(move |_, _| Ok(value.clone()))
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Self::new(move |path, _| {
            Err(TransportError::Status {
                method: "POST",
                path: path.to_string(),
                status,
                body: Some(serde_json::json!({"detail": "model unavailable"})),
            })
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }
}

#[async_trait]
impl JsonTransport for StubTransport {
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let outcome = (self.responder)(path, body.as_ref());
        self.calls.lock().expect("calls lock").push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });
        outcome
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<TransportEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<TransportEvent> {
        self.events.lock().expect("events lock").clone()
    }
}

impl TransportObserver for RecordingObserver {
    fn observe(&self, event: &TransportEvent) {
        self.events.lock().expect("events lock").push(event.clone());
    }
}
