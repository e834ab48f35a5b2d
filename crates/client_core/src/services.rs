//! One facade per backend capability. Each maps a single operation onto a single endpoint
//! and checks the decoded body before handing it back.

use std::sync::Arc;

use futures::future::join_all;
use serde::{de::DeserializeOwned, Serialize};
use shared::protocol::{
    Endpoint, EvaluationRequest, EvaluationResult, HealthStatus, SimplificationRequest,
    SimplificationResult, StepGuideRequest, StepGuideResult, TutorRequest, TutorResult,
};
use tracing::error;

use crate::{
    config::{ClientSettings, ConfigError},
    error::ClientError,
    transport::{HttpTransport, JsonTransport},
};

/// Post-decode shape checks for response bodies.
pub trait ResponseSchema: DeserializeOwned {
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

impl ResponseSchema for SimplificationResult {
    fn check(&self) -> Result<(), String> {
        if !self.processing_time.is_finite() || self.processing_time < 0.0 {
            return Err(format!(
                "processing_time must be a non-negative number, got {}",
                self.processing_time
            ));
        }
        Ok(())
    }
}

impl ResponseSchema for StepGuideResult {}

impl ResponseSchema for TutorResult {
    fn check(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.confidence_score) {
            return Err(format!(
                "confidence_score must be within [0, 1], got {}",
                self.confidence_score
            ));
        }
        Ok(())
    }
}

impl ResponseSchema for EvaluationResult {
    fn check(&self) -> Result<(), String> {
        match self.metrics.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(format!("metric {name} is not finite: {value}")),
            None => Ok(()),
        }
    }
}

impl ResponseSchema for HealthStatus {}

async fn call<Req, Res>(
    transport: &dyn JsonTransport,
    endpoint: Endpoint,
    request: Option<&Req>,
) -> Result<Res, ClientError>
where
    Req: Serialize + ?Sized,
    Res: ResponseSchema,
{
    let body = request
        .map(serde_json::to_value)
        .transpose()
        .map_err(|err| ClientError::Encode {
            path: endpoint.path,
            message: err.to_string(),
        })?;

    let value = transport
        .send(endpoint.method, endpoint.path, body)
        .await
        .map_err(ClientError::from)?;

    let decoded: Res = serde_json::from_value(value).map_err(|err| ClientError::Schema {
        path: endpoint.path,
        message: err.to_string(),
    })?;
    decoded.check().map_err(|message| ClientError::Schema {
        path: endpoint.path,
        message,
    })?;
    Ok(decoded)
}

fn log_failure<T>(operation: &'static str, result: Result<T, ClientError>) -> Result<T, ClientError> {
    if let Err(err) = &result {
        error!(operation, "{err}");
    }
    result
}

#[derive(Clone)]
pub struct SimplificationService {
    transport: Arc<dyn JsonTransport>,
}

impl SimplificationService {
    pub fn new(transport: Arc<dyn JsonTransport>) -> Self {
        Self { transport }
    }

    pub async fn simplify_text(
        &self,
        request: &SimplificationRequest,
    ) -> Result<SimplificationResult, ClientError> {
        log_failure(
            "simplify_text",
            call(self.transport.as_ref(), Endpoint::SIMPLIFY_TEXT, Some(request)).await,
        )
    }

    /// Same endpoint as [`StepByStepService::create_guide`]; the pages go through that one.
    pub async fn create_step_by_step_guide(
        &self,
        request: &StepGuideRequest,
    ) -> Result<StepGuideResult, ClientError> {
        log_failure(
            "create_step_by_step_guide",
            call(self.transport.as_ref(), Endpoint::SIMPLIFY_STEPS, Some(request)).await,
        )
    }
}

#[derive(Clone)]
pub struct TutorService {
    transport: Arc<dyn JsonTransport>,
}

impl TutorService {
    pub fn new(transport: Arc<dyn JsonTransport>) -> Self {
        Self { transport }
    }

    pub async fn ask_question(&self, request: &TutorRequest) -> Result<TutorResult, ClientError> {
        log_failure(
            "ask_question",
            call(self.transport.as_ref(), Endpoint::TUTOR_ASK, Some(request)).await,
        )
    }
}

#[derive(Clone)]
pub struct StepByStepService {
    transport: Arc<dyn JsonTransport>,
}

impl StepByStepService {
    pub fn new(transport: Arc<dyn JsonTransport>) -> Self {
        Self { transport }
    }

    pub async fn create_guide(
        &self,
        request: &StepGuideRequest,
    ) -> Result<StepGuideResult, ClientError> {
        log_failure(
            "create_guide",
            call(self.transport.as_ref(), Endpoint::SIMPLIFY_STEPS, Some(request)).await,
        )
    }
}

#[derive(Clone)]
pub struct EvaluationService {
    transport: Arc<dyn JsonTransport>,
}

impl EvaluationService {
    pub fn new(transport: Arc<dyn JsonTransport>) -> Self {
        Self { transport }
    }

    pub async fn evaluate_readability(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResult, ClientError> {
        log_failure(
            "evaluate_readability",
            call(
                self.transport.as_ref(),
                Endpoint::EVALUATE_READABILITY,
                Some(request),
            )
            .await,
        )
    }
}

#[derive(Debug)]
pub struct HealthProbe {
    pub endpoint: Endpoint,
    pub outcome: Result<HealthStatus, ClientError>,
}

#[derive(Clone)]
pub struct HealthService {
    transport: Arc<dyn JsonTransport>,
}

impl HealthService {
    pub fn new(transport: Arc<dyn JsonTransport>) -> Self {
        Self { transport }
    }

    pub async fn check(&self, endpoint: Endpoint) -> Result<HealthStatus, ClientError> {
        log_failure(
            "health_check",
            call::<(), HealthStatus>(self.transport.as_ref(), endpoint, None).await,
        )
    }

    /// Probes every health route; one failing route does not short-circuit the others.
    pub async fn probe_all(&self) -> Vec<HealthProbe> {
        join_all(Endpoint::HEALTH_PROBES.iter().map(|endpoint| async move {
            HealthProbe {
                endpoint: *endpoint,
                outcome: self.check(*endpoint).await,
            }
        }))
        .await
    }
}

/// All facades over one shared transport.
#[derive(Clone)]
pub struct BuddyTextClient {
    pub simplification: SimplificationService,
    pub tutor: TutorService,
    pub steps: StepByStepService,
    pub evaluation: EvaluationService,
    pub health: HealthService,
}

impl BuddyTextClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ConfigError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(settings)?)))
    }

    pub fn with_transport(transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            simplification: SimplificationService::new(transport.clone()),
            tutor: TutorService::new(transport.clone()),
            steps: StepByStepService::new(transport.clone()),
            evaluation: EvaluationService::new(transport.clone()),
            health: HealthService::new(transport),
        }
    }
}

#[cfg(test)]
#[path = "tests/services_tests.rs"]
mod tests;
