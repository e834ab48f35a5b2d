use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{TargetLevel, UserLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// One backend route: method plus path relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl Endpoint {
    const fn post(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            path,
        }
    }

    const fn get(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
        }
    }

    pub const SIMPLIFY_TEXT: Endpoint = Endpoint::post("/api/simplify/text");
    pub const SIMPLIFY_STEPS: Endpoint = Endpoint::post("/api/simplify/steps");
    pub const TUTOR_ASK: Endpoint = Endpoint::post("/api/tutor/ask");
    pub const EVALUATE_READABILITY: Endpoint = Endpoint::post("/api/evaluate/readability");

    pub const ROOT: Endpoint = Endpoint::get("/");
    pub const HEALTH: Endpoint = Endpoint::get("/health");
    pub const SIMPLIFY_HEALTH: Endpoint = Endpoint::get("/api/simplify/health");
    pub const TUTOR_HEALTH: Endpoint = Endpoint::get("/api/tutor/health");
    pub const EVALUATE_HEALTH: Endpoint = Endpoint::get("/api/evaluate/health");

    pub const HEALTH_PROBES: [Endpoint; 5] = [
        Endpoint::ROOT,
        Endpoint::HEALTH,
        Endpoint::SIMPLIFY_HEALTH,
        Endpoint::TUTOR_HEALTH,
        Endpoint::EVALUATE_HEALTH,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplificationRequest {
    pub text: String,
    pub target_level: TargetLevel,
    pub include_examples: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplificationResult {
    pub simplified_text: String,
    pub word_count_reduction: i64,
    pub processing_time: f64,
    pub simplification_level: TargetLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub readability_score: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepGuideRequest {
    pub instruction: String,
    pub context: Option<String>,
    pub user_level: UserLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideStep {
    #[serde(deserialize_with = "step_number_from_int_or_string")]
    pub step_number: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepGuideResult {
    pub original_instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    pub steps: Vec<GuideStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorRequest {
    pub question: String,
    pub context: Option<String>,
    pub user_level: UserLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorResult {
    pub answer: String,
    pub explanation: String,
    #[serde(default, deserialize_with = "list_or_null")]
    pub examples: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub related_concepts: Vec<String>,
    pub confidence_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

pub const DEFAULT_READABILITY_METRICS: [&str; 3] = ["flesch_kincaid", "dale_chall", "smog"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
}

impl EvaluationRequest {
    pub fn with_default_metrics(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metrics: Some(
                DEFAULT_READABILITY_METRICS
                    .iter()
                    .map(|metric| metric.to_string())
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub text: String,
    pub metrics: BTreeMap<String, f64>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub grade_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StepNumberRepr {
    Int(u32),
    Text(String),
}

// The backend types steps as string maps, so "1" and 1 both show up on the wire.
/// Missing and `null` lists both decode as empty.
fn list_or_null<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn step_number_from_int_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match StepNumberRepr::deserialize(deserializer)? {
        StepNumberRepr::Int(value) => Ok(value),
        StepNumberRepr::Text(raw) => raw.trim().parse::<u32>().map_err(|_| {
            serde::de::Error::custom(format!("step_number '{raw}' is not a positive integer"))
        }),
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
