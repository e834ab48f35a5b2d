//! Per-page form models with the user-facing (Indonesian) validation and failure texts.

use shared::{
    domain::{TargetLevel, UserLevel},
    protocol::{
        EvaluationRequest, EvaluationResult, SimplificationRequest, SimplificationResult,
        StepGuideRequest, StepGuideResult, TutorRequest, TutorResult,
        DEFAULT_READABILITY_METRICS,
    },
};

use crate::{
    controller::{PageForm, SubmitController},
    error::ValidationError,
};

pub const SIMPLIFY_TEXT_REQUIRED: &str = "Silakan masukkan teks yang akan disederhanakan";
pub const SIMPLIFY_FAILED: &str =
    "Terjadi kesalahan saat menyederhanakan teks. Silakan coba lagi.";
pub const TUTOR_QUESTION_REQUIRED: &str = "Silakan masukkan pertanyaan Anda";
pub const TUTOR_FAILED: &str = "Terjadi kesalahan saat memproses pertanyaan. Silakan coba lagi.";
pub const STEPS_INSTRUCTION_REQUIRED: &str =
    "Silakan masukkan instruksi yang akan dipecah menjadi langkah-langkah";
pub const STEPS_FAILED: &str =
    "Terjadi kesalahan saat membuat panduan step-by-step. Silakan coba lagi.";

pub const EVALUATE_TEXT_REQUIRED: &str = "Silakan masukkan teks yang akan dievaluasi";
pub const EVALUATE_FAILED: &str =
    "Terjadi kesalahan saat mengevaluasi keterbacaan teks. Silakan coba lagi.";

pub const TUTOR_QUICK_QUESTIONS: [&str; 5] = [
    "Apa maksud asuransi?",
    "Jelaskan tentang subsidi energi",
    "Apa itu investasi?",
    "Bagaimana cara mengisi formulir online?",
    "Apa perbedaan antara tabungan dan investasi?",
];

fn required(
    value: &str,
    field: &'static str,
    message: &'static str,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError { field, message })
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyForm {
    pub text: String,
    pub target_level: TargetLevel,
    pub include_examples: bool,
}

impl Default for SimplifyForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            target_level: TargetLevel::Simple,
            include_examples: true,
        }
    }
}

impl PageForm for SimplifyForm {
    type Request = SimplificationRequest;
    type Response = SimplificationResult;

    const FAILURE_MESSAGE: &'static str = SIMPLIFY_FAILED;

    fn is_ready(&self) -> bool {
        !self.text.trim().is_empty()
    }

    fn to_request(&self) -> Result<Self::Request, ValidationError> {
        Ok(SimplificationRequest {
            text: required(&self.text, "text", SIMPLIFY_TEXT_REQUIRED)?,
            target_level: self.target_level,
            include_examples: self.include_examples,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TutorForm {
    pub question: String,
    pub context: String,
    pub user_level: UserLevel,
}

impl TutorForm {
    /// Fills the question from a quick-question chip and clears any context.
    pub fn apply_quick_question(&mut self, question: &str) {
        self.question = question.to_string();
        self.context.clear();
    }
}

impl PageForm for TutorForm {
    type Request = TutorRequest;
    type Response = TutorResult;

    const FAILURE_MESSAGE: &'static str = TUTOR_FAILED;

    fn is_ready(&self) -> bool {
        !self.question.trim().is_empty()
    }

    fn to_request(&self) -> Result<Self::Request, ValidationError> {
        Ok(TutorRequest {
            question: required(&self.question, "question", TUTOR_QUESTION_REQUIRED)?,
            context: optional(&self.context),
            user_level: self.user_level,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepsForm {
    pub instruction: String,
    pub context: String,
    pub user_level: UserLevel,
}

impl PageForm for StepsForm {
    type Request = StepGuideRequest;
    type Response = StepGuideResult;

    const FAILURE_MESSAGE: &'static str = STEPS_FAILED;

    fn is_ready(&self) -> bool {
        !self.instruction.trim().is_empty()
    }

    fn to_request(&self) -> Result<Self::Request, ValidationError> {
        Ok(StepGuideRequest {
            instruction: required(&self.instruction, "instruction", STEPS_INSTRUCTION_REQUIRED)?,
            context: optional(&self.context),
            user_level: self.user_level,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateForm {
    pub text: String,
    pub metrics: Vec<String>,
}

impl Default for EvaluateForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            metrics: DEFAULT_READABILITY_METRICS
                .iter()
                .map(|metric| metric.to_string())
                .collect(),
        }
    }
}

impl PageForm for EvaluateForm {
    type Request = EvaluationRequest;
    type Response = EvaluationResult;

    const FAILURE_MESSAGE: &'static str = EVALUATE_FAILED;

    fn is_ready(&self) -> bool {
        !self.text.trim().is_empty()
    }

    fn to_request(&self) -> Result<Self::Request, ValidationError> {
        let metrics: Vec<String> = self
            .metrics
            .iter()
            .map(|metric| metric.trim())
            .filter(|metric| !metric.is_empty())
            .map(str::to_string)
            .collect();
        Ok(EvaluationRequest {
            text: required(&self.text, "text", EVALUATE_TEXT_REQUIRED)?,
            metrics: (!metrics.is_empty()).then_some(metrics),
        })
    }
}

pub type SimplifyController = SubmitController<SimplifyForm>;
pub type TutorController = SubmitController<TutorForm>;
pub type StepsController = SubmitController<StepsForm>;
pub type EvaluateController = SubmitController<EvaluateForm>;

#[cfg(test)]
#[path = "tests/forms_tests.rs"]
mod tests;
