//! Display formatting for results, shared by the GUI and the CLI.

use shared::protocol::{SimplificationResult, StepGuideResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub value: String,
    pub label: &'static str,
}

/// Seconds with two decimals and a trailing `s`, e.g. `1.23s`.
pub fn format_processing_time(seconds: f64) -> String {
    format!("{seconds:.2}s")
}

pub fn confidence_percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

pub fn confidence_caption(score: f64) -> String {
    format!("{} yakin dengan jawaban ini", confidence_percent(score))
}

pub fn simplification_stats(result: &SimplificationResult) -> [StatTile; 3] {
    [
        StatTile {
            value: result.word_count_reduction.to_string(),
            label: "Kata Berkurang",
        },
        StatTile {
            value: format_processing_time(result.processing_time),
            label: "Waktu Proses",
        },
        StatTile {
            value: result.simplification_level.as_str().to_string(),
            label: "Tingkat Kesederhanaan",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView<'a> {
    pub badge: String,
    pub description: &'a str,
    /// `None` when the server sent no example or a blank one.
    pub example: Option<&'a str>,
}

/// Steps in server order, each labelled with its own `step_number`.
pub fn numbered_steps(result: &StepGuideResult) -> impl Iterator<Item = StepView<'_>> {
    result.steps.iter().map(|step| StepView {
        badge: step.step_number.to_string(),
        description: &step.description,
        example: step
            .example
            .as_deref()
            .map(str::trim)
            .filter(|example| !example.is_empty()),
    })
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
