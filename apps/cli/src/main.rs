use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::load_settings,
    forms::{EvaluateForm, SimplifyForm, StepsForm, TutorForm},
    view::{confidence_caption, numbered_steps, simplification_stats},
    BuddyTextClient, PageForm, Phase, SubmitController,
};
use serde::Serialize;
use shared::{
    domain::{TargetLevel, UserLevel},
    protocol::{
        EvaluationRequest, EvaluationResult, SimplificationRequest, SimplificationResult,
        StepGuideRequest, StepGuideResult, TutorRequest, TutorResult,
    },
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "buddytext", about = "Command-line client for the BuddyText simplification API")]
struct Args {
    /// Overrides BUDDYTEXT_API_URL / buddytext.toml.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    /// Print the raw response as JSON.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite text in plainer language.
    Simplify {
        text: Vec<String>,
        #[arg(long, default_value_t = TargetLevel::Simple)]
        level: TargetLevel,
        #[arg(long)]
        no_examples: bool,
    },
    /// Break an instruction into numbered steps.
    Steps {
        instruction: Vec<String>,
        #[arg(long)]
        context: Option<String>,
        #[arg(long, default_value_t = UserLevel::Beginner)]
        level: UserLevel,
    },
    /// Ask the tutor a question.
    Ask {
        question: Vec<String>,
        #[arg(long)]
        context: Option<String>,
        #[arg(long, default_value_t = UserLevel::Beginner)]
        level: UserLevel,
    },
    /// Score how readable a text is.
    Evaluate {
        text: Vec<String>,
        #[arg(long = "metric")]
        metrics: Vec<String>,
    },
    /// Probe every health endpoint.
    Health,
    /// Run the fixed demo scenarios against the backend.
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings()
        .with_api_base_url(args.api_url)
        .with_timeout_secs(args.timeout_secs)
        .validated()
        .context("invalid client settings")?;
    tracing::debug!(base_url = %settings.api_base_url, "using API");
    let client = BuddyTextClient::new(&settings).context("failed to build API client")?;

    match args.command {
        Command::Simplify {
            text,
            level,
            no_examples,
        } => {
            let mut controller = SubmitController::new(SimplifyForm {
                text: text.join(" "),
                target_level: level,
                include_examples: !no_examples,
            });
            controller
                .submit_with(|req: SimplificationRequest| async move {
                    client.simplification.simplify_text(&req).await
                })
                .await;
            finish(&controller, args.json, render_simplification)
        }
        Command::Steps {
            instruction,
            context,
            level,
        } => {
            let mut controller = SubmitController::new(StepsForm {
                instruction: instruction.join(" "),
                context: context.unwrap_or_default(),
                user_level: level,
            });
            controller
                .submit_with(|req: StepGuideRequest| async move {
                    client.steps.create_guide(&req).await
                })
                .await;
            finish(&controller, args.json, render_steps)
        }
        Command::Ask {
            question,
            context,
            level,
        } => {
            let mut controller = SubmitController::new(TutorForm {
                question: question.join(" "),
                context: context.unwrap_or_default(),
                user_level: level,
            });
            controller
                .submit_with(|req: TutorRequest| async move {
                    client.tutor.ask_question(&req).await
                })
                .await;
            finish(&controller, args.json, render_tutor)
        }
        Command::Evaluate { text, metrics } => {
            let mut form = EvaluateForm {
                text: text.join(" "),
                ..EvaluateForm::default()
            };
            if !metrics.is_empty() {
                form.metrics = metrics;
            }
            let mut controller = SubmitController::new(form);
            controller
                .submit_with(|req: EvaluationRequest| async move {
                    client.evaluation.evaluate_readability(&req).await
                })
                .await;
            finish(&controller, args.json, render_evaluation)
        }
        Command::Health => run_health(&client).await,
        Command::Demo => {
            run_demo(&client).await;
            Ok(())
        }
    }
}

fn finish<F>(
    controller: &SubmitController<F>,
    json: bool,
    render: fn(&F::Response) -> String,
) -> Result<()>
where
    F: PageForm,
    F::Response: Serialize,
{
    match controller.phase() {
        Phase::Succeeded(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                println!("{}", render(result));
            }
            Ok(())
        }
        Phase::Idle {
            validation: Some(err),
        } => bail!("{}", err.message),
        Phase::Failed(message) => bail!("{message}"),
        Phase::Idle { validation: None } | Phase::Submitting(_) => {
            bail!("request did not complete")
        }
    }
}

fn render_simplification(result: &SimplificationResult) -> String {
    let stats = simplification_stats(result)
        .iter()
        .map(|tile| format!("{}: {}", tile.label, tile.value))
        .collect::<Vec<_>>()
        .join(" | ");
    let mut out = format!(
        "Hasil Penyederhanaan\n\n{}\n\n{stats}",
        result.simplified_text
    );
    for (metric, score) in &result.readability_score {
        out.push_str(&format!("\n  {metric}: {score:.2}"));
    }
    out
}

fn render_steps(result: &StepGuideResult) -> String {
    let estimate = result
        .estimated_time
        .as_ref()
        .map(|estimate| format!(" ({estimate})"))
        .unwrap_or_default();
    let mut lines = vec![
        format!("Panduan Step-by-Step{estimate}"),
        String::new(),
        format!("Instruksi Asli: {}", result.original_instruction),
        String::new(),
    ];
    for step in numbered_steps(result) {
        lines.push(format!("{:>3}. {}", step.badge, step.description));
        if let Some(example) = step.example {
            lines.push(format!("     Contoh: {example}"));
        }
    }
    lines.join("\n").trim_end().to_string()
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_tutor(result: &TutorResult) -> String {
    let mut sections = vec![
        format!("Jawaban AI Tutor\n\n{}", result.answer),
        format!("Penjelasan Detail\n{}", result.explanation),
    ];
    if !result.examples.is_empty() {
        sections.push(format!("Contoh\n{}", bullet_list(&result.examples)));
    }
    if !result.related_concepts.is_empty() {
        sections.push(format!(
            "Konsep Terkait: {}",
            result.related_concepts.join(", ")
        ));
    }
    sections.push(format!(
        "Tingkat Kepercayaan: {}",
        confidence_caption(result.confidence_score)
    ));
    sections.join("\n\n")
}

fn render_evaluation(result: &EvaluationResult) -> String {
    let mut out = format!("Tingkat Kelas: {}", result.grade_level);
    for (metric, score) in &result.metrics {
        out.push_str(&format!("\n  {metric}: {score:.2}"));
    }
    if !result.recommendations.is_empty() {
        out.push_str(&format!(
            "\n\nRekomendasi\n{}",
            bullet_list(&result.recommendations)
        ));
    }
    out
}

async fn run_health(client: &BuddyTextClient) -> Result<()> {
    let probes = client.health.probe_all().await;
    let mut failures = 0usize;
    for probe in &probes {
        match &probe.outcome {
            Ok(status) => println!("ok    {:<24} {}", probe.endpoint.path, status.status),
            Err(err) => {
                failures += 1;
                println!("fail  {:<24} {err}", probe.endpoint.path);
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} health checks failed", probes.len());
    }
    Ok(())
}

const DEMO_TEXTS: [&str; 3] = [
    "Pemerintah mengeluarkan peraturan mengenai subsidi energi yang berlaku mulai triwulan kedua.",
    "Investasi dalam portofolio yang terdiversifikasi dapat mengurangi risiko kehilangan modal secara signifikan.",
    "Proses verifikasi identitas melalui sistem biometrik memerlukan persetujuan eksplisit dari pengguna.",
];

const DEMO_INSTRUCTIONS: [(&str, &str); 3] = [
    (
        "Cara mengisi formulir pendaftaran online",
        "Formulir untuk mendaftar ke universitas",
    ),
    (
        "Prosedur pembayaran tagihan listrik",
        "Menggunakan aplikasi mobile banking",
    ),
    ("Cara membuat akun email baru", "Untuk keperluan pekerjaan"),
];

const DEMO_READABILITY_TEXTS: [&str; 3] = [
    "Pemerintah mengeluarkan peraturan mengenai subsidi energi yang berlaku mulai triwulan kedua.",
    "Pemerintah membuat aturan baru tentang bantuan biaya energi. Aturan ini mulai berlaku bulan April.",
    "Aturan baru tentang bantuan energi mulai April.",
];

/// Walks every capability with fixed inputs; failures are reported and the run continues.
async fn run_demo(client: &BuddyTextClient) {
    println!("== Health");
    if let Err(err) = run_health(client).await {
        println!("{err}");
    }

    println!("\n== Simplification");
    for text in DEMO_TEXTS {
        let request = SimplificationRequest {
            text: text.to_string(),
            target_level: TargetLevel::Simple,
            include_examples: true,
        };
        println!("\n> {text}");
        match client.simplification.simplify_text(&request).await {
            Ok(result) => println!("{}", render_simplification(&result)),
            Err(err) => println!("error: {err}"),
        }
    }

    println!("\n== Step-by-step guides");
    for (instruction, context) in DEMO_INSTRUCTIONS {
        let request = StepGuideRequest {
            instruction: instruction.to_string(),
            context: Some(context.to_string()),
            user_level: UserLevel::Beginner,
        };
        println!("\n> {instruction} ({context})");
        match client.steps.create_guide(&request).await {
            Ok(result) => println!("{}", render_steps(&result)),
            Err(err) => println!("error: {err}"),
        }
    }

    println!("\n== Tutor");
    for question in client_core::forms::TUTOR_QUICK_QUESTIONS {
        let request = TutorRequest {
            question: question.to_string(),
            context: None,
            user_level: UserLevel::Beginner,
        };
        println!("\n> {question}");
        match client.tutor.ask_question(&request).await {
            Ok(result) => println!("{}", render_tutor(&result)),
            Err(err) => println!("error: {err}"),
        }
    }

    println!("\n== Readability");
    for text in DEMO_READABILITY_TEXTS {
        println!("\n> {text}");
        match client
            .evaluation
            .evaluate_readability(&EvaluationRequest::with_default_metrics(text))
            .await
        {
            Ok(result) => println!("{}", render_evaluation(&result)),
            Err(err) => println!("error: {err}"),
        }
    }
}
