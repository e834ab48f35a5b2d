use super::*;

#[test]
fn simplify_form_defaults_match_the_page() {
    let form = SimplifyForm::default();
    assert_eq!(form.target_level, TargetLevel::Simple);
    assert!(form.include_examples);
    assert!(!form.is_ready());
}

#[test]
fn simplify_request_trims_text() {
    let form = SimplifyForm {
        text: "  Investasi dalam portofolio yang terdiversifikasi.  ".to_string(),
        target_level: TargetLevel::Advanced,
        include_examples: false,
    };

    let request = form.to_request().expect("valid");
    assert_eq!(request.text, "Investasi dalam portofolio yang terdiversifikasi.");
    assert_eq!(request.target_level, TargetLevel::Advanced);
    assert!(!request.include_examples);
}

#[test]
fn blank_context_becomes_none() {
    let form = StepsForm {
        instruction: "Cara mengisi formulir pendaftaran online".to_string(),
        context: "   ".to_string(),
        user_level: UserLevel::Intermediate,
    };

    let request = form.to_request().expect("valid");
    assert_eq!(request.context, None);
    assert_eq!(request.user_level, UserLevel::Intermediate);

    let form = TutorForm {
        question: "Apa itu investasi?".to_string(),
        context: " untuk pemula ".to_string(),
        user_level: UserLevel::Beginner,
    };
    assert_eq!(
        form.to_request().expect("valid").context.as_deref(),
        Some("untuk pemula")
    );
}

#[test]
fn validation_errors_name_the_required_field() {
    let err = TutorForm::default().to_request().expect_err("blank question");
    assert_eq!(err.field, "question");
    assert_eq!(err.to_string(), TUTOR_QUESTION_REQUIRED);

    let err = StepsForm::default().to_request().expect_err("blank instruction");
    assert_eq!(err.field, "instruction");
    assert_eq!(err.message, STEPS_INSTRUCTION_REQUIRED);
}

#[test]
fn quick_question_replaces_question_and_clears_context() {
    let mut form = TutorForm {
        question: "pertanyaan lama".to_string(),
        context: "konteks lama".to_string(),
        user_level: UserLevel::Advanced,
    };

    form.apply_quick_question(TUTOR_QUICK_QUESTIONS[2]);

    assert_eq!(form.question, "Apa itu investasi?");
    assert!(form.context.is_empty());
    assert_eq!(form.user_level, UserLevel::Advanced);
}

#[test]
fn evaluate_form_drops_blank_metrics_and_omits_empty_list() {
    let mut form = EvaluateForm {
        text: "Aturan baru tentang bantuan energi mulai April.".to_string(),
        ..EvaluateForm::default()
    };
    assert_eq!(
        form.to_request().expect("valid").metrics.map(|m| m.len()),
        Some(3)
    );

    form.metrics = vec!["  ".to_string()];
    assert_eq!(form.to_request().expect("valid").metrics, None);

    form.text.clear();
    assert_eq!(
        form.to_request().expect_err("blank").message,
        EVALUATE_TEXT_REQUIRED
    );
}
