use super::*;
use serde_json::json;
use shared::domain::TargetLevel;

#[test]
fn processing_time_has_two_decimals_and_seconds_suffix() {
    assert_eq!(format_processing_time(1.0), "1.00s");
    assert_eq!(format_processing_time(0.456), "0.46s");
    assert_eq!(format_processing_time(12.3), "12.30s");
}

#[test]
fn confidence_is_a_whole_percentage() {
    assert_eq!(confidence_percent(0.87), "87%");
    assert_eq!(confidence_percent(1.0), "100%");
    assert_eq!(confidence_caption(0.5), "50% yakin dengan jawaban ini");
}

#[test]
fn stats_show_reduction_time_and_level() {
    let result = SimplificationResult {
        simplified_text: "Aturan baru tentang bantuan energi.".to_string(),
        word_count_reduction: 6,
        processing_time: 2.5,
        simplification_level: TargetLevel::Intermediate,
        original_text: None,
        readability_score: Default::default(),
    };

    let tiles = simplification_stats(&result);
    assert_eq!(tiles[0].value, "6");
    assert_eq!(tiles[1].value, "2.50s");
    assert_eq!(tiles[2].value, "intermediate");
    assert_eq!(tiles[1].label, "Waktu Proses");
}

#[test]
fn steps_keep_server_order_and_own_numbers() {
    let result: StepGuideResult = serde_json::from_value(json!({
        "original_instruction": "Cara membuat akun email baru",
        "steps": [
            {"step_number": 3, "description": "Isi data diri"},
            {"step_number": 1, "description": "Buka situs email"},
            {"step_number": "7", "description": "Verifikasi nomor telepon", "example": "Kode OTP"}
        ]
    }))
    .expect("decode");

    let rendered: Vec<(String, String)> = numbered_steps(&result)
        .map(|step| (step.badge, step.description.to_string()))
        .collect();

    assert_eq!(
        rendered,
        vec![
            ("3".to_string(), "Isi data diri".to_string()),
            ("1".to_string(), "Buka situs email".to_string()),
            ("7".to_string(), "Verifikasi nomor telepon".to_string()),
        ]
    );
}

#[test]
fn blank_examples_are_dropped() {
    let result: StepGuideResult = serde_json::from_value(json!({
        "original_instruction": "Prosedur pembayaran tagihan listrik",
        "steps": [
            {"step_number": 1, "description": "Buka aplikasi", "example": ""},
            {"step_number": 2, "description": "Pilih menu PLN", "example": "   "},
            {"step_number": 3, "description": "Masukkan ID pelanggan", "example": "1234 5678"},
            {"step_number": 4, "description": "Konfirmasi", "example": null}
        ]
    }))
    .expect("decode");

    let examples: Vec<Option<&str>> = numbered_steps(&result).map(|step| step.example).collect();
    assert_eq!(examples, vec![None, None, Some("1234 5678"), None]);
}
