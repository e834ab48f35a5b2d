use client_core::{
    forms::TUTOR_QUICK_QUESTIONS,
    view::{confidence_caption, confidence_percent},
    TutorController,
};
use shared::domain::UserLevel;

use super::{
    field_label, level_picker, multiline, page_title, result_header, section_title, status_area,
    submit_button, PageAction,
};

const QUESTION_PLACEHOLDER: &str = "Tanyakan apapun yang ingin Anda ketahui. Contoh: \
'Apa maksud kata asuransi?' atau 'Bagaimana cara mengisi formulir online?'";
const CONTEXT_PLACEHOLDER: &str = "Berikan konteks tambahan jika diperlukan...";

pub fn show(ui: &mut egui::Ui, controller: &mut TutorController) -> Option<PageAction> {
    let mut action = None;
    page_title(ui, "AI Tutor");

    let submitting = controller.is_submitting();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        field_label(ui, "Pertanyaan Cepat");
        ui.horizontal_wrapped(|ui| {
            for question in TUTOR_QUICK_QUESTIONS {
                if ui.add_enabled(!submitting, egui::Button::new(question)).clicked() {
                    controller.form.apply_quick_question(question);
                }
            }
        });
    });

    ui.add_space(8.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        field_label(ui, "Pertanyaan Anda");
        multiline(ui, &mut controller.form.question, QUESTION_PLACEHOLDER, 4);
        field_label(ui, "Konteks (Opsional)");
        multiline(ui, &mut controller.form.context, CONTEXT_PLACEHOLDER, 2);
        field_label(ui, "Tingkat Pemahaman");
        level_picker(
            ui,
            "tutor_user_level",
            &mut controller.form.user_level,
            UserLevel::ALL,
            UserLevel::label,
        );

        ui.add_space(8.0);
        if submit_button(ui, controller.can_submit(), submitting, "Tanyakan", "Memproses...") {
            action = Some(PageAction::Submit);
        }
    });

    status_area(ui, submitting, controller.error_message());

    if let Some(result) = controller.result() {
        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            result_header(ui, "Jawaban AI Tutor");
            ui.label(egui::RichText::new(&result.answer).size(16.0));

            section_title(ui, "💡 Penjelasan Detail");
            ui.label(result.explanation.as_str());

            if !result.examples.is_empty() {
                section_title(ui, "📖 Contoh");
                for example in &result.examples {
                    ui.label(format!("• {example}"));
                }
            }

            if !result.related_concepts.is_empty() {
                section_title(ui, "Konsep Terkait");
                ui.horizontal_wrapped(|ui| {
                    for concept in &result.related_concepts {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.small(concept.as_str());
                        });
                    }
                });
            }

            section_title(ui, "Tingkat Kepercayaan");
            ui.small(confidence_caption(result.confidence_score));
            ui.add(
                egui::ProgressBar::new(result.confidence_score as f32)
                    .text(confidence_percent(result.confidence_score)),
            );
        });
    }

    action
}
