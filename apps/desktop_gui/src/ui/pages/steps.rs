use client_core::{view::numbered_steps, StepsController};
use shared::domain::UserLevel;

use super::{
    field_label, level_picker, multiline, page_title, result_header, status_area, submit_button,
    PageAction,
};

const INSTRUCTION_PLACEHOLDER: &str = "Masukkan instruksi kompleks yang ingin dipecah menjadi \
langkah-langkah kecil. Contoh: 'Cara mengisi formulir pendaftaran online' atau 'Prosedur \
pembayaran tagihan listrik'";
const CONTEXT_PLACEHOLDER: &str = "Berikan konteks tambahan jika diperlukan...";

pub fn show(ui: &mut egui::Ui, controller: &mut StepsController) -> Option<PageAction> {
    let mut action = None;
    page_title(ui, "Panduan Step-by-Step");

    let submitting = controller.is_submitting();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        field_label(ui, "Instruksi yang akan dipecah");
        multiline(
            ui,
            &mut controller.form.instruction,
            INSTRUCTION_PLACEHOLDER,
            4,
        );
        field_label(ui, "Konteks Tambahan (Opsional)");
        multiline(ui, &mut controller.form.context, CONTEXT_PLACEHOLDER, 2);
        field_label(ui, "Tingkat Pengalaman");
        level_picker(
            ui,
            "steps_user_level",
            &mut controller.form.user_level,
            UserLevel::ALL,
            UserLevel::label,
        );

        ui.add_space(8.0);
        if submit_button(
            ui,
            controller.can_submit(),
            submitting,
            "Buat Panduan",
            "Membuat Panduan...",
        ) {
            action = Some(PageAction::Submit);
        }
    });

    status_area(ui, submitting, controller.error_message());

    if let Some(result) = controller.result() {
        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                result_header(ui, "Panduan Step-by-Step");
                if let Some(estimate) = &result.estimated_time {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("🕑 {estimate}"));
                    });
                }
            });

            ui.label(egui::RichText::new("Instruksi Asli:").strong());
            ui.label(egui::RichText::new(&result.original_instruction).italics());
            ui.add_space(8.0);

            for step in numbered_steps(result) {
                ui.horizontal_top(|ui| {
                    ui.label(egui::RichText::new(step.badge).size(18.0).strong());
                    ui.vertical(|ui| {
                        ui.label(step.description);
                        if let Some(example) = step.example {
                            ui.label(egui::RichText::new(example).weak().italics());
                        }
                    });
                });
                ui.add_space(6.0);
            }
        });
    }

    action
}
