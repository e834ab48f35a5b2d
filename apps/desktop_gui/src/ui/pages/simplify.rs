use client_core::{view::simplification_stats, SimplifyController};
use shared::domain::TargetLevel;

use super::{
    field_label, level_picker, multiline, page_title, result_header, status_area, submit_button,
    PageAction,
};

const PLACEHOLDER: &str = "Masukkan teks kompleks yang ingin Anda sederhanakan. Contoh: \
'Pemerintah mengeluarkan peraturan mengenai subsidi energi yang berlaku mulai triwulan kedua.'";

pub fn show(ui: &mut egui::Ui, controller: &mut SimplifyController) -> Option<PageAction> {
    let mut action = None;
    page_title(ui, "Sederhanakan Teks");

    let submitting = controller.is_submitting();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        field_label(ui, "Teks yang akan disederhanakan");
        multiline(ui, &mut controller.form.text, PLACEHOLDER, 6);

        field_label(ui, "Tingkat Kesederhanaan");
        level_picker(
            ui,
            "simplify_target_level",
            &mut controller.form.target_level,
            TargetLevel::ALL,
            TargetLevel::label,
        );
        ui.checkbox(
            &mut controller.form.include_examples,
            "Sertakan contoh penjelasan",
        );

        ui.add_space(8.0);
        if submit_button(
            ui,
            controller.can_submit(),
            submitting,
            "Sederhanakan Teks",
            "Menyederhanakan...",
        ) {
            action = Some(PageAction::Submit);
        }
    });

    status_area(ui, submitting, controller.error_message());

    if let Some(result) = controller.result() {
        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            result_header(ui, "Hasil Penyederhanaan");
            ui.label(egui::RichText::new(&result.simplified_text).size(16.0));
            ui.add_space(8.0);

            ui.columns(3, |columns| {
                for (column, tile) in columns.iter_mut().zip(simplification_stats(result)) {
                    column.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(tile.value).size(18.0).strong());
                        ui.small(tile.label);
                    });
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("📋 Salin Teks").clicked() {
                    action = Some(PageAction::Copy(result.simplified_text.clone()));
                }
                if ui.button("🔊 Dengarkan").clicked() {
                    action = Some(PageAction::Speak(result.simplified_text.clone()));
                }
            });
        });
    }

    action
}
