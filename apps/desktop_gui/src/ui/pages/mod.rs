//! Page bodies and the widgets they share.

pub mod home;
pub mod simplify;
pub mod steps;
pub mod tutor;

use crate::ui::header::Route;

/// What a page asks the app shell to do after a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    Navigate(Route),
    Submit,
    Copy(String),
    Speak(String),
}

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xDC, 0x26, 0x26);
const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x10, 0xB9, 0x81);

pub(crate) fn page_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.heading(egui::RichText::new(title).strong());
    ui.add_space(12.0);
}

pub(crate) fn field_label(ui: &mut egui::Ui, label: &str) {
    ui.label(egui::RichText::new(label).strong());
}

pub(crate) fn multiline(ui: &mut egui::Ui, value: &mut String, hint: &str, rows: usize) {
    ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(rows)
            .desired_width(f32::INFINITY),
    );
}

pub(crate) fn level_picker<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut T,
    all: &[T],
    label: fn(T) -> &'static str,
) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(label(*value))
        .show_ui(ui, |ui| {
            for option in all {
                ui.selectable_value(value, *option, label(*option));
            }
        });
}

/// Submit button: disabled while submitting or while the required field is blank.
pub(crate) fn submit_button(
    ui: &mut egui::Ui,
    enabled: bool,
    submitting: bool,
    idle_label: &str,
    busy_label: &str,
) -> bool {
    let text = if submitting { busy_label } else { idle_label };
    ui.add_enabled(enabled, egui::Button::new(egui::RichText::new(text).strong()))
        .clicked()
}

pub(crate) fn status_area(ui: &mut egui::Ui, submitting: bool, error: Option<&str>) {
    if let Some(message) = error {
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.colored_label(ERROR_COLOR, format!("⚠ {message}"));
        });
    }
    if submitting {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
        });
    }
}

pub(crate) fn result_header(ui: &mut egui::Ui, title: &str) {
    ui.horizontal(|ui| {
        ui.colored_label(SUCCESS_COLOR, "✔");
        ui.label(egui::RichText::new(title).size(18.0).strong());
    });
    ui.add_space(6.0);
}

pub(crate) fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(title).strong());
}
