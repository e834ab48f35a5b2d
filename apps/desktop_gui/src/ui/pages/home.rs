//! Landing page: hero, feature cards, stat tiles and about text. Static content only.

use super::PageAction;
use crate::ui::header::Route;

pub const HERO_TITLE: &str = "AI Tutor untuk Aksesibilitas Kognitif";
pub const HERO_SUBTITLE: &str = "Membantu orang dengan disabilitas kognitif memahami teks kompleks \
dengan menyederhanakan, merangkum, dan memberikan penjelasan step-by-step.";
pub const CTA_LABEL: &str = "Mulai Sekarang";

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
    pub link_text: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Sederhanakan Teks",
        description: "Ubah artikel kompleks menjadi bahasa yang mudah dipahami dengan AI yang cerdas.",
        route: Route::Simplify,
        link_text: "Coba Sekarang",
    },
    Feature {
        title: "Panduan Step-by-Step",
        description: "Dapatkan instruksi yang dipecah menjadi langkah-langkah kecil yang mudah diikuti.",
        route: Route::Steps,
        link_text: "Lihat Panduan",
    },
    Feature {
        title: "Tutor AI",
        description: "Tanyakan apapun dan dapatkan penjelasan sederhana dengan contoh yang mudah dipahami.",
        route: Route::Tutor,
        link_text: "Mulai Bertanya",
    },
];

pub const STATS: [(&str, &str); 4] = [
    ("1000+", "Teks Disederhanakan"),
    ("500+", "Pengguna Terbantu"),
    ("95%", "Tingkat Kepuasan"),
    ("24/7", "Tersedia Selalu"),
];

const ABOUT: [&str; 2] = [
    "BuddyText adalah AI tutor yang dirancang khusus untuk membantu orang dengan disabilitas \
kognitif seperti disleksia, autism spectrum, atau kesulitan belajar. Kami menggunakan teknologi \
LLaMA untuk menyederhanakan teks kompleks menjadi bahasa yang mudah dipahami.",
    "Dengan fitur text simplification, step-by-step guidance, dan conversational tutor, kami \
berkomitmen untuk membuat informasi lebih mudah diakses oleh semua orang.",
];

pub fn show(ui: &mut egui::Ui) -> Option<PageAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new(HERO_TITLE).size(30.0).strong());
        ui.add_space(8.0);
        ui.label(HERO_SUBTITLE);
        ui.add_space(12.0);
        if ui
            .button(egui::RichText::new(format!("{CTA_LABEL} →")).size(16.0).strong())
            .clicked()
        {
            action = Some(PageAction::Navigate(Route::Simplify));
        }
    });

    ui.add_space(24.0);
    ui.heading("Fitur Utama");
    ui.columns(FEATURES.len(), |columns| {
        for (column, feature) in columns.iter_mut().zip(FEATURES.iter()) {
            egui::Frame::group(column.style()).show(column, |ui| {
                ui.label(egui::RichText::new(feature.title).strong().size(16.0));
                ui.label(feature.description);
                if ui.link(format!("{} →", feature.link_text)).clicked() {
                    action = Some(PageAction::Navigate(feature.route));
                }
            });
        }
    });

    ui.add_space(24.0);
    ui.columns(STATS.len(), |columns| {
        for (column, (number, label)) in columns.iter_mut().zip(STATS) {
            column.vertical_centered(|ui| {
                ui.label(egui::RichText::new(number).size(24.0).strong());
                ui.label(label);
            });
        }
    });

    ui.add_space(24.0);
    ui.heading("Tentang BuddyText");
    for paragraph in ABOUT {
        ui.label(paragraph);
        ui.add_space(4.0);
    }

    action
}
