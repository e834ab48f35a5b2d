//! Top navigation bar. Stateless: the highlighted entry is derived from the current path.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Simplify,
    Tutor,
    Steps,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Simplify => "/simplify",
            Route::Tutor => "/tutor",
            Route::Steps => "/steps",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        NAV_ITEMS
            .iter()
            .find(|item| item.route.path() == path)
            .map(|item| item.route)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        route: Route::Home,
        label: "Beranda",
    },
    NavItem {
        route: Route::Simplify,
        label: "Sederhanakan",
    },
    NavItem {
        route: Route::Tutor,
        label: "Tutor",
    },
    NavItem {
        route: Route::Steps,
        label: "Panduan",
    },
];

pub const LOGO: &str = "BuddyText";
pub const TAGLINE: &str = "Dibuat dengan ♥ untuk aksesibilitas kognitif";

/// Index of the nav entry whose path equals `path` exactly.
pub fn active_nav_index(path: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| item.route.path() == path)
}

/// Renders the bar and returns the route the user clicked, if any.
pub fn show(ui: &mut egui::Ui, current_path: &str) -> Option<Route> {
    let active = active_nav_index(current_path);
    let mut clicked = None;
    ui.horizontal(|ui| {
        if ui
            .add(egui::Label::new(egui::RichText::new(LOGO).size(22.0).strong()).sense(egui::Sense::click()))
            .clicked()
        {
            clicked = Some(Route::Home);
        }
        ui.add_space(16.0);
        for (index, item) in NAV_ITEMS.iter().enumerate() {
            if ui
                .selectable_label(active == Some(index), item.label)
                .clicked()
            {
                clicked = Some(item.route);
            }
        }
    });
    clicked
}

pub fn show_footer(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.small(egui::RichText::new(TAGLINE).weak());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_exact_path_only() {
        assert_eq!(active_nav_index("/"), Some(0));
        assert_eq!(active_nav_index("/simplify"), Some(1));
        assert_eq!(active_nav_index("/tutor"), Some(2));
        assert_eq!(active_nav_index("/steps"), Some(3));
        assert_eq!(active_nav_index("/steps/"), None);
        assert_eq!(active_nav_index("/unknown"), None);
        assert_eq!(active_nav_index(""), None);
    }

    #[test]
    fn routes_round_trip_through_paths() {
        for item in NAV_ITEMS {
            assert_eq!(Route::from_path(item.route.path()), Some(item.route));
        }
        assert_eq!(Route::from_path("/evaluate"), None);
    }
}
