use eframe::egui;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn egui_theme(self) -> egui::Theme {
        match self {
            Self::Light => egui::Theme::Light,
            Self::Dark => egui::Theme::Dark,
        }
    }

    pub fn from_system(theme: egui::Theme) -> Self {
        match theme {
            egui::Theme::Light => Self::Light,
            egui::Theme::Dark => Self::Dark,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }
}

pub fn load_theme(storage: Option<&dyn eframe::Storage>) -> Option<Theme> {
    let raw = storage?.get_string(THEME_KEY)?;
    let theme = Theme::parse(&raw);
    if theme.is_none() {
        log::warn!("ignoring unknown stored theme `{raw}`");
    }
    theme
}

pub fn store_theme(storage: &mut dyn eframe::Storage, theme: Theme) {
    storage.set_string(THEME_KEY, theme.as_str().to_owned());
}

pub fn resolve_theme(explicit: Option<Theme>, stored: Option<Theme>) -> Option<Theme> {
    explicit.or(stored)
}

pub fn theme_preference(theme: Option<Theme>) -> egui::ThemePreference {
    match theme {
        Some(theme) => theme.egui_theme().into(),
        None => egui::ThemePreference::System,
    }
}
