use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // Appearance
    pub theme: Theme,
    pub accent_color: AccentColor,

    // Slideshow timing
    /// Seconds between automatic advances.
    pub autoplay_interval: f32,
    /// Seconds between revealed caption characters.
    pub typing_interval: f32,

    // Sidebar
    pub show_sidebar: bool,
    pub sidebar_width: f32,

    // Session
    pub restore_session: bool,
    pub last_deck: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            accent_color: AccentColor::Blue,

            autoplay_interval: 5.0,
            typing_interval: 0.07,

            show_sidebar: true,
            sidebar_width: 220.0,

            restore_session: true,
            last_deck: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccentColor {
    Blue,
    Purple,
    Green,
    Orange,
    Red,
}

impl AccentColor {
    pub fn to_color(self) -> egui::Color32 {
        match self {
            AccentColor::Blue => egui::Color32::from_rgb(70, 130, 255),
            AccentColor::Purple => egui::Color32::from_rgb(160, 90, 255),
            AccentColor::Green => egui::Color32::from_rgb(50, 205, 100),
            AccentColor::Orange => egui::Color32::from_rgb(255, 150, 50),
            AccentColor::Red => egui::Color32::from_rgb(255, 80, 80),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "vitrine", "Vitrine") {
            let config_path = proj_dirs.config_dir().join("settings.json");
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(settings) = serde_json::from_str(&content) {
                        return settings;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "vitrine", "Vitrine") {
            let config_dir = proj_dirs.config_dir();
            let _ = std::fs::create_dir_all(config_dir);
            let config_path = config_dir.join("settings.json");
            if let Ok(content) = serde_json::to_string_pretty(self) {
                let _ = std::fs::write(config_path, content);
            }
        }
    }
}
