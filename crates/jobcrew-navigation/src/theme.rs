//! Light and dark colour palettes

use serde::Serialize;

use jobcrew_session::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub mode: ThemeMode,
    pub background: &'static str,
    pub text: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        mode: ThemeMode::Light,
        background: "#ffffff",
        text: "#333333",
    };

    pub const DARK: Palette = Palette {
        mode: ThemeMode::Dark,
        background: "#333333",
        text: "#ffffff",
    };

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }
}
