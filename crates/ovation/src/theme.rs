use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub panel: Color32,
    pub panel_border: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub small_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x0F, 0x17, 0x2A),
            panel: Color32::from_rgb(0x1E, 0x29, 0x3B),
            panel_border: Color32::from_rgb(0x33, 0x41, 0x55),
            foreground: Color32::from_rgb(0xCB, 0xD5, 0xE1),
            muted: Color32::from_rgb(0x94, 0xA3, 0xB8),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x2D, 0xD4, 0xBF),
            positive: Color32::from_rgb(0x10, 0xB9, 0x81),
            negative: Color32::from_rgb(0xEF, 0x44, 0x44),
            title_size: 88.0,
            heading_size: 56.0,
            body_size: 30.0,
            small_size: 22.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF8, 0xFA, 0xFC),
            panel: Color32::WHITE,
            panel_border: Color32::from_rgb(0xCB, 0xD5, 0xE1),
            foreground: Color32::from_rgb(0x1E, 0x29, 0x3B),
            muted: Color32::from_rgb(0x64, 0x74, 0x8B),
            heading_color: Color32::from_rgb(0x0F, 0x17, 0x2A),
            accent: Color32::from_rgb(0x0D, 0x94, 0x88),
            positive: Color32::from_rgb(0x04, 0x78, 0x57),
            negative: Color32::from_rgb(0xB9, 0x1C, 0x1C),
            title_size: 88.0,
            heading_size: 56.0,
            body_size: 30.0,
            small_size: 22.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }

    /// Resolve a slide's opaque accent token to a display color.
    /// Unrecognized tokens fall back to the theme accent; the token is
    /// cosmetic and never affects behavior.
    pub fn slide_accent(&self, token: Option<&str>) -> Color32 {
        let dark = self.name == "dark";
        match token {
            Some("teal") => pick(dark, (0x2D, 0xD4, 0xBF), (0x0D, 0x94, 0x88)),
            Some("blue") => pick(dark, (0x60, 0xA5, 0xFA), (0x1D, 0x4E, 0xD8)),
            Some("indigo") => pick(dark, (0x81, 0x8C, 0xF8), (0x43, 0x38, 0xCA)),
            Some("purple") => pick(dark, (0xC0, 0x84, 0xFC), (0x7E, 0x22, 0xCE)),
            Some("pink") => pick(dark, (0xF4, 0x72, 0xB6), (0xBE, 0x18, 0x5D)),
            Some("red") => pick(dark, (0xF8, 0x71, 0x71), (0xB9, 0x1C, 0x1C)),
            Some("orange") => pick(dark, (0xFB, 0x92, 0x3C), (0xC2, 0x41, 0x0C)),
            Some("amber") => pick(dark, (0xFB, 0xBF, 0x24), (0xB4, 0x53, 0x09)),
            Some("lime") => pick(dark, (0xA3, 0xE6, 0x35), (0x4D, 0x7C, 0x0F)),
            Some("emerald") => pick(dark, (0x34, 0xD3, 0x99), (0x04, 0x78, 0x57)),
            Some("cyan") => pick(dark, (0x67, 0xE8, 0xF9), (0x0E, 0x74, 0x90)),
            _ => self.accent,
        }
    }
}

fn pick(dark: bool, d: (u8, u8, u8), l: (u8, u8, u8)) -> Color32 {
    let (r, g, b) = if dark { d } else { l };
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_round_trips() {
        let theme = Theme::dark();
        assert_eq!(theme.toggled().name, "light");
        assert_eq!(theme.toggled().toggled().name, "dark");
    }

    #[test]
    fn unknown_accent_token_falls_back_to_theme_accent() {
        let theme = Theme::dark();
        assert_eq!(theme.slide_accent(Some("chartreuse-ish")), theme.accent);
        assert_eq!(theme.slide_accent(None), theme.accent);
    }

    #[test]
    fn known_tokens_resolve_per_theme() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_ne!(dark.slide_accent(Some("red")), light.slide_accent(Some("red")));
    }
}
