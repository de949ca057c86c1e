use ratatui::style::{Color, Modifier, Style};

use crate::ui::appearance::{detect_appearance, Appearance};
use crate::utils::color::{detect_color_depth, quantize_style, ColorDepth};

/// Two-color endpoint palette for gradient rendering, kept as hex strings so
/// rendering can degrade to unstyled text when an endpoint fails to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientPalette {
    pub start: String,
    pub end: String,
}

impl GradientPalette {
    /// Endpoint pair adapted to the terminal background. An inconclusive
    /// detection falls back to the dark pair, never an error.
    pub fn adaptive(appearance: Option<Appearance>) -> Self {
        match appearance.unwrap_or(Appearance::Dark) {
            Appearance::Dark => GradientPalette {
                start: "#ff2d55".to_string(),
                end: "#2de2e6".to_string(),
            },
            Appearance::Light => GradientPalette {
                start: "#b3003c".to_string(),
                end: "#00626e".to_string(),
            },
        }
    }
}

/// Immutable style bundle constructed once per appearance change and passed
/// explicitly to every rendering call. Styles are computed up front; render
/// paths only read them.
#[derive(Debug, Clone)]
pub struct Theme {
    pub appearance: Appearance,
    pub color_depth: ColorDepth,
    pub gradient: GradientPalette,

    pub panel_border_style: Style,
    pub panel_title_style: Style,
    pub separator_style: Style,

    pub header_style: Style,
    pub label_style: Style,
    pub value_style: Style,
    pub team_style: Style,
    pub live_style: Style,
    pub finished_style: Style,
    pub minute_style: Style,
    pub dim_style: Style,
    pub list_highlight_style: Style,

    pub dialog_border_style: Style,
    pub dialog_title_style: Style,
    pub dialog_help_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            appearance: Appearance::Dark,
            color_depth: ColorDepth::Truecolor,
            gradient: GradientPalette::adaptive(Some(Appearance::Dark)),

            panel_border_style: Style::default().fg(Color::Rgb(45, 226, 230)),
            panel_title_style: Style::default()
                .fg(Color::Rgb(255, 45, 85))
                .add_modifier(Modifier::BOLD),
            separator_style: Style::default().fg(Color::Rgb(255, 45, 85)),

            header_style: Style::default()
                .fg(Color::Rgb(45, 226, 230))
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::Rgb(130, 130, 150)),
            value_style: Style::default().fg(Color::Rgb(235, 235, 245)),
            team_style: Style::default()
                .fg(Color::Rgb(45, 226, 230))
                .add_modifier(Modifier::BOLD),
            live_style: Style::default()
                .fg(Color::Rgb(255, 45, 85))
                .add_modifier(Modifier::BOLD),
            finished_style: Style::default().fg(Color::Rgb(130, 130, 150)),
            minute_style: Style::default().fg(Color::Rgb(255, 214, 10)),
            dim_style: Style::default().fg(Color::Rgb(130, 130, 150)),
            list_highlight_style: Style::default()
                .fg(Color::Rgb(255, 45, 85))
                .add_modifier(Modifier::BOLD),

            dialog_border_style: Style::default().fg(Color::Rgb(45, 226, 230)),
            dialog_title_style: Style::default()
                .fg(Color::Rgb(255, 45, 85))
                .add_modifier(Modifier::BOLD),
            dialog_help_style: Style::default()
                .fg(Color::Rgb(130, 130, 150))
                .add_modifier(Modifier::ITALIC),
        }
    }

    pub fn light() -> Self {
        Theme {
            appearance: Appearance::Light,
            color_depth: ColorDepth::Truecolor,
            gradient: GradientPalette::adaptive(Some(Appearance::Light)),

            panel_border_style: Style::default().fg(Color::Rgb(0, 98, 110)),
            panel_title_style: Style::default()
                .fg(Color::Rgb(179, 0, 60))
                .add_modifier(Modifier::BOLD),
            separator_style: Style::default().fg(Color::Rgb(179, 0, 60)),

            header_style: Style::default()
                .fg(Color::Rgb(0, 98, 110))
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::Rgb(110, 110, 120)),
            value_style: Style::default().fg(Color::Rgb(30, 30, 40)),
            team_style: Style::default()
                .fg(Color::Rgb(0, 98, 110))
                .add_modifier(Modifier::BOLD),
            live_style: Style::default()
                .fg(Color::Rgb(179, 0, 60))
                .add_modifier(Modifier::BOLD),
            finished_style: Style::default().fg(Color::Rgb(110, 110, 120)),
            minute_style: Style::default().fg(Color::Rgb(146, 100, 0)),
            dim_style: Style::default().fg(Color::Rgb(110, 110, 120)),
            list_highlight_style: Style::default()
                .fg(Color::Rgb(179, 0, 60))
                .add_modifier(Modifier::BOLD),

            dialog_border_style: Style::default().fg(Color::Rgb(0, 98, 110)),
            dialog_title_style: Style::default()
                .fg(Color::Rgb(179, 0, 60))
                .add_modifier(Modifier::BOLD),
            dialog_help_style: Style::default()
                .fg(Color::Rgb(110, 110, 120))
                .add_modifier(Modifier::ITALIC),
        }
    }

    pub fn for_appearance(appearance: Option<Appearance>) -> Self {
        match appearance.unwrap_or(Appearance::Dark) {
            Appearance::Dark => Self::dark_default(),
            Appearance::Light => Self::light(),
        }
    }

    /// Build the theme for the current terminal: detect background appearance
    /// (honoring an explicit override), then quantize styles to the detected
    /// color depth. `name` accepts "light", "dark", or anything else for auto.
    pub fn detect(name: Option<&str>) -> Self {
        let appearance = match name.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("light") => Some(Appearance::Light),
            Some("dark") => Some(Appearance::Dark),
            _ => detect_appearance(),
        };
        Self::for_appearance(appearance).quantized(detect_color_depth())
    }

    /// Re-map every style to the given color depth. Gradient endpoints stay in
    /// hex; blended colors are quantized at render time instead.
    pub fn quantized(mut self, depth: ColorDepth) -> Self {
        self.color_depth = depth;
        if depth == ColorDepth::Truecolor {
            return self;
        }
        self.panel_border_style = quantize_style(self.panel_border_style, depth);
        self.panel_title_style = quantize_style(self.panel_title_style, depth);
        self.separator_style = quantize_style(self.separator_style, depth);
        self.header_style = quantize_style(self.header_style, depth);
        self.label_style = quantize_style(self.label_style, depth);
        self.value_style = quantize_style(self.value_style, depth);
        self.team_style = quantize_style(self.team_style, depth);
        self.live_style = quantize_style(self.live_style, depth);
        self.finished_style = quantize_style(self.finished_style, depth);
        self.minute_style = quantize_style(self.minute_style, depth);
        self.dim_style = quantize_style(self.dim_style, depth);
        self.list_highlight_style = quantize_style(self.list_highlight_style, depth);
        self.dialog_border_style = quantize_style(self.dialog_border_style, depth);
        self.dialog_title_style = quantize_style(self.dialog_title_style, depth);
        self.dialog_help_style = quantize_style(self.dialog_help_style, depth);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_palette_defaults_to_dark_pair() {
        let inconclusive = GradientPalette::adaptive(None);
        let dark = GradientPalette::adaptive(Some(Appearance::Dark));
        assert_eq!(inconclusive, dark);
    }

    #[test]
    fn palettes_differ_per_appearance() {
        let dark = GradientPalette::adaptive(Some(Appearance::Dark));
        let light = GradientPalette::adaptive(Some(Appearance::Light));
        assert_ne!(dark, light);
    }

    #[test]
    fn quantized_theme_carries_no_rgb_at_16_colors() {
        let theme = Theme::dark_default().quantized(ColorDepth::X16);
        for style in [
            theme.panel_border_style,
            theme.panel_title_style,
            theme.team_style,
            theme.live_style,
        ] {
            assert!(!matches!(style.fg, Some(Color::Rgb(..))));
        }
    }
}
