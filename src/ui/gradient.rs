//! Gradient text rendering.
//!
//! Blends the theme's two endpoint colors across a run of characters or
//! lines using perceptual (OkLab) interpolation. Styling here is strictly
//! best-effort: an unparseable endpoint degrades to unstyled text so content
//! is never withheld over a bad color.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::ui::theme::GradientPalette;
use crate::utils::color::{quantize_color, ColorDepth};

/// Parse `#rgb` or `#rrggbb` into RGB components.
pub fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Color in OkLab space. Linear interpolation here tracks perceived color
/// difference far better than interpolating raw sRGB components.
#[derive(Debug, Clone, Copy)]
struct OkLab {
    l: f64,
    a: f64,
    b: f64,
}

impl OkLab {
    fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        OkLab {
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn rgb_to_oklab(r: u8, g: u8, b: u8) -> OkLab {
    let r = srgb_to_linear(r as f64 / 255.0);
    let g = srgb_to_linear(g as f64 / 255.0);
    let b = srgb_to_linear(b as f64 / 255.0);

    let l = 0.412_221_47 * r + 0.536_332_55 * g + 0.051_445_99 * b;
    let m = 0.211_903_50 * r + 0.680_699_55 * g + 0.107_396_96 * b;
    let s = 0.088_302_46 * r + 0.281_718_84 * g + 0.629_978_70 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    OkLab {
        l: 0.210_454_26 * l_ + 0.793_617_79 * m_ - 0.004_072_05 * s_,
        a: 1.977_998_49 * l_ - 2.428_592_20 * m_ + 0.450_593_71 * s_,
        b: 0.025_904_04 * l_ + 0.782_771_77 * m_ - 0.808_675_77 * s_,
    }
}

fn oklab_to_rgb(lab: OkLab) -> (u8, u8, u8) {
    let l_ = lab.l + 0.396_337_78 * lab.a + 0.215_803_76 * lab.b;
    let m_ = lab.l - 0.105_561_35 * lab.a - 0.063_854_17 * lab.b;
    let s_ = lab.l - 0.089_484_18 * lab.a - 1.291_485_48 * lab.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 4.076_741_66 * l - 3.307_711_59 * m + 0.230_969_94 * s;
    let g = -1.268_438_00 * l + 2.609_757_40 * m - 0.341_319_38 * s;
    let b = -0.004_196_09 * l - 0.703_418_61 * m + 1.707_614_70 * s;

    let to_byte = |c: f64| (linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0).round() as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}

/// Blend the palette endpoints at `ratio` (0.0 = start, 1.0 = end). The
/// endpoints themselves are returned exactly, without a round trip through
/// OkLab.
fn blend(start: (u8, u8, u8), end: (u8, u8, u8), ratio: f64) -> Color {
    if ratio <= 0.0 {
        return Color::Rgb(start.0, start.1, start.2);
    }
    if ratio >= 1.0 {
        return Color::Rgb(end.0, end.1, end.2);
    }
    let lab = rgb_to_oklab(start.0, start.1, start.2).lerp(rgb_to_oklab(end.0, end.1, end.2), ratio);
    let (r, g, b) = oklab_to_rgb(lab);
    Color::Rgb(r, g, b)
}

/// Position-normalized blend ratio: 0 at the first element, 1 at the last,
/// and 0 for a single element (no division by zero).
fn blend_ratio(index: usize, count: usize) -> f64 {
    index as f64 / count.saturating_sub(1).max(1) as f64
}

/// Apply the gradient to text character by character. Each character becomes
/// one bold span colored at its position's blend ratio. Empty input and
/// unparseable endpoints return the text unstyled.
pub fn gradient_chars(text: &str, palette: &GradientPalette, depth: ColorDepth) -> Line<'static> {
    if text.is_empty() {
        return Line::from(String::new());
    }
    let (start, end) = match (parse_hex(&palette.start), parse_hex(&palette.end)) {
        (Some(s), Some(e)) => (s, e),
        _ => return Line::from(text.to_string()),
    };

    let chars: Vec<char> = text.chars().collect();
    let count = chars.len();
    let spans: Vec<Span<'static>> = chars
        .into_iter()
        .enumerate()
        .map(|(i, ch)| {
            let color = quantize_color(blend(start, end, blend_ratio(i, count)), depth);
            Span::styled(
                ch.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

/// Apply the gradient to multi-line text, one color per line. Blank lines
/// stay unstyled so vertical spacing is preserved; the line count of the
/// input is preserved exactly.
pub fn gradient_lines(text: &str, palette: &GradientPalette, depth: ColorDepth) -> Text<'static> {
    let endpoints = (parse_hex(&palette.start), parse_hex(&palette.end));
    let (start, end) = match endpoints {
        (Some(s), Some(e)) => (s, e),
        _ => return Text::from(text.to_string()),
    };

    let lines: Vec<&str> = text.split('\n').collect();
    let count = lines.len();
    let styled: Vec<Line<'static>> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if line.is_empty() {
                return Line::from(String::new());
            }
            let color = quantize_color(blend(start, end, blend_ratio(i, count)), depth);
            Line::styled(line.to_string(), Style::default().fg(color))
        })
        .collect();
    Text::from(styled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> GradientPalette {
        GradientPalette {
            start: "#ff0000".to_string(),
            end: "#0000ff".to_string(),
        }
    }

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_hex("#ff2d55"), Some((255, 45, 85)));
        assert_eq!(parse_hex("#f00"), Some((255, 0, 0)));
        assert_eq!(parse_hex("ff2d55"), None);
        assert_eq!(parse_hex("#zzz"), None);
    }

    #[test]
    fn one_span_per_character() {
        let line = gradient_chars("GOAL!", &palette(), ColorDepth::Truecolor);
        assert_eq!(line.spans.len(), 5);
        for span in &line.spans {
            assert!(span.style.fg.is_some());
            assert!(span.style.add_modifier.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn endpoints_hit_exact_palette_colors() {
        let line = gradient_chars("abc", &palette(), ColorDepth::Truecolor);
        assert_eq!(line.spans.first().unwrap().style.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(line.spans.last().unwrap().style.fg, Some(Color::Rgb(0, 0, 255)));
    }

    #[test]
    fn single_character_uses_start_color() {
        let line = gradient_chars("x", &palette(), ColorDepth::Truecolor);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn empty_input_is_a_noop() {
        let line = gradient_chars("", &palette(), ColorDepth::Truecolor);
        assert_eq!(line.width(), 0);
    }

    #[test]
    fn bad_endpoint_degrades_to_unstyled_text() {
        let bad = GradientPalette {
            start: "not-a-color".to_string(),
            end: "#0000ff".to_string(),
        };
        let line = gradient_chars("hello", &bad, ColorDepth::Truecolor);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style.fg, None);
        assert_eq!(line.spans[0].content.as_ref(), "hello");
    }

    #[test]
    fn line_mode_preserves_count_and_blanks() {
        let text = gradient_lines("first\n\nlast", &palette(), ColorDepth::Truecolor);
        assert_eq!(text.lines.len(), 3);
        assert_eq!(text.lines[1].width(), 0);
        assert_eq!(text.lines[1].style.fg, None);
        assert_eq!(text.lines[0].style.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(text.lines[2].style.fg, Some(Color::Rgb(0, 0, 255)));
    }

    #[test]
    fn line_mode_ratio_is_monotonic() {
        let text = gradient_lines("a\nb\nc\nd", &palette(), ColorDepth::Truecolor);
        let reds: Vec<u8> = text
            .lines
            .iter()
            .map(|l| match l.style.fg {
                Some(Color::Rgb(r, _, _)) => r,
                _ => panic!("expected rgb line style"),
            })
            .collect();
        for pair in reds.windows(2) {
            assert!(pair[0] >= pair[1], "red channel must fall toward the end color");
        }
        assert!(reds.first() > reds.last());
    }

    #[test]
    fn blend_ratio_degenerate_cases() {
        assert_eq!(blend_ratio(0, 1), 0.0);
        assert_eq!(blend_ratio(0, 5), 0.0);
        assert_eq!(blend_ratio(4, 5), 1.0);
    }
}
