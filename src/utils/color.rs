use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    Truecolor,
    X256,
    X16,
}

/// Detect terminal color depth from environment.
/// Priority: COLORTERM truecolor/24bit -> TERM *256color -> fallback 16.
pub fn detect_color_depth() -> ColorDepth {
    // Allow override for testing/advanced users
    if let Ok(force) = std::env::var("MATCHDAY_COLOR") {
        match force.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "24-bit" => return ColorDepth::Truecolor,
            "256" | "x256" | "256color" => return ColorDepth::X256,
            "16" | "ansi" | "x16" => return ColorDepth::X16,
            _ => {}
        }
    }

    if let Ok(colorterm) = std::env::var("COLORTERM") {
        let s = colorterm.to_ascii_lowercase();
        if s.contains("truecolor") || s.contains("24bit") || s.contains("24-bit") {
            return ColorDepth::Truecolor;
        }
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.to_ascii_lowercase().contains("256color") {
            return ColorDepth::X256;
        }
    }
    ColorDepth::X16
}

/// Map a Color to the nearest representable color in the chosen depth.
pub fn quantize_color(color: Color, depth: ColorDepth) -> Color {
    match depth {
        ColorDepth::Truecolor => color,
        ColorDepth::X256 => match color {
            Color::Rgb(r, g, b) => Color::Indexed(rgb_to_xterm256(r, g, b)),
            other => other,
        },
        ColorDepth::X16 => match color {
            Color::Rgb(r, g, b) => nearest_ansi16_from_rgb(r, g, b),
            Color::Indexed(i) => {
                let (r, g, b) = xterm256_to_rgb(i);
                nearest_ansi16_from_rgb(r, g, b)
            }
            other => other,
        },
    }
}

pub fn quantize_style(mut style: Style, depth: ColorDepth) -> Style {
    if let Some(fg) = style.fg {
        style.fg = Some(quantize_color(fg, depth));
    }
    if let Some(bg) = style.bg {
        style.bg = Some(quantize_color(bg, depth));
    }
    style
}

fn nearest_ansi16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    // 16-color palette approximations (RGB): 0..7 standard, 8..15 bright
    const ANSI16: &[(u8, u8, u8, Color); 16] = &[
        (0, 0, 0, Color::Black),
        (205, 0, 0, Color::Red),
        (0, 205, 0, Color::Green),
        (205, 205, 0, Color::Yellow),
        (0, 0, 205, Color::Blue),
        (205, 0, 205, Color::Magenta),
        (0, 205, 205, Color::Cyan),
        (192, 192, 192, Color::Gray),
        (128, 128, 128, Color::DarkGray),
        (255, 0, 0, Color::LightRed),
        (0, 255, 0, Color::LightGreen),
        (255, 255, 0, Color::LightYellow),
        (92, 92, 255, Color::LightBlue),
        (255, 0, 255, Color::LightMagenta),
        (0, 255, 255, Color::LightCyan),
        (255, 255, 255, Color::White),
    ];

    let mut best = 0usize;
    let mut best_dist = u32::MAX;
    for (i, &(rr, gg, bb, _)) in ANSI16.iter().enumerate() {
        let dist = color_dist_sq(r, g, b, rr, gg, bb);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    ANSI16[best].3
}

fn rgb_to_xterm256(r: u8, g: u8, b: u8) -> u8 {
    // Try the 6x6x6 color cube and the grayscale ramp, pick nearest overall
    let cube_index = rgb_to_xterm_cube_index(r, g, b);
    let (cr, cg, cb) = xterm256_to_rgb(cube_index);
    let cube_dist = color_dist_sq(r, g, b, cr, cg, cb);

    let gray_index = rgb_to_xterm_gray_index(r, g, b);
    let (gr, gg, gb) = xterm256_to_rgb(gray_index);
    let gray_dist = color_dist_sq(r, g, b, gr, gg, gb);

    if gray_dist < cube_dist {
        gray_index
    } else {
        cube_index
    }
}

fn rgb_to_xterm_cube_index(r: u8, g: u8, b: u8) -> u8 {
    fn map_comp(c: u8) -> u8 {
        if c < 48 {
            0
        } else if c < 114 {
            1
        } else {
            ((c - 35) / 40).min(5)
        }
    }
    16 + 36 * map_comp(r) + 6 * map_comp(g) + map_comp(b)
}

fn rgb_to_xterm_gray_index(r: u8, g: u8, b: u8) -> u8 {
    let avg = (r as u16 + g as u16 + b as u16) / 3;
    let idx = if avg <= 3 {
        16
    } else {
        ((avg.saturating_sub(8)) / 10) as u8
    };
    232 + idx.min(23)
}

fn color_dist_sq(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> u32 {
    let dr = r1 as i32 - r2 as i32;
    let dg = g1 as i32 - g2 as i32;
    let db = b1 as i32 - b2 as i32;
    (dr * dr + dg * dg + db * db) as u32
}

fn xterm_cube_comp(i: u8) -> u8 {
    if i == 0 {
        0
    } else {
        55 + 40 * i
    }
}

pub fn xterm256_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0 => (0, 0, 0),
        1 => (205, 0, 0),
        2 => (0, 205, 0),
        3 => (205, 205, 0),
        4 => (0, 0, 205),
        5 => (205, 0, 205),
        6 => (0, 205, 205),
        7 => (229, 229, 229),
        8 => (127, 127, 127),
        9 => (255, 0, 0),
        10 => (0, 255, 0),
        11 => (255, 255, 0),
        12 => (92, 92, 255),
        13 => (255, 0, 255),
        14 => (0, 255, 255),
        15 => (255, 255, 255),
        16..=231 => {
            let mut n = i - 16;
            let r = n / 36;
            n %= 36;
            let g = n / 6;
            n %= 6;
            (xterm_cube_comp(r), xterm_cube_comp(g), xterm_cube_comp(n))
        }
        232..=255 => {
            let v = 8 + 10 * (i - 232);
            (v, v, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truecolor_passes_rgb_through() {
        let c = Color::Rgb(250, 10, 10);
        assert_eq!(quantize_color(c, ColorDepth::Truecolor), c);
    }

    #[test]
    fn quantize_rgb_to_256_index() {
        let idx = rgb_to_xterm256(255, 0, 0);
        assert!(idx == 9 || (16..=231).contains(&idx));
    }

    #[test]
    fn quantize_rgb_to_ansi16() {
        let c = nearest_ansi16_from_rgb(250, 10, 10);
        assert!(matches!(c, Color::Red | Color::LightRed));
    }

    #[test]
    fn quantize_style_maps_both_layers() {
        let style = Style::default()
            .fg(Color::Rgb(255, 255, 255))
            .bg(Color::Rgb(0, 0, 0));
        let q = quantize_style(style, ColorDepth::X16);
        assert_eq!(q.fg, Some(Color::White));
        assert_eq!(q.bg, Some(Color::Black));
    }
}
