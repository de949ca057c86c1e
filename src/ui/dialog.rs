//! Modal dialog frame rendering.
//!
//! Wraps arbitrary title/content (and optionally a trailing help line) in a
//! bordered frame centered over the current frame, independent of the main
//! dashboard geometry. Pure over its inputs.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;

use crate::ui::theme::Theme;

/// Center a `width` x `height` box inside `area`, shrinking to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn dialog_body(title: &str, content: &str, help: Option<&str>, theme: &Theme) -> Text<'static> {
    let mut lines = vec![
        Line::from(Span::styled(title.to_string(), theme.dialog_title_style)),
        Line::default(),
    ];
    for line in content.split('\n') {
        lines.push(Line::styled(line.to_string(), theme.value_style));
    }
    if let Some(help) = help {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            help.to_string(),
            theme.dialog_help_style,
        )));
    }
    Text::from(lines)
}

fn render(
    f: &mut Frame,
    theme: &Theme,
    title: &str,
    content: &str,
    help: Option<&str>,
    width: u16,
    height: u16,
) {
    let area = centered_rect(f.area(), width, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.dialog_border_style)
        .padding(Padding::symmetric(2, 1));
    let body = Paragraph::new(dialog_body(title, content, help, theme)).block(block);
    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

/// Wrap content in a dialog frame with a title.
pub fn render_dialog(f: &mut Frame, theme: &Theme, title: &str, content: &str, width: u16, height: u16) {
    render(f, theme, title, content, None, width, height);
}

/// Wrap content in a dialog frame with a title and trailing help text.
pub fn render_dialog_with_help(
    f: &mut Frame,
    theme: &Theme,
    title: &str,
    content: &str,
    help: &str,
    width: u16,
    height: u16,
) {
    render(f, theme, title, content, Some(help), width, height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn dialog_shows_title_and_content_inside_a_border() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark_default();
        terminal
            .draw(|f| render_dialog(f, &theme, "About", "Matchday dashboard", 40, 10))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("About"));
        assert!(text.contains("Matchday dashboard"));
        assert!(text.contains('╭'));
        assert!(text.contains('╰'));
    }

    #[test]
    fn help_variant_appends_the_help_line() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark_default();
        terminal
            .draw(|f| {
                render_dialog_with_help(f, &theme, "Help", "q quits", "Esc closes", 40, 12)
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("q quits"));
        assert!(text.contains("Esc closes"));
    }

    #[test]
    fn oversized_dialog_shrinks_to_the_frame() {
        let rect = centered_rect(Rect::new(0, 0, 30, 10), 100, 50);
        assert_eq!(rect, Rect::new(0, 0, 30, 10));
    }
}
