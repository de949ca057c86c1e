//! Top-level frame assembly: spinner region above the panel row.

use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::core::app::{App, DashboardView};
use crate::core::constants::LOADING_FALLBACK;
use crate::ui::dialog::render_dialog_with_help;
use crate::ui::layout::DashboardLayout;
use crate::ui::panels::{render_detail_panel, render_list_panel, render_stats_panel};

const HELP_TEXT: &str = "\
j / Down     select next match
k / Up       select previous match
Tab          switch live / stats view
h / l        stats date range (Today / 3d)
r            refresh the current view
?            toggle this help
q / Ctrl+C   quit";

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let layout = DashboardLayout::compute(area.width, area.height);

    // The layout enforces minimum floors, so its rects can exceed a terminal
    // that is below them. Clip everything to the real frame.
    let spinner_area = layout.spinner.intersection(area);
    let list_area = layout.list.intersection(area);
    let separator_area = layout.separator.intersection(area);
    let detail_area = layout.detail.intersection(area);

    // Animation region: reserved even when idle so panels never shift.
    if app.is_loading() && spinner_area.height > 0 {
        let glyphs = app.spinner_line();
        let line = if glyphs.width() == 0 {
            Line::from(LOADING_FALLBACK)
        } else {
            glyphs
        };
        // Middle row of the three reserved rows.
        let text = Text::from(vec![Line::default(), line.centered()]);
        f.render_widget(Paragraph::new(text), spinner_area);
    }
    if let Some(status) = app.status.as_deref() {
        if spinner_area.height >= 3 {
            let mut status_area = spinner_area;
            status_area.y = spinner_area.y + spinner_area.height - 1;
            status_area.height = 1;
            let line = Line::styled(status.to_string(), app.theme.dim_style).centered();
            f.render_widget(Paragraph::new(line), status_area);
        }
    }

    match app.view {
        DashboardView::Live => render_list_panel(
            f,
            list_area,
            &app.theme,
            &app.matches,
            &mut app.list_state,
        ),
        DashboardView::Stats => render_stats_panel(
            f,
            list_area,
            &app.theme,
            &app.finished,
            &app.upcoming,
            app.date_range,
            app.stats_selected,
        ),
    }

    if separator_area.width > 0 {
        let rows: Vec<Line> = (0..separator_area.height)
            .map(|_| Line::styled("┃", app.theme.separator_style))
            .collect();
        f.render_widget(Paragraph::new(Text::from(rows)), separator_area);
    }

    render_detail_panel(f, detail_area, &app.theme, app.details.as_ref());

    if app.show_help {
        render_dialog_with_help(
            f,
            &app.theme,
            "Help",
            HELP_TEXT,
            "Press Esc to close",
            48,
            15,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::AppEvent;
    use crate::ui::theme::Theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

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

    fn test_app() -> App {
        let (tx, _) = mpsc::unbounded_channel::<AppEvent>();
        App::new(Theme::dark_default(), tx)
    }

    #[test]
    fn empty_state_shows_both_placeholders() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("No live matches right now"));
        assert!(text.contains("Select a match to view details"));
        assert!(text.contains("Live Matches"));
    }

    #[test]
    fn idle_frames_are_deterministic() {
        let mut terminal_a = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut terminal_b = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        terminal_a.draw(|f| ui(f, &mut app)).unwrap();
        terminal_b.draw(|f| ui(f, &mut app)).unwrap();
        assert_eq!(buffer_text(&terminal_a), buffer_text(&terminal_b));
    }

    #[test]
    fn separator_column_runs_the_panel_height() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        let text = buffer_text(&terminal);
        assert_eq!(text.matches('┃').count(), 19);
    }

    #[test]
    fn spinner_region_stays_blank_when_idle() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        let text = buffer_text(&terminal);
        let top_rows: Vec<&str> = text.lines().take(3).collect();
        for row in top_rows {
            assert!(row.trim().is_empty());
        }
    }

    #[tokio::test]
    async fn loading_fills_the_animation_region() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        app.begin_loading();
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        let text = buffer_text(&terminal);
        let middle_row = text.lines().nth(1).unwrap();
        assert!(!middle_row.trim().is_empty());
    }

    #[test]
    fn stats_view_replaces_the_live_list() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        app.toggle_view();
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Match Stats"));
        assert!(text.contains("Today"));
        assert!(text.contains("No finished matches"));
        assert!(!text.contains("Live Matches"));
        // The detail panel is shared between views.
        assert!(text.contains("Select a match to view details"));
    }

    #[test]
    fn help_overlay_draws_on_top() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = test_app();
        app.show_help = true;
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("toggle this help"));
        assert!(text.contains("Press Esc to close"));
    }
}
