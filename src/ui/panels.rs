//! List and detail panel rendering.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::api::models::{EventKind, MatchDetails, MatchEvent, MatchStatus, MatchSummary};
use crate::core::app::DateRange;
use crate::core::constants::{
    EMPTY_DETAILS_PLACEHOLDER, EMPTY_FINISHED_HINT, EMPTY_FINISHED_PLACEHOLDER,
    EMPTY_LIST_PLACEHOLDER, EMPTY_UPCOMING_PLACEHOLDER, PANEL_LIVE_MATCHES, PANEL_MATCH_STATS,
};
use crate::ui::theme::Theme;

/// Truncate to a display width, appending an ellipsis when content is cut.
fn fit(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.to_string().width();
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

fn status_span(
    status: MatchStatus,
    live_time: Option<&str>,
    kickoff: Option<&chrono::DateTime<chrono::Utc>>,
    theme: &Theme,
) -> Span<'static> {
    // Exhaustive on purpose: adding a status without a render case must not compile.
    match status {
        MatchStatus::Live => match live_time {
            Some(t) => Span::styled(t.to_string(), theme.live_style),
            None => Span::styled("LIVE".to_string(), theme.live_style),
        },
        MatchStatus::Finished => Span::styled("FT".to_string(), theme.finished_style),
        MatchStatus::Scheduled => match kickoff {
            Some(ts) => Span::styled(ts.format("%H:%M").to_string(), theme.dim_style),
            None => Span::styled("Scheduled".to_string(), theme.dim_style),
        },
    }
}

fn summary_line(m: &MatchSummary, theme: &Theme, max_width: usize) -> Line<'static> {
    let score = match (m.home_score, m.away_score) {
        (Some(h), Some(a)) => format!(" {h}-{a} "),
        _ => " vs ".to_string(),
    };
    let mut spans = vec![
        Span::styled(
            fit(m.home.display_name(), max_width.saturating_sub(12)),
            theme.team_style,
        ),
        Span::styled(score, theme.value_style),
        Span::styled(
            fit(m.away.display_name(), max_width.saturating_sub(12)),
            theme.team_style,
        ),
        Span::raw("  "),
    ];
    spans.push(status_span(m.status, m.live_time.as_deref(), None, theme));
    Line::from(spans)
}

/// Left panel: the scoreboard list. The empty state shows a message instead
/// of an empty list widget.
pub fn render_list_panel(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    matches: &[MatchSummary],
    list_state: &mut ListState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border_style)
        .title(Span::styled(PANEL_LIVE_MATCHES, theme.panel_title_style));

    if matches.is_empty() {
        let empty = Paragraph::new(EMPTY_LIST_PLACEHOLDER)
            .style(theme.dim_style)
            .centered()
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let row_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = matches
        .iter()
        .map(|m| ListItem::new(summary_line(m, theme, row_width)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(theme.list_highlight_style)
        .highlight_symbol("▸ ");
    f.render_stateful_widget(list, area, list_state);
}

/// Horizontal date-range selector: the active window in the live accent,
/// the other dimmed.
fn date_range_selector(range: DateRange, theme: &Theme) -> Line<'static> {
    let style_for = |r: DateRange| {
        if r == range {
            theme.live_style
        } else {
            theme.dim_style
        }
    };
    Line::from(vec![
        Span::styled(DateRange::Today.label(), style_for(DateRange::Today)),
        Span::raw("  "),
        Span::styled(DateRange::ThreeDays.label(), style_for(DateRange::ThreeDays)),
    ])
    .centered()
}

fn stats_row(m: &MatchSummary, theme: &Theme, max_width: usize, selected: bool) -> Line<'static> {
    let mut line = summary_line(m, theme, max_width.saturating_sub(2));
    let marker = if selected {
        Span::styled("▸ ", theme.list_highlight_style)
    } else {
        Span::raw("  ")
    };
    line.spans.insert(0, marker);
    line
}

/// Body lines for the stats panel: date-range selector, the finished list,
/// and (in the one-day window) the upcoming list stacked below it. Section
/// headers only appear when their list has items; empty lists show a message
/// instead.
pub fn stats_lines(
    finished: &[MatchSummary],
    upcoming: &[MatchSummary],
    range: DateRange,
    selected: Option<usize>,
    row_width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![date_range_selector(range, theme), Line::default()];
    let mut index = 0usize;

    if finished.is_empty() {
        lines.push(Line::styled(EMPTY_FINISHED_PLACEHOLDER, theme.dim_style).centered());
        lines.push(Line::default());
        lines.push(Line::styled(EMPTY_FINISHED_HINT, theme.dim_style).centered());
    } else {
        lines.push(Line::from(Span::styled("Finished", theme.header_style)));
        for m in finished {
            lines.push(stats_row(m, theme, row_width, selected == Some(index)));
            index += 1;
        }
    }

    if range == DateRange::Today {
        lines.push(Line::default());
        if upcoming.is_empty() {
            lines.push(Line::styled(EMPTY_UPCOMING_PLACEHOLDER, theme.dim_style).centered());
        } else {
            lines.push(Line::from(Span::styled("Upcoming", theme.header_style)));
            for m in upcoming {
                lines.push(stats_row(m, theme, row_width, selected == Some(index)));
                index += 1;
            }
        }
    }

    lines
}

/// Left panel in the stats view.
pub fn render_stats_panel(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    finished: &[MatchSummary],
    upcoming: &[MatchSummary],
    range: DateRange,
    selected: Option<usize>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border_style)
        .title(Span::styled(PANEL_MATCH_STATS, theme.panel_title_style));

    let row_width = area.width.saturating_sub(4) as usize;
    let body = stats_lines(finished, upcoming, range, selected, row_width, theme);
    f.render_widget(Paragraph::new(Text::from(body)).block(block), area);
}

fn score_line(details: &MatchDetails, theme: &Theme) -> Line<'static> {
    let home = details.home_team.display_name().to_string();
    let away = details.away_team.display_name().to_string();
    let middle = match (details.home_score, details.away_score) {
        (Some(h), Some(a)) => format!("  {h} - {a}  "),
        _ => "  vs  ".to_string(),
    };
    Line::from(vec![
        Span::styled(home, theme.team_style),
        Span::styled(middle, theme.value_style),
        Span::styled(away, theme.team_style),
    ])
    .centered()
}

fn labeled(label: &str, value: Span<'static>, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<13}"), theme.label_style),
        value,
    ])
}

fn goal_lines(goals: &[&MatchEvent], team_name: &str, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if goals.is_empty() {
        return lines;
    }
    lines.push(Line::from(Span::styled(
        team_name.to_string(),
        theme.team_style,
    )));
    for goal in goals {
        let player = goal.player.as_deref().unwrap_or("Unknown").to_string();
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{}'", goal.minute), theme.minute_style),
            Span::raw(" "),
            Span::styled(player, theme.value_style),
        ]));
    }
    lines
}

/// Body lines for the detail panel. Pure over the detail record, so tests can
/// assert content without a terminal.
pub fn detail_lines(details: &MatchDetails, content_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Match Info".to_string(),
        theme.header_style,
    )));
    lines.push(Line::default());
    lines.push(score_line(details, theme));
    lines.push(Line::default());

    lines.push(labeled(
        "Status:",
        status_span(
            details.status,
            details.live_time.as_deref(),
            details.kickoff.as_ref(),
            theme,
        ),
        theme,
    ));
    if !details.league.name.is_empty() {
        lines.push(labeled(
            "League:",
            Span::styled(fit(&details.league.name, content_width), theme.value_style),
            theme,
        ));
    }
    if let Some(venue) = details.venue.as_deref().filter(|v| !v.is_empty()) {
        lines.push(labeled(
            "Venue:",
            Span::styled(fit(venue, content_width), theme.value_style),
            theme,
        ));
    }
    if let Some(kickoff) = &details.kickoff {
        lines.push(labeled(
            "Date:",
            Span::styled(kickoff.format("%d %b %Y").to_string(), theme.value_style),
            theme,
        ));
    }
    if let Some(ht) = &details.half_time {
        lines.push(labeled(
            "Half-Time:",
            Span::styled(format!("{} - {}", ht.home, ht.away), theme.value_style),
            theme,
        ));
    }

    let home_goals: Vec<&MatchEvent> = details
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Goal && e.team_id == details.home_team.id)
        .collect();
    let away_goals: Vec<&MatchEvent> = details
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Goal && e.team_id != details.home_team.id)
        .collect();
    if !home_goals.is_empty() || !away_goals.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Goals".to_string(), theme.header_style)));
        lines.extend(goal_lines(&home_goals, details.home_team.display_name(), theme));
        lines.extend(goal_lines(&away_goals, details.away_team.display_name(), theme));
    }

    let yellow = details
        .events
        .iter()
        .filter(|e| e.kind == EventKind::YellowCard)
        .count();
    let red = details
        .events
        .iter()
        .filter(|e| e.kind == EventKind::RedCard)
        .count();
    if yellow > 0 || red > 0 {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Cards".to_string(), theme.header_style)));
        if yellow > 0 {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled("Yellow: ".to_string(), theme.team_style),
                Span::styled(yellow.to_string(), theme.value_style),
            ]));
        }
        if red > 0 {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled("Red: ".to_string(), theme.live_style),
                Span::styled(red.to_string(), theme.value_style),
            ]));
        }
    }

    lines
}

/// Right panel: full match details, or the selection placeholder.
pub fn render_detail_panel(f: &mut Frame, area: Rect, theme: &Theme, details: Option<&MatchDetails>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border_style)
        .title(Span::styled("Match Details", theme.panel_title_style));

    let Some(details) = details else {
        let pad = (area.height / 4) as usize;
        let mut lines: Vec<Line> = std::iter::repeat_with(Line::default).take(pad).collect();
        lines.push(Line::from(EMPTY_DETAILS_PLACEHOLDER).centered());
        let placeholder = Paragraph::new(Text::from(lines))
            .style(theme.dim_style)
            .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let content_width = area.width.saturating_sub(4) as usize;
    let body = Paragraph::new(Text::from(detail_lines(details, content_width, theme))).block(block);
    f.render_widget(body, area);
}
