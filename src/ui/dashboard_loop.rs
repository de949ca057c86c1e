//! Main dashboard event loop.
//!
//! Owns the terminal, the app-event channel, and the keyboard handling that
//! drives the controller. All rendering is pure computation over resident
//! state; the only asynchronous boundaries are the one-shot animation timer
//! and the background fetch tasks, both of which resume this loop through
//! the channel.

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::info;

use crate::api::FeedClient;
use crate::core::app::{App, AppEvent, DashboardView, DateRange};
use crate::ui::renderer::ui;
use crate::ui::theme::Theme;

/// Errors here cross spawned-task boundaries, so they carry Send + Sync.
type LoopError = Box<dyn Error + Send + Sync>;

/// Options resolved from CLI flags and config before the loop starts.
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    pub theme: Option<String>,
    pub league: Option<String>,
    pub refresh: Duration,
    pub api_base: String,
}

fn spawn_scoreboard_fetch(client: &FeedClient, tx: UnboundedSender<AppEvent>, league: Option<String>) {
    let client = client.clone();
    tokio::spawn(async move {
        let event = match client.scoreboard(league.as_deref()).await {
            Ok(matches) => AppEvent::Scoreboard(matches),
            Err(e) => AppEvent::FetchFailed(format!("Scoreboard fetch failed: {e}")),
        };
        let _ = tx.send(event);
    });
}

fn spawn_details_fetch(client: &FeedClient, tx: UnboundedSender<AppEvent>, id: u64) {
    let client = client.clone();
    tokio::spawn(async move {
        let event = match client.details(id).await {
            Ok(details) => AppEvent::Details(Box::new(details)),
            Err(e) => AppEvent::FetchFailed(format!("Details fetch failed: {e}")),
        };
        let _ = tx.send(event);
    });
}

fn spawn_stats_fetch(
    client: &FeedClient,
    tx: UnboundedSender<AppEvent>,
    league: Option<String>,
    range: DateRange,
) {
    let client = client.clone();
    tokio::spawn(async move {
        let event = match client.stats(league.as_deref(), range.days()).await {
            Ok(matches) => AppEvent::Stats(matches),
            Err(e) => AppEvent::FetchFailed(format!("Stats fetch failed: {e}")),
        };
        let _ = tx.send(event);
    });
}

/// Refetch the data backing the active view.
fn refresh_active_view(app: &mut App, client: &FeedClient, tx: &UnboundedSender<AppEvent>, opts: &RuntimeOptions) {
    match app.view {
        DashboardView::Live => spawn_scoreboard_fetch(client, tx.clone(), opts.league.clone()),
        DashboardView::Stats => {
            spawn_stats_fetch(client, tx.clone(), opts.league.clone(), app.date_range)
        }
    }
    app.begin_loading();
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, LoopError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), LoopError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Combine the loop outcome with the teardown outcome. The loop error is the
/// root cause, so it wins when both fail.
fn conclude(loop_result: Result<(), LoopError>, restore_result: Result<(), LoopError>) -> Result<(), LoopError> {
    match loop_result {
        Err(e) => Err(e),
        Ok(()) => restore_result,
    }
}

pub async fn run_dashboard(opts: RuntimeOptions) -> Result<(), LoopError> {
    let theme = Theme::detect(opts.theme.as_deref());
    info!(appearance = ?theme.appearance, depth = ?theme.color_depth, "starting dashboard");

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut app = App::new(theme, tx.clone());
    let client = FeedClient::new(opts.api_base.clone())?;

    // Terminal state is restored even when the loop errors out, so a draw
    // failure cannot strand the user's shell in raw mode.
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &client, &tx, &mut rx, &opts).await;
    let restored = restore_terminal(&mut terminal);
    conclude(result, restored)
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &FeedClient,
    tx: &UnboundedSender<AppEvent>,
    rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    opts: &RuntimeOptions,
) -> Result<(), LoopError> {
    // Initial load
    spawn_scoreboard_fetch(client, tx.clone(), opts.league.clone());
    app.begin_loading();
    let mut last_refresh = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        break Ok(());
                    }
                    KeyCode::Char('q') => break Ok(()),
                    KeyCode::Esc => {
                        if app.show_help {
                            app.show_help = false;
                        } else {
                            break Ok(());
                        }
                    }
                    KeyCode::Char('?') => app.show_help = !app.show_help,
                    KeyCode::Tab => {
                        app.toggle_view();
                        refresh_active_view(app, client, tx, opts);
                        last_refresh = Instant::now();
                    }
                    KeyCode::Char('h') if app.view == DashboardView::Stats => {
                        if app.set_date_range(DateRange::Today) {
                            refresh_active_view(app, client, tx, opts);
                        }
                    }
                    KeyCode::Char('l') if app.view == DashboardView::Stats => {
                        if app.set_date_range(DateRange::ThreeDays) {
                            refresh_active_view(app, client, tx, opts);
                        }
                    }
                    KeyCode::Char('j') | KeyCode::Down => {
                        let moved = match app.view {
                            DashboardView::Live => app.select_next(),
                            DashboardView::Stats => app.stats_select_next(),
                        };
                        if let Some(id) = moved {
                            spawn_details_fetch(client, tx.clone(), id);
                            app.begin_loading();
                        }
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        let moved = match app.view {
                            DashboardView::Live => app.select_previous(),
                            DashboardView::Stats => app.stats_select_previous(),
                        };
                        if let Some(id) = moved {
                            spawn_details_fetch(client, tx.clone(), id);
                            app.begin_loading();
                        }
                    }
                    KeyCode::Char('r') => {
                        refresh_active_view(app, client, tx, opts);
                        last_refresh = Instant::now();
                    }
                    _ => {}
                }
            }
        }

        // Drain delivered app events; detail fetches follow selection moves
        // made by the list handlers (first item auto-selection).
        while let Ok(app_event) = rx.try_recv() {
            let before = app.active_selection_id();
            app.handle_event(app_event);
            let after = app.active_selection_id();
            if after != before {
                if let Some(id) = after {
                    spawn_details_fetch(client, tx.clone(), id);
                    app.begin_loading();
                }
            }
        }

        if last_refresh.elapsed() >= opts.refresh {
            refresh_active_view(app, client, tx, opts);
            last_refresh = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The feed client's errors are Send + Sync boxed; this must keep
    // converting into the loop's error type through `?`.
    #[test]
    fn client_errors_convert_to_the_loop_error_type() {
        fn build(base: &str) -> Result<FeedClient, LoopError> {
            Ok(FeedClient::new(base.to_string())?)
        }
        assert!(build("https://feed.example/v1").is_ok());
    }

    #[test]
    fn loop_errors_take_precedence_over_restore_errors() {
        let both: Result<(), LoopError> = conclude(Err("draw failed".into()), Err("restore failed".into()));
        assert_eq!(both.unwrap_err().to_string(), "draw failed");

        let restore_only: Result<(), LoopError> = conclude(Ok(()), Err("restore failed".into()));
        assert_eq!(restore_only.unwrap_err().to_string(), "restore failed");

        assert!(conclude(Ok(()), Ok(())).is_ok());
    }
}
