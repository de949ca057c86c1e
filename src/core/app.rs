//! Application controller: runtime state plus the single animation tick chain.

use std::time::Instant;

use ratatui::widgets::ListState;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::models::{MatchDetails, MatchStatus, MatchSummary};
use crate::core::constants::TICK_INTERVAL;
use crate::ui::spinner::GlyphWaveSpinner;
use crate::ui::theme::Theme;

/// Zero-payload animation signal. The generation stamps which tick chain the
/// signal belongs to, so a superseded chain's stragglers are discarded.
#[derive(Debug, Clone, Copy)]
pub struct TickEvent {
    pub generation: u64,
    pub at: Instant,
}

/// Everything the event loop can receive over the app channel.
#[derive(Debug)]
pub enum AppEvent {
    Tick(TickEvent),
    Scoreboard(Vec<MatchSummary>),
    Stats(Vec<MatchSummary>),
    Details(Box<MatchDetails>),
    FetchFailed(String),
}

/// Which dashboard view is on screen. Both share the panel geometry; only
/// the left panel contents and the key map differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Live,
    Stats,
}

/// Date window the stats view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Today,
    ThreeDays,
}

impl DateRange {
    pub fn days(self) -> u8 {
        match self {
            DateRange::Today => 1,
            DateRange::ThreeDays => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::ThreeDays => "3d",
        }
    }
}

/// Handle to a single armed tick. Ticks are one-shot, so there is no cancel
/// primitive: stopping animation means not re-arming.
#[derive(Debug)]
pub struct PendingTick {
    _handle: JoinHandle<()>,
}

/// Owner of the tick chain. Held by exactly one [`App`]; arming is a method
/// here rather than a free function, so the type system enforces that no
/// other component can start a competing chain.
#[derive(Debug)]
pub struct AnimationScheduler {
    tx: UnboundedSender<AppEvent>,
    generation: u64,
}

impl AnimationScheduler {
    pub fn new(tx: UnboundedSender<AppEvent>) -> Self {
        AnimationScheduler { tx, generation: 0 }
    }

    /// Start a fresh chain, superseding any prior one. Ticks still in flight
    /// from an older chain carry a stale generation and will be ignored on
    /// delivery — chains replace each other, they never accumulate.
    pub fn start_chain(&mut self) -> PendingTick {
        self.generation += 1;
        debug!(generation = self.generation, "starting tick chain");
        self.arm()
    }

    /// Re-arm in response to a delivered tick. Returns None (and arms
    /// nothing) for a tick from a superseded chain.
    pub fn rearm(&self, tick: &TickEvent) -> Option<PendingTick> {
        if tick.generation != self.generation {
            debug!(
                stale = tick.generation,
                current = self.generation,
                "dropping stale tick"
            );
            return None;
        }
        Some(self.arm())
    }

    pub fn is_current(&self, tick: &TickEvent) -> bool {
        tick.generation == self.generation
    }

    /// Arrange exactly one tick after the fixed interval, then terminate.
    fn arm(&self) -> PendingTick {
        let tx = self.tx.clone();
        let generation = self.generation;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(TICK_INTERVAL).await;
            let _ = tx.send(AppEvent::Tick(TickEvent {
                generation,
                at: Instant::now(),
            }));
        });
        PendingTick { _handle: handle }
    }
}

/// Top-level runtime state for the dashboard view.
pub struct App {
    pub theme: Theme,
    pub spinner: GlyphWaveSpinner,
    pub matches: Vec<MatchSummary>,
    pub list_state: ListState,
    pub details: Option<MatchDetails>,
    pub show_help: bool,
    pub status: Option<String>,
    pub view: DashboardView,
    pub date_range: DateRange,
    pub finished: Vec<MatchSummary>,
    pub upcoming: Vec<MatchSummary>,
    pub stats_selected: Option<usize>,
    loading: bool,
    scheduler: AnimationScheduler,
}

impl App {
    pub fn new(theme: Theme, tx: UnboundedSender<AppEvent>) -> Self {
        App {
            theme,
            spinner: GlyphWaveSpinner::new(),
            matches: Vec::new(),
            list_state: ListState::default(),
            details: None,
            show_help: false,
            status: None,
            view: DashboardView::Live,
            date_range: DateRange::Today,
            finished: Vec::new(),
            upcoming: Vec::new(),
            stats_selected: None,
            loading: false,
            scheduler: AnimationScheduler::new(tx),
        }
    }

    /// Whether the spinner region should animate this frame.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Render the spinner through the gradient. Split borrows so the spinner
    /// can self-heal while reading the theme.
    pub fn spinner_line(&mut self) -> ratatui::text::Line<'static> {
        let App { spinner, theme, .. } = self;
        spinner.view(theme)
    }

    /// Mark a fetch in flight and (re)start the animation chain.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        let _ = self.scheduler.start_chain();
    }

    /// Route one delivered app event into state.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick(tick) => self.handle_tick(tick),
            AppEvent::Scoreboard(matches) => {
                self.loading = false;
                self.status = None;
                self.matches = matches;
                self.clamp_selection();
            }
            AppEvent::Stats(matches) => {
                self.loading = false;
                self.status = None;
                self.finished = matches
                    .iter()
                    .filter(|m| m.status == MatchStatus::Finished)
                    .cloned()
                    .collect();
                self.upcoming = matches
                    .into_iter()
                    .filter(|m| m.status == MatchStatus::Scheduled)
                    .collect();
                self.clamp_stats_selection();
            }
            AppEvent::Details(details) => {
                self.loading = false;
                self.details = Some(*details);
            }
            AppEvent::FetchFailed(message) => {
                warn!(%message, "fetch failed");
                self.loading = false;
                self.status = Some(message);
            }
        }
    }

    /// Advance the spinner and re-arm — but only for a tick from the current
    /// chain, and only while a load is in flight. This is the single re-arm
    /// site in the application.
    fn handle_tick(&mut self, tick: TickEvent) {
        if !self.scheduler.is_current(&tick) {
            return;
        }
        if !self.loading {
            return;
        }
        self.spinner.tick();
        let _ = self.scheduler.rearm(&tick);
    }

    pub fn select_next(&mut self) -> Option<u64> {
        if self.matches.is_empty() {
            return None;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.matches.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
        Some(self.matches[next].id)
    }

    pub fn select_previous(&mut self) -> Option<u64> {
        if self.matches.is_empty() {
            return None;
        }
        let prev = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        };
        self.list_state.select(Some(prev));
        Some(self.matches[prev].id)
    }

    pub fn selected_match_id(&self) -> Option<u64> {
        self.list_state
            .selected()
            .and_then(|i| self.matches.get(i))
            .map(|m| m.id)
    }

    fn clamp_selection(&mut self) {
        match self.list_state.selected() {
            Some(i) if i >= self.matches.len() => {
                self.list_state
                    .select(self.matches.len().checked_sub(1));
            }
            None if !self.matches.is_empty() => self.list_state.select(Some(0)),
            _ => {}
        }
        if self.matches.is_empty() {
            self.list_state.select(None);
            self.details = None;
        }
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            DashboardView::Live => DashboardView::Stats,
            DashboardView::Stats => DashboardView::Live,
        };
    }

    /// Change the stats date window. Returns whether it actually changed, so
    /// the caller knows to refetch.
    pub fn set_date_range(&mut self, range: DateRange) -> bool {
        if self.date_range == range {
            return false;
        }
        self.date_range = range;
        self.stats_selected = None;
        true
    }

    /// Selectable stats rows: finished matches first, then upcoming. The
    /// upcoming list only appears in the one-day window.
    fn stats_items(&self) -> Vec<&MatchSummary> {
        let mut items: Vec<&MatchSummary> = self.finished.iter().collect();
        if self.date_range == DateRange::Today {
            items.extend(self.upcoming.iter());
        }
        items
    }

    pub fn stats_select_next(&mut self) -> Option<u64> {
        let (next, id) = {
            let items = self.stats_items();
            if items.is_empty() {
                return None;
            }
            let next = match self.stats_selected {
                Some(i) if i + 1 < items.len() => i + 1,
                Some(i) => i,
                None => 0,
            };
            (next, items[next].id)
        };
        self.stats_selected = Some(next);
        Some(id)
    }

    pub fn stats_select_previous(&mut self) -> Option<u64> {
        let (prev, id) = {
            let items = self.stats_items();
            if items.is_empty() {
                return None;
            }
            let prev = match self.stats_selected {
                Some(i) if i > 0 => i - 1,
                _ => 0,
            };
            (prev, items[prev].id)
        };
        self.stats_selected = Some(prev);
        Some(id)
    }

    pub fn selected_stats_id(&self) -> Option<u64> {
        let items = self.stats_items();
        self.stats_selected.and_then(|i| items.get(i)).map(|m| m.id)
    }

    /// Selection of whichever view is on screen, used to chain a detail fetch
    /// after selection-moving events.
    pub fn active_selection_id(&self) -> Option<u64> {
        match self.view {
            DashboardView::Live => self.selected_match_id(),
            DashboardView::Stats => self.selected_stats_id(),
        }
    }

    fn clamp_stats_selection(&mut self) {
        let len = self.stats_items().len();
        match self.stats_selected {
            Some(i) if i >= len => self.stats_selected = len.checked_sub(1),
            None if len > 0 => self.stats_selected = Some(0),
            _ => {}
        }
        if len == 0 {
            self.stats_selected = None;
        }
    }
}
