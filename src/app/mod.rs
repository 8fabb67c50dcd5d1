//! Application state and logic for the dashboard.
//!
//! [`App`] holds every engine component plus the demo content, and is the
//! only thing the event loop mutates. Each handler runs to completion on
//! `&mut App`; timers report back through [`AppMessage`].

mod actions;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{ConfirmAction, InputMode, PendingConfirm};

use rand::Rng;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::config::DashboardConfig;
use crate::models::{
    charts, default_pages, default_settings, default_stats, demo_inbox, demo_sessions,
    demo_threats, BreakdownSlice, EmailItem, HoneypotSession, LineChartSpec, NotificationRequest,
    SettingToggle, StatCard, ThreatCard, TimeRange,
};
use crate::state::counter::TICK_MS;
use crate::state::simulation::{jitter_stats, random_canned_threat};
use crate::state::{
    CounterAnimator, ListFilterEngine, NotificationCenter, Router, SelectionTracker,
    SimulationScheduler,
};
use crate::ui::interaction::HitAreaRegistry;

/// The 16ms frame clock driving [`App::tick`].
///
/// One interval for the whole session: input and messages arriving between
/// ticks do not push the next tick back.
pub fn frame_ticker() -> Interval {
    let mut ticker = interval(std::time::Duration::from_millis(TICK_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

/// Demo content the dashboard starts with.
#[derive(Debug, Clone)]
pub struct DemoContent {
    pub inbox: Vec<EmailItem>,
    pub stats: Vec<StatCard>,
    pub sessions: Vec<HoneypotSession>,
    pub threats: Vec<ThreatCard>,
    pub settings: Vec<SettingToggle>,
}

impl Default for DemoContent {
    fn default() -> Self {
        Self {
            inbox: demo_inbox(),
            stats: default_stats(),
            sessions: demo_sessions(),
            threats: demo_threats(),
            settings: default_settings(),
        }
    }
}

pub struct App {
    pub config: DashboardConfig,

    // Engine components
    pub router: Router,
    pub toast: NotificationCenter,
    pub inbox: ListFilterEngine,
    /// Only present when the inbox had at least one email at startup
    pub selection: Option<SelectionTracker>,
    pub counters: CounterAnimator,

    // Page content
    pub stats: Vec<StatCard>,
    pub sessions: Vec<HoneypotSession>,
    pub threats: Vec<ThreatCard>,
    pub settings: Vec<SettingToggle>,
    pub honeypot_active: bool,
    pub time_range: TimeRange,
    pub trend_chart: LineChartSpec,
    pub breakdown: Vec<BreakdownSlice>,

    // In-flight indicators; the action is disabled while set
    pub scan_in_flight: bool,
    pub reconnect_in_flight: bool,

    pub confirm: Option<PendingConfirm>,
    pub input_mode: InputMode,

    // Per-page list cursors (index into the visible rows)
    pub inbox_cursor: usize,
    pub threat_cursor: usize,
    pub session_cursor: usize,
    pub settings_cursor: usize,

    /// Clickable regions registered by the last render
    pub hit_areas: HitAreaRegistry,
    pub sidebar_rect: Option<Rect>,
    pub toggle_rect: Option<Rect>,
    /// Last pointer position, for hover highlighting
    pub mouse_position: Option<(u16, u16)>,
    /// Stat card ids drawn fully on screen by the last render
    pub visible_stats: Vec<String>,

    /// Animation tick counter (spinners)
    pub tick_count: u64,
    pub needs_redraw: bool,
    pub should_quit: bool,

    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    simulation: SimulationScheduler,
}

impl App {
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_content(config, DemoContent::default())
    }

    pub fn with_content(config: DashboardConfig, content: DemoContent) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let selection = SelectionTracker::new(content.inbox.iter().map(|e| e.id.clone()));
        let counters = CounterAnimator::observe(content.stats.iter().map(|s| s.id.as_str()));

        Self {
            router: Router::new(default_pages(), config.narrow_breakpoint),
            toast: NotificationCenter::new(message_tx.clone(), config.toast_duration),
            inbox: ListFilterEngine::new(content.inbox),
            selection,
            counters,
            stats: content.stats,
            sessions: content.sessions,
            threats: content.threats,
            settings: content.settings,
            honeypot_active: true,
            time_range: TimeRange::default(),
            trend_chart: charts::threat_trend_chart(),
            breakdown: charts::threat_type_breakdown(),
            scan_in_flight: false,
            reconnect_in_flight: false,
            confirm: None,
            input_mode: InputMode::Normal,
            inbox_cursor: 0,
            threat_cursor: 0,
            session_cursor: 0,
            settings_cursor: 0,
            hit_areas: HitAreaRegistry::new(),
            sidebar_rect: None,
            toggle_rect: None,
            mouse_position: None,
            visible_stats: Vec::new(),
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            simulation: SimulationScheduler::new(message_tx.clone(), config.simulation),
            message_tx,
            message_rx: Some(message_rx),
            config,
        }
    }

    /// Start the simulated sources (if enabled). Must run inside a runtime.
    pub fn mount(&mut self) {
        if self.config.simulation_enabled {
            self.simulation.start();
        }
    }

    /// Stop the simulated sources and any toast timer.
    pub fn unmount(&mut self) {
        self.simulation.stop();
        self.toast.dismiss();
    }

    pub fn simulation_running(&self) -> bool {
        self.simulation.is_running()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a notification.
    pub fn notify(&mut self, request: NotificationRequest) {
        self.toast.notify(request);
        self.mark_dirty();
    }

    /// Advance one 16ms animation tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.counters.tick(&mut self.stats) {
            self.mark_dirty();
        }
        if self.scan_in_flight || self.reconnect_in_flight {
            self.mark_dirty();
        }
    }

    /// Arm counters for stat cards the last render reported as visible.
    pub fn process_visibility(&mut self) {
        if self.visible_stats.is_empty() {
            return;
        }
        let visible = std::mem::take(&mut self.visible_stats);
        if self.counters.on_visible(&visible, &mut self.stats) {
            self.mark_dirty();
        }
    }

    /// Resize: the terminal width is the viewport width.
    pub fn update_terminal_dimensions(&mut self, width: u16, _height: u16) {
        self.router.set_viewport_width(width);
        self.mark_dirty();
    }

    /// Apply a message from a timer task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ToastExpired { generation } => {
                if self.toast.on_expired(generation) {
                    self.mark_dirty();
                }
            }
            AppMessage::Notify(request) => self.notify(request),
            AppMessage::FeedTick => {
                let request = random_canned_threat(&mut rand::rng());
                self.notify(request);
            }
            AppMessage::JitterTick => {
                self.apply_jitter(&mut rand::rng());
            }
            AppMessage::ScanFinished => self.finish_scan(),
            AppMessage::ExportFinished => self.finish_export(),
            AppMessage::ReconnectFinished => self.finish_reconnect(),
            AppMessage::RemoveThreat { id } => self.remove_threat(&id),
        }
    }

    /// Nudge every stat by -1, 0 or +1, floored at 0.
    pub fn apply_jitter<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        jitter_stats(&mut self.stats, rng);
        self.mark_dirty();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.simulation.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::state::TriState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app() -> App {
        App::new(DashboardConfig::default().with_simulation(false))
    }

    #[test]
    fn test_new_app_starts_on_dashboard() {
        let app = app();
        assert_eq!(app.router.title(), "Dashboard");
        assert!(!app.toast.is_visible());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_selection_created_for_non_empty_inbox() {
        let app = app();
        let selection = app.selection.as_ref().unwrap();
        assert_eq!(selection.len(), app.inbox.items().len());
        assert_eq!(selection.aggregate(), TriState::Unchecked);
    }

    #[test]
    fn test_no_selection_for_empty_inbox() {
        let content = DemoContent {
            inbox: Vec::new(),
            ..DemoContent::default()
        };
        let app = App::with_content(DashboardConfig::default(), content);
        assert!(app.selection.is_none());
    }

    #[tokio::test]
    async fn test_feed_tick_shows_canned_notification() {
        let mut app = app();
        app.handle_message(AppMessage::FeedTick);
        let current = app.toast.current().unwrap();
        let canned = crate::state::simulation::canned_threats();
        assert!(canned.contains(current));
    }

    #[tokio::test]
    async fn test_stale_toast_expiry_ignored() {
        let mut app = app();
        app.notify(NotificationRequest::danger("A", ""));
        let stale = app.toast.generation();
        app.notify(NotificationRequest::success("B", ""));
        app.handle_message(AppMessage::ToastExpired { generation: stale });
        assert_eq!(app.toast.current().unwrap().severity, Severity::Success);
    }

    #[test]
    fn test_jitter_never_negative() {
        let mut app = app();
        for stat in &mut app.stats {
            stat.set_value(0);
        }
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            app.apply_jitter(&mut rng);
        }
        assert!(app.stats.iter().all(|s| s.value() <= 50));
    }

    #[test]
    fn test_visibility_arms_counter_once() {
        let mut app = app();
        let id = app.stats[0].id.clone();
        app.visible_stats = vec![id.clone()];
        app.process_visibility();
        assert!(app.counters.is_armed(&id));
        assert_eq!(app.stats[0].text, "0");
        assert!(app.visible_stats.is_empty());

        for _ in 0..100 {
            app.tick();
        }
        assert_eq!(app.stats[0].text, "1,247");
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = app();
        app.update_terminal_dimensions(60, 30);
        assert!(app.router.is_narrow());
        app.update_terminal_dimensions(140, 40);
        assert!(!app.router.is_narrow());
    }

    #[tokio::test]
    async fn test_mount_respects_simulation_flag() {
        let mut app = app();
        app.mount();
        assert!(!app.simulation_running());

        let mut app = App::new(DashboardConfig::default());
        app.mount();
        assert!(app.simulation_running());
        app.unmount();
        assert!(!app.simulation_running());
    }
}
