//! Dashboard actions.
//!
//! Every action reports through the toast. Actions addressed by index or id
//! silently do nothing when the target does not exist. The two destructive
//! actions open a confirmation prompt first; declining it changes nothing.

use super::{App, AppMessage, ConfirmAction, PendingConfirm};
use crate::error::{log_degraded, DashboardError};
use crate::models::NotificationRequest;
use crate::state::simulation::spawn_delayed;
use crate::state::Category;

impl App {
    // ------------------------------------------------------------------------
    // Dashboard page
    // ------------------------------------------------------------------------

    /// Start a simulated scan. Ignored while a scan is in flight.
    ///
    /// Returns whether a scan started.
    pub fn scan_now(&mut self) -> bool {
        if self.scan_in_flight {
            tracing::debug!("Scan already in flight, ignoring");
            return false;
        }
        self.scan_in_flight = true;
        spawn_delayed(
            self.message_tx.clone(),
            self.config.action_delay,
            AppMessage::ScanFinished,
        );
        self.mark_dirty();
        true
    }

    pub(super) fn finish_scan(&mut self) {
        self.scan_in_flight = false;
        self.notify(NotificationRequest::success(
            "Scan Complete",
            "Successfully scanned 127 emails. 2 threats detected.",
        ));
    }

    /// Switch the chart to the next time range.
    ///
    /// The demo series are static; only the notification changes.
    pub fn cycle_time_range(&mut self) {
        self.time_range = self.time_range.next();
        let message = format!("Loading data for: {}", self.time_range.label());
        self.notify(NotificationRequest::info("Updating Chart", message));
    }

    /// Notification badge: jump to the Threats page.
    pub fn open_notifications(&mut self) {
        self.activate_page(crate::models::page::PAGE_THREATS);
    }

    // ------------------------------------------------------------------------
    // Email Monitor page
    // ------------------------------------------------------------------------

    /// Show details for the email under the cursor.
    pub fn view_selected_email(&mut self) -> bool {
        let Some(email) = self.inbox.visible_at(self.inbox_cursor) else {
            log_degraded(
                "view_email",
                &DashboardError::missing("email", self.inbox_cursor.to_string()),
            );
            return false;
        };
        let message = format!("Viewing: {}", email.subject);
        self.notify(NotificationRequest::info("Email Details", message));
        true
    }

    pub fn set_filter_category(&mut self, category: Category) {
        self.inbox.set_category(category);
        self.clamp_inbox_cursor();
        self.mark_dirty();
    }

    pub fn cycle_filter_category(&mut self) {
        self.inbox.cycle_category();
        self.clamp_inbox_cursor();
        self.mark_dirty();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.inbox.push_query_char(c);
        self.clamp_inbox_cursor();
        self.mark_dirty();
    }

    pub fn pop_search_char(&mut self) {
        self.inbox.pop_query_char();
        self.clamp_inbox_cursor();
        self.mark_dirty();
    }

    /// Toggle the checkbox of the email under the cursor.
    pub fn toggle_selected_email(&mut self) -> bool {
        let Some(id) = self.inbox.visible_at(self.inbox_cursor).map(|e| e.id.clone()) else {
            return false;
        };
        self.toggle_email(&id)
    }

    pub fn toggle_email(&mut self, id: &str) -> bool {
        let Some(selection) = self.selection.as_mut() else {
            return false;
        };
        let toggled = selection.toggle_one(id);
        if toggled {
            self.mark_dirty();
        }
        toggled
    }

    /// Click on the select-all control.
    pub fn toggle_select_all(&mut self) {
        if let Some(selection) = self.selection.as_mut() {
            selection.toggle_all();
            self.mark_dirty();
        }
    }

    // ------------------------------------------------------------------------
    // Threats page
    // ------------------------------------------------------------------------

    /// Simulated report export: progress now, completion after a delay.
    pub fn export_report(&mut self) {
        self.notify(NotificationRequest::info(
            "Exporting Report",
            "Your threat analysis report is being generated...",
        ));
        spawn_delayed(
            self.message_tx.clone(),
            self.config.action_delay,
            AppMessage::ExportFinished,
        );
    }

    pub(super) fn finish_export(&mut self) {
        self.notify(NotificationRequest::success(
            "Export Complete",
            "Report downloaded successfully",
        ));
    }

    pub fn view_threat_email(&mut self, index: usize) -> bool {
        let Some(card) = self.threats.get(index) else {
            log_degraded("view_threat", &DashboardError::missing("threat", index.to_string()));
            return false;
        };
        let message = format!("Viewing: {}", card.title);
        self.notify(NotificationRequest::info("Opening Email", message));
        true
    }

    /// Ask to delete the threat email and block its sender.
    pub fn request_delete_threat(&mut self, index: usize) -> bool {
        let Some(card) = self.threats.get(index) else {
            log_degraded("delete_threat", &DashboardError::missing("threat", index.to_string()));
            return false;
        };
        if card.faded {
            // Already blocked and waiting for removal
            return false;
        }
        self.confirm = Some(PendingConfirm {
            prompt: format!(
                "Are you sure you want to delete and block this threat?\n\n{}",
                card.title
            ),
            action: ConfirmAction::DeleteThreat {
                id: card.id.clone(),
            },
        });
        self.mark_dirty();
        true
    }

    fn block_threat(&mut self, id: &str) {
        let Some(card) = self.threats.iter_mut().find(|c| c.id == id) else {
            log_degraded("block_threat", &DashboardError::missing("threat", id));
            return;
        };
        card.faded = true;
        tracing::info!(threat = %id, "Threat blocked");
        self.notify(NotificationRequest::success(
            "Threat Blocked",
            "Email deleted and sender blocked successfully",
        ));
        spawn_delayed(
            self.message_tx.clone(),
            self.config.removal_delay,
            AppMessage::RemoveThreat { id: id.to_string() },
        );
    }

    pub(super) fn remove_threat(&mut self, id: &str) {
        let before = self.threats.len();
        self.threats.retain(|c| c.id != id);
        if self.threats.len() != before {
            self.threat_cursor = self.threat_cursor.min(self.threats.len().saturating_sub(1));
            self.mark_dirty();
        }
    }

    // ------------------------------------------------------------------------
    // Honeypot page
    // ------------------------------------------------------------------------

    pub fn toggle_honeypot(&mut self) {
        self.honeypot_active = !self.honeypot_active;
        let request = if self.honeypot_active {
            NotificationRequest::success(
                "Honeypot Activated",
                "Scammer engagement system is now active",
            )
        } else {
            NotificationRequest::info(
                "Honeypot Deactivated",
                "Scammer engagement system is now inactive",
            )
        };
        self.notify(request);
    }

    /// Label next to the honeypot switch.
    pub fn honeypot_label(&self) -> &'static str {
        if self.honeypot_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    pub fn view_conversation(&mut self, index: usize) -> bool {
        let Some(session) = self.sessions.get(index) else {
            log_degraded("view_conversation", &DashboardError::missing("session", index.to_string()));
            return false;
        };
        let message = format!("Loading conversation with: {}", session.name);
        self.notify(NotificationRequest::info("Opening Conversation", message));
        true
    }

    /// Ask to end a honeypot session.
    pub fn request_end_session(&mut self, index: usize) -> bool {
        let Some(session) = self.sessions.get(index) else {
            log_degraded("end_session", &DashboardError::missing("session", index.to_string()));
            return false;
        };
        self.confirm = Some(PendingConfirm {
            prompt: format!(
                "Are you sure you want to end the session with {}?",
                session.name
            ),
            action: ConfirmAction::EndSession {
                id: session.id.clone(),
            },
        });
        self.mark_dirty();
        true
    }

    fn end_session(&mut self, id: &str) {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) else {
            log_degraded("end_session", &DashboardError::missing("session", id));
            return;
        };
        session.end();
        let message = format!("Successfully ended session with {}", session.name);
        tracing::info!(session = %id, "Honeypot session ended");
        self.notify(NotificationRequest::success("Session Ended", message));
    }

    // ------------------------------------------------------------------------
    // Settings page
    // ------------------------------------------------------------------------

    pub fn toggle_setting(&mut self, index: usize) -> bool {
        let Some(setting) = self.settings.get_mut(index) else {
            log_degraded("toggle_setting", &DashboardError::missing("setting", index.to_string()));
            return false;
        };
        setting.enabled = !setting.enabled;
        let message = format!("{} has been {}", setting.name, setting.status_word());
        self.notify(NotificationRequest::success("Setting Updated", message));
        true
    }

    /// Simulated Gmail reconnect. Ignored while one is in flight.
    pub fn reconnect(&mut self) -> bool {
        if self.reconnect_in_flight {
            return false;
        }
        self.reconnect_in_flight = true;
        self.notify(NotificationRequest::info(
            "Reconnecting",
            "Establishing connection with Gmail...",
        ));
        spawn_delayed(
            self.message_tx.clone(),
            self.config.action_delay,
            AppMessage::ReconnectFinished,
        );
        true
    }

    pub(super) fn finish_reconnect(&mut self) {
        self.reconnect_in_flight = false;
        self.notify(NotificationRequest::success(
            "Connected",
            "Successfully reconnected to Gmail",
        ));
    }

    // ------------------------------------------------------------------------
    // Confirmation prompt
    // ------------------------------------------------------------------------

    /// "Yes": run the pending destructive action.
    pub fn confirm_accept(&mut self) {
        let Some(pending) = self.confirm.take() else {
            return;
        };
        match pending.action {
            ConfirmAction::EndSession { id } => self.end_session(&id),
            ConfirmAction::DeleteThreat { id } => self.block_threat(&id),
        }
        self.mark_dirty();
    }

    /// "No": close the prompt. State is unchanged and nothing is shown.
    pub fn confirm_decline(&mut self) {
        if let Some(pending) = self.confirm.take() {
            let err = DashboardError::Declined {
                action: pending.action.name().to_string(),
            };
            log_degraded("confirm", &err);
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::models::Severity;
    use std::time::Duration;

    fn app() -> App {
        App::new(DashboardConfig::default().with_simulation(false))
    }

    fn drain(app: &mut App) -> Vec<AppMessage> {
        let rx = app.message_rx.as_mut().unwrap();
        let mut out = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            out.push(msg);
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_blocks_reentry_then_completes() {
        let mut app = app();
        assert!(app.scan_now());
        assert!(!app.scan_now());
        assert!(app.scan_in_flight);

        tokio::time::sleep(Duration::from_millis(2001)).await;
        for msg in drain(&mut app) {
            app.handle_message(msg);
        }
        assert!(!app.scan_in_flight);
        let toast = app.toast.current().unwrap();
        assert_eq!(toast.title, "Scan Complete");
        assert_eq!(toast.severity, Severity::Success);
        assert!(app.scan_now());
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_shows_progress_then_complete() {
        let mut app = app();
        app.export_report();
        assert_eq!(app.toast.current().unwrap().title, "Exporting Report");

        tokio::time::sleep(Duration::from_millis(2001)).await;
        for msg in drain(&mut app) {
            app.handle_message(msg);
        }
        assert_eq!(app.toast.current().unwrap().title, "Export Complete");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reconnect_flow() {
        let mut app = app();
        assert!(app.reconnect());
        assert!(!app.reconnect());
        assert_eq!(app.toast.current().unwrap().title, "Reconnecting");

        tokio::time::sleep(Duration::from_millis(2001)).await;
        for msg in drain(&mut app) {
            app.handle_message(msg);
        }
        assert!(!app.reconnect_in_flight);
        assert_eq!(app.toast.current().unwrap().title, "Connected");
    }

    #[tokio::test]
    async fn test_honeypot_toggle_labels_and_severity() {
        let mut app = app();
        app.toggle_honeypot();
        assert_eq!(app.honeypot_label(), "Inactive");
        assert_eq!(app.toast.current().unwrap().severity, Severity::Info);
        app.toggle_honeypot();
        assert_eq!(app.honeypot_label(), "Active");
        assert_eq!(app.toast.current().unwrap().title, "Honeypot Activated");
    }

    #[tokio::test]
    async fn test_setting_toggle_message() {
        let mut app = app();
        assert!(app.toggle_setting(0));
        let toast = app.toast.current().unwrap();
        assert_eq!(toast.title, "Setting Updated");
        assert_eq!(toast.message, "Real-time Scanning has been disabled");
        assert!(!app.toggle_setting(99));
    }

    #[tokio::test]
    async fn test_declined_end_session_changes_nothing() {
        let mut app = app();
        let before = app.sessions.clone();
        assert!(app.request_end_session(0));
        assert!(app.confirm.is_some());
        app.confirm_decline();
        assert!(app.confirm.is_none());
        assert_eq!(app.sessions, before);
        assert!(!app.toast.is_visible());
    }

    #[tokio::test]
    async fn test_accepted_end_session() {
        let mut app = app();
        app.request_end_session(1);
        assert!(app.confirm.as_ref().unwrap().prompt.contains("Lottery Claims Dept"));
        app.confirm_accept();
        assert!(!app.sessions[1].status_active);
        assert!(app.sessions[1].faded);
        let toast = app.toast.current().unwrap();
        assert_eq!(toast.title, "Session Ended");
        assert_eq!(toast.message, "Successfully ended session with Lottery Claims Dept");
    }

    #[tokio::test(start_paused = true)]
    async fn test_accepted_delete_fades_then_removes() {
        let mut app = app();
        let id = app.threats[0].id.clone();
        app.request_delete_threat(0);
        app.confirm_accept();
        assert!(app.threats[0].faded);
        assert_eq!(app.toast.current().unwrap().title, "Threat Blocked");
        // A faded card cannot be blocked twice
        assert!(!app.request_delete_threat(0));

        tokio::time::sleep(Duration::from_millis(1001)).await;
        for msg in drain(&mut app) {
            app.handle_message(msg);
        }
        assert!(app.threats.iter().all(|c| c.id != id));
    }

    #[tokio::test]
    async fn test_declined_delete_keeps_card() {
        let mut app = app();
        let count = app.threats.len();
        app.request_delete_threat(2);
        app.confirm_decline();
        assert_eq!(app.threats.len(), count);
        assert!(!app.threats[2].faded);
        assert!(!app.toast.is_visible());
    }

    #[test]
    fn test_missing_targets_are_noops() {
        let mut app = app();
        assert!(!app.view_threat_email(42));
        assert!(!app.request_delete_threat(42));
        assert!(!app.view_conversation(42));
        assert!(!app.request_end_session(42));
        assert!(app.confirm.is_none());
        assert!(!app.toast.is_visible());
    }

    #[tokio::test]
    async fn test_time_range_notification() {
        let mut app = app();
        app.cycle_time_range();
        assert_eq!(app.toast.current().unwrap().message, "Loading data for: Last 30 days");
    }

    #[tokio::test]
    async fn test_view_selected_email() {
        let mut app = app();
        app.inbox_cursor = 1;
        assert!(app.view_selected_email());
        assert_eq!(
            app.toast.current().unwrap().message,
            "Viewing: Outstanding invoice #88213"
        );
    }

    #[test]
    fn test_notification_badge_opens_threats() {
        let mut app = app();
        app.open_notifications();
        assert_eq!(app.router.title(), "Threats");
    }
}
