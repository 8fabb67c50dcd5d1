//! Single-slot toast notification.
//!
//! There is one slot and one dismiss timer. A new notification replaces the
//! slot's content and restarts the timer; nothing is ever queued behind it.
//!
//! The timer is a spawned task that sends [`AppMessage::ToastExpired`]
//! tagged with the slot's generation. The event loop passes it back to
//! [`NotificationCenter::on_expired`], which ignores expiries from a
//! replaced generation.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::AppMessage;
use crate::models::NotificationRequest;

/// Default auto-dismiss delay.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug)]
pub struct NotificationCenter {
    visible: bool,
    content: Option<NotificationRequest>,
    /// Bumped on every `notify`; identifies the live dismiss timer
    generation: u64,
    dismiss_timer: Option<JoinHandle<()>>,
    dismiss_after: Duration,
    /// Timer sink. Without one, toasts stay until dismissed.
    message_tx: Option<mpsc::UnboundedSender<AppMessage>>,
}

impl NotificationCenter {
    pub fn new(message_tx: mpsc::UnboundedSender<AppMessage>, dismiss_after: Duration) -> Self {
        Self {
            visible: false,
            content: None,
            generation: 0,
            dismiss_timer: None,
            dismiss_after,
            message_tx: Some(message_tx),
        }
    }

    /// A center with no timer sink. Toasts only close via [`dismiss`](Self::dismiss).
    pub fn without_timer() -> Self {
        Self {
            visible: false,
            content: None,
            generation: 0,
            dismiss_timer: None,
            dismiss_after: DEFAULT_TOAST_DURATION,
            message_tx: None,
        }
    }

    /// Show a notification, replacing whatever is visible.
    pub fn notify(&mut self, request: NotificationRequest) {
        self.cancel_timer();
        self.generation = self.generation.wrapping_add(1);

        tracing::debug!(
            severity = request.severity.as_str(),
            title = %request.title,
            replaced = self.visible,
            "Toast shown"
        );

        self.content = Some(request);
        self.visible = true;
        self.arm_timer();
    }

    /// Close the toast immediately and cancel its pending timer.
    pub fn dismiss(&mut self) {
        self.cancel_timer();
        if self.visible {
            tracing::debug!("Toast dismissed");
        }
        self.visible = false;
    }

    /// Apply a timer expiry. Returns whether the toast was hidden.
    pub fn on_expired(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.dismiss_timer = None;
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The visible notification, if any.
    pub fn current(&self) -> Option<&NotificationRequest> {
        if self.visible {
            self.content.as_ref()
        } else {
            None
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_pending_timer(&self) -> bool {
        self.dismiss_timer.is_some()
    }

    fn arm_timer(&mut self) {
        let Some(tx) = self.message_tx.clone() else {
            return;
        };
        let generation = self.generation;
        let delay = self.dismiss_after;
        self.dismiss_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppMessage::ToastExpired { generation });
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.dismiss_timer.take() {
            handle.abort();
        }
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
