//! AppMessage enum for async communication within the application.
//!
//! Timer tasks never touch `App` directly. They send one of these over the
//! app's unbounded channel and the event loop applies it.

use crate::models::NotificationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The toast dismiss timer for `generation` fired
    ToastExpired { generation: u64 },
    /// Show a notification (welcome toast, delayed action results)
    Notify(NotificationRequest),
    /// The simulated threat feed fired
    FeedTick,
    /// The simulated stat jitter fired
    JitterTick,
    /// "Scan now" finished its in-flight period
    ScanFinished,
    /// The simulated report export finished
    ExportFinished,
    /// The simulated reconnect finished
    ReconnectFinished,
    /// A blocked threat card finished fading and should be removed
    RemoveThreat { id: String },
}
