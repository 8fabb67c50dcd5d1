//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal chip row with a marker on the selected item
//! - `StatusIndicator` - Spinner shown while an action is in flight
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{get_spinner_char, render_spinner};
pub use tab_selector::{render_tab_selector, TabItem, TabRow};
