//! Mouse interaction.
//!
//! Render code registers clickable regions in a [`HitAreaRegistry`]; the
//! event loop hit-tests clicks against it and hands the resulting
//! [`ClickAction`] to [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::{handle_click_action, handle_mouse_click};
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
