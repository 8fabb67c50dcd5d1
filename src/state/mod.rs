//! Dashboard interaction engine.
//!
//! Each component owns one slice of transient UI state:
//! - [`Router`]: active page, active nav control, sidebar
//! - [`NotificationCenter`]: the single toast slot and its dismiss timer
//! - [`ListFilterEngine`]: email visibility from category AND query
//! - [`SelectionTracker`]: per-email checkboxes and the derived select-all
//! - [`CounterAnimator`]: one-shot stat animations on first visibility
//! - [`SimulationScheduler`]: simulated threat feed, stat jitter, welcome toast

pub mod counter;
pub mod filter;
pub mod navigation;
pub mod selection;
pub mod simulation;
pub mod toast;

pub use counter::{CounterAnimation, CounterAnimator, CounterBinding};
pub use filter::{Category, FilterCriteria, ListFilterEngine, CATEGORY_CHIPS};
pub use navigation::{Router, DEFAULT_NARROW_BREAKPOINT};
pub use selection::{aggregate_of, SelectionTracker, TriState};
pub use simulation::{SimulationScheduler, SimulationTimings};
pub use toast::{NotificationCenter, DEFAULT_TOAST_DURATION};
