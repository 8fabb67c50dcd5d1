//! Command handlers for executing commands.
//!
//! - [`navigation`] - Pages, sidebar, toast and list cursors
//! - [`page`] - Actions belonging to a single page
//! - [`modal`] - Confirmation prompt and search box

pub mod modal;
pub mod navigation;
pub mod page;

pub use modal::*;
pub use navigation::*;
pub use page::*;
