//! Page bodies, one module per sidebar entry.

pub mod dashboard;
pub mod honeypot;
pub mod monitoring;
pub mod settings;
pub mod threats;

use ratatui::{layout::Rect, Frame};

use crate::app::App;
use crate::models::page::{PAGE_DASHBOARD, PAGE_HONEYPOT, PAGE_MONITORING, PAGE_SETTINGS, PAGE_THREATS};

use super::layout::LayoutContext;

/// Draw the body of the active page.
pub fn render_page(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let page = app.router.active_page().id.clone();
    match page.as_str() {
        PAGE_DASHBOARD => dashboard::render(frame, area, app, ctx),
        PAGE_MONITORING => monitoring::render(frame, area, app, ctx),
        PAGE_THREATS => threats::render(frame, area, app, ctx),
        PAGE_HONEYPOT => honeypot::render(frame, area, app, ctx),
        PAGE_SETTINGS => settings::render(frame, area, app, ctx),
        other => tracing::warn!(page = other, "No renderer for page"),
    }
}
