//! Dashboard page: stat cards, action row and the two charts.
//!
//! Stat cards that end up fully on screen are reported through
//! `app.visible_stats` so their counters can start on first sight.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::charts::slice_percent;
use crate::models::{BreakdownSlice, LineChartSpec};
use crate::ui::components::render_spinner;
use crate::ui::helpers::button;
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

const STAT_CARD_HEIGHT: u16 = 4;

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_TEXT),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let columns = ctx.stat_columns().max(1) as usize;
    let stat_rows = app.stats.len().div_ceil(columns) as u16;
    let stats_height = stat_rows * STAT_CARD_HEIGHT;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(stats_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_stat_cards(frame, chunks[0], app, columns);
    render_action_row(frame, chunks[1], app);

    let charts = chunks[2];
    if charts.height < 4 {
        return;
    }
    let (trend_area, breakdown_area) = if ctx.should_stack_charts() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(charts);
        (rows[0], rows[1])
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(charts);
        (cols[0], cols[1])
    };
    render_trend_chart(frame, trend_area, &app.trend_chart, app.time_range.label());
    render_breakdown(frame, breakdown_area, &app.breakdown);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, app: &mut App, columns: usize) {
    let mut visible = Vec::new();

    for (row_idx, row) in app.stats.chunks(columns).enumerate() {
        let y = area.y + row_idx as u16 * STAT_CARD_HEIGHT;
        let row_area = Rect::new(area.x, y, area.width, STAT_CARD_HEIGHT);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for (card, cell) in row.iter().zip(cells.iter()) {
            let cell = cell.intersection(area);
            if cell.height == 0 {
                continue;
            }
            let block = panel(&card.label);
            let inner = block.inner(cell);
            frame.render_widget(block, cell);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(" {}", card.text),
                    Style::default()
                        .fg(COLOR_HEADER)
                        .add_modifier(Modifier::BOLD),
                ))),
                inner,
            );

            // Clipped cards are not fully on screen yet
            let fully_shown = cell.height == STAT_CARD_HEIGHT;
            if fully_shown && app.counters.is_observed(&card.id) {
                visible.push(card.id.clone());
            }
        }
    }

    app.visible_stats = visible;
}

fn render_action_row(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }
    let y = area.y;
    let mut spans = vec![Span::raw(" ")];
    let mut x = area.x + 1;

    if app.scan_in_flight {
        let spinner = render_spinner("Scanning...", app.tick_count);
        x += spinner.width() as u16;
        spans.extend(spinner.spans);
    } else {
        let (span, end) = button(&mut app.hit_areas, "Scan Now", x, y, area, ClickAction::ScanNow);
        spans.push(span);
        x = end;
    }

    spans.push(Span::raw("  "));
    x += 2;
    let label = format!("{} ▾", app.time_range.label());
    let (span, _) = button(&mut app.hit_areas, &label, x, y, area, ClickAction::CycleTimeRange);
    spans.push(span);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_trend_chart(frame: &mut Frame, area: Rect, spec: &LineChartSpec, range: &str) {
    let points: Vec<Vec<(f64, f64)>> = spec
        .series
        .iter()
        .map(|s| {
            s.values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v as f64))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = spec
        .series
        .iter()
        .zip(points.iter())
        .map(|(series, data)| {
            Dataset::default()
                .name(series.label)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series.color))
                .data(data)
        })
        .collect();

    let max_x = spec.categories.len().saturating_sub(1) as f64;
    // Headroom above the tallest point
    let max_y = ((spec.max_value() as f64 * 1.1) / 10.0).ceil() * 10.0;
    let axis_style = Style::default().fg(COLOR_DIM);

    let chart = Chart::new(datasets)
        .block(panel(&format!("Threat Trends ({})", range)))
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, max_x])
                .labels(spec.categories.iter().map(|c| Span::raw(*c)).collect::<Vec<_>>()),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, max_y])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", (max_y / 2.0) as u64)),
                    Span::raw(format!("{}", max_y as u64)),
                ]),
        );
    frame.render_widget(chart, area);
}

/// One text line per slice: label, proportional bar, count and share.
pub fn breakdown_lines(slices: &[BreakdownSlice], bar_width: usize) -> Vec<Line<'static>> {
    let max = slices.iter().map(|s| s.value).max().unwrap_or(0);
    slices
        .iter()
        .enumerate()
        .map(|(idx, slice)| {
            let filled = if max == 0 {
                0
            } else {
                ((slice.value as usize * bar_width) + max as usize / 2) / max as usize
            };
            Line::from(vec![
                Span::styled(format!(" {:<9}", slice.label), Style::default().fg(COLOR_TEXT)),
                Span::styled("█".repeat(filled), Style::default().fg(slice.color)),
                Span::raw(" ".repeat(bar_width.saturating_sub(filled))),
                Span::styled(
                    format!(" {:>3} ({}%)", slice.value, slice_percent(slices, idx)),
                    Style::default().fg(COLOR_DIM),
                ),
            ])
        })
        .collect()
}

fn render_breakdown(frame: &mut Frame, area: Rect, slices: &[BreakdownSlice]) {
    let block = panel("Threat Types");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    // label (10) + counts (11)
    let bar_width = (inner.width as usize).saturating_sub(21).max(1);
    frame.render_widget(Paragraph::new(breakdown_lines(slices, bar_width)), inner);
}
