//! Balance chart view
//!
//! Plots the balance-over-time sequence produced by the balance engine.
//! The x axis is the point index (Start, then one point per transaction);
//! the y axis is the balance in whole currency units.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::tui::app::App;

/// Render the balance chart
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Balance over time ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let points = &app.chart_points;
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.balance.to_units_f64()))
        .collect();

    let (y_min, y_max) = y_bounds(&data);
    let x_max = (data.len().saturating_sub(1)).max(1) as f64;

    let datasets = vec![Dataset::default()
        .name("balance")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightBlue))
        .data(&data)];

    let x_labels = vec![
        Span::raw(points.first().map(|p| p.label.clone()).unwrap_or_default()),
        Span::raw(points.last().map(|p| p.label.clone()).unwrap_or_default()),
    ];
    let y_labels = vec![
        Span::raw(format!("{:.2}", y_min)),
        Span::raw(format!("{:.2}", (y_min + y_max) / 2.0)),
        Span::raw(format!("{:.2}", y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Date and time")
                .style(Style::default().fg(Color::Gray))
                .labels(x_labels)
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .title(format!("Balance ({})", app.settings.currency_symbol))
                .style(Style::default().fg(Color::Gray))
                .labels(y_labels)
                .bounds([y_min, y_max]),
        );

    frame.render_widget(chart, area);
}

/// Y-axis bounds with a little headroom so the line never hugs the frame
fn y_bounds(data: &[(f64, f64)]) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for &(_, y) in data {
        min = min.min(y);
        max = max.max(y);
    }
    if data.is_empty() || min > max {
        return (0.0, 1.0);
    }

    let pad = ((max - min) * 0.1).max(1.0);
    (min - pad, max + pad)
}
