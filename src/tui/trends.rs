//! Trend chart over the rolling history window.

use crate::core::HistorySample;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Draw the three aggregate trend lines.
pub fn draw_trend_chart(frame: &mut Frame, area: Rect, samples: &[HistorySample]) {
    if samples.is_empty() {
        let empty = Block::default()
            .borders(Borders::ALL)
            .title(" Live Trends (no data) ");
        frame.render_widget(empty, area);
        return;
    }

    let efficiency: Vec<(f64, f64)> = series(samples, |s| s.efficiency);
    let utilization: Vec<(f64, f64)> = series(samples, |s| s.utilization);
    let risk: Vec<(f64, f64)> = series(samples, |s| s.risk);

    let datasets = vec![
        Dataset::default()
            .name("Efficiency %")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&efficiency),
        Dataset::default()
            .name("Utilization %")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&utilization),
        Dataset::default()
            .name("Risk %")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&risk),
    ];

    let (y_min, y_max) = value_bounds(samples);
    let first_label = samples.first().map(|s| s.date.as_str()).unwrap_or("");
    let last_label = samples.last().map(|s| s.date.as_str()).unwrap_or("");

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Live Trends ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, samples.len().saturating_sub(1) as f64])
                .labels(vec![Span::raw(first_label), Span::raw(last_label)]),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{:.0}", y_min)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn series(samples: &[HistorySample], field: impl Fn(&HistorySample) -> f64) -> Vec<(f64, f64)> {
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, field(s)))
        .collect()
}

/// Y axis bounds with headroom; trend values are unclamped so the axis
/// follows the data rather than assuming [0, 100].
fn value_bounds(samples: &[HistorySample]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in samples {
        for v in [s.efficiency, s.utilization, s.risk] {
            min = min.min(v);
            max = max.max(v);
        }
    }
    ((min - 5.0).floor().min(0.0), (max + 5.0).ceil().max(100.0))
}
