use crate::ui::widgets::theme::{point_color, text_color};
use film_stats_core::chart::{AxisOptions, ChartKind};
use film_stats_core::format::value_with_unit;
use film_stats_core::{ChartDefaults, ChartInstance};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

/// Draw a chart into `area`. The caller owns the surrounding block.
pub fn render_chart(
    chart: &ChartInstance,
    defaults: &ChartDefaults,
    f: &mut Frame<'_>,
    area: Rect,
) {
    if chart.config.data.is_empty() {
        let paragraph = Paragraph::new("No data available")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    match chart.config.kind {
        ChartKind::Bar => render_bar_chart(chart, defaults, f, area),
        ChartKind::Line => render_line_chart(chart, defaults, f, area),
        ChartKind::Pie | ChartKind::Doughnut => render_distribution(chart, defaults, f, area),
    }
}

fn render_bar_chart(
    chart: &ChartInstance,
    defaults: &ChartDefaults,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let data = &chart.config.data;
    let kind = chart.config.kind;
    let value_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(text_color(defaults));

    let groups: Vec<Vec<Bar<'_>>> = data
        .labels
        .iter()
        .enumerate()
        .map(|(point, label)| {
            data.datasets
                .iter()
                .enumerate()
                .map(|(index, dataset)| {
                    let value = dataset.data.get(point).copied().unwrap_or_default();
                    let mut bar = Bar::default()
                        .value(value.max(0.0).round() as u64)
                        .style(Style::default().fg(point_color(
                            defaults, kind, dataset, index, point,
                        )))
                        .value_style(value_style);
                    if data.datasets.len() == 1 {
                        bar = bar.label(TextLine::styled(label.clone(), label_style));
                    }
                    bar
                })
                .collect()
        })
        .collect();

    let bar_count = data.labels.len() * data.datasets.len().max(1);
    let bar_gap = u16::from(data.datasets.len() == 1);
    let bar_width = (area.width / bar_count.max(1) as u16)
        .saturating_sub(bar_gap)
        .clamp(1, 12);
    let max_value = data.max_value().ceil().max(1.0) as u64;

    let mut bar_chart = BarChart::default()
        .max(max_value)
        .bar_gap(bar_gap)
        .group_gap(1)
        .bar_width(bar_width);

    for (point, bars) in groups.iter().enumerate() {
        let mut group = BarGroup::default().bars(bars);
        if data.datasets.len() > 1 {
            group = group.label(TextLine::styled(data.labels[point].clone(), label_style));
        }
        bar_chart = bar_chart.data(group);
    }

    f.render_widget(bar_chart, area);
}

fn render_line_chart(
    chart: &ChartInstance,
    defaults: &ChartDefaults,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let data = &chart.config.data;
    let options = &chart.config.options;
    let axis_style = Style::default().fg(text_color(defaults));

    let points: Vec<Vec<(f64, f64)>> = data
        .datasets
        .iter()
        .map(|dataset| {
            dataset
                .data
                .iter()
                .enumerate()
                .map(|(index, value)| (index as f64, *value))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset<'_>> = data
        .datasets
        .iter()
        .zip(&points)
        .enumerate()
        .map(|(index, (dataset, points))| {
            let mut line = Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(point_color(
                    defaults,
                    ChartKind::Line,
                    dataset,
                    index,
                    0,
                )))
                .data(points);
            if options.legend.display && !dataset.label.is_empty() {
                line = line.name(dataset.label.clone());
            }
            line
        })
        .collect();

    let last = data.labels.len().saturating_sub(1);
    let x_labels: Vec<Span<'_>> = edge_labels(last)
        .into_iter()
        .map(|index| Span::raw(data.labels[index].clone()))
        .collect();

    let top = nice_ceiling(data.max_value());
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{}", (top / 2.0).round())),
        Span::raw(format!("{top}")),
    ];

    let line_chart = Chart::new(datasets)
        .x_axis(
            axis(options.x_axis.as_ref(), axis_style)
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            axis(options.y_axis.as_ref(), axis_style)
                .bounds([0.0, top])
                .labels(y_labels),
        );

    f.render_widget(line_chart, area);
}

fn axis<'a>(options: Option<&AxisOptions>, style: Style) -> Axis<'a> {
    let mut axis = Axis::default().style(style);
    if let Some(title) = options.and_then(|options| options.title.clone()) {
        axis = axis.title(title);
    }
    axis
}

/// First, middle and last label index, without duplicates.
fn edge_labels(last: usize) -> Vec<usize> {
    let mut indices = vec![0, last / 2, last];
    indices.dedup();
    indices
}

/// Round a maximum up to a whole number with a little headroom.
fn nice_ceiling(max: f64) -> f64 {
    (max + max / 10.0).ceil().max(1.0)
}

/// Pie and doughnut charts as one proportional bar per slice.
fn render_distribution(
    chart: &ChartInstance,
    defaults: &ChartDefaults,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let data = &chart.config.data;
    let kind = chart.config.kind;
    let Some(dataset) = data.datasets.first() else {
        return;
    };
    let unit = chart.config.options.value_unit.as_deref();
    let total: f64 = dataset.data.iter().copied().filter(|value| *value > 0.0).sum();
    let symbol = if kind == ChartKind::Doughnut { "▒" } else { "█" };

    let label_width = data
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .min(usize::from(area.width / 3));
    let bar_space = usize::from(area.width).saturating_sub(label_width + 22).max(1);

    let lines: Vec<TextLine<'_>> = data
        .labels
        .iter()
        .zip(&dataset.data)
        .enumerate()
        .take(usize::from(area.height))
        .map(|(index, (label, value))| {
            let share = if total > 0.0 { value.max(0.0) / total } else { 0.0 };
            let filled = (share * bar_space as f64).round() as usize;
            let label: String = label.chars().take(label_width).collect();
            TextLine::from(vec![
                Span::styled(
                    format!("{label:<label_width$} "),
                    Style::default().fg(text_color(defaults)),
                ),
                Span::styled(
                    symbol.repeat(filled.max(1)),
                    Style::default().fg(point_color(defaults, kind, dataset, 0, index)),
                ),
                Span::styled(
                    format!(" {} ({:.1}%)", value_with_unit(*value, unit), share * 100.0),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_labels_skip_duplicates() {
        assert_eq!(edge_labels(0), vec![0]);
        assert_eq!(edge_labels(1), vec![0, 1]);
        assert_eq!(edge_labels(10), vec![0, 5, 10]);
    }

    #[test]
    fn ceiling_leaves_headroom() {
        assert!((nice_ceiling(0.0) - 1.0).abs() < f64::EPSILON);
        assert!((nice_ceiling(10.0) - 11.0).abs() < f64::EPSILON);
        assert!((nice_ceiling(25.0) - 28.0).abs() < f64::EPSILON);
    }
}
