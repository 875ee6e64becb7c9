//! Drawing the page model into the ratzilla terminal.

use film_stats_core::catalog::{OVERLAY_CHART_SURFACE, OVERLAY_CONTENT_HOST, OVERLAY_ERROR};
use film_stats_core::chart::ChartKind;
use film_stats_core::format::value_with_unit;
use film_stats_core::overlay::OverlayKind;
use film_stats_core::surface::CardGrid;
use film_stats_core::{
    ChartDefaults, ChartInstance, CloseTrigger, Dashboard, OverlayPhase, Rgba, Surface,
    WidgetHandle, WidgetSpec, WidgetState,
};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Clear, Dataset, GraphType,
        Paragraph, Wrap,
    },
    Frame,
};

use crate::animation::spinner_symbol;

pub const PANEL_COLUMNS: usize = 3;

const CLOSE_LABEL: &str = "[x]";

const BACKGROUND: Rgba = Rgba::rgb(0x11, 0x18, 0x27);

/// What the page draws besides the dashboard itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct View {
    pub selected: usize,
    pub spinner: f64,
    pub last_tick: Option<f64>,
    /// Frame area of the last draw, for mouse hit-testing.
    pub viewport: Rect,
}

/// Where the overlay is drawn inside the frame.
pub fn overlay_area(viewport: Rect) -> Rect {
    viewport.inner(Margin::new(viewport.width / 20, viewport.height / 14))
}

/// The `[x]` on the overlay's top border, right-aligned.
pub fn close_button_area(overlay: Rect) -> Rect {
    let width = CLOSE_LABEL.len() as u16;
    if overlay.width < width + 2 {
        return Rect::new(overlay.x, overlay.y, 0, 0);
    }
    Rect::new(overlay.right() - width - 2, overlay.y, width, 1)
}

/// A click on the `[x]` or on the backdrop around the overlay.
pub fn trigger_for_click(viewport: Rect, col: u16, row: u16) -> Option<CloseTrigger> {
    let position = Position::new(col, row);
    let overlay = overlay_area(viewport);

    if close_button_area(overlay).contains(position) {
        Some(CloseTrigger::CloseButton)
    } else if overlay.contains(position) {
        None
    } else {
        Some(CloseTrigger::Backdrop)
    }
}

pub fn panels(dashboard: &Dashboard) -> Vec<&WidgetSpec> {
    dashboard.widgets().iter().filter(|spec| spec.is_expandable()).collect()
}

pub fn render_page(dashboard: &Dashboard, view: &View, f: &mut Frame<'_>) {
    let area = f.area();
    let block = Block::default()
        .title("Film Stats")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(inner);

    let page = dashboard.surface().borrow();
    render_stat_tiles(dashboard, &page, view, f, layout[0]);
    render_panels(dashboard, &page, view, f, layout[1]);
    render_footer(f, layout[2]);

    if !page.overlay().is_closed() {
        render_overlay(dashboard, &page, view, f, area);
    }
}

fn render_stat_tiles(
    dashboard: &Dashboard,
    page: &Surface,
    view: &View,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let tiles: Vec<&WidgetSpec> = dashboard
        .widgets()
        .iter()
        .filter(|spec| !spec.is_expandable())
        .collect();
    if tiles.is_empty() {
        return;
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, tiles.len() as u32); tiles.len()])
        .split(area);

    for (spec, cell) in tiles.into_iter().zip(cells.iter()) {
        let block = panel_block(spec.title(), Color::DarkGray);
        let inner = block.inner(*cell);
        f.render_widget(block, *cell);
        render_container(page, spec.container(), spec.error_element(), false, view, f, inner);
    }
}

fn render_panels(
    dashboard: &Dashboard,
    page: &Surface,
    view: &View,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let panels = panels(dashboard);
    let row_count = panels.len().div_ceil(PANEL_COLUMNS).max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);

    for (row_index, row) in panels.chunks(PANEL_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, PANEL_COLUMNS as u32); PANEL_COLUMNS])
            .split(rows[row_index]);

        for (column, spec) in row.iter().enumerate() {
            let selected = row_index * PANEL_COLUMNS + column == view.selected;
            let color = if selected { Color::Yellow } else { Color::Cyan };
            let block = panel_block(spec.title(), color);
            let inner = block.inner(cells[column]);
            f.render_widget(block, cells[column]);
            render_container(page, spec.container(), spec.error_element(), false, view, f, inner);
        }
    }
}

fn render_footer(f: &mut Frame<'_>, area: Rect) {
    let footer = Paragraph::new("Arrows: select | Enter/f: fullscreen | r: refresh | Esc/x: close")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(footer, area);
}

fn render_overlay(
    dashboard: &Dashboard,
    page: &Surface,
    view: &View,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let state = page.overlay();
    let area = overlay_area(area);
    f.render_widget(Clear, area);

    let title = state
        .source_widget()
        .and_then(|id| dashboard.widget(id))
        .map_or("Fullscreen", |spec| spec.title());
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(Span::styled(
            CLOSE_LABEL,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        close_button_area(area),
    );

    let container = match (state.phase(), state.kind()) {
        (OverlayPhase::Open, Some(OverlayKind::Chart)) => OVERLAY_CHART_SURFACE,
        (OverlayPhase::Open, Some(OverlayKind::List)) => OVERLAY_CONTENT_HOST,
        _ => return render_loading(view, f, inner),
    };
    render_container(page, container, Some(OVERLAY_ERROR), true, view, f, inner);
}

fn panel_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn render_container(
    page: &Surface,
    container: &str,
    error_element: Option<&str>,
    full: bool,
    view: &View,
    f: &mut Frame<'_>,
    area: Rect,
) {
    if let Some(error) = error_element.and_then(|element| page.error_text(element)) {
        render_text(error, Style::default().fg(Color::Red), f, area);
        return;
    }
    if let Some(notice) = page.notice(container) {
        let style = match notice.tone {
            film_stats_core::surface::NoticeTone::Muted => Style::default().fg(Color::Gray),
            film_stats_core::surface::NoticeTone::Error => Style::default().fg(Color::Red),
        };
        render_text(&notice.text, style, f, area);
        return;
    }

    match page.handle(container) {
        Some(WidgetHandle::Chart(id)) => {
            if let Some(chart) = page.charts().get(*id) {
                render_chart(chart, page.charts().defaults(), f, area);
            }
        }
        Some(WidgetHandle::Cards(grid)) => render_cards(grid, full, f, area),
        Some(WidgetHandle::Text(text)) => render_text(
            text,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            f,
            area,
        ),
        None => match page.state(container) {
            WidgetState::Loading => render_loading(view, f, area),
            WidgetState::Failed => render_text("Error", Style::default().fg(Color::Red), f, area),
            WidgetState::Idle | WidgetState::Rendered => {}
        },
    }
}

fn render_text(text: &str, style: Style, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_loading(view: &View, f: &mut Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![
        Span::styled(spinner_symbol(view.spinner), Style::default().fg(Color::Cyan)),
        Span::styled(" Loading...", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_cards(grid: &CardGrid, full: bool, f: &mut Frame<'_>, area: Rect) {
    let mut lines = Vec::new();
    if full {
        if let Some(header) = &grid.header {
            lines.push(TextLine::from(Span::styled(
                header.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            lines.push(TextLine::from(""));
        }
    }
    for (index, card) in grid.cards.iter().enumerate() {
        let mut spans = vec![
            Span::styled(format!("{:>2}. ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(
                card.title.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", card.caption), Style::default().fg(Color::Yellow)),
        ];
        if full {
            if let Some(link) = card.link.as_deref().or(card.image_url.as_deref()) {
                spans.push(Span::styled(format!("  {link}"), Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(TextLine::from(spans));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn to_color(color: Rgba) -> Color {
    let flat = color.blend_over(BACKGROUND);
    Color::Rgb(flat.r, flat.g, flat.b)
}

fn render_chart(chart: &ChartInstance, defaults: &ChartDefaults, f: &mut Frame<'_>, area: Rect) {
    let data = &chart.config.data;
    let kind = chart.config.kind;
    let Some(dataset) = data.datasets.first().filter(|_| !data.is_empty()) else {
        render_text("No data available", Style::default().fg(Color::Gray), f, area);
        return;
    };
    let text_style = Style::default().fg(to_color(defaults.text_color));

    match kind {
        ChartKind::Bar => {
            let bars: Vec<Bar<'_>> = data
                .labels
                .iter()
                .zip(&dataset.data)
                .enumerate()
                .map(|(index, (label, value))| {
                    let color = to_color(defaults.point_color(kind, dataset, 0, index));
                    Bar::default()
                        .value(value.max(0.0).round() as u64)
                        .label(TextLine::styled(label.clone(), text_style))
                        .style(Style::default().fg(color))
                        .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                })
                .collect();
            let bar_width = (area.width / data.labels.len().max(1) as u16)
                .saturating_sub(1)
                .clamp(1, 12);
            let bar_chart = BarChart::default()
                .data(BarGroup::default().bars(&bars))
                .max(data.max_value().ceil().max(1.0) as u64)
                .bar_gap(1)
                .bar_width(bar_width);
            f.render_widget(bar_chart, area);
        }
        ChartKind::Line => {
            let points: Vec<(f64, f64)> = dataset
                .data
                .iter()
                .enumerate()
                .map(|(index, value)| (index as f64, *value))
                .collect();
            let last = data.labels.len().saturating_sub(1);
            let top = (data.max_value() + data.max_value() / 10.0).ceil().max(1.0);
            let line = Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(to_color(defaults.point_color(kind, dataset, 0, 0))))
                .data(&points);
            let line_chart = Chart::new(vec![line])
                .x_axis(
                    Axis::default()
                        .style(text_style)
                        .bounds([0.0, last.max(1) as f64])
                        .labels(vec![
                            Span::raw(data.labels[0].clone()),
                            Span::raw(data.labels[last].clone()),
                        ]),
                )
                .y_axis(
                    Axis::default()
                        .style(text_style)
                        .bounds([0.0, top])
                        .labels(vec![Span::raw("0"), Span::raw(format!("{top}"))]),
                );
            f.render_widget(line_chart, area);
        }
        ChartKind::Pie | ChartKind::Doughnut => {
            let unit = chart.config.options.value_unit.as_deref();
            let total: f64 = dataset.data.iter().copied().filter(|value| *value > 0.0).sum();
            let lines: Vec<TextLine<'_>> = data
                .labels
                .iter()
                .zip(&dataset.data)
                .enumerate()
                .map(|(index, (label, value))| {
                    let share = if total > 0.0 { value.max(0.0) / total } else { 0.0 };
                    let color = to_color(defaults.point_color(kind, dataset, 0, index));
                    TextLine::from(vec![
                        Span::styled("■ ", Style::default().fg(color)),
                        Span::styled(label.as_str(), text_style),
                        Span::styled(
                            format!("  {} ({:.1}%)", value_with_unit(*value, unit), share * 100.0),
                            Style::default().fg(Color::White),
                        ),
                    ])
                })
                .collect();
            f.render_widget(Paragraph::new(lines), area);
        }
    }
}
