use crate::app::App;
use crate::ui::widgets::popup::{close_button_area, overlay_area, CLOSE_LABEL};
use crate::ui::widgets::slot::{render_loading, render_slot, Density, SlotView};
use film_stats_core::catalog::{OVERLAY_CHART_SURFACE, OVERLAY_CONTENT_HOST, OVERLAY_ERROR};
use film_stats_core::overlay::OverlayKind;
use film_stats_core::OverlayPhase;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// The fullscreen view, drawn over the dashboard.
pub fn render_overlay(app: &App, f: &mut Frame<'_>) {
    let page = app.dashboard.surface().borrow();
    let state = page.overlay();

    let area = overlay_area(f.area());
    f.render_widget(Clear, area);

    let title = state
        .source_widget()
        .and_then(|id| app.dashboard.widget(id))
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

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    match (state.phase(), state.kind()) {
        (OverlayPhase::Open, Some(kind)) => {
            let container = match kind {
                OverlayKind::Chart => OVERLAY_CHART_SURFACE,
                OverlayKind::List => OVERLAY_CONTENT_HOST,
            };
            let view = SlotView {
                container,
                error_element: Some(OVERLAY_ERROR),
                density: Density::Full,
            };
            render_slot(&page, &view, &app.throbber, f, layout[0]);
        }
        _ => render_loading(&app.throbber, f, layout[0]),
    }

    let hint = Paragraph::new(Span::styled(
        "Esc, x or a click outside closes this view",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hint, layout[1]);
}
