//! Drawing whatever a page container currently holds.

use crate::ui::widgets::cards::{render_card_grid, render_card_list};
use crate::ui::widgets::charts::render_chart;
use film_stats_core::surface::{Notice, NoticeTone};
use film_stats_core::{Surface, WidgetHandle, WidgetState};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    /// A dashboard panel.
    Compact,
    /// The fullscreen overlay.
    Full,
}

pub struct SlotView<'a> {
    pub container: &'a str,
    pub error_element: Option<&'a str>,
    pub density: Density,
}

pub fn render_slot(
    page: &Surface,
    view: &SlotView<'_>,
    throbber: &ThrobberState,
    f: &mut Frame<'_>,
    area: Rect,
) {
    if let Some(error) = view.error_element.and_then(|element| page.error_text(element)) {
        render_error(error, f, area);
        return;
    }
    if let Some(notice) = page.notice(view.container) {
        render_notice(notice, f, area);
        return;
    }

    match page.handle(view.container) {
        Some(WidgetHandle::Chart(id)) => {
            if let Some(chart) = page.charts().get(*id) {
                render_chart(chart, page.charts().defaults(), f, area);
            }
        }
        Some(WidgetHandle::Cards(grid)) => match view.density {
            Density::Compact => render_card_list(grid, f, area),
            Density::Full => render_card_grid(grid, f, area),
        },
        Some(WidgetHandle::Text(text)) => {
            let value = Paragraph::new(Span::styled(
                text.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center);
            f.render_widget(value, area);
        }
        None => match page.state(view.container) {
            WidgetState::Loading => render_loading(throbber, f, area),
            WidgetState::Failed => render_error("Error", f, area),
            WidgetState::Idle | WidgetState::Rendered => {}
        },
    }
}

pub fn render_loading(throbber: &ThrobberState, f: &mut Frame<'_>, area: Rect) {
    let spinner = Throbber::default()
        .throbber_style(Style::default().fg(Color::Cyan))
        .to_symbol_span(throbber);
    let line = TextLine::from(vec![
        spinner,
        Span::styled(" Loading...", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_error(text: &str, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(Color::Red)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_notice(notice: &Notice, f: &mut Frame<'_>, area: Rect) {
    let style = match notice.tone {
        NoticeTone::Muted => Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        NoticeTone::Error => Style::default().fg(Color::Red),
    };
    let paragraph = Paragraph::new(Span::styled(notice.text.as_str(), style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
