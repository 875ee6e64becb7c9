use film_stats_core::surface::{Card, CardGrid};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const CARD_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 5;

/// Compact rendering for a dashboard panel: one numbered line per card.
pub fn render_card_list(grid: &CardGrid, f: &mut Frame<'_>, area: Rect) {
    let lines: Vec<TextLine<'_>> = grid
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            TextLine::from(vec![
                Span::styled(format!("{:>2}. ", index + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    card.title.as_str(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", card.caption), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// Full grid for the overlay: as many columns as fit, header on top.
pub fn render_card_grid(grid: &CardGrid, f: &mut Frame<'_>, area: Rect) {
    let mut area = area;
    if let Some(header) = &grid.header {
        let header_line = Paragraph::new(Span::styled(
            header.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(header_line, Rect { height: 1, ..area });
        area.y += 2.min(area.height);
        area.height = area.height.saturating_sub(2);
    }

    let columns = columns_for(area.width);
    let rows = usize::from(area.height / CARD_HEIGHT);
    let visible = columns * rows;

    for (row_index, row) in grid.cards.chunks(columns).take(rows).enumerate() {
        let row_area = Rect {
            y: area.y + row_index as u16 * CARD_HEIGHT,
            height: CARD_HEIGHT,
            ..area
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for (card, cell) in row.iter().zip(cells.iter()) {
            render_card(card, f, *cell);
        }
    }

    if grid.cards.len() > visible && area.height > 0 {
        let more = Paragraph::new(Span::styled(
            format!("... and {} more", grid.cards.len() - visible),
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(
            more,
            Rect {
                y: area.bottom() - 1,
                height: 1,
                ..area
            },
        );
    }
}

fn render_card(card: &Card, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            card.title.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![TextLine::from(Span::styled(
        card.caption.as_str(),
        Style::default().fg(Color::Yellow),
    ))];
    if let Some(link) = card.link.as_deref().or(card.image_url.as_deref()) {
        lines.push(TextLine::from(Span::styled(link, Style::default().fg(Color::DarkGray))));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn columns_for(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}
