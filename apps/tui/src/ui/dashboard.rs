use crate::app::state::PANEL_COLUMNS;
use crate::app::App;
use crate::ui::widgets::slot::{render_slot, Density, SlotView};
use film_stats_core::WidgetSpec;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(1, 0));

    if app.show_help {
        render_help(f, area);
        return;
    }

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Length(4), // Stat tiles
            Constraint::Min(8),    // Panels
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area);

    render_title_section(app, f, main_layout[0]);
    render_stat_tiles(app, f, main_layout[1]);
    render_panels(app, f, main_layout[2]);
    render_status_section(app, f, main_layout[3]);
    render_shortcuts(f, main_layout[4]);
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Film Stats ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Watch log ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.dashboard.client().base_url(),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(title_block)
    .alignment(Alignment::Left);

    f.render_widget(title, area);
}

fn render_stat_tiles(app: &App, f: &mut Frame<'_>, area: Rect) {
    let tiles = app.stat_tiles();
    if tiles.is_empty() {
        return;
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, tiles.len() as u32); tiles.len()])
        .split(area);

    let page = app.dashboard.surface().borrow();
    for (spec, cell) in tiles.into_iter().zip(cells.iter()) {
        let block = Block::default()
            .title(format!(" {} ", spec.title()))
            .title_style(Style::default().fg(Color::Gray))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(*cell);
        f.render_widget(block, *cell);
        render_slot(&page, &slot_view(spec, Density::Compact), &app.throbber, f, inner);
    }
}

fn render_panels(app: &App, f: &mut Frame<'_>, area: Rect) {
    let panels = app.panels();
    let row_count = panels.len().div_ceil(PANEL_COLUMNS).max(1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);

    let page = app.dashboard.surface().borrow();
    for (row_index, row) in panels.chunks(PANEL_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, PANEL_COLUMNS as u32); PANEL_COLUMNS])
            .split(rows[row_index]);

        for (column, spec) in row.iter().enumerate() {
            let index = row_index * PANEL_COLUMNS + column;
            let selected = index == app.selected_panel;
            let color = if selected { Color::Yellow } else { Color::Cyan };

            let block = Block::default()
                .title(format!(" {} ", spec.title()))
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color));
            let inner = block.inner(cells[column]);
            f.render_widget(block, cells[column]);
            render_slot(&page, &slot_view(spec, Density::Compact), &app.throbber, f, inner);
        }
    }
}

fn slot_view(spec: &WidgetSpec, density: Density) -> SlotView<'static> {
    SlotView {
        container: spec.container(),
        error_element: spec.error_element(),
        density,
    }
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        let hint = app
            .selected()
            .map(|spec| format!("Selected: {}", spec.title()))
            .unwrap_or_default();
        Text::from(Span::styled(hint, Style::default().fg(Color::Gray)))
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };

        Text::from(Span::styled(app.status_message.as_str(), style))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let shortcuts = TextLine::from(vec![
        Span::styled("Arrows", key),
        Span::raw(" select  "),
        Span::styled("Enter", key),
        Span::raw(" fullscreen  "),
        Span::styled("r/R", key),
        Span::raw(" refresh  "),
        Span::styled("F1", key),
        Span::raw(" help  "),
        Span::styled("q", key),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(shortcuts).alignment(Alignment::Center), area);
}

fn render_help(f: &mut Frame<'_>, area: Rect) {
    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let shortcut = |keys: &'static str, what: &'static str| {
        TextLine::from(vec![Span::styled(keys, key), Span::raw(what)])
    };

    let help_text = vec![
        TextLine::from(Span::styled(
            "Film Stats",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Charts and lists built from your film watching log."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Dashboard:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        shortcut("  Arrows / Tab", " - Select a panel"),
        shortcut("  Enter / f", " - Open the selected panel fullscreen"),
        shortcut("  r", " - Reload the selected panel"),
        shortcut("  R", " - Reload every widget"),
        shortcut("  F1", " - Toggle this help screen"),
        shortcut("  q", " - Quit application"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Fullscreen view:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        shortcut("  Esc", " - Close"),
        shortcut("  x / click [x]", " - Close"),
        shortcut("  Click outside", " - Close"),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(help_block)
        .wrap(Wrap { trim: false });
    f.render_widget(help_paragraph, area);
}
