use crate::app::state::{App, PANEL_COLUMNS};
use crate::ui::widgets::popup::{close_button_area, overlay_area};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use film_stats_core::CloseTrigger;
use ratatui::layout::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    CloseHelp,
    MoveSelection(isize),
    Expand,
    Close(CloseTrigger),
    Refresh,
    RefreshAll,
}

/// Key bindings. While the overlay is up only the close keys and quit work;
/// while help is up only F1 and Esc do.
pub const fn action_for(key: KeyCode, overlay_open: bool, help_open: bool) -> Option<Action> {
    if help_open {
        return match key {
            KeyCode::F(1) | KeyCode::Esc => Some(Action::CloseHelp),
            _ => None,
        };
    }

    if overlay_open {
        return match key {
            KeyCode::Esc => Some(Action::Close(CloseTrigger::EscapeKey)),
            KeyCode::Char('x') => Some(Action::Close(CloseTrigger::CloseButton)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Left | KeyCode::BackTab => Some(Action::MoveSelection(-1)),
        KeyCode::Right | KeyCode::Tab => Some(Action::MoveSelection(1)),
        KeyCode::Up => Some(Action::MoveSelection(-(PANEL_COLUMNS as isize))),
        KeyCode::Down => Some(Action::MoveSelection(PANEL_COLUMNS as isize)),
        KeyCode::Enter | KeyCode::Char('f') => Some(Action::Expand),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('R') => Some(Action::RefreshAll),
        _ => None,
    }
}

/// A left click on the overlay's `[x]` or on the backdrop around it.
pub fn trigger_for_click(
    viewport: ratatui::layout::Rect,
    column: u16,
    row: u16,
) -> Option<CloseTrigger> {
    let position = Position::new(column, row);
    let overlay = overlay_area(viewport);

    if close_button_area(overlay).contains(position) {
        Some(CloseTrigger::CloseButton)
    } else if overlay.contains(position) {
        None
    } else {
        Some(CloseTrigger::Backdrop)
    }
}

pub fn handle_input(app: &mut App, key: KeyCode) {
    let Some(action) = action_for(key, app.overlay_active(), app.show_help) else {
        return;
    };
    apply(app, action);
}

pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    if event.kind != MouseEventKind::Down(MouseButton::Left) || !app.overlay_active() {
        return;
    }
    if let Some(trigger) = trigger_for_click(app.viewport, event.column, event.row) {
        apply(app, Action::Close(trigger));
    }
}

fn apply(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.running = false,
        Action::ToggleHelp => app.show_help = !app.show_help,
        Action::CloseHelp => app.show_help = false,
        Action::MoveSelection(delta) => app.move_selection(delta),
        Action::Expand => app.expand_selected(),
        Action::Close(trigger) => app.close_overlay(trigger),
        Action::Refresh => app.refresh_selected(),
        Action::RefreshAll => app.refresh_all(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::offline_app;
    use ratatui::layout::Rect;

    #[test]
    fn dashboard_keys() {
        assert_eq!(action_for(KeyCode::Enter, false, false), Some(Action::Expand));
        assert_eq!(action_for(KeyCode::Char('f'), false, false), Some(Action::Expand));
        assert_eq!(action_for(KeyCode::Char('R'), false, false), Some(Action::RefreshAll));
        assert_eq!(
            action_for(KeyCode::Down, false, false),
            Some(Action::MoveSelection(3))
        );
        assert_eq!(action_for(KeyCode::Esc, false, false), None);
    }

    #[test]
    fn overlay_keys_route_through_close_triggers() {
        assert_eq!(
            action_for(KeyCode::Esc, true, false),
            Some(Action::Close(CloseTrigger::EscapeKey))
        );
        assert_eq!(
            action_for(KeyCode::Char('x'), true, false),
            Some(Action::Close(CloseTrigger::CloseButton))
        );
        assert_eq!(action_for(KeyCode::Enter, true, false), None);
        assert_eq!(action_for(KeyCode::Char('r'), true, false), None);
    }

    #[test]
    fn help_swallows_other_keys() {
        assert_eq!(action_for(KeyCode::Esc, true, true), Some(Action::CloseHelp));
        assert_eq!(action_for(KeyCode::Char('q'), false, true), None);
    }

    #[test]
    fn clicks_map_to_triggers() {
        let viewport = Rect::new(0, 0, 100, 40);
        let overlay = overlay_area(viewport);
        let button = close_button_area(overlay);

        assert_eq!(
            trigger_for_click(viewport, button.x, button.y),
            Some(CloseTrigger::CloseButton)
        );
        assert_eq!(trigger_for_click(viewport, overlay.x + 2, overlay.y + 2), None);
        assert_eq!(trigger_for_click(viewport, 0, 0), Some(CloseTrigger::Backdrop));
    }

    #[test]
    fn navigation_and_quit() {
        let mut app = offline_app();
        handle_input(&mut app, KeyCode::Right);
        handle_input(&mut app, KeyCode::Right);
        assert_eq!(app.selected().map(|spec| spec.id()), Some("watched-over-time"));

        handle_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        handle_input(&mut app, KeyCode::Esc);
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
