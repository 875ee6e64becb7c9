mod animation;
mod fetch;
mod render;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use film_stats_core::{
    ApiClient, CloseTrigger, Dashboard, OpenOutcome, RenderOutcome, StyleOverrides,
};
use ratzilla::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen_futures::spawn_local;

use crate::animation::advance_spinner;
use crate::fetch::{page_origin, FetchTransport};
use crate::render::{panels, render_page, trigger_for_click, View, PANEL_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(isize),
    Expand,
    Close(CloseTrigger),
    Refresh,
}

/// Keys. While the overlay is up only the close keys do anything.
fn command_for(code: &KeyCode, overlay_open: bool) -> Option<Command> {
    if overlay_open {
        return match code {
            KeyCode::Esc => Some(Command::Close(CloseTrigger::EscapeKey)),
            KeyCode::Char('x') => Some(Command::Close(CloseTrigger::CloseButton)),
            _ => None,
        };
    }
    match code {
        KeyCode::Left => Some(Command::Move(-1)),
        KeyCode::Right => Some(Command::Move(1)),
        KeyCode::Up => Some(Command::Move(-(PANEL_COLUMNS as isize))),
        KeyCode::Down => Some(Command::Move(PANEL_COLUMNS as isize)),
        KeyCode::Enter | KeyCode::Char('f') => Some(Command::Expand),
        KeyCode::Char('r') => Some(Command::Refresh),
        _ => None,
    }
}

/// Left clicks while the overlay is up: the `[x]` or the backdrop.
fn command_for_click(event: &MouseEvent, view: &View, overlay_open: bool) -> Option<Command> {
    if !overlay_open || event.kind != MouseEventKind::SingleClick(MouseButton::Left) {
        return None;
    }
    trigger_for_click(view.viewport, event.col, event.row).map(Command::Close)
}

fn wrap_selection(selected: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (selected as isize + delta).rem_euclid(count as isize) as usize
}

fn run_command(dashboard: &Dashboard, view: &RefCell<View>, command: Command) {
    let selected = panels(dashboard).get(view.borrow().selected).copied().cloned();

    match command {
        Command::Move(delta) => {
            let count = panels(dashboard).len();
            let mut view = view.borrow_mut();
            view.selected = wrap_selection(view.selected, delta, count);
        }
        Command::Expand => {
            let Some(spec) = selected else {
                return;
            };
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let OpenOutcome::Failed(error) = dashboard.fullscreen().open(spec.id()).await {
                    log::warn!("fullscreen view of {} failed: {error}", spec.id());
                }
            });
        }
        Command::Close(trigger) => dashboard.fullscreen().handle_trigger(trigger),
        Command::Refresh => {
            let Some(spec) = selected else {
                return;
            };
            let task = dashboard.render_task(&spec);
            spawn_local(async move {
                if let RenderOutcome::Failed(error) = task.await {
                    log::warn!("refresh of {} failed: {error}", spec.id());
                }
            });
        }
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to start logging: {error}").into());
    }

    let Some(origin) = page_origin() else {
        web_sys::console::error_1(&"Film stats needs a browser window".into());
        return Ok(());
    };
    let client = ApiClient::new(Rc::new(FetchTransport), origin);
    let dashboard = match Dashboard::new(client, &StyleOverrides::dashboard_theme()) {
        Ok(dashboard) => dashboard,
        Err(error) => {
            web_sys::console::error_1(&format!("Invalid chart theme: {error}").into());
            return Ok(());
        }
    };

    for task in dashboard.render_tasks() {
        spawn_local(async move {
            task.await;
        });
    }

    let view = Rc::new(RefCell::new(View::default()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let dashboard = dashboard.clone();
        let view = view.clone();
        move |event| {
            let overlay_open = !dashboard.fullscreen().state().is_closed();
            if let Some(command) = command_for(&event.code, overlay_open) {
                run_command(&dashboard, &view, command);
            }
        }
    })?;

    terminal.on_mouse_event({
        let dashboard = dashboard.clone();
        let view = view.clone();
        move |event| {
            let overlay_open = !dashboard.fullscreen().state().is_closed();
            let command = command_for_click(&event, &view.borrow(), overlay_open);
            if let Some(command) = command {
                run_command(&dashboard, &view, command);
            }
        }
    })?;

    terminal.draw_web(move |f| {
        {
            let mut view = view.borrow_mut();
            let (spinner, last_tick) =
                advance_spinner(view.spinner, view.last_tick, js_sys::Date::now() / 1000.0);
            view.spinner = spinner;
            view.last_tick = last_tick;
            view.viewport = f.area();
        }
        render_page(&dashboard, &view.borrow(), f);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{close_button_area, overlay_area};
    use ratzilla::ratatui::layout::Rect;

    #[test]
    fn overlay_only_listens_for_close_keys() {
        assert_eq!(
            command_for(&KeyCode::Esc, true),
            Some(Command::Close(CloseTrigger::EscapeKey))
        );
        assert_eq!(
            command_for(&KeyCode::Char('x'), true),
            Some(Command::Close(CloseTrigger::CloseButton))
        );
        assert_eq!(command_for(&KeyCode::Enter, true), None);
        assert_eq!(command_for(&KeyCode::Esc, false), None);
    }

    #[test]
    fn dashboard_keys() {
        assert_eq!(command_for(&KeyCode::Char('f'), false), Some(Command::Expand));
        assert_eq!(command_for(&KeyCode::Down, false), Some(Command::Move(3)));
        assert_eq!(command_for(&KeyCode::Char('r'), false), Some(Command::Refresh));
    }

    fn click(kind: MouseEventKind, col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            col,
            row,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    #[test]
    fn clicks_close_through_the_button_or_the_backdrop() {
        let view = View {
            viewport: Rect::new(0, 0, 100, 40),
            ..View::default()
        };
        let overlay = overlay_area(view.viewport);
        let button = close_button_area(overlay);
        let left = MouseEventKind::SingleClick(MouseButton::Left);

        assert_eq!(
            command_for_click(&click(left, button.x + 1, button.y), &view, true),
            Some(Command::Close(CloseTrigger::CloseButton))
        );
        assert_eq!(
            command_for_click(&click(left, 0, 0), &view, true),
            Some(Command::Close(CloseTrigger::Backdrop))
        );
        assert_eq!(
            command_for_click(&click(left, overlay.x + 5, overlay.y + 5), &view, true),
            None
        );
    }

    #[test]
    fn clicks_are_ignored_without_an_overlay_or_with_other_buttons() {
        let view = View {
            viewport: Rect::new(0, 0, 100, 40),
            ..View::default()
        };
        let left = MouseEventKind::SingleClick(MouseButton::Left);
        let right = MouseEventKind::SingleClick(MouseButton::Right);

        assert_eq!(command_for_click(&click(left, 0, 0), &view, false), None);
        assert_eq!(command_for_click(&click(right, 0, 0), &view, true), None);
        assert_eq!(
            command_for_click(&click(MouseEventKind::Moved, 0, 0), &view, true),
            None
        );
    }

    #[test]
    fn selection_wraps() {
        assert_eq!(wrap_selection(0, -1, 6), 5);
        assert_eq!(wrap_selection(4, 3, 6), 1);
        assert_eq!(wrap_selection(2, 1, 0), 0);
    }
}
