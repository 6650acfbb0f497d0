use crate::app::state::AppState;
use crate::data::theme_loader::ThemeLoader;
use crate::slider::input::{PointerAction, PointerEvent};
use crate::ui::tui::{on_track, Tui, UiLayout};
use crate::utils::input::{map_key, map_mouse, Action};
use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::{Duration, Instant};

pub fn run(app: &mut AppState) -> Result<()> {
    let mut tui = Tui::new()?;
    tui.enter()?;

    let res = run_loop(app, &mut tui);

    tui.exit()?;
    res
}

fn run_loop(app: &mut AppState, tui: &mut Tui) -> Result<()> {
    let mut last_layout = tui.draw(app)?;
    app.take_redraw();

    let tick = Duration::from_millis(app.config.tick_ms.max(1));

    while !app.should_quit {
        // one event per turn: whatever it changes is on screen before the
        // next one is read
        if event::poll(tick)? {
            let action = match event::read()? {
                Event::Key(k) => map_key(k),
                Event::Mouse(m) => map_mouse(m),
                Event::FocusLost => Action::CancelPointer,
                Event::Resize(_, _) => {
                    app.needs_redraw = true;
                    Action::CancelPointer
                }
                _ => Action::None,
            };
            handle_action(app, action, &last_layout);
        }

        app.tick(Instant::now());

        if app.take_redraw() {
            last_layout = tui.draw(app)?;
            // layout reports made while drawing are already on screen
            app.take_redraw();
        }
    }

    Ok(())
}

pub fn handle_action(app: &mut AppState, action: Action, layout: &UiLayout) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::CycleTheme => cycle_theme(app),
        Action::Pointer { col, row, action } => dispatch_pointer(app, layout, col, row, action),
        Action::CancelPointer => {
            let snap = app.slider.snapshot();
            if snap.pointer_down {
                app.slider
                    .handle_pointer(PointerEvent::new(snap.touch_x, 0.0, PointerAction::Cancel));
            }
        }
        Action::None => {}
    }
}

/// Presses must land on the track; once pressed, the slider keeps the
/// pointer until it is released, wherever the drag goes.
fn dispatch_pointer(app: &mut AppState, layout: &UiLayout, col: u16, row: u16, action: PointerAction) {
    let captured = app.slider.snapshot().pointer_down;
    let hit = on_track(layout, col, row);

    let forward = match action {
        PointerAction::Press | PointerAction::Other => hit,
        PointerAction::Move | PointerAction::Release | PointerAction::Cancel => captured,
    };
    if !forward {
        return;
    }

    // cell centres, in track-local space
    let x = app.slider.bounds().to_local(col as f32 + 0.5);
    let y = row as f32 + 0.5 - layout.track.y as f32;
    let handled = app.slider.handle_pointer(PointerEvent::new(x, y, action));
    if !handled.is_consumed() {
        log::trace!("slider passed on {action:?} at {col},{row}");
    }
}

fn cycle_theme(app: &mut AppState) {
    let next = app.theme.name.next();
    match ThemeLoader::load_with(&app.asset_root, next.as_key(), app.theme.capability) {
        Ok(theme) => {
            app.set_theme(theme);
            if let Err(e) = app.config.save(&app.asset_root) {
                log::warn!("config save failed: {e:#}");
            }
            app.set_toast(format!("Theme: {}", next.as_label()));
        }
        Err(e) => {
            log::warn!("theme load failed: {e:#}");
            app.set_toast("Theme load error");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::config::Config;
    use crate::ui::theme::ColorCapability;
    use crate::ui::tui::compute_layout;
    use ratatui::layout::Rect;

    fn setup() -> (AppState, UiLayout, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let theme = ThemeLoader::load_with(dir.path(), "classic", ColorCapability::TrueColor).unwrap();
        let mut app = AppState::new(Config::default(), theme, dir.path().to_path_buf()).unwrap();
        // track: columns 4..76 on row 11
        let layout = compute_layout(Rect::new(0, 0, 80, 25), 4, 1, 4).unwrap();
        app.slider.on_layout(layout.track_bounds());
        app.take_redraw();
        (app, layout, dir)
    }

    fn pointer(col: u16, row: u16, action: PointerAction) -> Action {
        Action::Pointer { col, row, action }
    }

    #[test]
    fn press_off_track_is_ignored() {
        let (mut app, layout, _dir) = setup();
        handle_action(&mut app, pointer(40, 5, PointerAction::Press), &layout);
        assert!(!app.slider.snapshot().pointer_down);
        assert!(!app.take_redraw());
    }

    #[test]
    fn drag_is_captured_outside_track() {
        let (mut app, layout, _dir) = setup();
        handle_action(&mut app, pointer(40, 11, PointerAction::Press), &layout);
        let snap = app.slider.snapshot();
        assert!(snap.pointer_down);
        assert_eq!(snap.touch_x, 36.5);
        assert!(app.take_redraw());

        // dragged well past the right end and off the row
        handle_action(&mut app, pointer(79, 3, PointerAction::Move), &layout);
        assert_eq!(app.slider.snapshot().touch_x, 72.0);
        assert_eq!(app.slider.snapshot().percent(), 100);

        handle_action(&mut app, pointer(0, 20, PointerAction::Release), &layout);
        let snap = app.slider.snapshot();
        assert!(!snap.pointer_down);
        assert_eq!(snap.touch_x, 0.0);
    }

    #[test]
    fn stray_release_without_press_does_nothing() {
        let (mut app, layout, _dir) = setup();
        handle_action(&mut app, pointer(40, 11, PointerAction::Release), &layout);
        assert_eq!(app.slider.snapshot().touch_x, 0.0);
        assert!(!app.take_redraw());
    }

    #[test]
    fn focus_loss_cancels_gesture() {
        let (mut app, layout, _dir) = setup();
        handle_action(&mut app, pointer(22, 11, PointerAction::Press), &layout);
        handle_action(&mut app, Action::CancelPointer, &layout);
        let snap = app.slider.snapshot();
        assert!(!snap.pointer_down);
        assert_eq!(snap.touch_x, 18.5);
    }

    #[test]
    fn hover_does_not_move_fill() {
        let (mut app, layout, _dir) = setup();
        handle_action(&mut app, pointer(50, 11, PointerAction::Other), &layout);
        assert_eq!(app.slider.snapshot().touch_x, 0.0);
    }

    #[test]
    fn theme_cycle_persists_choice() {
        let (mut app, layout, dir) = setup();
        handle_action(&mut app, Action::CycleTheme, &layout);
        assert_eq!(app.config.theme, "latte");
        let saved = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(saved.theme, "latte");
        assert!(app.toast.is_some());
    }
}
