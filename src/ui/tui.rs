use crate::app::state::AppState;
use crate::slider::layout::TrackBounds;
use crate::ui::components::slider_view;
use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Terminal;
use std::io::{self, Stdout};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub content: Rect,
    pub track: Rect,
    pub footer: Rect,
}

impl UiLayout {
    pub fn track_bounds(&self) -> TrackBounds {
        TrackBounds::new(self.track.x as f32, (self.track.x + self.track.width) as f32)
    }
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn enter(&mut self) -> Result<()> {
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            event::EnableMouseCapture,
            event::EnableFocusChange
        )?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            io::stdout(),
            event::DisableFocusChange,
            event::DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        Ok(())
    }

    /// Lays out the frame, reports the track position to the slider, then
    /// paints. Returns the layout used for hit testing.
    pub fn draw(&mut self, app: &mut AppState) -> Result<UiLayout> {
        let mut layout_out = UiLayout::default();

        self.terminal.draw(|f| {
            let size = f.size();
            let container = Style::default().fg(app.theme.color_text()).bg(app.theme.color_container());

            f.render_widget(Clear, size);
            f.render_widget(Block::default().style(container), size);

            let bar_rows = bar_rows(app.slider.config().bar_height);
            let above = tooltip_rows(app);
            let Some(layout) = compute_layout(size, app.config.padding, bar_rows, above) else {
                layout_out = UiLayout::default();
                f.render_widget(
                    Paragraph::new("Terminal too small").style(container.fg(app.theme.color_subtext())),
                    size,
                );
                return;
            };
            layout_out = layout;

            app.slider.on_layout(layout.track_bounds());
            slider_view::render(f, layout.track, app);

            let snap = app.slider.snapshot();
            let state = if snap.pointer_down { "pressed" } else { "idle" };
            let footer = format!(
                "{:>3}%  {}  ·  drag the bar  ·  t: theme ({})  q: quit",
                snap.percent(),
                state,
                app.theme.name.as_label()
            );
            f.render_widget(
                Paragraph::new(footer).style(container.fg(app.theme.color_subtext())),
                layout.footer,
            );

            if let Some((msg, _)) = &app.toast {
                let area = Rect { height: 1, ..size };
                f.render_widget(Paragraph::new(msg.as_str()).style(container.fg(app.theme.color_subtext())), area);
            }
        })?;

        Ok(layout_out)
    }
}

fn bar_rows(bar_height: f32) -> u16 {
    bar_height.ceil().clamp(1.0, u16::MAX as f32) as u16
}

fn tooltip_rows(app: &AppState) -> u16 {
    let c = app.slider.config();
    (c.tooltip_height + c.triangle_height).ceil().clamp(0.0, u16::MAX as f32) as u16
}

/// Full-bleed container with `padding` cells on every side; the track
/// spans the padded width and is centred vertically. `None` when the
/// track or the tooltip above it would not fit.
pub fn compute_layout(size: Rect, padding: u16, bar_rows: u16, tooltip_rows: u16) -> Option<UiLayout> {
    // last row is reserved for the footer
    let body = Rect { height: size.height.saturating_sub(1), ..size };
    let content = body.inner(&Margin { horizontal: padding, vertical: padding });
    if content.width == 0 || content.height < bar_rows {
        return None;
    }

    let y = content.y + (content.height - bar_rows) / 2;
    if y.saturating_sub(size.y) < tooltip_rows {
        return None;
    }

    let track = Rect { x: content.x, y, width: content.width, height: bar_rows };
    let footer = Rect {
        x: size.x,
        y: size.y + size.height.saturating_sub(1),
        width: size.width,
        height: 1,
    };
    Some(UiLayout { content, track, footer })
}

pub fn on_track(layout: &UiLayout, col: u16, row: u16) -> bool {
    contains(layout.track, col, row)
}

fn contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_is_padded_and_centred() {
        let l = compute_layout(Rect::new(0, 0, 80, 25), 4, 1, 4).unwrap();
        assert_eq!(l.content, Rect::new(4, 4, 72, 16));
        assert_eq!(l.track, Rect::new(4, 11, 72, 1));
        assert_eq!(l.footer, Rect::new(0, 24, 80, 1));
        assert_eq!(l.track_bounds(), TrackBounds::new(4.0, 76.0));
    }

    #[test]
    fn too_small_for_tooltip() {
        assert!(compute_layout(Rect::new(0, 0, 80, 8), 1, 1, 4).is_none());
        assert!(compute_layout(Rect::new(0, 0, 8, 25), 4, 1, 4).is_none());
    }

    #[test]
    fn track_hit_test() {
        let l = compute_layout(Rect::new(0, 0, 80, 25), 4, 1, 4).unwrap();
        assert!(on_track(&l, 4, 11));
        assert!(on_track(&l, 75, 11));
        assert!(!on_track(&l, 76, 11));
        assert!(!on_track(&l, 10, 10));
    }

    #[test]
    fn bar_rows_round_up() {
        assert_eq!(bar_rows(1.0), 1);
        assert_eq!(bar_rows(1.2), 2);
        assert_eq!(bar_rows(0.0), 1);
    }
}
