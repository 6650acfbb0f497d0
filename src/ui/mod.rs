pub mod theme;
pub mod tui;

pub mod components {
    pub mod slider_view;
}
