//! A thumb-less slider with a floating percentage tooltip, plus the
//! terminal host that runs it.

pub mod app;
pub mod data;
pub mod render;
pub mod slider;
pub mod ui;
pub mod utils;
