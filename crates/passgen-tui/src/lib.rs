//! passgen-tui - Terminal UI for passgen
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! passgen-app state machine from crossterm key events and renders its state.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
pub use theme::Theme;
