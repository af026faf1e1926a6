//! Color palette for the passgen theme.

use ratatui::style::Color;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const TITLE: Color = Color::Magenta;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Password highlight ---
pub const PASSWORD_FG: Color = Color::LightGreen;

// --- Selection ---
pub const SELECTED_FG: Color = Color::Black;
pub const SELECTED_BG: Color = Color::Cyan;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success
pub const STATUS_RED: Color = Color::Red; // Error
pub const STATUS_YELLOW: Color = Color::Yellow; // Warning
pub const STATUS_BLUE: Color = Color::Blue; // Info
