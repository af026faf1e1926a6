//! Custom widget components

mod confirm_quit;
mod header;
pub mod modal;
mod password_panel;
mod record_list;
mod save_form;
mod settings_form;
mod status_bar;
mod text_field;
mod welcome_menu;

pub use confirm_quit::ConfirmQuitDialog;
pub use header::{Header, KeyHints};
pub use password_panel::PasswordPanel;
pub use record_list::RecordList;
pub use save_form::SaveForm;
pub use settings_form::SettingsForm;
pub use status_bar::StatusBar;
pub use text_field::TextField;
pub use welcome_menu::WelcomeMenu;
