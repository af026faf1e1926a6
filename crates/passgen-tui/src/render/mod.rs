//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use passgen_app::state::{AppState, View};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::theme::Theme;
use crate::widgets;

/// Screen regions shared by every view
struct ScreenAreas {
    header: Rect,
    body: Rect,
    status: Rect,
    hints: Rect,
}

fn layout(area: Rect) -> ScreenAreas {
    let [header, body, status, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    ScreenAreas {
        header,
        body,
        status,
        hints,
    }
}

/// Render the complete UI (View function in TEA)
///
/// Pure projection of state; nothing is mutated.
pub fn view(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let areas = layout(frame.area());

    frame.render_widget(widgets::Header::new(state.view, theme), areas.header);

    match state.view {
        View::Welcome => {
            frame.render_widget(widgets::WelcomeMenu::new(state.menu_cursor, theme), areas.body);
        }
        View::Main => {
            frame.render_widget(
                widgets::PasswordPanel::new(&state.password, &state.generation, theme),
                areas.body,
            );
        }
        View::Save => {
            frame.render_widget(
                widgets::SaveForm::new(&state.save_form, &state.password, theme),
                areas.body,
            );
        }
        View::List => {
            frame.render_widget(widgets::RecordList::new(&state.list, theme), areas.body);
        }
        View::Settings => {
            frame.render_widget(
                widgets::SettingsForm::new(&state.settings_form, theme),
                areas.body,
            );
        }
        View::ConfirmQuit => {
            frame.render_widget(widgets::WelcomeMenu::new(state.menu_cursor, theme), areas.body);
            frame.render_widget(widgets::ConfirmQuitDialog::new(theme), areas.body);
        }
    }

    frame.render_widget(
        widgets::StatusBar::new(state.status.as_ref(), theme),
        areas.status,
    );
    frame.render_widget(
        widgets::KeyHints::new(state.view, theme).has_password(state.has_password()),
        areas.hints,
    );
}
