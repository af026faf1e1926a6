//! Main TUI runner - entry point and event loop

use passgen_app::config::Settings;
use passgen_app::message::Message;
use passgen_app::state::AppState;
use passgen_app::{process_message, Services};
use passgen_core::prelude::*;
use passgen_core::CredentialStore;
use tokio::sync::mpsc;

use crate::theme::Theme;
use crate::{event, render, terminal};

/// Capacity of the channel carrying timer and action-result messages
const MESSAGE_CHANNEL_CAPACITY: usize = 64;

/// Run the interactive session until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let store = CredentialStore::new(&settings.store.path);
    info!("Credential store: {}", store.path().display());

    let mut term = terminal::init().context("Terminal setup failed")?;
    let theme = Theme::default();
    let mut state = AppState::with_settings(&settings);
    let mut services = Services::system(store);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

    let result = run_loop(&mut term, &mut state, &mut services, &theme, msg_rx, msg_tx);

    // Restore terminal
    terminal::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    services: &mut Services,
    theme: &Theme,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process posted messages (status timers)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, services, &msg_tx);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state, theme))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll().context("Failed to read terminal event")? {
            process_message(state, message, services, &msg_tx);
        }
    }

    info!("Session ended");
    Ok(())
}
