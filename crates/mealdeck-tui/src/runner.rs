//! Main TUI runner - entry point and event loop

use mealdeck_app::config::Settings;
use mealdeck_app::Engine;
use mealdeck_core::prelude::Result;
use tracing::info;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings)?;
    info!(
        "Starting TUI (images: {}, icons: {})",
        engine.settings().ui.show_images,
        engine.settings().ui.icons
    );

    let mut term = ratatui::init();

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Results from background fetches and the signal handler
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quitting");
    Ok(())
}
