//! Headless mode runner - event loop without TUI
//!
//! Drives the shared [`Engine`] with images disabled and turns the results
//! of background fetches into [`HeadlessEvent`]s. Every failure is reported
//! as an `error` event; the run itself always succeeds.

use std::io::{self, Write};

use tracing::{info, warn};

use mealdeck_app::config::Settings;
use mealdeck_app::{Engine, Message, Screen};
use mealdeck_core::prelude::Result;

use super::HeadlessEvent;

/// What the loop does after a message has been processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Wait,
    OpenCategory,
    Finish,
}

/// Run in headless mode - output NDJSON events instead of the TUI
pub async fn run_headless(mut settings: Settings, category: Option<String>) -> Result<()> {
    info!("MealDeck starting in HEADLESS mode");
    settings.ui.show_images = false;

    // Unlocked handle: each event takes the stdout lock only for its own line
    let mut stdout = io::stdout();
    let mut engine = match Engine::new(settings) {
        Ok(engine) => engine,
        Err(e) => {
            warn!("Could not create API client: {}", e);
            HeadlessEvent::error(e.to_string(), e.fetch_kind()).write_to(&mut stdout);
            return Ok(());
        }
    };

    let result = headless_event_loop(&mut engine, category.as_deref(), &mut stdout).await;
    engine.shutdown();

    info!("MealDeck headless mode exiting");
    result
}

/// Main headless event loop
pub async fn headless_event_loop(
    engine: &mut Engine,
    category: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    engine.start();

    while !engine.should_quit() {
        let Some(msg) = engine.msg_rx.recv().await else {
            info!("Message channel closed");
            break;
        };

        let next = emit_message_events(&engine.state, &msg, out);
        engine.process_message(msg);

        match (next, category) {
            (Next::Wait, _) => {}
            (Next::OpenCategory, Some(name)) => {
                if !open_category(engine, name) {
                    HeadlessEvent::error(format!("Unknown category '{name}'"), None)
                        .write_to(out);
                    break;
                }
            }
            (Next::OpenCategory, None) | (Next::Finish, _) => break,
        }
    }

    Ok(())
}

/// Emit events for a message before it is processed
fn emit_message_events(
    state: &mealdeck_app::AppState,
    msg: &Message,
    out: &mut impl Write,
) -> Next {
    match msg {
        Message::CategoriesLoaded { categories, .. } => {
            HeadlessEvent::categories_loaded(categories.len()).write_to(out);
            for category in categories {
                HeadlessEvent::category(category).write_to(out);
            }
            Next::OpenCategory
        }
        Message::MealsLoaded { meals, .. } => {
            HeadlessEvent::meals_loaded(state.current().title(), meals.len()).write_to(out);
            for meal in meals {
                HeadlessEvent::meal(meal).write_to(out);
            }
            Next::Finish
        }
        Message::FetchFailed { kind, error, .. } => {
            HeadlessEvent::error(error.clone(), *kind).write_to(out);
            Next::Finish
        }
        _ => Next::Wait,
    }
}

/// Highlight the named category on the root list and open it.
/// Returns `false` when no category has that name.
fn open_category(engine: &mut Engine, name: &str) -> bool {
    let Screen::CategoryList(view) = engine.state.current_mut() else {
        return false;
    };
    let Some(index) = view
        .items()
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case(name))
    else {
        return false;
    };

    info!("Opening category '{}'", view.items()[index].name);
    view.cursor.filter.clear();
    view.cursor.selected = index;
    engine.process_message(Message::Activate);
    true
}
