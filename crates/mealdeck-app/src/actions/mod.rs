//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use mealdeck_api::MealDbClient;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::view::ViewId;

pub(crate) mod browser;
pub(crate) mod fetch;

pub use browser::open_url_in_browser;

/// Background task handles grouped by the view that started them
pub type ViewTaskMap = Arc<std::sync::Mutex<HashMap<ViewId, Vec<JoinHandle<()>>>>>;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: &MealDbClient,
    view_tasks: &ViewTaskMap,
) {
    match action {
        UpdateAction::FetchCategories { view_id } => {
            let handle = fetch::spawn_fetch_categories(view_id, client.clone(), msg_tx);
            register_tasks(view_tasks, view_id, vec![handle]);
        }

        UpdateAction::FetchMeals { view_id, category } => {
            let handle = fetch::spawn_fetch_meals(view_id, category, client.clone(), msg_tx);
            register_tasks(view_tasks, view_id, vec![handle]);
        }

        UpdateAction::LoadImages { view_id, urls } => {
            let handles = fetch::spawn_load_images(view_id, urls, client, &msg_tx);
            register_tasks(view_tasks, view_id, handles);
        }

        UpdateAction::OpenUrl { url, browser } => {
            if let Err(e) = open_url_in_browser(&url, &browser) {
                warn!("Failed to open {} in browser: {}", url, e);
            }
        }

        UpdateAction::CancelView { view_id } => {
            cancel_view(view_tasks, view_id);
        }
    }
}

/// Track `handles` under `view_id`, dropping handles that already finished
fn register_tasks(view_tasks: &ViewTaskMap, view_id: ViewId, handles: Vec<JoinHandle<()>>) {
    match view_tasks.lock() {
        Ok(mut guard) => {
            let entry = guard.entry(view_id).or_default();
            entry.retain(|handle| !handle.is_finished());
            entry.extend(handles);
        }
        Err(e) => warn!("Could not register tasks for {}: {}", view_id, e),
    }
}

/// Abort every task a view started
pub fn cancel_view(view_tasks: &ViewTaskMap, view_id: ViewId) {
    let handles = match view_tasks.lock() {
        Ok(mut guard) => guard.remove(&view_id).unwrap_or_default(),
        Err(e) => {
            warn!("Could not cancel tasks for {}: {}", view_id, e);
            return;
        }
    };

    let running = handles.iter().filter(|h| !h.is_finished()).count();
    if running > 0 {
        debug!("Aborting {} task(s) for {}", running, view_id);
    }
    for handle in handles {
        handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancel_view_aborts_only_that_view() {
        let view_tasks: ViewTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));

        let slow = || {
            tokio::spawn(async {
                tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            })
        };
        register_tasks(&view_tasks, ViewId(1), vec![slow()]);
        register_tasks(&view_tasks, ViewId(2), vec![slow(), slow()]);

        cancel_view(&view_tasks, ViewId(2));
        tokio::task::yield_now().await;

        let guard = view_tasks.lock().unwrap();
        assert!(!guard.contains_key(&ViewId(2)));
        assert_eq!(guard.get(&ViewId(1)).map(Vec::len), Some(1));
        assert!(!guard[&ViewId(1)][0].is_finished());
    }

    #[tokio::test]
    async fn test_register_drops_finished_handles() {
        let view_tasks: ViewTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));

        let done = tokio::spawn(async {});
        while !done.is_finished() {
            tokio::task::yield_now().await;
        }
        register_tasks(&view_tasks, ViewId(1), vec![done]);
        register_tasks(&view_tasks, ViewId(1), vec![tokio::spawn(async {})]);

        assert_eq!(view_tasks.lock().unwrap()[&ViewId(1)].len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_unknown_view_is_noop() {
        let view_tasks: ViewTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));
        cancel_view(&view_tasks, ViewId(9));
        assert!(view_tasks.lock().unwrap().is_empty());
    }
}
