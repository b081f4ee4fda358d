//! Data and image fetch tasks
//!
//! Each task owns a clone of the client and of the message sender. A fetch
//! reports success or failure; an image load reports success only.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use mealdeck_api::MealDbClient;

use crate::message::Message;
use crate::view::ViewId;

/// Fetch the category list for `view_id`
pub(super) fn spawn_fetch_categories(
    view_id: ViewId,
    client: MealDbClient,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let msg = match client.fetch_categories().await {
            Ok(categories) => Message::CategoriesLoaded {
                view_id,
                categories,
            },
            Err(e) => Message::FetchFailed {
                view_id,
                kind: e.fetch_kind(),
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    })
}

/// Fetch the meals filed under `category` for `view_id`
pub(super) fn spawn_fetch_meals(
    view_id: ViewId,
    category: String,
    client: MealDbClient,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let msg = match client.fetch_meals(&category).await {
            Ok(meals) => Message::MealsLoaded { view_id, meals },
            Err(e) => Message::FetchFailed {
                view_id,
                kind: e.fetch_kind(),
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    })
}

/// One task per URL. A failed load is logged and sends nothing, so the
/// view keeps its placeholder.
pub(super) fn spawn_load_images(
    view_id: ViewId,
    urls: Vec<String>,
    client: &MealDbClient,
    msg_tx: &mpsc::Sender<Message>,
) -> Vec<JoinHandle<()>> {
    urls.into_iter()
        .map(|url| {
            let client = client.clone();
            let msg_tx = msg_tx.clone();
            tokio::spawn(async move {
                match client.load_thumbnail(&url).await {
                    Ok(thumbnail) => {
                        let _ = msg_tx
                            .send(Message::ImageLoaded {
                                view_id,
                                url,
                                thumbnail,
                            })
                            .await;
                    }
                    Err(e) => debug!("Image load failed for {}: {}", url, e),
                }
            })
        })
        .collect()
}
