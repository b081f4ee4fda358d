//! Engine - shared orchestration state for the TUI and headless runners
//!
//! The Engine owns the message channel, the per-view task map, the HTTP
//! client and the settings. Frontends feed it messages and drain results
//! from background tasks before every frame.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use mealdeck_api::MealDbClient;
use mealdeck_core::prelude::Result;

use crate::actions::ViewTaskMap;
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for MealDeck.
///
/// Holds:
/// - TEA state management
/// - Message channel
/// - Task tracking per view
/// - The HTTP client
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Cloned into every background task and the signal handler.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Background task handles, grouped by the view that started them
    pub view_tasks: ViewTaskMap,

    client: MealDbClient,
}

impl Engine {
    /// Create an engine from settings and spawn the signal handler.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(settings: Settings) -> Result<Self> {
        let client = MealDbClient::new(settings.api.base_url.clone(), &settings.client_options())?;
        let engine = Self::with_client(settings, client);
        signals::spawn_signal_handler(engine.msg_tx.clone());
        Ok(engine)
    }

    /// Create an engine around an existing client. No signal handler is
    /// installed.
    pub fn with_client(settings: Settings, client: MealDbClient) -> Self {
        info!("Using API at {}", client.base_url());

        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let view_tasks: ViewTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));

        Self {
            state,
            msg_tx,
            msg_rx,
            view_tasks,
            client,
        }
    }

    /// Start loading the root view
    pub fn start(&mut self) {
        self.process_message(Message::Start);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.client,
            &self.view_tasks,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. The TUI runner calls this
    /// before every frame.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task and process it.
    ///
    /// Returns `false` if the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn client(&self) -> &MealDbClient {
        &self.client
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Abort every outstanding background task.
    pub fn shutdown(&mut self) {
        let tasks: Vec<_> = match self.view_tasks.lock() {
            Ok(mut map) => map.drain().collect(),
            Err(_) => return,
        };

        let mut aborted = 0;
        for (_, handles) in tasks {
            for handle in handles {
                if !handle.is_finished() {
                    aborted += 1;
                }
                handle.abort();
            }
        }
        debug!("Shutdown aborted {} background task(s)", aborted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Remote, Screen};
    use mealdeck_api::test_utils::png_bytes;
    use mealdeck_api::ClientOptions;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CATEGORIES: &str = r#"{"categories":[
        {"idCategory":"1","strCategory":"Beef","strCategoryThumb":"IMG/beef.png","strCategoryDescription":"Beef is the culinary name for meat from cattle."},
        {"idCategory":"2","strCategory":"Chicken","strCategoryThumb":"IMG/chicken.png","strCategoryDescription":"Chicken is a type of domesticated fowl."}
    ]}"#;

    const BEEF_MEALS: &str = r#"[
        {"idMeal":"52874","strMeal":"Beef Stew","strMealThumb":"IMG/stew.png"}
    ]"#;

    async fn mount_api(server: &MockServer) {
        let img = format!("{}/img", server.uri());

        Mock::given(method("GET"))
            .and(path("/categories.php"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(CATEGORIES.replace("IMG", &img), "application/json"),
            )
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/filter.php"))
            .and(query_param("c", "Beef"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(BEEF_MEALS.replace("IMG", &img), "application/json"),
            )
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/img/beef.png"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(png_bytes(8, 8, [200, 50, 50]), "image/png"),
            )
            .mount(server)
            .await;
    }

    fn engine_for(server: &MockServer) -> Engine {
        let client = MealDbClient::new(server.uri(), &ClientOptions::default()).unwrap();
        Engine::with_client(Settings::default(), client)
    }

    /// Process background messages until `done` holds
    async fn pump_until(engine: &mut Engine, done: impl Fn(&AppState) -> bool) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while !done(&engine.state) {
                assert!(engine.process_next().await, "channel closed");
            }
        })
        .await
        .expect("timed out waiting for background results");
    }

    #[tokio::test]
    async fn test_beef_end_to_end() {
        let server = MockServer::start().await;
        mount_api(&server).await;
        let mut engine = engine_for(&server);

        engine.start();
        pump_until(&mut engine, |state| match state.current() {
            Screen::CategoryList(view) => !view.categories.is_pending(),
            _ => false,
        })
        .await;

        let Screen::CategoryList(list) = engine.state.current() else {
            panic!("expected category list");
        };
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.selected().unwrap().name, "Beef");

        // Drill into Beef
        engine.process_message(Message::Activate);
        pump_until(&mut engine, |state| match state.current() {
            Screen::CategoryDetail(view) => !view.meals.is_pending(),
            _ => false,
        })
        .await;

        let Screen::CategoryDetail(detail) = engine.state.current() else {
            panic!("expected category detail");
        };
        assert_eq!(detail.category.name, "Beef");
        let Remote::Loaded(meals) = &detail.meals else {
            panic!("meals should be loaded");
        };
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Beef Stew");

        // Open the meal
        engine.process_message(Message::Activate);
        let Screen::MealDetail(meal) = engine.state.current() else {
            panic!("expected meal detail");
        };
        assert_eq!(meal.meal.name, "Beef Stew");
        assert!(meal.meal.thumbnail_url.ends_with("/img/stew.png"));

        engine.shutdown();
    }

    #[tokio::test]
    async fn test_highlighted_thumbnail_arrives() {
        let server = MockServer::start().await;
        mount_api(&server).await;
        let mut engine = engine_for(&server);
        let beef_thumb = format!("{}/img/beef.png", server.uri());

        engine.start();
        let url = beef_thumb.clone();
        pump_until(&mut engine, move |state| {
            state.current().images().get(&url).is_some()
        })
        .await;

        let thumb = engine.state.current().images().get(&beef_thumb).unwrap();
        assert_eq!(thumb.pixel(0, 0), [200, 50, 50]);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_root_pending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories.php"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
            .mount(&server)
            .await;
        let mut engine = engine_for(&server);

        engine.start();
        assert!(engine.process_next().await);

        let Screen::CategoryList(list) = engine.state.current() else {
            panic!("expected category list");
        };
        assert!(list.categories.is_pending());
        assert!(!engine.should_quit());
    }

    #[tokio::test]
    async fn test_back_cancels_in_flight_fetch() {
        let server = MockServer::start().await;
        mount_api(&server).await;
        Mock::given(method("GET"))
            .and(path("/filter.php"))
            .and(query_param("c", "Chicken"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("[]", "application/json")
                    .set_delay(Duration::from_secs(30)),
            )
            .mount(&server)
            .await;
        let mut engine = engine_for(&server);

        engine.start();
        pump_until(&mut engine, |state| match state.current() {
            Screen::CategoryList(view) => !view.categories.is_pending(),
            _ => false,
        })
        .await;

        engine.process_message(Message::SelectNext);
        engine.process_message(Message::Activate);
        let view_id = engine.state.current().id();
        assert!(engine.view_tasks.lock().unwrap().contains_key(&view_id));

        engine.process_message(Message::Back);
        assert_eq!(engine.state.depth(), 1);
        assert!(!engine.view_tasks.lock().unwrap().contains_key(&view_id));
    }

    #[tokio::test]
    async fn test_quit_message_stops_engine() {
        let server = MockServer::start().await;
        let mut engine = engine_for(&server);

        engine.msg_sender().send(Message::Quit).await.unwrap();
        engine.drain_pending_messages();

        assert!(engine.should_quit());
    }
}
