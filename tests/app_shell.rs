mod common;

use common::{demo_backend, spawn_store};
use itemflow::router::Route;
use itemflow::ui::app::{App, Outcome};
use itemflow::ui::input::{parse_command, UserCommand};

async fn loaded_app() -> (App, itemflow::shutdown::ShutdownCoordinator) {
    let (store, shutdown) = spawn_store(demo_backend());
    let app = App::new(store, Route::List);
    let mut state = app.subscribe();
    state.wait_for(|s| s.is_loaded()).await.unwrap();
    (app, shutdown)
}

#[tokio::test(start_paused = true)]
async fn list_shows_loading_then_items() {
    let (store, _shutdown) = spawn_store(demo_backend());
    let app = App::new(store, Route::List);
    assert!(app.render().contains("Loading items..."));

    let mut state = app.subscribe();
    state.wait_for(|s| s.is_loaded()).await.unwrap();

    let page = app.render();
    assert!(page.starts_with("── / ──"));
    assert!(page.contains("0: one [open: /items/0]"));
    assert!(page.contains("1: two [open: /items/1]"));
}

#[tokio::test(start_paused = true)]
async fn open_and_back_navigate() {
    let (mut app, _shutdown) = loaded_app().await;

    let outcome = app.handle(parse_command("open /items/1").unwrap());
    assert_eq!(outcome, Outcome::Render);
    assert_eq!(app.route(), Route::Item { id: 1 });
    assert!(app.render().contains("id 1: two"));

    assert_eq!(app.handle(UserCommand::Back), Outcome::Render);
    assert_eq!(app.route(), Route::List);
}

#[tokio::test(start_paused = true)]
async fn update_needs_an_item_page() {
    let (mut app, _shutdown) = loaded_app().await;
    assert_eq!(
        app.handle(UserCommand::Update),
        Outcome::Message("Open an item to update it".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn update_on_item_page_refreshes_view() {
    let (mut app, _shutdown) = loaded_app().await;
    app.handle(UserCommand::Open(Route::Item { id: 0 }));

    assert_eq!(
        app.handle(UserCommand::Update),
        Outcome::Message("Updating item 0...".to_string())
    );
    assert!(app.render().contains("id 0: one"));

    let mut state = app.subscribe();
    state
        .wait_for(|s| s.item(0).is_some_and(|r| r.value == "UPDATED"))
        .await
        .unwrap();

    assert!(app.render().contains("id 0: UPDATED"));
    let stored = app.store().state();
    assert_eq!(stored.item(1).map(|r| r.value.as_str()), Some("two"));
}

#[tokio::test(start_paused = true)]
async fn state_command_dumps_json() {
    let (mut app, _shutdown) = loaded_app().await;
    let Outcome::Message(text) = app.handle(UserCommand::State) else {
        panic!("expected a message");
    };
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["items"][1]["value"], "two");
}

#[tokio::test(start_paused = true)]
async fn quit_and_help() {
    let (mut app, _shutdown) = loaded_app().await;
    assert_eq!(app.handle(UserCommand::Quit), Outcome::Quit);
    assert!(matches!(app.handle(UserCommand::Help), Outcome::Message(text) if text.contains("open <path>")));
}

#[tokio::test(start_paused = true)]
async fn shell_teardown_joins_the_store() {
    let (app, shutdown) = loaded_app().await;
    let store = app.into_store();
    let mut tap = store.actions();

    shutdown.signal();
    store.stopped().await;

    assert!(tap.recv().await.is_err());
}
