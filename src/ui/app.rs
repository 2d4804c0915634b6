use tokio::sync::watch;

use crate::items::{ItemsReducer, ItemsState};
use crate::router::Route;
use crate::runtime::Store;
use crate::ui::input::{UserCommand, HELP};
use crate::ui::{detail, list};

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the current page.
    Render,
    /// Print a message, then keep going.
    Message(String),
    Quit,
}

/// Current page plus the store it renders from.
pub struct App {
    store: Store<ItemsReducer>,
    route: Route,
}

impl App {
    /// Start on `route`, mounting its view.
    pub fn new(store: Store<ItemsReducer>, route: Route) -> Self {
        let mut app = Self {
            store,
            route: Route::List,
        };
        app.navigate(route);
        app
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn store(&self) -> &Store<ItemsReducer> {
        &self.store
    }

    /// Give the store back so the caller can join its loop.
    pub fn into_store(self) -> Store<ItemsReducer> {
        self.store
    }

    pub fn subscribe(&self) -> watch::Receiver<ItemsState> {
        self.store.subscribe()
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.route, to = %route, "Navigate");
        self.route = route;
        if route == Route::List {
            list::mount(&self.store.dispatcher());
        }
    }

    pub fn handle(&mut self, command: UserCommand) -> Outcome {
        match command {
            UserCommand::Open(route) => {
                self.navigate(route);
                Outcome::Render
            }
            UserCommand::Back => {
                self.navigate(Route::List);
                Outcome::Render
            }
            UserCommand::Reload => {
                list::reload(&self.store.dispatcher());
                Outcome::Message("Reloading items...".to_string())
            }
            UserCommand::Update => match self.route {
                Route::Item { id } => {
                    detail::update(&self.store.dispatcher(), id);
                    Outcome::Message(format!("Updating item {id}..."))
                }
                Route::List => Outcome::Message("Open an item to update it".to_string()),
            },
            UserCommand::State => {
                let text = serde_json::to_string_pretty(&self.store.state())
                    .unwrap_or_else(|err| format!("Failed to serialize state: {err}"));
                Outcome::Message(text)
            }
            UserCommand::Help => Outcome::Message(HELP.to_string()),
            UserCommand::Quit => Outcome::Quit,
        }
    }

    /// Render the current page from the latest state.
    pub fn render(&self) -> String {
        let state = self.store.state();
        let body = match self.route {
            Route::List => list::render(&state),
            Route::Item { id } => detail::render(&state, id),
        };
        format!("── {} ──\n{}", self.route, body)
    }
}
