pub mod backend;
pub mod cli;
pub mod config;
pub mod effects;
pub mod items;
pub mod logging;
pub mod mvi;
pub mod router;
pub mod runtime;
pub mod shutdown;
pub mod ui;
