pub mod analytics;
pub mod app;
pub mod errors;
pub mod game;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::{AppState, spawn_clock};
pub use storage::{open_store, resolve_data_path};
