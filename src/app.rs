use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::{get, post}};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/game", get(handlers::get_game))
        .route("/api/game/start", post(handlers::start))
        .route("/api/game/click", post(handlers::click))
        .route("/api/game/reset", post(handlers::reset))
        .route("/api/game/exit", post(handlers::exit))
        .route("/api/best-score", get(handlers::best_score))
        .with_state(state)
}
