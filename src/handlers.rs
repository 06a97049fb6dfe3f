use crate::errors::AppError;
use crate::models::{BestScoreResponse, ClickRequest, GameView, StartRequest};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Html,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let best_score = state.with_engine(|engine| engine.best_score()).await;
    Html(render_index(best_score))
}

pub async fn get_game(State(state): State<AppState>) -> Json<GameView> {
    Json(state.with_engine(|engine| engine.view()).await)
}

pub async fn start(
    State(state): State<AppState>,
    payload: Result<Json<StartRequest>, JsonRejection>,
) -> Result<Json<GameView>, AppError> {
    let Json(payload) = payload?;
    let view = state
        .with_engine(|engine| {
            engine.start_game(payload.difficulty, payload.theme);
            engine.view()
        })
        .await;
    info!(difficulty = %payload.difficulty, theme = %payload.theme, "game started");
    Ok(Json(view))
}

pub async fn click(
    State(state): State<AppState>,
    payload: Result<Json<ClickRequest>, JsonRejection>,
) -> Result<Json<GameView>, AppError> {
    let Json(payload) = payload?;
    let view = state
        .with_engine(|engine| {
            engine.handle_card_click(payload.card_id);
            engine.view()
        })
        .await;
    Ok(Json(view))
}

pub async fn reset(State(state): State<AppState>) -> Json<GameView> {
    let view = state
        .with_engine(|engine| {
            engine.reset_board();
            engine.view()
        })
        .await;
    Json(view)
}

pub async fn exit(State(state): State<AppState>) -> Json<GameView> {
    let view = state
        .with_engine(|engine| {
            engine.exit_to_menu();
            engine.view()
        })
        .await;
    Json(view)
}

pub async fn best_score(State(state): State<AppState>) -> Json<BestScoreResponse> {
    let best_score = state.with_engine(|engine| engine.best_score()).await;
    Json(BestScoreResponse { best_score })
}
