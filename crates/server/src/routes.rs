//! HTTP routes over the duel service.
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use duel_core::GameId;
use duel_runtime::{DuelService, GameSummary, GameView, NewGame, RoundReport};
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::ApiError;

pub const SERVICE_NAME: &str = "duel-server";

/// Body of `POST /games/{id}/actions`. Both fields are required; they are
/// optional here so a missing one is reported by slot instead of as a
/// malformed body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitActionsRequest {
    #[serde(default)]
    pub player1_action: Option<String>,
    #[serde(default)]
    pub player2_action: Option<String>,
}

pub fn build_router(service: DuelService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/games", post(create_game).get(list_games))
        .route("/games/{game_id}", get(get_game))
        .route("/games/{game_id}/actions", post(submit_actions))
        .with_state(service)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn health(
    State(service): State<DuelService>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let games = service.game_count()?;
    Ok(Json(serde_json::json!({
        "ok": true,
        "service": SERVICE_NAME,
        "games": games,
    })))
}

/// The body is optional: empty (with or without a JSON content type) creates
/// a game with default names.
async fn create_game(
    State(service): State<DuelService>,
    body: Bytes,
) -> Result<(StatusCode, Json<GameView>), ApiError> {
    let request = parse_new_game(&body)?;
    let view = service.create_game(request)?;
    Ok((StatusCode::CREATED, Json(view)))
}

fn parse_new_game(body: &[u8]) -> Result<NewGame, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewGame::default());
    }
    serde_json::from_slice(body)
        .map_err(|error| ApiError::bad_request(format!("invalid request body: {error}")))
}

async fn list_games(
    State(service): State<DuelService>,
) -> Result<Json<Vec<GameSummary>>, ApiError> {
    Ok(Json(service.list_games()?))
}

async fn get_game(
    State(service): State<DuelService>,
    Path(game_id): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    Ok(Json(service.get_game(&GameId::from(game_id))?))
}

async fn submit_actions(
    State(service): State<DuelService>,
    Path(game_id): Path<String>,
    payload: Result<Json<SubmitActionsRequest>, JsonRejection>,
) -> Result<Json<RoundReport>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let report = service.submit_actions(
        &GameId::from(game_id),
        request.player1_action.as_deref(),
        request.player2_action.as_deref(),
    )?;
    Ok(Json(report))
}
