//! Game API endpoints
//!
//! Thin wrappers around the shared game: decode, call, encode.

use crate::state::ServerState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tritoe_core::{Coord, GameSnapshot, MoveOutcome};

/// Move request body
#[derive(Deserialize)]
pub struct MoveRequest {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Place the current player's mark
///
/// Occupied cells and finished games answer 200 with `accepted: false`;
/// off-board coordinates answer 400.
pub async fn make_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveOutcome>, (StatusCode, Json<Value>)> {
    let coord = Coord::new(req.x, req.y, req.z);

    let outcome = state.game.place(coord).map_err(|e| {
        tracing::warn!("Rejected move at {}: {}", coord, e);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "accepted": false,
                "reason": e.to_string(),
            })),
        )
    })?;

    match (&outcome.reason, outcome.winner) {
        (Some(reason), _) => {
            tracing::debug!("Move by {} at {} not accepted: {}", outcome.player, coord, reason);
        }
        (None, Some(winner)) => {
            tracing::info!(
                "{} wins at {}: line {:?} -> {:?}",
                winner,
                coord,
                outcome.start,
                outcome.end
            );
        }
        (None, None) if outcome.draw => {
            tracing::info!(
                "{} filled the last cell at {}: board full, no winner",
                outcome.player,
                coord
            );
        }
        (None, None) => {
            tracing::info!("{} plays {}", outcome.player, coord);
        }
    }

    Ok(Json(outcome))
}

/// Start over with an empty board and X to move
pub async fn reset_game(State(state): State<Arc<ServerState>>) -> Json<Value> {
    state.game.reset();
    tracing::info!("Game reset");

    Json(json!({
        "success": true,
        "message": "Game reset successfully"
    }))
}

/// Full board, turn, and status
pub async fn get_state(State(state): State<Arc<ServerState>>) -> Json<GameSnapshot> {
    Json(state.game.snapshot())
}
