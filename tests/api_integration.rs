//! Chess API Integration Tests
//!
//! Tests for the Axum HTTP endpoints using Router::oneshot pattern.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chess_api::{api, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Helper to create a test router sharing `state`
fn test_router(state: &AppState) -> Router {
    api::router(state.clone())
}

async fn get(state: &AppState, uri: &str) -> (StatusCode, Value) {
    let response = test_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

async fn post(state: &AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = test_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, body)
}

fn move_body(from: (char, i32), to: (char, i32)) -> Value {
    json!({
        "from_col": from.0.to_string(),
        "from_row": from.1,
        "to_col": to.0.to_string(),
        "to_row": to.1,
    })
}

// ============================================================================
// Query Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let state = AppState::new();
    let response = test_router(&state)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn test_board_has_sixty_four_cells() {
    let state = AppState::new();
    let (status, body) = get(&state, "/chess/board").await;

    assert_eq!(status, StatusCode::OK);
    let cells = body.as_array().unwrap();
    assert_eq!(cells.len(), 64);

    // Row 0 is Black's back rank
    assert_eq!(
        cells[4],
        json!({"row": 0, "col": 4, "piece": "King", "side": "Black"})
    );
    assert_eq!(
        cells[60],
        json!({"row": 7, "col": 4, "piece": "King", "side": "White"})
    );
    assert_eq!(cells[36]["piece"], Value::Null);
}

#[tokio::test]
async fn test_initial_status() {
    let state = AppState::new();
    let (status, body) = get(&state, "/chess/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["turn"], "White");
    assert_eq!(body["in_check"], false);
    assert_eq!(body["is_over"], false);
    assert_eq!(body["outcome"], "Playing");
    assert_eq!(body["half_move_number"], 0);
    assert_eq!(body["game_id"], state.session().id.to_string());
}

#[tokio::test]
async fn test_possible_moves_grid_for_pawn() {
    let state = AppState::new();
    let (status, body) = post(
        &state,
        "/chess/possible-moves-grid",
        json!({"from_col": "e", "from_row": 2}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[5][4], true, "e3");
    assert_eq!(rows[4][4], true, "e4");
    let marked = rows
        .iter()
        .flat_map(|row| row.as_array().unwrap())
        .filter(|cell| cell.as_bool() == Some(true))
        .count();
    assert_eq!(marked, 2);
}

#[tokio::test]
async fn test_possible_moves_grid_on_empty_square() {
    let state = AppState::new();
    let (status, body) = post(
        &state,
        "/chess/possible-moves-grid",
        json!({"from_col": "e", "from_row": 4}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "empty_square");
    assert!(body["message"].is_string());
}

// ============================================================================
// Command Tests
// ============================================================================

#[tokio::test]
async fn test_move_e2_e4() {
    let state = AppState::new();
    let (status, body) = post(&state, "/chess/move", move_body(('e', 2), ('e', 4))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record"]["ply"], 1);
    assert_eq!(body["record"]["special"], "DoubleStep");

    let (_, status_body) = get(&state, "/chess/status").await;
    assert_eq!(status_body["turn"], "Black");
    assert_eq!(status_body["half_move_number"], 1);

    let (_, history) = get(&state, "/chess/history").await;
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_move_out_of_turn_is_rejected() {
    let state = AppState::new();
    let (status, body) = post(&state, "/chess/move", move_body(('e', 7), ('e', 5))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "wrong_side_to_move");

    let (_, status_body) = get(&state, "/chess/status").await;
    assert_eq!(status_body["half_move_number"], 0);
}

#[tokio::test]
async fn test_move_off_board_is_rejected() {
    let state = AppState::new();
    let (status, body) = post(&state, "/chess/move", move_body(('e', 2), ('e', 9))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "out_of_bounds");
}

#[tokio::test]
async fn test_extreme_rank_is_bad_request() {
    let state = AppState::new();
    let (status, body) = post(
        &state,
        "/chess/possible-moves-grid",
        json!({"from_col": "e", "from_row": i32::MIN}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "out_of_bounds");

    let (status, body) = post(
        &state,
        "/chess/move",
        json!({"from_col": "e", "from_row": i32::MIN, "to_col": "e", "to_row": 4}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "out_of_bounds");

    let (_, status_body) = get(&state, "/chess/status").await;
    assert_eq!(status_body["half_move_number"], 0);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let state = AppState::new();
    let (status, body) = post(&state, "/chess/move", json!({"from_col": "e"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_body");
}

#[tokio::test]
async fn test_fools_mate_over_http() {
    let state = AppState::new();
    for (from, to) in [
        (('f', 2), ('f', 3)),
        (('e', 7), ('e', 5)),
        (('g', 2), ('g', 4)),
    ] {
        let (status, _) = post(&state, "/chess/move", move_body(from, to)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = post(&state, "/chess/move", move_body(('d', 8), ('h', 4))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Black wins by checkmate!");

    let (_, status_body) = get(&state, "/chess/status").await;
    assert_eq!(status_body["in_check"], true);
    assert_eq!(status_body["is_over"], true);
    assert_eq!(status_body["outcome"], "BlackWon");

    let (status, body) = post(&state, "/chess/move", move_body(('a', 2), ('a', 3))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "no_legal_moves");
}

#[tokio::test]
async fn test_capture_shows_in_captured_lists() {
    let state = AppState::new();
    for (from, to) in [(('e', 2), ('e', 4)), (('d', 7), ('d', 5)), (('e', 4), ('d', 5))] {
        let (status, _) = post(&state, "/chess/move", move_body(from, to)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get(&state, "/chess/captured").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["by_white"], json!([{"piece": "Pawn", "side": "Black"}]));
    assert_eq!(body["by_black"], json!([]));
    assert_eq!(body["material_advantage"], 1);
}

#[tokio::test]
async fn test_reset_restores_start() {
    let state = AppState::new();
    let old_id = state.session().id;
    post(&state, "/chess/move", move_body(('e', 2), ('e', 4))).await;

    let (status, body) = post(&state, "/chess/reset", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(body["game_id"], old_id.to_string());

    let (_, status_body) = get(&state, "/chess/status").await;
    assert_eq!(status_body["turn"], "White");
    assert_eq!(status_body["half_move_number"], 0);
    assert_eq!(status_body["game_id"], body["game_id"]);

    let (_, history) = get(&state, "/chess/history").await;
    assert_eq!(history, json!([]));
}
