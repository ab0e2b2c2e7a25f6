//! HTTP routes for the chess game
//!
//! All game routes live under `/chess` and speak JSON. Squares are addressed
//! with a file letter and a rank number (see [`crate::coords`]).
//!
//! | Method | Path                         | Response                       |
//! |--------|------------------------------|--------------------------------|
//! | GET    | `/chess/board`               | 64 cells, row-major            |
//! | GET    | `/chess/status`              | turn, check and outcome        |
//! | POST   | `/chess/possible-moves-grid` | 8x8 boolean grid               |
//! | GET    | `/chess/captured`            | capture lists and material     |
//! | POST   | `/chess/move`                | executed move record           |
//! | POST   | `/chess/reset`               | new session id                 |
//! | GET    | `/chess/history`             | executed move records          |
//! | GET    | `/health`                    | `"ok"`                         |

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    routing::{get, post},
    Router,
};
use chess_rules::{MatchOutcome, MoveGrid, MoveRecord, Piece, PieceKind, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::coords::{square_from_external, square_to_external};
use crate::error::ApiResult;
use crate::state::AppState;

/// One board cell in the board dump
#[derive(Debug, Serialize)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub piece: Option<PieceKind>,
    pub side: Option<Side>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub game_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub turn: Side,
    pub in_check: bool,
    pub is_over: bool,
    pub outcome: MatchOutcome,
    pub half_move_number: u32,
}

/// Origin square for a destination query
#[derive(Debug, Deserialize)]
pub struct SquareRequest {
    pub from_col: char,
    pub from_row: i32,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub from_col: char,
    pub from_row: i32,
    pub to_col: char,
    pub to_row: i32,
    /// Kind a pawn becomes on the far row; a queen when omitted
    #[serde(default)]
    pub promotion: Option<PieceKind>,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub message: String,
    pub record: MoveRecord,
}

/// A captured piece as listed by `/chess/captured`
#[derive(Debug, Serialize)]
pub struct CapturedView {
    pub piece: PieceKind,
    pub side: Side,
}

impl From<&Piece> for CapturedView {
    fn from(piece: &Piece) -> Self {
        Self {
            piece: piece.kind,
            side: piece.side,
        }
    }
}

/// Pieces captured by each side, keyed by captor
#[derive(Debug, Serialize)]
pub struct CapturedResponse {
    pub by_white: Vec<CapturedView>,
    pub by_black: Vec<CapturedView>,
    pub material_advantage: i32,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,
    pub game_id: Uuid,
}

pub fn router(state: AppState) -> Router {
    let chess = Router::new()
        .route("/board", get(get_board))
        .route("/status", get(get_status))
        .route("/possible-moves-grid", post(possible_moves_grid))
        .route("/captured", get(get_captured))
        .route("/move", post(make_move))
        .route("/reset", post(reset_game))
        .route("/history", get(get_history));

    Router::new()
        .nest("/chess", chess)
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn get_board(State(state): State<AppState>) -> Json<Vec<CellView>> {
    let session = state.session();
    let cells = session
        .game
        .board()
        .cells()
        .map(|(square, piece)| CellView {
            row: square.row(),
            col: square.col(),
            piece: piece.map(|p| p.kind),
            side: piece.map(|p| p.side),
        })
        .collect();
    Json(cells)
}

async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let session = state.session();
    let game = &session.game;
    Json(StatusResponse {
        game_id: session.id,
        started_at: session.started_at,
        turn: game.side_to_move(),
        in_check: game.in_check(),
        is_over: game.is_over(),
        outcome: game.outcome(),
        half_move_number: game.half_move_number(),
    })
}

async fn possible_moves_grid(
    State(state): State<AppState>,
    payload: Result<Json<SquareRequest>, JsonRejection>,
) -> ApiResult<Json<MoveGrid>> {
    let Json(request) = payload?;
    let from = square_from_external(request.from_col, request.from_row)?;
    let grid = state.session().game.legal_destinations(from)?;
    Ok(Json(grid))
}

async fn get_captured(State(state): State<AppState>) -> Json<CapturedResponse> {
    let session = state.session();
    let captured = session.game.captured();
    Json(CapturedResponse {
        by_white: captured.by(Side::White).iter().map(CapturedView::from).collect(),
        by_black: captured.by(Side::Black).iter().map(CapturedView::from).collect(),
        material_advantage: captured.material_advantage(),
    })
}

async fn make_move(
    State(state): State<AppState>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> ApiResult<Json<MoveResponse>> {
    let Json(request) = payload?;
    let from = square_from_external(request.from_col, request.from_row)?;
    let to = square_from_external(request.to_col, request.to_row)?;

    let mut session = state.session();
    let record = session.game.attempt_move(from, to, request.promotion)?;

    let (from_file, from_rank) = square_to_external(record.from);
    let (to_file, to_rank) = square_to_external(record.to);
    info!(
        "[API] {} {from_file}{from_rank} -> {to_file}{to_rank} accepted (ply {})",
        record.piece, record.ply
    );

    let message = if session.game.is_over() {
        session.game.outcome().message().to_string()
    } else {
        "Move executed".to_string()
    };
    Ok(Json(MoveResponse { message, record }))
}

async fn reset_game(State(state): State<AppState>) -> Json<ResetResponse> {
    let game_id = state.reset();
    Json(ResetResponse {
        message: "Game reset".to_string(),
        game_id,
    })
}

async fn get_history(State(state): State<AppState>) -> Json<Vec<MoveRecord>> {
    Json(state.session().game.history().to_vec())
}
