//! Offset tables for move generation
//!
//! Each entry is a `(d_row, d_col)` step in the engine's internal
//! orientation (row 0 at the top). Sliding pieces repeat their step until
//! blocked; knights and kings take a single step.

/// Orthogonal rays: north, south, east, west
pub const ROOK_DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Diagonal rays: north-east, south-east, south-west, north-west
pub const BISHOP_DIRS: [(i32, i32); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// Queen rays are the union of rook and bishop rays
pub const QUEEN_DIRS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
];

/// The eight L-shaped knight jumps
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The eight squares adjacent to a king
pub const KING_OFFSETS: [(i32, i32); 8] = QUEEN_DIRS;

/// Column deltas of the two pawn capture diagonals
pub const PAWN_CAPTURE_COLS: [i32; 2] = [-1, 1];
