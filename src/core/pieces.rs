use once_cell::sync::Lazy;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

/// A piece offered to players: kind, cell matrix, and canonical color.
///
/// Pieces are never mutated; rotation produces a new matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Wire field is `type` to match the client protocol.
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub shape: Vec<Vec<u8>>,
    pub color: String,
}

impl Piece {
    fn new(kind: PieceKind, shape: Vec<Vec<u8>>, color: &str) -> Self {
        Self {
            kind,
            shape,
            color: color.to_string(),
        }
    }
}

/// The fixed catalog, in standard tetromino form.
static PIECE_CATALOG: Lazy<Vec<Piece>> = Lazy::new(|| {
    vec![
        Piece::new(PieceKind::I, vec![vec![1, 1, 1, 1]], "#00FFFF"),
        Piece::new(PieceKind::O, vec![vec![1, 1], vec![1, 1]], "#FFFF00"),
        Piece::new(PieceKind::T, vec![vec![0, 1, 0], vec![1, 1, 1]], "#800080"),
        Piece::new(PieceKind::L, vec![vec![1, 0, 0], vec![1, 1, 1]], "#FFA500"),
        Piece::new(PieceKind::J, vec![vec![0, 0, 1], vec![1, 1, 1]], "#0000FF"),
        Piece::new(PieceKind::S, vec![vec![0, 1, 1], vec![1, 1, 0]], "#00FF00"),
        Piece::new(PieceKind::Z, vec![vec![1, 1, 0], vec![0, 1, 1]], "#FF0000"),
    ]
});

/// All pieces a room can hand out.
pub fn catalog() -> &'static [Piece] {
    &PIECE_CATALOG
}

/// Pick a piece uniformly at random from the catalog.
///
/// No history avoidance: consecutive draws may repeat.
pub fn generate_random_piece() -> Piece {
    let idx = thread_rng().gen_range(0..PIECE_CATALOG.len());
    PIECE_CATALOG[idx].clone()
}

/// Rotate a shape 90 degrees clockwise.
///
/// An R×C matrix becomes C×R, with `out[i][j] = in[R-1-j][i]`. Ragged
/// input rows are padded with empty cells; an empty shape stays empty.
pub fn rotate_clockwise(shape: &[Vec<u8>]) -> Vec<Vec<u8>> {
    if shape.is_empty() || shape[0].is_empty() {
        return Vec::new();
    }

    let rows = shape.len();
    let cols = shape[0].len();

    (0..cols)
        .map(|i| {
            (0..rows)
                .map(|j| shape[rows - 1 - j].get(i).copied().unwrap_or(0))
                .collect()
        })
        .collect()
}
