//! Static evaluation: material plus piece-square bonuses.
//!
//! Scores are oriented so that Black is the positive side: Black material
//! counts up, White material counts down, and the piece-square bonus is
//! credited to Black alone. White pieces score material only; the search
//! maximizes for Black and minimizes for White to match.

use shakmaty::{Chess, Color, Position, Role, Square};

/// Pawn bonus, indexed by [rank][file] with the rank mirrored for Black
/// so that row 0 is the owner's back rank.
const PAWN_BONUS: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [3, 3, 10, 19, 16, 19, 7, -5],
    [-9, -15, 11, 15, 32, 22, 5, -22],
    [-4, -23, 6, 20, 40, 17, 4, -8],
    [13, 0, -13, 1, 11, -2, -13, 5],
    [5, -12, -7, 22, -8, -5, -15, -8],
    [-7, 7, -3, -13, 5, -16, 10, -8],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Bonus for the remaining piece types, indexed by
/// [piece][rank][min(file, 7 - file)]. The four columns cover the a-d
/// files; e-h mirror them across the center. Piece order: knight, bishop,
/// rook, queen, king.
const PIECE_BONUS: [[[i32; 4]; 8]; 5] = [
    [
        [-175, -92, -74, -73],
        [-77, -41, -27, -15],
        [-61, -17, 6, 12],
        [-35, 8, 40, 49],
        [-34, 13, 44, 51],
        [-9, 22, 58, 53],
        [-67, -27, 4, 37],
        [-201, -83, -56, -26],
    ],
    [
        [-53, -5, -8, -23],
        [-15, 8, 19, 4],
        [-7, 21, -5, 17],
        [-5, 11, 25, 39],
        [-12, 29, 22, 31],
        [-16, 6, 1, 11],
        [-17, -14, 5, 0],
        [-48, 1, -14, -23],
    ],
    [
        [-31, -20, -14, -5],
        [-21, -13, -8, 6],
        [-25, -11, -1, 3],
        [-13, -5, -4, -6],
        [-27, -15, -4, 3],
        [-22, -2, 6, 12],
        [-2, 12, 16, 18],
        [-17, -19, -1, 9],
    ],
    [
        [3, -5, -5, 4],
        [-3, 5, 8, 12],
        [-3, 6, 13, 7],
        [4, 5, 9, 8],
        [0, 14, 12, 5],
        [-4, 10, 6, 8],
        [-5, 6, 10, 8],
        [-2, -2, 1, -2],
    ],
    [
        [271, 327, 271, 198],
        [278, 303, 234, 179],
        [195, 258, 169, 120],
        [164, 190, 138, 98],
        [154, 179, 105, 70],
        [123, 145, 81, 31],
        [88, 120, 65, 33],
        [59, 89, 45, -1],
    ],
];

/// Material weight per piece type, in pawn units. Kings never actually come
/// off the board in a legal game; 90 keeps them dominant anyway.
fn material(role: Role) -> i32 {
    match role {
        Role::Pawn => 1,
        Role::Knight | Role::Bishop => 3,
        Role::Rook => 5,
        Role::Queen => 9,
        Role::King => 90,
    }
}

/// Sum of piece-square bonuses for one side's pieces.
fn square_bonus(pos: &Chess, color: Color) -> i32 {
    let board = pos.board();
    let mut bonus = 0;

    for sq in Square::ALL {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        if piece.color != color {
            continue;
        }

        let file = sq.file() as usize;
        let rank = sq.rank() as usize;
        let row = if color == Color::Black { 7 - rank } else { rank };

        bonus += match piece.role {
            Role::Pawn => PAWN_BONUS[row][file],
            Role::Knight => PIECE_BONUS[0][row][file.min(7 - file)],
            Role::Bishop => PIECE_BONUS[1][row][file.min(7 - file)],
            Role::Rook => PIECE_BONUS[2][row][file.min(7 - file)],
            Role::Queen => PIECE_BONUS[3][row][file.min(7 - file)],
            Role::King => PIECE_BONUS[4][row][file.min(7 - file)],
        };
    }

    bonus
}

/// Evaluate a position from Black's perspective.
///
/// Pure function of the board contents: no history, no randomness. The
/// positional term is one-sided on purpose; symmetrizing it changes what
/// the search prefers in every scenario.
pub fn evaluate(pos: &Chess) -> i32 {
    let board = pos.board();
    let mut score = 0;

    for sq in Square::ALL {
        if let Some(piece) = board.piece_at(sq) {
            match piece.color {
                Color::Black => score += material(piece.role),
                Color::White => score -= material(piece.role),
            }
        }
    }

    score + square_bonus(pos, Color::Black)
}
