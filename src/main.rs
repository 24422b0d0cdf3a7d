use abra_core::{Bitboard, Color, PieceKind, Position, movegen};
use anyhow::Result;
use tracing::info;

/// Home rows of each side: back rank first, then the pawn row.
fn home_rows(color: Color) -> (Bitboard, Bitboard) {
    match color {
        Color::White => (Bitboard::ROW_7, Bitboard::ROW_6),
        Color::Black => (Bitboard::ROW_0, Bitboard::ROW_1),
    }
}

/// Source squares of `kind` for `color` in the initial setup.
fn initial_sources(kind: PieceKind, color: Color) -> Bitboard {
    let (back, pawns) = home_rows(color);
    let cols: &[u8] = match kind {
        PieceKind::Pawn => return pawns,
        PieceKind::Knight => &[1, 6],
        PieceKind::Bishop => &[2, 5],
        PieceKind::Rook => &[0, 7],
        PieceKind::Queen => &[3],
        PieceKind::King => &[4],
    };
    cols.iter().fold(Bitboard::EMPTY, |bb, &col| bb | (back & Bitboard::col_mask(col)))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("abra starting");

    movegen::warm_tables();

    let (white_back, white_pawns) = home_rows(Color::White);
    let (black_back, black_pawns) = home_rows(Color::Black);
    let position = Position::new(white_back | white_pawns, black_back | black_pawns, None)?;

    for color in Color::ALL {
        for kind in PieceKind::ALL {
            let sources = initial_sources(kind, color);
            let moves = position.moves(kind, sources, color) & !position.side(color);
            let attacks = position.attacks(kind, sources, color);
            info!(
                %color,
                %kind,
                pieces = sources.count(),
                destinations = moves.count(),
                attacked = attacks.count(),
                "initial position"
            );
        }
    }
    Ok(())
}
