//! FEN-related utilities and a fixture list of positions used across the
//! test suite.

/// A list of valid, varied FEN strings: the starting position plus the
/// standard perft suite positions, middlegames, and sparse endgames.
pub static ALL_FENS: [&str; 12] = [
    // starting position
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    // "kiwipete", every special move available
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    // sparse rook endgame
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    // promotion-heavy
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    // mirrored promotion race
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    // symmetric middlegame
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    // black to move variants
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1",
    // king and pawn endings
    "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1",
    "8/5k2/8/8/8/8/5P2/5K2 b - - 0 1",
    // queen vs rook
    "3k4/8/8/8/8/8/3Q4/3KR3 w - - 0 1",
    // knights and bishops
    "2b1kb2/8/8/8/8/8/8/2BNKBN1 w - - 0 1",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn all_fens_build() {
        for fen in ALL_FENS.iter() {
            let b = Board::from_fen(fen);
            assert!(b.is_ok(), "failed to build: {}", fen);
        }
    }
}
