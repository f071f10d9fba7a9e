use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sable::{init_statics, Board};

// Play random legal games, recording the key at every ply, then unwind and
// demand the exact keys come back. Exercises every make/unmake pair
// (captures, castles, promotions, en passant) against the incremental
// Zobrist update.
#[test]
fn keys_restore_through_random_games() {
    init_statics();
    let mut rng = SmallRng::seed_from_u64(0x00C0FFEE);

    for _game in 0..12 {
        let mut board = Board::start_pos();
        let mut key_stack: Vec<u64> = Vec::new();

        for _ply in 0..120 {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            key_stack.push(board.key());
            let mv = moves[rng.gen_range(0..moves.len())];
            board.apply_move(mv);
        }

        while let Some(expected) = key_stack.pop() {
            board.undo_move();
            assert_eq!(board.key(), expected);
        }
    }
}

#[test]
fn same_position_same_key() {
    // Transposed knight development reaches the identical position (the
    // orders are chosen so no en-passant square survives either line).
    let mut a = Board::start_pos();
    for m in ["e2e4", "b8c6", "g1f3", "g8f6"] {
        assert!(a.apply_uci_move(m));
    }

    let mut b = Board::start_pos();
    for m in ["g1f3", "g8f6", "e2e4", "b8c6"] {
        assert!(b.apply_uci_move(m));
    }

    // the halfmove clocks differ between the two orders, the keys may not
    assert_eq!(a.key(), b.key());
    assert_eq!(a.material_key(), b.material_key());
}

#[test]
fn ep_and_castle_feed_the_key() {
    // A double push creates an en-passant square, changing the key
    // relative to the same structure without one.
    let with_ep =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
    let without_ep =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3").unwrap();
    assert_ne!(with_ep.key(), without_ep.key());

    // Castling rights feed the key as well.
    let all_rights =
        Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    let no_rights = Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w - - 0 1").unwrap();
    assert_ne!(all_rights.key(), no_rights.key());
}
