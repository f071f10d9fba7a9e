use sable::board::fen::ALL_FENS;
use sable::board::START_FEN;
use sable::{init_statics, Board};

#[test]
fn build_all_fens() {
    init_statics();
    for fen in ALL_FENS.iter() {
        let b = Board::from_fen(fen).unwrap();
        assert_eq!(&b.get_fen(), fen);
    }
}

#[test]
fn default_is_start_position() {
    let b = Board::default();
    assert_eq!(b.get_fen(), START_FEN);
    assert_eq!(b.moves_played(), 0);
}

#[test]
fn invalid_fens_rejected() {
    assert!(Board::from_fen("").is_err());
    assert!(Board::from_fen("rubbish").is_err());
    // seven ranks only
    assert!(Board::from_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
    // no kings
    assert!(Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err());
    // bad piece character
    assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1").is_err());
    // bad turn
    assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
}

#[test]
fn clone_shares_state() {
    let mut b = Board::start_pos();
    assert!(b.apply_uci_move("e2e4"));
    let clone = b.shallow_clone();
    assert_eq!(b.key(), clone.key());
    assert_eq!(b.get_fen(), clone.get_fen());
}
