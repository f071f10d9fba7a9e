use sable::board::fen::ALL_FENS;
use sable::{init_statics, Board, GenTypes};

fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.generate_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for m in moves.iter() {
        board.apply_move(*m);
        nodes += perft(board, depth - 1);
        board.undo_move();
    }
    nodes
}

#[test]
fn perft_start_position() {
    init_statics();
    let mut b = Board::start_pos();
    assert_eq!(perft(&mut b, 1), 20);
    assert_eq!(perft(&mut b, 2), 400);
    assert_eq!(perft(&mut b, 3), 8_902);
    assert_eq!(perft(&mut b, 4), 197_281);
}

#[test]
fn perft_kiwipete() {
    let mut b =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    assert_eq!(perft(&mut b, 1), 48);
    assert_eq!(perft(&mut b, 2), 2_039);
    assert_eq!(perft(&mut b, 3), 97_862);
}

#[test]
fn perft_endgame_position() {
    let mut b = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(perft(&mut b, 1), 14);
    assert_eq!(perft(&mut b, 2), 191);
    assert_eq!(perft(&mut b, 3), 2_812);
    assert_eq!(perft(&mut b, 4), 43_238);
}

#[test]
fn perft_promotion_position() {
    let mut b =
        Board::from_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
            .unwrap();
    assert_eq!(perft(&mut b, 1), 6);
    assert_eq!(perft(&mut b, 2), 264);
    assert_eq!(perft(&mut b, 3), 9_467);
}

#[test]
fn generated_moves_apply_cleanly() {
    for fen in ALL_FENS.iter() {
        let board = Board::from_fen(fen).unwrap();
        for m in board.generate_moves().iter() {
            let mut b = board.shallow_clone();
            b.apply_move(*m);
            b.undo_move();
            assert_eq!(b.get_fen(), *fen, "make/unmake failed for {} on {}", m, fen);
        }
    }
}

#[test]
fn pseudolegal_accepts_own_generation() {
    for fen in ALL_FENS.iter() {
        let board = Board::from_fen(fen).unwrap();
        for m in board.generate_pseudolegal_moves().iter() {
            assert!(board.pseudo_legal_move(*m), "rejected {} on {}", m, fen);
        }
    }
}

#[test]
fn subset_generation_is_consistent() {
    for fen in ALL_FENS.iter() {
        let board = Board::from_fen(fen).unwrap();
        if board.in_check() {
            let evasions = board.generate_moves_of_type(GenTypes::Evasions);
            let all = board.generate_moves();
            assert_eq!(evasions.len(), all.len(), "{}", fen);
        } else {
            let caps = board.generate_moves_of_type(GenTypes::Captures);
            for m in caps.iter() {
                assert!(m.is_capture() || m.is_promo(), "{} on {}", m, fen);
            }
            let quiets = board.generate_moves_of_type(GenTypes::Quiets);
            for m in quiets.iter() {
                assert!(!m.is_capture(), "{} on {}", m, fen);
            }
        }
    }
}
