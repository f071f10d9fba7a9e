use sable::movepick::MovePicker;
use sable::tables::{
    ButterflyHistory, CaptureHistory, ContinuationHistory, LowPlyHistory, PieceToHistory,
};
use sable::{init_statics, BitMove, Board};

fn find_move(board: &Board, uci: &str) -> BitMove {
    board
        .generate_moves()
        .iter()
        .find(|m| m.stringify() == uci)
        .copied()
        .unwrap_or_else(|| panic!("no move {}", uci))
}

struct Tables {
    main: ButterflyHistory,
    stat: ButterflyHistory,
    low: LowPlyHistory,
    caps: CaptureHistory,
    cont: ContinuationHistory,
}

impl Tables {
    fn new() -> Self {
        Tables {
            main: ButterflyHistory::new(),
            stat: ButterflyHistory::new(),
            low: LowPlyHistory::new(),
            caps: CaptureHistory::new(),
            cont: ContinuationHistory::new(),
        }
    }

    fn chain(&self) -> [&PieceToHistory; 6] {
        [self.cont.sentinel(); 6]
    }
}

#[test]
fn tt_then_refutations_then_quiets() {
    init_statics();
    let board = Board::start_pos();
    let tables = Tables::new();

    let ttm = find_move(&board, "e2e4");
    let killers = [find_move(&board, "g1f3"), find_move(&board, "b1c3")];
    let counter = find_move(&board, "d2d4");

    let mut picker = MovePicker::main_search(
        &board,
        ttm,
        10,
        1,
        &killers,
        counter,
        &tables.main,
        &tables.stat,
        &tables.low,
        &tables.caps,
        tables.chain(),
    );

    assert_eq!(picker.next(false), Some(ttm));
    assert_eq!(picker.next(false), Some(killers[0]));
    assert_eq!(picker.next(false), Some(killers[1]));
    assert_eq!(picker.next(false), Some(counter));

    let mut rest = Vec::new();
    while let Some(m) = picker.next(false) {
        rest.push(m);
    }
    assert_eq!(rest.len(), 16);
    assert_eq!(picker.next(false), None);
}

#[test]
fn history_orders_quiets() {
    let board = Board::start_pos();
    let mut tables = Tables::new();

    // Reward two specific quiets; they must surface first among quiets.
    let first = find_move(&board, "c2c4");
    let second = find_move(&board, "h2h3");
    for _ in 0..40 {
        tables.main.update(board.turn(), first, 600);
    }
    for _ in 0..20 {
        tables.stat.update(board.turn(), second, 600);
    }

    let killers = [BitMove::null(); 2];
    let mut picker = MovePicker::main_search(
        &board,
        BitMove::null(),
        10,
        4,
        &killers,
        BitMove::null(),
        &tables.main,
        &tables.stat,
        &tables.low,
        &tables.caps,
        tables.chain(),
    );

    let emitted: Vec<BitMove> = std::iter::from_fn(|| picker.next(false)).collect();
    assert_eq!(emitted[0], first);
    assert_eq!(emitted[1], second);
}

#[test]
fn counter_equal_to_killer_emitted_once() {
    let board = Board::start_pos();
    let tables = Tables::new();

    let killer = find_move(&board, "g1f3");
    let killers = [killer, BitMove::null()];

    let mut picker = MovePicker::main_search(
        &board,
        BitMove::null(),
        6,
        1,
        &killers,
        killer, // counter-move duplicates the killer
        &tables.main,
        &tables.stat,
        &tables.low,
        &tables.caps,
        tables.chain(),
    );

    let emitted: Vec<BitMove> = std::iter::from_fn(|| picker.next(false)).collect();
    assert_eq!(emitted.iter().filter(|m| **m == killer).count(), 1);
    assert_eq!(emitted.len(), 20);
}

#[test]
fn stale_tt_move_is_dropped() {
    let board = Board::start_pos();
    let tables = Tables::new();

    // A tt-move that is nonsense for this position must be silently
    // dropped, not emitted.
    let stale = BitMove::make_capture(sable::SQ::A3, sable::SQ::B7);
    let killers = [BitMove::null(); 2];

    let mut picker = MovePicker::main_search(
        &board,
        stale,
        6,
        1,
        &killers,
        BitMove::null(),
        &tables.main,
        &tables.stat,
        &tables.low,
        &tables.caps,
        tables.chain(),
    );

    let emitted: Vec<BitMove> = std::iter::from_fn(|| picker.next(false)).collect();
    assert!(!emitted.contains(&stale));
    assert_eq!(emitted.len(), 20);
}
