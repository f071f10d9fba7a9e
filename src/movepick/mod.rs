//! The staged move picker: yields one pseudo-legal move per call, in the
//! order most likely to produce a beta cutoff.
//!
//! Three constructors select the mode:
//!
//! * [`MovePicker::main_search`] -- transposition-table move, then captures
//!   split by static exchange into good and bad, then killer and
//!   counter-move refutations, then history-ordered quiets, then the
//!   deferred bad captures.
//! * [`MovePicker::qsearch`] -- captures only (restricted to recaptures at
//!   deep quiescence depths), plus quiet checks when the depth allows.
//! * [`MovePicker::probcut`] -- captures whose static exchange clears a
//!   threshold.
//!
//! When the side to move is in check, the main-search and quiescence modes
//! both collapse to the evasion stages.
//!
//! The picker checks pseudo-legality on the moves it vets (the tt-move and
//! refutations, which may come from other positions); full legality is the
//! caller's responsibility. A `None` return is terminal.

mod pick;

use self::pick::Pick;

use crate::board::movegen::{MoveGen, PseudoLegal};
use crate::board::Board;
use crate::core::mono_traits::{CapturesGenType, EvasionsGenType, QuietChecksGenType, QuietsGenType};
use crate::core::move_list::{MoveList, ScoringMoveList};
use crate::core::piece_move::BitMove;
use crate::core::score::{piecetype_value_mg, Value};
use crate::core::sq::{NO_SQ, SQ};
use crate::tables::{ButterflyHistory, CaptureHistory, LowPlyHistory, PieceToHistory, MAX_LOWPLY};

/// Depth at or above which quiescence also tries quiet checks.
pub const DEPTH_QS_CHECK: i16 = 0;
/// Depth at or below which quiescence only considers recaptures.
pub const DEPTH_QS_RECAP: i16 = -5;

/// Quiet evasions score below every capture evasion by this margin.
const EVASION_QUIET_PENALTY: i32 = 1 << 28;

/// Per-node staged move generator. Borrows the position and the history
/// tables for the lifetime of the node.
pub struct MovePicker<'a> {
    board: &'a Board,
    stage: Pick,
    tt_move: BitMove,
    depth: i16,
    ply: u16,
    recap_sq: SQ,
    threshold: Value,

    main_hist: Option<&'a ButterflyHistory>,
    static_hist: Option<&'a ButterflyHistory>,
    low_ply_hist: Option<&'a LowPlyHistory>,
    capture_hist: &'a CaptureHistory,
    cont_hist: Option<[&'a PieceToHistory; 6]>,

    /// Two killers and the counter-move, in emission order.
    refutations: [BitMove; 3],
    ref_queue: [BitMove; 3],
    ref_cur: usize,
    ref_end: usize,

    moves: ScoringMoveList,
    cur: usize,
    end: usize,

    bad_captures: MoveList,
    bad_cur: usize,
}

impl<'a> MovePicker<'a> {
    /// Constructor for the main search. `depth` must be positive.
    #[allow(clippy::too_many_arguments)]
    pub fn main_search(
        board: &'a Board,
        mut ttm: BitMove,
        depth: i16,
        ply: u16,
        killers: &[BitMove; 2],
        counter_move: BitMove,
        main_hist: &'a ButterflyHistory,
        static_hist: &'a ButterflyHistory,
        low_ply_hist: &'a LowPlyHistory,
        capture_hist: &'a CaptureHistory,
        cont_hist: [&'a PieceToHistory; 6],
    ) -> Self {
        debug_assert!(depth > 0);

        if ttm != BitMove::null() && !board.pseudo_legal_move(ttm) {
            ttm = BitMove::null();
        }
        let stage = if board.in_check() {
            if ttm.is_null() {
                Pick::EvasionInit
            } else {
                Pick::EvasionTT
            }
        } else if ttm.is_null() {
            Pick::CapturesInit
        } else {
            Pick::MainTT
        };

        MovePicker {
            board,
            stage,
            tt_move: ttm,
            depth,
            ply,
            recap_sq: NO_SQ,
            threshold: 0,
            main_hist: Some(main_hist),
            static_hist: Some(static_hist),
            low_ply_hist: Some(low_ply_hist),
            capture_hist,
            cont_hist: Some(cont_hist),
            refutations: [killers[0], killers[1], counter_move],
            ref_queue: [BitMove::null(); 3],
            ref_cur: 0,
            ref_end: 0,
            moves: ScoringMoveList::default(),
            cur: 0,
            end: 0,
            bad_captures: MoveList::default(),
            bad_cur: 0,
        }
    }

    /// Constructor for quiescence search. `depth` must be at most
    /// `DEPTH_QS_CHECK`; only captures (and, at `DEPTH_QS_CHECK`, quiet
    /// checks) are yielded, restricted to recaptures of `recap_sq` below
    /// `DEPTH_QS_RECAP`.
    pub fn qsearch(
        board: &'a Board,
        mut ttm: BitMove,
        depth: i16,
        recap_sq: SQ,
        main_hist: &'a ButterflyHistory,
        static_hist: &'a ButterflyHistory,
        capture_hist: &'a CaptureHistory,
        cont_hist: [&'a PieceToHistory; 6],
    ) -> Self {
        debug_assert!(depth <= DEPTH_QS_CHECK);

        if ttm != BitMove::null() && !board.pseudo_legal_move(ttm) {
            ttm = BitMove::null();
        }
        let stage = if board.in_check() {
            if ttm.is_null() {
                Pick::EvasionInit
            } else {
                Pick::EvasionTT
            }
        } else if !ttm.is_null()
            && (depth > DEPTH_QS_RECAP || ttm.get_dest() == recap_sq)
            && (ttm.is_capture() || depth >= DEPTH_QS_CHECK)
        {
            Pick::QSearchTT
        } else {
            Pick::QCapturesInit
        };

        MovePicker {
            board,
            stage,
            tt_move: ttm,
            depth,
            ply: 0,
            recap_sq,
            threshold: 0,
            main_hist: Some(main_hist),
            static_hist: Some(static_hist),
            low_ply_hist: None,
            capture_hist,
            cont_hist: Some(cont_hist),
            refutations: [BitMove::null(); 3],
            ref_queue: [BitMove::null(); 3],
            ref_cur: 0,
            ref_end: 0,
            moves: ScoringMoveList::default(),
            cur: 0,
            end: 0,
            bad_captures: MoveList::default(),
            bad_cur: 0,
        }
    }

    /// Constructor for ProbCut: yields captures with a static exchange at
    /// least `threshold`. The board must not be in check.
    pub fn probcut(
        board: &'a Board,
        mut ttm: BitMove,
        threshold: Value,
        capture_hist: &'a CaptureHistory,
    ) -> Self {
        debug_assert!(!board.in_check());

        if ttm != BitMove::null()
            && !(board.pseudo_legal_move(ttm) && ttm.is_capture() && board.see_ge(ttm, threshold))
        {
            ttm = BitMove::null();
        }
        let stage = if ttm.is_null() {
            Pick::ProbCutInit
        } else {
            Pick::ProbCutTT
        };

        MovePicker {
            board,
            stage,
            tt_move: ttm,
            depth: 0,
            ply: 0,
            recap_sq: NO_SQ,
            threshold,
            main_hist: None,
            static_hist: None,
            low_ply_hist: None,
            capture_hist,
            cont_hist: None,
            refutations: [BitMove::null(); 3],
            ref_queue: [BitMove::null(); 3],
            ref_cur: 0,
            ref_end: 0,
            moves: ScoringMoveList::default(),
            cur: 0,
            end: 0,
            bad_captures: MoveList::default(),
            bad_cur: 0,
        }
    }

    /// Returns the next move to try, or `None` once exhausted. `None` is
    /// terminal. With `skip_quiets` the quiet stages are passed over (bad
    /// captures and refutations still come out).
    pub fn next(&mut self, skip_quiets: bool) -> Option<BitMove> {
        loop {
            match self.stage {
                Pick::MainTT | Pick::EvasionTT | Pick::ProbCutTT | Pick::QSearchTT => {
                    self.stage.incr();
                    debug_assert!(!self.tt_move.is_null());
                    return Some(self.tt_move);
                }
                Pick::CapturesInit | Pick::ProbCutInit | Pick::QCapturesInit => {
                    self.moves.clear();
                    MoveGen::extend::<PseudoLegal, CapturesGenType, _>(self.board, &mut self.moves);
                    self.cur = 0;
                    self.end = self.moves.len();
                    self.remove_tt_move();
                    self.score_captures();
                    self.stage.incr();
                }
                Pick::GoodCaptures => {
                    while self.cur < self.end {
                        self.bring_best_forward();
                        let sm = self.moves[self.cur];
                        self.cur += 1;
                        if self.board.see_ge(sm.bit_move, -69 * sm.score / 1024) {
                            return Some(sm.bit_move);
                        }
                        // losing captures come back after the quiets
                        self.bad_captures.push(sm.bit_move);
                    }
                    self.prepare_refutations();
                    self.stage.incr();
                }
                Pick::Refutations => {
                    if self.ref_cur < self.ref_end {
                        let m = self.ref_queue[self.ref_cur];
                        self.ref_cur += 1;
                        return Some(m);
                    }
                    self.stage.incr();
                }
                Pick::QuietInit => {
                    if !skip_quiets {
                        self.moves.clear();
                        MoveGen::extend::<PseudoLegal, QuietsGenType, _>(
                            self.board,
                            &mut self.moves,
                        );
                        self.cur = 0;
                        self.end = self.moves.len();
                        self.remove_tt_move();
                        self.remove_refutations();
                        self.score_quiets();
                        let limit = -3000 * self.depth as i32;
                        let (cur, end) = (self.cur, self.end);
                        partial_sort(&mut self.moves.as_mut_slice()[cur..end], limit);
                    }
                    self.stage.incr();
                }
                Pick::Quiets => {
                    if !skip_quiets && self.cur < self.end {
                        let m = self.moves[self.cur].bit_move;
                        self.cur += 1;
                        return Some(m);
                    }
                    self.bad_cur = 0;
                    self.stage.incr();
                }
                Pick::BadCaptures => {
                    if self.bad_cur < self.bad_captures.len() {
                        let m = self.bad_captures[self.bad_cur];
                        self.bad_cur += 1;
                        return Some(m);
                    }
                    self.stage = Pick::Done;
                    return None;
                }
                Pick::EvasionInit => {
                    self.moves.clear();
                    MoveGen::extend::<PseudoLegal, EvasionsGenType, _>(self.board, &mut self.moves);
                    self.cur = 0;
                    self.end = self.moves.len();
                    self.remove_tt_move();
                    self.score_evasions();
                    self.stage.incr();
                }
                Pick::Evasions => {
                    if self.cur < self.end {
                        self.bring_best_forward();
                        let m = self.moves[self.cur].bit_move;
                        self.cur += 1;
                        return Some(m);
                    }
                    self.stage = Pick::Done;
                    return None;
                }
                Pick::ProbCutCaptures => {
                    while self.cur < self.end {
                        self.bring_best_forward();
                        let m = self.moves[self.cur].bit_move;
                        self.cur += 1;
                        if self.board.see_ge(m, self.threshold) {
                            return Some(m);
                        }
                    }
                    self.stage = Pick::Done;
                    return None;
                }
                Pick::QCaptures => {
                    while self.cur < self.end {
                        self.bring_best_forward();
                        let m = self.moves[self.cur].bit_move;
                        self.cur += 1;
                        if self.depth > DEPTH_QS_RECAP || m.get_dest() == self.recap_sq {
                            return Some(m);
                        }
                    }
                    // without a capture to try, checks only at the shallowest
                    // quiescence depth
                    if self.depth != DEPTH_QS_CHECK {
                        self.stage = Pick::Done;
                        return None;
                    }
                    self.moves.clear();
                    MoveGen::extend::<PseudoLegal, QuietChecksGenType, _>(
                        self.board,
                        &mut self.moves,
                    );
                    self.cur = 0;
                    self.end = self.moves.len();
                    self.remove_tt_move();
                    self.stage.incr();
                }
                Pick::QChecks => {
                    if self.cur < self.end {
                        let m = self.moves[self.cur].bit_move;
                        self.cur += 1;
                        return Some(m);
                    }
                    self.stage = Pick::Done;
                    return None;
                }
                Pick::Done => return None,
            }
        }
    }

    /// The stage the picker currently sits in, for diagnostics.
    pub fn stage_name(&self) -> String {
        self.stage.to_string()
    }

    // Swaps the highest-scored unscanned move to the cursor.
    fn bring_best_forward(&mut self) {
        let mut best = self.cur;
        for i in (self.cur + 1)..self.end {
            if self.moves[i].score > self.moves[best].score {
                best = i;
            }
        }
        self.moves.swap(self.cur, best);
    }

    // Removes the tt-move from the unscanned window, if present.
    fn remove_tt_move(&mut self) {
        if self.tt_move.is_null() {
            return;
        }
        let mut i = self.cur;
        while i < self.end {
            if self.moves[i].bit_move == self.tt_move {
                self.end -= 1;
                self.moves[i] = self.moves[self.end];
            } else {
                i += 1;
            }
        }
    }

    // Removes the refutation moves from the unscanned window.
    fn remove_refutations(&mut self) {
        let mut i = self.cur;
        while i < self.end {
            let m = self.moves[i].bit_move;
            if self.refutations.contains(&m) {
                self.end -= 1;
                self.moves[i] = self.moves[self.end];
            } else {
                i += 1;
            }
        }
    }

    // Vets the killers and counter-move for emission: each is dropped if
    // null, equal to the tt-move, equal to an earlier refutation, a
    // capture, or not pseudo-legal here.
    fn prepare_refutations(&mut self) {
        self.ref_cur = 0;
        self.ref_end = 0;
        for idx in 0..3 {
            let m = self.refutations[idx];
            if m.is_null()
                || m == self.tt_move
                || self.ref_queue[..self.ref_end].contains(&m)
                || m.is_capture()
                || !self.board.pseudo_legal_move(m)
            {
                continue;
            }
            self.ref_queue[self.ref_end] = m;
            self.ref_end += 1;
        }
    }

    // Captures: victim value dominates, capture history refines ties.
    fn score_captures(&mut self) {
        for i in self.cur..self.end {
            let m = self.moves[i].bit_move;
            let captured = self.board.captured_piece(m);
            self.moves[i].score = 6 * piecetype_value_mg(captured)
                + self
                    .capture_hist
                    .get(self.board.moved_piece(m), m.get_dest(), captured);
        }
    }

    // Quiets: butterfly + static + continuation plies 1, 2, 4 doubled and
    // 6 plain, with a low-ply bonus near the root.
    fn score_quiets(&mut self) {
        let us = self.board.turn();
        let main_hist = self.main_hist.expect("main history provided for quiets");
        let static_hist = self.static_hist.expect("static history provided for quiets");
        let cont_hist = self.cont_hist.expect("continuation history provided for quiets");

        for i in self.cur..self.end {
            let m = self.moves[i].bit_move;
            let moved = self.board.moved_piece(m);
            let to = m.get_dest();

            let mut score = main_hist.get(us, m)
                + static_hist.get(us, m)
                + 2 * cont_hist[0].get(moved, to)
                + 2 * cont_hist[1].get(moved, to)
                + 2 * cont_hist[3].get(moved, to)
                + cont_hist[5].get(moved, to);

            if (self.ply as usize) < MAX_LOWPLY {
                let low_ply = self.low_ply_hist.expect("low-ply history provided for quiets");
                score += low_ply.get(self.ply, m) * (self.depth as i32 / 3).min(4);
            }
            self.moves[i].score = score;
        }
    }

    // Evasions: captures by victim value minus attacker type; quiet
    // evasions by history, pushed below every capture.
    fn score_evasions(&mut self) {
        let us = self.board.turn();
        for i in self.cur..self.end {
            let m = self.moves[i].bit_move;
            self.moves[i].score = if m.is_capture() {
                piecetype_value_mg(self.board.captured_piece(m))
                    - self.board.moved_piece(m).type_of() as i32
            } else {
                let main_hist = self.main_hist.expect("main history provided for evasions");
                let cont_hist = self
                    .cont_hist
                    .expect("continuation history provided for evasions");
                main_hist.get(us, m)
                    + cont_hist[0].get(self.board.moved_piece(m), m.get_dest())
                    - EVASION_QUIET_PENALTY
            };
        }
    }
}

/// Sorts (by insertion) all items with a score at least `limit` to the
/// front, in descending order; the order of the remaining items is left
/// unspecified.
fn partial_sort(list: &mut [crate::core::piece_move::ScoringMove], limit: i32) {
    if list.is_empty() {
        return;
    }
    let mut sorted_end: usize = 0;
    for p in 1..list.len() {
        if list[p].score >= limit {
            let item = list[p];
            sorted_end += 1;
            list[p] = list[sorted_end];
            let mut q = sorted_end;
            while q > 0 && list[q - 1].score < item.score {
                list[q] = list[q - 1];
                q -= 1;
            }
            list[q] = item;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece_move::ScoringMove;
    use crate::tables::ContinuationHistory;

    struct Histories {
        main: ButterflyHistory,
        stat: ButterflyHistory,
        low: LowPlyHistory,
        caps: CaptureHistory,
        cont: ContinuationHistory,
    }

    impl Histories {
        fn new() -> Self {
            Histories {
                main: ButterflyHistory::new(),
                stat: ButterflyHistory::new(),
                low: LowPlyHistory::new(),
                caps: CaptureHistory::new(),
                cont: ContinuationHistory::new(),
            }
        }

        fn cont_chain(&self) -> [&PieceToHistory; 6] {
            [self.cont.sentinel(); 6]
        }
    }

    fn uci(board: &Board, s: &str) -> BitMove {
        board
            .generate_moves()
            .iter()
            .find(|m| m.stringify() == s)
            .copied()
            .unwrap_or_else(|| panic!("no move {}", s))
    }

    #[test]
    fn partial_sort_promotes_above_limit() {
        let mut list: Vec<ScoringMove> = [3, -50, 20, 7, -2, 100]
            .iter()
            .map(|s| ScoringMove::new_score(BitMove::null(), *s))
            .collect();
        partial_sort(&mut list, 0);
        let front: Vec<i32> = list.iter().map(|sm| sm.score).take(4).collect();
        assert_eq!(front, vec![100, 20, 7, 3]);
    }

    #[test]
    fn start_position_ordering() {
        let board = Board::start_pos();
        let hists = Histories::new();

        let ttm = uci(&board, "e2e4");
        let killers = [uci(&board, "g1f3"), uci(&board, "b1c3")];
        let counter = uci(&board, "d2d4");

        let mut picker = MovePicker::main_search(
            &board,
            ttm,
            8,
            2,
            &killers,
            counter,
            &hists.main,
            &hists.stat,
            &hists.low,
            &hists.caps,
            hists.cont_chain(),
        );

        // tt-move first; no captures exist, so the refutations follow.
        assert_eq!(picker.next(false), Some(ttm));
        assert_eq!(picker.next(false), Some(killers[0]));
        assert_eq!(picker.next(false), Some(killers[1]));
        assert_eq!(picker.next(false), Some(counter));

        // the rest are the remaining quiets, each exactly once
        let mut seen = vec![ttm, killers[0], killers[1], counter];
        while let Some(m) = picker.next(false) {
            assert!(!seen.contains(&m), "duplicate {}", m);
            seen.push(m);
        }
        assert_eq!(seen.len(), 20);
        // terminal: stays exhausted
        assert_eq!(picker.next(false), None);
        assert_eq!(picker.next(false), None);
    }

    #[test]
    fn emits_every_legal_move_once() {
        let board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        let hists = Histories::new();
        let ttm = uci(&board, "e2a6"); // a legal capture
        let killers = [BitMove::null(); 2];

        let mut picker = MovePicker::main_search(
            &board,
            ttm,
            6,
            5,
            &killers,
            BitMove::null(),
            &hists.main,
            &hists.stat,
            &hists.low,
            &hists.caps,
            hists.cont_chain(),
        );

        let mut emitted: Vec<BitMove> = Vec::new();
        while let Some(m) = picker.next(false) {
            assert!(!emitted.contains(&m), "duplicate {}", m);
            emitted.push(m);
        }

        let legal = board.generate_moves();
        for m in legal.iter() {
            assert!(emitted.contains(&m), "missing legal move {}", m);
        }
        // everything emitted is pseudo-legal
        for m in emitted.iter() {
            assert!(board.pseudo_legal_move(*m), "illegal emission {}", m);
        }
    }

    #[test]
    fn skip_quiets_suppresses_quiet_stages() {
        let board = Board::start_pos();
        let hists = Histories::new();
        let killers = [BitMove::null(); 2];

        let mut picker = MovePicker::main_search(
            &board,
            BitMove::null(),
            4,
            1,
            &killers,
            BitMove::null(),
            &hists.main,
            &hists.stat,
            &hists.low,
            &hists.caps,
            hists.cont_chain(),
        );

        // No captures, no refutations, quiets skipped: nothing comes out.
        assert_eq!(picker.next(true), None);
    }

    #[test]
    fn evasion_mode_when_in_check() {
        let board =
            Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert!(board.in_check());
        let hists = Histories::new();
        let killers = [BitMove::null(); 2];

        let mut picker = MovePicker::main_search(
            &board,
            BitMove::null(),
            4,
            1,
            &killers,
            BitMove::null(),
            &hists.main,
            &hists.stat,
            &hists.low,
            &hists.caps,
            hists.cont_chain(),
        );

        let mut emitted: Vec<BitMove> = Vec::new();
        while let Some(m) = picker.next(false) {
            emitted.push(m);
        }
        let legal = board.generate_moves();
        assert!(!emitted.is_empty());
        for m in legal.iter() {
            assert!(emitted.contains(&m), "missing evasion {}", m);
        }
    }

    #[test]
    fn qsearch_yields_captures_only() {
        let board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        let hists = Histories::new();

        let mut picker = MovePicker::qsearch(
            &board,
            BitMove::null(),
            -1,
            NO_SQ,
            &hists.main,
            &hists.stat,
            &hists.caps,
            hists.cont_chain(),
        );

        while let Some(m) = picker.next(false) {
            assert!(m.is_capture() || m.is_promo(), "unexpected quiet {}", m);
        }
    }

    #[test]
    fn deep_qsearch_restricts_to_recaptures() {
        let board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        let hists = Histories::new();

        let recap = SQ::H3;
        let mut picker = MovePicker::qsearch(
            &board,
            BitMove::null(),
            DEPTH_QS_RECAP,
            recap,
            &hists.main,
            &hists.stat,
            &hists.caps,
            hists.cont_chain(),
        );

        while let Some(m) = picker.next(false) {
            assert_eq!(m.get_dest(), recap, "non-recapture {}", m);
        }
    }

    #[test]
    fn probcut_filters_by_see() {
        let board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        let hists = Histories::new();

        let mut picker = MovePicker::probcut(&board, BitMove::null(), 200, &hists.caps);
        while let Some(m) = picker.next(false) {
            assert!(m.is_capture() || m.is_promo());
            assert!(board.see_ge(m, 200), "see below threshold: {}", m);
        }
    }

    #[test]
    fn good_captures_before_bad() {
        // White queen can capture a defended pawn (bad) or a hanging rook
        // (good).
        let board = Board::from_fen("1k1r4/pp6/8/3p4/8/3Q3r/PP6/1K6 w - - 0 1").unwrap();
        let hists = Histories::new();
        let killers = [BitMove::null(); 2];

        let mut picker = MovePicker::main_search(
            &board,
            BitMove::null(),
            4,
            1,
            &killers,
            BitMove::null(),
            &hists.main,
            &hists.stat,
            &hists.low,
            &hists.caps,
            hists.cont_chain(),
        );

        let qxr = uci(&board, "d3h3"); // the rook hangs
        let qxp = uci(&board, "d3d5"); // defended pawn: loses the queen

        let mut order: Vec<BitMove> = Vec::new();
        while let Some(m) = picker.next(false) {
            order.push(m);
        }
        let good_pos = order.iter().position(|m| *m == qxr).unwrap();
        let bad_pos = order.iter().position(|m| *m == qxp).unwrap();
        assert!(good_pos < bad_pos, "losing capture emitted early");
        // the losing capture comes after every quiet
        let last_quiet = order
            .iter()
            .rposition(|m| m.is_quiet_move())
            .unwrap();
        assert!(bad_pos > last_quiet);
    }
}
