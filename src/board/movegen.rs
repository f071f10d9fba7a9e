//! Move generation for a `Board`: Legal and pseudo-legal moves of various
//! kinds.
//!
//! # Generation types
//!
//! `All`, `Captures`, `Quiets`, `QuietChecks`, `Evasions`, `NonEvasions`.
//! `Captures`, `Quiets`, `QuietChecks`, and `NonEvasions` may only be used
//! when the board is not in check; `Evasions` only when it is. `All`
//! dispatches on the check state itself.
//!
//! Promotions are generated by the capture generator (capturing and
//! non-capturing alike) and never by the quiet generator, so the two are
//! disjoint and their union with king/castle moves covers every move.
//!
//! # `Legal` vs. `PseudoLegal`
//!
//! Pseudo-legal generation skips the (comparatively expensive) discovered
//! self-check test; callers filter with [`Board::legal_move`] before
//! applying a move.
//!
//! [`Board::legal_move`]: ../struct.Board.html#method.legal_move

use super::Board;

use crate::core::bitboard::BitBoard;
use crate::core::mono_traits::*;
use crate::core::move_list::{MVPushable, MoveList, ScoringMoveList};
use crate::core::piece_move::BitMove;
use crate::core::sq::{NO_SQ, SQ};
use crate::core::{CastleType, GenTypes, PieceType, Player, Rank};
use crate::helper::prelude::*;

/// Determines if the moves generated are `PseudoLegal` or `Legal`.
pub trait Legality {
    /// Returns if only legal moves should be generated.
    fn gen_legal() -> bool;
}

/// Marker to generate `Legal` moves.
pub struct Legal {}

/// Marker to generate `PseudoLegal` moves.
pub struct PseudoLegal {}

impl Legality for Legal {
    #[inline(always)]
    fn gen_legal() -> bool {
        true
    }
}

impl Legality for PseudoLegal {
    #[inline(always)]
    fn gen_legal() -> bool {
        false
    }
}

/// Public move generator.
pub struct MoveGen {}

impl MoveGen {
    /// Returns a `MoveList` of all moves for a given board, legality, and
    /// generation type.
    #[inline]
    pub fn generate<L: Legality, G: GenTypeTrait>(chessboard: &Board) -> MoveList {
        let mut movelist = MoveList::default();
        InnerMoveGen::<MoveList>::generate::<L, G>(chessboard, &mut movelist);
        movelist
    }

    /// Returns a `ScoringMoveList` of all moves for a given board, legality,
    /// and generation type, each with a zeroed score.
    #[inline]
    pub fn generate_scoring<L: Legality, G: GenTypeTrait>(chessboard: &Board) -> ScoringMoveList {
        let mut movelist = ScoringMoveList::default();
        InnerMoveGen::<ScoringMoveList>::generate::<L, G>(chessboard, &mut movelist);
        movelist
    }

    /// Extends an existing list with the generated moves.
    #[inline]
    pub fn extend<L: Legality, G: GenTypeTrait, MP: MVPushable>(
        chessboard: &Board,
        movelist: &mut MP,
    ) {
        InnerMoveGen::<MP>::generate::<L, G>(chessboard, movelist);
    }
}

/// Internal generator: holds the board and the output list while the
/// per-piece generation functions run.
struct InnerMoveGen<'a, 'b, MP: MVPushable> {
    movelist: &'b mut MP,
    board: &'a Board,
    occ: BitBoard,
    us_occ: BitBoard,
    them_occ: BitBoard,
}

impl<'a, 'b, MP: MVPushable> InnerMoveGen<'a, 'b, MP> {
    #[inline(always)]
    fn generate<L: Legality, G: GenTypeTrait>(chessboard: &'a Board, movelist: &'b mut MP) {
        match chessboard.turn() {
            Player::White => {
                InnerMoveGen::<MP>::generate_helper::<L, G, WhiteType>(chessboard, movelist)
            }
            Player::Black => {
                InnerMoveGen::<MP>::generate_helper::<L, G, BlackType>(chessboard, movelist)
            }
        }
    }

    #[inline(always)]
    fn get_self(chessboard: &'a Board, movelist: &'b mut MP) -> Self {
        InnerMoveGen {
            movelist,
            board: chessboard,
            occ: chessboard.occupied(),
            us_occ: chessboard.get_occupied_player(chessboard.turn()),
            them_occ: chessboard.get_occupied_player(!chessboard.turn()),
        }
    }

    fn generate_helper<L: Legality, G: GenTypeTrait, P: PlayerTrait>(
        chessboard: &'a Board,
        movelist: &'b mut MP,
    ) {
        let mut movegen = InnerMoveGen::<MP>::get_self(chessboard, movelist);
        let gen_type = G::gen_type();
        if gen_type == GenTypes::Evasions {
            movegen.generate_evasions::<L, P>();
        } else if gen_type == GenTypes::QuietChecks {
            movegen.generate_quiet_checks::<L, P>();
        } else if gen_type == GenTypes::All {
            if movegen.board.in_check() {
                movegen.generate_evasions::<L, P>();
            } else {
                movegen.generate_non_evasions::<L, NonEvasionsGenType, P>();
            }
        } else {
            movegen.generate_non_evasions::<L, G, P>();
        }
    }

    fn generate_non_evasions<L: Legality, G: GenTypeTrait, P: PlayerTrait>(&mut self) {
        debug_assert_ne!(G::gen_type(), GenTypes::All);
        debug_assert_ne!(G::gen_type(), GenTypes::QuietChecks);
        debug_assert_ne!(G::gen_type(), GenTypes::Evasions);
        debug_assert!(!self.board.in_check());

        // target = bitboard of squares the generator should aim for
        let target: BitBoard = match G::gen_type() {
            GenTypes::NonEvasions => !self.us_occ,
            GenTypes::Captures => self.them_occ,
            GenTypes::Quiets => !(self.us_occ | self.them_occ),
            _ => unreachable!(),
        };

        self.generate_all::<L, G, P>(target);
    }

    fn generate_all<L: Legality, G: GenTypeTrait, P: PlayerTrait>(&mut self, target: BitBoard) {
        self.generate_pawn_moves::<L, G, P>(target);

        if G::gen_type() == GenTypes::QuietChecks {
            // Direct checks only: restrict each piece to the squares from
            // which it would check; discovered checkers were handled
            // separately by the caller.
            let dc = self.board.discovered_check_candidates();
            self.moves_per_piece::<L, P, KnightType>(
                target & self.board.check_sqs(PieceType::N),
                !dc,
            );
            self.moves_per_piece::<L, P, BishopType>(
                target & self.board.check_sqs(PieceType::B),
                !dc,
            );
            self.moves_per_piece::<L, P, RookType>(
                target & self.board.check_sqs(PieceType::R),
                !dc,
            );
            self.moves_per_piece::<L, P, QueenType>(
                target & self.board.check_sqs(PieceType::Q),
                !dc,
            );
        } else {
            self.moves_per_piece::<L, P, KnightType>(target, BitBoard::ALL);
            self.moves_per_piece::<L, P, BishopType>(target, BitBoard::ALL);
            self.moves_per_piece::<L, P, RookType>(target, BitBoard::ALL);
            self.moves_per_piece::<L, P, QueenType>(target, BitBoard::ALL);
        }

        if G::gen_type() != GenTypes::QuietChecks && G::gen_type() != GenTypes::Evasions {
            self.moves_per_piece::<L, P, KingType>(target, BitBoard::ALL);
        }

        if G::gen_type() != GenTypes::Captures
            && G::gen_type() != GenTypes::Evasions
            && G::gen_type() != GenTypes::QuietChecks
            && (self.board.can_castle(P::player(), CastleType::KingSide)
                || self.board.can_castle(P::player(), CastleType::QueenSide))
        {
            self.generate_castling::<L, P>();
        }
    }

    // Generates quiet moves that give check: discovered checks from moving
    // blockers, then direct checks masked by the check squares.
    fn generate_quiet_checks<L: Legality, P: PlayerTrait>(&mut self) {
        debug_assert!(!self.board.in_check());
        let mut disc_check: BitBoard = self.board.discovered_check_candidates();
        let target: BitBoard = !self.board.occupied();

        while let Some(from) = disc_check.pop_some_lsb() {
            let piece: PieceType = self.board.piece_at_sq(from).type_of();
            if piece != PieceType::P {
                let mut b: BitBoard = self.moves_bb(piece, from) & target;
                if piece == PieceType::K {
                    // King discovered checks cannot stay on a line to the
                    // enemy king.
                    b &= !queen_moves(BitBoard(0), self.board.king_sq(P::opp_player()));
                }
                self.move_append_from_bb_flag::<L>(&mut b, from, BitMove::FLAG_QUIET);
            }
        }
        self.generate_all::<L, QuietChecksGenType, P>(target);
    }

    // Generates moves to get out of check: king steps off the attacked
    // lines, plus blocks and captures of a lone checker.
    fn generate_evasions<L: Legality, P: PlayerTrait>(&mut self) {
        debug_assert!(self.board.in_check());

        let ksq: SQ = self.board.king_sq(P::player());
        let mut slider_attacks = BitBoard(0);

        let mut sliders: BitBoard = self.board.checkers()
            & !self
                .board
                .piece_two_bb_both_players(PieceType::P, PieceType::N);

        while let Some((check_sq, check_sq_bb)) = sliders.pop_some_lsb_and_bit() {
            slider_attacks |= line_bb(check_sq, ksq) ^ check_sq_bb;
        }

        let k_moves: BitBoard = king_moves(ksq) & !slider_attacks & !self.us_occ;

        let mut captures_bb: BitBoard = k_moves & self.them_occ;
        let mut non_captures_bb: BitBoard = k_moves & !self.them_occ;
        self.move_append_from_bb_flag::<L>(&mut captures_bb, ksq, BitMove::FLAG_CAPTURE);
        self.move_append_from_bb_flag::<L>(&mut non_captures_bb, ksq, BitMove::FLAG_QUIET);

        // With a single checker, blocking or capturing it is also an option
        if !self.board.checkers().more_than_one() {
            let checking_sq: SQ = self.board.checkers().bit_scan_forward();
            let target: BitBoard = between_bb(checking_sq, ksq) | checking_sq.to_bb();
            self.generate_all::<L, EvasionsGenType, P>(target);
        }
    }

    fn generate_castling<L: Legality, P: PlayerTrait>(&mut self) {
        self.castling_side::<L, P>(CastleType::QueenSide);
        self.castling_side::<L, P>(CastleType::KingSide);
    }

    fn castling_side<L: Legality, P: PlayerTrait>(&mut self, side: CastleType) {
        if !self.board.castle_impeded(side)
            && self.board.can_castle(P::player(), side)
            && self
                .board
                .piece_at_sq(self.board.castling_rook_square(side))
                .type_of()
                == PieceType::R
        {
            let king_side: bool = side == CastleType::KingSide;

            let ksq: SQ = self.board.king_sq(P::player());
            let r_from: SQ = self.board.castling_rook_square(side);
            let k_to = P::player().relative_square(if king_side { SQ::G1 } else { SQ::C1 });

            let enemies: BitBoard = self.them_occ;
            let direction: fn(SQ) -> SQ = if king_side {
                |x: SQ| x - SQ(1)
            } else {
                |x: SQ| x + SQ(1)
            };

            // The king cannot pass through an attacked square
            let mut s: SQ = k_to;
            let mut can_castle: bool = true;
            while s != ksq {
                let attackers: BitBoard = self.board.attackers_to(s, self.occ) & enemies;
                if attackers.is_not_empty() {
                    can_castle = false;
                    break;
                }
                s = direction(s);
            }
            if can_castle {
                let flag = if king_side {
                    BitMove::FLAG_KING_CASTLE
                } else {
                    BitMove::FLAG_QUEEN_CASTLE
                };
                self.check_and_add::<L>(BitMove::make(flag, ksq, r_from));
            }
        }
    }

    // Captures and non-captures for a piece type; `src_mask` filters the
    // source squares.
    fn moves_per_piece<L: Legality, PL: PlayerTrait, P: PieceTrait>(
        &mut self,
        target: BitBoard,
        src_mask: BitBoard,
    ) {
        let mut piece_bb: BitBoard = self.board.piece_bb(PL::player(), P::piece_type()) & src_mask;
        while let Some(src) = piece_bb.pop_some_lsb() {
            let moves_bb: BitBoard = self.moves_bb(P::piece_type(), src) & !self.us_occ & target;
            let mut captures_bb: BitBoard = moves_bb & self.them_occ;
            let mut non_captures_bb: BitBoard = moves_bb & !self.them_occ;
            self.move_append_from_bb_flag::<L>(&mut captures_bb, src, BitMove::FLAG_CAPTURE);
            self.move_append_from_bb_flag::<L>(&mut non_captures_bb, src, BitMove::FLAG_QUIET);
        }
    }

    fn generate_pawn_moves<L: Legality, G: GenTypeTrait, P: PlayerTrait>(
        &mut self,
        target: BitBoard,
    ) {
        let (rank_8, rank_7, rank_3): (BitBoard, BitBoard, BitBoard) =
            if P::player() == Player::White {
                (BitBoard::RANK_8, BitBoard::RANK_7, BitBoard::RANK_3)
            } else {
                (BitBoard::RANK_1, BitBoard::RANK_2, BitBoard::RANK_6)
            };

        let all_pawns: BitBoard = self.board.piece_bb(P::player(), PieceType::P);

        // separated for promotion and non-promotion handling
        let pawns_rank_7: BitBoard = all_pawns & rank_7;
        let pawns_not_rank_7: BitBoard = all_pawns & !rank_7;

        let mut empty_squares = BitBoard(0);

        let enemies: BitBoard = if G::gen_type() == GenTypes::Evasions {
            self.them_occ & target
        } else if G::gen_type() == GenTypes::Captures {
            target
        } else {
            self.them_occ
        };

        // Single and double pawn pushes, no promotions
        if G::gen_type() != GenTypes::Captures {
            empty_squares =
                if G::gen_type() == GenTypes::Quiets || G::gen_type() == GenTypes::QuietChecks {
                    target
                } else {
                    !self.board.occupied()
                };

            let mut push_one: BitBoard = empty_squares & P::shift_up(pawns_not_rank_7);
            let mut push_two: BitBoard = P::shift_up(push_one & rank_3) & empty_squares;

            if G::gen_type() == GenTypes::Evasions {
                push_one &= target;
                push_two &= target;
            }

            if G::gen_type() == GenTypes::QuietChecks {
                let ksq: SQ = self.board.king_sq(P::opp_player());
                // Direct checking pushes land on the enemy king's pawn
                // attack squares
                let mut direct_one = push_one & pawn_attacks_from(ksq, P::opp_player());
                let mut direct_two = push_two & pawn_attacks_from(ksq, P::opp_player());

                // Discovered-check pushes: any push off the king's file
                let dc_candidates: BitBoard = self.board.discovered_check_candidates();
                if (pawns_not_rank_7 & dc_candidates).is_not_empty() {
                    let dc1: BitBoard = P::shift_up(pawns_not_rank_7 & dc_candidates)
                        & empty_squares
                        & !ksq.file_bb();
                    let dc2: BitBoard = P::shift_up(rank_3 & dc1) & empty_squares;

                    direct_one |= dc1;
                    direct_two |= dc2;
                }
                push_one = direct_one;
                push_two = direct_two;
            }

            while let Some(dst) = push_one.pop_some_lsb() {
                let src: SQ = P::down(dst);
                self.check_and_add::<L>(BitMove::make_quiet(src, dst));
            }

            while let Some(dst) = push_two.pop_some_lsb() {
                let src: SQ = P::down(P::down(dst));
                self.check_and_add::<L>(BitMove::make_pawn_push(src, dst));
            }
        }

        // Promotions, both capturing and not
        if pawns_rank_7.is_not_empty()
            && G::gen_type() != GenTypes::Quiets
            && G::gen_type() != GenTypes::QuietChecks
            && (G::gen_type() != GenTypes::Evasions || (target & rank_8).is_not_empty())
        {
            if G::gen_type() == GenTypes::Captures {
                empty_squares = !self.occ;
            } else if G::gen_type() == GenTypes::Evasions {
                empty_squares &= target;
            }

            let mut no_promo: BitBoard = P::shift_up(pawns_rank_7) & empty_squares;
            let mut left_cap_promo: BitBoard = P::shift_up_left(pawns_rank_7) & enemies;
            let mut right_cap_promo: BitBoard = P::shift_up_right(pawns_rank_7) & enemies;

            while let Some(dst) = no_promo.pop_some_lsb() {
                self.create_all_promos::<L>(dst, P::down(dst), false);
            }

            while let Some(dst) = left_cap_promo.pop_some_lsb() {
                self.create_all_promos::<L>(dst, P::down_right(dst), true);
            }

            while let Some(dst) = right_cap_promo.pop_some_lsb() {
                self.create_all_promos::<L>(dst, P::down_left(dst), true);
            }
        }

        // Captures, including en passant
        if G::gen_type() == GenTypes::Captures
            || G::gen_type() == GenTypes::Evasions
            || G::gen_type() == GenTypes::NonEvasions
            || G::gen_type() == GenTypes::All
        {
            let mut left_cap: BitBoard = P::shift_up_left(pawns_not_rank_7) & enemies;
            let mut right_cap: BitBoard = P::shift_up_right(pawns_not_rank_7) & enemies;

            while let Some(dst) = left_cap.pop_some_lsb() {
                let src: SQ = P::down_right(dst);
                self.check_and_add::<L>(BitMove::make_capture(src, dst));
            }

            while let Some(dst) = right_cap.pop_some_lsb() {
                let src: SQ = P::down_left(dst);
                self.check_and_add::<L>(BitMove::make_capture(src, dst));
            }

            if self.board.ep_square() != NO_SQ {
                let ep_sq: SQ = self.board.ep_square();
                debug_assert_eq!(ep_sq.rank(), P::player().relative_rank(Rank::R6));

                // An en passant capture can evade check only when the
                // checker is the double-pushed pawn itself; a discovered
                // check cannot be resolved by it.
                if G::gen_type() != GenTypes::Evasions
                    || (target & P::down(ep_sq).to_bb()).is_not_empty()
                {
                    let mut ep_attackers =
                        pawns_not_rank_7 & pawn_attacks_from(ep_sq, P::opp_player());

                    while let Some(src) = ep_attackers.pop_some_lsb() {
                        self.check_and_add::<L>(BitMove::make_ep_capture(src, ep_sq));
                    }
                }
            }
        }
    }

    #[inline]
    fn create_all_promos<L: Legality>(&mut self, dst: SQ, src: SQ, is_capture: bool) {
        let base = if is_capture {
            BitMove::FLAG_PROMO_CAP_N
        } else {
            BitMove::FLAG_PROMO_N
        };
        self.check_and_add::<L>(BitMove::make(base | 0b11, src, dst)); // queen
        self.check_and_add::<L>(BitMove::make(base, src, dst)); // knight
        self.check_and_add::<L>(BitMove::make(base | 0b10, src, dst)); // rook
        self.check_and_add::<L>(BitMove::make(base | 0b01, src, dst)); // bishop
    }

    #[inline]
    fn moves_bb(&self, piece: PieceType, square: SQ) -> BitBoard {
        debug_assert!(square.is_okay());
        debug_assert_ne!(piece, PieceType::P);
        match piece {
            PieceType::N => knight_moves(square),
            PieceType::B => bishop_moves(self.occ, square),
            PieceType::R => rook_moves(self.occ, square),
            PieceType::Q => queen_moves(self.occ, square),
            PieceType::K => king_moves(square),
            _ => BitBoard(0),
        }
    }

    #[inline]
    fn move_append_from_bb_flag<L: Legality>(
        &mut self,
        bits: &mut BitBoard,
        src: SQ,
        flag_bits: u16,
    ) {
        while let Some(dst) = bits.pop_some_lsb() {
            let b_move = BitMove::make(flag_bits, src, dst);
            self.check_and_add::<L>(b_move);
        }
    }

    /// Filters by legality (if requested) and pushes to the move list.
    #[inline]
    fn check_and_add<L: Legality>(&mut self, b_move: BitMove) {
        if !L::gen_legal() || self.board.legal_move(b_move) {
            self.movelist.push_mv(b_move);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::ALL_FENS;
    use crate::board::Board;

    #[test]
    fn start_position_move_count() {
        let b = Board::start_pos();
        assert_eq!(b.generate_moves().len(), 20);
        assert_eq!(b.generate_moves_of_type(GenTypes::Captures).len(), 0);
        assert_eq!(b.generate_moves_of_type(GenTypes::Quiets).len(), 20);
    }

    #[test]
    fn kiwipete_move_count() {
        let b =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
                .unwrap();
        assert_eq!(b.generate_moves().len(), 48);
    }

    #[test]
    fn perft_positions_depth_one() {
        let expected: [(usize, usize); 4] = [(0, 20), (1, 48), (2, 14), (3, 6)];
        for (idx, count) in expected.iter() {
            let b = Board::from_fen(ALL_FENS[*idx]).unwrap();
            assert_eq!(b.generate_moves().len(), *count, "fen {}", ALL_FENS[*idx]);
        }
    }

    #[test]
    fn legal_subset_of_pseudolegal() {
        for fen in ALL_FENS.iter() {
            let b = Board::from_fen(fen).unwrap();
            let legal = b.generate_moves();
            let pseudo = b.generate_pseudolegal_moves();
            assert!(legal.len() <= pseudo.len());
            for m in legal.iter() {
                assert!(pseudo.iter().any(|pm| pm == m));
                assert!(b.pseudo_legal_move(*m), "{} on {}", m, fen);
            }
        }
    }

    #[test]
    fn captures_and_quiets_partition_moves() {
        for fen in ALL_FENS.iter() {
            let b = Board::from_fen(fen).unwrap();
            if b.in_check() {
                continue;
            }
            let all = b.generate_moves();
            let caps = b.generate_moves_of_type(GenTypes::Captures);
            let quiets = b.generate_moves_of_type(GenTypes::Quiets);
            // captures (with promotions) and quiets (with castles) partition
            // the full move set
            assert_eq!(all.len(), caps.len() + quiets.len(), "{}", fen);
            for m in caps.iter() {
                assert!(!quiets.iter().any(|qm| qm == m));
            }
        }
    }

    #[test]
    fn quiet_checks_give_check() {
        for fen in ALL_FENS.iter() {
            let b = Board::from_fen(fen).unwrap();
            if b.in_check() {
                continue;
            }
            let checks = b.generate_moves_of_type(GenTypes::QuietChecks);
            for m in checks.iter() {
                assert!(!m.is_capture(), "{} on {}", m, fen);
                assert!(b.gives_check(*m), "{} on {}", m, fen);
            }
        }
    }

    #[test]
    fn evasions_resolve_check() {
        let b = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
        let evasions = b.generate_moves();
        assert!(!evasions.is_empty());
        for m in evasions.iter() {
            let mut b2 = b.shallow_clone();
            b2.apply_move(*m);
            // the mover's king may not remain attacked
            let mover = !b2.turn();
            let attacked = b2.attackers_to(b2.king_sq(mover), b2.occupied())
                & b2.get_occupied_player(b2.turn());
            assert!(attacked.is_empty(), "{}", m);
            b2.undo_move();
        }
    }
}
