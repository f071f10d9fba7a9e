//! The [`Board`]: the object representing a chess position.
//!
//! All modifications to the current state of the board are done through this
//! object, as well as gathering information about the current state. The
//! search-facing read-only surface (checkers, pins, pseudo-legality,
//! legality, check detection, static exchange evaluation, keys) lives here
//! too.
//!
//! [`Board`]: struct.Board.html

pub mod board_state;
pub mod castle_rights;
pub mod fen;
pub mod movegen;

use crate::core::bitboard::BitBoard;
use crate::core::masks::*;
use crate::core::mono_traits::*;
use crate::core::move_list::MoveList;
use crate::core::piece_move::{BitMove, MoveType};
use crate::core::score::{piecetype_value_mg, Value};
use crate::core::sq::{NO_SQ, SQ};
use crate::core::*;
use crate::helper::prelude::*;

use self::board_state::BoardState;
use self::castle_rights::Castling;
use self::movegen::{Legal, MoveGen, PseudoLegal};

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// FEN string of the starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Represents possible errors encountered while building a `Board` from a
/// FEN string.
#[derive(Error, Debug)]
pub enum FenBuildError {
    #[error("invalid number of fen sections: {sections}, expected 4 to 6")]
    NotEnoughSections { sections: usize },
    #[error("invalid number of ranks: {ranks}, expected 8")]
    IncorrectRankAmounts { ranks: usize },
    #[error("invalid turn: {turn}, expected 'w' or 'b'")]
    UnrecognizedTurn { turn: String },
    #[error("unreadable castling rights: {castle}")]
    UnrecognizedCastle { castle: String },
    #[error("unreadable en-passant square: {ep}")]
    EpSquareUnreadable { ep: String },
    #[error("unrecognized piece: {piece}")]
    UnrecognizedPiece { piece: char },
    #[error("rank {rank} does not describe 8 squares")]
    BadRankLength { rank: usize },
    #[error("unreadable move counter")]
    UnreadableMoves(#[from] std::num::ParseIntError),
    #[error("incorrect number of kings for {player}: {num}")]
    IncorrectKingNum { player: Player, num: u8 },
}

/// Represents a chess position.
///
/// The position is stored with one `BitBoard` per (player, piece type), a
/// redundant square-indexed piece array for O(1) square queries, and an
/// [`Arc`]-linked stack of [`BoardState`]s carrying everything a move
/// cannot cheaply recompute.
pub struct Board {
    turn: Player,
    bbs: [[BitBoard; PIECE_TYPE_CNT]; PLAYER_CNT],
    occ: [BitBoard; PLAYER_CNT],
    occ_all: BitBoard,
    piece_array: [Piece; SQ_CNT],
    piece_counts: [[u8; PIECE_TYPE_CNT]; PLAYER_CNT],
    half_moves: u16,
    state: Arc<BoardState>,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board: {}", self.get_fen())
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.turn == other.turn
            && self.occ_all == other.occ_all
            && *self.state == *other.state
            && self.piece_array == other.piece_array
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        self.shallow_clone()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::start_pos()
    }
}

impl Board {
    /// Constructs a board from the starting position.
    pub fn start_pos() -> Board {
        Board::from_fen(START_FEN).expect("start position FEN is valid")
    }

    /// Constructs a shallow clone of the board. The state stack is shared,
    /// so [`Board::undo_move`] must not be called on the clone until it has
    /// applied a move of its own.
    ///
    /// [`Board::undo_move`]: struct.Board.html#method.undo_move
    pub fn shallow_clone(&self) -> Board {
        Board {
            turn: self.turn,
            bbs: self.bbs,
            occ: self.occ,
            occ_all: self.occ_all,
            piece_array: self.piece_array,
            piece_counts: self.piece_counts,
            half_moves: self.half_moves,
            state: Arc::clone(&self.state),
        }
    }

    /// Constructs a board from a FEN string.
    ///
    /// The halfmove clock and fullmove counter may be omitted; they default
    /// to zero and one.
    pub fn from_fen(fen: &str) -> Result<Board, FenBuildError> {
        init_statics();

        let sections: Vec<&str> = fen.split_whitespace().collect();
        if sections.len() < 4 || sections.len() > 6 {
            return Err(FenBuildError::NotEnoughSections {
                sections: sections.len(),
            });
        }

        let ranks: Vec<&str> = sections[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenBuildError::IncorrectRankAmounts { ranks: ranks.len() });
        }

        let mut piece_array = [Piece::None; SQ_CNT];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file: usize = 0;
            for c in rank_str.chars() {
                if let Some(d) = c.to_digit(10) {
                    file += d as usize;
                } else {
                    if file >= 8 {
                        return Err(FenBuildError::BadRankLength { rank });
                    }
                    let player = if c.is_uppercase() {
                        Player::White
                    } else {
                        Player::Black
                    };
                    let pt = match c.to_ascii_lowercase() {
                        'p' => PieceType::P,
                        'n' => PieceType::N,
                        'b' => PieceType::B,
                        'r' => PieceType::R,
                        'q' => PieceType::Q,
                        'k' => PieceType::K,
                        _ => return Err(FenBuildError::UnrecognizedPiece { piece: c }),
                    };
                    piece_array[rank * 8 + file] = Piece::make_lossy(player, pt);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenBuildError::BadRankLength { rank });
            }
        }

        let turn: Player = match sections[1] {
            "w" => Player::White,
            "b" => Player::Black,
            _ => {
                return Err(FenBuildError::UnrecognizedTurn {
                    turn: sections[1].to_string(),
                })
            }
        };

        let mut castling = Castling::empty_set();
        for c in sections[2].chars() {
            if !castling.add_castling_char(c) {
                return Err(FenBuildError::UnrecognizedCastle {
                    castle: sections[2].to_string(),
                });
            }
        }

        let ep_square: SQ = if sections[3] == "-" {
            NO_SQ
        } else {
            let bytes = sections[3].as_bytes();
            if bytes.len() != 2
                || !(b'a'..=b'h').contains(&bytes[0])
                || !(b'1'..=b'8').contains(&bytes[1])
            {
                return Err(FenBuildError::EpSquareUnreadable {
                    ep: sections[3].to_string(),
                });
            }
            SQ((bytes[1] - b'1') * 8 + (bytes[0] - b'a'))
        };

        let rule_50: i16 = if sections.len() > 4 {
            sections[4].parse::<i16>()?
        } else {
            0
        };

        let full_moves: u16 = if sections.len() > 5 {
            sections[5].parse::<u16>()?
        } else {
            1
        };
        let mut half_moves = full_moves.saturating_sub(1) * 2;
        if turn == Player::Black {
            half_moves += 1;
        }

        let mut state = BoardState::blank();
        state.castling = castling;
        state.rule_50 = rule_50;
        state.ep_square = ep_square;

        let mut b = Board {
            turn,
            bbs: [[BitBoard(0); PIECE_TYPE_CNT]; PLAYER_CNT],
            occ: [BitBoard(0); PLAYER_CNT],
            occ_all: BitBoard(0),
            piece_array,
            piece_counts: [[0; PIECE_TYPE_CNT]; PLAYER_CNT],
            half_moves,
            state: Arc::new(BoardState::blank()),
        };
        b.set_bitboards();
        b.check_kings()?;

        state.checkers_bb =
            b.attackers_to(b.king_sq(turn), b.occupied()) & b.get_occupied_player(!turn);
        b.set_check_info(&mut state);
        b.set_keys(&mut state);
        b.state = Arc::new(state);
        Ok(b)
    }

    /// Creates a FEN string of the board.
    pub fn get_fen(&self) -> String {
        let mut s = String::default();
        for rank in (0..8).rev() {
            let mut blanks = 0;
            for file in 0..8 {
                let piece = self.piece_array[rank * 8 + file];
                match piece.character() {
                    Some(c) => {
                        if blanks != 0 {
                            s.push(char::from_digit(blanks, 10).unwrap());
                            blanks = 0;
                        }
                        s.push(c);
                    }
                    None => blanks += 1,
                }
            }
            if blanks != 0 {
                s.push(char::from_digit(blanks, 10).unwrap());
            }
            if rank != 0 {
                s.push('/');
            }
        }

        s.push(' ');
        s.push(match self.turn {
            Player::White => 'w',
            Player::Black => 'b',
        });
        s.push(' ');
        s.push_str(&self.state.castling.pretty_string());
        s.push(' ');
        if self.ep_square() == NO_SQ {
            s.push('-');
        } else {
            s.push_str(&self.ep_square().to_string());
        }
        s.push(' ');
        s.push_str(&self.rule_50().to_string());
        s.push(' ');
        s.push_str(&((self.half_moves / 2) + 1).to_string());
        s
    }

    // Sets the bitboards and piece counts from a filled piece array.
    fn set_bitboards(&mut self) {
        for sq in 0..SQ_CNT {
            let piece = self.piece_array[sq];
            if piece != Piece::None {
                let bb = SQ(sq as u8).to_bb();
                let player = piece.player_lossy();
                self.bbs[player as usize][piece.type_of() as usize] |= bb;
                self.occ[player as usize] |= bb;
                self.piece_counts[player as usize][piece.type_of() as usize] += 1;
            }
        }
        self.occ_all = self.occ[0] | self.occ[1];
    }

    fn check_kings(&self) -> Result<(), FenBuildError> {
        for player in &ALL_PLAYERS {
            let num = self.count_piece(*player, PieceType::K);
            if num != 1 {
                return Err(FenBuildError::IncorrectKingNum {
                    player: *player,
                    num,
                });
            }
        }
        Ok(())
    }

    // Sets the Zobrist and material keys from scratch; the rest of the
    // board must be set.
    fn set_keys(&self, state: &mut BoardState) {
        let mut zob: u64 = 0;
        let mut b = self.occupied();
        while let Some(sq) = b.pop_some_lsb() {
            zob ^= z_square(sq, self.piece_at_sq(sq));
        }

        if state.ep_square != NO_SQ {
            zob ^= z_ep(state.ep_square);
        }
        zob ^= z_castle(state.castling.bits());
        if self.turn == Player::Black {
            zob ^= z_side();
        }

        let mut material: u64 = z_no_pawns();
        for player in &ALL_PLAYERS {
            for pt in &ALL_PIECE_TYPES {
                let piece = Piece::make_lossy(*player, *pt);
                for cnt in 0..self.count_piece(*player, *pt) {
                    material ^= z_square(SQ(cnt), piece);
                }
            }
        }

        state.zobrist = zob;
        state.material_key = material;
    }

    /// Applies a move to the board.
    ///
    /// # Safety
    ///
    /// The move must be legal for the current position.
    pub fn apply_move(&mut self, bit_move: BitMove) {
        let gives_check: bool = self.gives_check(bit_move);
        self.apply_unknown_move(bit_move, gives_check);
    }

    /// Applies a move to the board with a pre-computed `gives_check` flag.
    ///
    /// # Safety
    ///
    /// The move must be legal for the current position, and `gives_check`
    /// must be accurate for it.
    pub fn apply_unknown_move(&mut self, bit_move: BitMove, gives_check: bool) {
        debug_assert!(!bit_move.is_null());
        debug_assert_ne!(bit_move.get_src(), bit_move.get_dest());

        let mut zob: u64 = self.state.zobrist ^ z_side();
        let mut material_key: u64 = self.state.material_key;

        let mut new_state: BoardState = self.state.partial_clone();
        new_state.prev = Some(Arc::clone(&self.state));

        self.half_moves += 1;
        new_state.rule_50 += 1;
        new_state.ply += 1;
        new_state.prev_move = bit_move;

        let us = self.turn;
        let them = !us;
        let from: SQ = bit_move.get_src();
        let mut to: SQ = bit_move.get_dest();
        let piece: Piece = self.piece_at_sq(from);

        debug_assert_ne!(piece, Piece::None);
        debug_assert_eq!(piece.player_lossy(), us);

        let captured: Option<PieceType> = if bit_move.is_en_passant() {
            Some(PieceType::P)
        } else if bit_move.is_castle() {
            None
        } else {
            let p = self.piece_at_sq(to);
            if p == Piece::None {
                None
            } else {
                Some(p.type_of())
            }
        };

        if bit_move.is_castle() {
            debug_assert_eq!(piece.type_of(), PieceType::K);
            debug_assert_eq!(self.piece_at_sq(to).type_of(), PieceType::R);

            let mut r_src: SQ = SQ(0);
            let mut r_dst: SQ = SQ(0);
            self.apply_castling(us, from, &mut to, &mut r_src, &mut r_dst);

            let rook = Piece::make_lossy(us, PieceType::R);
            zob ^= z_square(r_src, rook) ^ z_square(r_dst, rook);
        } else if let Some(cap_pt) = captured {
            let mut cap_sq: SQ = to;
            if bit_move.is_en_passant() {
                debug_assert_eq!(cap_sq, self.state.ep_square);
                cap_sq = SQ((cap_sq.0 as i8 - us.pawn_push()) as u8);
                debug_assert_eq!(piece.type_of(), PieceType::P);
            }
            let cap_piece = Piece::make_lossy(them, cap_pt);
            debug_assert_eq!(self.piece_at_sq(cap_sq), cap_piece);

            // The material key drops the highest-numbered copy of the
            // captured piece.
            let cnt = self.piece_counts[them as usize][cap_pt as usize];
            material_key ^= z_square(SQ(cnt - 1), cap_piece);

            self.remove_piece_c(cap_pt, cap_sq, them);
            zob ^= z_square(cap_sq, cap_piece);
            new_state.rule_50 = 0;
        }

        zob ^= z_square(to, piece) ^ z_square(from, piece);

        if self.state.ep_square != NO_SQ {
            zob ^= z_ep(self.state.ep_square);
            new_state.ep_square = NO_SQ;
        }

        if !new_state.castling.no_castling()
            && (to.castle_rights_mask() | from.castle_rights_mask()) != 0
        {
            let removed = new_state.castling.update_castling(to, from);
            zob ^= z_castle(removed);
        }

        if !bit_move.is_castle() {
            self.move_piece_c(piece.type_of(), from, to, us);
        }

        if piece.type_of() == PieceType::P {
            if distance_of_sqs(to, from) == 2 && to.file() == from.file() {
                new_state.ep_square = SQ((to.0 + from.0) / 2);
                zob ^= z_ep(new_state.ep_square);
            } else if bit_move.is_promo() {
                let promo_pt: PieceType = bit_move.promo_piece();
                let promo_piece = Piece::make_lossy(us, promo_pt);

                self.remove_piece_c(PieceType::P, to, us);
                self.put_piece_c(promo_pt, to, us);
                zob ^= z_square(to, piece) ^ z_square(to, promo_piece);

                material_key ^=
                    z_square(SQ(self.piece_counts[us as usize][PieceType::P as usize]), piece);
                material_key ^= z_square(
                    SQ(self.piece_counts[us as usize][promo_pt as usize] - 1),
                    promo_piece,
                );
            }
            new_state.rule_50 = 0;
        }

        new_state.captured_piece = captured;
        new_state.zobrist = zob;
        new_state.material_key = material_key;

        new_state.checkers_bb = if gives_check {
            self.attackers_to(self.king_sq(them), self.occupied()) & self.get_occupied_player(us)
        } else {
            BitBoard(0)
        };

        self.turn = them;
        self.set_check_info(&mut new_state);
        self.state = Arc::new(new_state);
    }

    /// Applies a UCI-notation move to the board, returning true on success.
    /// The board is unchanged if the string matches no legal move.
    pub fn apply_uci_move(&mut self, uci_move: &str) -> bool {
        let all_moves: MoveList = self.generate_moves();
        let bit_move: Option<BitMove> =
            all_moves.iter().find(|m| m.stringify() == uci_move).copied();
        if let Some(mov) = bit_move {
            self.apply_move(mov);
            return true;
        }
        false
    }

    /// Un-does the previously applied move, returning the board to its most
    /// recently held state.
    ///
    /// # Panics
    ///
    /// Panics if there is no previous move to undo.
    pub fn undo_move(&mut self) {
        assert!(self.state.prev.is_some());
        assert!(!self.state.prev_move.is_null());

        let undo_move: BitMove = self.state.prev_move;

        self.turn = !self.turn;
        let us: Player = self.turn;
        let from: SQ = undo_move.get_src();
        let to: SQ = undo_move.get_dest();

        debug_assert!(self.piece_at_sq(from) == Piece::None || undo_move.is_castle());

        if undo_move.is_promo() {
            debug_assert_eq!(self.piece_at_sq(to).type_of(), undo_move.promo_piece());
            self.remove_piece_c(undo_move.promo_piece(), to, us);
            self.put_piece_c(PieceType::P, to, us);
        }

        if undo_move.is_castle() {
            self.remove_castling(us, from, to);
        } else {
            let pt = self.piece_at_sq(to).type_of();
            self.move_piece_c(pt, to, from, us);
            if let Some(cap_pt) = self.state.captured_piece {
                let mut cap_sq: SQ = to;
                if undo_move.is_en_passant() {
                    cap_sq = SQ((cap_sq.0 as i8 - us.pawn_push()) as u8);
                }
                self.put_piece_c(cap_pt, cap_sq, !us);
            }
        }

        let prev = self.state.get_prev().unwrap();
        self.state = prev;
        self.half_moves -= 1;
    }

    /// Applies a "null move": swaps the side to move without moving pieces.
    ///
    /// # Safety
    ///
    /// Only meaningful for search purposes. The board must not be in check.
    pub unsafe fn apply_null_move(&mut self) {
        debug_assert!(self.checkers().is_empty());

        let mut zob: u64 = self.state.zobrist ^ z_side();

        let mut new_state: BoardState = self.state.partial_clone();
        new_state.prev = Some(Arc::clone(&self.state));
        new_state.prev_move = BitMove::null();
        new_state.rule_50 += 1;
        new_state.ply += 1;

        if self.state.ep_square != NO_SQ {
            zob ^= z_ep(self.state.ep_square);
            new_state.ep_square = NO_SQ;
        }

        new_state.zobrist = zob;
        self.turn = !self.turn;
        self.set_check_info(&mut new_state);
        self.state = Arc::new(new_state);
    }

    /// Undoes a "null move".
    ///
    /// # Safety
    ///
    /// The last applied move must have been a null move.
    pub unsafe fn undo_null_move(&mut self) {
        debug_assert!(self.state.prev_move.is_null());
        self.turn = !self.turn;
        let prev = self.state.get_prev().unwrap();
        self.state = prev;
    }

    /// Returns a list of legal moves for the player whose turn it is.
    pub fn generate_moves(&self) -> MoveList {
        MoveGen::generate::<Legal, AllGenType>(self)
    }

    /// Returns a list of pseudo-legal moves for the player whose turn it is.
    /// Moves must be checked with [`Board::legal_move`] before application.
    ///
    /// [`Board::legal_move`]: struct.Board.html#method.legal_move
    pub fn generate_pseudolegal_moves(&self) -> MoveList {
        MoveGen::generate::<PseudoLegal, AllGenType>(self)
    }

    /// Returns a list of legal moves of the given kind.
    ///
    /// # Panics
    ///
    /// Panics if given `GenTypes::QuietChecks` while the board is in check.
    pub fn generate_moves_of_type(&self, gen_type: GenTypes) -> MoveList {
        match gen_type {
            GenTypes::All => MoveGen::generate::<Legal, AllGenType>(self),
            GenTypes::Captures => MoveGen::generate::<Legal, CapturesGenType>(self),
            GenTypes::Quiets => MoveGen::generate::<Legal, QuietsGenType>(self),
            GenTypes::QuietChecks => MoveGen::generate::<Legal, QuietChecksGenType>(self),
            GenTypes::Evasions => MoveGen::generate::<Legal, EvasionsGenType>(self),
            GenTypes::NonEvasions => MoveGen::generate::<Legal, NonEvasionsGenType>(self),
        }
    }

    //  ------- PRIVATE MUTATING FUNCTIONS -------

    // Computes the blockers, pinners, and check squares after a move is
    // made (or the board is built).
    fn set_check_info(&self, board_state: &mut BoardState) {
        let mut white_pinners = BitBoard(0);
        board_state.blockers_king[Player::White as usize] = self.slider_blockers(
            self.occupied_black(),
            self.king_sq(Player::White),
            &mut white_pinners,
        );
        board_state.pinners_king[Player::White as usize] = white_pinners;

        let mut black_pinners = BitBoard(0);
        board_state.blockers_king[Player::Black as usize] = self.slider_blockers(
            self.occupied_white(),
            self.king_sq(Player::Black),
            &mut black_pinners,
        );
        board_state.pinners_king[Player::Black as usize] = black_pinners;

        let opp = !self.turn;
        let ksq: SQ = self.king_sq(opp);
        let occupied = self.occupied();

        board_state.check_sqs[PieceType::P as usize] = pawn_attacks_from(ksq, opp);
        board_state.check_sqs[PieceType::N as usize] = knight_moves(ksq);
        board_state.check_sqs[PieceType::B as usize] = bishop_moves(occupied, ksq);
        board_state.check_sqs[PieceType::R as usize] = rook_moves(occupied, ksq);
        board_state.check_sqs[PieceType::Q as usize] = board_state.check_sqs
            [PieceType::B as usize]
            | board_state.check_sqs[PieceType::R as usize];
        board_state.check_sqs[PieceType::K as usize] = BitBoard(0);
    }

    // Places a piece on the board for a given player.
    //
    // There must not already be a piece at that square.
    fn put_piece_c(&mut self, piece_type: PieceType, square: SQ, player: Player) {
        debug_assert_eq!(self.piece_at_sq(square), Piece::None);
        let bb = square.to_bb();
        self.occ_all |= bb;
        self.occ[player as usize] |= bb;
        self.bbs[player as usize][piece_type as usize] |= bb;
        self.piece_array[square.0 as usize] = Piece::make_lossy(player, piece_type);
        self.piece_counts[player as usize][piece_type as usize] += 1;
    }

    // Removes a piece from the board for a given player.
    fn remove_piece_c(&mut self, piece_type: PieceType, square: SQ, player: Player) {
        debug_assert_eq!(
            self.piece_at_sq(square),
            Piece::make_lossy(player, piece_type)
        );
        let bb = square.to_bb();
        self.occ_all ^= bb;
        self.occ[player as usize] ^= bb;
        self.bbs[player as usize][piece_type as usize] ^= bb;
        self.piece_array[square.0 as usize] = Piece::None;
        self.piece_counts[player as usize][piece_type as usize] -= 1;
    }

    // Moves a piece of a given player from square 'from' to square 'to'.
    fn move_piece_c(&mut self, piece_type: PieceType, from: SQ, to: SQ, player: Player) {
        debug_assert_ne!(from, to);
        let comb_bb: BitBoard = from.to_bb() | to.to_bb();
        self.occ_all ^= comb_bb;
        self.occ[player as usize] ^= comb_bb;
        self.bbs[player as usize][piece_type as usize] ^= comb_bb;
        self.piece_array[from.0 as usize] = Piece::None;
        self.piece_array[to.0 as usize] = Piece::make_lossy(player, piece_type);
    }

    // Applies a castle for the given player. `to_r_orig` enters as the
    // original rook square and leaves as the king's destination; `r_src`
    // and `r_dst` are filled with the rook's path.
    fn apply_castling(
        &mut self,
        player: Player,
        k_src: SQ,
        to_r_orig: &mut SQ,
        r_src: &mut SQ,
        r_dst: &mut SQ,
    ) {
        let king_side: bool = k_src < *to_r_orig;

        *r_src = *to_r_orig;
        if king_side {
            *to_r_orig = player.relative_square(SQ::G1);
            *r_dst = player.relative_square(SQ::F1);
        } else {
            *to_r_orig = player.relative_square(SQ::C1);
            *r_dst = player.relative_square(SQ::D1);
        }
        self.move_piece_c(PieceType::K, k_src, *to_r_orig, player);
        self.move_piece_c(PieceType::R, *r_src, *r_dst, player);
    }

    // Reverts a castle for the given player, from the original king and
    // rook squares.
    fn remove_castling(&mut self, player: Player, k_src: SQ, r_src: SQ) {
        let k_dst: SQ = self.king_sq(player);
        let king_side: bool = k_src < r_src;
        let r_dst: SQ = if king_side {
            player.relative_square(SQ::F1)
        } else {
            player.relative_square(SQ::D1)
        };

        self.move_piece_c(PieceType::K, k_dst, k_src, player);
        self.move_piece_c(PieceType::R, r_dst, r_src, player);
    }

    // Returns the pieces blocking sliders in `sliders` from reaching the
    // square `s`, filling `pinners` with the sliders that have exactly one
    // blocker.
    fn slider_blockers(&self, sliders: BitBoard, s: SQ, pinners: &mut BitBoard) -> BitBoard {
        let mut result = BitBoard(0);
        *pinners = BitBoard(0);
        let occupied: BitBoard = self.occupied();

        let mut snipers: BitBoard = sliders
            & ((rook_moves(BitBoard(0), s)
                & self.piece_two_bb_both_players(PieceType::R, PieceType::Q))
                | (bishop_moves(BitBoard(0), s)
                    & self.piece_two_bb_both_players(PieceType::B, PieceType::Q)));

        while let Some(sniper_sq) = snipers.pop_some_lsb() {
            let b: BitBoard = between_bb(s, sniper_sq) & occupied;
            if b.is_not_empty() && !b.more_than_one() {
                result |= b;
                let other_occ = self.get_occupied_player(self.piece_at_sq(s).player_lossy());
                if (b & other_occ).is_not_empty() {
                    *pinners |= sniper_sq.to_bb();
                }
            }
        }

        result
    }
}

// General information

impl Board {
    /// Returns the player whose turn it is to move.
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the Zobrist key of the board.
    #[inline(always)]
    pub fn key(&self) -> u64 {
        self.state.zobrist
    }

    /// Returns the Zobrist-derived key of the board's material configuration.
    #[inline(always)]
    pub fn material_key(&self) -> u64 {
        self.state.material_key
    }

    /// Returns the total number of half-moves played.
    #[inline(always)]
    pub fn moves_played(&self) -> u16 {
        self.half_moves
    }

    /// Returns the number of half-moves since a pawn push, castle, or capture.
    #[inline(always)]
    pub fn rule_50(&self) -> i16 {
        self.state.rule_50
    }

    /// Returns the current ply of the board: half-moves played since the
    /// board was created.
    #[inline(always)]
    pub fn ply(&self) -> u16 {
        self.state.ply
    }

    /// Returns the current en-passant square, `NO_SQ` if none.
    #[inline(always)]
    pub fn ep_square(&self) -> SQ {
        self.state.ep_square
    }

    /// Returns the `BitBoard` of all pieces.
    #[inline(always)]
    pub fn occupied(&self) -> BitBoard {
        self.occ_all
    }

    /// Returns the `BitBoard` of the squares occupied by the given player.
    #[inline(always)]
    pub fn get_occupied_player(&self, player: Player) -> BitBoard {
        self.occ[player as usize]
    }

    /// Returns the `BitBoard` of squares occupied by the white player.
    #[inline(always)]
    pub fn occupied_white(&self) -> BitBoard {
        self.occ[Player::White as usize]
    }

    /// Returns the `BitBoard` of squares occupied by the black player.
    #[inline(always)]
    pub fn occupied_black(&self) -> BitBoard {
        self.occ[Player::Black as usize]
    }

    /// Returns the `BitBoard` of a single player's piece type.
    #[inline(always)]
    pub fn piece_bb(&self, player: Player, piece_type: PieceType) -> BitBoard {
        self.bbs[player as usize][piece_type as usize]
    }

    /// Returns the `BitBoard` of the queens and rooks of a given player.
    #[inline]
    pub fn sliding_piece_bb(&self, player: Player) -> BitBoard {
        self.bbs[player as usize][PieceType::R as usize]
            ^ self.bbs[player as usize][PieceType::Q as usize]
    }

    /// Returns the `BitBoard` of the queens and bishops of a given player.
    #[inline]
    pub fn diagonal_piece_bb(&self, player: Player) -> BitBoard {
        self.bbs[player as usize][PieceType::B as usize]
            ^ self.bbs[player as usize][PieceType::Q as usize]
    }

    /// Returns the combined `BitBoard` of both players for a given piece type.
    #[inline(always)]
    pub fn piece_bb_both_players(&self, piece_type: PieceType) -> BitBoard {
        self.bbs[Player::White as usize][piece_type as usize]
            ^ self.bbs[Player::Black as usize][piece_type as usize]
    }

    /// Returns the combined `BitBoard` of both players for two piece types.
    #[inline]
    pub fn piece_two_bb_both_players(&self, piece: PieceType, piece2: PieceType) -> BitBoard {
        self.piece_bb_both_players(piece) | self.piece_bb_both_players(piece2)
    }

    /// Returns the count of a given piece type for a given player.
    #[inline(always)]
    pub fn count_piece(&self, player: Player, piece_type: PieceType) -> u8 {
        self.piece_counts[player as usize][piece_type as usize]
    }

    /// Returns the total number of pieces on the board.
    #[inline]
    pub fn count_all_pieces(&self) -> u8 {
        self.occ_all.count_bits()
    }

    /// Returns the `Piece` at a square, `Piece::None` for an empty square.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the square is not on the board.
    #[inline]
    pub fn piece_at_sq(&self, sq: SQ) -> Piece {
        debug_assert!(sq.is_okay());
        self.piece_array[sq.0 as usize]
    }

    /// Returns the square of the king for a given player.
    #[inline(always)]
    pub fn king_sq(&self, player: Player) -> SQ {
        self.bbs[player as usize][PieceType::K as usize].to_sq()
    }

    /// Returns the pinned pieces of the given player, pinned to their own
    /// king.
    #[inline(always)]
    pub fn pinned_pieces(&self, player: Player) -> BitBoard {
        self.state.blockers_king[player as usize] & self.get_occupied_player(player)
    }

    /// Returns all pieces (of either color) blocking an attack on the given
    /// player's king.
    #[inline(always)]
    pub fn all_pinned_pieces(&self, player: Player) -> BitBoard {
        self.state.blockers_king[player as usize]
    }

    /// Returns the sliders pinning something against the given player's king.
    #[inline(always)]
    pub fn pinning_pieces(&self, player: Player) -> BitBoard {
        self.state.pinners_king[player as usize]
    }

    /// Returns the squares from which a piece of the given type would check
    /// the opposing king.
    #[inline(always)]
    pub fn check_sqs(&self, piece_type: PieceType) -> BitBoard {
        self.state.check_sqs[piece_type as usize]
    }

    /// Returns if a player retains the castling right for the given side.
    /// Does not imply a castle is playable this move.
    #[inline(always)]
    pub fn can_castle(&self, player: Player, castle_type: CastleType) -> bool {
        self.state.castling.castle_rights(player, castle_type)
    }

    /// Returns if the castling path of the current player is occupied.
    #[inline]
    pub fn castle_impeded(&self, castle_type: CastleType) -> bool {
        let path = BitBoard(CASTLING_PATH[self.turn as usize][castle_type as usize]);
        (path & self.occ_all).is_not_empty()
    }

    /// The rook square involved in the current player's castle of the given
    /// side.
    #[inline]
    pub fn castling_rook_square(&self, castle_type: CastleType) -> SQ {
        SQ(CASTLING_ROOK_START[self.turn as usize][castle_type as usize])
    }

    /// Returns the last move played, if any.
    #[inline(always)]
    pub fn last_move(&self) -> Option<BitMove> {
        if self.state.prev_move.is_null() {
            None
        } else {
            Some(self.state.prev_move)
        }
    }

    //  ------- CHECKING -------

    /// Returns if the current side to move is in check.
    #[inline(always)]
    pub fn in_check(&self) -> bool {
        self.state.checkers_bb.is_not_empty()
    }

    /// Returns if the current side to move is checkmated.
    pub fn checkmate(&self) -> bool {
        self.in_check() && self.generate_moves().is_empty()
    }

    /// Returns if the current side to move is stalemated.
    pub fn stalemate(&self) -> bool {
        !self.in_check() && (self.generate_moves().is_empty() || self.state.rule_50 >= 100)
    }

    /// Returns the `BitBoard` of pieces giving check to the current player's
    /// king.
    #[inline(always)]
    pub fn checkers(&self) -> BitBoard {
        self.state.checkers_bb
    }

    /// Returns the current player's pieces that can move to discover check
    /// on the opposing king.
    #[inline(always)]
    pub fn discovered_check_candidates(&self) -> BitBoard {
        self.state.blockers_king[(!self.turn) as usize] & self.get_occupied_player(self.turn)
    }

    /// Returns a `BitBoard` of all pieces (both players) attacking or
    /// defending a square, with a given occupancy.
    pub fn attackers_to(&self, sq: SQ, occupied: BitBoard) -> BitBoard {
        (pawn_attacks_from(sq, Player::Black) & self.piece_bb(Player::White, PieceType::P))
            | (pawn_attacks_from(sq, Player::White) & self.piece_bb(Player::Black, PieceType::P))
            | (knight_moves(sq) & self.piece_bb_both_players(PieceType::N))
            | (rook_moves(occupied, sq)
                & (self.sliding_piece_bb(Player::White) | self.sliding_piece_bb(Player::Black)))
            | (bishop_moves(occupied, sq)
                & (self.diagonal_piece_bb(Player::White) | self.diagonal_piece_bb(Player::Black)))
            | (king_moves(sq) & self.piece_bb_both_players(PieceType::K))
    }

    //  ------- MOVE TESTING -------

    /// Tests if a pseudo-legal move is legal, i.e. does not leave the
    /// mover's own king in check.
    ///
    /// # Safety
    ///
    /// The move must be pseudo-legal for the current position.
    pub fn legal_move(&self, m: BitMove) -> bool {
        if m.get_src() == m.get_dest() {
            return false;
        }
        let them: Player = !self.turn;
        let src: SQ = m.get_src();
        let src_bb: BitBoard = src.to_bb();
        let dst: SQ = m.get_dest();

        // En passant exposes two discovery lines at once; re-check from scratch.
        if m.move_type() == MoveType::EnPassant {
            let k_sq: SQ = self.king_sq(self.turn);
            let dst_bb: BitBoard = dst.to_bb();
            let captured_sq: SQ = SQ((dst.0 as i8).wrapping_sub(self.turn.pawn_push()) as u8);
            let occupied: BitBoard = (self.occupied() ^ src_bb ^ captured_sq.to_bb()) | dst_bb;

            return (rook_moves(occupied, k_sq) & self.sliding_piece_bb(them)).is_empty()
                && (bishop_moves(occupied, k_sq) & self.diagonal_piece_bb(them)).is_empty();
        }

        let piece = self.piece_at_sq(src);
        if piece == Piece::None {
            return false;
        }

        // King moves must not step into an attacked square; castles already
        // scanned their path during generation.
        if piece.type_of() == PieceType::K {
            return m.move_type() == MoveType::Castle
                || (self.attackers_to(dst, self.occupied() ^ src_bb)
                    & self.get_occupied_player(them))
                .is_empty();
        }

        // Otherwise the moved piece must not be pinned, or must stay on the
        // pin line.
        (self.pinned_pieces(self.turn) & src_bb).is_empty()
            || aligned(src, dst, self.king_sq(self.turn))
    }

    /// Tests if a move is pseudo-legal for the current position: the piece
    /// belongs to the side to move and obeys its movement rules, without
    /// testing for discovered check on the mover's own king.
    ///
    /// Used to vet moves from the transposition table or killer slots,
    /// which may come from a different position entirely.
    pub fn pseudo_legal_move(&self, m: BitMove) -> bool {
        if m.is_null() || m.incorrect_flag() || m.get_src() == m.get_dest() {
            return false;
        }
        let us = self.turn;
        let src: SQ = m.get_src();
        let dst: SQ = m.get_dest();

        let piece = self.piece_at_sq(src);
        if piece == Piece::None || piece.player_lossy() != us {
            return false;
        }
        let pt = piece.type_of();

        // Castles, promotions, and en passants have enough side conditions
        // that the move list is the simplest arbiter.
        if m.move_type() != MoveType::Normal {
            return self.generate_moves().iter().any(|gm| *gm == m);
        }

        let captured = self.piece_at_sq(dst);
        if m.is_capture() {
            if captured == Piece::None || captured.player_lossy() == us {
                return false;
            }
        } else if captured != Piece::None {
            return false;
        }

        if pt == PieceType::P {
            // Promotions carry the promotion flag, handled above.
            if dst.rank() == Rank::R8 || dst.rank() == Rank::R1 {
                return false;
            }
            let push = us.pawn_push() as i16;
            let delta = dst.0 as i16 - src.0 as i16;
            if m.is_capture() {
                if !pawn_attacks_from(src, us).contains(dst) {
                    return false;
                }
            } else if m.is_double_push() {
                let mid = SQ((src.0 as i16 + push) as u8);
                if us.relative_rank_of_sq(src) != Rank::R2
                    || delta != 2 * push
                    || self.occupied().contains(dst)
                    || self.occupied().contains(mid)
                {
                    return false;
                }
            } else if delta != push || self.occupied().contains(dst) {
                return false;
            }
        } else if !attacks_bb(pt, src, self.occupied()).contains(dst) {
            return false;
        }

        // While in check the move must resolve the check.
        if self.in_check() {
            if pt != PieceType::K {
                if self.checkers().more_than_one() {
                    return false;
                }
                let checker = self.checkers().bit_scan_forward();
                if !((between_bb(checker, self.king_sq(us)) | self.checkers()).contains(dst)) {
                    return false;
                }
            } else if (self.attackers_to(dst, self.occupied() ^ src.to_bb())
                & self.get_occupied_player(!us))
            .is_not_empty()
            {
                return false;
            }
        }

        true
    }

    /// Returns if a move gives check to the opposing player's king.
    ///
    /// # Safety
    ///
    /// The move must be at least pseudo-legal for the current position.
    pub fn gives_check(&self, m: BitMove) -> bool {
        let src: SQ = m.get_src();
        let dst: SQ = m.get_dest();
        let src_bb: BitBoard = src.to_bb();
        let dst_bb: BitBoard = dst.to_bb();
        let opp_king_sq: SQ = self.king_sq(!self.turn);

        debug_assert_ne!(src, dst);
        debug_assert_eq!(self.piece_at_sq(src).player_lossy(), self.turn);

        // Direct checks from the pre-computed check squares
        if (self.check_sqs(self.piece_at_sq(src).type_of()) & dst_bb).is_not_empty() {
            return true;
        }

        // Discovered checks: the piece blocks a sniper and leaves the line
        if (self.discovered_check_candidates() & src_bb).is_not_empty()
            && !aligned(src, dst, opp_king_sq)
        {
            return true;
        }

        match m.move_type() {
            MoveType::Normal => false,
            MoveType::Promotion => {
                // Does the promoted piece attack the king through the
                // vacated square?
                let attacks_bb = match m.promo_piece() {
                    PieceType::N => knight_moves(dst),
                    PieceType::B => bishop_moves(self.occupied() ^ src_bb, dst),
                    PieceType::R => rook_moves(self.occupied() ^ src_bb, dst),
                    _ => queen_moves(self.occupied() ^ src_bb, dst),
                };
                (attacks_bb & opp_king_sq.to_bb()).is_not_empty()
            }
            MoveType::EnPassant => {
                // Indirect check through the square of the captured pawn
                let captured_sq: SQ = SQ::make(dst.file(), src.rank());
                let b: BitBoard = (self.occupied() ^ src_bb ^ captured_sq.to_bb()) | dst_bb;

                ((rook_moves(b, opp_king_sq) & self.sliding_piece_bb(self.turn))
                    | (bishop_moves(b, opp_king_sq) & self.diagonal_piece_bb(self.turn)))
                .is_not_empty()
            }
            MoveType::Castle => {
                // Does the castled rook attack the king?
                let k_from: SQ = src;
                let r_from: SQ = dst;

                let k_to: SQ = self.turn.relative_square(if r_from > k_from {
                    SQ::G1
                } else {
                    SQ::C1
                });
                let r_to: SQ = self.turn.relative_square(if r_from > k_from {
                    SQ::F1
                } else {
                    SQ::D1
                });

                let opp_k_bb = opp_king_sq.to_bb();
                (rook_moves(BitBoard(0), r_to) & opp_k_bb).is_not_empty()
                    && (rook_moves(
                        r_to.to_bb()
                            | k_to.to_bb()
                            | (self.occupied() ^ k_from.to_bb() ^ r_from.to_bb()),
                        r_to,
                    ) & opp_k_bb)
                        .is_not_empty()
            }
        }
    }

    /// Returns the piece moved by the given move.
    ///
    /// # Safety
    ///
    /// The move must be at least pseudo-legal for the current position.
    #[inline]
    pub fn moved_piece(&self, m: BitMove) -> Piece {
        self.piece_at_sq(m.get_src())
    }

    /// Returns the piece type captured by the given move, if any.
    ///
    /// # Safety
    ///
    /// The move must be at least pseudo-legal for the current position.
    #[inline]
    pub fn captured_piece(&self, m: BitMove) -> PieceType {
        if m.is_en_passant() {
            return PieceType::P;
        }
        self.piece_at_sq(m.get_dest()).type_of()
    }

    /// Returns if a move is a capture (including en passant).
    #[inline]
    pub fn is_capture(&self, m: BitMove) -> bool {
        m.is_capture()
    }

    /// Static exchange evaluation: returns if the swap sequence started by
    /// the move nets at least `threshold` material.
    ///
    /// Castles, promotions, and en passants are approximated as an even
    /// exchange.
    pub fn see_ge(&self, m: BitMove, threshold: Value) -> bool {
        if m.move_type() != MoveType::Normal {
            return 0 >= threshold;
        }

        let src: SQ = m.get_src();
        let dst: SQ = m.get_dest();

        let mut swap: Value = piecetype_value_mg(self.piece_at_sq(dst).type_of()) - threshold;
        if swap < 0 {
            return false;
        }

        swap = piecetype_value_mg(self.piece_at_sq(src).type_of()) - swap;
        if swap <= 0 {
            return true;
        }

        let mut occupied: BitBoard = self.occupied() ^ src.to_bb() ^ dst.to_bb();
        let mut stm: Player = self.turn;
        let mut attackers: BitBoard = self.attackers_to(dst, occupied);
        let mut res: Value = 1;

        let queens = self.piece_bb_both_players(PieceType::Q);
        let diag = self.piece_bb_both_players(PieceType::B) | queens;
        let orth = self.piece_bb_both_players(PieceType::R) | queens;

        loop {
            stm = !stm;
            attackers &= occupied;

            let stm_attackers: BitBoard = attackers & self.get_occupied_player(stm);
            if stm_attackers.is_empty() {
                break;
            }

            res ^= 1;

            // Capture with the least valuable attacker, re-adding x-ray
            // attackers uncovered behind it.
            let mut bb: BitBoard = stm_attackers & self.piece_bb(stm, PieceType::P);
            if bb.is_not_empty() {
                swap = piecetype_value_mg(PieceType::P) - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb();
                attackers |= bishop_moves(occupied, dst) & diag;
                continue;
            }
            bb = stm_attackers & self.piece_bb(stm, PieceType::N);
            if bb.is_not_empty() {
                swap = piecetype_value_mg(PieceType::N) - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb();
                continue;
            }
            bb = stm_attackers & self.piece_bb(stm, PieceType::B);
            if bb.is_not_empty() {
                swap = piecetype_value_mg(PieceType::B) - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb();
                attackers |= bishop_moves(occupied, dst) & diag;
                continue;
            }
            bb = stm_attackers & self.piece_bb(stm, PieceType::R);
            if bb.is_not_empty() {
                swap = piecetype_value_mg(PieceType::R) - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb();
                attackers |= rook_moves(occupied, dst) & orth;
                continue;
            }
            bb = stm_attackers & self.piece_bb(stm, PieceType::Q);
            if bb.is_not_empty() {
                swap = piecetype_value_mg(PieceType::Q) - swap;
                if swap < res {
                    break;
                }
                occupied ^= bb.lsb();
                attackers |= (bishop_moves(occupied, dst) & diag)
                    | (rook_moves(occupied, dst) & orth);
                continue;
            }
            // King: if the opponent still has defenders the king capture is
            // illegal and the previous side wins the exchange.
            return if (attackers & !self.get_occupied_player(stm)).is_not_empty() {
                res == 0
            } else {
                res != 0
            };
        }
        res != 0
    }

    /// Returns a prettified String of the current board, for command-line
    /// display. Capital letters are white pieces, lowercase black.
    pub fn pretty_string(&self) -> String {
        let mut s = String::with_capacity(SQ_CNT * 2 + 8);
        for sq in SQ_DISPLAY_ORDER.iter() {
            s.push(self.piece_array[*sq as usize].character().unwrap_or('-'));
            s.push(' ');
            if sq % 8 == 7 {
                s.push('\n');
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pos_counts() {
        let b = Board::start_pos();
        assert_eq!(b.count_all_pieces(), 32);
        assert_eq!(b.count_piece(Player::White, PieceType::P), 8);
        assert_eq!(b.turn(), Player::White);
        assert!(!b.in_check());
        assert_eq!(b.king_sq(Player::White), SQ::E1);
        assert_eq!(b.get_fen(), START_FEN);
    }

    #[test]
    fn key_changes_and_restores() {
        let mut b = Board::start_pos();
        let key = b.key();
        let mat = b.material_key();
        b.apply_uci_move("e2e4");
        assert_ne!(b.key(), key);
        assert_eq!(b.material_key(), mat);
        b.undo_move();
        assert_eq!(b.key(), key);
        assert_eq!(b.get_fen(), START_FEN);
    }

    #[test]
    fn captures_update_material_key() {
        let mut b = Board::start_pos();
        assert!(b.apply_uci_move("e2e4"));
        assert!(b.apply_uci_move("d7d5"));
        let mat = b.material_key();
        assert!(b.apply_uci_move("e4d5"));
        assert_ne!(b.material_key(), mat);
        b.undo_move();
        assert_eq!(b.material_key(), mat);
    }

    #[test]
    fn check_detection() {
        let b = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
        assert!(b.in_check());
        assert_eq!(b.checkers().count_bits(), 1);
        assert_eq!(b.checkers().to_sq(), SQ::H4);
    }

    #[test]
    fn gives_check_direct() {
        let b = Board::from_fen("4k3/8/8/8/8/8/4R3/4K3 b - - 0 1");
        // rook already gives check: black to move, any fen is fine for the test
        assert!(b.unwrap().in_check());

        let b2 = Board::from_fen("4k3/8/8/8/8/8/3R4/4K3 w - - 0 1").unwrap();
        let m = BitMove::make_quiet(SQ::D2, SQ::D8);
        assert!(b2.pseudo_legal_move(m));
        assert!(b2.gives_check(m));
        let quiet = BitMove::make_quiet(SQ::D2, SQ::C2);
        assert!(!b2.gives_check(quiet));
    }

    #[test]
    fn pseudo_legal_vets_foreign_moves() {
        let b = Board::start_pos();
        // A move from an empty square.
        assert!(!b.pseudo_legal_move(BitMove::make_quiet(SQ::E4, SQ::E5)));
        // A black move while white to play.
        assert!(!b.pseudo_legal_move(BitMove::make_quiet(SQ::E7, SQ::E5)));
        // Blocked rook slide.
        assert!(!b.pseudo_legal_move(BitMove::make_quiet(SQ::A1, SQ::A3)));
        // Legal knight jump.
        assert!(b.pseudo_legal_move(BitMove::make_quiet(SQ::G1, SQ::F3)));
        // Capture flag with nothing to capture.
        assert!(!b.pseudo_legal_move(BitMove::make_capture(SQ::G1, SQ::F3)));
    }

    #[test]
    fn see_ge_classifies_exchanges() {
        // Pawn takes defended pawn: loses material against a rook recapture.
        let b = Board::from_fen("1k1r4/pp6/8/3p4/4P3/8/PP6/1K6 w - - 0 1").unwrap();
        let m = BitMove::make_capture(SQ::E4, SQ::D5);
        assert!(b.see_ge(m, 0));
        // Winning a clean pawn is not worth a rook.
        assert!(!b.see_ge(m, 300));

        // Queen takes a defended pawn: loses the queen.
        let b2 = Board::from_fen("1k1r4/pp6/8/3p4/8/3Q4/PP6/1K6 w - - 0 1").unwrap();
        let qxp = BitMove::make_capture(SQ::D3, SQ::D5);
        assert!(!b2.see_ge(qxp, 0));
    }

    #[test]
    fn fen_round_trips() {
        for fen in fen::ALL_FENS.iter() {
            let b = Board::from_fen(fen).unwrap();
            assert_eq!(&b.get_fen(), fen, "fen mismatch");
        }
    }
}
