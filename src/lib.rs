//! Search-support core for a UCI chess engine.
//!
//! This crate contains the subsystems that make alpha-beta search correct
//! and fast:
//!
//! * bitboard primitives and magic-bitboard attack tables ([`core`],
//!   [`helper`]),
//! * a position with move generation, legality testing, and static
//!   exchange evaluation ([`board`]),
//! * the KPK endgame bitbase ([`bitbase`]),
//! * the upcoming-repetition cuckoo table ([`cuckoo`]),
//! * the lock-free transposition table ([`tt`]),
//! * history tables and the staged move picker ([`tables`], [`movepick`]).
//!
//! The UCI front-end, the search algorithm itself, evaluation, and time
//! management live elsewhere; this crate exposes the interfaces they build
//! on.
//!
//! # Example
//!
//! ```
//! use sable::{Board, init_statics};
//!
//! init_statics();
//! let board = Board::start_pos();
//! assert_eq!(board.generate_moves().len(), 20);
//! ```

pub mod bitbase;
pub mod board;
pub mod core;
pub mod cuckoo;
pub mod helper;
pub mod movepick;
pub mod tables;
pub mod tools;
pub mod tt;

pub use crate::board::{Board, FenBuildError};
pub use crate::core::bitboard::BitBoard;
pub use crate::core::piece_move::{BitMove, ScoringMove};
pub use crate::core::sq::SQ;
pub use crate::core::{CastleType, File, GenTypes, Piece, PieceType, Player, Rank};
pub use crate::helper::prelude::init_statics;
pub use crate::movepick::MovePicker;
pub use crate::tt::TranspositionTable;
