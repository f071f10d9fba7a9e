//! The `Castling` structure, tracking the castling rights still available
//! for each player.
//!
//! At its core a `Castling` is a u8 with one bit per possible right. A set
//! bit marks that castling is still a possibility, e.g. WHITE_Q means
//! neither the white king nor the white queen-side rook has moved since the
//! game started; it does not guarantee a castle is playable right now.

use crate::core::masks::*;
use crate::core::sq::SQ;
use crate::core::{CastleType, Player};

use bitflags::bitflags;
use std::fmt;

const ALL_CASTLING: u8 = 0b0000_1111;

bitflags! {
    /// Castling-right bits per player and side.
    pub struct Castling: u8 {
        const WHITE_K = C_WHITE_K_MASK;
        const WHITE_Q = C_WHITE_Q_MASK;
        const BLACK_K = C_BLACK_K_MASK;
        const BLACK_Q = C_BLACK_Q_MASK;
        const WHITE_ALL = Self::WHITE_K.bits | Self::WHITE_Q.bits;
        const BLACK_ALL = Self::BLACK_K.bits | Self::BLACK_Q.bits;
    }
}

impl Castling {
    #[doc(hidden)]
    #[inline]
    pub const fn all_castling() -> Self {
        Castling { bits: ALL_CASTLING }
    }

    #[doc(hidden)]
    #[inline]
    pub const fn empty_set() -> Self {
        Castling { bits: 0 }
    }

    /// Removes all castling possibility for a single player.
    #[inline]
    pub fn remove_player_castling(&mut self, player: Player) {
        match player {
            Player::White => self.bits &= Self::BLACK_ALL.bits,
            Player::Black => self.bits &= Self::WHITE_ALL.bits,
        }
    }

    /// Returns if a player has the right to castle on a given side.
    #[inline]
    pub fn castle_rights(self, player: Player, side: CastleType) -> bool {
        match player {
            Player::White => match side {
                CastleType::KingSide => self.contains(Self::WHITE_K),
                CastleType::QueenSide => self.contains(Self::WHITE_Q),
            },
            Player::Black => match side {
                CastleType::KingSide => self.contains(Self::BLACK_K),
                CastleType::QueenSide => self.contains(Self::BLACK_Q),
            },
        }
    }

    /// Returns if both players have lost the ability to castle.
    #[inline]
    pub fn no_castling(self) -> bool {
        self.bits == 0
    }

    /// Removes the rights touched by a move between the two squares,
    /// returning the bits that were removed.
    #[inline]
    pub fn update_castling(&mut self, to: SQ, from: SQ) -> u8 {
        let mask_change: u8 = to.castle_rights_mask() | from.castle_rights_mask();
        let removed: u8 = self.bits & mask_change;
        self.bits &= !mask_change;
        removed
    }

    /// Adds a castling right from a FEN character.
    ///
    /// ```md,ignore
    /// `K` -> White king-side.   `Q` -> White queen-side.
    /// `k` -> Black king-side.   `q` -> Black queen-side.
    /// `-` -> Nothing.
    /// ```
    pub fn add_castling_char(&mut self, c: char) -> bool {
        self.bits |= match c {
            'K' => Castling::WHITE_K.bits,
            'Q' => Castling::WHITE_Q.bits,
            'k' => Castling::BLACK_K.bits,
            'q' => Castling::BLACK_Q.bits,
            '-' => 0,
            _ => return false,
        };
        true
    }

    /// Returns the FEN string representation of the castling state,
    /// "-" when no rights remain.
    pub fn pretty_string(self) -> String {
        if self.no_castling() {
            "-".to_owned()
        } else {
            let mut s = String::default();
            if self.contains(Castling::WHITE_K) {
                s.push('K');
            }
            if self.contains(Castling::WHITE_Q) {
                s.push('Q');
            }
            if self.contains(Castling::BLACK_K) {
                s.push('k');
            }
            if self.contains(Castling::BLACK_Q) {
                s.push('q');
            }
            s
        }
    }
}

impl fmt::Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_move_removes_one_right() {
        let mut c = Castling::all_castling();
        let removed = c.update_castling(SQ::A3, SQ::A1);
        assert_eq!(removed, C_WHITE_Q_MASK);
        assert!(c.castle_rights(Player::White, CastleType::KingSide));
        assert!(!c.castle_rights(Player::White, CastleType::QueenSide));
    }

    #[test]
    fn king_move_removes_both() {
        let mut c = Castling::all_castling();
        c.update_castling(SQ::E2, SQ::E1);
        assert!(!c.castle_rights(Player::White, CastleType::KingSide));
        assert!(!c.castle_rights(Player::White, CastleType::QueenSide));
        assert!(c.castle_rights(Player::Black, CastleType::KingSide));
    }
}
