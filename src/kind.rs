// This file is part of the shogiban library.
// Copyright (C) 2022 The shogiban developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{fmt, num, str::FromStr};

use crate::{
    coord::Coord,
    errors::ParseKindError,
    piece::{Piece, Status},
    ranges::{Ranges, UNLIMITED},
    side::Side,
    util::overflow_error,
};

const U: u8 = UNLIMITED;

const GOLD: Ranges = Ranges::new([1, 1, 1, 1, 1, 0, 1, 0]);

/// Piece kinds, each unpromoted kind followed by the promoted forms.
///
/// # Examples
///
/// ```
/// use shogiban::Kind;
///
/// // Piece kinds are indexed from 1 to 14.
/// assert_eq!(u32::from(Kind::Pawn), 1);
/// assert_eq!(u32::from(Kind::Dragon), 14);
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Pawn = 1,
    Lance = 2,
    Knight = 3,
    Silver = 4,
    Gold = 5,
    Bishop = 6,
    Rook = 7,
    King = 8,
    PromotedPawn = 9,
    PromotedLance = 10,
    PromotedKnight = 11,
    PromotedSilver = 12,
    Horse = 13,
    Dragon = 14,
}

impl Kind {
    /// Range vector, ordered as in [`Direction`](crate::Direction).
    ///
    /// The knight has no range vector. It jumps, see [`Kind::is_jumper()`].
    pub const fn ranges(self) -> Ranges {
        match self {
            Kind::Pawn => Ranges::new([0, 1, 0, 0, 0, 0, 0, 0]),
            Kind::Lance => Ranges::new([0, U, 0, 0, 0, 0, 0, 0]),
            Kind::Knight => Ranges::NONE,
            Kind::Silver => Ranges::new([1, 1, 1, 0, 0, 1, 0, 1]),
            Kind::Gold
            | Kind::PromotedPawn
            | Kind::PromotedLance
            | Kind::PromotedKnight
            | Kind::PromotedSilver => GOLD,
            Kind::Bishop => Ranges::new([U, 0, U, 0, 0, U, 0, U]),
            Kind::Rook => Ranges::new([0, U, 0, U, U, 0, U, 0]),
            Kind::King => Ranges::new([1; 8]),
            Kind::Horse => Ranges::new([U, 1, U, 1, 1, U, 1, U]),
            Kind::Dragon => Ranges::new([1, U, 1, U, U, 1, U, 1]),
        }
    }

    /// Whether the kind jumps two rows forward and one column aside instead
    /// of walking its range vector.
    #[inline]
    pub const fn is_jumper(self) -> bool {
        matches!(self, Kind::Knight)
    }

    /// Gets the promoted form.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::Kind;
    ///
    /// assert_eq!(Kind::Pawn.promoted(), Some(Kind::PromotedPawn));
    /// assert_eq!(Kind::Rook.promoted(), Some(Kind::Dragon));
    /// assert_eq!(Kind::Gold.promoted(), None);
    /// assert_eq!(Kind::Dragon.promoted(), None);
    /// ```
    pub const fn promoted(self) -> Option<Kind> {
        Some(match self {
            Kind::Pawn => Kind::PromotedPawn,
            Kind::Lance => Kind::PromotedLance,
            Kind::Knight => Kind::PromotedKnight,
            Kind::Silver => Kind::PromotedSilver,
            Kind::Bishop => Kind::Horse,
            Kind::Rook => Kind::Dragon,
            _ => return None,
        })
    }

    /// Gets the unpromoted form of a promoted kind.
    pub const fn unpromoted(self) -> Option<Kind> {
        Some(match self {
            Kind::PromotedPawn => Kind::Pawn,
            Kind::PromotedLance => Kind::Lance,
            Kind::PromotedKnight => Kind::Knight,
            Kind::PromotedSilver => Kind::Silver,
            Kind::Horse => Kind::Bishop,
            Kind::Dragon => Kind::Rook,
            _ => return None,
        })
    }

    #[inline]
    pub const fn is_promoted(self) -> bool {
        self.unpromoted().is_some()
    }

    /// Gets an in-play [`Piece`] of the given side at `coord`, with this
    /// kind's range vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::{Coord, Kind, Side, Status};
    ///
    /// let coord = Coord::new(6, 0).expect("valid");
    /// let pawn = Kind::Pawn.at(Side::Forward, coord);
    /// assert_eq!(pawn.status, Status::InPlay(coord));
    /// ```
    #[inline]
    pub const fn at(self, side: Side, coord: Coord) -> Piece {
        Piece::new(self, side, Status::InPlay(coord))
    }

    /// Gets an off-board [`Piece`] of the given side that waits to replace a
    /// piece on promotion.
    #[inline]
    pub const fn reserve(self, side: Side) -> Piece {
        Piece::new(self, side, Status::ReserveForPromotion)
    }

    /// Gets the lowercase SFEN letter. Promoted kinds share the letter of
    /// their unpromoted form.
    pub const fn char(self) -> char {
        match self {
            Kind::Pawn | Kind::PromotedPawn => 'p',
            Kind::Lance | Kind::PromotedLance => 'l',
            Kind::Knight | Kind::PromotedKnight => 'n',
            Kind::Silver | Kind::PromotedSilver => 's',
            Kind::Gold => 'g',
            Kind::Bishop | Kind::Horse => 'b',
            Kind::Rook | Kind::Dragon => 'r',
            Kind::King => 'k',
        }
    }

    pub const fn from_char(ch: char) -> Option<Kind> {
        match ch {
            'P' | 'p' => Some(Kind::Pawn),
            'L' | 'l' => Some(Kind::Lance),
            'N' | 'n' => Some(Kind::Knight),
            'S' | 's' => Some(Kind::Silver),
            'G' | 'g' => Some(Kind::Gold),
            'B' | 'b' => Some(Kind::Bishop),
            'R' | 'r' => Some(Kind::Rook),
            'K' | 'k' => Some(Kind::King),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Kind::Pawn => "pawn",
            Kind::Lance => "lance",
            Kind::Knight => "knight",
            Kind::Silver => "silver",
            Kind::Gold => "gold",
            Kind::Bishop => "bishop",
            Kind::Rook => "rook",
            Kind::King => "king",
            Kind::PromotedPawn => "promoted_pawn",
            Kind::PromotedLance => "promoted_lance",
            Kind::PromotedKnight => "promoted_knight",
            Kind::PromotedSilver => "promoted_silver",
            Kind::Horse => "horse",
            Kind::Dragon => "dragon",
        }
    }

    pub const ALL: [Kind; 14] = [
        Kind::Pawn,
        Kind::Lance,
        Kind::Knight,
        Kind::Silver,
        Kind::Gold,
        Kind::Bishop,
        Kind::Rook,
        Kind::King,
        Kind::PromotedPawn,
        Kind::PromotedLance,
        Kind::PromotedKnight,
        Kind::PromotedSilver,
        Kind::Horse,
        Kind::Dragon,
    ];
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Kind, ParseKindError> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or(ParseKindError)
    }
}

macro_rules! int_from_kind_impl {
    ($($t:ty)+) => {
        $(impl From<Kind> for $t {
            #[inline]
            fn from(kind: Kind) -> $t {
                kind as $t
            }
        })+
    }
}

int_from_kind_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

macro_rules! try_kind_from_int_impl {
    ($($t:ty)+) => {
        $(impl core::convert::TryFrom<$t> for Kind {
            type Error = num::TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<Kind, Self::Error> {
                usize::try_from(value)
                    .ok()
                    .and_then(|index| index.checked_sub(1))
                    .and_then(|index| Kind::ALL.get(index).copied())
                    .ok_or_else(overflow_error)
            }
        })+
    }
}

try_kind_from_int_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
