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

use std::fmt;

use crate::{coord::Coord, kind::Kind, ranges::Ranges, side::Side};

/// Where a piece currently is.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// On the board at the given tile.
    InPlay(Coord),
    /// Taken by the opponent. Captured pieces do not return to play.
    Captured,
    /// Off the board, waiting to be substituted for a piece of its
    /// unpromoted kind when that piece promotes.
    ReserveForPromotion,
}

impl Status {
    #[inline]
    pub const fn coord(self) -> Option<Coord> {
        match self {
            Status::InPlay(coord) => Some(coord),
            Status::Captured | Status::ReserveForPromotion => None,
        }
    }

    #[inline]
    pub const fn is_in_play(self) -> bool {
        matches!(self, Status::InPlay(_))
    }
}

/// A piece with [`Kind`], [`Side`], range vector and [`Status`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: Kind,
    pub side: Side,
    pub ranges: Ranges,
    pub status: Status,
}

impl Piece {
    /// A piece with the range vector of its kind.
    #[inline]
    pub const fn new(kind: Kind, side: Side, status: Status) -> Piece {
        Piece {
            kind,
            side,
            ranges: kind.ranges(),
            status,
        }
    }

    /// Replaces the range vector, e.g. for custom pieces in tests and
    /// puzzles.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::{Coord, Kind, Ranges, Side};
    ///
    /// let coord = Coord::new(4, 4).expect("center");
    /// let stepper = Kind::Gold.at(Side::Forward, coord).with_ranges(Ranges::new([1; 8]));
    /// assert_eq!(stepper.ranges, Kind::King.ranges());
    /// ```
    #[inline]
    pub const fn with_ranges(mut self, ranges: Ranges) -> Piece {
        self.ranges = ranges;
        self
    }

    #[inline]
    pub const fn coord(&self) -> Option<Coord> {
        self.status.coord()
    }

    #[inline]
    pub const fn is_in_play(&self) -> bool {
        self.status.is_in_play()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)?;
        match self.status {
            Status::InPlay(coord) => write!(f, " at {}", coord),
            Status::Captured => f.write_str(" (captured)"),
            Status::ReserveForPromotion => f.write_str(" (reserve)"),
        }
    }
}

/// Identifies a piece by its side and its slot in that side's
/// [`Roster`](crate::Roster).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId {
    side: Side,
    slot: usize,
}

impl PieceId {
    #[inline]
    pub(crate) const fn new(side: Side, slot: usize) -> PieceId {
        PieceId { side, slot }
    }

    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    #[inline]
    pub const fn slot(self) -> usize {
        self.slot
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.side, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        let coord = Coord::new(2, 3).expect("valid");
        assert_eq!(Status::InPlay(coord).coord(), Some(coord));
        assert_eq!(Status::Captured.coord(), None);
        assert!(!Status::ReserveForPromotion.is_in_play());
    }

    #[test]
    fn test_display() {
        let coord = Coord::new(2, 3).expect("valid");
        assert_eq!(
            Kind::Silver.at(Side::Backward, coord).to_string(),
            "backward silver at 2,3"
        );
        assert_eq!(
            Kind::PromotedPawn.reserve(Side::Forward).to_string(),
            "forward promoted_pawn (reserve)"
        );
        assert_eq!(PieceId::new(Side::Forward, 7).to_string(), "forward#7");
    }

    #[test]
    fn test_piece_id_order() {
        let mut ids = vec![
            PieceId::new(Side::Backward, 0),
            PieceId::new(Side::Forward, 3),
            PieceId::new(Side::Forward, 1),
        ];
        ids.sort();
        assert_eq!(
            ids,
            [
                PieceId::new(Side::Forward, 1),
                PieceId::new(Side::Forward, 3),
                PieceId::new(Side::Backward, 0),
            ]
        );
    }
}
