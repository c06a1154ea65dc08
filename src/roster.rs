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

use crate::{
    coord::{Coord, BOARD_SIZE},
    kind::Kind,
    piece::{Piece, PieceId, Status},
    side::Side,
};

const BACK_RANK: [Kind; 9] = [
    Kind::Lance,
    Kind::Knight,
    Kind::Silver,
    Kind::Gold,
    Kind::King,
    Kind::Gold,
    Kind::Silver,
    Kind::Knight,
    Kind::Lance,
];

/// All pieces of one side, on and off the board.
///
/// Pieces are never removed. A captured piece keeps its slot with
/// [`Status::Captured`], so a [`PieceId`] stays valid for the whole game.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    side: Side,
    pieces: Vec<Piece>,
}

impl Roster {
    pub fn new(side: Side) -> Roster {
        Roster {
            side,
            pieces: Vec::new(),
        }
    }

    /// The opening setup of `side`, followed by one promotion spare for
    /// every piece that can promote.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::{Kind, Roster, Side};
    ///
    /// let roster = Roster::standard(Side::Forward);
    /// assert_eq!(roster.in_play().count(), 20);
    /// assert!(roster.find_reserve(Kind::PromotedPawn).is_some());
    /// ```
    pub fn standard(side: Side) -> Roster {
        let mut roster = Roster::new(side);
        let at = |row: u8, col: u8| {
            let (row, col) = match side {
                Side::Forward => (row, col),
                Side::Backward => (BOARD_SIZE - 1 - row, BOARD_SIZE - 1 - col),
            };
            Coord::new(row, col).expect("setup rows are on the board")
        };

        for col in 0..BOARD_SIZE {
            roster.push(Kind::Pawn.at(side, at(6, col)));
        }
        roster.push(Kind::Bishop.at(side, at(7, 1)));
        roster.push(Kind::Rook.at(side, at(7, 7)));
        for (col, kind) in (0..).zip(BACK_RANK) {
            roster.push(kind.at(side, at(8, col)));
        }

        let unpromoted: Vec<Kind> = roster.pieces.iter().map(|piece| piece.kind).collect();
        for kind in unpromoted.into_iter().filter_map(Kind::promoted) {
            roster.push(kind.reserve(side));
        }
        roster
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Appends a piece and returns its id.
    pub fn push(&mut self, piece: Piece) -> PieceId {
        debug_assert_eq!(piece.side, self.side, "piece pushed to the wrong roster");
        self.pieces.push(piece);
        PieceId::new(self.side, self.pieces.len() - 1)
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        if id.side() == self.side {
            self.pieces.get(id.slot())
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        if id.side() == self.side {
            self.pieces.get_mut(id.slot())
        } else {
            None
        }
    }

    /// Number of pieces, including captured ones and spares.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterates over all pieces with their ids, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        let side = self.side;
        self.pieces
            .iter()
            .enumerate()
            .map(move |(slot, piece)| (PieceId::new(side, slot), piece))
    }

    /// Iterates over the pieces currently on the board.
    pub fn in_play(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.iter().filter(|(_, piece)| piece.is_in_play())
    }

    /// Finds an off-board spare of `kind` waiting for a promotion.
    pub fn find_reserve(&self, kind: Kind) -> Option<PieceId> {
        self.iter()
            .find(|(_, piece)| piece.kind == kind && piece.status == Status::ReserveForPromotion)
            .map(|(id, _)| id)
    }

    /// Tests if this side's king was taken and no other king is left in
    /// play.
    pub fn king_captured(&self) -> bool {
        self.find(Kind::King, |status| status == Status::Captured).is_some()
            && self.find(Kind::King, Status::is_in_play).is_none()
    }

    /// Finds the first piece of `kind` with the given status predicate.
    pub fn find<F>(&self, kind: Kind, mut predicate: F) -> Option<PieceId>
    where
        F: FnMut(Status) -> bool,
    {
        self.iter()
            .find(|(_, piece)| piece.kind == kind && predicate(piece.status))
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: u8, col: u8) -> Coord {
        Coord::new(row, col).expect("valid coord")
    }

    #[test]
    fn test_standard_layout() {
        let forward = Roster::standard(Side::Forward);
        let backward = Roster::standard(Side::Backward);

        let king = |roster: &Roster| {
            roster
                .find(Kind::King, Status::is_in_play)
                .and_then(|id| roster.get(id))
                .and_then(Piece::coord)
        };
        assert_eq!(king(&forward), Some(coord(8, 4)));
        assert_eq!(king(&backward), Some(coord(0, 4)));

        let bishop = |roster: &Roster| {
            roster
                .find(Kind::Bishop, Status::is_in_play)
                .and_then(|id| roster.get(id))
                .and_then(Piece::coord)
        };
        assert_eq!(bishop(&forward), Some(coord(7, 1)));
        assert_eq!(bishop(&backward), Some(coord(1, 7)));

        assert!(forward.in_play().all(|(_, p)| p.coord().map_or(false, |c| c.row() >= 6)));
        assert!(backward.in_play().all(|(_, p)| p.coord().map_or(false, |c| c.row() <= 2)));
    }

    #[test]
    fn test_standard_tiles_are_distinct() {
        for side in Side::ALL {
            let roster = Roster::standard(side);
            assert!(roster.iter().all(|(_, p)| p.status != Status::Captured));

            let mut tiles: Vec<Coord> = roster.in_play().filter_map(|(_, p)| p.coord()).collect();
            tiles.sort();
            tiles.dedup();
            assert_eq!(tiles.len(), 20);
        }
    }

    #[test]
    fn test_standard_spares() {
        let roster = Roster::standard(Side::Backward);
        let spares = |kind: Kind| {
            roster
                .iter()
                .filter(|(_, p)| p.kind == kind && p.status == Status::ReserveForPromotion)
                .count()
        };
        assert_eq!(spares(Kind::PromotedPawn), 9);
        assert_eq!(spares(Kind::PromotedLance), 2);
        assert_eq!(spares(Kind::PromotedKnight), 2);
        assert_eq!(spares(Kind::PromotedSilver), 2);
        assert_eq!(spares(Kind::Horse), 1);
        assert_eq!(spares(Kind::Dragon), 1);
        assert_eq!(roster.len(), 37);
    }

    #[test]
    fn test_get_checks_side() {
        let mut roster = Roster::new(Side::Forward);
        let id = roster.push(Kind::Gold.at(Side::Forward, coord(8, 3)));
        assert!(roster.get(id).is_some());
        assert!(roster.get(PieceId::new(Side::Backward, 0)).is_none());
        assert!(roster.get(PieceId::new(Side::Forward, 1)).is_none());
    }
}
