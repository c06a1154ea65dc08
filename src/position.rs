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

use std::fmt::{self, Write as _};

use log::{debug, warn};

use crate::{
    board::BoardGrid,
    coord::{Coord, BOARD_SIZE},
    errors::{PlayError, SelectionError, SetupError},
    geometry::BoardGeometry,
    movegen::{self, Destinations},
    piece::{Piece, PieceId, Status},
    roster::Roster,
    side::{BySide, Side},
};

/// How a game ended.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Outcome {
    /// The loser's king was taken.
    KingCaptured { winner: Side },
    /// The side to move has no piece that can move.
    NoMoves { winner: Side },
}

impl Outcome {
    pub const fn winner(self) -> Side {
        match self {
            Outcome::KingCaptured { winner } | Outcome::NoMoves { winner } => winner,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::KingCaptured { winner } => write!(f, "{} wins by capturing the king", winner),
            Outcome::NoMoves { winner } => write!(f, "{} wins, opponent cannot move", winner),
        }
    }
}

/// The game state: board grid, both rosters and the side to move.
///
/// Every core operation goes through an explicit `Position`. The grid's
/// occupancy and each piece's [`Status`] are kept in sync by the methods
/// that mutate them.
///
/// # Examples
///
/// ```
/// use shogiban::{Coord, Position};
///
/// let mut pos = Position::new();
/// let from = Coord::new(6, 2).expect("valid");
/// let to = Coord::new(5, 2).expect("valid");
///
/// assert_eq!(pos.legal_destinations(from)?.as_slice(), [to]);
/// assert_eq!(pos.play(from, to)?, None);
/// # Ok::<_, shogiban::PlayError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Position {
    grid: BoardGrid,
    rosters: BySide<Roster>,
    turn: Side,
}

impl Position {
    /// The standard opening position, forward side to move.
    pub fn new() -> Position {
        Position::from_rosters(BySide::new_with(Roster::standard), Side::Forward)
            .expect("standard setup has one piece per tile")
    }

    /// A position without any pieces.
    pub fn empty() -> Position {
        Position {
            grid: BoardGrid::new(),
            rosters: BySide::new_with(Roster::new),
            turn: Side::Forward,
        }
    }

    /// Builds a position from restored rosters, e.g. after loading a saved
    /// game. Occupancy is derived from each piece's status.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Occupied`] if two in-play pieces claim the
    /// same tile.
    pub fn from_rosters(rosters: BySide<Roster>, turn: Side) -> Result<Position, SetupError> {
        Position::with_geometry(rosters, turn, BoardGeometry::default())
    }

    /// Like [`Position::from_rosters()`], with a custom board layout.
    pub fn with_geometry(
        rosters: BySide<Roster>,
        turn: Side,
        geometry: BoardGeometry,
    ) -> Result<Position, SetupError> {
        let mut pos = Position {
            grid: BoardGrid::with_geometry(geometry),
            rosters,
            turn,
        };
        pos.resync()?;
        Ok(pos)
    }

    /// Rebuilds the grid and places the in-play pieces of both sides.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Occupied`] if two in-play pieces claim the
    /// same tile. The grid is then only partially populated.
    pub fn resync(&mut self) -> Result<(), SetupError> {
        self.grid.initialize();
        for roster in self.rosters.iter() {
            self.grid.place_pieces(roster)?;
        }
        Ok(())
    }

    /// Adds a piece to its side's roster and, if it is in play, to the
    /// grid.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Occupied`] if the piece is in play on a tile
    /// that is already taken. Nothing changes in that case.
    pub fn add_piece(&mut self, piece: Piece) -> Result<PieceId, SetupError> {
        if let Some(coord) = piece.coord() {
            if let Some(occupant) = self.grid.occupant(coord) {
                return Err(SetupError::Occupied { coord, occupant });
            }
        }
        let id = self.rosters.get_mut(piece.side).push(piece);
        if let Some(coord) = piece.coord() {
            self.grid.set_occupant(coord, id);
        }
        Ok(id)
    }

    #[inline]
    pub fn grid(&self) -> &BoardGrid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut BoardGrid {
        &mut self.grid
    }

    #[inline]
    pub fn roster(&self, side: Side) -> &Roster {
        self.rosters.get(side)
    }

    #[inline]
    pub fn rosters(&self) -> &BySide<Roster> {
        &self.rosters
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Side) {
        self.turn = turn;
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.rosters.get(id.side()).get(id)
    }

    fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.rosters.get_mut(id.side()).get_mut(id)
    }

    pub fn piece_at(&self, coord: Coord) -> Option<(PieceId, &Piece)> {
        let id = self.grid.occupant(coord)?;
        self.piece(id).map(|piece| (id, piece))
    }

    fn occupied(&self, coord: Coord) -> Result<(PieceId, Piece), SelectionError> {
        self.piece_at(coord)
            .map(|(id, piece)| (id, *piece))
            .ok_or(SelectionError::Unoccupied(coord))
    }

    /// Generates the destinations of the piece on `coord`, regardless of
    /// whose turn it is. The grid's markers are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Unoccupied`] if there is no piece on
    /// `coord`.
    pub fn legal_destinations(&self, coord: Coord) -> Result<Destinations, SelectionError> {
        let (_, piece) = self.occupied(coord)?;
        Ok(movegen::destinations(&self.grid, coord, &piece))
    }

    /// Selects the piece on `coord` for highlighting: clears old markers,
    /// marks the tile selected and its destinations possible.
    ///
    /// Afterwards [`BoardGrid::possible_destinations()`] lists the same
    /// tiles as the returned destinations.
    pub fn select(&mut self, coord: Coord) -> Result<Destinations, SelectionError> {
        self.deselect();
        let dests = self.legal_destinations(coord)?;
        self.grid.mark_selected(coord);
        self.grid.mark_possible(&dests);
        Ok(dests)
    }

    pub fn deselect(&mut self) {
        self.grid.clear_possible_marks();
        self.grid.clear_selection();
    }

    /// Tests if the piece on `coord` stands in its promotion zone.
    pub fn can_promote(&self, coord: Coord) -> Result<bool, SelectionError> {
        let (_, piece) = self.occupied(coord)?;
        Ok(movegen::can_promote(&piece))
    }

    /// Promotes the piece on `coord` by substituting an off-board spare of
    /// its promoted kind from the same roster.
    ///
    /// The spare takes over the tile and the original piece goes to the
    /// reserve. Returns the id of the spare, or `None` if the kind does not
    /// promote or no spare is left, in which case nothing changes. The
    /// promotion zone is not checked, see [`Position::can_promote()`].
    pub fn promote(&mut self, coord: Coord) -> Result<Option<PieceId>, SelectionError> {
        let (id, piece) = self.occupied(coord)?;

        let kind = match piece.kind.promoted() {
            Some(kind) => kind,
            None => {
                debug!("{} on {} does not promote", piece.kind, coord);
                return Ok(None);
            }
        };

        let spare = match self.roster(piece.side).find_reserve(kind) {
            Some(spare) => spare,
            None => {
                warn!("no {} spare left for {} on {}", kind, piece.side, coord);
                return Ok(None);
            }
        };

        if let Some(original) = self.piece_mut(id) {
            original.status = Status::ReserveForPromotion;
        }
        if let Some(promoted) = self.piece_mut(spare) {
            promoted.status = Status::InPlay(coord);
        }
        self.grid.set_occupant(coord, spare);

        debug!("{} {} on {} promoted to {}", piece.side, piece.kind, coord, kind);
        Ok(Some(spare))
    }

    /// Validates and plays a move of the side to move. Returns the id of
    /// the captured piece, if any.
    ///
    /// # Errors
    ///
    /// Fails without changing the position if `from` is empty, holds a
    /// piece of the other side, or `to` is not one of its destinations.
    pub fn play(&mut self, from: Coord, to: Coord) -> Result<Option<PieceId>, PlayError> {
        let (_, piece) = self.occupied(from)?;
        if piece.side != self.turn {
            return Err(PlayError::NotYourTurn { coord: from });
        }
        if !movegen::destinations(&self.grid, from, &piece).contains(&to) {
            return Err(PlayError::IllegalDestination { from, to });
        }
        Ok(self.play_unchecked(from, to))
    }

    /// Plays a move without validating it. Captures whatever stands on
    /// `to`, clears all markers and passes the turn. Does nothing if `from`
    /// is empty.
    pub fn play_unchecked(&mut self, from: Coord, to: Coord) -> Option<PieceId> {
        let id = self.grid.take_occupant(from)?;
        let captured = self.grid.set_occupant(to, id);

        if let Some(piece) = self.piece_mut(id) {
            piece.status = Status::InPlay(to);
        }
        if let Some(victim) = captured {
            if let Some(piece) = self.piece_mut(victim) {
                piece.status = Status::Captured;
            }
            debug!("{} captured {} on {}", id, victim, to);
        }
        debug!("{} moved {} -> {}", id, from, to);

        self.deselect();
        self.turn = !self.turn;
        captured
    }

    /// All moves of the side to move, as `(from, to)` pairs.
    pub fn legal_moves(&self) -> Vec<(Coord, Coord)> {
        let mut moves = Vec::new();
        for (_, piece) in self.roster(self.turn).in_play() {
            if let Some(from) = piece.coord() {
                moves.extend(
                    movegen::destinations(&self.grid, from, piece)
                        .into_iter()
                        .map(|to| (from, to)),
                );
            }
        }
        moves
    }

    /// Tests if the side to move has no piece with a destination.
    ///
    /// King safety is not evaluated: moves into or through check count as
    /// moves.
    pub fn is_checkmate(&self) -> bool {
        !self.roster(self.turn).in_play().any(|(_, piece)| {
            piece.coord().map_or(false, |from| {
                !movegen::destinations(&self.grid, from, piece).is_empty()
            })
        })
    }

    /// Decides the game: a captured king loses first, then a side to move
    /// without moves.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(loser) = self.rosters.find(Roster::king_captured) {
            Some(Outcome::KingCaptured { winner: !loser })
        } else if self.is_checkmate() {
            Some(Outcome::NoMoves { winner: !self.turn })
        } else {
            None
        }
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

/// Board diagram, row 0 first. Forward pieces are uppercase, backward
/// pieces lowercase and promoted kinds carry a `+`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    f.write_char(' ')?;
                }
                match Coord::new(row, col).and_then(|coord| self.piece_at(coord)) {
                    Some((_, piece)) => {
                        if piece.kind.is_promoted() {
                            f.write_char('+')?;
                        }
                        let ch = piece.kind.char();
                        f.write_char(piece.side.fold(ch.to_ascii_uppercase(), ch))?;
                    }
                    None => f.write_char('.')?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;

    fn coord(row: u8, col: u8) -> Coord {
        Coord::new(row, col).expect("valid coord")
    }

    #[test]
    fn test_standard_diagram() {
        let pos = Position::new();
        let diagram = pos.to_string();
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines[0], "l n s g k g s n l");
        assert_eq!(lines[1], ". r . . . . . b .");
        assert_eq!(lines[2], "p p p p p p p p p");
        assert_eq!(lines[6], "P P P P P P P P P");
        assert_eq!(lines[7], ". B . . . . . R .");
        assert_eq!(lines[8], "L N S G K G S N L");
    }

    #[test]
    fn test_play_updates_status_and_turn() {
        let mut pos = Position::new();
        let from = coord(6, 4);
        let to = coord(5, 4);
        let (id, _) = pos.piece_at(from).expect("pawn");

        assert_eq!(pos.play(from, to), Ok(None));
        assert_eq!(pos.turn(), Side::Backward);
        assert_eq!(pos.piece(id).map(|p| p.status), Some(Status::InPlay(to)));
        assert!(!pos.grid().is_occupied(from));
        assert_eq!(pos.grid().occupant(to), Some(id));
    }

    #[test]
    fn test_play_rejects() {
        let mut pos = Position::new();
        assert_eq!(
            pos.play(coord(4, 4), coord(3, 4)),
            Err(PlayError::Selection(SelectionError::Unoccupied(coord(4, 4))))
        );
        assert_eq!(
            pos.play(coord(2, 4), coord(3, 4)),
            Err(PlayError::NotYourTurn { coord: coord(2, 4) })
        );
        assert_eq!(
            pos.play(coord(6, 4), coord(4, 4)),
            Err(PlayError::IllegalDestination { from: coord(6, 4), to: coord(4, 4) })
        );
        assert_eq!(pos.turn(), Side::Forward);
    }

    #[test]
    fn test_select_marks_and_play_clears() {
        let mut pos = Position::new();
        let dests = pos.select(coord(7, 7)).expect("rook");
        let marked: Vec<Coord> = pos.grid().possible_destinations().iter().map(|t| t.coord()).collect();
        let mut expected = dests.to_vec();
        expected.sort();
        assert_eq!(marked, expected);
        assert!(pos.grid().tile(coord(7, 7)).is_selected());

        pos.play(coord(7, 7), coord(7, 8)).expect("legal");
        assert!(pos.grid().possible_destinations().is_empty());
        assert!(pos.grid().tiles().iter().all(|t| !t.is_selected()));
    }

    #[test]
    fn test_select_empty_tile_keeps_nothing_marked() {
        let mut pos = Position::new();
        pos.select(coord(6, 0)).expect("pawn");
        assert_eq!(
            pos.select(coord(4, 4)),
            Err(SelectionError::Unoccupied(coord(4, 4)))
        );
        assert!(pos.grid().possible_destinations().is_empty());
    }

    #[test]
    fn test_king_capture_outcome() {
        let mut pos = Position::empty();
        pos.add_piece(Kind::King.at(Side::Backward, coord(0, 4))).expect("free tile");
        pos.add_piece(Kind::Rook.at(Side::Forward, coord(8, 4))).expect("free tile");
        pos.add_piece(Kind::King.at(Side::Forward, coord(8, 0))).expect("free tile");
        assert_eq!(pos.outcome(), None);

        let captured = pos.play(coord(8, 4), coord(0, 4)).expect("capture");
        assert!(captured.is_some());
        assert_eq!(pos.outcome(), Some(Outcome::KingCaptured { winner: Side::Forward }));
    }

    #[test]
    fn test_no_moves_outcome() {
        let mut pos = Position::empty();
        // A backward pawn on the last row cannot move.
        pos.add_piece(Kind::Pawn.at(Side::Backward, coord(8, 0))).expect("free tile");
        pos.add_piece(Kind::King.at(Side::Forward, coord(8, 8))).expect("free tile");
        pos.set_turn(Side::Backward);

        assert!(pos.is_checkmate());
        assert!(pos.legal_moves().is_empty());
        assert_eq!(pos.outcome().map(Outcome::winner), Some(Side::Forward));
    }

    #[test]
    fn test_resync_matches_incremental_state() {
        let mut pos = Position::new();
        pos.play(coord(6, 2), coord(5, 2)).expect("legal");
        pos.play(coord(2, 6), coord(3, 6)).expect("legal");

        let restored =
            Position::from_rosters(pos.rosters().clone(), pos.turn()).expect("valid rosters");
        assert_eq!(restored.grid().tiles(), pos.grid().tiles());
        assert_eq!(restored.to_string(), pos.to_string());
    }
}
