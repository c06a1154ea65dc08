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

//! The 81 tiles of the board and their occupancy.

use std::fmt::{self, Write as _};

use bitflags::bitflags;

use crate::{
    coord::{Coord, BOARD_SIZE},
    errors::SetupError,
    geometry::{BoardGeometry, Rect},
    piece::PieceId,
    roster::Roster,
    side::Side,
};

bitflags! {
    /// Transient per-tile markers for selection highlighting.
    #[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
    pub struct TileMarks: u8 {
        /// The selected piece may move here.
        const POSSIBLE = 1;
        /// The tile of the selected piece.
        const SELECTED = 1 << 1;
    }
}

/// One cell of the board.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Tile {
    coord: Coord,
    occupant: Option<PieceId>,
    marks: TileMarks,
    rect: Rect,
}

impl Tile {
    /// The fixed position of this tile. Row and column are shortcuts.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn row(&self) -> u8 {
        self.coord.row()
    }

    #[inline]
    pub fn col(&self) -> u8 {
        self.coord.col()
    }

    /// Flat index `row * 9 + col`, the position in [`BoardGrid::tiles()`].
    #[inline]
    pub fn index(&self) -> usize {
        self.coord.index()
    }

    /// The piece standing here. Its status is always `InPlay` at this
    /// tile.
    #[inline]
    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    #[inline]
    pub fn marks(&self) -> TileMarks {
        self.marks
    }

    #[inline]
    pub fn is_possible(&self) -> bool {
        self.marks.contains(TileMarks::POSSIBLE)
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.marks.contains(TileMarks::SELECTED)
    }

    /// Screen rectangle, for renderers.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Owns the tiles of the board.
///
/// The grid knows which [`PieceId`] sits on each tile, but nothing about
/// how pieces move.
///
/// # Examples
///
/// ```
/// use shogiban::BoardGrid;
///
/// let grid = BoardGrid::new();
/// let tile = grid.tile_at(4, 4).expect("center");
/// assert_eq!(tile.index(), 40);
/// assert!(!tile.is_occupied());
/// assert!(grid.tile_at(-1, 4).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct BoardGrid {
    tiles: Vec<Tile>,
    geometry: BoardGeometry,
}

impl BoardGrid {
    pub fn new() -> BoardGrid {
        BoardGrid::with_geometry(BoardGeometry::default())
    }

    pub fn with_geometry(geometry: BoardGeometry) -> BoardGrid {
        let mut grid = BoardGrid {
            tiles: Vec::new(),
            geometry,
        };
        grid.initialize();
        grid
    }

    /// Rebuilds all tiles: unoccupied, unmarked, with fresh rectangles.
    pub fn initialize(&mut self) {
        self.tiles.clear();
        self.tiles.extend(Coord::all().map(|coord| Tile {
            coord,
            occupant: None,
            marks: TileMarks::empty(),
            rect: self.geometry.rect(coord),
        }));
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Occupies the tile of every in-play piece in the roster. Pieces off
    /// the board are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Occupied`] when a piece claims a tile that is
    /// already taken, by this roster or by one placed earlier. Pieces
    /// before the conflicting one stay placed.
    pub fn place_pieces(&mut self, roster: &Roster) -> Result<(), SetupError> {
        for (id, piece) in roster.iter() {
            if let Some(coord) = piece.coord() {
                let tile = &mut self.tiles[coord.index()];
                if let Some(occupant) = tile.occupant {
                    return Err(SetupError::Occupied { coord, occupant });
                }
                tile.occupant = Some(id);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn tile(&self, coord: Coord) -> &Tile {
        &self.tiles[coord.index()]
    }

    /// Gets the tile at a row and column, or `None` if that is off the
    /// board.
    pub fn tile_at(&self, row: i32, col: i32) -> Option<&Tile> {
        Coord::from_signed(row, col).map(|coord| self.tile(coord))
    }

    /// Gets the tile with the given flat index, or `None` past the last
    /// tile.
    pub fn tile_by_index(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Gets the tile under a screen point.
    ///
    /// Each tile rectangle is grown by the configured touch tolerance to
    /// absorb grid lines. A point on a grid line wider than twice the
    /// tolerance hits no tile, and neither does a point off the board.
    /// Callers treat `None` as "nothing selected".
    pub fn tile_at_point(&self, x: f32, y: f32) -> Option<&Tile> {
        let tolerance = self.geometry.touch_tolerance;
        self.tiles.iter().find(|tile| tile.rect.contains(x, y, tolerance))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn occupant(&self, coord: Coord) -> Option<PieceId> {
        self.tile(coord).occupant
    }

    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.tile(coord).is_occupied()
    }

    #[inline]
    /// Side of the piece on the tile, if any.
    pub fn side_at(&self, coord: Coord) -> Option<Side> {
        self.occupant(coord).map(PieceId::side)
    }

    /// Puts `id` on the tile and returns the previous occupant.
    pub fn set_occupant(&mut self, coord: Coord, id: PieceId) -> Option<PieceId> {
        self.tiles[coord.index()].occupant.replace(id)
    }

    /// Empties the tile and returns the previous occupant.
    pub fn take_occupant(&mut self, coord: Coord) -> Option<PieceId> {
        self.tiles[coord.index()].occupant.take()
    }

    /// Resets every tile's possible-destination marker. Call before marking
    /// a new selection to avoid stale markers.
    pub fn clear_possible_marks(&mut self) {
        for tile in &mut self.tiles {
            tile.marks.remove(TileMarks::POSSIBLE);
        }
    }

    pub fn mark_possible(&mut self, coords: &[Coord]) {
        for coord in coords {
            self.tiles[coord.index()].marks.insert(TileMarks::POSSIBLE);
        }
    }

    pub fn clear_selection(&mut self) {
        for tile in &mut self.tiles {
            tile.marks.remove(TileMarks::SELECTED);
        }
    }

    pub fn mark_selected(&mut self, coord: Coord) {
        self.tiles[coord.index()].marks.insert(TileMarks::SELECTED);
    }

    /// All tiles currently marked possible, in index order.
    pub fn possible_destinations(&self) -> Vec<&Tile> {
        self.tiles.iter().filter(|tile| tile.is_possible()).collect()
    }
}

impl Default for BoardGrid {
    fn default() -> BoardGrid {
        BoardGrid::new()
    }
}

/// Occupancy diagram: `f` and `b` for forward and backward pieces, `*` for
/// empty tiles marked possible, `.` otherwise. Row 0 comes first.
impl fmt::Display for BoardGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(usize::from(BOARD_SIZE)) {
            for (i, tile) in row.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(match tile.occupant {
                    Some(id) => id.side().fold('f', 'b'),
                    None if tile.is_possible() => '*',
                    None => '.',
                })?;
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
    fn test_lookups_agree() {
        let grid = BoardGrid::new();
        assert_eq!(grid.tiles().len(), 81);
        for row in 0..9 {
            for col in 0..9 {
                let tile = grid.tile_at(row, col).expect("on board");
                assert_eq!(tile.index(), (row * 9 + col) as usize);
                assert_eq!(grid.tile_by_index(tile.index()), Some(tile));
                assert_eq!(i32::from(tile.row()), row);
                assert_eq!(i32::from(tile.col()), col);
            }
        }
        assert!(grid.tile_at(9, 0).is_none());
        assert!(grid.tile_at(0, -1).is_none());
        assert!(grid.tile_by_index(81).is_none());
    }

    #[test]
    fn test_place_pieces_skips_off_board() {
        let mut roster = Roster::new(Side::Forward);
        let pawn = roster.push(Kind::Pawn.at(Side::Forward, coord(6, 4)));
        roster.push(Kind::PromotedPawn.reserve(Side::Forward));

        let mut grid = BoardGrid::new();
        grid.place_pieces(&roster).expect("free tiles");

        assert_eq!(grid.occupant(coord(6, 4)), Some(pawn));
        assert_eq!(grid.tiles().iter().filter(|t| t.is_occupied()).count(), 1);
        assert_eq!(grid.side_at(coord(6, 4)), Some(Side::Forward));
    }

    #[test]
    fn test_place_pieces_rejects_shared_tile() {
        let mut forward = Roster::new(Side::Forward);
        let gold = forward.push(Kind::Gold.at(Side::Forward, coord(6, 3)));
        let mut backward = Roster::new(Side::Backward);
        backward.push(Kind::Pawn.at(Side::Backward, coord(6, 3)));

        let mut grid = BoardGrid::new();
        grid.place_pieces(&forward).expect("free tiles");
        assert_eq!(
            grid.place_pieces(&backward),
            Err(SetupError::Occupied { coord: coord(6, 3), occupant: gold })
        );
        assert_eq!(grid.occupant(coord(6, 3)), Some(gold));

        let mut doubled = Roster::new(Side::Forward);
        let first = doubled.push(Kind::Pawn.at(Side::Forward, coord(6, 0)));
        doubled.push(Kind::Lance.at(Side::Forward, coord(6, 0)));
        assert_eq!(
            BoardGrid::new().place_pieces(&doubled),
            Err(SetupError::Occupied { coord: coord(6, 0), occupant: first })
        );
    }

    #[test]
    fn test_initialize_clears() {
        let mut roster = Roster::new(Side::Backward);
        roster.push(Kind::King.at(Side::Backward, coord(0, 4)));

        let mut grid = BoardGrid::new();
        grid.place_pieces(&roster).expect("free tiles");
        grid.mark_possible(&[coord(1, 4)]);
        grid.initialize();

        assert!(grid.tiles().iter().all(|t| !t.is_occupied() && t.marks().is_empty()));
    }

    #[test]
    fn test_possible_marks() {
        let mut grid = BoardGrid::new();
        grid.mark_possible(&[coord(3, 3), coord(0, 8)]);
        grid.mark_selected(coord(4, 4));

        let possible: Vec<Coord> = grid.possible_destinations().iter().map(|t| t.coord()).collect();
        assert_eq!(possible, [coord(0, 8), coord(3, 3)]);

        grid.clear_possible_marks();
        assert!(grid.possible_destinations().is_empty());
        assert!(grid.tile(coord(4, 4)).is_selected());

        grid.clear_selection();
        assert!(!grid.tile(coord(4, 4)).is_selected());
    }

    #[test]
    fn test_occupant_mutation() {
        let mut grid = BoardGrid::new();
        let id = PieceId::new(Side::Forward, 3);
        assert_eq!(grid.set_occupant(coord(5, 5), id), None);
        assert_eq!(grid.take_occupant(coord(5, 5)), Some(id));
        assert_eq!(grid.take_occupant(coord(5, 5)), None);
    }

    #[test]
    fn test_tile_at_point() {
        let grid = BoardGrid::new();

        // Inside tile (0, 0).
        let tile = grid.tile_at_point(484.0, 29.0).expect("tile");
        assert_eq!(tile.coord(), coord(0, 0));

        // The 4 pixel line between columns 0 and 1 is covered by the
        // tolerance of both neighbours.
        assert_eq!(grid.tile_at_point(591.0, 79.0).map(Tile::coord), Some(coord(0, 0)));
        assert_eq!(grid.tile_at_point(593.0, 79.0).map(Tile::coord), Some(coord(0, 1)));

        // The 5 pixel line between columns 1 and 2 leaves a sliver.
        assert!(grid.tile_at_point(707.5, 79.0).is_none());

        // Off the board.
        assert!(grid.tile_at_point(10.0, 10.0).is_none());
    }

    #[test]
    fn test_display() {
        let mut grid = BoardGrid::new();
        grid.set_occupant(coord(0, 0), PieceId::new(Side::Backward, 0));
        grid.set_occupant(coord(8, 8), PieceId::new(Side::Forward, 0));
        grid.mark_possible(&[coord(0, 1)]);

        let diagram = grid.to_string();
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "b * . . . . . . .");
        assert_eq!(lines[8], ". . . . . . . . f");
    }
}
