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

//! Screen layout of the board.
//!
//! Move generation never looks at geometry. It only serves renderers and
//! touch input, which map a point to a tile via
//! [`BoardGrid::tile_at_point()`](crate::BoardGrid::tile_at_point).

use crate::coord::{Coord, BOARD_SIZE};

/// An axis-aligned pixel rectangle.
#[allow(missing_docs)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    #[inline]
    pub const fn width(self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub const fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// Tests if the point lies in the rectangle grown by `tolerance` on
    /// every edge. Edges are inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::Rect;
    ///
    /// let rect = Rect { left: 0, top: 0, right: 10, bottom: 10 };
    /// assert!(rect.contains(10.0, 5.0, 0.0));
    /// assert!(!rect.contains(11.0, 5.0, 0.0));
    /// assert!(rect.contains(11.0, 5.0, 2.0));
    /// ```
    pub fn contains(self, x: f32, y: f32, tolerance: f32) -> bool {
        self.left as f32 - tolerance <= x
            && x <= self.right as f32 + tolerance
            && self.top as f32 - tolerance <= y
            && y <= self.bottom as f32 + tolerance
    }
}

/// Board layout configuration.
///
/// The default reproduces the 1030 pixel board artwork: tiles of 111
/// pixels starting at `(479, 24)`, separated by grid lines 4 or 5 pixels
/// wide.
///
/// # Examples
///
/// ```
/// use shogiban::{BoardGeometry, Coord};
///
/// let geometry = BoardGeometry::default();
/// let rect = geometry.rect(Coord::new(0, 0).expect("corner"));
/// assert_eq!((rect.left, rect.top), (479, 24));
/// assert_eq!(rect.width(), 111);
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardGeometry {
    /// Left edge of column 0.
    pub left: i32,
    /// Top edge of row 0.
    pub top: i32,
    /// Width and height of a tile.
    pub tile_size: i32,
    /// Width of the grid line above each row. The entry for row 0 is
    /// usually 0.
    pub row_gaps: [i32; BOARD_SIZE as usize],
    /// Width of the grid line left of each column.
    pub col_gaps: [i32; BOARD_SIZE as usize],
    /// Slack around each tile when mapping touch points, to absorb the grid
    /// lines.
    pub touch_tolerance: f32,
}

impl BoardGeometry {
    const IMAGE_SIZE: i32 = 1030;

    pub fn rect(&self, coord: Coord) -> Rect {
        let row = usize::from(coord.row());
        let col = usize::from(coord.col());
        let top = self.top
            + row as i32 * self.tile_size
            + self.row_gaps[..=row].iter().sum::<i32>();
        let left = self.left
            + col as i32 * self.tile_size
            + self.col_gaps[..=col].iter().sum::<i32>();
        Rect {
            left,
            top,
            right: left + self.tile_size,
            bottom: top + self.tile_size,
        }
    }

    /// Bounding rectangle of all tiles.
    pub fn bounds(&self) -> Rect {
        let span = i32::from(BOARD_SIZE) * self.tile_size;
        Rect {
            left: self.left + self.col_gaps[0],
            top: self.top + self.row_gaps[0],
            right: self.left + span + self.col_gaps.iter().sum::<i32>(),
            bottom: self.top + span + self.row_gaps.iter().sum::<i32>(),
        }
    }
}

impl Default for BoardGeometry {
    fn default() -> BoardGeometry {
        BoardGeometry {
            left: 479,
            top: 24,
            tile_size: BoardGeometry::IMAGE_SIZE / i32::from(BOARD_SIZE) - 3,
            row_gaps: [0, 4, 5, 5, 4, 4, 4, 5, 5],
            col_gaps: [0, 4, 5, 5, 4, 4, 4, 4, 4],
            touch_tolerance: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: u8, col: u8) -> Coord {
        Coord::new(row, col).expect("valid coord")
    }

    #[test]
    fn test_default_layout() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.tile_size, 111);

        let rect = geometry.rect(coord(1, 2));
        assert_eq!(rect, Rect { left: 710, top: 139, right: 821, bottom: 250 });

        let bounds = geometry.bounds();
        assert_eq!(bounds.left, 479);
        assert_eq!(bounds.top, 24);
        assert_eq!(bounds.right, 479 + 9 * 111 + 34);
        assert_eq!(bounds.bottom, 24 + 9 * 111 + 36);
    }

    #[test]
    fn test_tiles_do_not_overlap() {
        let geometry = BoardGeometry::default();
        for row in 0..BOARD_SIZE {
            for col in 1..BOARD_SIZE {
                let left = geometry.rect(coord(row, col - 1));
                let right = geometry.rect(coord(row, col));
                assert!(left.right < right.left);
                assert_eq!(left.top, right.top);
            }
        }
    }
}
