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

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::errors::ParseCoordError;

/// Number of rows and columns.
pub const BOARD_SIZE: u8 = 9;

/// Number of tiles on the board.
pub const NUM_TILES: usize = 81;

/// A tile coordinate.
///
/// Row 0 is the backward side's back rank, row 8 the forward side's. Every
/// `Coord` is on the board, and its flat index `row * 9 + col` is a
/// bijection with `(row, col)`.
///
/// # Examples
///
/// ```
/// use shogiban::Coord;
///
/// let coord = Coord::new(4, 4).expect("center");
/// assert_eq!(coord.index(), 40);
/// assert_eq!(Coord::from_index(40), Some(coord));
/// assert_eq!(Coord::new(9, 0), None);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u8, u8)", into = "(u8, u8)")
)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Coord> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Like [`Coord::new()`], but accepts negative values, which are never
    /// on the board.
    #[inline]
    pub fn from_signed(row: i32, col: i32) -> Option<Coord> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Coord::new(row, col)
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Coord> {
        if index < NUM_TILES {
            Some(Coord {
                row: (index / BOARD_SIZE as usize) as u8,
                col: (index % BOARD_SIZE as usize) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// The coordinate `drow` rows and `dcol` columns away, or `None` if that
    /// is off the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::Coord;
    ///
    /// let corner = Coord::new(0, 0).expect("corner");
    /// assert_eq!(corner.offset(1, 1), Coord::new(1, 1));
    /// assert_eq!(corner.offset(-1, 0), None);
    /// ```
    #[inline]
    pub fn offset(self, drow: i32, dcol: i32) -> Option<Coord> {
        Coord::from_signed(i32::from(self.row) + drow, i32::from(self.col) + dcol)
    }

    /// All 81 coordinates in index order.
    pub fn all() -> impl DoubleEndedIterator<Item = Coord> + ExactSizeIterator {
        (0..NUM_TILES).map(|index| Coord {
            row: (index / BOARD_SIZE as usize) as u8,
            col: (index % BOARD_SIZE as usize) as u8,
        })
    }

    /// Parses a coordinate in `row,col` notation.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCoordError`] if either component is missing, not a
    /// number or not on the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::Coord;
    ///
    /// assert_eq!(Coord::from_ascii(b"2,5"), Ok(Coord::new(2, 5).expect("valid")));
    /// assert!(Coord::from_ascii(b"2,9").is_err());
    /// assert!(Coord::from_ascii(b"25").is_err());
    /// ```
    pub fn from_ascii(s: &[u8]) -> Result<Coord, ParseCoordError> {
        let mut parts = s.splitn(2, |ch| *ch == b',');
        let row = parts.next().ok_or(ParseCoordError)?;
        let col = parts.next().ok_or(ParseCoordError)?;
        let row = btoi::btou::<u8>(row.trim_ascii()).map_err(|_| ParseCoordError)?;
        let col = btoi::btou::<u8>(col.trim_ascii()).map_err(|_| ParseCoordError)?;
        Coord::new(row, col).ok_or(ParseCoordError)
    }
}

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.index() as u8);
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = ParseCoordError;

    fn try_from((row, col): (u8, u8)) -> Result<Coord, ParseCoordError> {
        Coord::new(row, col).ok_or(ParseCoordError)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(coord: Coord) -> (u8, u8) {
        (coord.row, coord.col)
    }
}

impl From<Coord> for usize {
    #[inline]
    fn from(coord: Coord) -> usize {
        coord.index()
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Coord, ParseCoordError> {
        Coord::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bijection() {
        let mut seen = [false; NUM_TILES];
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col).expect("on board");
                assert_eq!(coord.index(), usize::from(row) * 9 + usize::from(col));
                assert_eq!(Coord::from_index(coord.index()), Some(coord));
                assert!(!seen[coord.index()]);
                seen[coord.index()] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(Coord::from_index(NUM_TILES), None);
    }

    #[test]
    fn test_all() {
        assert_eq!(Coord::all().len(), NUM_TILES);
        assert!(Coord::all().enumerate().all(|(i, c)| c.index() == i));
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(Coord::from_signed(-1, -1), None);
        assert_eq!(Coord::from_signed(8, 8), Coord::new(8, 8));
        assert_eq!(Coord::from_signed(3, 9), None);
    }

    #[test]
    fn test_display_parse() {
        for coord in Coord::all() {
            assert_eq!(coord.to_string().parse::<Coord>(), Ok(coord));
        }
        assert_eq!(" 4 , 4 ".parse::<Coord>(), Coord::new(4, 4).ok_or(ParseCoordError));
        assert!("-1,0".parse::<Coord>().is_err());
        assert!("a,b".parse::<Coord>().is_err());
        assert!("".parse::<Coord>().is_err());
    }
}
