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

//! Movement directions and range vectors.

use std::{fmt, ops};

use crate::side::Side;

/// Range limit that never runs out on a 9x9 board.
pub const UNLIMITED: u8 = u8::MAX;

/// The longest walk that stays on the board.
pub(crate) const MAX_STEPS: u8 = 8;

/// Which of the three direction groups a [`Direction`] belongs to.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Group {
    Forward,
    Lateral,
    Backward,
}

/// One of eight movement directions, relative to the moving piece's side.
///
/// The discriminant is the direction's slot in a [`Ranges`] vector:
/// forward-left, forward and forward-right, then left and right, then
/// backward-left, backward and backward-right.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Direction {
    ForwardLeft = 0,
    Forward = 1,
    ForwardRight = 2,
    Left = 3,
    Right = 4,
    BackwardLeft = 5,
    Backward = 6,
    BackwardRight = 7,
}

impl Direction {
    pub const fn group(self) -> Group {
        match self {
            Direction::ForwardLeft | Direction::Forward | Direction::ForwardRight => Group::Forward,
            Direction::Left | Direction::Right => Group::Lateral,
            Direction::BackwardLeft | Direction::Backward | Direction::BackwardRight => {
                Group::Backward
            }
        }
    }

    /// `(row, col)` delta of a single step for a piece of `side`.
    ///
    /// The backward side sees the board rotated by 180 degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::{Direction, Side};
    ///
    /// assert_eq!(Direction::ForwardLeft.delta(Side::Forward), (-1, -1));
    /// assert_eq!(Direction::ForwardLeft.delta(Side::Backward), (1, 1));
    /// ```
    pub const fn delta(self, side: Side) -> (i32, i32) {
        let (drow, dcol) = match self {
            Direction::ForwardLeft => (-1, -1),
            Direction::Forward => (-1, 0),
            Direction::ForwardRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::BackwardLeft => (1, -1),
            Direction::Backward => (1, 0),
            Direction::BackwardRight => (1, 1),
        };
        match side {
            Side::Forward => (drow, dcol),
            Side::Backward => (-drow, -dcol),
        }
    }

    /// All directions, grouped forward, lateral, backward.
    pub const ALL: [Direction; 8] = [
        Direction::ForwardLeft,
        Direction::Forward,
        Direction::ForwardRight,
        Direction::Left,
        Direction::Right,
        Direction::BackwardLeft,
        Direction::Backward,
        Direction::BackwardRight,
    ];
}

/// Maximum number of steps in each [`Direction`].
///
/// `0` means the piece cannot move that way and [`UNLIMITED`] means it
/// slides until blocked or off the board.
///
/// # Examples
///
/// ```
/// use shogiban::{Direction, Ranges, UNLIMITED};
///
/// let rook = Ranges::new([0, UNLIMITED, 0, UNLIMITED, UNLIMITED, 0, UNLIMITED, 0]);
/// assert_eq!(rook[Direction::Forward], UNLIMITED);
/// assert_eq!(rook[Direction::ForwardLeft], 0);
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranges([u8; 8]);

impl Ranges {
    pub const NONE: Ranges = Ranges([0; 8]);

    #[inline]
    pub const fn new(limits: [u8; 8]) -> Ranges {
        Ranges(limits)
    }

    #[inline]
    pub const fn get(self, dir: Direction) -> u8 {
        self.0[dir as usize]
    }

    /// The limit in `dir`, clamped to what fits on the board.
    #[inline]
    pub(crate) fn steps(self, dir: Direction) -> u8 {
        self.get(dir).min(MAX_STEPS)
    }

    pub const fn is_empty(self) -> bool {
        let mut i = 0;
        while i < 8 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn into_array(self) -> [u8; 8] {
        self.0
    }
}

impl ops::Index<Direction> for Ranges {
    type Output = u8;

    #[inline]
    fn index(&self, dir: Direction) -> &u8 {
        &self.0[dir as usize]
    }
}

impl fmt::Debug for Ranges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for limit in self.0 {
            if limit == UNLIMITED {
                list.entry(&format_args!("*"));
            } else {
                list.entry(&limit);
            }
        }
        list.finish()
    }
}
