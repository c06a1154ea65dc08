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

use std::{fmt, ops, str::FromStr};

use crate::errors::ParseSideError;

/// `Forward` or `Backward`.
///
/// The forward side starts on rows 6 to 8 and advances toward row 0. The
/// backward side starts on rows 0 to 2 and advances toward row 8.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Forward = 0,
    Backward = 1,
}

impl Side {
    #[inline]
    pub fn from_forward(forward: bool) -> Side {
        if forward {
            Side::Forward
        } else {
            Side::Backward
        }
    }

    #[inline]
    pub fn fold<T>(self, forward: T, backward: T) -> T {
        match self {
            Side::Forward => forward,
            Side::Backward => backward,
        }
    }

    #[inline]
    pub fn is_forward(self) -> bool {
        self == Side::Forward
    }

    #[inline]
    pub fn is_backward(self) -> bool {
        self == Side::Backward
    }

    /// Row delta of a single step toward the opponent.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::Side;
    ///
    /// assert_eq!(Side::Forward.advance(), -1);
    /// assert_eq!(Side::Backward.advance(), 1);
    /// ```
    #[inline]
    pub fn advance(self) -> i8 {
        self.fold(-1, 1)
    }

    /// The row a piece of this side starts its back rank on.
    #[inline]
    pub fn home_row(self) -> u8 {
        self.fold(8, 0)
    }

    pub fn name(self) -> &'static str {
        self.fold("forward", "backward")
    }

    /// `Forward` and `Backward`, in this order.
    pub const ALL: [Side; 2] = [Side::Forward, Side::Backward];
}

impl ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.fold(Side::Backward, Side::Forward)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Side, ParseSideError> {
        Ok(match s {
            "forward" => Side::Forward,
            "backward" => Side::Backward,
            _ => return Err(ParseSideError),
        })
    }
}

/// Container with values for each [`Side`].
#[derive(Clone, Default, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BySide<T> {
    pub forward: T,
    pub backward: T,
}

impl<T> BySide<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> BySide<T>
    where
        F: FnMut(Side) -> T,
    {
        BySide {
            forward: init(Side::Forward),
            backward: init(Side::Backward),
        }
    }

    #[inline]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Forward => &self.forward,
            Side::Backward => &self.backward,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Forward => &mut self.forward,
            Side::Backward => &mut self.backward,
        }
    }

    /// Finds the first side, forward before backward, whose value matches.
    #[inline]
    pub fn find<F>(&self, mut predicate: F) -> Option<Side>
    where
        F: FnMut(&T) -> bool,
    {
        if predicate(&self.forward) {
            Some(Side::Forward)
        } else if predicate(&self.backward) {
            Some(Side::Backward)
        } else {
            None
        }
    }

    /// Iterates over the forward value, then the backward value.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.forward, &self.backward].into_iter()
    }
}
