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

//! Count move paths.
//!
//! # Examples
//!
//! ```
//! use shogiban::{perft, Position};
//!
//! let pos = Position::new();
//! assert_eq!(perft(&pos, 1), 30);
//! assert_eq!(perft(&pos, 2), 900);
//! ```

use crate::position::Position;

/// Counts move paths of a given length.
///
/// Paths that end the game early are not counted unless it happens in the
/// final position. Useful for comparing, testing and debugging destination
/// generation.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = pos.legal_moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .into_iter()
                .map(|(from, to)| {
                    let mut child = pos.clone();
                    child.play_unchecked(from, to);
                    if child.outcome().is_some() {
                        0
                    } else {
                        perft(&child, depth - 1)
                    }
                })
                .sum()
        }
    }
}
