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

//! Destination generation.
//!
//! A piece walks each [`Direction`] of its range vector until the range is
//! exhausted, the board ends, a piece of its own side blocks it, or it
//! captures an opposing piece. Knights jump instead.
//!
//! # Examples
//!
//! ```
//! use shogiban::{movegen, BoardGrid, Coord, Kind, Side};
//!
//! let grid = BoardGrid::new();
//! let from = Coord::new(4, 4).expect("center");
//! let rook = Kind::Rook.at(Side::Forward, from);
//!
//! assert_eq!(movegen::destinations(&grid, from, &rook).len(), 16);
//! ```

use arrayvec::ArrayVec;
use log::trace;

use crate::{
    board::BoardGrid,
    coord::Coord,
    piece::Piece,
    ranges::Direction,
    side::Side,
};

/// Capacity of [`Destinations`]. A piece that slides in all eight
/// directions from the center reaches 32 tiles, more than from anywhere
/// else.
pub const MAX_DESTINATIONS: usize = 32;

/// A container for destinations that can be stored inline on the stack.
pub type Destinations = ArrayVec<Coord, MAX_DESTINATIONS>;

/// Rows a side's pieces must reach to promote.
const PROMOTION_ZONE_DEPTH: u8 = 3;

/// Generates the tiles `piece`, standing on `from`, may move to.
///
/// Occupancy is read from `grid`. Only the side of each occupant matters,
/// so `piece` does not have to be on the grid itself. Destinations are
/// ordered by direction group: forward, lateral, backward.
pub fn destinations(grid: &BoardGrid, from: Coord, piece: &Piece) -> Destinations {
    let mut dests = Destinations::new();

    if piece.kind.is_jumper() {
        push_jumps(grid, from, piece.side, &mut dests);
    } else {
        for dir in Direction::ALL {
            let steps = piece.ranges.steps(dir);
            if steps > 0 {
                push_walk(grid, from, piece.side, dir, steps, &mut dests);
            }
        }
    }

    trace!("{} {} on {}: {:?}", piece.side, piece.kind, from, dests.as_slice());
    dests
}

fn push_walk(
    grid: &BoardGrid,
    from: Coord,
    side: Side,
    dir: Direction,
    steps: u8,
    dests: &mut Destinations,
) {
    let (drow, dcol) = dir.delta(side);
    let mut coord = from;

    for _ in 0..steps {
        coord = match coord.offset(drow, dcol) {
            Some(next) => next,
            None => break,
        };

        match grid.side_at(coord) {
            Some(occupant) if occupant == side => break,
            Some(_) => {
                dests.push(coord);
                break;
            }
            None => dests.push(coord),
        }
    }
}

fn push_jumps(grid: &BoardGrid, from: Coord, side: Side, dests: &mut Destinations) {
    let drow = 2 * i32::from(side.advance());

    for dcol in [-1, 1] {
        if let Some(to) = from.offset(drow, dcol) {
            if grid.side_at(to) != Some(side) {
                dests.push(to);
            }
        }
    }
}

/// Tests if a piece of `side` on `coord` stands in its promotion zone, the
/// three rows farthest from its own back rank.
///
/// # Examples
///
/// ```
/// use shogiban::{movegen, Coord, Side};
///
/// let coord = Coord::new(2, 0).expect("valid");
/// assert!(movegen::in_promotion_zone(Side::Forward, coord));
/// assert!(!movegen::in_promotion_zone(Side::Backward, coord));
/// ```
pub fn in_promotion_zone(side: Side, coord: Coord) -> bool {
    match side {
        Side::Forward => coord.row() < PROMOTION_ZONE_DEPTH,
        Side::Backward => coord.row() >= crate::coord::BOARD_SIZE - PROMOTION_ZONE_DEPTH,
    }
}

/// Tests if `piece`, wherever it stands, is in its promotion zone. Pieces
/// off the board cannot promote.
pub fn can_promote(piece: &Piece) -> bool {
    piece
        .coord()
        .map_or(false, |coord| in_promotion_zone(piece.side, coord))
}
