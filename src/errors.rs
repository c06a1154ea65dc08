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

use thiserror::Error;

use crate::{coord::Coord, piece::PieceId};

/// Error when parsing an invalid coordinate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid coordinate")]
pub struct ParseCoordError;

/// Error when parsing an invalid side name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid side")]
pub struct ParseSideError;

/// Error when parsing an invalid piece kind name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid piece kind")]
pub struct ParseKindError;

/// Error when a query needs an occupied tile.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum SelectionError {
    #[error("no piece on {0}")]
    Unoccupied(Coord),
}

/// Error when playing an illegal move.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum PlayError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("piece on {coord} does not belong to the side to move")]
    NotYourTurn { coord: Coord },
    #[error("piece on {from} cannot move to {to}")]
    IllegalDestination { from: Coord, to: Coord },
}

/// Error when a setup would put two pieces on one tile.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum SetupError {
    #[error("tile {coord} is already occupied by {occupant}")]
    Occupied { coord: Coord, occupant: PieceId },
}
