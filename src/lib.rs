//! Board grid and move generation for Shogi.
//!
//! # Examples
//!
//! Generate destinations in the starting position:
//!
//! ```
//! use shogiban::{Coord, Position};
//!
//! let pos = Position::new();
//! let rook = Coord::new(7, 7).expect("valid");
//! assert_eq!(pos.legal_destinations(rook)?.len(), 6);
//! assert_eq!(pos.legal_moves().len(), 30);
//! # Ok::<_, shogiban::SelectionError>(())
//! ```
//!
//! Select a piece for highlighting, then play a move:
//!
//! ```
//! # use shogiban::{Coord, Position};
//! let mut pos = Position::new();
//! let from = Coord::new(6, 6).expect("valid");
//! let to = Coord::new(5, 6).expect("valid");
//!
//! pos.select(from)?;
//! assert_eq!(pos.grid().possible_destinations().len(), 1);
//!
//! pos.play(from, to)?;
//! assert!(pos.grid().possible_destinations().is_empty());
//! # Ok::<_, shogiban::PlayError>(())
//! ```
//!
//! Promote a pawn that reached the far third of the board:
//!
//! ```
//! use shogiban::{Coord, Kind, Position, Side};
//!
//! let mut pos = Position::empty();
//! let coord = Coord::new(2, 4).expect("valid");
//! pos.add_piece(Kind::Pawn.at(Side::Forward, coord)).expect("free tile");
//! pos.add_piece(Kind::PromotedPawn.reserve(Side::Forward)).expect("free tile");
//!
//! assert!(pos.can_promote(coord)?);
//! assert!(pos.promote(coord)?.is_some());
//! assert_eq!(pos.piece_at(coord).map(|(_, p)| p.kind), Some(Kind::PromotedPawn));
//! # Ok::<_, shogiban::SelectionError>(())
//! ```
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log/0.4) facade:
//! generated destinations at `trace`, moves, captures and promotions at
//! `debug`, and promotions without a spare at `warn`. The library never
//! installs a logger.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   value types, rosters and [`BoardGeometry`].
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for [`Coord`].

#![doc(html_root_url = "https://docs.rs/shogiban/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod util;
mod board;
mod coord;
mod errors;
mod kind;
mod perft;
mod piece;
mod position;
mod ranges;
mod roster;
mod side;

pub mod geometry;
pub mod movegen;

pub use board::{BoardGrid, Tile, TileMarks};
pub use coord::{Coord, BOARD_SIZE, NUM_TILES};
pub use errors::{
    ParseCoordError, ParseKindError, ParseSideError, PlayError, SelectionError, SetupError,
};
pub use geometry::{BoardGeometry, Rect};
pub use kind::Kind;
pub use movegen::Destinations;
pub use perft::perft;
pub use piece::{Piece, PieceId, Status};
pub use position::{Outcome, Position};
pub use ranges::{Direction, Group, Ranges, UNLIMITED};
pub use roster::Roster;
pub use side::{BySide, Side};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Coord {}
