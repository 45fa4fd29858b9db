//! Movement reachability on the Sleuth board: which tiles a token can land on
//! after a roll, given impassable tiles and one-way-axis doors.

pub mod board;
pub mod config;
pub mod core;
pub mod error;
pub mod search;
pub mod suspects;

pub use crate::board::Grid;
pub use crate::core::location::Location;
pub use crate::core::tile::TileKind;
pub use crate::error::BoardError;
pub use crate::search::{BoardQuery, SearchLimits};
