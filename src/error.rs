//! Errors returned by board construction, lookups and searches.

use crate::core::location::Location;
use crate::core::tile::TileKind;

/// Structured errors for the whole crate.
///
/// Every variant signals bad input from the caller (a malformed location, a
/// lookup that skipped the `in_board` guard, a corrupt board table); none of
/// them is part of normal game flow.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Untyped input could not be read as a pair of integer coordinates.
    #[error("expected a location with integer 'x' and 'y' coordinates, got {input}")]
    InvalidLocation { input: String },

    /// A tile lookup outside the stored grid.
    #[error("location {location} is outside the {width}x{height} board")]
    OutOfRange {
        location: Location,
        width: usize,
        height: usize,
    },

    /// Door accessibility was asked about a tile that is not a door.
    #[error("tile {location} is not a door (found {kind:?})")]
    NotADoor { location: Location, kind: TileKind },

    #[error("invalid tile code {code} at row {row}, column {col}")]
    InvalidTileCode { row: usize, col: usize, code: u8 },

    #[error("invalid tile symbol {symbol:?} at row {row}, column {col}")]
    InvalidTileSymbol { row: usize, col: usize, symbol: char },

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board has no tiles")]
    EmptyGrid,

    #[error("roll {roll} exceeds the configured maximum of {max_roll}")]
    RollLimitExceeded { roll: u32, max_roll: u32 },

    /// Configuration could not be read or parsed.
    #[error("config error at {stage} for {path}: {error}")]
    Config {
        stage: &'static str,
        path: String,
        error: String,
    },
}
