//! The immutable tile grid.
//!
//! A [`Grid`] is built once (from [`Grid::reference`], raw code rows, or the ASCII
//! notation) and then only read. Tile codes are validated at construction, so
//! lookups never see an unknown code.

pub mod reference;

use std::fmt;

use crate::core::location::Location;
use crate::core::tile::TileKind;
use crate::error::BoardError;

use self::reference::REFERENCE_CODES;

/// A rectangular board of classified tiles, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<TileKind>,
    width: usize,
    height: usize,
}

impl Grid {
    /// The embedded 25x24 reference board.
    pub fn reference() -> Grid {
        Grid::from_rows(&REFERENCE_CODES).expect("embedded reference board is valid")
    }

    /// Build from raw tile codes, one slice per row (row 0 is the north edge).
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Grid, BoardError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(BoardError::EmptyGrid);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != width {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: width,
                    found: codes.len(),
                });
            }
            for (col, &code) in codes.iter().enumerate() {
                let kind =
                    TileKind::from_code(code).ok_or(BoardError::InvalidTileCode { row, col, code })?;
                tiles.push(kind);
            }
        }

        Ok(Grid {
            tiles,
            width,
            height: rows.len(),
        })
    }

    /// Build from the ASCII notation used by [`Grid`]'s `Display`:
    /// `#` inaccessible, `.` normal, `-` east/west door, `|` north/south door.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(text: &str) -> Result<Grid, BoardError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let codes = line
                .chars()
                .enumerate()
                .map(|(col, symbol)| {
                    TileKind::from_symbol(symbol)
                        .map(TileKind::code)
                        .ok_or(BoardError::InvalidTileSymbol { row, col, symbol })
                })
                .collect::<Result<Vec<u8>, BoardError>>()?;
            rows.push(codes);
        }
        Grid::from_rows(&rows)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `location` lies on the board.
    #[inline]
    pub fn in_board(&self, location: Location) -> bool {
        self.index_of(location).is_some()
    }

    /// The tile at `location`.
    ///
    /// Callers are expected to guard with [`Grid::in_board`]; a location off the
    /// board is [`BoardError::OutOfRange`].
    pub fn tile_at(&self, location: Location) -> Result<TileKind, BoardError> {
        self.index_of(location)
            .map(|idx| self.tiles[idx])
            .ok_or(BoardError::OutOfRange {
                location,
                width: self.width,
                height: self.height,
            })
    }

    fn index_of(&self, location: Location) -> Option<usize> {
        let x = usize::try_from(location.x).ok()?;
        let y = usize::try_from(location.y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for kind in row {
                write!(f, "{}", kind.symbol())?;
            }
        }
        Ok(())
    }
}
