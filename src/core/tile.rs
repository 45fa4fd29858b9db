use serde::{Deserialize, Serialize};

/// Classification of a single board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Inaccessible,
    Normal,
    /// Entered only from the tile directly west or east of it.
    DoorEastWest,
    /// Entered only from the tile directly north or south of it.
    DoorNorthSouth,
}

/// Raw grid code -> kind. The code is the index.
const KIND_BY_CODE: [TileKind; 4] = [
    TileKind::Inaccessible,
    TileKind::Normal,
    TileKind::DoorEastWest,
    TileKind::DoorNorthSouth,
];

impl TileKind {
    /// Classify a raw grid code. Only `0..=3` are valid.
    #[inline]
    pub fn from_code(code: u8) -> Option<TileKind> {
        KIND_BY_CODE.get(code as usize).copied()
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_door(self) -> bool {
        matches!(self, TileKind::DoorEastWest | TileKind::DoorNorthSouth)
    }

    #[inline]
    pub fn is_accessible(self) -> bool {
        self != TileKind::Inaccessible
    }

    /// Single-character form used by the ASCII board notation.
    pub fn symbol(self) -> char {
        match self {
            TileKind::Inaccessible => '#',
            TileKind::Normal => '.',
            TileKind::DoorEastWest => '-',
            TileKind::DoorNorthSouth => '|',
        }
    }

    pub fn from_symbol(c: char) -> Option<TileKind> {
        match c {
            '#' => Some(TileKind::Inaccessible),
            '.' => Some(TileKind::Normal),
            '-' => Some(TileKind::DoorEastWest),
            '|' => Some(TileKind::DoorNorthSouth),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_table_matches_board_encoding() {
        assert_eq!(TileKind::from_code(0), Some(TileKind::Inaccessible));
        assert_eq!(TileKind::from_code(1), Some(TileKind::Normal));
        assert_eq!(TileKind::from_code(2), Some(TileKind::DoorEastWest));
        assert_eq!(TileKind::from_code(3), Some(TileKind::DoorNorthSouth));
        assert_eq!(TileKind::from_code(4), None);
        assert_eq!(TileKind::from_code(u8::MAX), None);
    }

    #[test]
    fn code_and_symbol_invert() {
        for code in 0..4u8 {
            let kind = TileKind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
            assert_eq!(TileKind::from_symbol(kind.symbol()), Some(kind));
        }
    }

    #[test]
    fn only_the_two_orientations_are_doors() {
        assert!(!TileKind::Inaccessible.is_door());
        assert!(!TileKind::Normal.is_door());
        assert!(TileKind::DoorEastWest.is_door());
        assert!(TileKind::DoorNorthSouth.is_door());
        assert!(!TileKind::Inaccessible.is_accessible());
        assert!(TileKind::DoorNorthSouth.is_accessible());
    }
}
