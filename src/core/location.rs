use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BoardError;

/// A tile coordinate: `x` grows to the east, `y` grows to the south.
///
/// Coordinates are signed so the west/north neighbors of an edge tile are
/// representable; such locations are simply off the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self + step`, or `None` if either coordinate leaves the `i32` range.
    #[inline]
    pub fn checked_add(self, step: Location) -> Option<Location> {
        let x = self.x.checked_add(step.x)?;
        let y = self.y.checked_add(step.y)?;
        Some(Location::new(x, y))
    }

    /// `self + step`, clamped to the `i32` range.
    #[inline]
    pub fn saturating_add(self, step: Location) -> Location {
        let x = self.x.saturating_add(step.x);
        let y = self.y.saturating_add(step.y);
        Location::new(x, y)
    }

    /// The four orthogonal neighbors, in [`ORTHOGONAL_STEPS`] order.
    ///
    /// A neighbor past `i32::MIN` / `i32::MAX` is `None`.
    #[inline]
    pub fn neighbors(self) -> [Option<Location>; 4] {
        ORTHOGONAL_STEPS.map(|step| self.checked_add(step))
    }

    /// Read a location out of untyped JSON.
    ///
    /// Accepts `{"x": 3, "y": 4}` or `[3, 4]`; anything without two integer
    /// coordinates is an [`BoardError::InvalidLocation`].
    pub fn from_json(value: &Value) -> Result<Location, BoardError> {
        let (x, y) = match value {
            Value::Object(map) => (map.get("x"), map.get("y")),
            Value::Array(items) if items.len() == 2 => (items.first(), items.get(1)),
            _ => (None, None),
        };
        match (x.and_then(json_coord), y.and_then(json_coord)) {
            (Some(x), Some(y)) => Ok(Location::new(x, y)),
            _ => Err(BoardError::InvalidLocation {
                input: value.to_string(),
            }),
        }
    }
}

fn json_coord(v: &Value) -> Option<i32> {
    v.as_i64().and_then(|n| i32::try_from(n).ok())
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Location {
    type Err = BoardError;

    /// Parses `"x,y"`, tolerating whitespace and optional parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidLocation {
            input: s.to_string(),
        };
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = inner.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Location::new(x, y))
    }
}

/// West, east, north, south.
///
/// The search walks neighbors in this order, so it is part of the observable
/// behavior of [`crate::search::BoardQuery::adjacent_locations`].
pub const ORTHOGONAL_STEPS: [Location; 4] = [
    Location { x: -1, y: 0 },
    Location { x: 1, y: 0 },
    Location { x: 0, y: -1 },
    Location { x: 0, y: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn neighbors_are_west_east_north_south() {
        let n = Location::new(4, 7).neighbors();
        assert_eq!(
            n,
            [
                Some(Location::new(3, 7)),
                Some(Location::new(5, 7)),
                Some(Location::new(4, 6)),
                Some(Location::new(4, 8)),
            ]
        );
    }

    #[test]
    fn edge_neighbors_may_be_negative() {
        let n = Location::new(0, 0).neighbors();
        assert_eq!(n[0], Some(Location::new(-1, 0)));
        assert_eq!(n[2], Some(Location::new(0, -1)));
    }

    #[test]
    fn neighbors_past_i32_range_are_none() {
        let n = Location::new(i32::MAX, 0).neighbors();
        assert_eq!(n[0], Some(Location::new(i32::MAX - 1, 0)));
        assert_eq!(n[1], None);

        let n = Location::new(0, i32::MIN).neighbors();
        assert_eq!(n[2], None);
        assert_eq!(n[3], Some(Location::new(0, i32::MIN + 1)));
    }

    #[test]
    fn saturating_add_clamps() {
        let step = ORTHOGONAL_STEPS[1];
        assert_eq!(
            Location::new(i32::MAX, 3).saturating_add(step),
            Location::new(i32::MAX, 3)
        );
        assert_eq!(Location::new(4, 3).saturating_add(step), Location::new(5, 3));
    }

    #[test]
    fn parses_pairs() {
        assert_eq!("17,3".parse::<Location>().unwrap(), Location::new(17, 3));
        assert_eq!(" (4 , 9) ".parse::<Location>().unwrap(), Location::new(4, 9));
        assert_eq!("-10,5".parse::<Location>().unwrap(), Location::new(-10, 5));
    }

    #[test]
    fn rejects_malformed_pairs() {
        for input in ["", "17", "ten,five", "1,2,3", "1;2"] {
            let err = input.parse::<Location>().unwrap_err();
            assert!(
                matches!(err, BoardError::InvalidLocation { .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn from_json_accepts_objects_and_pairs() {
        let obj = json!({"x": 7, "y": 8});
        let pair = json!([7, 8]);
        assert_eq!(Location::from_json(&obj).unwrap(), Location::new(7, 8));
        assert_eq!(Location::from_json(&pair).unwrap(), Location::new(7, 8));
    }

    #[test]
    fn from_json_rejects_values_without_coordinates() {
        let cases = [
            json!({"1": 23, "9": 76, "a": "b"}),
            json!(["ten", "five"]),
            json!({"x": 1}),
            json!([1, 2, 3]),
            json!({"x": 1.5, "y": 2}),
            json!("7,5"),
        ];
        for value in cases {
            assert!(matches!(
                Location::from_json(&value),
                Err(BoardError::InvalidLocation { .. })
            ));
        }
    }

    #[test]
    fn serializes_with_named_fields() {
        let s = serde_json::to_string(&Location::new(2, 5)).unwrap();
        assert_eq!(s, r#"{"x":2,"y":5}"#);
    }
}
