//! Board configuration loaded from JSON.
//!
//! ```json
//! {
//!   "ascii": ["....", ".#|.", "...."],
//!   "limits": { "max_roll": 6 }
//! }
//! ```
//!
//! The board is given either as raw `rows` of tile codes or as `ascii` lines
//! (see [`Grid::from_ascii`]). With neither, the embedded reference board is used.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::error::BoardError;
use crate::search::limits::{SearchLimits, MAX_ROLL_CEILING};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Raw tile codes, one array per row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<u8>>>,

    /// ASCII rows: `#` inaccessible, `.` normal, `-` east/west door, `|` north/south door.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascii: Option<Vec<String>>,

    #[serde(default)]
    pub limits: SearchLimits,
}

impl BoardConfig {
    pub fn from_json_str(text: &str) -> Result<Self, BoardError> {
        Self::parse(text, "<inline>")
    }

    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let text = fs::read_to_string(path).map_err(|e| BoardError::Config {
            stage: "config_read",
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config = Self::parse(&text, &path.display().to_string())?;
        tracing::info!(path = %path.display(), "Loaded board config");
        Ok(config)
    }

    fn parse(text: &str, origin: &str) -> Result<Self, BoardError> {
        let config: BoardConfig = serde_json::from_str(text).map_err(|e| BoardError::Config {
            stage: "config_parse",
            path: origin.to_string(),
            error: e.to_string(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    fn validate(&self, origin: &str) -> Result<(), BoardError> {
        let problem = if self.rows.is_some() && self.ascii.is_some() {
            "give either 'rows' or 'ascii', not both".to_string()
        } else if self.limits.max_roll > MAX_ROLL_CEILING {
            format!(
                "limits.max_roll is {}, the most allowed is {MAX_ROLL_CEILING}",
                self.limits.max_roll
            )
        } else {
            return Ok(());
        };
        Err(BoardError::Config {
            stage: "config_validate",
            path: origin.to_string(),
            error: problem,
        })
    }

    /// Build the configured grid, validating every tile.
    ///
    /// A config assembled in code goes through the same checks as a parsed one,
    /// so one with both `rows` and `ascii` set fails with `config_validate`.
    pub fn build_grid(&self) -> Result<Grid, BoardError> {
        self.validate("<in-memory>")?;
        match (&self.rows, &self.ascii) {
            (Some(rows), _) => Grid::from_rows(rows),
            (None, Some(lines)) => Grid::from_ascii(&lines.join("\n")),
            (None, None) => Ok(Grid::reference()),
        }
    }

    #[inline]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }
}
