//! Small value types shared by the board and the search.
//!
//! - [`location`]: integer board coordinates and the four orthogonal steps.
//! - [`tile`]: the closed tile classification and its raw-code table.

pub mod location;
pub mod tile;
