//! Board queries and the bounded movement search.
//!
//! [`BoardQuery`] borrows an immutable [`crate::board::Grid`] and holds no other
//! state, so one grid can back any number of concurrent queries.

pub mod destinations;
pub mod limits;
pub mod query;

pub use self::limits::SearchLimits;
pub use self::query::BoardQuery;
