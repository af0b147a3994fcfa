//! Document store primitives on top of the `documents` table.
//!
//! Documents are addressed by `(collection, id)` and hold an arbitrary JSON object. Only top-level
//! fields can be filtered on or updated individually.

mod mutation;
mod query;

pub use mutation::Mutation;
pub use query::Query;
