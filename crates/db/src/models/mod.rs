//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` create DTOs for inserts
//! - Read-side projections (joins, summaries) where handlers need them

pub mod alert;
pub mod prediction;
pub mod user;
pub mod vlog;
