//! Domain types and pure logic for the SympTrack backend.
//!
//! Nothing in this crate performs I/O. The `db` and `api` crates build on
//! these types.

pub mod alert;
pub mod error;
pub mod profile;
pub mod risk;
pub mod stats;
pub mod types;
