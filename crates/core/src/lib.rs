//! Domain types and pure logic for projectdesk.
//!
//! Nothing in this crate performs I/O or logging; the store and API crates
//! build on these types.

pub mod clock;
pub mod error;
pub mod project;
pub mod types;
pub mod validation;
