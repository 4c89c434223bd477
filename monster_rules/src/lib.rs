//! # Monster Rules
//!
//! The "Monster Book" crate - entity definitions, code tables, and growth
//! curves for monster-collection records. This crate only shapes and
//! evaluates data; joining record sets together lives in `monster_core`.

pub mod entities;
pub mod error;
pub mod mechanics;
pub mod raw;

pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use raw::*;
