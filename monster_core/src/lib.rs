//! # Monster Core
//!
//! Read-only lookups over monster records. This crate builds repositories from
//! the raw record sets in `monster_rules`, joins them into per-monster views,
//! and reconstructs evolution families.
//!
//! ## Core Components
//!
//! - **repository**: Generic keyed store with single/multi lookup modes
//! - **family**: Evolution family resolution over the evolution graph
//! - **pad**: The facade owning every repository and performing joins
//! - **config** / **loader**: Local JSON snapshot configuration and loading
//!
//! ## Design Philosophy
//!
//! - **Load Once**: Repositories are built eagerly and never mutated
//! - **Join on Demand**: Only single fetches are joined; enumeration stays raw
//! - **Copies, Not Shares**: Every join returns an independent value

pub mod config;
pub mod error;
pub mod family;
pub mod loader;
pub mod pad;
pub mod repository;

#[cfg(test)]
mod fixtures;

pub use config::*;
pub use error::*;
pub use family::*;
pub use loader::*;
pub use pad::*;
pub use repository::*;
