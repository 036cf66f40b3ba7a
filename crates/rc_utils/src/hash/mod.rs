//! Hash states for the maps in this crate, re-exports *hashbrown*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{NoOpHashState, NoOpHasher};

// -----------------------------------------------------------------------------
// Re-export crates

pub use hashbrown;
