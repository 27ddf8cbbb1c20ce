//! Shared record types for the Harvest yield calculator.
//!
//! Every type here is a plain, immutable-by-convention input record. The
//! calculator in `harvest-yield` borrows them and never mutates them.
//!
//! # Modules
//!
//! - [`environment`] -- [`EnvironmentFactors`] (the active condition level per
//!   dimension) and [`FactorTable`] (a plant's percentage adjustments).
//! - [`structs`] -- [`Plant`], [`CropPlanting`], and [`Farm`].

pub mod environment;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use environment::{EnvironmentFactors, FactorTable, LevelAdjustments};
pub use structs::{CropPlanting, Farm, Plant};
