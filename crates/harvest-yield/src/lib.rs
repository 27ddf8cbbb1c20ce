//! Yield, cost, revenue, and profit calculations for the Harvest farm model.
//!
//! Every calculation is a pure function over borrowed [`harvest_types`]
//! records. Environmental conditions adjust yield (and therefore revenue and
//! profit) through each plant's percentage factor table; cost is never
//! affected by conditions.
//!
//! # Modules
//!
//! - [`calculator`] -- Plant, planting, and farm-level yield, cost, revenue,
//!   and profit.
//! - [`summary`] -- [`CropSummary`] and [`FarmSummary`] breakdowns.
//! - [`config`] -- [`FarmDefinition`] loading from YAML.
//! - [`error`] -- [`YieldError`] for calculation failures.
//!
//! # Usage
//!
//! ```
//! use harvest_types::{CropPlanting, EnvironmentFactors, Farm, Plant};
//! use harvest_yield::farm_yield;
//! use rust_decimal::Decimal;
//!
//! let corn = Plant::new("corn", Decimal::new(3, 0))
//!     .with_factor("sun", [("low", -50), ("medium", 0), ("high", 50)]);
//! let farm = Farm::new(vec![CropPlanting::new(corn, Decimal::new(10, 0))]);
//! let env = EnvironmentFactors::neutral().with("sun", "low");
//!
//! assert_eq!(farm_yield(&farm, &env), Ok(Decimal::new(15, 0)));
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod summary;

// Re-export primary types and operations at crate root.
pub use calculator::{
    adjustment, check_environment, crop_cost, crop_profit, crop_revenue, crop_yield, farm_cost,
    farm_profit, farm_revenue, farm_yield, plant_yield,
};
pub use config::{ConfigError, FarmDefinition, PlantingEntry};
pub use error::YieldError;
pub use summary::{CropSummary, FarmSummary, crop_summary, farm_summary};
