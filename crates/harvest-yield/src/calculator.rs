//! Yield, cost, revenue, and profit for plants, plantings, and farms.
//!
//! The functions compose bottom-up:
//!
//! ```text
//! plant_yield -> crop_yield -> farm_yield
//!                    |
//!                    +-> crop_revenue -+-> crop_profit -> farm_profit
//!      crop_cost --------------------- +
//! ```
//!
//! Neutral conditions are an empty [`EnvironmentFactors`]; there is no
//! separate code path for them. Cost never depends on the environment.
//!
//! All arithmetic is checked; overflow surfaces as
//! [`YieldError::ArithmeticOverflow`].

use rust_decimal::Decimal;

use harvest_types::{CropPlanting, EnvironmentFactors, Farm, Plant};

use crate::error::YieldError;

/// Percentage base for environmental adjustments.
const PERCENT: Decimal = Decimal::ONE_HUNDRED;

// ---------------------------------------------------------------------------
// Factor lookup
// ---------------------------------------------------------------------------

/// Look up the percentage adjustment a plant declares for a dimension/level.
///
/// # Errors
///
/// Returns [`YieldError::UnknownDimension`] if the plant declares no factors
/// for `dimension`, or [`YieldError::UnknownLevel`] if the dimension's table
/// has no entry for `level`.
pub fn adjustment(plant: &Plant, dimension: &str, level: &str) -> Result<i32, YieldError> {
    let levels = plant
        .factor
        .levels(dimension)
        .ok_or_else(|| YieldError::UnknownDimension {
            plant: plant.name.clone(),
            dimension: dimension.to_owned(),
        })?;

    levels
        .get(level)
        .copied()
        .ok_or_else(|| YieldError::UnknownLevel {
            plant: plant.name.clone(),
            dimension: dimension.to_owned(),
            level: level.to_owned(),
        })
}

/// Check that a plant declares a factor for every condition in `environment`.
pub fn check_environment(plant: &Plant, environment: &EnvironmentFactors) -> Result<(), YieldError> {
    for (dimension, level) in environment.iter() {
        adjustment(plant, dimension, level)?;
    }
    Ok(())
}

/// Scale `value` by `(100 + percent) / 100`, dividing first.
fn apply_adjustment(value: Decimal, percent: i32) -> Result<Decimal, YieldError> {
    let multiplier = PERCENT
        .checked_add(Decimal::from(percent))
        .ok_or(YieldError::ArithmeticOverflow)?;
    value
        .checked_div(PERCENT)
        .and_then(|scaled| scaled.checked_mul(multiplier))
        .ok_or(YieldError::ArithmeticOverflow)
}

// ---------------------------------------------------------------------------
// Yield
// ---------------------------------------------------------------------------

/// Yield of a single unit of `plant` under `environment`.
///
/// Formula, applied once per `(dimension, level)` in the environment:
/// `yield = yield / 100 * (100 + factor[dimension][level])`
///
/// Under neutral conditions this is the plant's base yield.
pub fn plant_yield(plant: &Plant, environment: &EnvironmentFactors) -> Result<Decimal, YieldError> {
    environment
        .iter()
        .try_fold(plant.base_yield, |current, (dimension, level)| {
            let percent = adjustment(plant, dimension, level)?;
            apply_adjustment(current, percent)
        })
}

/// Yield of a planting: per-unit yield times the number planted.
pub fn crop_yield(
    planting: &CropPlanting,
    environment: &EnvironmentFactors,
) -> Result<Decimal, YieldError> {
    plant_yield(&planting.crop, environment)?
        .checked_mul(planting.num_crops)
        .ok_or(YieldError::ArithmeticOverflow)
}

/// Total yield over every planting on the farm. An empty farm yields zero.
pub fn farm_yield(farm: &Farm, environment: &EnvironmentFactors) -> Result<Decimal, YieldError> {
    let total = sum_plantings(farm, |planting| crop_yield(planting, environment))?;
    tracing::debug!(crops = farm.len(), %total, "Computed farm yield");
    Ok(total)
}

// ---------------------------------------------------------------------------
// Cost
// ---------------------------------------------------------------------------

/// Cost of a planting: number planted times the plant's unit cost.
///
/// Takes no environment: seed and planting costs are fixed regardless of
/// conditions.
///
/// # Errors
///
/// Returns [`YieldError::MissingCost`] if the plant has no cost.
pub fn crop_cost(planting: &CropPlanting) -> Result<Decimal, YieldError> {
    let cost = planting
        .crop
        .cost
        .ok_or_else(|| YieldError::MissingCost {
            plant: planting.crop.name.clone(),
        })?;
    planting
        .num_crops
        .checked_mul(cost)
        .ok_or(YieldError::ArithmeticOverflow)
}

/// Total cost over every planting on the farm.
pub fn farm_cost(farm: &Farm) -> Result<Decimal, YieldError> {
    let total = sum_plantings(farm, crop_cost)?;
    tracing::debug!(crops = farm.len(), %total, "Computed farm cost");
    Ok(total)
}

// ---------------------------------------------------------------------------
// Revenue and profit
// ---------------------------------------------------------------------------

/// Revenue of a planting: its yield times the plant's sale price.
///
/// # Errors
///
/// Returns [`YieldError::MissingSalePrice`] if the plant has no sale price,
/// plus any error from [`crop_yield`].
pub fn crop_revenue(
    planting: &CropPlanting,
    environment: &EnvironmentFactors,
) -> Result<Decimal, YieldError> {
    let harvested = crop_yield(planting, environment)?;
    revenue_for_yield(planting, harvested)
}

/// Profit of a planting: revenue minus cost.
pub fn crop_profit(
    planting: &CropPlanting,
    environment: &EnvironmentFactors,
) -> Result<Decimal, YieldError> {
    let revenue = crop_revenue(planting, environment)?;
    let cost = crop_cost(planting)?;
    revenue
        .checked_sub(cost)
        .ok_or(YieldError::ArithmeticOverflow)
}

/// Total revenue over every planting on the farm.
pub fn farm_revenue(farm: &Farm, environment: &EnvironmentFactors) -> Result<Decimal, YieldError> {
    let total = sum_plantings(farm, |planting| crop_revenue(planting, environment))?;
    tracing::debug!(crops = farm.len(), %total, "Computed farm revenue");
    Ok(total)
}

/// Total profit over every planting on the farm.
pub fn farm_profit(farm: &Farm, environment: &EnvironmentFactors) -> Result<Decimal, YieldError> {
    let total = sum_plantings(farm, |planting| crop_profit(planting, environment))?;
    tracing::debug!(crops = farm.len(), %total, "Computed farm profit");
    Ok(total)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Price an already-computed yield for `planting`.
pub(crate) fn revenue_for_yield(
    planting: &CropPlanting,
    harvested: Decimal,
) -> Result<Decimal, YieldError> {
    let price = planting
        .crop
        .sale_price
        .ok_or_else(|| YieldError::MissingSalePrice {
            plant: planting.crop.name.clone(),
        })?;
    harvested
        .checked_mul(price)
        .ok_or(YieldError::ArithmeticOverflow)
}

/// Sum `per_crop` over every planting, visiting each exactly once.
fn sum_plantings<F>(farm: &Farm, mut per_crop: F) -> Result<Decimal, YieldError>
where
    F: FnMut(&CropPlanting) -> Result<Decimal, YieldError>,
{
    farm.plantings().try_fold(Decimal::ZERO, |total, planting| {
        let value = per_crop(planting)?;
        total
            .checked_add(value)
            .ok_or(YieldError::ArithmeticOverflow)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn corn() -> Plant {
        Plant::new("corn", dec!(30))
            .with_factor("sun", [("low", -50), ("medium", 0), ("high", 50)])
            .with_factor("wind", [("high", -60), ("medium", -30), ("low", 0)])
    }

    fn priced_corn() -> Plant {
        Plant::new("corn", dec!(3))
            .with_cost(dec!(1))
            .with_sale_price(dec!(2))
    }

    #[test]
    fn neutral_conditions_return_base_yield() {
        assert_eq!(
            plant_yield(&corn(), &EnvironmentFactors::neutral()),
            Ok(dec!(30))
        );
    }

    #[test]
    fn single_factor_scales_yield() {
        let env = EnvironmentFactors::neutral().with("sun", "low");
        assert_eq!(plant_yield(&corn(), &env), Ok(dec!(15)));
    }

    #[test]
    fn factors_accumulate_across_dimensions() {
        let env = EnvironmentFactors::neutral()
            .with("sun", "low")
            .with("wind", "medium");
        assert_eq!(plant_yield(&corn(), &env), Ok(dec!(10.5)));
    }

    #[test]
    fn zero_adjustment_is_identity() {
        let env = EnvironmentFactors::neutral()
            .with("sun", "medium")
            .with("wind", "low");
        assert_eq!(plant_yield(&corn(), &env), Ok(dec!(30)));
    }

    #[test]
    fn unknown_dimension_is_reported() {
        let env = EnvironmentFactors::neutral().with("rain", "heavy");
        assert_eq!(
            plant_yield(&corn(), &env),
            Err(YieldError::UnknownDimension {
                plant: "corn".to_owned(),
                dimension: "rain".to_owned(),
            })
        );
    }

    #[test]
    fn unknown_level_is_reported() {
        let env = EnvironmentFactors::neutral().with("sun", "blinding");
        assert_eq!(
            check_environment(&corn(), &env),
            Err(YieldError::UnknownLevel {
                plant: "corn".to_owned(),
                dimension: "sun".to_owned(),
                level: "blinding".to_owned(),
            })
        );
    }

    #[test]
    fn plant_without_factors_rejects_any_condition() {
        let env = EnvironmentFactors::neutral().with("sun", "low");
        let result = plant_yield(&priced_corn(), &env);
        assert!(matches!(result, Err(YieldError::UnknownDimension { .. })));
    }

    #[test]
    fn crop_yield_multiplies_by_count() {
        let planting = CropPlanting::new(priced_corn(), dec!(10));
        assert_eq!(
            crop_yield(&planting, &EnvironmentFactors::neutral()),
            Ok(dec!(30))
        );
    }

    #[test]
    fn empty_planting_is_zero_everywhere() {
        let planting = CropPlanting::new(priced_corn(), dec!(0));
        let env = EnvironmentFactors::neutral();
        assert_eq!(crop_yield(&planting, &env), Ok(Decimal::ZERO));
        assert_eq!(crop_cost(&planting), Ok(Decimal::ZERO));
        assert_eq!(crop_revenue(&planting, &env), Ok(Decimal::ZERO));
        assert_eq!(crop_profit(&planting, &env), Ok(Decimal::ZERO));
    }

    #[test]
    fn negative_count_propagates() {
        let planting = CropPlanting::new(priced_corn(), dec!(-2));
        assert_eq!(crop_cost(&planting), Ok(dec!(-2)));
        assert_eq!(
            crop_profit(&planting, &EnvironmentFactors::neutral()),
            Ok(dec!(-10))
        );
    }

    #[test]
    fn cost_ignores_environment() {
        let planting = CropPlanting::new(priced_corn(), dec!(10));
        assert_eq!(crop_cost(&planting), Ok(dec!(10)));
    }

    #[test]
    fn missing_cost_only_matters_when_read() {
        let planting = CropPlanting::new(Plant::new("squash", dec!(2)), dec!(4));
        let env = EnvironmentFactors::neutral();
        assert_eq!(crop_yield(&planting, &env), Ok(dec!(8)));
        assert_eq!(
            crop_cost(&planting),
            Err(YieldError::MissingCost {
                plant: "squash".to_owned()
            })
        );
    }

    #[test]
    fn missing_sale_price_is_reported() {
        let planting = CropPlanting::new(Plant::new("squash", dec!(2)).with_cost(dec!(1)), dec!(4));
        assert_eq!(
            crop_revenue(&planting, &EnvironmentFactors::neutral()),
            Err(YieldError::MissingSalePrice {
                plant: "squash".to_owned()
            })
        );
    }

    #[test]
    fn profit_is_revenue_minus_cost() {
        let planting = CropPlanting::new(priced_corn(), dec!(10));
        let env = EnvironmentFactors::neutral();
        assert_eq!(crop_revenue(&planting, &env), Ok(dec!(60)));
        assert_eq!(crop_profit(&planting, &env), Ok(dec!(50)));
    }

    #[test]
    fn empty_farm_totals_are_zero() {
        let farm = Farm::default();
        let env = EnvironmentFactors::neutral();
        assert_eq!(farm_yield(&farm, &env), Ok(Decimal::ZERO));
        assert_eq!(farm_cost(&farm), Ok(Decimal::ZERO));
        assert_eq!(farm_revenue(&farm, &env), Ok(Decimal::ZERO));
        assert_eq!(farm_profit(&farm, &env), Ok(Decimal::ZERO));
    }

    #[test]
    fn overflow_is_reported() {
        let planting = CropPlanting::new(Plant::new("giant", Decimal::MAX), dec!(2));
        assert_eq!(
            crop_yield(&planting, &EnvironmentFactors::neutral()),
            Err(YieldError::ArithmeticOverflow)
        );
    }
}
