//! Per-planting and whole-farm financial breakdowns.
//!
//! A summary evaluates yield, cost, revenue, and profit once per planting and
//! carries the farm totals alongside. Totals always agree with
//! [`farm_yield`](crate::farm_yield), [`farm_cost`](crate::farm_cost),
//! [`farm_revenue`](crate::farm_revenue), and
//! [`farm_profit`](crate::farm_profit) for the same inputs.

use rust_decimal::Decimal;
use serde::Serialize;

use harvest_types::{CropPlanting, EnvironmentFactors, Farm};

use crate::calculator::{crop_cost, crop_yield, revenue_for_yield};
use crate::error::YieldError;

/// Figures for a single planting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropSummary {
    /// Name of the planted species.
    pub plant: String,
    /// Units planted.
    pub num_crops: Decimal,
    /// Harvested yield.
    pub crop_yield: Decimal,
    /// Planting cost.
    pub cost: Decimal,
    /// Sale revenue of the yield.
    pub revenue: Decimal,
    /// Revenue minus cost.
    pub profit: Decimal,
}

/// Figures for every planting on a farm, plus totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FarmSummary {
    /// One entry per planting, in farm order.
    pub crops: Vec<CropSummary>,
    /// Sum of all planting yields.
    pub total_yield: Decimal,
    /// Sum of all planting costs.
    pub total_cost: Decimal,
    /// Sum of all planting revenues.
    pub total_revenue: Decimal,
    /// Sum of all planting profits.
    pub total_profit: Decimal,
}

/// Summarize one planting under `environment`.
///
/// Requires the plant to carry both a cost and a sale price.
pub fn crop_summary(
    planting: &CropPlanting,
    environment: &EnvironmentFactors,
) -> Result<CropSummary, YieldError> {
    let harvested = crop_yield(planting, environment)?;
    let cost = crop_cost(planting)?;
    let revenue = revenue_for_yield(planting, harvested)?;
    let profit = revenue
        .checked_sub(cost)
        .ok_or(YieldError::ArithmeticOverflow)?;

    Ok(CropSummary {
        plant: planting.crop.name.clone(),
        num_crops: planting.num_crops,
        crop_yield: harvested,
        cost,
        revenue,
        profit,
    })
}

/// Summarize every planting on `farm` under `environment`.
pub fn farm_summary(farm: &Farm, environment: &EnvironmentFactors) -> Result<FarmSummary, YieldError> {
    let mut summary = FarmSummary {
        crops: Vec::with_capacity(farm.len()),
        ..FarmSummary::default()
    };

    for planting in farm.plantings() {
        let crop = crop_summary(planting, environment)?;
        summary.total_yield = checked_total(summary.total_yield, crop.crop_yield)?;
        summary.total_cost = checked_total(summary.total_cost, crop.cost)?;
        summary.total_revenue = checked_total(summary.total_revenue, crop.revenue)?;
        summary.total_profit = checked_total(summary.total_profit, crop.profit)?;
        summary.crops.push(crop);
    }

    tracing::debug!(
        crops = summary.crops.len(),
        total_yield = %summary.total_yield,
        total_profit = %summary.total_profit,
        "Summarized farm"
    );
    Ok(summary)
}

fn checked_total(total: Decimal, value: Decimal) -> Result<Decimal, YieldError> {
    total
        .checked_add(value)
        .ok_or(YieldError::ArithmeticOverflow)
}
