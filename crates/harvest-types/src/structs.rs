//! Plant templates, plantings, and farms.
//!
//! Field names serialize in `snake_case`; the `camelCase` spellings used by
//! hand-written farm data (`salePrice`, `numCrops`) are accepted as aliases.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::environment::FactorTable;

// ---------------------------------------------------------------------------
// Plant
// ---------------------------------------------------------------------------

/// A species template: base yield, economics, and environmental sensitivity.
///
/// `cost` and `sale_price` are optional because yield-only calculations never
/// read them. A plant with an empty [`FactorTable`] only supports neutral
/// conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    /// Identifier of the species (e.g. `corn`).
    #[serde(default)]
    pub name: String,
    /// Yield per planted unit under neutral conditions.
    #[serde(rename = "yield")]
    pub base_yield: Decimal,
    /// Cost per planted unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    /// Revenue per unit of yield.
    #[serde(default, alias = "salePrice", skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    /// Percentage yield adjustments per environmental dimension and level.
    #[serde(default, skip_serializing_if = "FactorTable::is_empty")]
    pub factor: FactorTable,
}

impl Plant {
    /// Create a plant with a base yield and no cost, price, or factors.
    pub fn new(name: impl Into<String>, base_yield: Decimal) -> Self {
        Self {
            name: name.into(),
            base_yield,
            cost: None,
            sale_price: None,
            factor: FactorTable::new(),
        }
    }

    /// Set the cost per planted unit.
    #[must_use]
    pub const fn with_cost(mut self, cost: Decimal) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the sale price per unit of yield.
    #[must_use]
    pub const fn with_sale_price(mut self, sale_price: Decimal) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Declare the percentage adjustments for one environmental dimension.
    #[must_use]
    pub fn with_factor<I, L>(mut self, dimension: impl Into<String>, levels: I) -> Self
    where
        I: IntoIterator<Item = (L, i32)>,
        L: Into<String>,
    {
        self.factor.insert(dimension, levels);
        self
    }
}

// ---------------------------------------------------------------------------
// CropPlanting
// ---------------------------------------------------------------------------

/// A quantity of one plant actually planted.
///
/// `num_crops` is not validated: zero is a legitimate empty planting and
/// negative counts flow through the arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropPlanting {
    /// The planted species.
    pub crop: Plant,
    /// How many units were planted.
    #[serde(alias = "numCrops")]
    pub num_crops: Decimal,
}

impl CropPlanting {
    /// Plant `num_crops` units of `crop`.
    pub const fn new(crop: Plant, num_crops: Decimal) -> Self {
        Self { crop, num_crops }
    }
}

// ---------------------------------------------------------------------------
// Farm
// ---------------------------------------------------------------------------

/// A collection of plantings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farm {
    /// Plantings in insertion order.
    #[serde(default)]
    pub crops: Vec<CropPlanting>,
}

impl Farm {
    /// Create a farm from its plantings.
    pub const fn new(crops: Vec<CropPlanting>) -> Self {
        Self { crops }
    }

    /// Iterate over the plantings.
    pub fn plantings(&self) -> std::slice::Iter<'_, CropPlanting> {
        self.crops.iter()
    }

    /// Number of plantings.
    pub fn len(&self) -> usize {
        self.crops.len()
    }

    /// Whether the farm has no plantings.
    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl FromIterator<CropPlanting> for Farm {
    fn from_iter<T: IntoIterator<Item = CropPlanting>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let corn = Plant::new("corn", dec!(3))
            .with_cost(dec!(1))
            .with_sale_price(dec!(2))
            .with_factor("sun", [("low", -50), ("medium", 0), ("high", 50)]);

        assert_eq!(corn.name, "corn");
        assert_eq!(corn.base_yield, dec!(3));
        assert_eq!(corn.cost, Some(dec!(1)));
        assert_eq!(corn.sale_price, Some(dec!(2)));
        assert_eq!(corn.factor.adjustment("sun", "high"), Some(50));
    }

    #[test]
    fn plant_without_optional_fields_deserializes() {
        let parsed: Result<Plant, _> = serde_json::from_str(r#"{"name":"corn","yield":3}"#);
        assert!(parsed.is_ok());
        let corn = parsed.unwrap_or_else(|_| Plant::new("", Decimal::ZERO));
        assert_eq!(corn.base_yield, dec!(3));
        assert!(corn.cost.is_none());
        assert!(corn.sale_price.is_none());
        assert!(corn.factor.is_empty());
    }

    #[test]
    fn camel_case_fields_are_accepted() {
        let json = r#"{
            "crop": {
                "name": "corn",
                "yield": 3,
                "cost": 1,
                "salePrice": 2,
                "factor": { "sun": { "low": -50, "medium": 0, "high": 50 } }
            },
            "numCrops": 10
        }"#;
        let parsed: Result<CropPlanting, _> = serde_json::from_str(json);
        assert!(parsed.is_ok());
        let planting =
            parsed.unwrap_or_else(|_| CropPlanting::new(Plant::new("", Decimal::ZERO), Decimal::ZERO));
        assert_eq!(planting.num_crops, dec!(10));
        assert_eq!(planting.crop.sale_price, Some(dec!(2)));
        assert_eq!(planting.crop.factor.adjustment("sun", "low"), Some(-50));
    }

    #[test]
    fn farm_collects_plantings_in_order() {
        let farm: Farm = [
            CropPlanting::new(Plant::new("corn", dec!(3)), dec!(5)),
            CropPlanting::new(Plant::new("pumpkin", dec!(4)), dec!(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(farm.len(), 2);
        let names: Vec<&str> = farm.plantings().map(|p| p.crop.name.as_str()).collect();
        assert_eq!(names, vec!["corn", "pumpkin"]);
        assert!(Farm::default().is_empty());
    }
}
