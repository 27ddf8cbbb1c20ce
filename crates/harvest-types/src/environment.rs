//! Environmental conditions and per-plant sensitivity tables.
//!
//! An environment is described along named dimensions (`sun`, `wind`, ...),
//! each set to a named condition level (`low`, `medium`, `high`, ...). A plant
//! declares, per dimension and level, a signed percentage adjustment to its
//! base yield:
//!
//! | Dimension | low | medium | high |
//! |-----------|-----|--------|------|
//! | sun       | -50 |      0 |  +50 |
//! | wind      |   0 |    -30 |  -60 |
//!
//! Both maps are ordered (`BTreeMap`) so iteration is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Percentage adjustments keyed by condition level, for one dimension.
pub type LevelAdjustments = BTreeMap<String, i32>;

// ---------------------------------------------------------------------------
// FactorTable
// ---------------------------------------------------------------------------

/// A plant's environmental sensitivity: dimension -> level -> percentage.
///
/// An empty table describes a plant that declares no sensitivity at all.
/// Looking up any dimension in it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorTable(BTreeMap<String, LevelAdjustments>);

impl FactorTable {
    /// Create an empty factor table.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert (or replace) the level adjustments for a dimension.
    pub fn insert<D, I, L>(&mut self, dimension: D, levels: I)
    where
        D: Into<String>,
        I: IntoIterator<Item = (L, i32)>,
        L: Into<String>,
    {
        let levels = levels
            .into_iter()
            .map(|(level, percent)| (level.into(), percent))
            .collect();
        self.0.insert(dimension.into(), levels);
    }

    /// Return the level adjustments declared for a dimension, if any.
    pub fn levels(&self, dimension: &str) -> Option<&LevelAdjustments> {
        self.0.get(dimension)
    }

    /// Return the adjustment for a `(dimension, level)` pair, if declared.
    pub fn adjustment(&self, dimension: &str, level: &str) -> Option<i32> {
        self.levels(dimension)?.get(level).copied()
    }

    /// Iterate over the declared dimensions in name order.
    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Whether the table declares no dimensions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// EnvironmentFactors
// ---------------------------------------------------------------------------

/// The active condition level for each environmental dimension.
///
/// The empty mapping (the [`Default`]) means neutral conditions: no
/// adjustment is applied to any plant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentFactors(BTreeMap<String, String>);

impl EnvironmentFactors {
    /// Neutral conditions.
    pub const fn neutral() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the level of a dimension, replacing any previous level.
    #[must_use]
    pub fn with(mut self, dimension: impl Into<String>, level: impl Into<String>) -> Self {
        self.0.insert(dimension.into(), level.into());
        self
    }

    /// Return the active level for a dimension, if set.
    pub fn level(&self, dimension: &str) -> Option<&str> {
        self.0.get(dimension).map(String::as_str)
    }

    /// Iterate over `(dimension, level)` pairs in dimension-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(dimension, level)| (dimension.as_str(), level.as_str()))
    }

    /// Number of dimensions set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether these are neutral conditions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<D, L> FromIterator<(D, L)> for EnvironmentFactors
where
    D: Into<String>,
    L: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (D, L)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(dimension, level)| (dimension.into(), level.into()))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
