//! Farm definitions loaded from YAML.
//!
//! A definition names a catalog of plants, the plantings that reference them,
//! and optionally the current environment:
//!
//! ```yaml
//! plants:
//!   corn:
//!     yield: 3
//!     cost: 1
//!     sale_price: 2
//!     factor:
//!       sun: { low: -50, medium: 0, high: 50 }
//! plantings:
//!   - plant: corn
//!     num_crops: 5
//! environment:
//!   sun: medium
//! ```
//!
//! The catalog key is the plant's name; a `name` field inside the entry is
//! overwritten by it.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use harvest_types::{CropPlanting, EnvironmentFactors, Farm, Plant};

/// Errors that can occur when loading a farm definition.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the definition file from disk.
    #[error("failed to read farm definition: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse farm definition YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A planting references a plant missing from the catalog.
    #[error("planting {index} references unknown plant {plant}")]
    UnknownPlant {
        /// Position of the planting in the definition.
        index: usize,
        /// The unresolved plant name.
        plant: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// A planting as written in a definition: a plant name and a count.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlantingEntry {
    /// Catalog key of the planted species.
    pub plant: String,
    /// How many units were planted.
    #[serde(alias = "numCrops")]
    pub num_crops: Decimal,
}

/// A plant catalog, the plantings drawn from it, and the current conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FarmDefinition {
    /// Plants keyed by name.
    #[serde(default)]
    pub plants: BTreeMap<String, Plant>,

    /// Plantings in farm order.
    #[serde(default)]
    pub plantings: Vec<PlantingEntry>,

    /// Active conditions; neutral when omitted.
    #[serde(default)]
    pub environment: EnvironmentFactors,
}

impl FarmDefinition {
    /// Load a farm definition from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not a valid definition.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a farm definition from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not a valid definition.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut definition: Self = serde_yml::from_str(yaml)?;
        for (name, plant) in &mut definition.plants {
            plant.name.clone_from(name);
        }

        tracing::info!(
            plants = definition.plants.len(),
            plantings = definition.plantings.len(),
            dimensions = definition.environment.len(),
            "Loaded farm definition"
        );
        Ok(definition)
    }

    /// Resolve the plantings against the catalog into a [`Farm`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPlant`] for the first planting whose
    /// plant is not in the catalog.
    pub fn farm(&self) -> Result<Farm, ConfigError> {
        self.plantings
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let Some(plant) = self.plants.get(&entry.plant) else {
                    tracing::warn!(index, plant = %entry.plant, "Planting references unknown plant");
                    return Err(ConfigError::UnknownPlant {
                        index,
                        plant: entry.plant.clone(),
                    });
                };
                Ok(CropPlanting::new(plant.clone(), entry.num_crops))
            })
            .collect()
    }
}
