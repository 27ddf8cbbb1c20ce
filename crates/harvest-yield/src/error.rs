//! Error types for the `harvest-yield` crate.
//!
//! Every calculation returns [`YieldError`] instead of letting an undeclared
//! factor or a missing price leak into the result as a meaningless number.

/// Errors that can occur while computing yields, costs, revenue, or profit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YieldError {
    /// The environment sets a dimension the plant declares no factors for.
    #[error("plant {plant} declares no factors for environment dimension {dimension}")]
    UnknownDimension {
        /// The plant being evaluated.
        plant: String,
        /// The undeclared dimension.
        dimension: String,
    },

    /// The environment sets a level the plant's dimension does not declare.
    #[error("plant {plant} declares no {dimension} factor for level {level}")]
    UnknownLevel {
        /// The plant being evaluated.
        plant: String,
        /// The dimension whose table was consulted.
        dimension: String,
        /// The undeclared level.
        level: String,
    },

    /// A cost calculation reached a plant without a cost.
    #[error("plant {plant} has no cost")]
    MissingCost {
        /// The plant without a cost.
        plant: String,
    },

    /// A revenue calculation reached a plant without a sale price.
    #[error("plant {plant} has no sale price")]
    MissingSalePrice {
        /// The plant without a sale price.
        plant: String,
    },

    /// Decimal overflow during a checked operation.
    #[error("arithmetic overflow in yield calculation")]
    ArithmeticOverflow,
}
