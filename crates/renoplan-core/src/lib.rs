#![deny(warnings)]
#![allow(missing_docs)]
//! Core functionality for the Renoplan retrofit cost estimator.
//!
//! This crate ties the calculation engine together at the measure level: it
//! takes measure records (investment and maintenance price lines) and a
//! residence's calculation context, produces per-measure outcomes, and
//! aggregates outcomes into the project-level totals the estimation screens
//! display.

/// Engine facade for per-measure and batch calculation
pub mod engine;
/// Structured error types for engine-level operations
pub mod error;
/// Measure input records and per-measure outcomes
pub mod measure;
/// Explicit calculation configuration
pub mod settings;
/// Cross-measure aggregation into project totals
pub mod summary;

// Re-export critical types for the application layer
pub use engine::RenoplanEngine;
pub use error::EngineError;
pub use measure::{Measure, MeasureOutcome};
pub use renoplan_calculator::{
    AggregateResult, BinaryOp, CalcError, CalcStep, CalcToken, LineResult, MaintenanceLineItem,
    MaintenanceProjection, PriceLineItem, PricesPerType, ResidenceCategory,
};
pub use renoplan_types::{CalculationContext, ContextValue};
pub use settings::CalculationSettings;
pub use summary::{ProjectSummary, summarize};
