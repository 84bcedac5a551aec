#![deny(warnings)]
//! The calculation engine for Renoplan retrofit cost estimation.
//!
//! This crate turns user-authored price formulas into priced line items. A
//! formula is an ordered sequence of variable and operator tokens; variables
//! resolve against a residence's [`CalculationContext`], the expression is
//! evaluated with standard arithmetic precedence, and the resulting quantity
//! is multiplied by a flat or per-residence-type unit price. Maintenance
//! lines additionally project over a 40-year horizon with inflation
//! compounding.
//!
//! The engine is pure and reentrant: every public function is a function of
//! its inputs, holds no shared state, and returns a structured result with
//! an explicit validity flag instead of propagating errors.

pub mod evaluator;
pub mod line;
pub mod maintenance;
pub mod resolver;
pub mod types;

pub use evaluator::{Evaluation, evaluate};
pub use line::{calculate_line, calculate_measure_price};
pub use maintenance::{HORIZON_YEARS, project, project_lines};
pub use renoplan_types::{CalculationContext, ContextValue};
pub use types::{
    AggregateResult, BinaryOp, CalcError, CalcStep, CalcToken, LineResult, MaintenanceLineItem,
    MaintenanceProjection, PriceLineItem, PricesPerType, ResidenceCategory,
};
