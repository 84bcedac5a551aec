//! Renoplan Types
//!
//! This crate defines the shared value and context types used throughout the
//! Renoplan ecosystem (currently `renoplan-core` and `renoplan-calculator`).
//! It provides the `ContextValue` tagged union and the `CalculationContext`
//! a residence's derived properties are supplied in, and eliminates circular
//! dependencies between crates.

#![deny(warnings)]
#![deny(missing_docs)]

mod context;
mod value;

pub use context::CalculationContext;
pub use value::ContextValue;
