//! Calculation configuration.
//!
//! One explicit struct, passed into the engine, replaces settings reads
//! scattered across calculation sites. The engine never fetches
//! configuration itself.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Numeric configuration the calculation engine operates under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSettings {
    /// Hourly labor cost in euros; exposed to formulas as `uurloon`.
    pub hourly_labor_cost: f64,
    /// Annual inflation applied to maintenance occurrences, in percent.
    pub inflation_percent: f64,
    /// VAT rate applied to the project investment total, in percent.
    pub vat_percent: f64,
    /// Contractor markup applied to the net investment total, in percent.
    pub markup_percent: f64,
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self {
            hourly_labor_cost: 45.0,
            inflation_percent: 2.0,
            vat_percent: 21.0,
            markup_percent: 0.0,
        }
    }
}

impl CalculationSettings {
    /// Validate that the configuration can be calculated with.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.hourly_labor_cost.is_finite() || self.hourly_labor_cost < 0.0 {
            return Err(EngineError::configuration(
                "hourly labor cost must be a non-negative number",
                "hourlyLaborCost",
            ));
        }
        if !self.inflation_percent.is_finite() || self.inflation_percent <= -100.0 {
            return Err(EngineError::configuration(
                "inflation percentage must be a finite value above -100",
                "inflationPercent",
            ));
        }
        if !self.vat_percent.is_finite() || self.vat_percent < 0.0 {
            return Err(EngineError::configuration(
                "VAT percentage must be a non-negative number",
                "vatPercent",
            ));
        }
        if !self.markup_percent.is_finite() || self.markup_percent < 0.0 {
            return Err(EngineError::configuration(
                "markup percentage must be a non-negative number",
                "markupPercent",
            ));
        }
        Ok(())
    }
}
