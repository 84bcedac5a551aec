//! Measure input records and per-measure calculation outcomes.

use renoplan_calculator::{
    AggregateResult, MaintenanceLineItem, MaintenanceProjection, PriceLineItem,
};
use serde::{Deserialize, Serialize};

/// A retrofit measure as loaded from the document store: investment price
/// lines, maintenance job lines, and the externally looked-up heat-demand
/// reduction for the residence type and construction period at hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    /// Document identifier.
    pub id: String,
    /// Display name, e.g. "Dak isoleren".
    pub name: String,
    /// Investment price lines.
    #[serde(default)]
    pub measure_prices: Vec<PriceLineItem>,
    /// Maintenance job lines, each carrying its own recurrence metadata.
    #[serde(default)]
    pub mjob_prices: Vec<MaintenanceLineItem>,
    /// Heat-demand reduction value; the lookup by residence type and
    /// construction period happens in the calling application.
    #[serde(default)]
    pub heat_demand: f64,
}

/// Everything the estimation screens need to render one calculated measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureOutcome {
    /// Identifier of the calculated measure.
    pub measure_id: String,
    /// Name of the calculated measure.
    pub name: String,
    /// Aggregated investment lines.
    pub investment: AggregateResult,
    /// Aggregated maintenance lines, priced per single occurrence.
    pub maintenance: AggregateResult,
    /// Maintenance expanded over the 40-year horizon.
    pub maintenance_40_years: MaintenanceProjection,
    /// Heat-demand reduction, copied from the measure input.
    pub heat_demand: f64,
}

impl MeasureOutcome {
    /// Measure-local validity: the budget totals are driven by the
    /// investment lines, so that aggregate decides.
    pub fn is_valid(&self) -> bool {
        self.investment.is_valid
    }
}
