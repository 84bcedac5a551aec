//! Cross-measure aggregation into project-level totals.

use crate::measure::MeasureOutcome;
use crate::settings::CalculationSettings;
use serde::Serialize;
use tracing::{info, instrument};

/// Project-level totals over a set of calculated measures.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// Net investment over all valid measures.
    pub investment_total: f64,
    /// Net investment with the contractor markup applied.
    pub investment_with_markup: f64,
    /// Marked-up investment with VAT on top.
    pub investment_including_vat: f64,
    /// Total heat-demand reduction over all valid measures.
    pub heat_demand_total: f64,
    /// Maintenance cost over the 40-year horizon, all measures.
    pub maintenance_total_40_years: f64,
    /// Straight-line yearly average of the 40-year maintenance cost.
    pub maintenance_per_year: f64,
    /// Warnings collected from all measures, prefixed with the measure name.
    pub warning_log: Vec<String>,
}

/// Roll calculated measures up into project totals.
///
/// An invalid measure contributes 0 to the investment and heat-demand
/// totals but stays in the outcome list; one broken measure never blocks
/// the totals of the others. Maintenance projections need no gate here:
/// invalid lines already project to zero per line.
#[instrument(skip(outcomes, settings), fields(measure_count = outcomes.len()))]
pub fn summarize(outcomes: &[MeasureOutcome], settings: &CalculationSettings) -> ProjectSummary {
    let mut summary = ProjectSummary::default();

    for outcome in outcomes {
        if outcome.is_valid() {
            summary.investment_total += outcome.investment.price;
            summary.heat_demand_total += outcome.heat_demand;
        }
        summary.maintenance_total_40_years += outcome.maintenance_40_years.total_40_years;
        summary.maintenance_per_year += outcome.maintenance_40_years.per_year;

        for warning in outcome
            .investment
            .warning_log
            .iter()
            .chain(outcome.maintenance.warning_log.iter())
        {
            summary.warning_log.push(format!("{}: {}", outcome.name, warning));
        }
    }

    summary.investment_with_markup =
        summary.investment_total * (1.0 + settings.markup_percent / 100.0);
    summary.investment_including_vat =
        summary.investment_with_markup * (1.0 + settings.vat_percent / 100.0);

    info!(
        investment_total = summary.investment_total,
        heat_demand_total = summary.heat_demand_total,
        warning_count = summary.warning_log.len(),
        "Summarized project totals"
    );

    summary
}
