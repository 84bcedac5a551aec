//! The measure calculation engine facade.

use crate::measure::{Measure, MeasureOutcome};
use crate::settings::CalculationSettings;
use anyhow::Result;
use rayon::prelude::*;
use renoplan_calculator::{calculate_measure_price, project_lines};
use renoplan_types::CalculationContext;
use tracing::{debug, info, instrument};

/// Context key formulas use to reference the configured hourly labor cost.
const UURLOON: &str = "uurloon";

/// Main engine for calculating measures against a residence context.
///
/// The engine is stateless apart from its configuration: every calculation
/// is a pure function of its inputs, so one engine can serve concurrent
/// calculations for independent residences.
pub struct RenoplanEngine {
    settings: CalculationSettings,
}

impl RenoplanEngine {
    /// Create a new engine instance with default settings.
    #[instrument]
    pub fn new() -> Result<Self> {
        info!("Creating new Renoplan engine");
        Ok(Self { settings: CalculationSettings::default() })
    }

    /// Create an engine with explicit settings.
    #[instrument]
    pub fn with_settings(settings: CalculationSettings) -> Result<Self> {
        settings.validate()?;
        info!(
            inflation_percent = settings.inflation_percent,
            vat_percent = settings.vat_percent,
            "Creating Renoplan engine with settings"
        );
        Ok(Self { settings })
    }

    /// The configuration this engine calculates under.
    pub fn settings(&self) -> &CalculationSettings {
        &self.settings
    }

    /// Calculate one measure for one residence/type combination.
    #[instrument(skip(self, measure, context), fields(measure_id = %measure.id))]
    pub fn calculate_measure(
        &self,
        measure: &Measure,
        context: &CalculationContext,
        residence_type: &str,
        split_prices: bool,
    ) -> MeasureOutcome {
        let context = self.enrich_context(context);
        self.calculate_prepared(measure, &context, residence_type, split_prices)
    }

    /// Calculate a batch of measures for one residence/type combination.
    ///
    /// Measures are independent of one another, so the batch maps over them
    /// in parallel; results come back in input order.
    #[instrument(skip(self, measures, context), fields(measure_count = measures.len()))]
    pub fn calculate_measures(
        &self,
        measures: &[Measure],
        context: &CalculationContext,
        residence_type: &str,
        split_prices: bool,
    ) -> Vec<MeasureOutcome> {
        let context = self.enrich_context(context);
        let outcomes: Vec<MeasureOutcome> = measures
            .par_iter()
            .map(|measure| self.calculate_prepared(measure, &context, residence_type, split_prices))
            .collect();

        info!(
            measure_count = measures.len(),
            valid_count = outcomes.iter().filter(|o| o.is_valid()).count(),
            "Completed measure batch calculation"
        );

        outcomes
    }

    fn calculate_prepared(
        &self,
        measure: &Measure,
        context: &CalculationContext,
        residence_type: &str,
        split_prices: bool,
    ) -> MeasureOutcome {
        let investment =
            calculate_measure_price(&measure.measure_prices, context, residence_type, split_prices);

        let maintenance_items: Vec<_> =
            measure.mjob_prices.iter().map(|job| job.item.clone()).collect();
        let mut maintenance =
            calculate_measure_price(&maintenance_items, context, residence_type, split_prices);

        let (maintenance_40_years, pairing_warnings) = project_lines(
            &maintenance.calculations,
            &measure.mjob_prices,
            self.settings.inflation_percent,
        );
        maintenance.warning_log.extend(pairing_warnings);

        debug!(
            measure_id = %measure.id,
            investment_price = investment.price,
            maintenance_price = maintenance.price,
            investment_valid = investment.is_valid,
            "Calculated measure"
        );

        MeasureOutcome {
            measure_id: measure.id.clone(),
            name: measure.name.clone(),
            investment,
            maintenance,
            maintenance_40_years,
            heat_demand: measure.heat_demand,
        }
    }

    /// Copy the caller's context and merge the configured labor cost in
    /// under `uurloon`, unless the caller already supplied that key. The
    /// caller's context itself is never mutated. An empty context stays
    /// empty so it still reports as "nothing to compute".
    fn enrich_context(&self, context: &CalculationContext) -> CalculationContext {
        let mut enriched = context.clone();
        if !enriched.is_empty() && !enriched.contains_key(UURLOON) {
            enriched.insert(UURLOON, self.settings.hourly_labor_cost);
        }
        enriched
    }
}
