//! Per-line price calculation and the measure-level aggregate.

use crate::evaluator;
use crate::types::{AggregateResult, LineResult, PriceLineItem, ResidenceCategory};
use renoplan_types::CalculationContext;

/// Select the unit price for a line.
///
/// Under split pricing the per-type table is consulted first, keyed by a
/// case-insensitive substring match on the residence type label; an empty
/// slot falls back to the flat price. Without split pricing the flat price
/// applies directly. A line with no price at all prices at `0`.
pub fn select_unit_price(item: &PriceLineItem, residence_type: &str, split_prices: bool) -> f64 {
    if split_prices {
        if let Some(prices) = &item.prices_per_type {
            let category = ResidenceCategory::from_label(residence_type);
            if let Some(price) = prices.for_category(category) {
                return price;
            }
        }
    }
    item.price.unwrap_or(0.0)
}

/// Calculate one price line: evaluate the quantity formula and price it.
///
/// A failed evaluation yields a zeroed, invalid result carrying the error;
/// the selected unit price is still reported so the UI can show what the
/// line would have cost per unit.
pub fn calculate_line(
    item: &PriceLineItem,
    context: &CalculationContext,
    residence_type: &str,
    split_prices: bool,
) -> LineResult {
    let unit_price = select_unit_price(item, residence_type, split_prices);
    let evaluation = evaluator::evaluate(&item.calculation, context);

    match evaluation.error {
        Some(error) => LineResult {
            name: item.name.clone(),
            unit: item.unit.clone(),
            unit_price,
            quantity: 0.0,
            total_price: 0.0,
            steps: evaluation.steps,
            is_valid: false,
            error: Some(error),
        },
        None => LineResult {
            name: item.name.clone(),
            unit: item.unit.clone(),
            unit_price,
            quantity: evaluation.value,
            total_price: evaluation.value * unit_price,
            steps: evaluation.steps,
            is_valid: true,
            error: None,
        },
    }
}

/// Calculate all price lines of a measure and aggregate them.
///
/// This is the primary entry point, called once for a measure's investment
/// lines and once for its maintenance lines. An empty item list or an empty
/// context is the normal "nothing to compute" condition, not an error. A
/// failed line contributes `0` to the total and its message to the warning
/// log; sibling lines are unaffected.
pub fn calculate_measure_price(
    items: &[PriceLineItem],
    context: &CalculationContext,
    residence_type: &str,
    split_prices: bool,
) -> AggregateResult {
    if items.is_empty() || context.is_empty() {
        return AggregateResult::no_input();
    }

    let calculations: Vec<LineResult> = items
        .iter()
        .map(|item| calculate_line(item, context, residence_type, split_prices))
        .collect();

    let mut price = 0.0;
    let mut warning_log = Vec::new();
    for line in &calculations {
        if line.is_valid {
            price += line.total_price;
        } else if let Some(error) = &line.error {
            warning_log.push(format!("{}: {}", line.name, error));
        }
    }

    let is_valid = calculations.iter().all(|line| line.is_valid);
    let error_message =
        if warning_log.is_empty() { None } else { Some(warning_log.join("; ")) };

    AggregateResult { price, calculations, is_valid, error_message, warning_log }
}
