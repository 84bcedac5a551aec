//! Maintenance amortization over the 40-year planning horizon.
//!
//! A maintenance job recurs every `cycle` years starting at `cycle_start`.
//! Each occurrence is inflated by the annual inflation rate compounded over
//! the absolute elapsed years from project start (year 0) — not relative to
//! the previous occurrence.

use crate::types::{LineResult, MaintenanceLineItem, MaintenanceProjection};

/// The fixed planning horizon all maintenance projections use, in years.
pub const HORIZON_YEARS: i32 = 40;

/// Project one maintenance line over the horizon.
///
/// An invalid line result, a non-positive cycle, or a first occurrence at or
/// beyond the horizon all disable recurrence and project to zero.
pub fn project(
    line: &LineResult,
    meta: &MaintenanceLineItem,
    inflation_percent: f64,
) -> MaintenanceProjection {
    if !line.is_valid || meta.cycle <= 0 || meta.cycle_start >= HORIZON_YEARS {
        return MaintenanceProjection::default();
    }

    let growth = 1.0 + inflation_percent / 100.0;
    let mut total = 0.0;
    let mut year = meta.cycle_start.max(0);
    while year < HORIZON_YEARS {
        total += line.total_price * growth.powi(year);
        year += meta.cycle;
    }

    MaintenanceProjection { total_40_years: total, per_year: total / f64::from(HORIZON_YEARS) }
}

/// Project a set of calculated maintenance lines against their items.
///
/// Results pair with items by position, with a name check against stale or
/// reordered data: a mismatch skips that line's contribution and records a
/// data-integrity warning instead of failing the projection.
pub fn project_lines(
    results: &[LineResult],
    items: &[MaintenanceLineItem],
    inflation_percent: f64,
) -> (MaintenanceProjection, Vec<String>) {
    let mut projection = MaintenanceProjection::default();
    let mut warnings = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let Some(line) = results.get(index) else {
            warnings.push(format!(
                "no calculated result for maintenance line '{}'",
                item.item.name
            ));
            continue;
        };
        if line.name != item.item.name {
            warnings.push(format!(
                "maintenance line '{}' does not match calculated result '{}'; skipped",
                item.item.name, line.name
            ));
            continue;
        }
        let line_projection = project(line, item, inflation_percent);
        projection.total_40_years += line_projection.total_40_years;
        projection.per_year += line_projection.per_year;
    }

    (projection, warnings)
}
