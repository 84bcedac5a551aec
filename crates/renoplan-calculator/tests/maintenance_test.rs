use renoplan_calculator::{
    CalcToken, CalculationContext, LineResult, MaintenanceLineItem, PriceLineItem,
    calculate_measure_price, project, project_lines,
};

fn paint_item(cycle_start: i32, cycle: i32) -> MaintenanceLineItem {
    MaintenanceLineItem {
        item: PriceLineItem {
            name: "Schilderwerk".to_string(),
            unit: "m2".to_string(),
            calculation: vec![CalcToken::variable("gevelOppervlak")],
            price: Some(10.0),
            prices_per_type: None,
        },
        cycle_start,
        cycle,
    }
}

fn context() -> CalculationContext {
    let mut context = CalculationContext::new();
    context.insert("gevelOppervlak", 10.0);
    context
}

/// Calculate the single-occurrence line result for an item (total 100 here).
fn line_for(item: &MaintenanceLineItem) -> LineResult {
    let result =
        calculate_measure_price(std::slice::from_ref(&item.item), &context(), "Eengezins", false);
    result.calculations.into_iter().next().unwrap()
}

#[test]
fn recurrence_without_inflation_counts_occurrences() {
    let item = paint_item(0, 10);
    let line = line_for(&item);
    assert_eq!(line.total_price, 100.0);

    // occurrences at years 0, 10, 20, 30
    let projection = project(&line, &item, 0.0);
    assert_eq!(projection.total_40_years, 400.0);
    assert_eq!(projection.per_year, 10.0);
}

#[test]
fn inflation_compounds_from_project_start() {
    let item = paint_item(0, 10);
    let line = line_for(&item);

    let projection = project(&line, &item, 2.0);
    let expected = 100.0
        * (1.02f64.powi(0) + 1.02f64.powi(10) + 1.02f64.powi(20) + 1.02f64.powi(30));
    assert!((projection.total_40_years - expected).abs() < 1e-9);
    assert!((projection.per_year - expected / 40.0).abs() < 1e-9);
}

#[test]
fn cycle_start_offsets_the_first_occurrence() {
    let item = paint_item(5, 10);
    let line = line_for(&item);

    // occurrences at years 5, 15, 25, 35
    let projection = project(&line, &item, 0.0);
    assert_eq!(projection.total_40_years, 400.0);

    let item = paint_item(39, 10);
    let projection = project(&line_for(&item), &item, 0.0);
    assert_eq!(projection.total_40_years, 100.0);
}

#[test]
fn recurrence_disables_outside_the_horizon() {
    let item = paint_item(40, 10);
    let projection = project(&line_for(&item), &item, 2.0);
    assert_eq!(projection.total_40_years, 0.0);
    assert_eq!(projection.per_year, 0.0);

    let item = paint_item(0, 0);
    let projection = project(&line_for(&item), &item, 2.0);
    assert_eq!(projection.total_40_years, 0.0);

    let item = paint_item(0, -5);
    let projection = project(&line_for(&item), &item, 2.0);
    assert_eq!(projection.total_40_years, 0.0);
}

#[test]
fn invalid_lines_project_to_zero() {
    let item = paint_item(0, 10);
    let mut line = line_for(&item);
    line.is_valid = false;
    let projection = project(&line, &item, 0.0);
    assert_eq!(projection.total_40_years, 0.0);
}

#[test]
fn projection_sums_across_lines() {
    let paint = paint_item(0, 10);
    let mut gutters = paint_item(0, 20);
    gutters.item.name = "Goten vervangen".to_string();

    let lines = vec![line_for(&paint), line_for(&gutters)];
    let (projection, warnings) = project_lines(&lines, &[paint, gutters], 0.0);
    assert!(warnings.is_empty());
    // 4 occurrences of 100 plus 2 occurrences of 100
    assert_eq!(projection.total_40_years, 600.0);
    assert_eq!(projection.per_year, 15.0);
}

#[test]
fn name_mismatch_skips_the_line_with_a_warning() {
    let paint = paint_item(0, 10);
    let mut stale = line_for(&paint);
    stale.name = "Verouderde naam".to_string();

    let (projection, warnings) = project_lines(&[stale], &[paint.clone()], 0.0);
    assert_eq!(projection.total_40_years, 0.0);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Schilderwerk"));
    assert!(warnings[0].contains("Verouderde naam"));

    // a missing result row is the same kind of data-integrity problem
    let (projection, warnings) = project_lines(&[], &[paint], 0.0);
    assert_eq!(projection.total_40_years, 0.0);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn maintenance_items_deserialize_with_flattened_cycle_fields() {
    let json = serde_json::json!({
        "name": "Schilderwerk",
        "unit": "m2",
        "calculation": [ { "type": "variable", "value": "gevelOppervlak" } ],
        "price": 10.0,
        "cycleStart": 5,
        "cycle": 8
    });
    let item: MaintenanceLineItem = serde_json::from_value(json).unwrap();
    assert_eq!(item.cycle_start, 5);
    assert_eq!(item.cycle, 8);
    assert_eq!(item.item.name, "Schilderwerk");
}
