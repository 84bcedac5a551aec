use renoplan_calculator::{
    BinaryOp, CalcToken, CalculationContext, PriceLineItem, PricesPerType, calculate_line,
    calculate_measure_price,
};

fn context() -> CalculationContext {
    let mut context = CalculationContext::new();
    context.insert("dakOppervlak", 62.5);
    context.insert("aantalWoningen", 24i64);
    context
}

fn roof_item() -> PriceLineItem {
    PriceLineItem {
        name: "Dakisolatie".to_string(),
        unit: "m2".to_string(),
        calculation: vec![CalcToken::variable("dakOppervlak")],
        price: Some(45.0),
        prices_per_type: None,
    }
}

#[test]
fn flat_price_applies_without_split_pricing() {
    let line = calculate_line(&roof_item(), &context(), "Eengezinswoning", false);
    assert!(line.is_valid);
    assert_eq!(line.unit_price, 45.0);
    assert_eq!(line.quantity, 62.5);
    assert_eq!(line.total_price, 62.5 * 45.0);
}

#[test]
fn split_pricing_selects_by_residence_type_substring() {
    let mut item = roof_item();
    item.prices_per_type = Some(PricesPerType {
        grondgebonden: Some(10.0),
        portiek: Some(20.0),
        gallerij: Some(30.0),
    });

    let line = calculate_line(&item, &context(), "Portiekflat", true);
    assert_eq!(line.unit_price, 20.0);

    let line = calculate_line(&item, &context(), "GALERIJFLAT", true);
    assert_eq!(line.unit_price, 30.0);

    // the historical double-l spelling still matches
    let line = calculate_line(&item, &context(), "gallerijwoning", true);
    assert_eq!(line.unit_price, 30.0);

    let line = calculate_line(&item, &context(), "Eengezinswoning", true);
    assert_eq!(line.unit_price, 10.0);
}

#[test]
fn split_pricing_falls_back_to_flat_price_for_empty_slots() {
    let mut item = roof_item();
    item.prices_per_type =
        Some(PricesPerType { grondgebonden: Some(10.0), portiek: None, gallerij: None });

    let line = calculate_line(&item, &context(), "Portiekflat", true);
    assert_eq!(line.unit_price, 45.0);

    // without split pricing the per-type table is ignored entirely
    let line = calculate_line(&item, &context(), "Portiekflat", false);
    assert_eq!(line.unit_price, 45.0);
}

#[test]
fn item_without_any_price_calculates_at_zero() {
    let mut item = roof_item();
    item.price = None;
    let line = calculate_line(&item, &context(), "Eengezinswoning", false);
    assert!(line.is_valid);
    assert_eq!(line.unit_price, 0.0);
    assert_eq!(line.total_price, 0.0);
}

#[test]
fn failed_line_is_zeroed_but_keeps_its_unit_price() {
    let mut item = roof_item();
    item.calculation = vec![CalcToken::variable("bestaatNiet")];
    let line = calculate_line(&item, &context(), "Eengezinswoning", false);
    assert!(!line.is_valid);
    assert_eq!(line.quantity, 0.0);
    assert_eq!(line.total_price, 0.0);
    assert_eq!(line.unit_price, 45.0);
    assert!(line.error.is_some());
}

#[test]
fn one_failing_line_does_not_block_its_siblings() {
    let mut broken = roof_item();
    broken.name = "Gevelisolatie".to_string();
    broken.calculation = vec![
        CalcToken::variable("gevelOppervlak"),
        CalcToken::Operator(BinaryOp::Multiply),
        CalcToken::variable("bestaatNiet"),
    ];

    let result =
        calculate_measure_price(&[roof_item(), broken], &context(), "Eengezinswoning", false);

    assert!(!result.is_valid);
    // the healthy line still sums into the total
    assert_eq!(result.price, 62.5 * 45.0);
    assert_eq!(result.calculations.len(), 2);
    assert!(result.calculations[0].is_valid);
    assert!(!result.calculations[1].is_valid);

    let message = result.error_message.unwrap();
    assert!(message.contains("Gevelisolatie"));
    assert!(message.contains("bestaatNiet"));
    assert_eq!(result.warning_log.len(), 1);
}

#[test]
fn multiple_failures_join_with_semicolons() {
    let mut first = roof_item();
    first.calculation = vec![CalcToken::variable("onbekendEen")];
    let mut second = roof_item();
    second.name = "Vloerisolatie".to_string();
    second.calculation = vec![CalcToken::variable("onbekendTwee")];

    let result = calculate_measure_price(&[first, second], &context(), "Eengezinswoning", false);
    assert!(!result.is_valid);
    assert_eq!(result.price, 0.0);
    assert_eq!(result.warning_log.len(), 2);
    assert!(result.error_message.unwrap().contains("; "));
}

#[test]
fn empty_input_is_a_normal_condition() {
    let result = calculate_measure_price(&[], &context(), "Eengezinswoning", false);
    assert!(!result.is_valid);
    assert_eq!(result.price, 0.0);
    assert!(result.calculations.is_empty());
    assert!(result.error_message.is_some());

    let result =
        calculate_measure_price(&[roof_item()], &CalculationContext::new(), "Eengezinswoning", false);
    assert!(!result.is_valid);
    assert_eq!(result.price, 0.0);
    assert!(result.calculations.is_empty());
}

#[test]
fn repeated_calculation_yields_identical_results() {
    let items = [roof_item()];
    let context = context();
    let first = calculate_measure_price(&items, &context, "Portiekflat", true);
    let second = calculate_measure_price(&items, &context, "Portiekflat", true);
    assert_eq!(first, second);
}

#[test]
fn price_line_items_deserialize_from_stored_documents() {
    let json = serde_json::json!({
        "name": "Dakisolatie",
        "unit": "m2",
        "calculation": [
            { "type": "variable", "value": "dakOppervlak" },
            { "type": "operator", "value": "*" },
            { "type": "variable", "value": "0,8" }
        ],
        "pricesPerType": { "grondgebonden": 40.0, "portiek": 55.0, "gallerij": 55.0 }
    });
    let item: PriceLineItem = serde_json::from_value(json).unwrap();
    assert_eq!(item.price, None);

    let line = calculate_line(&item, &context(), "Portiekflat", true);
    assert!(line.is_valid);
    assert_eq!(line.unit_price, 55.0);
    assert!((line.quantity - 62.5 * 0.8).abs() < 1e-9);
}
