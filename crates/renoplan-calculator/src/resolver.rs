//! Variable resolution against a residence's calculation context.
//!
//! Formulas are authored over many years against shifting context schemas,
//! so resolution is deliberately layered: residence-specific overrides win
//! over shared properties, historical variable spellings keep working via a
//! single central alias table, and bare numeric literals in a formula
//! resolve to themselves.

use renoplan_types::{CalculationContext, ContextValue};

/// Namespace of residence-specific overrides; always consulted first.
pub const WONING_SPECIFIEK: &str = "woningSpecifiek";

/// Namespace of raw dimensions, keyed lowercase.
pub const DIMENSIONS: &str = "dimensions";

/// Outcome of resolving a variable that matched something in the context.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The variable resolved to a usable number.
    Value(f64),
    /// The variable matched, but the value is not numeric; carries the
    /// value's type name for the error message.
    NonNumeric(&'static str),
}

/// Target of a legacy alias.
enum LegacyAlias {
    /// Historical spelling of a current context key.
    Key(&'static str),
    /// Literal value the alias always resolves to.
    Value(f64),
}

/// Central table of legacy variable names still present in stored formulas.
///
/// Alias logic lives here and nowhere else; call sites go through
/// [`resolve`].
fn legacy_alias(name: &str) -> Option<LegacyAlias> {
    let alias = match name {
        "AantalWoningen" => LegacyAlias::Key("aantalWoningen"),
        "DakOppervlak" => LegacyAlias::Key("dakOppervlak"),
        "GevelOppervlak" => LegacyAlias::Key("gevelOppervlakNetto"),
        "VloerOppervlak" => LegacyAlias::Key("vloerOppervlak"),
        "KozijnOppervlak" => LegacyAlias::Key("kozijnOppervlak"),
        "AantalBouwlagen" => LegacyAlias::Key("aantalBouwlagen"),
        "OmtrekWoning" => LegacyAlias::Key("omtrek"),
        "BebouwdOppervlak" => LegacyAlias::Key("bebouwdOppervlak"),
        "5%" => LegacyAlias::Value(0.05),
        "10%" => LegacyAlias::Value(0.10),
        _ => return None,
    };
    Some(alias)
}

/// Resolve a variable name against the context.
///
/// Resolution order, first match wins:
/// 1. the `woningSpecifiek` namespace,
/// 2. the top level of the context,
/// 3. the legacy alias table, retried against both of the above,
/// 4. lowercased lookup inside the `dimensions` namespace,
/// 5. the name parsed as a numeric literal.
///
/// `None` means the name matched nothing anywhere; that only becomes an
/// error once the evaluator actually needs the value.
pub fn resolve(name: &str, context: &CalculationContext) -> Option<Resolved> {
    if let Some(found) = lookup(name, context) {
        return Some(found);
    }

    match legacy_alias(name) {
        Some(LegacyAlias::Value(value)) => return Some(Resolved::Value(value)),
        Some(LegacyAlias::Key(key)) => {
            if let Some(found) = lookup(key, context) {
                return Some(found);
            }
        }
        None => {}
    }

    if let Some(value) = context.get_nested(DIMENSIONS, &name.to_lowercase()) {
        return Some(classify(value));
    }

    parse_literal(name).map(Resolved::Value)
}

/// Resolve a variable to a number, ignoring non-numeric matches.
pub fn resolve_number(name: &str, context: &CalculationContext) -> Option<f64> {
    match resolve(name, context) {
        Some(Resolved::Value(value)) => Some(value),
        _ => None,
    }
}

fn lookup(key: &str, context: &CalculationContext) -> Option<Resolved> {
    if let Some(value) = context.get_nested(WONING_SPECIFIEK, key) {
        return Some(classify(value));
    }
    context.get(key).map(classify)
}

fn classify(value: &ContextValue) -> Resolved {
    match value.as_number() {
        Some(number) => Resolved::Value(number),
        None => Resolved::NonNumeric(value.type_name()),
    }
}

/// Parse a token name as a numeric literal. Formulas authored in the Dutch
/// admin UI historically contain comma decimals ("0,8").
fn parse_literal(name: &str) -> Option<f64> {
    let trimmed = name.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return Some(value);
    }
    trimmed.replace(',', ".").parse::<f64>().ok()
}
