//! Domain and result types for the price calculation engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Arithmetic operator usable in an authored formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// `+`
    #[serde(rename = "+")]
    Add,
    /// `-`
    #[serde(rename = "-")]
    Subtract,
    /// `*`
    #[serde(rename = "*")]
    Multiply,
    /// `/`
    #[serde(rename = "/")]
    Divide,
}

impl BinaryOp {
    /// Apply the operator to two operands. Division by zero must be ruled
    /// out by the caller before this is reached.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => lhs / rhs,
        }
    }

    /// The symbol the authoring UI uses for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One token of an authored calculation formula.
///
/// Stored documents use the tagged shape `{"type": "variable", "value":
/// "dakOppervlak"}` / `{"type": "operator", "value": "*"}`. A well-formed
/// formula alternates variable/operator starting and ending with a variable;
/// malformed sequences are tolerated by the evaluator, never fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CalcToken {
    /// Reference to a context variable, a legacy alias, or a numeric literal.
    Variable(String),
    /// Arithmetic operator joining the surrounding variables.
    Operator(BinaryOp),
}

impl CalcToken {
    /// Shorthand for a variable token.
    pub fn variable(name: impl Into<String>) -> Self {
        CalcToken::Variable(name.into())
    }

    /// Shorthand for an operator token.
    pub fn operator(op: BinaryOp) -> Self {
        CalcToken::Operator(op)
    }
}

/// Residence categories that carry distinct unit prices under split pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidenceCategory {
    /// Ground-level residence; the default when no other category matches.
    Grondgebonden,
    /// Walk-up apartment.
    Portiek,
    /// Gallery-access apartment.
    Gallerij,
}

impl ResidenceCategory {
    /// Classify a free-form residence type label, case-insensitively.
    ///
    /// Both the current "galerij" spelling and the historical "gallerij"
    /// spelling occur in stored residence types.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("portiek") {
            ResidenceCategory::Portiek
        } else if lower.contains("galerij") || lower.contains("gallerij") {
            ResidenceCategory::Gallerij
        } else {
            ResidenceCategory::Grondgebonden
        }
    }
}

/// Per-residence-type unit prices for a price line under split pricing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricesPerType {
    /// Unit price for ground-level residences.
    pub grondgebonden: Option<f64>,
    /// Unit price for walk-up apartments.
    pub portiek: Option<f64>,
    /// Unit price for gallery-access apartments.
    pub gallerij: Option<f64>,
}

impl PricesPerType {
    /// The unit price slot for a residence category, if filled in.
    pub fn for_category(&self, category: ResidenceCategory) -> Option<f64> {
        match category {
            ResidenceCategory::Grondgebonden => self.grondgebonden,
            ResidenceCategory::Portiek => self.portiek,
            ResidenceCategory::Gallerij => self.gallerij,
        }
    }
}

/// One billable component of a measure, authored in the admin UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLineItem {
    /// Display name, e.g. "Dakisolatie binnenzijde".
    pub name: String,
    /// Unit the quantity is expressed in, e.g. "m2".
    pub unit: String,
    /// Quantity formula as an ordered token sequence.
    #[serde(default)]
    pub calculation: Vec<CalcToken>,
    /// Flat unit price; also the fallback under split pricing.
    #[serde(default)]
    pub price: Option<f64>,
    /// Per-residence-type unit prices, used when split pricing is enabled.
    #[serde(default)]
    pub prices_per_type: Option<PricesPerType>,
}

/// A maintenance job component: a price line plus its recurrence metadata.
///
/// Recurrence lives on the same record as the formula and price, so a line
/// can never drift apart from its own cycle data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLineItem {
    /// The priced component this job maintains.
    #[serde(flatten)]
    pub item: PriceLineItem,
    /// Offset of the first occurrence, in years from project start.
    #[serde(default)]
    pub cycle_start: i32,
    /// Recurrence interval in years; `<= 0` disables recurrence.
    #[serde(default)]
    pub cycle: i32,
}

/// Failure modes of a single line calculation.
///
/// Every failure is recovered at the line level: the error lands in the
/// line's result record and sibling lines continue unaffected.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalcError {
    /// A formula references a variable the context cannot resolve.
    #[error("variable '{name}' could not be resolved against the calculation context")]
    MissingVariable {
        /// The unresolvable variable name as authored.
        name: String,
    },
    /// A variable resolved, but to a value that is not a number.
    #[error("variable '{name}' resolved to a {type_name} value, not a number")]
    NonNumericVariable {
        /// The offending variable name as authored.
        name: String,
        /// Type name of the resolved value.
        type_name: String,
    },
    /// A division's divisor evaluates to zero; detected before dividing.
    #[error("division by zero: divisor '{divisor}' evaluates to 0")]
    DivisionByZero {
        /// The divisor variable name as authored.
        divisor: String,
    },
    /// No price lines or no context were supplied; a normal condition.
    #[error("no price lines to calculate")]
    NoInput,
}

impl CalcError {
    /// Error category, used for logging.
    pub fn category(&self) -> &'static str {
        match self {
            CalcError::MissingVariable { .. } => "missing_variable",
            CalcError::NonNumericVariable { .. } => "non_numeric_variable",
            CalcError::DivisionByZero { .. } => "division_by_zero",
            CalcError::NoInput => "no_input",
        }
    }
}

/// One entry of a line's audit trail: a resolved variable, the operator that
/// joined it, and the precedence-correct value of the formula so far.
///
/// The report layer renders these as "breedte × hoogte × €X" explanations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcStep {
    /// Variable name as authored.
    pub variable: String,
    /// The value it resolved to.
    pub value: f64,
    /// Operator joining this variable to the preceding formula, if any.
    pub operation: Option<BinaryOp>,
    /// Value of the formula up to and including this token.
    pub running_total: f64,
}

/// Calculated result for a single price line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResult {
    /// Line name, copied from the authored item.
    pub name: String,
    /// Quantity unit, copied from the authored item.
    pub unit: String,
    /// The unit price that was selected for this residence type.
    pub unit_price: f64,
    /// Quantity the formula evaluated to; `0` when invalid.
    pub quantity: f64,
    /// `quantity * unit_price`; `0` when invalid.
    pub total_price: f64,
    /// Audit trail of the quantity evaluation, in token order.
    pub steps: Vec<CalcStep>,
    /// False when the quantity formula failed to evaluate.
    pub is_valid: bool,
    /// The failure, when `is_valid` is false.
    pub error: Option<CalcError>,
}

/// Aggregated result over the price lines of one measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// Sum of the valid lines' totals; failed lines contribute 0.
    pub price: f64,
    /// Per-line results, in input order.
    pub calculations: Vec<LineResult>,
    /// True only when every line calculated successfully.
    pub is_valid: bool,
    /// All line failures joined with "; ", when any occurred.
    pub error_message: Option<String>,
    /// Individual human-readable warnings, one per failed line.
    pub warning_log: Vec<String>,
}

impl AggregateResult {
    /// The well-formed "nothing to compute" result returned for empty input.
    pub fn no_input() -> Self {
        Self {
            price: 0.0,
            calculations: Vec::new(),
            is_valid: false,
            error_message: Some(CalcError::NoInput.to_string()),
            warning_log: Vec::new(),
        }
    }
}

/// Maintenance cost of one line projected over the 40-year horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceProjection {
    /// Total cost over the full horizon, inflation included.
    pub total_40_years: f64,
    /// Straight-line average per year: `total_40_years / 40`.
    pub per_year: f64,
}
