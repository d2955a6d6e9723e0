use crate::scheme::Scheme;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// How a breakdown value is shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "format", content = "value", rename_all = "snake_case")]
pub enum BreakdownValue {
    /// The parsed input, shown in its shortest form (`10`, `2.5`).
    Raw(f64),
    /// A computed value, shown with two decimals.
    Fixed(f64),
}

impl BreakdownValue {
    pub fn value(&self) -> f64 {
        match self {
            Self::Raw(v) | Self::Fixed(v) => *v,
        }
    }
}

impl fmt::Display for BreakdownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(v) => write!(f, "{}", v),
            Self::Fixed(v) => f.write_str(&fixed2(*v)),
        }
    }
}

/// Two-decimal rendering of the exact binary value, as `toFixed(2)` does:
/// `5.005` is stored as `5.00499..` and shows `"5.00"`. Only values sitting
/// exactly on a half-cent (odd multiples of 1/8, e.g. `0.125`) are ties, and
/// those round away from zero.
pub fn fixed2(v: f64) -> String {
    let eighths = v * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        // v * 100 is exact here, so round() sees the true tie.
        return format!("{:.2}", (v * 100.0).round() / 100.0);
    }
    format!("{:.2}", v)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownEntry {
    pub label: &'static str,
    pub value: BreakdownValue,
}

impl BreakdownEntry {
    pub fn raw(label: &'static str, v: f64) -> Self {
        Self {
            label,
            value: BreakdownValue::Raw(v),
        }
    }

    pub fn fixed(label: &'static str, v: f64) -> Self {
        Self {
            label,
            value: BreakdownValue::Fixed(v),
        }
    }
}

impl Serialize for BreakdownEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_struct("BreakdownEntry", 3)?;
        entry.serialize_field("label", self.label)?;
        entry.serialize_field("value", &self.value)?;
        entry.serialize_field("display", &self.value.to_string())?;
        entry.end()
    }
}

/// Outcome of one calculation. Never mutated; a recalculation builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: f64,
    pub max_score: f64,
    pub scheme: Scheme,
    pub breakdown: Vec<BreakdownEntry>,
}

impl ScoreResult {
    pub(crate) fn new(scheme: Scheme, total_score: f64, breakdown: Vec<BreakdownEntry>) -> Self {
        Self {
            total_score,
            max_score: scheme.max_score(),
            scheme,
            breakdown,
        }
    }

    /// The last breakdown line, which always carries the total.
    pub fn grand_total(&self) -> Option<&BreakdownEntry> {
        self.breakdown.last()
    }

    pub fn entry(&self, label: &str) -> Option<&BreakdownEntry> {
        self.breakdown.iter().find(|e| e.label == label)
    }
}
