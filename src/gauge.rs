use crate::scorer::ScoreResult;
use serde::Serialize;
use std::f64::consts::PI;
use strum_macros::Display;

/// Radius of the circular gauge drawn by the form.
pub const GAUGE_RADIUS: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Good,
    Warning,
    Critical,
}

impl Band {
    /// Lower bounds are inclusive: 80 is good, 60 is a warning.
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Good
        } else if percentage >= 60.0 {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Good => "#4CAF50",
            Self::Warning => "#FF9800",
            Self::Critical => "#F44336",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gauge {
    /// Always within `[0, 100]`.
    pub percentage: f64,
    pub band: Band,
}

impl Gauge {
    pub fn from_result(result: &ScoreResult) -> Self {
        Self::from_score(result.total_score, result.max_score)
    }

    pub fn from_score(total: f64, max: f64) -> Self {
        let percentage = clamp_percentage((total / max) * 100.0);
        Self {
            percentage,
            band: Band::for_percentage(percentage),
        }
    }

    /// Whole-number percentage for the gauge label; halves round up.
    pub fn rounded_percent(&self) -> u32 {
        self.percentage.round() as u32
    }

    /// Filled share of the full circle.
    pub fn arc_fraction(&self) -> f64 {
        self.percentage / 100.0
    }

    /// SVG `stroke-dashoffset` for a circle of the given radius.
    pub fn dash_offset(&self, radius: f64) -> f64 {
        let circumference = 2.0 * PI * radius;
        circumference - self.arc_fraction() * circumference
    }
}

fn clamp_percentage(raw: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(Band::for_percentage(80.0), Band::Good);
        assert_eq!(Band::for_percentage(79.999), Band::Warning);
        assert_eq!(Band::for_percentage(60.0), Band::Warning);
        assert_eq!(Band::for_percentage(59.999), Band::Critical);
        assert_eq!(Band::for_percentage(0.0), Band::Critical);
    }

    #[test]
    fn clamps_both_ends() {
        assert_eq!(Gauge::from_score(42.0, 40.0).percentage, 100.0);
        assert_eq!(Gauge::from_score(-5.0, 40.0).percentage, 0.0);
        assert_eq!(Gauge::from_score(0.0, 40.0).percentage, 0.0);
    }

    #[test]
    fn rounding_for_the_label() {
        assert_eq!(Gauge::from_score(20.0, 70.0).rounded_percent(), 29);
        assert_eq!(Gauge::from_score(50.5, 100.0).rounded_percent(), 51);
        assert_eq!(Gauge::from_score(50.4, 100.0).rounded_percent(), 50);
    }

    #[test]
    fn rounding_just_below_a_half() {
        let gauge = Gauge {
            percentage: 0.49999999999999994,
            band: Band::Critical,
        };
        assert_eq!(gauge.rounded_percent(), 0);
        assert_eq!(Gauge::from_score(99.5, 100.0).rounded_percent(), 100);
    }

    #[test]
    fn arc_geometry() {
        let full = Gauge::from_score(100.0, 100.0);
        assert!(full.dash_offset(GAUGE_RADIUS).abs() < 1e-9);

        let empty = Gauge::from_score(0.0, 100.0);
        assert!((empty.dash_offset(GAUGE_RADIUS) - 2.0 * PI * GAUGE_RADIUS).abs() < 1e-9);

        let half = Gauge::from_score(50.0, 100.0);
        assert!((half.arc_fraction() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn colors() {
        assert_eq!(Band::Good.color_hex(), "#4CAF50");
        assert_eq!(Band::Warning.color_hex(), "#FF9800");
        assert_eq!(Band::Critical.color_hex(), "#F44336");
    }
}
