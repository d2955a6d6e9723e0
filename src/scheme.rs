use crate::form::{FieldSpec, HybridForm, PracticalForm, TheoryForm};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The three internal assessment schemes. Each owns its own form, formula and
/// maximum score.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    #[default]
    Theory,
    Hybrid,
    Practical,
}

impl Scheme {
    pub fn max_score(&self) -> f64 {
        match self {
            Self::Theory => 40.0,
            Self::Hybrid => 70.0,
            Self::Practical => 100.0,
        }
    }

    /// Name used in the result heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Theory => "Theory",
            Self::Hybrid => "Hybrid",
            Self::Practical => "Practical",
        }
    }

    pub fn selector_label(&self) -> String {
        format!("{} ({} marks)", self.title(), self.max_score())
    }

    /// Input fields of this scheme's form, in display order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Theory => TheoryForm::SPECS,
            Self::Hybrid => HybridForm::SPECS,
            Self::Practical => PracticalForm::SPECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Scheme::from_str("hybrid").unwrap(), Scheme::Hybrid);
        assert_eq!(Scheme::from_str("Practical").unwrap(), Scheme::Practical);
        assert!(Scheme::from_str("lab").is_err());
    }

    #[test]
    fn selector_labels_carry_the_maximum() {
        let labels: Vec<String> = Scheme::iter().map(|s| s.selector_label()).collect();
        assert_eq!(
            labels,
            vec![
                "Theory (40 marks)",
                "Hybrid (70 marks)",
                "Practical (100 marks)"
            ]
        );
    }

    #[test]
    fn field_counts() {
        assert_eq!(Scheme::Theory.fields().len(), 5);
        assert_eq!(Scheme::Hybrid.fields().len(), 10);
        assert_eq!(Scheme::Practical.fields().len(), 5);
    }
}
