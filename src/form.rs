use crate::error::{MarksError, MarksResult};
use crate::parse::{is_numeric, parse_mark};
use crate::scheme::Scheme;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Static description of one input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Wire name, as used on the command line and in JSON forms.
    pub name: &'static str,
    pub label: &'static str,
    /// Advisory upper bound. Never enforced by scoring.
    pub max: Option<f64>,
}

impl FieldSpec {
    /// Advisory lower bound shared by every field.
    pub const MIN: f64 = 0.0;

    pub fn within_hint(&self, value: f64) -> bool {
        value >= Self::MIN && self.max.map_or(true, |max| value <= max)
    }
}

/// Accepts `"12"`, `12` or `null` for a raw field value.
fn raw_input<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawInput {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawInput>::deserialize(deserializer)? {
        Some(RawInput::Text(s)) => s,
        Some(RawInput::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Declares a scheme's form record, its field enum, and the accessors tying
/// the two together.
macro_rules! form_record {
    (
        $(#[$meta:meta])*
        $form:ident, $field_enum:ident, $scheme:expr, {
            $( $field:ident => $variant:ident, $wire:literal, $label:literal, $max:expr; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default, deny_unknown_fields)]
        pub struct $form {
            $(
                #[serde(deserialize_with = "raw_input")]
                pub $field: String,
            )+
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr)]
        pub enum $field_enum {
            $(
                #[strum(serialize = $wire)]
                $variant,
            )+
        }

        impl $field_enum {
            pub fn spec(self) -> FieldSpec {
                match self {
                    $( Self::$variant => FieldSpec { name: $wire, label: $label, max: $max }, )+
                }
            }
        }

        impl $form {
            pub const SCHEME: Scheme = $scheme;

            pub const SPECS: &'static [FieldSpec] = &[
                $( FieldSpec { name: $wire, label: $label, max: $max }, )+
            ];

            pub fn get(&self, field: $field_enum) -> &str {
                match field {
                    $( $field_enum::$variant => &self.$field, )+
                }
            }

            /// Stores `raw` as typed. No trimming, no coercion.
            pub fn set(&mut self, field: $field_enum, raw: impl Into<String>) {
                let slot = match field {
                    $( $field_enum::$variant => &mut self.$field, )+
                };
                *slot = raw.into();
            }

            pub fn mark(&self, field: $field_enum) -> f64 {
                parse_mark(self.get(field))
            }

            pub fn parse_field(name: &str) -> MarksResult<$field_enum> {
                $field_enum::from_str(name).map_err(|_| MarksError::UnknownField {
                    scheme: Self::SCHEME,
                    field: name.to_string(),
                })
            }

            /// `(spec, raw)` pairs in display order.
            pub fn entries(&self) -> Vec<(FieldSpec, &str)> {
                vec![ $( ($field_enum::$variant.spec(), self.$field.as_str()), )+ ]
            }
        }
    };
}

form_record!(
    /// Raw inputs for the theory scheme (out of 40).
    TheoryForm, TheoryField, Scheme::Theory, {
        assignment => Assignment, "assignment", "Assignment Marks", None;
        attendance => Attendance, "attendance", "Attendance Marks", None;
        case_study => CaseStudy, "caseStudy", "Case Study Marks (out of 16)", Some(16.0);
        mst1 => Mst1, "mst1", "MST 1 Marks", None;
        mst2 => Mst2, "mst2", "MST 2 Marks", None;
    }
);

form_record!(
    /// Raw inputs for the hybrid scheme (out of 70).
    HybridForm, HybridField, Scheme::Hybrid, {
        assignment => Assignment, "assignment", "Assignment Marks (out of 12)", Some(12.0);
        attendance => Attendance, "attendance", "Attendance Marks", None;
        case_study => CaseStudy, "caseStudy", "Case Study Marks (out of 16)", Some(16.0);
        mst1 => Mst1, "mst1", "MST 1 Marks", None;
        mst2 => Mst2, "mst2", "MST 2 Marks", None;
        end_sem => EndSem, "endSem", "End Semester Practical (out of 40)", Some(40.0);
        lab_mst => LabMst, "labMst", "Lab MST Marks (out of 15)", Some(15.0);
        assess1 => Assess1, "assess1", "Assessment 1 (out of 15)", Some(15.0);
        assess2 => Assess2, "assess2", "Assessment 2 (out of 15)", Some(15.0);
        assess3 => Assess3, "assess3", "Assessment 3 (out of 15)", Some(15.0);
    }
);

form_record!(
    /// Raw inputs for the practical scheme (out of 100).
    PracticalForm, PracticalField, Scheme::Practical, {
        lab_mst => LabMst, "labMst", "Lab MST Marks (out of 15)", Some(15.0);
        assess1 => Assess1, "assess1", "Assessment 1", None;
        assess2 => Assess2, "assess2", "Assessment 2", None;
        assess3 => Assess3, "assess3", "Assessment 3", None;
        end_sem => EndSem, "endSem", "End Semester Practical", None;
    }
);

/// One scheme's form, tagged by its scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", content = "fields", rename_all = "snake_case")]
pub enum Form {
    Theory(TheoryForm),
    Hybrid(HybridForm),
    Practical(PracticalForm),
}

impl Form {
    pub fn scheme(&self) -> Scheme {
        match self {
            Self::Theory(_) => Scheme::Theory,
            Self::Hybrid(_) => Scheme::Hybrid,
            Self::Practical(_) => Scheme::Practical,
        }
    }
}

/// A field whose value falls outside its advisory window.
#[derive(Debug, Clone, PartialEq)]
pub struct HintViolation {
    pub spec: FieldSpec,
    pub raw: String,
    pub value: f64,
}

/// All three forms. Only the active one is scored; the others keep their
/// values until reselected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forms {
    pub theory: TheoryForm,
    pub hybrid: HybridForm,
    pub practical: PracticalForm,
}

impl Forms {
    pub fn set(&mut self, scheme: Scheme, field: &str, raw: impl Into<String>) -> MarksResult<()> {
        match scheme {
            Scheme::Theory => {
                let f = TheoryForm::parse_field(field)?;
                self.theory.set(f, raw);
            }
            Scheme::Hybrid => {
                let f = HybridForm::parse_field(field)?;
                self.hybrid.set(f, raw);
            }
            Scheme::Practical => {
                let f = PracticalForm::parse_field(field)?;
                self.practical.set(f, raw);
            }
        }
        Ok(())
    }

    pub fn get(&self, scheme: Scheme, field: &str) -> MarksResult<&str> {
        Ok(match scheme {
            Scheme::Theory => self.theory.get(TheoryForm::parse_field(field)?),
            Scheme::Hybrid => self.hybrid.get(HybridForm::parse_field(field)?),
            Scheme::Practical => self.practical.get(PracticalForm::parse_field(field)?),
        })
    }

    /// Snapshot of one scheme's form.
    pub fn form(&self, scheme: Scheme) -> Form {
        match scheme {
            Scheme::Theory => Form::Theory(self.theory.clone()),
            Scheme::Hybrid => Form::Hybrid(self.hybrid.clone()),
            Scheme::Practical => Form::Practical(self.practical.clone()),
        }
    }

    /// Replaces the record of the form's own scheme.
    pub fn replace(&mut self, form: Form) {
        match form {
            Form::Theory(f) => self.theory = f,
            Form::Hybrid(f) => self.hybrid = f,
            Form::Practical(f) => self.practical = f,
        }
    }

    pub fn entries(&self, scheme: Scheme) -> Vec<(FieldSpec, &str)> {
        match scheme {
            Scheme::Theory => self.theory.entries(),
            Scheme::Hybrid => self.hybrid.entries(),
            Scheme::Practical => self.practical.entries(),
        }
    }

    /// Fields whose value is below zero or above the advisory maximum.
    /// Text that is not a number is reported too, with the value it will
    /// score as.
    pub fn hint_violations(&self, scheme: Scheme) -> Vec<HintViolation> {
        self.entries(scheme)
            .into_iter()
            .filter(|(_, raw)| !raw.trim().is_empty())
            .filter_map(|(spec, raw)| {
                let value = parse_mark(raw);
                if spec.within_hint(value) && is_numeric(raw) {
                    None
                } else {
                    Some(HintViolation {
                        spec,
                        raw: raw.to_string(),
                        value,
                    })
                }
            })
            .collect()
    }
}
