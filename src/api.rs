use crate::error::MarksResult;
use crate::form::{Form, Forms};
use crate::gauge::Gauge;
use crate::scheme::Scheme;
use crate::scorer::{self, ScoreResult};
use tracing::{debug, warn};

/// The interactive form: three field sets, one active scheme, and at most one
/// displayed result.
///
/// A result is only ever shown for the scheme whose form is active.
/// Selecting a scheme (the same one included) drops it.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    active: Scheme,
    forms: Forms,
    result: Option<ScoreResult>,
}

impl Calculator {
    pub fn new(active: Scheme) -> Self {
        Self {
            active,
            ..Default::default()
        }
    }

    pub fn with_forms(active: Scheme, forms: Forms) -> Self {
        Self {
            active,
            forms,
            result: None,
        }
    }

    pub fn active_scheme(&self) -> Scheme {
        self.active
    }

    pub fn forms(&self) -> &Forms {
        &self.forms
    }

    pub fn active_form(&self) -> Form {
        self.forms.form(self.active)
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    pub fn gauge(&self) -> Option<Gauge> {
        self.result.as_ref().map(Gauge::from_result)
    }

    pub fn select_scheme(&mut self, scheme: Scheme) {
        debug!(from = %self.active, to = %scheme, "scheme selected");
        self.active = scheme;
        self.result = None;
    }

    /// Stores the raw text for `field` in `scheme`'s form. The displayed
    /// result stays until the next calculation.
    pub fn set_field(
        &mut self,
        scheme: Scheme,
        field: &str,
        raw: impl Into<String>,
    ) -> MarksResult<()> {
        self.forms.set(scheme, field, raw)
    }

    /// Scores the active form and shows the result.
    pub fn calculate(&mut self) -> &ScoreResult {
        for v in self.forms.hint_violations(self.active) {
            warn!(
                field = v.spec.name,
                raw = %v.raw,
                counted_as = v.value,
                "value outside the advisory range; scored as entered"
            );
        }
        let result = scorer::score(&self.active_form());
        self.result.insert(result)
    }
}
