pub mod hybrid;
pub mod practical;
pub mod theory;
pub mod types;

pub use self::types::{BreakdownEntry, BreakdownValue, ScoreResult};
use crate::form::{Form, HybridForm, PracticalForm, TheoryForm};
use tracing::debug;

/// Scores a form snapshot with its own scheme's formula.
pub fn score(form: &Form) -> ScoreResult {
    let result = match form {
        Form::Theory(f) => theory::score(f),
        Form::Hybrid(f) => hybrid::score(f),
        Form::Practical(f) => practical::score(f),
    };
    debug!(
        scheme = %result.scheme,
        total = result.total_score,
        max = result.max_score,
        "calculated internal marks"
    );
    result
}

pub fn score_theory(form: &TheoryForm) -> ScoreResult {
    theory::score(form)
}

pub fn score_hybrid(form: &HybridForm) -> ScoreResult {
    hybrid::score(form)
}

pub fn score_practical(form: &PracticalForm) -> ScoreResult {
    practical::score(form)
}
