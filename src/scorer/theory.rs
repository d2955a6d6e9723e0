use super::types::{BreakdownEntry, ScoreResult};
use crate::form::{TheoryField as F, TheoryForm};
use crate::scheme::Scheme;

pub fn score(form: &TheoryForm) -> ScoreResult {
    let assignment = form.mark(F::Assignment);
    let attendance = form.mark(F::Attendance);
    let case_study = form.mark(F::CaseStudy);
    let mst1 = form.mark(F::Mst1);
    let mst2 = form.mark(F::Mst2);

    // Case study is marked out of 16 and worth 8.
    let case_study_converted = (case_study / 16.0) * 8.0;
    let mst_average = (mst1 + mst2) / 2.0;
    let total = assignment + attendance + case_study_converted + mst_average;

    ScoreResult::new(
        Scheme::Theory,
        total,
        vec![
            BreakdownEntry::raw("Assignment Marks", assignment),
            BreakdownEntry::raw("Attendance Marks", attendance),
            BreakdownEntry::fixed("Case Study (Converted)", case_study_converted),
            BreakdownEntry::fixed("MST Average", mst_average),
            BreakdownEntry::fixed("Total Internal Marks", total),
        ],
    )
}
