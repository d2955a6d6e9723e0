use super::types::{BreakdownEntry, ScoreResult};
use crate::form::{PracticalField as F, PracticalForm};
use crate::scheme::Scheme;

pub fn score(form: &PracticalForm) -> ScoreResult {
    let lab_mst = form.mark(F::LabMst);
    let assess1 = form.mark(F::Assess1);
    let assess2 = form.mark(F::Assess2);
    let assess3 = form.mark(F::Assess3);
    let end_sem = form.mark(F::EndSem);

    // Lab MST is out of 15 and worth 15.
    let adjusted_lab = (lab_mst / 15.0) * 15.0;
    let total_assessments = assess1 + assess2 + assess3;
    let final_marks = total_assessments + adjusted_lab + end_sem;

    ScoreResult::new(
        Scheme::Practical,
        final_marks,
        vec![
            BreakdownEntry::fixed("Lab MST (Adjusted)", adjusted_lab),
            BreakdownEntry::raw("Assessment 1", assess1),
            BreakdownEntry::raw("Assessment 2", assess2),
            BreakdownEntry::raw("Assessment 3", assess3),
            BreakdownEntry::raw("End Semester Practical", end_sem),
            BreakdownEntry::fixed("Final Marks", final_marks),
        ],
    )
}
