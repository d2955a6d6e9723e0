use super::types::{BreakdownEntry, ScoreResult};
use crate::form::{HybridField as F, HybridForm};
use crate::scheme::Scheme;

pub fn score(form: &HybridForm) -> ScoreResult {
    let assignment = form.mark(F::Assignment);
    let attendance = form.mark(F::Attendance);
    let case_study = form.mark(F::CaseStudy);
    let mst1 = form.mark(F::Mst1);
    let mst2 = form.mark(F::Mst2);
    let end_sem = form.mark(F::EndSem);
    let lab_mst = form.mark(F::LabMst);
    let assess1 = form.mark(F::Assess1);
    let assess2 = form.mark(F::Assess2);
    let assess3 = form.mark(F::Assess3);

    let assignment_weighted = (assignment / 12.0) * 6.0;
    let case_study_weighted = (case_study / 16.0) * 8.0;
    // Two MSTs averaged, then halved.
    let mst_average = (mst1 + mst2) / 4.0;
    let end_sem_weighted = (end_sem / 40.0) * 20.0;
    let lab_mst_weighted = (lab_mst / 15.0) * 4.0;
    let assessments_weighted = (((assess1 + assess2 + assess3) / 3.0) / 15.0) * 20.0;

    let total = assignment_weighted
        + attendance
        + case_study_weighted
        + mst_average
        + assessments_weighted
        + end_sem_weighted
        + lab_mst_weighted;

    ScoreResult::new(
        Scheme::Hybrid,
        total,
        vec![
            BreakdownEntry::fixed("Assignment (Weighted)", assignment_weighted),
            BreakdownEntry::raw("Attendance Marks", attendance),
            BreakdownEntry::fixed("Case Study (Weighted)", case_study_weighted),
            BreakdownEntry::fixed("MST Average", mst_average),
            BreakdownEntry::fixed("Assessments (Weighted)", assessments_weighted),
            BreakdownEntry::fixed("End Sem (Weighted)", end_sem_weighted),
            BreakdownEntry::fixed("Lab MST (Weighted)", lab_mst_weighted),
            BreakdownEntry::fixed("Total Internal Marks", total),
        ],
    )
}
