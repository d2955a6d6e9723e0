mod common;

use common::forms_with;
use marksforge::api::Calculator;
use marksforge::form::Form;
use marksforge::gauge::Band;
use marksforge::scheme::Scheme;
use strum::IntoEnumIterator;

fn theory_calculator() -> Calculator {
    let forms = forms_with(
        Scheme::Theory,
        &[
            ("assignment", "10"),
            ("attendance", "5"),
            ("caseStudy", "16"),
            ("mst1", "18"),
            ("mst2", "20"),
        ],
    );
    Calculator::with_forms(Scheme::Theory, forms)
}

#[test]
fn test_calculate_then_switch_clears() {
    for target in Scheme::iter() {
        let mut calc = theory_calculator();
        calc.calculate();
        assert!(calc.result().is_some());

        calc.select_scheme(target);
        assert!(calc.result().is_none(), "switch to {} kept a result", target);
        assert!(calc.gauge().is_none());
        assert_eq!(calc.active_scheme(), target);
    }
}

#[test]
fn test_switch_without_result_is_harmless() {
    let mut calc = Calculator::default();
    calc.select_scheme(Scheme::Practical);
    calc.select_scheme(Scheme::Hybrid);
    assert!(calc.result().is_none());
}

#[test]
fn test_recalculation_is_idempotent() {
    let mut calc = theory_calculator();
    let first = calc.calculate().clone();
    let second = calc.calculate().clone();
    assert_eq!(first, second);
}

#[test]
fn test_inactive_forms_keep_their_values() {
    let mut calc = theory_calculator();
    calc.set_field(Scheme::Hybrid, "endSem", "40").unwrap();

    // Theory is active, so hybrid input does not count.
    assert_eq!(calc.calculate().total_score, 42.0);

    calc.select_scheme(Scheme::Hybrid);
    let hybrid = calc.calculate();
    assert_eq!(hybrid.scheme, Scheme::Hybrid);
    assert_eq!(hybrid.total_score, 20.0);

    calc.select_scheme(Scheme::Theory);
    assert_eq!(calc.forms().theory.mst2, "20");
    assert_eq!(calc.calculate().total_score, 42.0);
}

#[test]
fn test_result_matches_active_scheme() {
    let mut calc = Calculator::default();
    for scheme in Scheme::iter() {
        calc.select_scheme(scheme);
        assert_eq!(calc.calculate().scheme, scheme);
        assert_eq!(calc.result().unwrap().max_score, scheme.max_score());
        assert!(matches!(
            (scheme, calc.active_form()),
            (Scheme::Theory, Form::Theory(_))
                | (Scheme::Hybrid, Form::Hybrid(_))
                | (Scheme::Practical, Form::Practical(_))
        ));
    }
}

#[test]
fn test_out_of_range_input_is_scored_as_entered() {
    let mut calc = Calculator::new(Scheme::Hybrid);
    calc.set_field(Scheme::Hybrid, "assess1", "45").unwrap();
    calc.set_field(Scheme::Hybrid, "assess2", "45").unwrap();
    calc.set_field(Scheme::Hybrid, "assess3", "45").unwrap();

    // (45 / 15) * 20 = 60, above the nominal 20 for this line.
    let result = calc.calculate();
    assert_eq!(result.total_score, 60.0);

    let gauge = calc.gauge().unwrap();
    assert!((gauge.percentage - 85.714).abs() < 1e-2);
    assert_eq!(gauge.band, Band::Good);
}

#[test]
fn test_unknown_field_leaves_state_untouched() {
    let mut calc = theory_calculator();
    calc.calculate();
    assert!(calc.set_field(Scheme::Theory, "endSem", "40").is_err());
    assert_eq!(calc.result().unwrap().total_score, 42.0);
    assert_eq!(calc.forms(), theory_calculator().forms());
}
