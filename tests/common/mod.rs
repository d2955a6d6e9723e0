use marksforge::form::Forms;
use marksforge::scheme::Scheme;

/// Builds forms from `(field, raw)` pairs for one scheme.
pub fn forms_with(scheme: Scheme, values: &[(&str, &str)]) -> Forms {
    let mut forms = Forms::default();
    for (field, raw) in values {
        forms
            .set(scheme, field, *raw)
            .unwrap_or_else(|e| panic!("bad test field {}: {}", field, e));
    }
    forms
}

#[allow(dead_code)]
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
