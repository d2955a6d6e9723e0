use crate::error::{MarksError, MarksResult};
use crate::form::{Form, Forms};
use crate::scheme::Scheme;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Form input shared by the subcommands: an optional JSON file, then
/// `name=value` overrides on top.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    #[arg(short, long, default_value = "theory")]
    pub scheme: Scheme,

    /// JSON object of raw field values for the chosen scheme.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// `name=value`, repeatable. Applied after --input.
    #[arg(short, long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,
}

impl FormArgs {
    pub fn build_forms(&self) -> MarksResult<Forms> {
        let mut forms = Forms::default();

        if let Some(path) = &self.input {
            info!("📂 Loading form from: {}", path.display());
            forms.replace(load_form_file(self.scheme, path)?);
        }

        for pair in &self.fields {
            let (name, value) = split_assignment(pair)?;
            forms.set(self.scheme, name, value)?;
        }

        Ok(forms)
    }
}

/// Reads a form for `scheme`. Accepts either the bare field object or the
/// tagged `{"scheme": ..., "fields": {...}}` shape, which must name the same
/// scheme.
pub fn load_form_file<P: AsRef<Path>>(scheme: Scheme, path: P) -> MarksResult<Form> {
    let content = fs::read_to_string(path)?;
    parse_form(scheme, &content)
}

pub fn parse_form(scheme: Scheme, content: &str) -> MarksResult<Form> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    if value.get("scheme").is_some() {
        let form: Form = serde_json::from_value(value)?;
        if form.scheme() != scheme {
            return Err(MarksError::Config(format!(
                "form file is for the {} scheme, but {} was selected",
                form.scheme(),
                scheme
            )));
        }
        return Ok(form);
    }

    Ok(match scheme {
        Scheme::Theory => Form::Theory(serde_json::from_value(value)?),
        Scheme::Hybrid => Form::Hybrid(serde_json::from_value(value)?),
        Scheme::Practical => Form::Practical(serde_json::from_value(value)?),
    })
}

fn split_assignment(pair: &str) -> MarksResult<(&str, &str)> {
    pair.split_once('=')
        .map(|(name, value)| (name.trim(), value))
        .ok_or_else(|| MarksError::Config(format!("expected NAME=VALUE, got '{}'", pair)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_after_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        fs::write(&path, r#"{"caseStudy": "16", "mst1": 18}"#).unwrap();

        let args = FormArgs {
            scheme: Scheme::Theory,
            input: Some(path),
            fields: vec!["mst1=20".into(), "mst2=".into()],
        };
        let forms = args.build_forms().unwrap();
        assert_eq!(forms.theory.case_study, "16");
        assert_eq!(forms.theory.mst1, "20");
        assert_eq!(forms.theory.mst2, "");
    }

    #[test]
    fn value_may_contain_equals() {
        assert_eq!(split_assignment("mst1=a=b").unwrap(), ("mst1", "a=b"));
        assert!(split_assignment("mst1").is_err());
    }

    #[test]
    fn tagged_form_must_match_the_scheme() {
        let json = r#"{"scheme": "hybrid", "fields": {"endSem": "40"}}"#;
        assert!(matches!(
            parse_form(Scheme::Hybrid, json).unwrap(),
            Form::Hybrid(ref f) if f.end_sem == "40"
        ));
        assert!(matches!(
            parse_form(Scheme::Theory, json),
            Err(MarksError::Config(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            parse_form(Scheme::Practical, r#"{"caseStudy": "3"}"#),
            Err(MarksError::Json(_))
        ));
    }
}
