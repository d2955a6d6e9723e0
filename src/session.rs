//! Line commands driving a [`Calculator`], the terminal version of the form.

use crate::api::Calculator;
use crate::error::{MarksError, MarksResult};
use crate::report;
use crate::scheme::Scheme;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::debug;

pub const HELP: &str = "\
Commands:
  scheme                             list schemes
  scheme <theory|hybrid|practical>   switch form (clears the result)
  set <field> [value]                store a raw value in the active form
  set <scheme>.<field> [value]       store a raw value in another form
  clear <field>                      empty a field
  fields                             list the active form
  calc                               calculate the active form
  show                               print the current result
  help                               this text
  quit                               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Nothing,
    Quit,
}

pub fn parse_scheme(name: &str) -> MarksResult<Scheme> {
    Scheme::from_str(name.trim()).map_err(|_| MarksError::UnknownScheme(name.trim().to_string()))
}

/// One line per scheme, the active one marked.
fn scheme_menu(active: Scheme) -> String {
    Scheme::iter()
        .map(|s| {
            let marker = if s == active { '*' } else { ' ' };
            format!("{} {:<10} {}", marker, s, s.selector_label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits `scheme.field` into its parts; a bare field targets `active`.
fn resolve_target(active: Scheme, target: &str) -> MarksResult<(Scheme, &str)> {
    match target.split_once('.') {
        Some((scheme, field)) => Ok((parse_scheme(scheme)?, field)),
        None => Ok((active, target)),
    }
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest),
        None => (s, ""),
    }
}

pub fn execute(calc: &mut Calculator, line: &str) -> MarksResult<Reply> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    let (command, args) = split_word(line);
    debug!(command, "session command");

    match command {
        "" => Ok(Reply::Nothing),
        "scheme" if args.trim().is_empty() => Ok(Reply::Text(scheme_menu(calc.active_scheme()))),
        "scheme" => {
            let scheme = parse_scheme(args)?;
            calc.select_scheme(scheme);
            Ok(Reply::Text(format!("Selected {}", scheme.selector_label())))
        }
        "set" => {
            let (target, raw) = split_word(args.trim_start());
            if target.is_empty() {
                return Err(MarksError::Command("usage: set <field> [value]".into()));
            }
            let (scheme, field) = resolve_target(calc.active_scheme(), target)?;
            calc.set_field(scheme, field, raw)?;
            Ok(Reply::Nothing)
        }
        "clear" => {
            let target = args.trim();
            if target.is_empty() {
                return Err(MarksError::Command("usage: clear <field>".into()));
            }
            let (scheme, field) = resolve_target(calc.active_scheme(), target)?;
            calc.set_field(scheme, field, "")?;
            Ok(Reply::Nothing)
        }
        "fields" => Ok(Reply::Text(report::render_fields(
            calc.forms(),
            calc.active_scheme(),
        )?)),
        "calc" => Ok(Reply::Text(report::render_result(calc.calculate()))),
        "show" => Ok(Reply::Text(match calc.result() {
            Some(result) => report::render_result(result),
            None => "No result yet. Run `calc`.".to_string(),
        })),
        "help" => Ok(Reply::Text(HELP.to_string())),
        "quit" | "exit" => Ok(Reply::Quit),
        other => Err(MarksError::Command(format!(
            "unknown command '{}' (try `help`)",
            other
        ))),
    }
}

/// Reads commands until `quit` or end of input. Command errors are printed
/// and the session carries on.
pub fn run<R: BufRead, W: Write>(calc: &mut Calculator, input: R, mut out: W) -> MarksResult<()> {
    writeln!(out, "{}", calc.active_scheme().selector_label())?;
    for line in input.lines() {
        match execute(calc, &line?) {
            Ok(Reply::Text(text)) => writeln!(out, "{}", text)?,
            Ok(Reply::Nothing) => {}
            Ok(Reply::Quit) => break,
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }
    out.flush()?;
    Ok(())
}
