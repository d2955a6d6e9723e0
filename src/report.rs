use crate::error::MarksResult;
use crate::form::{FieldSpec, Forms};
use crate::gauge::{Band, Gauge};
use crate::scheme::Scheme;
use crate::scorer::{types::fixed2, ScoreResult};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

const BAR_WIDTH: usize = 20;

fn band_color(band: Band) -> Color {
    match band {
        Band::Good => Color::Green,
        Band::Warning => Color::Yellow,
        Band::Critical => Color::Red,
    }
}

pub fn heading(result: &ScoreResult) -> String {
    format!(
        "Your {} Internal Marks: {}/{}",
        result.scheme.title(),
        fixed2(result.total_score),
        result.max_score
    )
}

/// Text stand-in for the circular gauge, e.g. `[######--------------] 29% (critical)`.
pub fn gauge_line(gauge: &Gauge) -> String {
    let filled = ((gauge.arc_fraction() * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!(
        "[{}{}] {}% ({})",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        gauge.rounded_percent(),
        gauge.band
    )
}

pub fn breakdown_table(result: &ScoreResult) -> Table {
    let gauge = Gauge::from_result(result);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Component").add_attribute(Attribute::Bold),
            Cell::new("Marks").add_attribute(Attribute::Bold),
        ]);

    let last = result.breakdown.len().saturating_sub(1);
    for (i, entry) in result.breakdown.iter().enumerate() {
        let label = format!("{}:", entry.label);
        let value = entry.value.to_string();
        if i == last {
            table.add_row(vec![
                Cell::new(label).add_attribute(Attribute::Bold),
                Cell::new(value)
                    .add_attribute(Attribute::Bold)
                    .fg(band_color(gauge.band)),
            ]);
        } else {
            table.add_row(vec![Cell::new(label), Cell::new(value)]);
        }
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Heading, gauge and breakdown for one result.
pub fn render_result(result: &ScoreResult) -> String {
    let gauge = Gauge::from_result(result);
    format!(
        "{}\n{}\n{}",
        heading(result),
        gauge_line(&gauge),
        breakdown_table(result)
    )
}

/// The input surface of one scheme with the values currently entered.
pub fn render_fields(forms: &Forms, scheme: Scheme) -> MarksResult<String> {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Label"),
            Cell::new("Min"),
            Cell::new("Max"),
            Cell::new("Value").fg(Color::Cyan),
        ]);

    for spec in scheme.fields() {
        let raw = forms.get(scheme, spec.name)?;
        let max = spec.max.map(|m| m.to_string()).unwrap_or_default();
        table.add_row(vec![
            Cell::new(spec.name).add_attribute(Attribute::Bold),
            Cell::new(spec.label),
            Cell::new(FieldSpec::MIN),
            Cell::new(max),
            Cell::new(raw).fg(Color::Cyan),
        ]);
    }

    Ok(format!("{}\n{}", scheme.selector_label(), table))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ScoreResult,
    percentage: f64,
    rounded_percent: u32,
    band: Band,
    color: &'static str,
}

pub fn to_json(result: &ScoreResult) -> MarksResult<String> {
    let gauge = Gauge::from_result(result);
    let report = JsonReport {
        result,
        percentage: gauge.percentage,
        rounded_percent: gauge.rounded_percent(),
        band: gauge.band,
        color: gauge.band.color_hex(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
