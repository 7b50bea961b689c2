use crate::core::phase::classify_with;
use crate::domain::model::{ExportFormat, PhaseRule, ResolvedWeekData};
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

pub const HEADER: [&str; 7] = [
    "week",
    "length_cm",
    "weight_grams",
    "size_label",
    "weight_label",
    "comparison",
    "phase",
];

/// Render resolved weeks as CSV, TSV or pretty JSON.
pub fn render(rows: &[ResolvedWeekData], format: ExportFormat, rule: PhaseRule) -> Result<String> {
    match format {
        ExportFormat::Csv => render_delimited(rows, b',', rule),
        ExportFormat::Tsv => render_delimited(rows, b'\t', rule),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

fn render_delimited(rows: &[ResolvedWeekData], delimiter: u8, rule: PhaseRule) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    wtr.write_record(HEADER)?;

    for row in rows {
        let phase = classify_with(rule, row.week.floor() as i64);
        wtr.write_record([
            row.week.to_string(),
            row.length_cm.to_string(),
            row.weight_grams.to_string(),
            row.size_label.clone(),
            row.weight_label.clone(),
            format!("{} {}", row.comparison_emoji, row.comparison_object)
                .trim()
                .to_string(),
            phase.name.to_string(),
        ])?;
    }

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()).into())
}

/// 寫入檔案，必要時建立上層目錄
pub fn write_to<P: AsRef<Path>>(
    path: P,
    rows: &[ResolvedWeekData],
    format: ExportFormat,
    rule: PhaseRule,
) -> Result<()> {
    let path = path.as_ref();
    let content = render(rows, format, rule)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    tracing::debug!(
        "Writing {} rows ({} bytes) to {}",
        rows.len(),
        content.len(),
        path.display()
    );
    fs::write(path, content)?;
    Ok(())
}
