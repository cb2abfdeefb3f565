//! Non-interactive output for the `list` and `regions` commands.

use crate::country::CountryRecord;

const COLUMNS: [&str; 6] = ["CODE", "NAME", "CAPITAL", "REGION", "POPULATION", "AREA"];

fn row(record: &CountryRecord) -> [String; 6] {
    [
        record.alpha3_code.clone(),
        format!("{} {}", record.flag.emoji, record.name).trim().to_string(),
        record.capital.clone(),
        record.region.clone(),
        record.population_text(),
        record.area_text(),
    ]
}

/// Aligned text table, one record per line, with a header row.
pub fn render_table(records: &[&CountryRecord]) -> String {
    let rows: Vec<[String; 6]> = records.iter().map(|record| row(record)).collect();

    let mut widths = COLUMNS.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = COLUMNS.map(str::to_string);
    for cells in std::iter::once(&header).chain(rows.iter()) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Records as a pretty-printed JSON array in the API's field naming.
pub fn render_json(records: &[&CountryRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// One region per line.
pub fn render_regions(regions: &[String]) -> String {
    regions.iter().map(|region| format!("{}\n", region)).collect()
}
