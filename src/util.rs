// SPDX-License-Identifier: MPL-2.0
//! Small presentation helpers that ship alongside the localization core:
//! human-readable file sizes, CSV export of tabular data, and the
//! case-insensitive containment filter behind table/card search boxes.

/// Formats a byte count as `Bytes`/`KB`/`MB`/`GB` with up to two decimals,
/// trailing zeros dropped.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut exponent = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && exponent < UNITS.len() - 1 {
        scaled /= 1024.0;
        exponent += 1;
    }
    let rendered = format!("{scaled:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, UNITS[exponent])
}

fn csv_field(text: &str) -> String {
    format!("\"{}\"", text.trim().replace('"', "\"\""))
}

/// Serializes a header row plus data rows as CSV text. Every field is
/// quote-wrapped with embedded quotes doubled.
pub fn export_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| csv_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.iter()
                .map(|cell| csv_field(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Indices of the rows whose concatenated text contains `term`,
/// case-insensitively. An empty term matches every row.
pub fn filter_rows(rows: &[Vec<String>], term: &str) -> Vec<usize> {
    let term = term.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            term.is_empty()
                || row
                    .iter()
                    .any(|cell| cell.to_lowercase().contains(&term))
        })
        .map(|(index, _)| index)
        .collect()
}
