//! Output formatting utilities

use crate::application::SchemeRow;
use crate::domain::DocumentFormat;

/// Format dispatch table rows, one per line.
///
/// The unknown-kind row shows `*` as its kind; a format without a generic
/// type shows `(unsupported)` there.
pub fn format_scheme_rows(rows: &[SchemeRow]) -> String {
    let mut output = String::new();
    for row in rows {
        let kind = row.kind.map(|k| k.name()).unwrap_or("*");
        let type_attr = match (row.type_attr, row.kind, row.format) {
            (Some(t), _, _) => t,
            (None, None, DocumentFormat::Tei) => "(unsupported)",
            (None, _, _) => "-",
        };
        output.push_str(&format!(
            "{:<4} {:<11} {:<9} {}\n",
            row.format.name(),
            kind,
            row.tag,
            type_attr
        ));
    }
    output
}

/// Format config entries as `key = value` lines
pub fn format_config_list(entries: &[(&str, String)]) -> String {
    let mut output = String::new();
    for (key, value) in entries {
        output.push_str(&format!("{} = {}\n", key, value));
    }
    output
}
