//! Report rendering
//!
//! Turns a `DoctorReport` into human-readable text or JSON. Presentation
//! only; pass/fail decisions stay on the report itself.

use crate::doctor::{DoctorReport, ValidationType};
use crate::error::Result;

fn marker(kind: ValidationType) -> &'static str {
    match kind {
        ValidationType::Installed => "[✓]",
        ValidationType::Partial => "[!]",
        ValidationType::Missing => "[✗]",
    }
}

/// Render a report as indented text, one block per validator.
///
/// Error messages are bulleted with `✗`, informational ones with `•`;
/// continuation lines of multi-line messages are indented under their
/// bullet.
pub fn render_text(report: &DoctorReport) -> String {
    let mut out = String::new();

    for entry in &report.entries {
        match &entry.result.status_info {
            Some(info) => out.push_str(&format!(
                "{} {} ({})\n",
                marker(entry.result.kind),
                entry.title,
                info
            )),
            None => out.push_str(&format!("{} {}\n", marker(entry.result.kind), entry.title)),
        }

        for message in &entry.result.messages {
            let bullet = if message.is_error { "✗" } else { "•" };
            for (index, line) in message.text.lines().enumerate() {
                if index == 0 {
                    out.push_str(&format!("    {} {}\n", bullet, line));
                } else {
                    out.push_str(&format!("      {}\n", line.trim_start()));
                }
            }
        }
    }

    out
}

/// Render a report as pretty-printed JSON
pub fn render_json(report: &DoctorReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
