//! Summary printed after a successful toggle.

use std::io::Write;

use colored::Colorize;

use crate::hosts::ToggleReport;

/// Render the summary. Category sections are omitted when empty.
pub fn render(report: &ToggleReport) -> String {
    let mut out = format!("Toggling {}..\n", report.project);
    push_section(
        &mut out,
        &"Uncommented the following lines:".green().to_string(),
        &report.uncommented,
    );
    push_section(
        &mut out,
        &"Commented the following lines:".red().to_string(),
        &report.commented,
    );
    out
}

fn push_section(out: &mut String, header: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    out.push_str(header);
    out.push('\n');
    for line in lines {
        out.push('\t');
        out.push_str(line);
        out.push('\n');
    }
}

/// Write the rendered summary to `out`.
pub fn write_to(out: &mut dyn Write, report: &ToggleReport) -> std::io::Result<()> {
    out.write_all(render(report).as_bytes())?;
    out.flush()
}
