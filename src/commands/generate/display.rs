//! Display and formatting utilities for generate command output.

use crate::template::TemplateCandidate;
use crate::validate::{ValidationReport, required_content_text};

/// Print the run preview: resolved temperatures and discovered templates.
pub fn print_preview(temps: &[u32], candidates: &[TemplateCandidate]) {
    let temp_list = temps
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "Applying nozzle temps [{}] to {} templates:",
        temp_list,
        candidates.len()
    );
    for candidate in candidates {
        println!("  {}/{}", candidate.parent_name(), candidate.file_name());
    }
}

/// Print both violation lists, itemized, one section per failed check.
pub fn print_violations(report: &ValidationReport) {
    if !report.filename_violations.is_empty() {
        println!("\nError: the following templates have invalid file names:");
        for name in &report.filename_violations {
            println!("  {}", name);
        }
    }

    if !report.content_violations.is_empty() {
        println!(
            "Error: the following templates are missing nozzle temperature template text '{}':",
            required_content_text()
        );
        for name in &report.content_violations {
            println!("  {}", name);
        }
    }
}
