//! Template rendering: the substitution cross-product.
//!
//! Every (template, temperature) pair produces one output file. Substitution
//! is literal substring replacement, never pattern matching, so template text
//! containing regex metacharacters is handled verbatim:
//!
//! - file content: every `##NOZZLETEMP##` becomes `S<temp>` (e.g. `S230`)
//! - file stem: every `##NOZZLETEMP##` becomes `<temp>C` (e.g. `230C`)
//!
//! Existing files at a destination path are overwritten; last writer wins.

use crate::error::{GtempError, Result};
use crate::template::{GCODE_EXTENSION, NOZZLE_TEMP_PLACEHOLDER, TemplateCandidate};
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of a render run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    /// `|candidates| x |temperatures|`, computed before any write.
    pub expected: usize,
    /// Files actually written. Equals `expected` unless a write failed.
    pub written: usize,
}

/// Substitute a temperature into template content.
pub fn substitute_content(content: &str, temp: u32) -> String {
    content.replace(NOZZLE_TEMP_PLACEHOLDER, &format!("S{}", temp))
}

/// Substitute a temperature into a template file stem.
pub fn substitute_stem(stem: &str, temp: u32) -> String {
    stem.replace(NOZZLE_TEMP_PLACEHOLDER, &format!("{}C", temp))
}

/// Destination path for one (template stem, temperature) pair.
///
/// The extension is forced to `.gcode`, overriding any extension the
/// substituted stem may appear to carry.
pub fn destination_path(output: &Path, stem: &str, temp: u32) -> PathBuf {
    output
        .join(substitute_stem(stem, temp))
        .with_extension(GCODE_EXTENSION)
}

/// Render every (candidate, temperature) pair into `output`.
///
/// Callers must validate candidates first; this function does not re-check
/// the naming or content contracts. Each candidate's content is read once,
/// then reused across all temperatures. Progress is reported per file, in
/// write order. A failed write terminates the run; files already written
/// stay in place.
pub fn render(
    candidates: &[TemplateCandidate],
    temps: &[u32],
    output: &Path,
) -> Result<RenderReport> {
    let expected = candidates.len() * temps.len();
    println!("\nRendering {} G-code files:", expected);

    let mut written = 0;
    for candidate in candidates {
        let content = candidate.read_content()?;

        for &temp in temps {
            let rendered = substitute_content(&content, temp);
            let destination = destination_path(output, candidate.stem(), temp);

            let destination_name = destination
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            println!("  {}C for {}", temp, destination_name);

            fs::write(&destination, rendered).map_err(|e| {
                GtempError::Io(format!(
                    "failed to write '{}': {}",
                    destination.display(),
                    e
                ))
            })?;
            written += 1;
        }
    }

    Ok(RenderReport { expected, written })
}
