//! Template file model and discovery.
//!
//! A G-code template is an ASCII file whose name ends in `.gtemplate`, whose
//! name contains the placeholder token `##NOZZLETEMP##`, and whose body
//! contains the literal command text `M104 ##NOZZLETEMP##`. The constants here
//! are process-wide and fixed at build time.

use crate::error::{GtempError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The single substitution point recognized in file names and file content.
pub const NOZZLE_TEMP_PLACEHOLDER: &str = "##NOZZLETEMP##";

/// Required file name suffix identifying a template.
pub const TEMPLATE_SUFFIX: &str = ".gtemplate";

/// Extension of rendered output files (without the dot, for `Path::with_extension`).
pub const GCODE_EXTENSION: &str = "gcode";

/// G-code command that sets the nozzle temperature.
pub const NOZZLE_TEMP_COMMAND: &str = "M104";

/// A candidate template file discovered in the templates directory.
///
/// Candidates are read-only inputs; they are never mutated. Construction does
/// not read or validate the file; the validator and renderer do that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCandidate {
    path: PathBuf,
    file_name: String,
}

impl TemplateCandidate {
    pub fn new(path: PathBuf, file_name: String) -> Self {
        Self { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including the `.gtemplate` suffix.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name with the final extension removed.
    pub fn stem(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => &self.file_name,
        }
    }

    /// Name of the directory containing the template, for preview display.
    pub fn parent_name(&self) -> &str {
        self.path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("")
    }

    /// Read the template's full content as text.
    pub fn read_content(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            GtempError::Io(format!(
                "failed to read template '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Discover template candidates: all files directly inside `dir` whose name
/// ends with the template suffix. Non-recursive; entries are sorted by file
/// name so run order is deterministic.
pub fn discover_templates(dir: &Path) -> Result<Vec<TemplateCandidate>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        GtempError::Io(format!(
            "failed to read templates directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            GtempError::Io(format!(
                "failed to read entry in '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let file_type = entry.file_type().map_err(|e| {
            GtempError::Io(format!(
                "failed to stat '{}': {}",
                entry.path().display(),
                e
            ))
        })?;
        if !file_type.is_file() {
            continue;
        }

        // Non-UTF-8 file names cannot contain the suffix or placeholder; skip them.
        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !file_name.ends_with(TEMPLATE_SUFFIX) {
            continue;
        }

        candidates.push(TemplateCandidate::new(entry.path(), file_name));
    }

    candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn discovers_only_template_suffix_files() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "a_##NOZZLETEMP##.gtemplate", "M104 ##NOZZLETEMP##\n");
        write_file(temp.path(), "notes.txt", "not a template");
        write_file(temp.path(), "b_##NOZZLETEMP##.gcode", "already rendered");

        let candidates = discover_templates(temp.path()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].file_name(), "a_##NOZZLETEMP##.gtemplate");
    }

    #[test]
    fn discovery_is_non_recursive() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write_file(&nested, "deep_##NOZZLETEMP##.gtemplate", "M104 ##NOZZLETEMP##\n");

        let candidates = discover_templates(temp.path()).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn discovery_is_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "zeta_##NOZZLETEMP##.gtemplate", "");
        write_file(temp.path(), "alpha_##NOZZLETEMP##.gtemplate", "");

        let candidates = discover_templates(temp.path()).unwrap();
        let names: Vec<&str> = candidates.iter().map(|c| c.file_name()).collect();
        assert_eq!(
            names,
            vec![
                "alpha_##NOZZLETEMP##.gtemplate",
                "zeta_##NOZZLETEMP##.gtemplate"
            ]
        );
    }

    #[test]
    fn discovery_fails_on_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        assert!(discover_templates(&missing).is_err());
    }

    #[test]
    fn stem_strips_final_extension_only() {
        let candidate = TemplateCandidate::new(
            PathBuf::from("/tmp/part_##NOZZLETEMP##_v1.gtemplate"),
            "part_##NOZZLETEMP##_v1.gtemplate".to_string(),
        );
        assert_eq!(candidate.stem(), "part_##NOZZLETEMP##_v1");

        let dotted = TemplateCandidate::new(
            PathBuf::from("/tmp/a.b_##NOZZLETEMP##.gtemplate"),
            "a.b_##NOZZLETEMP##.gtemplate".to_string(),
        );
        assert_eq!(dotted.stem(), "a.b_##NOZZLETEMP##");
    }

    #[test]
    fn read_content_returns_file_text() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "t_##NOZZLETEMP##.gtemplate", "M104 ##NOZZLETEMP## ; heat\n");

        let candidates = discover_templates(temp.path()).unwrap();
        let content = candidates[0].read_content().unwrap();
        assert_eq!(content, "M104 ##NOZZLETEMP## ; heat\n");
    }
}
