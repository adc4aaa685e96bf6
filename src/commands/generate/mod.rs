//! The generate pipeline: resolve inputs, confirm, validate, render.
//!
//! Control flow is strictly sequential and every failure is terminal:
//!
//! ```text
//! ResolvingInputs -> AwaitingConfirmation -> {Aborted | Validating}
//!                 -> {ValidationFailed | Rendering} -> Done
//! ```
//!
//! The confirmation gate sits before validation and rendering so the operator
//! sees exactly which temperatures and templates a run would touch before any
//! file is written.

mod display;


use crate::cli::Cli;
use crate::confirm::Confirmation;
use crate::error::{GtempError, Result};
use crate::presets;
use crate::render::render;
use crate::template::discover_templates;
use crate::validate::validate;
use std::path::{Path, PathBuf};

use display::{print_preview, print_violations};

/// Execute the generate pipeline.
///
/// # Behavior
///
/// - Both directories must exist before anything else happens.
/// - Exactly one temperature source is present (enforced by clap); the
///   resolved list is used verbatim, order and duplicates preserved.
/// - A non-affirmative confirmation aborts with no files written.
/// - Any contract violation stops the run before rendering; violations are
///   reported as two itemized lists, never a bare boolean.
pub fn cmd_generate(args: &Cli, confirm: &mut dyn Confirmation) -> Result<()> {
    let templates_dir = ensure_directory(&args.templates, "templates")?;
    let output_dir = ensure_directory(&args.output, "output")?;

    let temps = resolve_temps(args)?;
    let candidates = discover_templates(&templates_dir)?;

    print_preview(&temps, &candidates);

    if !confirm.confirm("\nConfirm? [Y/n]: ")? {
        println!("Aborting export!");
        return Err(GtempError::Aborted);
    }

    let report = validate(&candidates)?;
    if !report.is_ok() {
        print_violations(&report);
        let total = report.filename_violations.len() + report.content_violations.len();
        return Err(GtempError::Validation(format!(
            "{} contract violation(s) found",
            total
        )));
    }

    render(&candidates, &temps, &output_dir)?;

    Ok(())
}

/// Resolve the nozzle temperature list from the selected source.
///
/// clap guarantees exactly one source; the fall-through and the empty-list
/// check are defensive so a bad resolution fails loudly instead of silently
/// rendering zero files.
fn resolve_temps(args: &Cli) -> Result<Vec<u32>> {
    let temps = if let Some(custom) = &args.temps_custom {
        custom.clone()
    } else if let Some(material) = args.temps_preset {
        presets::nozzle_temps(material).to_vec()
    } else {
        return Err(GtempError::Config(
            "no nozzle temperature source selected".to_string(),
        ));
    };

    if temps.is_empty() {
        return Err(GtempError::Config(
            "resolved nozzle temperature list is empty".to_string(),
        ));
    }

    Ok(temps)
}

/// Resolve a path and require it to be an existing directory.
fn ensure_directory(path: &Path, role: &str) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .map_err(|_| invalid_directory(role, path))?;
    if !resolved.is_dir() {
        return Err(invalid_directory(role, &resolved));
    }
    Ok(resolved)
}

fn invalid_directory(role: &str, path: &Path) -> GtempError {
    GtempError::Config(format!(
        "the '{}' path is not a valid directory: {}",
        role,
        path.display()
    ))
}
