//! CLI argument parsing for gtemp.
//!
//! Uses clap derive macros for declarative argument definitions. The two
//! temperature sources are a required, mutually exclusive group: exactly one
//! of `--temps-preset` or `--temps-custom` must be supplied, enforced here at
//! the parse boundary before any filesystem access.

use crate::presets::Material;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Gtemp: generate an array of G-code files with different nozzle temperatures.
///
/// A G-code template is an ASCII file that satisfies three rules:
///
/// 1. Its file name ends in '.gtemplate'; at render time this becomes '.gcode'.
///
/// 2. Its file name contains the placeholder '##NOZZLETEMP##'; at render time
///    this becomes the temperature followed by a 'C':
///    part_##NOZZLETEMP##_v1.gtemplate -> part_230C_v1.gcode
///
/// 3. Its content contains the nozzle temperature command 'M104' followed by
///    the placeholder; every placeholder occurrence becomes the temperature
///    prefixed with an 'S':
///    M104 ##NOZZLETEMP## ; set temperature -> M104 S230 ; set temperature
#[derive(Parser, Debug)]
#[command(name = "gtemp")]
#[command(author, version, about)]
#[command(group(ArgGroup::new("temps").required(true).multiple(false)))]
pub struct Cli {
    /// Directory containing G-code templates ('[name].gtemplate')
    #[arg(short, long, value_name = "DIR")]
    pub templates: PathBuf,

    /// Directory rendered G-code files are written into (must exist)
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Select a preset list of nozzle temperatures for a material...
    #[arg(
        short = 'p',
        long = "temps-preset",
        value_name = "MATERIAL",
        group = "temps"
    )]
    pub temps_preset: Option<Material>,

    /// ...or provide a custom list of temperatures in Celsius
    #[arg(
        short = 'c',
        long = "temps-custom",
        value_name = "TEMP",
        num_args = 1..,
        group = "temps"
    )]
    pub temps_custom: Option<Vec<u32>>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
