//! Static nozzle temperature presets, keyed by filament material.
//!
//! The preset table is fixed at build time. Unknown materials are rejected at
//! the argument-parsing boundary because [`Material`] is a closed `ValueEnum`;
//! there is no runtime lookup that can miss.

use clap::ValueEnum;

/// Filament materials with predefined nozzle temperature sweeps.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    #[value(name = "PLA")]
    Pla,
    #[value(name = "PETG")]
    Petg,
    #[value(name = "PETG-CF")]
    PetgCf,
}

const PLA_TEMPS: &[u32] = &[230, 225, 220, 215, 210, 205, 200, 195, 190];
const PETG_TEMPS: &[u32] = &[260, 255, 250, 245, 240, 235, 230, 225, 220, 215, 210];

/// Look up the preset temperature sweep for a material.
///
/// The returned slice is ordered as authored (highest to lowest); the order is
/// preserved through rendering but carries no semantic meaning.
pub fn nozzle_temps(material: Material) -> &'static [u32] {
    match material {
        Material::Pla => PLA_TEMPS,
        Material::Petg => PETG_TEMPS,
        // Carbon-fiber PETG uses the same sweep as plain PETG.
        Material::PetgCf => PETG_TEMPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pla_preset_matches_authored_order() {
        assert_eq!(
            nozzle_temps(Material::Pla),
            &[230, 225, 220, 215, 210, 205, 200, 195, 190]
        );
    }

    #[test]
    fn petg_presets_match_authored_order() {
        let expected = &[260, 255, 250, 245, 240, 235, 230, 225, 220, 215, 210];
        assert_eq!(nozzle_temps(Material::Petg), expected);
        assert_eq!(nozzle_temps(Material::PetgCf), expected);
    }

    #[test]
    fn presets_are_non_empty() {
        for material in [Material::Pla, Material::Petg, Material::PetgCf] {
            assert!(!nozzle_temps(material).is_empty());
        }
    }
}
