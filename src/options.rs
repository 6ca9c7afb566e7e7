//! Centralized ingestion options with TOML preset support.
//!
//! All tweakable settings consumed by the pipeline (atom scaling, sphere
//! tessellation, bond inference threshold) are consolidated here. Options
//! serialize to/from TOML so hosts can persist presets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MolgeomError;

/// Geometry detail options for molecular buffer assembly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeometryOptions {
    /// Uniform scale applied to atom positions, bond endpoints, and sphere
    /// radii during assembly.
    pub atom_scale: f32,
    /// Latitude bands for per-atom UV spheres in merged-mesh mode.
    pub sphere_lat_bands: u32,
    /// Longitude bands for per-atom UV spheres in merged-mesh mode.
    pub sphere_long_bands: u32,
    /// Bond cylinder radius in merged-mesh mode.
    pub bond_radius: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            atom_scale: 0.3,
            sphere_lat_bands: 8,
            sphere_long_bands: 8,
            bond_radius: 0.15,
        }
    }
}

/// Bond inference options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BondOptions {
    /// Maximum center-to-center distance for an inferred bond. Pairs at
    /// exactly this distance do NOT bond (strict `<` test).
    pub distance_threshold: f32,
}

impl Default for BondOptions {
    fn default() -> Self {
        Self {
            distance_threshold: crate::structure::bond_inference::DEFAULT_BOND_DISTANCE,
        }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[bonds]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Mesh assembly and tessellation options.
    pub geometry: GeometryOptions,
    /// Bond inference options.
    pub bonds: BondOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    /// Returns [`MolgeomError::Io`] if the file cannot be read and
    /// [`MolgeomError::OptionsParse`] if the TOML is invalid.
    pub fn load(path: &Path) -> Result<Self, MolgeomError> {
        let content = std::fs::read_to_string(path).map_err(MolgeomError::Io)?;
        toml::from_str(&content).map_err(|e| MolgeomError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    /// Returns [`MolgeomError::OptionsParse`] if serialization fails and
    /// [`MolgeomError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), MolgeomError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolgeomError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolgeomError::Io)?;
        }
        std::fs::write(path, content).map_err(MolgeomError::Io)
    }
}
