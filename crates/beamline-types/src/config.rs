// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — UDipole Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{
    DEFAULT_CHORD_LENGTH, DEFAULT_FIELD_MAP_PATH, DEFAULT_GEOMETRY_NAME, DEFAULT_GEOMETRY_PATH,
    DEFAULT_HORIZONTAL_WIDTH, UDIPOLE_TYPE_NAME,
};
use crate::error::{BeamlineError, BeamlineResult};
use crate::geometry::ThreeVector;
use serde::{Deserialize, Serialize};

/// Construction parameters of a UDipole component.
///
/// Only `name` and `b_field` are required in JSON; everything else falls
/// back to the values the component was designed around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UDipoleConfig {
    /// Component name, unique within the host model.
    pub name: String,
    /// Dipole field magnitude on the beam pipe [T].
    pub b_field: f64,
    /// Raw user parameter string, `"key:value key:value"`.
    #[serde(default)]
    pub params: String,
    /// Chord length along the beam axis [m].
    #[serde(default = "default_chord_length")]
    pub chord_length: f64,
    /// Full horizontal (and vertical) width of the container box [m].
    #[serde(default = "default_horizontal_width")]
    pub horizontal_width: f64,
    /// Bending angle [rad]. The component is straight.
    #[serde(default)]
    pub angle: f64,
    #[serde(default = "default_type_name")]
    pub type_name: String,
    #[serde(default)]
    pub geometry: GeometrySource,
    #[serde(default = "default_field_map_path")]
    pub field_map_path: String,
    /// Ask the placement engine to check overlaps for every instance.
    #[serde(default)]
    pub check_overlaps: bool,
    /// Shared position of every placed volume inside the container [m].
    #[serde(default)]
    pub reference_offset: ThreeVector,
}

/// Where the external geometry description lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometrySource {
    pub name: String,
    pub path: String,
}

impl Default for GeometrySource {
    fn default() -> Self {
        GeometrySource {
            name: DEFAULT_GEOMETRY_NAME.to_string(),
            path: DEFAULT_GEOMETRY_PATH.to_string(),
        }
    }
}

fn default_chord_length() -> f64 {
    DEFAULT_CHORD_LENGTH
}
fn default_horizontal_width() -> f64 {
    DEFAULT_HORIZONTAL_WIDTH
}
fn default_type_name() -> String {
    UDIPOLE_TYPE_NAME.to_string()
}
fn default_field_map_path() -> String {
    DEFAULT_FIELD_MAP_PATH.to_string()
}

impl UDipoleConfig {
    /// Config with every optional field at its default.
    pub fn new(name: impl Into<String>, b_field: f64, params: impl Into<String>) -> Self {
        UDipoleConfig {
            name: name.into(),
            b_field,
            params: params.into(),
            chord_length: default_chord_length(),
            horizontal_width: default_horizontal_width(),
            angle: 0.0,
            type_name: default_type_name(),
            geometry: GeometrySource::default(),
            field_map_path: default_field_map_path(),
            check_overlaps: false,
            reference_offset: ThreeVector::zero(),
        }
    }

    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> BeamlineResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BeamlineResult<()> {
        if self.name.trim().is_empty() {
            return Err(BeamlineError::ConfigError(
                "UDipole requires a non-empty component name".to_string(),
            ));
        }
        if !self.b_field.is_finite() {
            return Err(BeamlineError::ConfigError(format!(
                "UDipole '{}' b_field must be finite, got {}",
                self.name, self.b_field
            )));
        }
        if !self.chord_length.is_finite() || self.chord_length <= 0.0 {
            return Err(BeamlineError::ConfigError(format!(
                "UDipole '{}' chord_length must be > 0, got {}",
                self.name, self.chord_length
            )));
        }
        if !self.horizontal_width.is_finite() || self.horizontal_width <= 0.0 {
            return Err(BeamlineError::ConfigError(format!(
                "UDipole '{}' horizontal_width must be > 0, got {}",
                self.name, self.horizontal_width
            )));
        }
        if !self.reference_offset.is_finite() {
            return Err(BeamlineError::ConfigError(format!(
                "UDipole '{}' reference_offset contains non-finite component",
                self.name
            )));
        }
        Ok(())
    }
}
