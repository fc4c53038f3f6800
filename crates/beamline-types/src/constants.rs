// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Beamline Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Names, paths and default dimensions of the UDipole component.
//! Lengths are in metres, fields in tesla.

/// Volume name that marks the beam-pipe interior.
pub const PIPE_VOLUME_NAME: &str = "inner_pipe_l";

/// Volume name that marks the enclosing world/container volume.
pub const CONTAINER_VOLUME_NAME: &str = "wl";

/// Material whose volumes form the magnetic yoke.
pub const YOKE_MATERIAL: &str = "G4_Fe";

pub const VACUUM_MATERIAL: &str = "vacuum";
pub const AIR_MATERIAL: &str = "air";
pub const STEEL_MATERIAL: &str = "stainlesssteel";

/// Visualisation colour tag used when the user parameters carry none.
pub const DEFAULT_COLOUR: &str = "rectangularbend";

/// User parameter key that overrides the colour tag.
pub const COLOUR_KEY: &str = "colour";

/// Component type tag reported to the host.
pub const UDIPOLE_TYPE_NAME: &str = "udipole";

/// Default chord length [m].
pub const DEFAULT_CHORD_LENGTH: f64 = 1.57;

/// Default full horizontal width [m].
pub const DEFAULT_HORIZONTAL_WIDTH: f64 = 1.0;

pub const DEFAULT_GEOMETRY_NAME: &str = "pipe";
pub const DEFAULT_GEOMETRY_PATH: &str = "./pipe.gdml";
pub const DEFAULT_FIELD_MAP_PATH: &str = "./fieldmaps/FieldMap_B3G_Complete.dat.gz";

/// Suffix of every physical instance placed by the component.
pub const PLACEMENT_SUFFIX: &str = "_bp_1_pv";
