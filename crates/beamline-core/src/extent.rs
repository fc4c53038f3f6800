// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Component Extent
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bounding box of a straight component.

use beamline_types::constants::VACUUM_MATERIAL;
use beamline_types::geometry::ComponentExtent;

/// Half extents `(w/2, w/2, l/2)` for a square-section component.
pub fn compute_extent(horizontal_width: f64, chord_length: f64) -> ComponentExtent {
    ComponentExtent {
        half_x: 0.5 * horizontal_width,
        half_y: 0.5 * horizontal_width,
        half_z: 0.5 * chord_length,
    }
}

/// Vacuum-filled box enclosing the component.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerBox {
    pub solid_name: String,
    pub volume_name: String,
    pub material: String,
    pub extent: ComponentExtent,
}

impl ContainerBox {
    pub fn new(component: &str, horizontal_width: f64, chord_length: f64) -> Self {
        ContainerBox {
            solid_name: format!("{component}_container_solid"),
            volume_name: format!("{component}_container_lv"),
            material: VACUUM_MATERIAL.to_string(),
            extent: compute_extent(horizontal_width, chord_length),
        }
    }
}
