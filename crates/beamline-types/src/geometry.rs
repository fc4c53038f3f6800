// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Beamline Geometry Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Cartesian 3-vector [m].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThreeVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ThreeVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        ThreeVector { x, y, z }
    }

    pub const fn zero() -> Self {
        ThreeVector::new(0.0, 0.0, 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Opaque reference to a solid owned by the external geometry engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolidHandle(pub u64);

/// A named, materialed region produced by the geometry loader.
///
/// Volumes are shared as `Arc<Volume>`; classification and planning only
/// hold references, the loader's snapshot stays the owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    pub name: String,
    pub material: String,
    pub shape: SolidHandle,
}

impl Volume {
    pub fn new(name: impl Into<String>, material: impl Into<String>, shape: SolidHandle) -> Self {
        Volume {
            name: name.into(),
            material: material.into(),
            shape,
        }
    }
}

/// Axis-aligned half dimensions of a component [m].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentExtent {
    pub half_x: f64,
    pub half_y: f64,
    pub half_z: f64,
}

impl ComponentExtent {
    /// Full widths `(2·half_x, 2·half_y, 2·half_z)`.
    pub fn full_size(&self) -> (f64, f64, f64) {
        (2.0 * self.half_x, 2.0 * self.half_y, 2.0 * self.half_z)
    }

    /// True if two extents centred at `self_centre` and `other_centre` intersect.
    pub fn overlaps(
        &self,
        self_centre: ThreeVector,
        other: &ComponentExtent,
        other_centre: ThreeVector,
    ) -> bool {
        (self_centre.x - other_centre.x).abs() < self.half_x + other.half_x
            && (self_centre.y - other_centre.y).abs() < self.half_y + other.half_y
            && (self_centre.z - other_centre.z).abs() < self.half_z + other.half_z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_construction() {
        let v = Volume::new("core", "G4_Fe", SolidHandle(7));
        assert_eq!(v.name, "core");
        assert_eq!(v.material, "G4_Fe");
        assert_eq!(v.shape, SolidHandle(7));
    }

    #[test]
    fn test_extent_overlap_along_beam_axis() {
        let ext = ComponentExtent {
            half_x: 0.5,
            half_y: 0.5,
            half_z: 0.785,
        };
        let origin = ThreeVector::zero();
        // Touching faces do not count as overlap.
        assert!(!ext.overlaps(origin, &ext, ThreeVector::new(0.0, 0.0, 1.57)));
        assert!(ext.overlaps(origin, &ext, ThreeVector::new(0.0, 0.0, 1.0)));
        assert_eq!(ext.full_size(), (1.0, 1.0, 1.57));
    }
}
