// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Property-Based Tests (proptest) for beamline-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for beamline-types using proptest.
//!
//! Covers: extent overlap symmetry, config validation bounds.

use beamline_types::config::UDipoleConfig;
use beamline_types::geometry::{ComponentExtent, ThreeVector};
use proptest::prelude::*;

// ── Extent Overlap ───────────────────────────────────────────────────

proptest! {
    /// Overlap is symmetric in its two operands.
    #[test]
    fn extent_overlap_symmetric(
        hx in 0.01f64..5.0,
        hy in 0.01f64..5.0,
        hz in 0.01f64..5.0,
        dx in -10.0f64..10.0,
        dz in -10.0f64..10.0,
    ) {
        let a = ComponentExtent { half_x: hx, half_y: hy, half_z: hz };
        let b = ComponentExtent { half_x: hy, half_y: hz, half_z: hx };
        let ca = ThreeVector::zero();
        let cb = ThreeVector::new(dx, 0.0, dz);
        prop_assert_eq!(a.overlaps(ca, &b, cb), b.overlaps(cb, &a, ca));
    }

    /// An extent always overlaps itself at the same centre.
    #[test]
    fn extent_overlaps_itself(
        hx in 0.01f64..5.0,
        hz in 0.01f64..5.0,
    ) {
        let a = ComponentExtent { half_x: hx, half_y: hx, half_z: hz };
        prop_assert!(a.overlaps(ThreeVector::zero(), &a, ThreeVector::zero()));
    }
}

// ── Config Validation ────────────────────────────────────────────────

proptest! {
    /// Positive dimensions with a non-empty name always validate.
    #[test]
    fn config_positive_dimensions_validate(
        width in 1e-3f64..10.0,
        length in 1e-3f64..50.0,
        b in -10.0f64..10.0,
    ) {
        let mut cfg = UDipoleConfig::new("ud", b, "");
        cfg.horizontal_width = width;
        cfg.chord_length = length;
        prop_assert!(cfg.validate().is_ok());
    }

    /// Non-positive chord length is always rejected.
    #[test]
    fn config_non_positive_length_rejected(length in -50.0f64..=0.0) {
        let mut cfg = UDipoleConfig::new("ud", 1.0, "");
        cfg.chord_length = length;
        prop_assert!(cfg.validate().is_err());
    }
}
