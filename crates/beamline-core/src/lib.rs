// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Beamline Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! UDipole beamline component: volume classification, placement planning,
//! field assignment and extent publication.
//!
//! Geometry loading, placement, and field construction are host services
//! reached through the traits in `loader`, `placement` and `field`.

pub mod classifier;
pub mod extent;
pub mod field;
pub mod loader;
pub mod materials;
pub mod params;
pub mod placement;
pub mod udipole;
