// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Geometry Loader Interface
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Boundary to the external geometry file loader.
//!
//! The file format is the loader's business; the component only sees the
//! resulting volume snapshot.

use beamline_types::error::{BeamlineError, BeamlineResult};
use beamline_types::geometry::Volume;
use std::collections::HashMap;
use std::sync::Arc;

pub trait GeometryLoader {
    /// Load the geometry `name` from `path` and return its volumes.
    fn load(&self, name: &str, path: &str) -> BeamlineResult<Vec<Arc<Volume>>>;
}

/// Loader serving pre-built volume sets keyed by path.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    sets: HashMap<String, Vec<Arc<Volume>>>,
}

impl StaticGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_volumes(mut self, path: &str, volumes: Vec<Volume>) -> Self {
        self.sets
            .insert(path.to_string(), volumes.into_iter().map(Arc::new).collect());
        self
    }
}

impl GeometryLoader for StaticGeometry {
    fn load(&self, name: &str, path: &str) -> BeamlineResult<Vec<Arc<Volume>>> {
        self.sets.get(path).cloned().ok_or_else(|| {
            BeamlineError::Geometry(format!("No geometry '{name}' available at '{path}'"))
        })
    }
}
