// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Field Assignment Planner
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Field recipes and their two-phase registration.
//!
//! The beam pipe gets a uniform dipole field along +x, the iron yoke gets
//! a tabulated 3-D map. Components only *register* assignments; the host
//! calls [`FieldBuilder::construct_all`] once every component is done.

use beamline_types::error::BeamlineResult;
use beamline_types::geometry::{ThreeVector, Volume};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegratorType {
    #[serde(rename = "g4classicalrk4")]
    ClassicalRk4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldFormat {
    Bdsim3d,
}

/// Named strength table, e.g. `field`, `bx`, `by`, `bz`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MagnetStrength {
    values: BTreeMap<String, f64>,
}

impl MagnetStrength {
    pub fn set(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
    }

    /// Unset keys read as zero.
    pub fn get(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldRecipe {
    /// Pure dipole: `magnitude` [T] along the unit `direction`.
    Uniform {
        magnitude: f64,
        direction: ThreeVector,
    },
    /// Field map read by the host field engine; the path is not checked here.
    TabulatedMap { path: String, format: FieldFormat },
}

impl FieldRecipe {
    /// Strength table handed to the dipole field constructor.
    pub fn strength(&self) -> Option<MagnetStrength> {
        match self {
            FieldRecipe::Uniform {
                magnitude,
                direction,
            } => {
                let mut st = MagnetStrength::default();
                st.set("field", *magnitude);
                st.set("bx", direction.x);
                st.set("by", direction.y);
                st.set("bz", direction.z);
                Some(st)
            }
            FieldRecipe::TabulatedMap { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldTransform {
    pub translation: ThreeVector,
    pub rotation: Option<[[f64; 3]; 3]>,
}

impl FieldTransform {
    pub fn identity() -> Self {
        Self::default()
    }
}

/// Everything the field engine needs to build one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub recipe: FieldRecipe,
    pub integrator: IntegratorType,
    /// Magnetic rigidity [T·m]; unused by a pure dipole or map.
    pub brho: f64,
    pub transform: FieldTransform,
}

impl FieldInfo {
    pub fn uniform_dipole(magnitude: f64) -> Self {
        FieldInfo {
            recipe: FieldRecipe::Uniform {
                magnitude,
                direction: ThreeVector::new(1.0, 0.0, 0.0),
            },
            integrator: IntegratorType::ClassicalRk4,
            brho: 0.0,
            transform: FieldTransform::identity(),
        }
    }

    pub fn bdsim3d_map(path: &str) -> Self {
        FieldInfo {
            recipe: FieldRecipe::TabulatedMap {
                path: path.to_string(),
                format: FieldFormat::Bdsim3d,
            },
            integrator: IntegratorType::ClassicalRk4,
            brho: 0.0,
            transform: FieldTransform::identity(),
        }
    }
}

/// A field recipe bound to the volume it governs.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAssignment {
    /// Name of the component that registered it.
    pub component: String,
    pub volume: Arc<Volume>,
    pub info: Arc<FieldInfo>,
    pub propagate_to_daughters: bool,
}

/// One uniform assignment per pipe volume, then one map assignment per
/// yoke volume. Each recipe is shared by all volumes it covers.
pub fn plan_field_assignments(
    component: &str,
    pipe: &[Arc<Volume>],
    yoke: &[Arc<Volume>],
    field_magnitude: f64,
    map_path: &str,
) -> Vec<FieldAssignment> {
    let mut out = Vec::with_capacity(pipe.len() + yoke.len());

    let uniform = Arc::new(FieldInfo::uniform_dipole(field_magnitude));
    out.extend(pipe.iter().map(|v| FieldAssignment {
        component: component.to_string(),
        volume: Arc::clone(v),
        info: Arc::clone(&uniform),
        propagate_to_daughters: true,
    }));

    let map = Arc::new(FieldInfo::bdsim3d_map(map_path));
    out.extend(yoke.iter().map(|v| FieldAssignment {
        component: component.to_string(),
        volume: Arc::clone(v),
        info: Arc::clone(&map),
        propagate_to_daughters: true,
    }));

    out
}

/// Sink for field assignments awaiting construction.
pub trait FieldRegistry {
    fn register(&mut self, assignment: FieldAssignment);

    /// Drop every pending assignment of `component`, returning how many.
    fn unregister(&mut self, component: &str) -> usize;
}

/// Host engine that actually builds and attaches a field.
pub trait FieldEngine {
    fn attach(&mut self, assignment: &FieldAssignment) -> BeamlineResult<()>;
}

/// Collects registrations from every component; builds them in one pass.
#[derive(Debug, Default)]
pub struct FieldBuilder {
    pending: Vec<FieldAssignment>,
}

impl FieldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[FieldAssignment] {
        &self.pending
    }

    /// Attach every pending assignment in registration order.
    ///
    /// Stops at the first engine error; assignments not yet attached stay
    /// pending.
    pub fn construct_all(&mut self, engine: &mut dyn FieldEngine) -> BeamlineResult<usize> {
        let mut built = 0;
        let mut failure = None;
        for assignment in &self.pending {
            if let Err(e) = engine.attach(assignment) {
                failure = Some(e);
                break;
            }
            built += 1;
        }
        self.pending.drain(..built);
        if let Some(e) = failure {
            return Err(e);
        }
        tracing::info!(count = built, "constructed registered fields");
        Ok(built)
    }
}

impl FieldRegistry for FieldBuilder {
    fn register(&mut self, assignment: FieldAssignment) {
        tracing::trace!(volume = %assignment.volume.name, "field registered");
        self.pending.push(assignment);
    }

    fn unregister(&mut self, component: &str) -> usize {
        let before = self.pending.len();
        self.pending.retain(|a| a.component != component);
        before - self.pending.len()
    }
}
