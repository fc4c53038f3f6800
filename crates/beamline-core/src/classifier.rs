// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Volume Classifier
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Partition of a loaded volume set into pipe, container, yoke and exterior.
//!
//! Classification walks an ordered list of `(predicate, bucket)` rules and
//! takes the first match; a volume matching no rule is exterior.

use beamline_types::constants::{CONTAINER_VOLUME_NAME, PIPE_VOLUME_NAME, YOKE_MATERIAL};
use beamline_types::error::{BeamlineError, BeamlineResult};
use beamline_types::geometry::Volume;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeBucket {
    PipeInterior,
    Container,
    Yoke,
    Exterior,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumePredicate {
    NameEquals(String),
    MaterialEquals(String),
}

impl VolumePredicate {
    pub fn matches(&self, volume: &Volume) -> bool {
        match self {
            VolumePredicate::NameEquals(name) => volume.name == *name,
            VolumePredicate::MaterialEquals(material) => volume.material == *material,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeRule {
    pub predicate: VolumePredicate,
    pub bucket: VolumeBucket,
}

#[derive(Debug, Clone)]
pub struct VolumeClassifier {
    rules: Vec<VolumeRule>,
}

impl Default for VolumeClassifier {
    fn default() -> Self {
        Self::udipole(YOKE_MATERIAL)
    }
}

impl VolumeClassifier {
    pub fn new(rules: Vec<VolumeRule>) -> Self {
        VolumeClassifier { rules }
    }

    /// Rule chain of the UDipole: pipe name, container name, yoke material.
    pub fn udipole(yoke_material: &str) -> Self {
        Self::new(vec![
            VolumeRule {
                predicate: VolumePredicate::NameEquals(PIPE_VOLUME_NAME.to_string()),
                bucket: VolumeBucket::PipeInterior,
            },
            VolumeRule {
                predicate: VolumePredicate::NameEquals(CONTAINER_VOLUME_NAME.to_string()),
                bucket: VolumeBucket::Container,
            },
            VolumeRule {
                predicate: VolumePredicate::MaterialEquals(yoke_material.to_string()),
                bucket: VolumeBucket::Yoke,
            },
        ])
    }

    pub fn rules(&self) -> &[VolumeRule] {
        &self.rules
    }

    pub fn bucket_of(&self, volume: &Volume) -> VolumeBucket {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(volume))
            .map(|rule| rule.bucket)
            .unwrap_or(VolumeBucket::Exterior)
    }

    /// Classify `volumes` in input order.
    ///
    /// More than one container match is rejected instead of letting the
    /// last one win.
    pub fn classify(&self, volumes: &[Arc<Volume>]) -> BeamlineResult<ClassifiedVolumes> {
        let mut out = ClassifiedVolumes::default();
        let mut containers: Vec<Arc<Volume>> = Vec::new();

        for volume in volumes {
            match self.bucket_of(volume) {
                VolumeBucket::Container => {
                    containers.push(Arc::clone(volume));
                    continue;
                }
                VolumeBucket::PipeInterior => out.pipe.push(Arc::clone(volume)),
                VolumeBucket::Yoke => out.yoke.push(Arc::clone(volume)),
                VolumeBucket::Exterior => out.exterior.push(Arc::clone(volume)),
            }
            out.placed.push(Arc::clone(volume));
        }

        if containers.len() > 1 {
            return Err(BeamlineError::DuplicateContainer {
                container: containers[0].name.clone(),
                count: containers.len(),
            });
        }
        out.container = containers.pop();

        tracing::debug!(
            pipe = out.pipe.len(),
            yoke = out.yoke.len(),
            exterior = out.exterior.len(),
            container = out.container.is_some(),
            "classified volumes"
        );
        Ok(out)
    }
}

/// Classifier output. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedVolumes {
    pipe: Vec<Arc<Volume>>,
    container: Option<Arc<Volume>>,
    yoke: Vec<Arc<Volume>>,
    exterior: Vec<Arc<Volume>>,
    // every non-container volume, input order
    placed: Vec<Arc<Volume>>,
}

impl ClassifiedVolumes {
    pub fn pipe(&self) -> &[Arc<Volume>] {
        &self.pipe
    }

    pub fn container(&self) -> Option<&Arc<Volume>> {
        self.container.as_ref()
    }

    pub fn yoke(&self) -> &[Arc<Volume>] {
        &self.yoke
    }

    pub fn exterior(&self) -> &[Arc<Volume>] {
        &self.exterior
    }

    /// Union of pipe, yoke and exterior in load order.
    pub fn non_container(&self) -> &[Arc<Volume>] {
        &self.placed
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty() && self.container.is_none()
    }
}
