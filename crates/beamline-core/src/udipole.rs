// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — UDipole Component
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dipole built from externally authored pipe geometry.
//!
//! Construction loads and classifies the geometry once. `build` then
//! places every non-container volume, registers the pipe and yoke fields,
//! and publishes the extent, in that order.

use crate::classifier::{ClassifiedVolumes, VolumeClassifier};
use crate::extent::{compute_extent, ContainerBox};
use crate::field::{plan_field_assignments, FieldRegistry};
use crate::loader::GeometryLoader;
use crate::materials::{MaterialStore, ReferenceMaterials};
use crate::params::{parse_user_parameters, resolve_colour, UserParameters};
use crate::placement::{execute_placements, plan_placements, PlacementEngine, PlacementTracker};
use beamline_types::config::UDipoleConfig;
use beamline_types::constants::CONTAINER_VOLUME_NAME;
use beamline_types::error::{BeamlineError, BeamlineResult};
use beamline_types::geometry::{ComponentExtent, Volume};
use std::sync::Arc;

/// Counts from one `build` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub placements: usize,
    pub uniform_fields: usize,
    pub map_fields: usize,
}

#[derive(Debug)]
pub struct UDipole {
    config: UDipoleConfig,
    params: UserParameters,
    colour: String,
    materials: ReferenceMaterials,
    volumes: Vec<Arc<Volume>>,
    classified: ClassifiedVolumes,
    container_box: ContainerBox,
    placements: PlacementTracker,
    extent: Option<ComponentExtent>,
}

impl UDipole {
    pub fn new(
        config: UDipoleConfig,
        loader: &dyn GeometryLoader,
        materials: &dyn MaterialStore,
    ) -> BeamlineResult<Self> {
        config.validate()?;
        let params = parse_user_parameters(&config.params);
        let colour = resolve_colour(&params);
        let materials = ReferenceMaterials::resolve(materials);

        let volumes = loader.load(&config.geometry.name, &config.geometry.path)?;
        tracing::info!(
            component = %config.name,
            path = %config.geometry.path,
            volumes = volumes.len(),
            "loaded geometry"
        );

        let classified = VolumeClassifier::default()
            .classify(&volumes)
            .inspect_err(|e| tracing::error!(component = %config.name, "{e}"))?;
        let container_box =
            ContainerBox::new(&config.name, config.horizontal_width, config.chord_length);

        Ok(UDipole {
            config,
            params,
            colour,
            materials,
            volumes,
            classified,
            container_box,
            placements: PlacementTracker::new(),
            extent: None,
        })
    }

    /// Place the magnet, register its fields and publish the extent.
    ///
    /// A rebuild first releases the instances and withdraws the pending
    /// field registrations of the previous build.
    pub fn build(
        &mut self,
        placement: &mut dyn PlacementEngine,
        fields: &mut dyn FieldRegistry,
    ) -> BeamlineResult<BuildSummary> {
        self.placements.release_all();
        let withdrawn = fields.unregister(&self.config.name);
        if withdrawn > 0 {
            tracing::debug!(component = %self.config.name, withdrawn, "withdrew stale fields");
        }
        self.extent = None;

        let placed = self.build_magnet(placement)?;
        let (uniform_fields, map_fields) = self.build_field(fields);
        self.set_extent();

        Ok(BuildSummary {
            placements: placed,
            uniform_fields,
            map_fields,
        })
    }

    fn build_magnet(&mut self, engine: &mut dyn PlacementEngine) -> BeamlineResult<usize> {
        let requests = plan_placements(
            &self.config.name,
            self.classified.container(),
            self.classified.non_container(),
            self.config.reference_offset,
            self.config.check_overlaps,
        )
        .inspect_err(|e| tracing::error!("{e}"))?;

        let placed = execute_placements(&requests, engine, &mut self.placements)?;
        tracing::debug!(component = %self.config.name, placed, "placed magnet volumes");
        Ok(placed)
    }

    fn build_field(&self, registry: &mut dyn FieldRegistry) -> (usize, usize) {
        let pipe = self.classified.pipe();
        let yoke = self.classified.yoke();
        for assignment in plan_field_assignments(
            &self.config.name,
            pipe,
            yoke,
            self.config.b_field,
            &self.config.field_map_path,
        ) {
            registry.register(assignment);
        }
        tracing::debug!(
            component = %self.config.name,
            uniform = pipe.len(),
            map = yoke.len(),
            "registered fields"
        );
        (pipe.len(), yoke.len())
    }

    fn set_extent(&mut self) {
        let ext = compute_extent(self.config.horizontal_width, self.config.chord_length);
        tracing::debug!(
            component = %self.config.name,
            half_x = ext.half_x,
            half_y = ext.half_y,
            half_z = ext.half_z,
            "published extent"
        );
        self.extent = Some(ext);
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn type_name(&self) -> &str {
        &self.config.type_name
    }

    pub fn chord_length(&self) -> f64 {
        self.config.chord_length
    }

    pub fn angle(&self) -> f64 {
        self.config.angle
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn user_parameters(&self) -> &UserParameters {
        &self.params
    }

    pub fn materials(&self) -> &ReferenceMaterials {
        &self.materials
    }

    pub fn volumes(&self) -> &[Arc<Volume>] {
        &self.volumes
    }

    pub fn classified(&self) -> &ClassifiedVolumes {
        &self.classified
    }

    pub fn container_box(&self) -> &ContainerBox {
        &self.container_box
    }

    pub fn placements(&self) -> &PlacementTracker {
        &self.placements
    }

    /// `None` until `build` has completed.
    pub fn extent(&self) -> Option<ComponentExtent> {
        self.extent
    }

    /// Container volume all placements are parented to.
    pub fn container(&self) -> BeamlineResult<&Arc<Volume>> {
        self.classified
            .container()
            .ok_or_else(|| BeamlineError::MissingContainer {
                component: self.config.name.clone(),
                container: CONTAINER_VOLUME_NAME.to_string(),
            })
    }
}
