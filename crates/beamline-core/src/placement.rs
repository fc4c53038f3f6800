// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Placement Planner
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Placement of classified volumes inside the container.
//!
//! Every child shares one reference offset and has no rotation. Executing
//! the plan is the host engine's job; each instance it hands back is kept
//! in a [`PlacementTracker`] and released when the tracker drops or is
//! cleared for a rebuild.

use beamline_types::constants::{CONTAINER_VOLUME_NAME, PLACEMENT_SUFFIX};
use beamline_types::error::{BeamlineError, BeamlineResult};
use beamline_types::geometry::{ThreeVector, Volume};
use std::fmt;
use std::sync::Arc;

/// Row-major 3x3 rotation.
pub type RotationMatrix = [[f64; 3]; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRequest {
    pub name: String,
    pub volume: Arc<Volume>,
    pub parent: Arc<Volume>,
    /// `None` means identity.
    pub rotation: Option<RotationMatrix>,
    pub position: ThreeVector,
    pub copy_number: i32,
    pub check_overlaps: bool,
}

/// Build one request per child, in order.
///
/// A missing container is fatal: there is nothing to place into.
pub fn plan_placements(
    component: &str,
    container: Option<&Arc<Volume>>,
    children: &[Arc<Volume>],
    offset: ThreeVector,
    check_overlaps: bool,
) -> BeamlineResult<Vec<PlacementRequest>> {
    let parent = container.ok_or_else(|| BeamlineError::MissingContainer {
        component: component.to_string(),
        container: CONTAINER_VOLUME_NAME.to_string(),
    })?;
    let name = format!("{component}{PLACEMENT_SUFFIX}");

    Ok(children
        .iter()
        .map(|child| PlacementRequest {
            name: name.clone(),
            volume: Arc::clone(child),
            parent: Arc::clone(parent),
            rotation: None,
            position: offset,
            copy_number: 0,
            check_overlaps,
        })
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementId(pub u64);

/// A physical instance created by the host engine.
///
/// Dropping it runs the engine's release hook, if any.
pub struct PhysicalPlacement {
    pub id: PlacementId,
    pub name: String,
    pub volume: Arc<Volume>,
    release: Option<Box<dyn FnOnce(PlacementId)>>,
}

impl PhysicalPlacement {
    pub fn new(id: PlacementId, name: impl Into<String>, volume: Arc<Volume>) -> Self {
        PhysicalPlacement {
            id,
            name: name.into(),
            volume,
            release: None,
        }
    }

    pub fn on_release(mut self, hook: impl FnOnce(PlacementId) + 'static) -> Self {
        self.release = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for PhysicalPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhysicalPlacement")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("volume", &self.volume.name)
            .finish()
    }
}

impl Drop for PhysicalPlacement {
    fn drop(&mut self) {
        if let Some(hook) = self.release.take() {
            hook(self.id);
        }
    }
}

/// Host placement / overlap engine.
pub trait PlacementEngine {
    fn place(&mut self, request: &PlacementRequest) -> BeamlineResult<PhysicalPlacement>;
}

/// Owned list of placed instances.
#[derive(Debug, Default)]
pub struct PlacementTracker {
    instances: Vec<PhysicalPlacement>,
}

impl PlacementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, instance: PhysicalPlacement) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[PhysicalPlacement] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Release every instance, returning how many were held.
    pub fn release_all(&mut self) -> usize {
        let n = self.instances.len();
        if n > 0 {
            tracing::debug!(count = n, "releasing placement instances");
        }
        self.instances.clear();
        n
    }
}

impl Drop for PlacementTracker {
    fn drop(&mut self) {
        self.release_all();
    }
}

/// Hand every request to the engine and register what it creates.
///
/// Instances placed before a failing request stay registered so they are
/// still released with the tracker.
pub fn execute_placements(
    requests: &[PlacementRequest],
    engine: &mut dyn PlacementEngine,
    tracker: &mut PlacementTracker,
) -> BeamlineResult<usize> {
    for request in requests {
        let instance = engine.place(request)?;
        tracker.register(instance);
    }
    Ok(requests.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamline_types::geometry::SolidHandle;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn vol(name: &str) -> Arc<Volume> {
        Arc::new(Volume::new(name, "steel", SolidHandle(0)))
    }

    #[derive(Default)]
    struct RecordingEngine {
        next: u64,
        released: Rc<RefCell<Vec<PlacementId>>>,
        fail_on: Option<String>,
    }

    impl PlacementEngine for RecordingEngine {
        fn place(&mut self, request: &PlacementRequest) -> BeamlineResult<PhysicalPlacement> {
            if self.fail_on.as_deref() == Some(request.volume.name.as_str()) {
                return Err(BeamlineError::Placement(format!(
                    "overlap for {}",
                    request.volume.name
                )));
            }
            self.next += 1;
            let released = Rc::clone(&self.released);
            Ok(PhysicalPlacement::new(
                PlacementId(self.next),
                request.name.clone(),
                Arc::clone(&request.volume),
            )
            .on_release(move |id| released.borrow_mut().push(id)))
        }
    }

    #[test]
    fn test_plan_shares_offset_and_parent() {
        let container = vol("wl");
        let children = vec![vol("inner_pipe_l"), vol("core"), vol("shell")];
        let offset = ThreeVector::new(0.0, 0.0, 0.25);
        let plan = plan_placements("ud1", Some(&container), &children, offset, true).unwrap();

        assert_eq!(plan.len(), 3);
        for (req, child) in plan.iter().zip(&children) {
            assert!(Arc::ptr_eq(&req.volume, child));
            assert!(Arc::ptr_eq(&req.parent, &container));
            assert_eq!(req.position, offset);
            assert!(req.rotation.is_none());
            assert_eq!(req.copy_number, 0);
            assert!(req.check_overlaps);
            assert_eq!(req.name, "ud1_bp_1_pv");
        }
    }

    #[test]
    fn test_missing_container_is_fatal() {
        let err = plan_placements("ud1", None, &[], ThreeVector::zero(), false).unwrap_err();
        let msg = err.to_string();
        match err {
            BeamlineError::MissingContainer {
                component,
                container,
            } => {
                assert_eq!(component, "ud1");
                assert_eq!(container, "wl");
            }
            other => panic!("Unexpected error: {other:?}"),
        }
        assert!(msg.contains("'ud1'") && msg.contains("'wl'"), "{msg}");
    }

    #[test]
    fn test_tracker_releases_on_drop() {
        let container = vol("wl");
        let children = vec![vol("a"), vol("b")];
        let plan = plan_placements("ud", Some(&container), &children, ThreeVector::zero(), false)
            .unwrap();
        let mut engine = RecordingEngine::default();
        let released = Rc::clone(&engine.released);
        {
            let mut tracker = PlacementTracker::new();
            let n = execute_placements(&plan, &mut engine, &mut tracker).unwrap();
            assert_eq!(n, 2);
            assert_eq!(tracker.len(), 2);
            assert!(released.borrow().is_empty());
        }
        assert_eq!(*released.borrow(), vec![PlacementId(1), PlacementId(2)]);
    }

    #[test]
    fn test_partial_failure_keeps_placed_instances_tracked() {
        let container = vol("wl");
        let children = vec![vol("a"), vol("bad"), vol("c")];
        let plan = plan_placements("ud", Some(&container), &children, ThreeVector::zero(), false)
            .unwrap();
        let mut engine = RecordingEngine {
            fail_on: Some("bad".to_string()),
            ..Default::default()
        };
        let mut tracker = PlacementTracker::new();
        let err = execute_placements(&plan, &mut engine, &mut tracker).unwrap_err();
        assert!(matches!(err, BeamlineError::Placement(_)));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.release_all(), 1);
        assert_eq!(engine.released.borrow().len(), 1);
    }
}
