// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — UDipole Build Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use beamline_core::classifier::VolumeClassifier;
use beamline_core::field::plan_field_assignments;
use beamline_core::placement::plan_placements;
use beamline_types::geometry::{SolidHandle, ThreeVector, Volume};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn synthetic_geometry(n_volumes: usize) -> Vec<Arc<Volume>> {
    let mut vols = Vec::with_capacity(n_volumes + 2);
    vols.push(Arc::new(Volume::new("wl", "air", SolidHandle(0))));
    vols.push(Arc::new(Volume::new("inner_pipe_l", "vacuum", SolidHandle(1))));
    for i in 0..n_volumes {
        let material = if i % 3 == 0 { "G4_Fe" } else { "stainlesssteel" };
        vols.push(Arc::new(Volume::new(
            format!("part_{i}"),
            material,
            SolidHandle(i as u64 + 2),
        )));
    }
    vols
}

fn bench_classify_and_plan(c: &mut Criterion) {
    let classifier = VolumeClassifier::default();
    for n in [16usize, 256, 4096] {
        let vols = synthetic_geometry(n);
        c.bench_function(&format!("classify_and_plan_{n}"), |b| {
            b.iter(|| {
                let classified = classifier.classify(black_box(&vols)).unwrap();
                let placements = plan_placements(
                    "bench",
                    classified.container(),
                    classified.non_container(),
                    ThreeVector::zero(),
                    false,
                )
                .unwrap();
                let fields = plan_field_assignments(
                    "bench",
                    classified.pipe(),
                    classified.yoke(),
                    1.0,
                    "./fieldmaps/map.dat.gz",
                );
                black_box((placements.len(), fields.len()))
            })
        });
    }
}

criterion_group!(benches, bench_classify_and_plan);
criterion_main!(benches);
