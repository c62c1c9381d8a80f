use std::collections::HashMap;

use approx::assert_relative_eq;
use glam::Vec3;
use grid_mesh::{build, GridSpec};
use tangent_debug::{visualize, DebugMarker, MarkerColor, TangentBasis, VisualizeError};

fn flat_basis(count: usize) -> Vec<TangentBasis> {
    vec![TangentBasis::new(Vec3::X, Vec3::Z, Vec3::Y); count]
}

#[test]
fn emits_four_markers_per_vertex() {
    for spec in [
        GridSpec::new(1, 1, 0.1),
        GridSpec::new(3, 3, 0.1),
        GridSpec::new(5, 2, 0.4),
    ] {
        let mesh = build(&spec).unwrap();
        let n = mesh.vertex_count();
        let markers = visualize(&mesh, &flat_basis(n), 0.02, 0.005).unwrap();
        assert_eq!(markers.len(), 4 * n);

        let mut per_color: HashMap<MarkerColor, usize> = HashMap::new();
        for marker in &markers {
            *per_color.entry(marker.color).or_default() += 1;
        }
        for color in MarkerColor::ALL {
            assert_eq!(per_color[&color], n, "{color:?}");
        }
    }
}

#[test]
fn axis_markers_are_half_size_and_offset() {
    let mesh = build(&GridSpec::new(2, 2, 0.1)).unwrap();
    let markers = visualize(&mesh, &flat_basis(mesh.vertex_count()), 0.02, 0.005).unwrap();

    for (vertex, set) in mesh.vertices().iter().zip(markers.chunks_exact(4)) {
        assert_eq!(set[0].position, vertex.position);
        assert_relative_eq!(set[0].radius, 0.005);
        for marker in &set[1..] {
            assert_relative_eq!(marker.radius, 0.0025);
            assert_relative_eq!(marker.position.distance(vertex.position), 0.02, epsilon = 1e-6);
        }
        // normal markers sit above the flat grid
        assert!(set[3].position.y > 0.0);
    }
}

#[test]
fn every_basis_entry_is_used_once() {
    let mesh = build(&GridSpec::new(1, 1, 1.0)).unwrap();
    let basis: Vec<TangentBasis> = (0..4)
        .map(|k| {
            let k = k as f32;
            TangentBasis::new(Vec3::X * k, Vec3::Y * k, Vec3::Z * k)
        })
        .collect();
    let markers = visualize(&mesh, &basis, 1.0, 0.2).unwrap();

    for (k, (vertex, set)) in mesh.vertices().iter().zip(markers.chunks_exact(4)).enumerate() {
        let k = k as f32;
        assert_eq!(set[1].position, vertex.position + Vec3::X * k);
        assert_eq!(set[2].position, vertex.position + Vec3::Y * k);
        assert_eq!(set[3].position, vertex.position + Vec3::Z * k);
    }
}

#[test]
fn mismatched_basis_returns_no_markers() {
    let mesh = build(&GridSpec::new(2, 2, 0.1)).unwrap();
    let n = mesh.vertex_count();
    for len in [0, n - 1, n + 1] {
        let result = visualize(&mesh, &flat_basis(len), 0.02, 0.005);
        assert_eq!(result, Err(VisualizeError::basis_mismatch(n, len)));
    }
}

#[test]
fn markers_serialize_for_the_host() {
    let marker = DebugMarker::new(Vec3::new(0.0, 1.0, 2.0), 0.5, MarkerColor::Green);
    let json = serde_json::to_value(marker).unwrap();
    assert_eq!(json["color"], "Green");
    assert_eq!(json["radius"], 0.5);
}
