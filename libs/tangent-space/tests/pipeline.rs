use approx::assert_relative_eq;
use config::constants::{DebugConfig, DEFAULT_AXIS_LENGTH};
use glam::Vec3;
use grid_mesh::{build, GridSpec};
use tangent_debug::{visualize, DebugScene, MarkerColor, TangentBasisSource};
use tangent_space::UvGradientBasis;

#[test]
fn default_scene_is_a_three_by_three_grid() {
    let scene =
        DebugScene::build(&GridSpec::default(), &DebugConfig::default(), &UvGradientBasis).unwrap();

    assert_eq!(scene.mesh.vertex_count(), 36);
    assert_eq!(scene.mesh.triangle_count(), 18);
    assert_eq!(scene.markers.len(), 144);
}

#[test]
fn derived_frames_place_markers_along_the_axes() {
    let mesh = build(&GridSpec::new(2, 2, 0.1)).unwrap();
    let basis = UvGradientBasis.tangent_basis(&mesh).unwrap();
    let markers = visualize(&mesh, &basis, DEFAULT_AXIS_LENGTH, 0.005).unwrap();

    let expected = [Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::Y];
    for (vertex, set) in mesh.vertices().iter().zip(markers.chunks_exact(4)) {
        for (marker, direction) in set.iter().zip(expected) {
            let offset = marker.position - vertex.position;
            assert!(
                offset.abs_diff_eq(direction * DEFAULT_AXIS_LENGTH, 1e-6),
                "{:?}: {offset:?}",
                marker.color
            );
        }
    }
}

#[test]
fn batches_cover_every_marker() {
    let config = DebugConfig::new(true, 0.02, 0.005, 8).unwrap();
    let scene = DebugScene::build(&GridSpec::new(2, 1, 0.1), &config, &UvGradientBasis).unwrap();
    assert_eq!(scene.marker_segments, config.marker_segments);
    let batches = scene.marker_batches().unwrap();

    assert_eq!(batches.len(), 4);
    let per_sphere = 8 * 4; // segments * rings
    for batch in &batches {
        assert_eq!(batch.mesh.vertex_count(), 8 * per_sphere);
        let (min, max) = batch.mesh.bounding_box();
        assert!(min.y < max.y);
    }

    let black = batches
        .iter()
        .find(|b| b.color == MarkerColor::Black)
        .unwrap();
    // vertex spheres straddle the grid plane
    let (min, max) = black.mesh.bounding_box();
    assert_relative_eq!(min.y, -max.y, epsilon = 1e-6);
}
