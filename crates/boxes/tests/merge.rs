use boxes::batch::merge;
use boxes::{Mesh, MeshBatch, generate_box};
use glam::Vec3;

fn point(mesh: &Mesh, index: u16) -> Vec3 {
    mesh.vertex(index as usize).expect("index out of range")
}

#[test]
fn merged_indices_resolve_to_original_vertices() {
    let a = generate_box(Vec3::new(-2.0, 0.5, 3.0), 0.75);
    let b = generate_box(Vec3::new(4.0, -1.0, 0.0), 1.25);
    let merged = merge(&a, &b).unwrap();

    let offset = (a.vertices.len() / 3) as u16;
    assert_eq!(offset, 24);

    for (n, &index) in merged.indices.iter().enumerate() {
        let expected = if n < a.indices.len() {
            point(&a, a.indices[n])
        } else {
            point(&b, b.indices[n - a.indices.len()])
        };
        assert_eq!(point(&merged, index), expected, "index slot {n}");
    }
}

#[test]
fn two_half_size_boxes() {
    let first = generate_box(Vec3::splat(-1.0), 0.5);
    let second = generate_box(Vec3::splat(1.0), 0.5);
    let merged = merge(&first, &second).unwrap();

    assert_eq!(merged.indices.len(), 72);
    assert!(merged.indices[36..].iter().all(|&i| i >= 24));
    assert!(merged.indices.iter().all(|&i| i < 48));
    assert_eq!(point(&merged, 24), Vec3::new(0.5, 1.5, 0.5));
}

#[test]
fn batch_of_many_boxes_matches_pairwise_merge() {
    let positions = [Vec3::ZERO, Vec3::X * 3.0, Vec3::Y * -2.0, Vec3::new(1.0, 1.0, 5.0)];

    let mut batch = MeshBatch::new();
    for &p in &positions {
        batch.push(&generate_box(p, 0.5)).unwrap();
    }

    let pair = merge(&generate_box(positions[0], 0.5), &generate_box(positions[1], 0.5)).unwrap();
    assert_eq!(&batch.mesh().indices[..72], &pair.indices[..]);
    assert_eq!(&batch.mesh().vertices[..144], &pair.vertices[..]);

    for (k, &p) in positions.iter().enumerate() {
        let base = (k * 24) as u16;
        let center: Vec3 = (base..base + 24)
            .map(|i| point(batch.mesh(), i))
            .sum::<Vec3>()
            / 24.0;
        assert!((center - p).length() < 1e-5, "box {k} center {center}");
    }
}
