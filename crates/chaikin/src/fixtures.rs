//! Canonical test meshes.

use glam::DVec3;

pub type Mesh = (Vec<DVec3>, Vec<Vec<usize>>);

fn points(coords: &[[f64; 3]]) -> Vec<DVec3> {
    coords.iter().map(|&c| DVec3::from_array(c)).collect()
}

/// Unit cube spanning the origin to (1, 1, 1)
pub fn cube() -> Mesh {
    let vertices = points(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ]);
    let faces = vec![
        vec![0, 3, 2, 1],
        vec![4, 5, 6, 7],
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
    ];
    (vertices, faces)
}

pub fn tetrahedron() -> Mesh {
    let vertices = points(&[
        [1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
    ]);
    let faces = vec![vec![0, 1, 2], vec![0, 3, 1], vec![0, 2, 3], vec![1, 3, 2]];
    (vertices, faces)
}

/// Every vertex has degree 4, and face order does not list its edges as a fan
pub fn octahedron() -> Mesh {
    let vertices = points(&[
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ]);
    let faces = vec![
        vec![4, 0, 2],
        vec![4, 2, 1],
        vec![4, 1, 3],
        vec![4, 3, 0],
        vec![5, 2, 0],
        vec![5, 1, 2],
        vec![5, 3, 1],
        vec![5, 0, 3],
    ];
    (vertices, faces)
}

/// Square base, apex of degree 4
pub fn square_pyramid() -> Mesh {
    let vertices = points(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.5, 0.5, 1.0],
    ]);
    let faces = vec![
        vec![0, 3, 2, 1],
        vec![0, 1, 4],
        vec![1, 2, 4],
        vec![2, 3, 4],
        vec![3, 0, 4],
    ];
    (vertices, faces)
}

/// Two hexagons joined by six squares
pub fn hexagonal_prism() -> Mesh {
    let mut coords = Vec::with_capacity(12);
    for z in [0.0, 1.0] {
        for i in 0..6 {
            let angle = std::f64::consts::TAU * i as f64 / 6.0;
            coords.push([angle.cos(), angle.sin(), z]);
        }
    }
    let mut faces = vec![(0..6).rev().collect::<Vec<_>>(), (6..12).collect()];
    for i in 0..6 {
        let j = (i + 1) % 6;
        faces.push(vec![i, j, j + 6, i + 6]);
    }
    (points(&coords), faces)
}
