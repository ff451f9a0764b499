use crate::collision::Vec3;
use crate::mesh::{MeshCollider, MeshError};

/// Corners of the editor's unit cube (edge length 2, centered on the origin).
const CUBE_VERTICES: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const CUBE_FACES: [[usize; 3]; 12] = [
    [0, 1, 2],
    [2, 3, 0], // back
    [4, 5, 6],
    [6, 7, 4], // front
    [0, 1, 5],
    [5, 4, 0], // bottom
    [3, 2, 6],
    [6, 7, 3], // top
    [1, 2, 6],
    [6, 5, 1], // right
    [0, 3, 7],
    [7, 4, 0], // left
];

/// Same geometry as the editor's `cube.obj`, built without touching the filesystem.
pub fn cube_collider() -> Result<MeshCollider, MeshError> {
    let vertices = CUBE_VERTICES
        .iter()
        .map(|&[x, y, z]| Vec3::new(x, y, z))
        .collect();
    MeshCollider::from_parts(vertices, CUBE_FACES.to_vec())
}
