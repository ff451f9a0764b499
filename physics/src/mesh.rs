//! Mesh collider loading.
//!
//! Reads the triangulated subset of the Wavefront OBJ format the editor ships its shapes in:
//!
//! ```text
//! v  x y z            vertex position
//! f  i/.. j/.. k/..   triangle, 1-based indices, only the first slash field is used
//! ```
//!
//! Every other record (normals, texture coordinates, groups, comments) is skipped.
//! The bounding box and bounding-sphere radius are derived once here and never change.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::collision::{Aabb, Vec3};

/// Error type for mesh loading.
#[derive(Debug)]
pub enum MeshError {
    Io(std::io::Error),
    Parse { line: usize, message: String },
    /// `line` is 0 when the geometry did not come from source text.
    FaceIndexOutOfRange { line: usize, index: i64, vertex_count: usize },
    Empty,
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Io(e) => write!(f, "IO error: {}", e),
            MeshError::Parse { line, message } => write!(f, "line {}: {}", line, message),
            MeshError::FaceIndexOutOfRange {
                line,
                index,
                vertex_count,
            } => write!(
                f,
                "line {}: face index {} out of range (mesh has {} vertices)",
                line, index, vertex_count
            ),
            MeshError::Empty => write!(f, "mesh has no vertices"),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MeshError {
    fn from(err: std::io::Error) -> Self {
        MeshError::Io(err)
    }
}

/// Immutable collision geometry shared by every body built from the same mesh.
#[derive(Clone, Debug)]
pub struct MeshCollider {
    vertices: Vec<Vec3>,
    faces: Vec<[usize; 3]>,
    aabb: Aabb,
    sphere_radius: f32,
}

impl MeshCollider {
    /// Load and parse a mesh file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MeshError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let mesh = Self::parse(&contents)?;
        log::info!(
            "loaded mesh {} ({} vertices, {} faces)",
            path.display(),
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Parse mesh source text.
    pub fn parse(source: &str) -> Result<Self, MeshError> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        // Face indices are validated after the whole file is read, so keep their line numbers.
        let mut face_lines = Vec::new();

        for (i, raw) in source.lines().enumerate() {
            let line = i + 1;
            let mut fields = raw.split_whitespace();
            match fields.next() {
                Some("v") => vertices.push(parse_vertex(fields, line)?),
                Some("f") => {
                    faces.push(parse_face(fields, line)?);
                    face_lines.push(line);
                }
                _ => {}
            }
        }

        let vertex_count = vertices.len();
        let faces = faces
            .into_iter()
            .zip(face_lines)
            .map(|(face, line)| resolve_face(face, line, vertex_count))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_parts(vertices, faces)
    }

    /// Build a collider from already-indexed geometry (0-based indices).
    pub fn from_parts(vertices: Vec<Vec3>, faces: Vec<[usize; 3]>) -> Result<Self, MeshError> {
        let aabb = Aabb::from_points(&vertices).ok_or(MeshError::Empty)?;
        if let Some(&index) = faces.iter().flatten().find(|&&idx| idx >= vertices.len()) {
            return Err(MeshError::FaceIndexOutOfRange {
                line: 0,
                index: index as i64,
                vertex_count: vertices.len(),
            });
        }
        let sphere_radius = bounding_sphere_radius(&vertices);

        Ok(Self {
            vertices,
            faces,
            aabb,
            sphere_radius,
        })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Local-space bounds of the unscaled mesh.
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Half of the largest distance between any two vertices.
    pub fn sphere_radius(&self) -> f32 {
        self.sphere_radius
    }
}

fn parse_vertex<'a>(
    mut fields: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Vec3, MeshError> {
    let mut coord = [0.0f32; 3];
    for c in coord.iter_mut() {
        let field = fields.next().ok_or_else(|| MeshError::Parse {
            line,
            message: "vertex needs three coordinates".into(),
        })?;
        *c = field.parse().map_err(|_| MeshError::Parse {
            line,
            message: format!("invalid coordinate `{}`", field),
        })?;
    }
    Ok(Vec3::new(coord[0], coord[1], coord[2]))
}

/// Raw 1-based indices as written in the file.
fn parse_face<'a>(
    mut fields: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<[i64; 3], MeshError> {
    let mut face = [0i64; 3];
    for idx in face.iter_mut() {
        let field = fields.next().ok_or_else(|| MeshError::Parse {
            line,
            message: "face needs three vertices".into(),
        })?;
        let first = field.split('/').next().unwrap_or_default();
        *idx = first.parse().map_err(|_| MeshError::Parse {
            line,
            message: format!("invalid face index `{}`", field),
        })?;
    }
    Ok(face)
}

fn resolve_face(face: [i64; 3], line: usize, vertex_count: usize) -> Result<[usize; 3], MeshError> {
    let mut out = [0usize; 3];
    for (slot, &index) in out.iter_mut().zip(face.iter()) {
        if index < 1 || index as usize > vertex_count {
            return Err(MeshError::FaceIndexOutOfRange {
                line,
                index,
                vertex_count,
            });
        }
        *slot = index as usize - 1;
    }
    Ok(out)
}

/// Brute-force O(n²) pass over vertex pairs; runs once per collider load.
fn bounding_sphere_radius(vertices: &[Vec3]) -> f32 {
    let mut max_dist_sq = 0.0f32;
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            max_dist_sq = max_dist_sq.max((b - a).norm_squared());
        }
    }
    max_dist_sq.sqrt() * 0.5
}
