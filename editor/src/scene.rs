//! Scene files: the camera pose plus every authored body, as JSON.
//!
//! ```json
//! {
//!   "camera": { "position": [0, 5, 10], "yaw": -90, "pitch": 0, "rb_position": [0, 0, 10] },
//!   "objects": [
//!     { "position": [0, 0, 0], "scale": [1, 1, 1], "rotation": [0, 0, 0], "gravity_enabled": true }
//!   ]
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use boxworld_physics::{BodyRecord, MeshError};
use serde::{Deserialize, Serialize};

use crate::camera::CameraRecord;

#[derive(Debug)]
pub enum SceneError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Mesh(MeshError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "IO error: {}", e),
            SceneError::Json(e) => write!(f, "invalid scene JSON: {}", e),
            SceneError::Mesh(e) => write!(f, "mesh error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Io(e) => Some(e),
            SceneError::Json(e) => Some(e),
            SceneError::Mesh(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SceneError {
    fn from(err: std::io::Error) -> Self {
        SceneError::Io(err)
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        SceneError::Json(err)
    }
}

impl From<MeshError> for SceneError {
    fn from(err: MeshError) -> Self {
        SceneError::Mesh(err)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub camera: CameraRecord,
    /// Authored bodies only; previews and the camera proxy are never saved.
    pub objects: Vec<BodyRecord>,
}

impl SceneSnapshot {
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!(
            "saved scene {} ({} objects)",
            path.display(),
            self.objects.len()
        );
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let snapshot = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!(
            "loaded scene {} ({} objects)",
            path.display(),
            snapshot.objects.len()
        );
        Ok(snapshot)
    }
}
