pub mod camera;
pub mod constants;
pub mod edit;
pub mod input;
pub mod scene;
pub mod session;
pub mod settings;

pub use camera::{Camera, CameraRecord};
pub use edit::{EditMode, apply_edit};
pub use input::{EditInput, EditorAction, FrameInput, Vec2};
pub use scene::{SceneError, SceneSnapshot};
pub use session::EditorSession;
pub use settings::{CameraSettings, EditSettings, EditorSettings};
