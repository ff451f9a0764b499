/*!
One editing session: the world, the camera, and what the user is currently doing with them.

Per frame the host calls [`EditorSession::handle`] for every discrete action, then
[`EditorSession::tick`] once with the sampled continuous input. Rendering reads the world,
the camera and the pending preview afterwards; nothing is half-updated between calls.

Camera look and walking are locked while a body is selected, so the same axes edit the
selection instead.
*/

use std::path::Path;
use std::sync::Arc;

use boxworld_physics::{BodyId, MeshCollider, RigidBody, Vec3, World, cube_collider};

use crate::camera::Camera;
use crate::constants::{DEFAULT_CAMERA_POSITION, MAX_FRAME_DT};
use crate::edit::{EditMode, apply_edit};
use crate::input::{EditorAction, FrameInput};
use crate::scene::{SceneError, SceneSnapshot};
use crate::settings::EditorSettings;

pub struct EditorSession {
    world: World,
    camera: Camera,
    collider: Arc<MeshCollider>,
    selected: Option<BodyId>,
    mode: EditMode,
    preview: Option<RigidBody>,
    settings: EditorSettings,
}

impl EditorSession {
    /// Starter scene on the built-in cube: one box at the origin and the camera.
    pub fn new(settings: EditorSettings) -> Result<Self, SceneError> {
        let collider = Arc::new(cube_collider()?);
        let starter = RigidBody::new(collider.clone());
        Ok(Self::with_bodies(collider, vec![starter], settings))
    }

    /// Session over `bodies` (all built on `collider`) with a default camera appended last.
    pub fn with_bodies(
        collider: Arc<MeshCollider>,
        bodies: Vec<RigidBody>,
        settings: EditorSettings,
    ) -> Self {
        let mut world = World::new(settings.world);
        world.replace_all(bodies);
        let proxy = world.push(RigidBody::camera_proxy(
            collider.clone(),
            Vec3::from(DEFAULT_CAMERA_POSITION),
            settings.camera.size,
        ));
        let camera = Camera::new(proxy, settings.camera);

        Self {
            world,
            camera,
            collider,
            selected: None,
            mode: EditMode::default(),
            preview: None,
            settings,
        }
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn selected(&self) -> Option<BodyId> {
        self.selected
    }

    #[inline]
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// The box being placed, if any. Drawn by the host but not part of the world.
    #[inline]
    pub fn preview(&self) -> Option<&RigidBody> {
        self.preview.as_ref()
    }

    /// Apply one discrete action. Returns `false` when the action does not apply in the current
    /// state (e.g. toggling gravity with nothing selected).
    pub fn handle(&mut self, action: EditorAction) -> bool {
        let applied = match action {
            EditorAction::Spawn => self.spawn_preview(),
            EditorAction::Confirm => self.confirm_preview(),
            EditorAction::Cancel => self.cancel_preview(),
            EditorAction::Click => {
                if self.preview.is_some() {
                    self.confirm_preview()
                } else {
                    self.click();
                    true
                }
            }
            EditorAction::Deselect => {
                if self.preview.is_some() {
                    self.cancel_preview()
                } else {
                    self.deselect()
                }
            }
            EditorAction::ToggleGravity => self.toggle_gravity(),
            EditorAction::NextMode => self.cycle_mode(EditMode::next),
            EditorAction::PrevMode => self.cycle_mode(EditMode::prev),
        };
        log::debug!("{:?} applied={}", action, applied);
        applied
    }

    /// Advance one frame.
    ///
    /// `dt` above the frame cap is clamped; a non-positive `dt` skips the simulation but still
    /// applies look and edits.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) {
        let free_camera = self.selected.is_none();
        if free_camera {
            self.camera.look(input.look);
            self.camera.drive(&mut self.world, &input.axes, input.jump);
        }

        if dt > 0.0 {
            if dt > MAX_FRAME_DT {
                log::warn!("frame dt {:.3}s clamped to {:.3}s", dt, MAX_FRAME_DT);
            }
            self.world.step(dt.min(MAX_FRAME_DT));
        }
        self.camera.follow(&self.world);

        if self.preview.is_some() {
            return;
        }
        let Some(id) = self.selected else {
            return;
        };
        let (forward, right) = (self.camera.forward(), self.camera.right());
        if let Some(body) = self.world.get_mut(id) {
            apply_edit(body, self.mode, &input.axes, forward, right, &self.settings.edit);
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            camera: self.camera.to_record(&self.world),
            objects: self
                .world
                .iter()
                .filter(|(_, b)| !b.is_preview() && !b.is_camera())
                .map(|(_, b)| b.to_record())
                .collect(),
        }
    }

    /// Replace the whole scene. Selection and any pending preview are dropped.
    pub fn restore(&mut self, snapshot: &SceneSnapshot) {
        let mut bodies: Vec<RigidBody> = snapshot
            .objects
            .iter()
            .map(|record| RigidBody::from_record(record, self.collider.clone()))
            .collect();
        let proxy = BodyId(bodies.len());
        bodies.push(RigidBody::camera_proxy(
            self.collider.clone(),
            Camera::proxy_position(&snapshot.camera),
            self.settings.camera.size,
        ));

        self.world.replace_all(bodies);
        self.camera = Camera::from_record(&snapshot.camera, proxy, self.settings.camera);
        self.selected = None;
        self.preview = None;
    }

    pub fn save_scene<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        self.snapshot().save(path)
    }

    pub fn load_scene<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SceneError> {
        let snapshot = SceneSnapshot::load(path)?;
        self.restore(&snapshot);
        Ok(())
    }

    fn spawn_preview(&mut self) -> bool {
        if self.preview.is_some() {
            return false;
        }
        let at = self.camera.spawn_point();
        self.preview = Some(RigidBody::preview(self.collider.clone(), at));
        true
    }

    fn confirm_preview(&mut self) -> bool {
        let Some(mut body) = self.preview.take() else {
            return false;
        };
        body.confirm_preview();
        let id = self.world.push(body);
        log::info!("placed body {:?}", id);
        true
    }

    fn cancel_preview(&mut self) -> bool {
        self.preview.take().is_some()
    }

    /// Pick along the view ray. Any previous selection is dropped even on a miss.
    fn click(&mut self) {
        for (_, body) in self.world.iter_mut() {
            body.set_selected(false);
        }
        self.selected = None;

        let Some(hit) = self.world.pick(self.camera.position, self.camera.forward()) else {
            return;
        };
        if let Some(body) = self.world.get_mut(hit.body) {
            body.set_selected(true);
            self.selected = Some(hit.body);
        }
    }

    fn deselect(&mut self) -> bool {
        let Some(id) = self.selected.take() else {
            return false;
        };
        if let Some(body) = self.world.get_mut(id) {
            body.set_selected(false);
        }
        true
    }

    fn toggle_gravity(&mut self) -> bool {
        let Some(body) = self.selected.and_then(|id| self.world.get_mut(id)) else {
            return false;
        };
        let enabled = body.toggle_gravity();
        log::debug!("gravity {}", if enabled { "on" } else { "off" });
        true
    }

    fn cycle_mode(&mut self, step: fn(EditMode) -> EditMode) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.mode = step(self.mode);
        true
    }
}
