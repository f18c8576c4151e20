//! Interactive view engine: camera, input processing, and drawables
//! wired together.

mod input;
mod options;

use crate::camera::{Camera, CameraCommand};
use crate::entity::Entity;
use crate::error::VantageError;
use crate::gpu::{
    draw_entity, draw_environment, Drawable, MeshHandle, ProgramHandle,
    UniformSink,
};
use crate::input::InputProcessor;
use crate::math::Ray;
use crate::options::Options;

/// Ties a camera, its input processor, and the drawables it looks at into
/// one interactive view.
///
/// Input is applied as soon as it arrives and only marks the view dirty;
/// [`redraw`](Self::redraw) pulls the current camera state when the host
/// paints.
///
/// # Example
///
/// ```ignore
/// let mut engine = ViewEngine::new(Options::default())?;
/// let _ = engine.add_drawable(Drawable { entity, program, mesh });
///
/// // In the event loop:
/// engine.handle_event(InputEvent::CursorMoved { x, y });
/// if engine.needs_redraw() {
///     engine.redraw(&mut gl_sink);
/// }
/// ```
pub struct ViewEngine {
    camera: Box<dyn Camera>,
    input: InputProcessor,
    drawables: Vec<Drawable>,
    environment: Option<(ProgramHandle, MeshHandle)>,
    options: Options,
    active_preset: Option<String>,
    redraw_requested: bool,
    last_pick: Option<Ray>,
}

impl ViewEngine {
    /// Build an engine from options. The surface starts at the size
    /// configured in [`CameraOptions`](crate::options::CameraOptions).
    pub fn new(options: Options) -> Result<Self, VantageError> {
        let camera = options.camera.build_camera()?;
        let mut input = InputProcessor::with_options(
            options.navigation.clone(),
            options.keybindings.clone(),
        );
        input.set_surface(options.camera.width, options.camera.height);
        log::debug!(
            "view engine ready: {:?} camera, {}x{} surface",
            camera.kind(),
            options.camera.width,
            options.camera.height
        );
        Ok(Self {
            camera,
            input,
            drawables: Vec::new(),
            environment: None,
            options,
            active_preset: None,
            redraw_requested: true,
            last_pick: None,
        })
    }

    /// The active camera.
    #[must_use]
    pub fn camera(&self) -> &dyn Camera {
        self.camera.as_ref()
    }

    /// Mutable camera access. Marks the view dirty.
    pub fn camera_mut(&mut self) -> &mut dyn Camera {
        self.redraw_requested = true;
        self.camera.as_mut()
    }

    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the last preset loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Add something to draw. Returns its index.
    pub fn add_drawable(&mut self, drawable: Drawable) -> usize {
        self.drawables.push(drawable);
        self.redraw_requested = true;
        self.drawables.len() - 1
    }

    /// Everything drawn each frame, in draw order.
    #[must_use]
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    /// Mutable access to one drawable's placement. Marks the view dirty.
    pub fn entity_mut(&mut self, index: usize) -> Option<&mut Entity> {
        let drawable = self.drawables.get_mut(index)?;
        self.redraw_requested = true;
        Some(&mut drawable.entity)
    }

    /// Set or clear the environment (skybox) pass drawn after all entities.
    pub fn set_environment(
        &mut self,
        environment: Option<(ProgramHandle, MeshHandle)>,
    ) {
        self.environment = environment;
        self.redraw_requested = true;
    }

    /// Whether state changed since the last redraw.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Ray from the most recent pick inside the viewport.
    #[must_use]
    pub fn last_pick(&self) -> Option<Ray> {
        self.last_pick
    }

    /// Apply one camera command. Returns the pick ray for
    /// [`CameraCommand::Pick`].
    pub fn execute(&mut self, command: CameraCommand) -> Option<Ray> {
        let ray = command.apply(self.camera.as_mut());
        if command.changes_view() {
            self.redraw_requested = true;
        }
        if let CameraCommand::Pick { ndc } = command {
            match ray {
                Some(ray) => log::debug!(
                    "pick at {ndc:?}: origin {:?} direction {:?}",
                    ray.origin,
                    ray.direction
                ),
                None => log::debug!("pick at {ndc:?} outside viewport"),
            }
            if ray.is_some() {
                self.last_pick = ray;
            }
        }
        ray
    }

    /// Draw every entity, then the environment, from the current camera
    /// state, and clear the redraw request.
    pub fn redraw(&mut self, sink: &mut dyn UniformSink) {
        let camera = self.camera.as_ref();
        for drawable in &self.drawables {
            draw_entity(sink, camera, drawable);
        }
        if let Some((program, mesh)) = self.environment {
            draw_environment(sink, camera, program, mesh);
        }
        self.redraw_requested = false;
    }
}
