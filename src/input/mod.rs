mod gestures;
mod state;

pub use gestures::{Gesture, GestureConfig, GestureRecognizer};
pub use state::{PointerSnapshot, TouchPhase, TouchPoint};

use egui::{Pos2, Vec2};

/// Zoom bounds for the canvas view.
pub const MIN_SCALE: f32 = 0.8;
pub const MAX_SCALE: f32 = 4.0;

/// The zoom/pan state of the canvas view.
///
/// Maps between device-space (what the finger touches) and image-space
/// (what the zone map is keyed on). Scale is clamped to
/// [`MIN_SCALE`]..=[`MAX_SCALE`]; translation is unbounded and visually
/// clamped by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub translation: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    /// Invert the view transform: device-space point to image-space.
    pub fn screen_to_image(&self, pos: Pos2) -> Pos2 {
        Pos2::new(
            (pos.x - self.translation.x) / self.scale,
            (pos.y - self.translation.y) / self.scale,
        )
    }

    /// Image-space point to device-space.
    pub fn image_to_screen(&self, pos: Pos2) -> Pos2 {
        Pos2::new(
            pos.x * self.scale + self.translation.x,
            pos.y * self.scale + self.translation.y,
        )
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Back to identity (double-tap).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translation == Vec2::ZERO
    }
}

/// What the canvas should do in response to recognized gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    /// Paint at this image-space point with the active color.
    Paint(Pos2),
    /// The view transform changed; repaint.
    ViewChanged,
    /// Double tap: the view snapped back to identity.
    ViewReset,
}

/// Folds gestures into a [`ViewTransform`] and turns single taps into paint
/// intents. Holds no domain data; it is the coordinate-space adapter between
/// raw input and [`crate::engine::ColoringEngine::apply_color`].
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    recognizer: GestureRecognizer,
    transform: ViewTransform,
    /// Scale and translation at the moment the current pinch/pan sequence
    /// began; pinch and pan are applied relative to these.
    sequence_base: Option<(f32, Vec2)>,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Feed one frame of pointer activity.
    pub fn handle(&mut self, input: &PointerSnapshot) -> Vec<CanvasAction> {
        let gestures = self.recognizer.update(input);
        let mut actions = Vec::new();
        for gesture in gestures {
            if let Some(action) = self.interpret(gesture) {
                actions.push(action);
            }
        }
        actions
    }

    fn interpret(&mut self, gesture: Gesture) -> Option<CanvasAction> {
        match gesture {
            Gesture::Tap { pos, count: 1 } => {
                Some(CanvasAction::Paint(self.transform.screen_to_image(pos)))
            }
            Gesture::Tap { .. } => {
                self.transform.reset();
                self.sequence_base = None;
                Some(CanvasAction::ViewReset)
            }
            Gesture::Pinch { scale } => {
                let (base_scale, _) = self.sequence_base();
                self.transform.set_scale(base_scale * scale);
                Some(CanvasAction::ViewChanged)
            }
            Gesture::Pan { translation } => {
                let (_, base_translation) = self.sequence_base();
                self.transform.translation = base_translation + translation;
                Some(CanvasAction::ViewChanged)
            }
            Gesture::SequenceEnded => {
                self.sequence_base = None;
                None
            }
        }
    }

    fn sequence_base(&mut self) -> (f32, Vec2) {
        *self
            .sequence_base
            .get_or_insert((self.transform.scale, self.transform.translation))
    }
}
