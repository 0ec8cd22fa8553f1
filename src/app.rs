use egui::TextureHandle;

use crate::catalog::{self, AssetLibrary, Drawing};
use crate::color;
use crate::input::GestureInterpreter;
use crate::panels;
use crate::session::ColoringSession;
use crate::state::AppState;
use crate::store::Store;
use crate::util::time;

/// Default color selected when a drawing is first opened.
pub const DEFAULT_COLOR: &str = "#FF3366";

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Coloring,
}

/// Everything the canvas panel needs to draw one open drawing.
pub struct CanvasView {
    pub texture: TextureHandle,
    pub image_width: f32,
    pub image_height: f32,
    pub interpreter: GestureInterpreter,
}

/// The application shell: screens, panels, and the wiring between raw input,
/// the coloring session and persistence. All domain logic lives in the
/// engine/session modules; this type only hosts them.
pub struct ColorInkApp {
    pub(crate) store: Store,
    pub(crate) assets: AssetLibrary,
    pub(crate) state: AppState,

    pub(crate) screen: Screen,
    pub(crate) session: Option<ColoringSession>,
    pub(crate) canvas: Option<CanvasView>,
    /// Set when a drawing id fails to resolve; shown as a not-found state.
    pub(crate) load_error: Option<String>,

    pub(crate) selected_color: String,
    pub(crate) active_palette: String,
    /// Hue/saturation/value of the custom-color wheel, each in `[0, 1]`.
    pub(crate) custom_hsv: (f32, f32, f32),
    pub(crate) zen_mode: bool,
    pub(crate) show_interstitial: bool,
}

impl ColorInkApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_dirs("data", "assets/drawings")
    }

    pub fn with_dirs(data_dir: &str, asset_dir: &str) -> Self {
        let store = Store::new(data_dir);
        let state = AppState::load(&store);
        let custom_hsv = color::hex_to_rgb(DEFAULT_COLOR)
            .map(|(r, g, b)| color::rgb_to_hsv(r, g, b))
            .unwrap_or((0.0, 1.0, 1.0));
        Self {
            store,
            assets: AssetLibrary::new(asset_dir),
            state,
            screen: Screen::Gallery,
            session: None,
            canvas: None,
            load_error: None,
            selected_color: DEFAULT_COLOR.to_owned(),
            active_palette: "classic".to_owned(),
            custom_hsv,
            zen_mode: false,
            show_interstitial: false,
        }
    }

    /// Open a drawing for coloring. If its asset does not resolve the
    /// session is never started and the gallery shows a not-found state.
    pub fn open_drawing(&mut self, drawing: &'static Drawing, ctx: &egui::Context) {
        match self.assets.resolve(drawing.id) {
            Ok(asset) => {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [asset.width as usize, asset.height as usize],
                    asset.pixels.as_raw(),
                );
                let texture = ctx.load_texture(
                    drawing.id,
                    color_image,
                    egui::TextureOptions::default(),
                );
                self.canvas = Some(CanvasView {
                    texture,
                    image_width: asset.width as f32,
                    image_height: asset.height as f32,
                    interpreter: GestureInterpreter::new(),
                });
                self.session = Some(ColoringSession::open(drawing, &self.store));
                self.load_error = None;
                self.screen = Screen::Coloring;
            }
            Err(e) => {
                log::error!("cannot open drawing {}: {e}", drawing.id);
                self.load_error = Some(format!("Dibujo no encontrado: {}", drawing.title));
            }
        }
    }

    /// Navigate back to the gallery, flushing any unsaved progress first.
    pub fn close_drawing(&mut self) {
        if let Some(session) = &mut self.session {
            session.close(&self.store);
        }
        self.session = None;
        self.canvas = None;
        self.zen_mode = false;
        self.screen = Screen::Gallery;
    }

    pub fn complete_drawing(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        match session.complete(&self.store, &mut self.state) {
            Ok(outcome) => {
                self.show_interstitial = outcome.show_interstitial;
            }
            Err(e) => log::error!("failed to save colored work: {e}"),
        }
    }
}

impl eframe::App for ColorInkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = time::now_secs();

        match self.screen {
            Screen::Gallery => panels::gallery_panel(self, ctx),
            Screen::Coloring => {
                if !self.zen_mode {
                    panels::coloring_header(self, ctx);
                    panels::palette_panel(self, ctx);
                }
                panels::canvas_panel(self, ctx, now);
            }
        }

        if self.show_interstitial {
            panels::interstitial_window(self, ctx);
        }

        // Drive the debounced progress flush even when input is idle.
        if let Some(session) = &mut self.session {
            session.tick(&self.store, now);
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(session) = &mut self.session {
            session.close(&self.store);
        }
    }
}

/// Drawings shown on the gallery screen.
pub fn gallery_drawings() -> &'static [Drawing] {
    catalog::built_in()
}
