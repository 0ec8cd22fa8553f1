#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod catalog;
pub mod color;
pub mod engine;
pub mod input;
pub mod palette;
pub mod panels;
pub mod render;
pub mod session;
pub mod state;
pub mod store;
pub mod util;
pub mod zone;

pub use app::ColorInkApp;
pub use engine::ColoringEngine;
pub use input::{GestureInterpreter, GestureRecognizer, ViewTransform};
pub use render::{FloodCanvas, PaintStrategy};
pub use session::ColoringSession;
pub use state::AppState;
pub use store::Store;
pub use zone::{ZoneKey, ZoneMap};
