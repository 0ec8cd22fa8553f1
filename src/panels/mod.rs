mod canvas_panel;
mod gallery_panel;
mod palette_panel;

pub use canvas_panel::canvas_panel;
pub use gallery_panel::gallery_panel;
pub use palette_panel::{coloring_header, interstitial_window, palette_panel};
