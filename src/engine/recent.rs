/// Maximum number of colors remembered in the quick palette.
pub const MAX_RECENT_COLORS: usize = 8;

/// Most-recently-used colors, newest first, deduplicated.
///
/// Reselecting a color that is already present moves it to the front without
/// changing the length.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentColors {
    colors: Vec<String>,
    cap: usize,
}

impl Default for RecentColors {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentColors {
    pub fn new() -> Self {
        Self::with_cap(MAX_RECENT_COLORS)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            colors: Vec::new(),
            cap,
        }
    }

    /// Rebuild from a persisted list, keeping order and enforcing the cap.
    pub fn from_saved(colors: Vec<String>) -> Self {
        let mut recents = Self::new();
        for color in colors.into_iter().rev() {
            recents.touch(&color);
        }
        recents
    }

    /// Move a color to the front, inserting it if absent.
    pub fn touch(&mut self, color: &str) {
        self.colors.retain(|c| c != color);
        self.colors.insert(0, color.to_owned());
        self.colors.truncate(self.cap);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }
}
