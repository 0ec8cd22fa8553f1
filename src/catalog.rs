use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Difficulty tier shown on the gallery cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Difícil",
        }
    }
}

/// One line-art illustration from the built-in catalog. Immutable reference
/// data; completing a drawing never consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
}

static BUILT_IN_DRAWINGS: [Drawing; 3] = [
    Drawing {
        id: "flower",
        title: "Flor Murakami",
        description: "Una flor sonriente llena de patrones geométricos y elementos pop art",
        difficulty: Difficulty::Easy,
    },
    Drawing {
        id: "koi",
        title: "Koi Japonés",
        description: "Dos carpas koi en un remolino de agua con flores de cerezo",
        difficulty: Difficulty::Hard,
    },
    Drawing {
        id: "mushroom",
        title: "Bosque de Setas",
        description: "Un bosque mágico con setas kawaii y criaturas sonrientes",
        difficulty: Difficulty::Medium,
    },
];

pub fn built_in() -> &'static [Drawing] {
    &BUILT_IN_DRAWINGS
}

pub fn find(id: &str) -> Option<&'static Drawing> {
    BUILT_IN_DRAWINGS.iter().find(|d| d.id == id)
}

/// Errors resolving a drawing id to image content. Terminal for a coloring
/// session: the engine is never started for a drawing that fails to resolve.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unknown drawing id: {0}")]
    UnknownDrawing(String),

    #[error("failed to read asset file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to decode asset image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decoded line art for one drawing, sized for the rendering surface and
/// for seeding the flood-fill raster.
#[derive(Debug, Clone)]
pub struct DrawingAsset {
    pub width: u32,
    pub height: u32,
    pub pixels: RgbaImage,
}

impl DrawingAsset {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory(bytes)?;
        log::debug!("decoded drawing asset: {}x{}", decoded.width(), decoded.height());
        let pixels = decoded.to_rgba8();
        Ok(Self {
            width: pixels.width(),
            height: pixels.height(),
            pixels,
        })
    }
}

/// Resolves catalog ids to PNG files under an asset directory.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    asset_dir: PathBuf,
}

impl AssetLibrary {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
        }
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.asset_dir.join(format!("{id}.png"))
    }

    /// Load and decode the line art for a drawing id.
    pub fn resolve(&self, id: &str) -> Result<DrawingAsset, AssetError> {
        if find(id).is_none() {
            return Err(AssetError::UnknownDrawing(id.to_owned()));
        }
        let path = self.path_for(id);
        log::info!("loading drawing asset from {}", path.display());
        let bytes = std::fs::read(&path)?;
        DrawingAsset::from_bytes(&bytes)
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }
}
