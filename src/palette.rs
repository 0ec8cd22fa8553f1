/// A named, ordered set of colors. Premium palettes stay locked until the
/// user unlocks them through the rewarded-ad placeholder; the set of unlocked
/// ids lives in [`crate::store::Settings`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: &'static [&'static str],
    pub premium: bool,
}

pub const CLASSIC_PALETTE: ColorPalette = ColorPalette {
    id: "classic",
    name: "Clásica",
    colors: &[
        // Reds & Pinks
        "#FF0000", "#FF3366", "#FF69B4", "#FF1493",
        // Oranges
        "#FF6600", "#FF8C00", "#FFA500", "#FFD700",
        // Yellows & Greens
        "#FFFF00", "#ADFF2F", "#00FF00", "#32CD32",
        // Teals & Blues
        "#00CED1", "#00BFFF", "#0080FF", "#0000FF",
        // Purples & Violets
        "#8B00FF", "#9400D3", "#EE82EE", "#FF00FF",
        // Browns & Earth
        "#8B4513", "#A0522D", "#D2691E", "#F4A460",
        // Neutrals
        "#FFFFFF", "#F5F5F5", "#D3D3D3", "#808080",
        "#404040", "#1A1A1A", "#000000", "#8B0000",
        // Skin tones
        "#FFDAB9", "#DEB887", "#D2B48C", "#C19A6B",
    ],
    premium: false,
};

pub const MURAKAMI_PALETTE: ColorPalette = ColorPalette {
    id: "murakami",
    name: "Murakami Pop",
    colors: &[
        "#FF3366", "#FF6699", "#FF99CC", "#FFCCEE",
        "#FF6600", "#FF9900", "#FFCC00", "#FFFF00",
        "#99FF00", "#33FF00", "#00FF99", "#00FFFF",
        "#0099FF", "#0033FF", "#6600FF", "#CC00FF",
        "#FF00CC", "#FF0066", "#FFFFFF", "#000000",
        "#FFD700", "#FF4500", "#7CFC00", "#00CED1",
        "#FF69B4", "#9370DB", "#20B2AA", "#FF8C00",
        "#00FA9A", "#FF1493", "#1E90FF", "#DC143C",
        "#ADFF2F", "#FF7F50", "#DA70D6", "#40E0D0",
    ],
    premium: false,
};

pub const NEON_PALETTE: ColorPalette = ColorPalette {
    id: "neon",
    name: "Neon Tokyo",
    colors: &[
        "#FF0080", "#FF00FF", "#8000FF", "#0000FF",
        "#00FFFF", "#00FF80", "#80FF00", "#FFFF00",
        "#FF8000", "#FF0000", "#FF40FF", "#40FFFF",
        "#40FF40", "#FFFF40", "#FF8040", "#4080FF",
        "#FF4080", "#80FF80", "#8080FF", "#FFFF80",
        "#FF80FF", "#80FFFF", "#C0FF00", "#FF00C0",
        "#00FFC0", "#C000FF", "#FF6000", "#0060FF",
        "#60FF00", "#FF0060", "#00FF60", "#6000FF",
        "#FFFFFF", "#000000", "#202020", "#404040",
    ],
    premium: true,
};

pub const PASTEL_PALETTE: ColorPalette = ColorPalette {
    id: "pastel",
    name: "Pastel Dreams",
    colors: &[
        "#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9",
        "#BAE1FF", "#E8BAFF", "#FFBAE8", "#FFD9BA",
        "#D9FFBA", "#BAD9FF", "#F9BAFF", "#BAFFF9",
        "#FFC8DD", "#FFAFCC", "#BDE0FE", "#A2D2FF",
        "#CDB4DB", "#FFC8DD", "#FFAFCC", "#BDE0FE",
        "#E9C46A", "#F4A261", "#E76F51", "#264653",
        "#2A9D8F", "#E9C46A", "#F4A261", "#E76F51",
        "#FFDDD2", "#E8E8E4", "#D8E2DC", "#ECE4DB",
        "#FFFFFF", "#F8F8F8", "#EEEEEE", "#DDDDDD",
    ],
    premium: true,
};

pub const JAPANESE_PALETTE: ColorPalette = ColorPalette {
    id: "japanese",
    name: "Japonés Tradicional",
    colors: &[
        "#C62828", "#AD1457", "#6A1B9A", "#283593",
        "#1565C0", "#00695C", "#2E7D32", "#F57F17",
        "#E65100", "#BF360C", "#4E342E", "#37474F",
        "#E91E63", "#9C27B0", "#3F51B5", "#2196F3",
        "#009688", "#4CAF50", "#FF9800", "#FF5722",
        "#795548", "#607D8B", "#F8BBD9", "#CE93D8",
        "#9FA8DA", "#80DEEA", "#A5D6A7", "#FFF176",
        "#FFCC80", "#FFAB91", "#D7CCC8", "#B0BEC5",
        "#FFFFFF", "#FAFAFA", "#212121", "#000000",
    ],
    premium: true,
};

static ALL_PALETTES: [ColorPalette; 5] = [
    CLASSIC_PALETTE,
    MURAKAMI_PALETTE,
    NEON_PALETTE,
    PASTEL_PALETTE,
    JAPANESE_PALETTE,
];

/// The full catalog, in display order. The first entry is always free.
pub fn palettes() -> &'static [ColorPalette] {
    &ALL_PALETTES
}

/// Look up a palette by id, falling back to the first (free) entry for
/// unknown ids.
pub fn palette_by_id(id: &str) -> &'static ColorPalette {
    ALL_PALETTES
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&ALL_PALETTES[0])
}
