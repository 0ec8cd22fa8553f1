use egui::Color32;

/// Pixels with an average channel brightness below this value are treated as
/// outline ink and are never paintable. 0-255; lower protects only the very
/// darkest pixels.
pub const INK_THRESHOLD: u8 = 80;

/// Parse a `#RRGGBB` (or bare `RRGGBB`) hex string into channel values.
///
/// Returns `None` for anything that is not exactly six hex digits.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Format channel values as a lowercase `#rrggbb` string.
///
/// Exact inverse of [`hex_to_rgb`] for every valid input.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Sector-based HSV to RGB conversion.
///
/// Hue is normalized to `[0, 1)`, saturation and value to `[0, 1]`. Output
/// channels are rounded to the nearest integer value.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

/// RGB to HSV. Hue in `[0, 1)`, saturation and value in `[0, 1]`.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { d / max };

    let mut h = 0.0;
    if max != min {
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    (h, s, v)
}

pub fn hsv_to_hex(h: f32, s: f32, v: f32) -> String {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    rgb_to_hex(r, g, b)
}

/// Relative luminance of a hex color via linearized sRGB channel weighting.
///
/// Malformed input reads as 0.0 (darkest), so callers fall back to a light
/// border rather than failing.
pub fn luminance(hex: &str) -> f32 {
    let Some((r, g, b)) = hex_to_rgb(hex) else {
        return 0.0;
    };
    let linear = |c: u8| {
        let s = c as f32 / 255.0;
        if s <= 0.03928 {
            s / 12.92
        } else {
            ((s + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// True for colors that need a dark border or label to stay readable.
pub fn is_light_color(hex: &str) -> bool {
    luminance(hex) > 0.5
}

/// A pixel is ink (part of the outline) if its average brightness is strictly
/// below [`INK_THRESHOLD`]. Pixels exactly at the threshold are paintable.
pub fn is_ink_pixel(r: u8, g: u8, b: u8) -> bool {
    let brightness = (r as f32 + g as f32 + b as f32) / 3.0;
    brightness < INK_THRESHOLD as f32
}

/// Bridge a hex color into the egui view layer.
pub fn to_color32(hex: &str) -> Option<Color32> {
    hex_to_rgb(hex).map(|(r, g, b)| Color32::from_rgb(r, g, b))
}
