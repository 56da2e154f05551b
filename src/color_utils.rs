//! Color utility functions shared across the application.
//!
//! Palette colors travel as `#rrggbb` strings in payloads and overlays; these
//! helpers convert between that form and RGB components.

/// Parse a `#rrggbb` (or `rrggbb`) hex string into RGB components.
///
/// Returns `None` for anything that is not exactly six hex digits.
pub fn parse_hex_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Format an RGB color with alpha as a CSS `rgba(...)` value.
///
/// Used for translucent annotation fills in the overlay.
pub fn rgba_css(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_and_without_hash() {
        assert_eq!(parse_hex_rgb("#3b82f6"), Some([59, 130, 246]));
        assert_eq!(parse_hex_rgb("3B82F6"), Some([59, 130, 246]));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert_eq!(parse_hex_rgb("#3b82f"), None);
        assert_eq!(parse_hex_rgb("#3b82fg"), None);
        assert_eq!(parse_hex_rgb(""), None);
        assert_eq!(parse_hex_rgb("#泥岩泥"), None);
    }

    #[test]
    fn test_rgba_css() {
        assert_eq!(rgba_css([59, 130, 246], 0.35), "rgba(59, 130, 246, 0.35)");
        assert_eq!(rgba_css([16, 185, 129], 0.15), "rgba(16, 185, 129, 0.15)");
    }
}
