//! The fixed annotation color palette.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color_utils::parse_hex_rgb;

/// One of the seven colors an annotation can carry.
///
/// Serialized as its `#rrggbb` hex string, so payloads never contain a color
/// outside the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaletteColor {
    #[default]
    #[serde(rename = "#3b82f6")]
    Blue,
    #[serde(rename = "#ef4444")]
    Red,
    #[serde(rename = "#10b981")]
    Emerald,
    #[serde(rename = "#f59e0b")]
    Amber,
    #[serde(rename = "#8b5cf6")]
    Violet,
    #[serde(rename = "#ec4899")]
    Pink,
    #[serde(rename = "#06b6d4")]
    Cyan,
}

impl PaletteColor {
    /// Get all palette colors in display order.
    pub fn all() -> &'static [PaletteColor] {
        &[
            PaletteColor::Blue,
            PaletteColor::Red,
            PaletteColor::Emerald,
            PaletteColor::Amber,
            PaletteColor::Violet,
            PaletteColor::Pink,
            PaletteColor::Cyan,
        ]
    }

    /// Get the `#rrggbb` hex string for this color.
    pub fn hex(&self) -> &'static str {
        match self {
            PaletteColor::Blue => "#3b82f6",
            PaletteColor::Red => "#ef4444",
            PaletteColor::Emerald => "#10b981",
            PaletteColor::Amber => "#f59e0b",
            PaletteColor::Violet => "#8b5cf6",
            PaletteColor::Pink => "#ec4899",
            PaletteColor::Cyan => "#06b6d4",
        }
    }

    /// Get the display name for this color.
    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Blue => "Blue",
            PaletteColor::Red => "Red",
            PaletteColor::Emerald => "Emerald",
            PaletteColor::Amber => "Amber",
            PaletteColor::Violet => "Violet",
            PaletteColor::Pink => "Pink",
            PaletteColor::Cyan => "Cyan",
        }
    }

    /// RGB components of this color.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            PaletteColor::Blue => [59, 130, 246],
            PaletteColor::Red => [239, 68, 68],
            PaletteColor::Emerald => [16, 185, 129],
            PaletteColor::Amber => [245, 158, 11],
            PaletteColor::Violet => [139, 92, 246],
            PaletteColor::Pink => [236, 72, 153],
            PaletteColor::Cyan => [6, 182, 212],
        }
    }

    /// Look up a palette color from a hex string, ignoring case and an
    /// optional leading `#`. Colors outside the palette yield `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let rgb = parse_hex_rgb(hex)?;
        Self::all().iter().copied().find(|c| c.rgb() == rgb)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}
