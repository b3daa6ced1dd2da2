//! Shared chart styling: dimensions, fonts, and the colour palette

use plotters::style::RGBColor;

/// The default series palette, matching the matplotlib `tab:` colours the
/// dashboard has always been styled with.
pub const TAB_PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
    RGBColor(140, 86, 75),   // Brown
    RGBColor(227, 119, 194), // Pink
    RGBColor(127, 127, 127), // Gray
];

/// Line colour of the daily totals panel.
pub const DAILY_LINE: RGBColor = RGBColor(0x90, 0xCA, 0xF9);

/// Styling shared by every chart panel.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Panel width in pixels
    pub width: u32,
    /// Panel height in pixels
    pub height: u32,
    /// Background colour
    pub background: RGBColor,
    /// Font family for captions, axis labels, and annotations
    pub font_family: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            background: RGBColor(255, 255, 255),
            font_family: "sans-serif".to_string(),
        }
    }
}

impl ChartStyle {
    /// Build a style from configured values. An unparseable background
    /// colour falls back to white.
    pub fn new(width: u32, height: u32, background: &str, font_family: &str) -> Self {
        Self {
            width,
            height,
            background: Self::parse_color(background).unwrap_or(RGBColor(255, 255, 255)),
            font_family: font_family.to_string(),
        }
    }

    /// Pick a palette colour for a series or bar index, cycling past the end.
    pub fn palette_color(index: usize) -> RGBColor {
        TAB_PALETTE[index % TAB_PALETTE.len()]
    }

    /// Parse a `#RRGGBB` colour string.
    pub fn parse_color(value: &str) -> Option<RGBColor> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(RGBColor(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(ChartStyle::parse_color("#FF0000"), Some(RGBColor(255, 0, 0)));
        assert_eq!(ChartStyle::parse_color("#90CAF9"), Some(DAILY_LINE));
        assert_eq!(ChartStyle::parse_color("red"), None);
        assert_eq!(ChartStyle::parse_color("#GG0000"), None);
        assert_eq!(ChartStyle::parse_color("#FFF"), None);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(ChartStyle::palette_color(0), TAB_PALETTE[0]);
        assert_eq!(ChartStyle::palette_color(8), TAB_PALETTE[0]);
        assert_eq!(ChartStyle::palette_color(9), TAB_PALETTE[1]);
    }
}
