//! Shared color constants for the UI.

use egui::Color32;

/// Red color for failed loads, failed writes and rejected editors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for writes still in flight.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Toast background, dark enough for white text in both themes.
pub const COLOR_TOAST: Color32 = Color32::from_rgb(185, 28, 28);

/// Muted glyph color of the pencil hint.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(156, 163, 175);

/// Converts an `[r, g, b]` tint from the business layer.
pub fn tint(rgb: [u8; 3]) -> Color32 {
    let [r, g, b] = rgb;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use griddle_business::renderer::{ICON_COLOR_DENIED, ICON_COLOR_PERMITTED};

    #[test]
    fn icon_tints_map_to_their_hex_colors() {
        assert_eq!(tint(ICON_COLOR_PERMITTED), Color32::from_hex("#3b82f6").unwrap());
        assert_eq!(tint(ICON_COLOR_DENIED), Color32::from_hex("#9ca3af").unwrap());
    }
}
