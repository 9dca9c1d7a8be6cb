//! Sizing, color, and styling constants for the overlay.

use floem::peniko::Color;

/// Gradient track width; one pixel per channel unit.
pub const TRACK_WIDTH: f32 = 256.0;

/// Gradient track height.
pub const TRACK_HEIGHT: f32 = 24.0;

/// Thumb radius on channel sliders.
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for slider tracks
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around dialog bodies
pub const PADDING: f32 = 8.0;

/// Channel input field width
pub const INPUT_WIDTH: f32 = 34.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Checkerboard cell size under the alpha gradient
pub const CHECKER_CELL: f64 = 8.0;

/// Component swatch size in the hex row
pub const SWATCH_SIZE: f32 = 24.0;

/// Scheme list dialog width
pub const SCHEME_DIALOG_WIDTH: f32 = 220.0;

/// Scheme list height before it scrolls
pub const SCHEME_LIST_HEIGHT: f32 = 360.0;

/// Halo applied to a hovered host element while picking a member.
pub const HIGHLIGHT_COLOR: Color = Color::rgb8(80, 120, 255);
