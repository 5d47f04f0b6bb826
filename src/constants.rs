//! Sizing and styling constants for the tint panel.

/// Preview box size
pub const PREVIEW_WIDTH: f32 = 216.0;
pub const PREVIEW_HEIGHT: f32 = 240.0;

/// Color swatch edge length
pub const SWATCH_SIZE: f32 = 24.0;

/// Border radius for boxes and inputs
pub const RADIUS: f32 = 4.0;

/// Gap between panel rows
pub const GAP: f32 = 8.0;

/// Padding around the whole panel
pub const PADDING: f32 = 8.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 72.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;
