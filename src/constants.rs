use std::time::Duration;

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Target frames per second

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000); // Period between automatic slide changes

pub const NAV_BUTTON_SIZE: f32 = 56.0;        // Side length of the previous/next buttons
pub const NAV_BUTTON_MARGIN: f32 = 24.0;      // Distance between a button and the window edge

pub const INDICATOR_RADIUS: f32 = 7.0;        // Radius of an indicator dot
pub const INDICATOR_SPACING: f32 = 28.0;      // Distance between indicator centres
pub const INDICATOR_BOTTOM_OFFSET: f32 = 40.0; // Distance from the indicator row to the bottom edge
pub const INDICATOR_HIT_SLOP: f32 = 6.0;      // Extra click radius around a dot

pub const CAPTION_FONT_SIZE: i32 = 44;        // Caption text size
pub const CAPTION_LEFT_MARGIN: f32 = 0.1;     // Caption x position, fraction of the width
pub const CAPTION_BASELINE: f32 = 0.72;       // Caption y position, fraction of the height
