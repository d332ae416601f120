#![cfg_attr(not(test), no_std)]

//! Shared HUD assets and renderers for the handheld game: a 3x5 numeric
//! bitmap font, the cup icon, and the menu-selection constants. Everything
//! draws through the narrow [`surface::DisplayDevice`] capability so the
//! same code runs against hardware or the simulator.

pub mod font;
pub mod image;
pub mod surface;

pub use font::draw_number;
pub use image::Sprite;
pub use surface::DisplayDevice;

// Menu-selection results. Owned by whoever runs the menu loop; the values
// are stable because saved games persist the last selection.
pub const MENU_EXIT: u8 = 0;
pub const MENU_NEW: u8 = 1;
pub const MENU_RESUME: u8 = 2;

pub const SCREEN_WIDTH: u8 = 128;
pub const SCREEN_HEIGHT: u8 = 64;
