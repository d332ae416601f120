//! Host-side simulator for the HUD crate: an in-memory framebuffer standing
//! in for the handheld's display, so renderers can be exercised off-hardware.

mod hardware;

pub use hardware::DisplaySim;
