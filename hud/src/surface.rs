/// Minimal drawable-surface capability the renderers require.
///
/// Implementations own clipping: coordinates outside the raster must be
/// discarded without panicking. `draw_pixel` writes one pixel of the binary
/// raster; `update` pushes the buffer to the panel and reports whether the
/// refresh went through (a memory-backed surface just returns `true`).
pub trait DisplayDevice {
    fn draw_pixel(&mut self, x: u8, y: u8, color: bool);
    fn update(&mut self) -> bool;
}
