use embedded_graphics::pixelcolor::BinaryColor;

use crate::surface::DisplayDevice;

/// The cup trophy icon, 8x8, one row per byte, bit 0 is the leftmost column.
pub static CUP: [u8; 8] = [
    0b01111110,
    0b10111101,
    0b10111101,
    0b01111110,
    0b00111100,
    0b00011000,
    0b01111110,
    0b00000000,
];

/// A borrowed 1bpp row-major bitmap, at most 8 pixels wide. Set bits paint
/// `on_color`; clear bits paint `off_color`, or nothing when it is `None`
/// (transparent overlay, the default).
pub struct Sprite {
    on_color: BinaryColor,
    off_color: Option<BinaryColor>,
    data: &'static [u8],
    width: u8,
}

impl Sprite {
    pub fn new(data: &'static [u8], width: u8) -> Self {
        Self {
            on_color: BinaryColor::On,
            off_color: None,
            data,
            width,
        }
    }

    pub fn cup() -> Self {
        Self::new(&CUP, 8)
    }

    pub fn set_colors(&mut self, on_color: BinaryColor, off_color: Option<BinaryColor>) {
        self.on_color = on_color;
        self.off_color = off_color;
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.data.len() as u8
    }

    pub fn draw(&self, disp: &mut impl DisplayDevice, dx: u8, dy: u8) {
        for (y, row) in self.data.iter().enumerate() {
            for x in 0..self.width {
                if row & (1 << x) != 0 {
                    disp.draw_pixel(dx + x, dy + y as u8, self.on_color.is_on());
                } else if let Some(off) = self.off_color {
                    disp.draw_pixel(dx + x, dy + y as u8, off.is_on());
                }
            }
        }
    }
}
