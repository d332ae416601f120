use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;

use hud::surface::DisplayDevice;
use hud::{SCREEN_HEIGHT, SCREEN_WIDTH};

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Boolean framebuffer with the handheld's raster dimensions.
pub struct DisplaySim {
    buffer: [[bool; WIDTH]; HEIGHT],
}

impl DisplaySim {
    pub fn new() -> Self {
        Self {
            buffer: [[false; WIDTH]; HEIGHT],
        }
    }

    pub fn pixel(&self, x: u8, y: u8) -> bool {
        self.buffer[y as usize][x as usize]
    }

    pub fn lit_count(&self) -> usize {
        self.buffer
            .iter()
            .map(|row| row.iter().filter(|p| **p).count())
            .sum()
    }
}

impl Default for DisplaySim {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayDevice for DisplaySim {
    fn draw_pixel(&mut self, x: u8, y: u8, color: bool) {
        if (x as usize) < WIDTH && (y as usize) < HEIGHT {
            self.buffer[y as usize][x as usize] = color;
        }
    }

    // display successfully updated (nothing to transfer in memory)
    fn update(&mut self) -> bool {
        return true;
    }
}

#[derive(Debug)]
pub struct CommError;

impl DrawTarget for DisplaySim {
    type Color = BinaryColor;
    type Error = CommError;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels.into_iter() {
            // [`DrawTarget`] implementations are required to discard any out
            // of bounds pixels without returning an error or causing a panic.
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
                self.draw_pixel(x as u8, y as u8, color.is_on());
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> core::result::Result<(), Self::Error> {
        let c = color == BinaryColor::On;
        for row in self.buffer.iter_mut() {
            for x in row.iter_mut() {
                *x = c;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for DisplaySim {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}
