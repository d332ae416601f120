use embedded_graphics::pixelcolor::BinaryColor;
use heapless::Vec;

use crate::surface::DisplayDevice;

pub const DIGIT_WIDTH: u8 = 3;
pub const DIGIT_HEIGHT: u8 = 5;
/// Horizontal advance per digit: 3 glyph columns + 1 spacing column.
pub const DIGIT_STRIDE: u8 = 4;
/// Decimal digits of u32::MAX.
pub const MAX_DIGITS: u8 = 10;

/// 3x5 digit glyphs, one row per byte, bits 0..=2 are glyph columns
/// left to right.
pub static DIGIT_GLYPHS: [[u8; DIGIT_HEIGHT as usize]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b011, 0b010, 0b010, 0b111], // 1
    [0b111, 0b100, 0b111, 0b001, 0b111], // 2
    [0b111, 0b100, 0b110, 0b100, 0b111], // 3
    [0b101, 0b101, 0b111, 0b100, 0b100], // 4
    [0b111, 0b001, 0b111, 0b100, 0b111], // 5
    [0b111, 0b001, 0b111, 0b101, 0b111], // 6
    [0b111, 0b100, 0b110, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b100, 0b111], // 9
];

/// Number of decimal digits in `number`; 0 still occupies one digit.
pub fn decimal_digit_count(number: u32) -> u8 {
    let mut count = 1;
    let mut n = number / 10;
    while n > 0 {
        count += 1;
        n /= 10;
    }
    count
}

/// Horizontal pixel span of a `count`-digit render (no trailing spacer).
/// A zero-digit render spans nothing.
pub fn number_span(count: u8) -> u16 {
    (count as u16 * DIGIT_STRIDE as u16).saturating_sub(1)
}

/// Blit one digit glyph with its top-left corner at (x, y). Only set bits
/// are painted; clear bits leave the surface untouched. Pixels that would
/// leave the u8 coordinate space are dropped, not wrapped.
pub fn draw_digit(disp: &mut impl DisplayDevice, x: u8, y: u8, digit: u8, color: BinaryColor) {
    let glyph = &DIGIT_GLYPHS[(digit % 10) as usize];
    for (row, bits) in glyph.iter().enumerate() {
        let py = y as u16 + row as u16;
        for col in 0..DIGIT_WIDTH {
            let px = x as u16 + col as u16;
            if bits & (1 << col) != 0 && px <= u8::MAX as u16 && py <= u8::MAX as u16 {
                disp.draw_pixel(px as u8, py as u8, color.is_on());
            }
        }
    }
}

/// Draw `number` in decimal at (x, y), left-padded with '0' glyphs until at
/// least `padding` digits are shown. Padding never truncates: when the
/// natural length exceeds `padding`, every digit is drawn. The caller keeps
/// the run inside the surface; digit cells whose origin leaves the u8
/// coordinate space are skipped rather than wrapped.
pub fn draw_number(
    disp: &mut impl DisplayDevice,
    x: u8,
    y: u8,
    number: u32,
    color: BinaryColor,
    padding: u8,
) {
    // Least-significant digit first; u32 never produces more than MAX_DIGITS.
    let mut digits: Vec<u8, { MAX_DIGITS as usize }> = Vec::new();
    let mut n = number;
    loop {
        digits.push((n % 10) as u8).ok();
        n /= 10;
        if n == 0 {
            break;
        }
    }

    let count = (digits.len() as u8).max(padding);
    for pos in 0..count {
        let gx = x as u16 + pos as u16 * DIGIT_STRIDE as u16;
        if gx > u8::MAX as u16 {
            break;
        }
        // rank counts digits to the right of this position; positions past
        // the natural length are the zero padding.
        let rank = (count - 1 - pos) as usize;
        let digit = if rank < digits.len() { digits[rank] } else { 0 };
        draw_digit(disp, gx as u8, y, digit, color);
    }
}
