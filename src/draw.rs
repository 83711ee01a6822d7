// Software drawing utilities on a FrameBuffer.
// 1) Clearing the whole surface.
// 2) Filled circles (the placed shapes).
// 3) A tiny 5x7 bitmap font, scalable, for the help overlay.
// Everything is clipped to the surface; off-screen pixels are skipped.

use crate::types::{FrameBuffer, Rgb};

/// Width of one glyph cell including the 1-pixel gap, before scaling.
pub const GLYPH_ADVANCE: i32 = 6;
/// Height of one text line including the gap, before scaling.
pub const LINE_HEIGHT: i32 = 9;

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Paint every pixel with `color`.
pub fn clear(fb: &mut FrameBuffer, color: Rgb) {
    fb.pixels.fill(color.to_u32());
}

/// Filled disc centered at (cx,cy): every pixel with dx²+dy² <= r².
pub fn fill_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: u32, color: Rgb) {
    let r = radius as i64;
    let r2 = (r as i128) * (r as i128);
    let c = color.to_u32();

    // Only the part of the bounding box that lies on the surface.
    let x0 = (cx as i64 - r).max(0);
    let x1 = (cx as i64 + r).min(fb.width as i64 - 1);
    let y0 = (cy as i64 - r).max(0);
    let y1 = (cy as i64 + r).min(fb.height as i64 - 1);

    for y in y0..=y1 {
        let dy = (y - cy as i64) as i128;
        for x in x0..=x1 {
            let dx = (x - cx as i64) as i128;
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, x as i32, y as i32, c);
            }
        }
    }
}

/* ---------- 5x7 bitmap font ---------- */

/// Return a 5x7 glyph bitmap. Lowercase letters share the uppercase glyphs.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b00100,0b00100,0b01000),
        '/' => g!(0b00000,0b00001,0b00010,0b00100,0b01000,0b10000,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Fill one `scale`x`scale` block for a lit glyph pixel.
fn put_block(fb: &mut FrameBuffer, x: i32, y: i32, scale: i32, color: u32) {
    for dy in 0..scale {
        for dx in 0..scale {
            put_pixel(fb, x + dx, y + dy, color);
        }
    }
}

/// Draw a single 5x7 character with its top-left at (x,y).
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_block(fb, x + rx * scale, y + ry as i32 * scale, scale, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs, each pixel blown up to `scale`x`scale`.
/// Unknown characters still advance the cursor.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, scale: u32, color: Rgb) {
    let scale = scale.max(1) as i32;
    let c = color.to_u32();
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, scale, c);
        x += GLYPH_ADVANCE * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREY: Rgb = Rgb::new(128, 128, 128);

    fn lit(fb: &FrameBuffer, color: Rgb) -> usize {
        fb.pixels.iter().filter(|&&p| p == color.to_u32()).count()
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut fb = FrameBuffer::new(8, 8);
        clear(&mut fb, GREY);
        assert_eq!(lit(&fb, GREY), 64);
    }

    #[test]
    fn circle_covers_center_and_respects_radius() {
        let mut fb = FrameBuffer::new(50, 50);
        fill_circle(&mut fb, 25, 25, 5, RED);
        assert_eq!(fb.get(25, 25), Some(RED.to_u32()));
        assert_eq!(fb.get(30, 25), Some(RED.to_u32()));
        assert_eq!(fb.get(31, 25), Some(0));
        // corner of the bounding box is outside the disc
        assert_eq!(fb.get(30, 30), Some(0));
    }

    #[test]
    fn radius_one_is_a_plus() {
        let mut fb = FrameBuffer::new(5, 5);
        fill_circle(&mut fb, 2, 2, 1, RED);
        assert_eq!(lit(&fb, RED), 5);
    }

    #[test]
    fn circle_partly_off_screen_is_clipped() {
        let mut fb = FrameBuffer::new(10, 10);
        fill_circle(&mut fb, -2, -2, 4, RED);
        assert_eq!(fb.get(0, 0), Some(RED.to_u32()));
        fill_circle(&mut fb, 1000, -1000, 3, RED);
        fill_circle(&mut fb, i32::MAX, i32::MIN, u32::MAX / 4, RED);
    }

    #[test]
    fn text_scales_glyph_pixels() {
        let mut small = FrameBuffer::new(20, 20);
        let mut big = FrameBuffer::new(40, 40);
        draw_text_5x7(&mut small, 0, 0, "H", 1, RED);
        draw_text_5x7(&mut big, 0, 0, "H", 2, RED);
        assert_eq!(lit(&big, RED), 4 * lit(&small, RED));
    }

    #[test]
    fn lowercase_matches_uppercase() {
        let mut a = FrameBuffer::new(20, 10);
        let mut b = FrameBuffer::new(20, 10);
        draw_text_5x7(&mut a, 0, 0, "q", 1, RED);
        draw_text_5x7(&mut b, 0, 0, "Q", 1, RED);
        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn unknown_glyph_draws_nothing_but_advances() {
        let mut fb = FrameBuffer::new(20, 10);
        draw_text_5x7(&mut fb, 0, 0, "~I", 1, RED);
        // 'I' lands in the second cell
        assert_eq!(fb.get(GLYPH_ADVANCE as usize + 2, 0), Some(RED.to_u32()));
        assert_eq!(fb.get(2, 0), Some(0));
    }
}
