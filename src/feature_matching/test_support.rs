use image::{GrayImage, Luma};

/// Blocky pseudo-random texture, 8x8 blocks.
pub fn texture(width: u32, height: u32, seed: u32) -> GrayImage {
    let block = |bx: u32, by: u32| {
        let mut s = seed ^ bx.wrapping_mul(0x9E37_79B9) ^ by.wrapping_mul(0x85EB_CA6B);
        s ^= s >> 15;
        s = s.wrapping_mul(0x2C1B_3C6D);
        s ^= s >> 12;
        (s & 0xFF) as u8
    };
    GrayImage::from_fn(width, height, |x, y| Luma([block(x / 8, y / 8)]))
}

/// Moves `image` by (dx, dy); uncovered pixels take `fill`.
pub fn shifted(image: &GrayImage, dx: i64, dy: i64, fill: u8) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let sx = x as i64 - dx;
        let sy = y as i64 - dy;
        if sx >= 0 && sy >= 0 && sx < image.width() as i64 && sy < image.height() as i64 {
            *image.get_pixel(sx as u32, sy as u32)
        } else {
            Luma([fill])
        }
    })
}
