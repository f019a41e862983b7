//! Side-by-side rendering of matched keypoints.

use image::{GrayImage, Rgb, RgbImage};

use crate::feature_matching::types::{Keypoint, MatchResult};

const KEYPOINT_RADIUS: i64 = 4;

const PALETTE: [Rgb<u8>; 8] = [
    Rgb([255, 0, 0]),
    Rgb([0, 255, 0]),
    Rgb([0, 0, 255]),
    Rgb([255, 255, 0]),
    Rgb([255, 0, 255]),
    Rgb([0, 255, 255]),
    Rgb([255, 128, 0]),
    Rgb([128, 0, 255]),
];

/// Color used for the match at `index`.
pub fn match_color(index: usize) -> Rgb<u8> {
    PALETTE[index % PALETTE.len()]
}

fn put(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < canvas.width() as i64 && y < canvas.height() as i64 {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line, both endpoints included.
fn draw_line(canvas: &mut RgbImage, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y, mut err) = (x0, y0, dx + dy);
    loop {
        put(canvas, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Midpoint circle outline.
fn draw_circle(canvas: &mut RgbImage, (cx, cy): (i64, i64), radius: i64, color: Rgb<u8>) {
    let (mut x, mut y, mut err) = (radius, 0i64, 1 - radius);
    while x >= y {
        for (px, py) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            put(canvas, cx + px, cy + py, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

fn point(keypoint: &Keypoint, x_offset: i64) -> (i64, i64) {
    (keypoint.x.round() as i64 + x_offset, keypoint.y.round() as i64)
}

/// Draws `image1` and `image2` next to each other and connects each matched keypoint pair.
///
/// Keypoints without a match are not drawn. The canvas is `w1 + w2` wide and as tall as
/// the taller image; uncovered area stays black.
pub fn draw_matches(image1: &GrayImage, image2: &GrayImage, result: &MatchResult) -> RgbImage {
    let offset = image1.width();
    let mut canvas = RgbImage::new(image1.width() + image2.width(), image1.height().max(image2.height()));

    for (x, y, px) in image1.enumerate_pixels() {
        let v = px.0[0];
        canvas.put_pixel(x, y, Rgb([v, v, v]));
    }
    for (x, y, px) in image2.enumerate_pixels() {
        let v = px.0[0];
        canvas.put_pixel(x + offset, y, Rgb([v, v, v]));
    }

    for (index, m) in result.matches.iter().enumerate() {
        let (Some(kp1), Some(kp2)) = (result.keypoints1.get(m.query_idx), result.keypoints2.get(m.train_idx)) else {
            continue;
        };
        let color = match_color(index);
        let p1 = point(kp1, 0);
        let p2 = point(kp2, offset as i64);
        draw_circle(&mut canvas, p1, KEYPOINT_RADIUS, color);
        draw_circle(&mut canvas, p2, KEYPOINT_RADIUS, color);
        draw_line(&mut canvas, p1, p2, color);
    }

    canvas
}
