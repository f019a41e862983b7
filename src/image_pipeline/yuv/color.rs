//! Fixed RGB to YUV transform.

/// Rows produce Y, U and V from (R, G, B).
const RGB_TO_YUV: [[f64; 3]; 3] = [
    [ 0.299,  0.587,  0.114],
    [-0.148, -0.289,  0.437],
    [ 0.615, -0.515, -0.100],
];

const YUV_BIAS: [f64; 3] = [0.0, 128.0, 128.0];

/// Converts one RGB pixel to YUV.
///
/// Each row of the matrix is accumulated left to right with fused multiply-add, the bias
/// is added, then the value is clamped to [0, 255] and truncated (never rounded). White
/// therefore maps to (254, 128, 127): the Y and V sums land just below 255 and 128.
pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let rgb = [r as f64, g as f64, b as f64];
    let mut out = [0u8; 3];
    for (channel, (row, bias)) in out.iter_mut().zip(RGB_TO_YUV.iter().zip(YUV_BIAS)) {
        let dot = row[2].mul_add(rgb[2], row[1].mul_add(rgb[1], row[0] * rgb[0]));
        *channel = (dot + bias).clamp(0.0, 255.0) as u8;
    }
    out
}

/// Converts a packed buffer of (R, G, B) triples into (Y, U, V) triples, keeping pixel order.
///
/// # Panics
///
/// Panics if `rgb.len()` is not a multiple of 3.
pub fn convert_pixels(rgb: &[u8]) -> Vec<u8> {
    assert!(
        rgb.len() % 3 == 0,
        "RGB buffer length {} is not a multiple of 3",
        rgb.len()
    );

    rgb.chunks_exact(3)
        .flat_map(|px| rgb_to_yuv(px[0], px[1], px[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black() {
        assert_eq!(rgb_to_yuv(0, 0, 0), [0, 128, 128]);
    }

    #[test]
    fn test_white_truncates() {
        assert_eq!(rgb_to_yuv(255, 255, 255), [254, 128, 127]);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_yuv(0, 0, 255), [29, 239, 102]);
        assert_eq!(rgb_to_yuv(10, 20, 30), [18, 133, 120]);
        assert_eq!(rgb_to_yuv(200, 100, 50), [124, 91, 194]);
    }

    #[test]
    fn test_saturates_high() {
        // V = 0.615 * 255 + 128 = 284.8
        assert_eq!(rgb_to_yuv(255, 0, 0), [76, 90, 255]);
    }

    #[test]
    fn test_saturates_low() {
        // V = -0.515 * 255 - 0.1 * 255 + 128 = -28.8
        assert_eq!(rgb_to_yuv(0, 255, 255), [178, 165, 0]);
        assert_eq!(rgb_to_yuv(0, 255, 0), [149, 54, 0]);
    }

    #[test]
    fn test_convert_pixels_keeps_order_and_length() {
        let rgb = [0, 0, 0, 255, 0, 0, 12, 34, 56];
        let yuv = convert_pixels(&rgb);
        assert_eq!(yuv.len(), rgb.len());
        assert_eq!(yuv, vec![0, 128, 128, 76, 90, 255, 29, 140, 112]);
    }

    #[test]
    fn test_convert_pixels_is_deterministic() {
        let rgb: Vec<u8> = (0..=255u8).cycle().take(3 * 500).collect();
        assert_eq!(convert_pixels(&rgb), convert_pixels(&rgb));
    }

    #[test]
    fn test_empty_buffer() {
        assert!(convert_pixels(&[]).is_empty());
    }

    #[test]
    #[should_panic(expected = "not a multiple of 3")]
    fn test_ragged_buffer_panics() {
        convert_pixels(&[1, 2, 3, 4]);
    }
}
