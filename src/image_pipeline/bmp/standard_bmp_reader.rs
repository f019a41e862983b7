//! Reader for uncompressed 24-bit bitmaps.
//!
//! Bitmap rows are stored bottom-up with pixels in B, G, R order. This reader restores
//! top-down row order, drops any row padding and swaps channels to R, G, B.

use tracing::debug;
use crate::image_pipeline::common::error::{BMP_HEADER_LEN, ConversionError, Result};
use crate::image_pipeline::bmp::header::BitmapHeader;
use crate::image_pipeline::bmp::reader::BitmapReader;
use crate::image_pipeline::bmp::types::RgbImageData;
use crate::image_pipeline::yuv::types::{ConversionConfig, RowPadding};

pub struct StandardBitmapReader;

impl StandardBitmapReader {
    /// Picks the row stride the payload was written with.
    fn resolve_stride(header: &BitmapHeader, payload_len: usize, padding: RowPadding) -> Result<usize> {
        let height = header.height();
        let packed = header.packed_stride();
        let aligned = header.aligned_stride();

        let strides = [packed, aligned];
        let candidates: &[usize] = match padding {
            RowPadding::Packed => &strides[..1],
            RowPadding::Aligned => &strides[1..],
            RowPadding::Auto => &strides,
        };

        candidates
            .iter()
            .copied()
            .find(|stride| stride.checked_mul(height) == Some(payload_len))
            .ok_or(ConversionError::PayloadSizeMismatch {
                expected: candidates[0].saturating_mul(height),
                actual: payload_len,
            })
    }
}

impl BitmapReader for StandardBitmapReader {
    fn read_bitmap(&self, data: &[u8], config: &ConversionConfig) -> Result<RgbImageData> {
        let header = BitmapHeader::parse(data)?;
        let width = header.width();
        let height = header.height();
        let payload = &data[BMP_HEADER_LEN..];

        let stride = Self::resolve_stride(&header, payload.len(), config.row_padding)?;
        debug!(
            "Decoding bitmap {}x{}, stride {} ({} padding bytes per row)",
            width,
            height,
            stride,
            stride - header.packed_stride()
        );

        let row_bytes = header.packed_stride();
        let mut rgb = Vec::with_capacity(row_bytes * height);
        for row in payload.chunks_exact(stride).rev() {
            for bgr in row[..row_bytes].chunks_exact(3) {
                rgb.extend_from_slice(&[bgr[2], bgr[1], bgr[0]]);
            }
        }

        Ok(RgbImageData {
            width,
            height,
            data: rgb,
        })
    }
}
