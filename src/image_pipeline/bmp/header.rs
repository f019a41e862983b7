//! Fixed 54-byte bitmap header (BITMAPFILEHEADER + BITMAPINFOHEADER).

use crate::image_pipeline::common::error::{BMP_HEADER_LEN, ConversionError, Result};

const SIGNATURE: [u8; 2] = *b"BM";
const INFO_HEADER_LEN: u32 = 40;
const BITS_PER_PIXEL_RGB24: u16 = 24;
const COMPRESSION_BI_RGB: u32 = 0;

/// Header fields of an uncompressed bitmap. All integers are little-endian on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub file_size: u32,
    pub data_offset: u32,
    pub dib_header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
}

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

impl BitmapHeader {
    /// Parses and validates the header at the start of `bytes`.
    ///
    /// Only the first 54 bytes are inspected; the payload is not checked here.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < BMP_HEADER_LEN {
            return Err(ConversionError::MalformedHeader(format!(
                "file is {} bytes, header alone needs {}",
                bytes.len(),
                BMP_HEADER_LEN
            )));
        }

        if bytes[0..2] != SIGNATURE {
            return Err(ConversionError::MalformedHeader(format!(
                "bad signature {:02x?}, expected \"BM\"",
                &bytes[0..2]
            )));
        }

        let header = Self {
            file_size: u32_at(bytes, 2),
            data_offset: u32_at(bytes, 10),
            dib_header_size: u32_at(bytes, 14),
            width: u32_at(bytes, 18) as i32,
            height: u32_at(bytes, 22) as i32,
            planes: u16_at(bytes, 26),
            bits_per_pixel: u16_at(bytes, 28),
            compression: u32_at(bytes, 30),
        };

        header.validate()?;
        Ok(header)
    }

    fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConversionError::MalformedHeader(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if self.bits_per_pixel != BITS_PER_PIXEL_RGB24 {
            return Err(ConversionError::UnsupportedFormat(format!(
                "{} bits per pixel, only 24 is supported",
                self.bits_per_pixel
            )));
        }

        if self.compression != COMPRESSION_BI_RGB {
            return Err(ConversionError::UnsupportedFormat(format!(
                "compression method {}, only uncompressed (0) is supported",
                self.compression
            )));
        }

        if self.planes != 1 {
            return Err(ConversionError::UnsupportedFormat(format!(
                "{} color planes, expected 1",
                self.planes
            )));
        }

        // Anything else means a color table or an extended info header sits before the pixels.
        if self.dib_header_size != INFO_HEADER_LEN || self.data_offset as usize != BMP_HEADER_LEN {
            return Err(ConversionError::UnsupportedFormat(format!(
                "pixel data at offset {} with {}-byte info header, expected {} and {}",
                self.data_offset, self.dib_header_size, BMP_HEADER_LEN, INFO_HEADER_LEN
            )));
        }

        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Bytes of pixel data per row, without padding.
    pub fn packed_stride(&self) -> usize {
        self.width() * 3
    }

    /// Bytes per row rounded up to the 4-byte boundary the format mandates.
    pub fn aligned_stride(&self) -> usize {
        (self.packed_stride() + 3) & !3
    }

    /// Serializes a header for a 24-bit bitmap with the given dimensions and row stride.
    pub fn encode_rgb24(width: u32, height: u32, stride: usize) -> [u8; BMP_HEADER_LEN] {
        let image_size = (stride * height as usize) as u32;
        let mut out = [0u8; BMP_HEADER_LEN];
        out[0..2].copy_from_slice(&SIGNATURE);
        out[2..6].copy_from_slice(&(BMP_HEADER_LEN as u32 + image_size).to_le_bytes());
        out[10..14].copy_from_slice(&(BMP_HEADER_LEN as u32).to_le_bytes());
        out[14..18].copy_from_slice(&INFO_HEADER_LEN.to_le_bytes());
        out[18..22].copy_from_slice(&width.to_le_bytes());
        out[22..26].copy_from_slice(&height.to_le_bytes());
        out[26..28].copy_from_slice(&1u16.to_le_bytes());
        out[28..30].copy_from_slice(&BITS_PER_PIXEL_RGB24.to_le_bytes());
        out[34..38].copy_from_slice(&image_size.to_le_bytes());
        out
    }
}
