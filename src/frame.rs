// SPDX-License-Identifier: GPL-3.0-only

//! Frame types exchanged with the transport and display layers

use crate::constants::{DISPARITY_SAMPLE_BYTES, RGB_PIXEL_BYTES};
use std::sync::Arc;

/// Sample format of an incoming image, parsed from its encoding tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PixelEncoding {
    /// "32FC1" - single channel 32-bit float (the only mappable format)
    Float32C1,
    /// "64FC1" - single channel 64-bit float
    Float64C1,
    /// "16UC1" - single channel 16-bit unsigned
    Uint16C1,
    /// "mono8"
    Mono8,
    /// "mono16"
    Mono16,
    /// Any other tag, kept verbatim
    Other(String),
}

impl PixelEncoding {
    /// Parse an encoding tag as carried in image messages
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "32FC1" => Self::Float32C1,
            "64FC1" => Self::Float64C1,
            "16UC1" => Self::Uint16C1,
            "mono8" => Self::Mono8,
            "mono16" => Self::Mono16,
            other => Self::Other(other.to_string()),
        }
    }

    /// Encoding tag string
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Float32C1 => "32FC1",
            Self::Float64C1 => "64FC1",
            Self::Uint16C1 => "16UC1",
            Self::Mono8 => "mono8",
            Self::Mono16 => "mono16",
            Self::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for PixelEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One disparity image as delivered by the transport layer
///
/// The sample buffer is shared read-only; `row_stride` is in bytes and may
/// include alignment padding past `width * 4`.
#[derive(Debug, Clone)]
pub struct DisparityFrame {
    pub width: u32,
    pub height: u32,
    pub row_stride: usize,
    pub encoding: PixelEncoding,
    /// Samples are stored most significant byte first
    pub big_endian: bool,
    pub data: Arc<[u8]>,
    pub min_disparity: f32,
    pub max_disparity: f32,
}

impl DisparityFrame {
    /// Wrap raw sample bytes received from the wire
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        width: u32,
        height: u32,
        row_stride: usize,
        encoding: PixelEncoding,
        big_endian: bool,
        data: impl Into<Arc<[u8]>>,
        min_disparity: f32,
        max_disparity: f32,
    ) -> Self {
        Self {
            width,
            height,
            row_stride,
            encoding,
            big_endian,
            data: data.into(),
            min_disparity,
            max_disparity,
        }
    }

    /// Build a tightly packed 32FC1 frame from host-order samples
    pub fn from_samples(
        width: u32,
        height: u32,
        samples: &[f32],
        min_disparity: f32,
        max_disparity: f32,
    ) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(samples);
        Self::new(
            width,
            height,
            width as usize * DISPARITY_SAMPLE_BYTES,
            PixelEncoding::Float32C1,
            cfg!(target_endian = "big"),
            bytes,
            min_disparity,
            max_disparity,
        )
    }

    /// Bytes occupied by the samples of one row (excluding padding)
    pub fn row_bytes(&self) -> usize {
        self.width as usize * DISPARITY_SAMPLE_BYTES
    }

    /// Decode one 4-byte sample honouring the frame's byte order
    #[inline]
    pub fn decode_sample(&self, bytes: [u8; 4]) -> f32 {
        if self.big_endian {
            f32::from_be_bytes(bytes)
        } else {
            f32::from_le_bytes(bytes)
        }
    }
}

/// Ready-to-display RGB image, tightly packed (`row_stride == width * 3`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorImage {
    pub width: u32,
    pub height: u32,
    pub row_stride: usize,
    data: Vec<u8>,
}

impl ColorImage {
    pub(crate) fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * RGB_PIXEL_BYTES);
        Self {
            width,
            height,
            row_stride: width as usize * RGB_PIXEL_BYTES,
            data,
        }
    }

    /// RGB bytes in row-major order
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at (x, y), or None when outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.row_stride + x as usize * RGB_PIXEL_BYTES;
        let px = self.data.get(idx..idx + RGB_PIXEL_BYTES)?;
        Some([px[0], px[1], px[2]])
    }

    /// Convert into an `image::RgbImage` for displays built on the image crate
    pub fn into_rgb_image(self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_tags() {
        assert_eq!(PixelEncoding::from_tag("32FC1"), PixelEncoding::Float32C1);
        assert_eq!(PixelEncoding::from_tag("16UC1").as_tag(), "16UC1");
        assert_eq!(
            PixelEncoding::from_tag("bgr8"),
            PixelEncoding::Other("bgr8".to_string())
        );
        assert_eq!(PixelEncoding::Other("bgr8".into()).to_string(), "bgr8");
    }

    #[test]
    fn test_from_samples_layout() {
        let frame = DisparityFrame::from_samples(3, 2, &[0.0; 6], 0.0, 1.0);
        assert_eq!(frame.row_stride, 12);
        assert_eq!(frame.data.len(), 24);
        assert_eq!(frame.encoding, PixelEncoding::Float32C1);
    }

    #[test]
    fn test_decode_sample_byte_order() {
        let mut frame = DisparityFrame::from_samples(1, 1, &[0.0], 0.0, 1.0);
        frame.big_endian = true;
        assert_eq!(frame.decode_sample(1.5f32.to_be_bytes()), 1.5);
        frame.big_endian = false;
        assert_eq!(frame.decode_sample(1.5f32.to_le_bytes()), 1.5);
    }

    #[test]
    fn test_color_image_pixel_access() {
        let image = ColorImage::from_rgb(2, 1, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(image.row_stride, 6);
        assert_eq!(image.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 1), None);
    }

    #[test]
    fn test_into_rgb_image() {
        let image = ColorImage::from_rgb(1, 2, vec![10, 20, 30, 40, 50, 60]);
        let rgb = image.into_rgb_image().unwrap();
        assert_eq!(rgb.get_pixel(0, 1).0, [40, 50, 60]);
    }
}
