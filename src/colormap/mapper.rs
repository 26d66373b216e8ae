// SPDX-License-Identifier: GPL-3.0-only

//! Disparity to RGB conversion
//!
//! Each sample is normalised into `[0, 255]` against the frame's disparity
//! range and looked up in the [`ColorTable`]. The index rule matches legacy
//! renderings exactly: `(d - min) * scale + 0.5` truncated toward zero, then
//! clamped.

use super::table::ColorTable;
use crate::constants::{DISPARITY_SAMPLE_BYTES, MAX_COLOR_INDEX, RGB_PIXEL_BYTES};
use crate::errors::MappingError;
use crate::frame::{ColorImage, DisparityFrame, PixelEncoding};
use tracing::trace;

/// How the upper bound of the colour scale is chosen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RangeMode {
    /// Use the bounds carried by each frame
    #[default]
    Dynamic,
    /// Keep the frame's minimum, saturate at a fixed maximum
    Fixed { max_range: f32 },
}

impl RangeMode {
    /// Effective (min, max) for a frame
    pub fn bounds(&self, frame: &DisparityFrame) -> (f32, f32) {
        match *self {
            RangeMode::Dynamic => (frame.min_disparity, frame.max_disparity),
            RangeMode::Fixed { max_range } => (frame.min_disparity, max_range),
        }
    }
}

/// Maps disparity frames onto the colour table
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorMapper {
    pub range: RangeMode,
    table: ColorTable,
}

impl ColorMapper {
    pub fn new(range: RangeMode) -> Self {
        Self {
            range,
            table: ColorTable::standard(),
        }
    }

    /// Render `frame` as a tightly packed RGB image.
    ///
    /// Fails without producing output when the frame has no valid range,
    /// is not 32FC1, or its buffer does not match its declared geometry.
    pub fn map(&self, frame: &DisparityFrame) -> Result<ColorImage, MappingError> {
        // Sentinel for "no stereo match computed yet"
        if frame.min_disparity == 0.0 && frame.max_disparity == 0.0 {
            return Err(MappingError::DegenerateRange { min: 0.0, max: 0.0 });
        }
        if frame.encoding != PixelEncoding::Float32C1 {
            return Err(MappingError::UnsupportedEncoding(
                frame.encoding.as_tag().to_string(),
            ));
        }

        let (min, max) = self.range.bounds(frame);
        let scale = index_scale(min, max).ok_or(MappingError::DegenerateRange { min, max })?;

        if frame.width == 0 || frame.height == 0 {
            return Ok(ColorImage::from_rgb(frame.width, frame.height, Vec::new()));
        }

        check_geometry(frame)?;

        let width = frame.width as usize;
        let height = frame.height as usize;
        let row_bytes = frame.row_bytes();
        let mut rgb = Vec::with_capacity(width * height * RGB_PIXEL_BYTES);

        for row in 0..height {
            let start = row * frame.row_stride;
            let samples = &frame.data[start..start + row_bytes];
            for chunk in samples.chunks_exact(DISPARITY_SAMPLE_BYTES) {
                let d = frame.decode_sample([chunk[0], chunk[1], chunk[2], chunk[3]]);
                rgb.extend_from_slice(&self.table.rgb(color_index(d, min, scale)));
            }
        }

        trace!(
            width = frame.width,
            height = frame.height,
            min,
            max,
            "Mapped disparity frame"
        );

        Ok(ColorImage::from_rgb(frame.width, frame.height, rgb))
    }
}

/// Map a frame using the frame's own disparity bounds
pub fn map_to_color(frame: &DisparityFrame) -> Result<ColorImage, MappingError> {
    ColorMapper::default().map(frame)
}

/// Table index for sample `d`.
///
/// Negative intermediates truncate toward zero before clamping, and the
/// saturating float conversion sends NaN to 0 and +inf to 255.
#[inline]
pub fn color_index(d: f32, min: f32, scale: f32) -> u8 {
    let index = ((d - min) * scale + 0.5) as i32;
    index.clamp(0, MAX_COLOR_INDEX) as u8
}

/// Scale from disparity units to table steps, `None` for an empty or
/// inverted range.
///
/// A span too wide for `f32` (e.g. `[-3e38, 3e38]`) is measured in `f64`.
fn index_scale(min: f32, max: f32) -> Option<f32> {
    let span = max - min;
    let scale = if span.is_finite() {
        255.0f32 / span
    } else {
        (255.0f64 / (f64::from(max) - f64::from(min))) as f32
    };
    (scale.is_finite() && scale > 0.0).then_some(scale)
}

/// Rows must fit the stride and the buffer. Frames with no pixels are
/// handled by the caller.
fn check_geometry(frame: &DisparityFrame) -> Result<(), MappingError> {
    let row_bytes = frame.row_bytes();
    if frame.row_stride < row_bytes {
        return Err(MappingError::InvalidStride {
            stride: frame.row_stride,
            required: row_bytes,
        });
    }

    // The last row needs no trailing padding
    let required = frame
        .row_stride
        .checked_mul(frame.height as usize - 1)
        .and_then(|n| n.checked_add(row_bytes))
        .unwrap_or(usize::MAX);
    if frame.data.len() < required {
        return Err(MappingError::BufferTooSmall {
            actual: frame.data.len(),
            required,
        });
    }

    Ok(())
}
