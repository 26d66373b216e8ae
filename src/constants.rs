// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Message type published by stereo pipelines for disparity images
pub const DISPARITY_MESSAGE_TYPE: &str = "stereo_msgs/DisparityImage";

/// Separator between segments of a topic name
pub const TOPIC_SEPARATOR: char = '/';

/// Separator between topic path and transport in a flat selection label
pub const LABEL_SEPARATOR: char = ' ';

/// Number of entries in the disparity colour table
pub const COLOR_TABLE_SIZE: usize = 256;

/// Highest index into the colour table
pub const MAX_COLOR_INDEX: i32 = (COLOR_TABLE_SIZE - 1) as i32;

/// Bytes per input disparity sample (32-bit float)
pub const DISPARITY_SAMPLE_BYTES: usize = 4;

/// Bytes per output pixel (red, green, blue)
pub const RGB_PIXEL_BYTES: usize = 3;

/// Default ceiling for fixed-range rendering, in pixels of disparity
pub const DEFAULT_MAX_RANGE: f32 = 64.0;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Terminal preview redraw interval
pub const PREVIEW_FRAME_INTERVAL: std::time::Duration = std::time::Duration::from_millis(50);
