// SPDX-License-Identifier: GPL-3.0-only

//! Disparity View - false-color rendering of stereo disparity images
//!
//! This library turns single-channel floating point disparity maps into RGB
//! images for human inspection, and picks out the topics that carry them.
//!
//! # Architecture
//!
//! - [`colormap`]: normalisation and lookup through the fixed colour table
//! - [`catalog`]: filtering published topics into selectable (topic, transport) pairs
//! - [`frame`]: frame types exchanged with the transport and display layers
//! - [`viewer`]: frame delivery contract between transport and display
//! - [`config`]: viewer configuration
//! - [`terminal`]: terminal preview
//!
//! # Example
//!
//! ```
//! use disparity_view::{DisparityFrame, map_to_color};
//!
//! let frame = DisparityFrame::from_samples(2, 1, &[0.0, 10.0], 0.0, 10.0);
//! let image = map_to_color(&frame).unwrap();
//! assert_eq!(image.as_bytes().len(), 6);
//! ```

pub mod catalog;
pub mod colormap;
pub mod config;
pub mod constants;
pub mod errors;
pub mod frame;
pub mod terminal;
pub mod viewer;

// Re-export commonly used types
pub use catalog::{SelectableSource, SourceCatalog, SourceDescriptor, Transport, filter_sources};
pub use colormap::{ColorMapper, ColorTable, RangeMode, map_to_color};
pub use config::Config;
pub use errors::{AppError, AppResult, MappingError};
pub use frame::{ColorImage, DisparityFrame, PixelEncoding};
pub use viewer::{DisparityView, FrameOutcome, ImageSink};
