// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands
//!
//! This module provides command-line functionality for:
//! - Listing selectable disparity topics from a source listing
//! - Dumping the colour table
//! - Loading raw disparity dumps for the terminal preview

use disparity_view::catalog::{SourceCatalog, SourceDescriptor, TopicMenu};
use disparity_view::colormap::{ColorTable, TABLE_CHANNEL_ORDER};
use disparity_view::config::Config;
use disparity_view::constants::DISPARITY_SAMPLE_BYTES;
use disparity_view::errors::{AppError, AppResult};
use disparity_view::frame::{DisparityFrame, PixelEncoding};
use std::path::Path;
use tracing::debug;

/// Print the selectable topics found in a JSON source listing
pub fn list_topics(input: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(input)?;
    let descriptors: Vec<SourceDescriptor> = serde_json::from_str(&text)?;
    debug!(count = descriptors.len(), path = %input.display(), "Read source listing");

    let catalog = SourceCatalog::new(config.message_types.iter().cloned());
    let menu = TopicMenu::new(&catalog.filter(&descriptors));

    if menu.is_empty() {
        println!("No disparity topics found.");
        return Ok(());
    }

    println!("Selectable topics:");
    println!();
    for entry in menu.entries().iter().skip(1) {
        if let Some(source) = &entry.source {
            println!("  {:<48} ({})", entry.text, source.transport);
        }
    }

    Ok(())
}

/// Print every colour table entry
pub fn print_colormap(stored_order: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = ColorTable::standard();
    if stored_order {
        println!("# stored order: {:?}", TABLE_CHANNEL_ORDER);
    }
    for index in 0..=u8::MAX {
        let [a, b, c] = if stored_order {
            table.raw(index)
        } else {
            table.rgb(index)
        };
        println!("{:3}  #{:02x}{:02x}{:02x}  {:3} {:3} {:3}", index, a, b, c, a, b, c);
    }
    Ok(())
}

/// Geometry and range of a raw 32FC1 disparity dump
#[derive(Debug, Clone, Copy)]
pub struct RawFrameLayout {
    pub width: u32,
    pub height: u32,
    pub stride: Option<usize>,
    pub min: f32,
    pub max: f32,
    pub big_endian: bool,
}

/// Load a raw sample dump as a disparity frame
pub fn load_raw_frame(path: &Path, layout: RawFrameLayout) -> AppResult<DisparityFrame> {
    if layout.width == 0 || layout.height == 0 {
        return Err(AppError::Other(
            "--width and --height are required with --input".into(),
        ));
    }

    let data = std::fs::read(path)?;
    let row_stride = layout
        .stride
        .unwrap_or(layout.width as usize * DISPARITY_SAMPLE_BYTES);
    debug!(
        bytes = data.len(),
        width = layout.width,
        height = layout.height,
        row_stride,
        "Read raw disparity dump"
    );

    Ok(DisparityFrame::new(
        layout.width,
        layout.height,
        row_stride,
        PixelEncoding::Float32C1,
        layout.big_endian,
        data,
        layout.min,
        layout.max,
    ))
}
