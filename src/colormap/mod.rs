// SPDX-License-Identifier: GPL-3.0-only

//! False-colour rendering of disparity images
//!
//! A disparity frame is normalised against its valid range and every sample
//! is looked up in a fixed 256-entry colour table. Both the table and the
//! mapper are read-only and safe to share between threads.

mod mapper;
mod table;

pub use mapper::{ColorMapper, RangeMode, color_index, map_to_color};
pub use table::{ChannelOrder, ColorTable, TABLE_CHANNEL_ORDER};
