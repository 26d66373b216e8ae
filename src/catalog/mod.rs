// SPDX-License-Identifier: GPL-3.0-only

//! Discovery of selectable disparity sources
//!
//! Published topics are filtered by declared message type, and names ending
//! in a known transport segment are additionally offered as (parent topic,
//! transport) pairs.

mod menu;
mod source;

pub use menu::{MenuEntry, TopicMenu};
pub use source::{SelectableSource, SourceCatalog, SourceDescriptor, Transport, filter_sources};
