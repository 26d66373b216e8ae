// SPDX-License-Identifier: GPL-3.0-only

//! Frame delivery between the transport layer and a display
//!
//! The transport hands each incoming [`DisparityFrame`] to
//! [`DisparityView::handle_frame`]; successfully mapped images are pushed to
//! an [`ImageSink`]. Frames that cannot be mapped leave the sink untouched so
//! the previous image stays on screen.

use crate::catalog::SelectableSource;
use crate::colormap::{ColorMapper, RangeMode};
use crate::errors::MappingError;
use crate::frame::{ColorImage, DisparityFrame};
use tracing::{debug, info, warn};

/// Display collaborator receiving rendered images
pub trait ImageSink {
    /// Replace the displayed image
    fn show(&mut self, image: ColorImage);
    /// Remove the displayed image
    fn clear(&mut self);
}

/// What happened to a delivered frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// A new image was handed to the sink
    Shown,
    /// The frame was dropped; the sink keeps its previous image
    Skipped(MappingError),
}

/// Running totals for status display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub shown: u64,
    pub skipped: u64,
}

pub struct DisparityView<S: ImageSink> {
    mapper: ColorMapper,
    sink: S,
    selected: Option<SelectableSource>,
    stats: FrameStats,
}

impl<S: ImageSink> DisparityView<S> {
    pub fn new(sink: S, range: RangeMode) -> Self {
        Self {
            mapper: ColorMapper::new(range),
            sink,
            selected: None,
            stats: FrameStats::default(),
        }
    }

    /// Switch to another source (or none); the displayed image is reset.
    ///
    /// The caller is responsible for re-subscribing to the returned source.
    pub fn select(&mut self, source: Option<SelectableSource>) -> Option<&SelectableSource> {
        self.sink.clear();
        self.stats = FrameStats::default();
        match &source {
            Some(s) => info!(topic = %s.topic_path, transport = %s.transport, "Selected source"),
            None => info!("Cleared source selection"),
        }
        self.selected = source;
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&SelectableSource> {
        self.selected.as_ref()
    }

    pub fn set_range(&mut self, range: RangeMode) {
        self.mapper.range = range;
    }

    pub fn range(&self) -> RangeMode {
        self.mapper.range
    }

    /// Map a delivered frame and show it
    pub fn handle_frame(&mut self, frame: &DisparityFrame) -> FrameOutcome {
        match self.mapper.map(frame) {
            Ok(image) => {
                self.sink.show(image);
                self.stats.shown += 1;
                FrameOutcome::Shown
            }
            Err(err) => {
                if err.is_degenerate() {
                    debug!(%err, "Skipping frame without disparity data");
                } else {
                    warn!(%err, "Skipping frame");
                }
                self.stats.skipped += 1;
                FrameOutcome::Skipped(err)
            }
        }
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl ImageSink for Option<ColorImage> {
    fn show(&mut self, image: ColorImage) {
        *self = Some(image);
    }

    fn clear(&mut self) {
        *self = None;
    }
}
