// SPDX-License-Identifier: GPL-3.0-only

//! Source descriptors and the (topic, transport) pairs derived from them

use crate::constants::{DISPARITY_MESSAGE_TYPE, LABEL_SEPARATOR, TOPIC_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// A published topic as reported by the source listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Hierarchical topic name, e.g. "/stereo/disparity"
    pub name: String,
    /// Declared message type, e.g. "stereo_msgs/DisparityImage"
    #[serde(rename = "type")]
    pub declared_type: String,
}

impl SourceDescriptor {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// How a selected topic is to be consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Transport {
    /// Subscribe to the topic as named
    #[default]
    Default,
    Raw,
    Compressed,
    CompressedDepth,
    Theora,
}

impl Transport {
    /// Transports recognised as a trailing topic segment
    pub const SUFFIXES: [Transport; 4] = [
        Transport::Raw,
        Transport::Compressed,
        Transport::CompressedDepth,
        Transport::Theora,
    ];

    /// Parse a trailing topic segment; "default" is not a suffix
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::SUFFIXES.into_iter().find(|t| t.as_str() == suffix)
    }

    /// Tag string ("default" for the canonical transport)
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Default => "default",
            Transport::Raw => "raw",
            Transport::Compressed => "compressed",
            Transport::CompressedDepth => "compressedDepth",
            Transport::Theora => "theora",
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable (topic, transport) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectableSource {
    pub topic_path: String,
    pub transport: Transport,
}

impl SelectableSource {
    pub fn new(topic_path: impl Into<String>, transport: Transport) -> Self {
        Self {
            topic_path: topic_path.into(),
            transport,
        }
    }

    /// Flat label: the topic path, followed by a space and the transport
    /// unless the transport is the default one.
    pub fn label(&self) -> String {
        match self.transport {
            Transport::Default => self.topic_path.clone(),
            transport => format!("{}{}{}", self.topic_path, LABEL_SEPARATOR, transport),
        }
    }

    /// Label as shown to the user, with the transport rejoined by '/'
    pub fn display_label(&self) -> String {
        self.label().replace(LABEL_SEPARATOR, "/")
    }

    /// Inverse of [`label`](Self::label).
    ///
    /// Returns None for an empty topic, an unknown transport, or a label with
    /// more than one separator.
    pub fn parse_label(label: &str) -> Option<Self> {
        let mut parts = label.split(LABEL_SEPARATOR);
        let topic = parts.next().filter(|t| !t.is_empty())?;
        let transport = match parts.next() {
            None => Transport::Default,
            Some(suffix) => Transport::from_suffix(suffix)?,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(topic, transport))
    }
}

impl std::fmt::Display for SelectableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Selects sources of the wanted message types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCatalog {
    wanted_types: BTreeSet<String>,
}

impl SourceCatalog {
    pub fn new<I, S>(wanted_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            wanted_types: wanted_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Catalog accepting only disparity images
    pub fn disparity() -> Self {
        Self::new([DISPARITY_MESSAGE_TYPE])
    }

    pub fn wanted_types(&self) -> &BTreeSet<String> {
        &self.wanted_types
    }

    pub fn filter(&self, all: &[SourceDescriptor]) -> BTreeSet<SelectableSource> {
        filter_sources(all, &self.wanted_types)
    }
}

impl Default for SourceCatalog {
    fn default() -> Self {
        Self::disparity()
    }
}

/// Selectable sources among `all` whose declared type is wanted.
///
/// Every match yields a default-transport entry for its full name. A name
/// whose last segment is a known transport also yields an entry for the
/// parent path with that transport.
pub fn filter_sources(
    all: &[SourceDescriptor],
    wanted_types: &BTreeSet<String>,
) -> BTreeSet<SelectableSource> {
    let mut selectable = BTreeSet::new();

    for descriptor in all
        .iter()
        .filter(|d| wanted_types.contains(&d.declared_type))
    {
        selectable.insert(SelectableSource::new(&descriptor.name, Transport::Default));

        if let Some((path, suffix)) = descriptor.name.rsplit_once(TOPIC_SEPARATOR)
            && !path.is_empty()
            && let Some(transport) = Transport::from_suffix(suffix)
        {
            selectable.insert(SelectableSource::new(path, transport));
        }
    }

    debug!(
        available = all.len(),
        selectable = selectable.len(),
        "Filtered disparity sources"
    );

    selectable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wanted() -> BTreeSet<String> {
        BTreeSet::from([DISPARITY_MESSAGE_TYPE.to_string()])
    }

    #[test]
    fn test_plain_topic_gets_default_entry() {
        let all = [SourceDescriptor::new("/stereo/disparity", DISPARITY_MESSAGE_TYPE)];
        let sources = filter_sources(&all, &wanted());
        assert_eq!(
            sources.into_iter().collect::<Vec<_>>(),
            vec![SelectableSource::new("/stereo/disparity", Transport::Default)]
        );
    }

    #[test]
    fn test_transport_suffix_adds_entry() {
        let all = [SourceDescriptor::new(
            "/stereo/disparity/compressed",
            DISPARITY_MESSAGE_TYPE,
        )];
        let sources = filter_sources(&all, &wanted());
        assert_eq!(sources.len(), 2);
        assert!(sources.contains(&SelectableSource::new(
            "/stereo/disparity/compressed",
            Transport::Default
        )));
        assert!(sources.contains(&SelectableSource::new(
            "/stereo/disparity",
            Transport::Compressed
        )));
    }

    #[test]
    fn test_other_types_ignored() {
        let all = [
            SourceDescriptor::new("/camera/image_raw", "sensor_msgs/Image"),
            SourceDescriptor::new("/camera/image/compressed", "sensor_msgs/CompressedImage"),
        ];
        assert!(filter_sources(&all, &wanted()).is_empty());
        assert!(filter_sources(&[], &wanted()).is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let all = [
            SourceDescriptor::new("/stereo/disparity", DISPARITY_MESSAGE_TYPE),
            SourceDescriptor::new("/stereo/disparity", DISPARITY_MESSAGE_TYPE),
        ];
        assert_eq!(filter_sources(&all, &wanted()).len(), 1);
    }

    #[test]
    fn test_root_level_suffix_has_no_parent_entry() {
        let all = [SourceDescriptor::new("/compressed", DISPARITY_MESSAGE_TYPE)];
        assert_eq!(filter_sources(&all, &wanted()).len(), 1);
    }

    #[test]
    fn test_label_round_trip() {
        for source in [
            SelectableSource::new("/stereo/disparity", Transport::Default),
            SelectableSource::new("/stereo/disparity", Transport::CompressedDepth),
        ] {
            assert_eq!(SelectableSource::parse_label(&source.label()), Some(source));
        }
    }

    #[test]
    fn test_label_forms() {
        let source = SelectableSource::new("/stereo/disparity", Transport::Theora);
        assert_eq!(source.label(), "/stereo/disparity theora");
        assert_eq!(source.display_label(), "/stereo/disparity/theora");
    }

    #[test]
    fn test_parse_label_rejects_garbage() {
        assert_eq!(SelectableSource::parse_label(""), None);
        assert_eq!(SelectableSource::parse_label("/a/b bogus"), None);
        assert_eq!(SelectableSource::parse_label("/a raw extra"), None);
    }

    #[test]
    fn test_descriptor_json() {
        let json = r#"[{"name": "/stereo/disparity", "type": "stereo_msgs/DisparityImage"}]"#;
        let parsed: Vec<SourceDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            vec![SourceDescriptor::new("/stereo/disparity", DISPARITY_MESSAGE_TYPE)]
        );
    }
}
