// SPDX-License-Identifier: GPL-3.0-only

//! Topic selection list
//!
//! Backing model for a drop-down of selectable sources. The list always
//! starts with an empty entry meaning "nothing selected", and entries are
//! ordered by their flat label.

use super::source::SelectableSource;
use std::collections::BTreeSet;

/// One row of the selection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Text shown to the user
    pub text: String,
    /// None for the empty entry
    pub source: Option<SelectableSource>,
}

impl MenuEntry {
    fn empty() -> Self {
        Self {
            text: String::new(),
            source: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicMenu {
    entries: Vec<MenuEntry>,
    current: usize,
}

impl Default for TopicMenu {
    fn default() -> Self {
        Self {
            entries: vec![MenuEntry::empty()],
            current: 0,
        }
    }
}

impl TopicMenu {
    pub fn new(sources: &BTreeSet<SelectableSource>) -> Self {
        let mut menu = Self::default();
        menu.rebuild(sources);
        menu
    }

    fn rebuild(&mut self, sources: &BTreeSet<SelectableSource>) {
        let mut labelled: Vec<(String, &SelectableSource)> =
            sources.iter().map(|s| (s.label(), s)).collect();
        labelled.sort_by(|a, b| a.0.cmp(&b.0));

        self.entries = std::iter::once(MenuEntry::empty())
            .chain(labelled.into_iter().map(|(_, source)| MenuEntry {
                text: source.display_label(),
                source: Some(source.clone()),
            }))
            .collect();
        self.current = 0;
    }

    /// Replace the entries, keeping the current selection when it survives
    pub fn refresh(&mut self, sources: &BTreeSet<SelectableSource>) {
        let previous = self.current().cloned();
        self.rebuild(sources);
        if let Some(previous) = previous {
            self.select_source(&previous);
        }
    }

    /// Select the first entry whose text matches, falling back to the empty
    /// entry. Returns the selected index.
    pub fn select(&mut self, text: &str) -> usize {
        self.current = self
            .entries
            .iter()
            .position(|e| e.text == text)
            .unwrap_or(0);
        self.current
    }

    /// Select an entry by its source, falling back to the empty entry
    pub fn select_source(&mut self, source: &SelectableSource) -> usize {
        self.current = self
            .entries
            .iter()
            .position(|e| e.source.as_ref() == Some(source))
            .unwrap_or(0);
        self.current
    }

    /// Select by index; out-of-range indices select the empty entry
    pub fn select_index(&mut self, index: usize) -> Option<&SelectableSource> {
        self.current = if index < self.entries.len() { index } else { 0 };
        self.current()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&SelectableSource> {
        self.source_at(self.current)
    }

    pub fn current_text(&self) -> &str {
        &self.entries[self.current].text
    }

    pub fn source_at(&self, index: usize) -> Option<&SelectableSource> {
        self.entries.get(index)?.source.as_ref()
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Number of entries including the empty one
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when only the empty entry is present
    pub fn is_empty(&self) -> bool {
        self.entries.len() == 1
    }
}
