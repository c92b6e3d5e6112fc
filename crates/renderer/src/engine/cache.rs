// SPDX-License-Identifier: MIT

//!
//! Memoized layouts
//!

use crate::DocumentRender;
use lane_timeline_core::{InputDocument, ZoomLevel};
use log::trace;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::rc::Rc;

/// A fingerprint of a document's contents.  Identical documents always have
/// the same fingerprint.
pub fn document_fingerprint(document: &InputDocument) -> u64 {
    let mut hasher = DefaultHasher::new();
    document.hash(&mut hasher);
    hasher.finish()
}

/// Layouts keyed by (document fingerprint, zoom level).  Laying out is a pure
/// function of those two (and the render config), so a hit returns exactly
/// what recomputing would.  The owner decides when to invalidate.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: HashMap<(u64, ZoomLevel), Rc<DocumentRender>>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached layout, or compute and cache it
    pub fn get_or_insert_with<F>(&mut self, fingerprint: u64, zoom: ZoomLevel, compute: F) -> Rc<DocumentRender>
    where
        F: FnOnce() -> DocumentRender,
    {
        self.entries
            .entry((fingerprint, zoom))
            .or_insert_with(|| {
                trace!("layout cache miss for zoom {zoom}");
                Rc::new(compute())
            })
            .clone()
    }

    /// Drop every cached layout of a document other than the one with this
    /// fingerprint
    pub fn retain_fingerprint(&mut self, fingerprint: u64) {
        self.entries.retain(|(cached, _), _| *cached == fingerprint);
    }

    /// Drop every cached layout
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lane_timeline_macros::zoom;

    #[test]
    fn fingerprint_is_content_based() {
        let json = r#"{"categoryColours": [], "timelines": [{"timelineId": "t", "timeline": []}]}"#;
        let a = InputDocument::from_json(json).unwrap();
        let b = InputDocument::from_json(json).unwrap();
        assert_eq!(document_fingerprint(&a), document_fingerprint(&b));

        let other = InputDocument::from_json(r#"{"categoryColours": [], "timelines": []}"#).unwrap();
        assert_ne!(document_fingerprint(&a), document_fingerprint(&other));
    }

    #[test]
    fn memoizes_per_zoom() {
        let mut cache = LayoutCache::new();
        let mut computed = 0;

        let first = cache.get_or_insert_with(1, zoom!(30), || {
            computed += 1;
            DocumentRender::no_data(None)
        });
        let second = cache.get_or_insert_with(1, zoom!(30), || {
            computed += 1;
            DocumentRender::no_data(None)
        });
        assert_eq!(computed, 1);
        assert!(Rc::ptr_eq(&first, &second));

        cache.get_or_insert_with(1, zoom!(60), || {
            computed += 1;
            DocumentRender::no_data(None)
        });
        assert_eq!(computed, 2);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn keeps_only_the_current_document() {
        let mut cache = LayoutCache::new();
        for fingerprint in [1, 2] {
            for zoom in [zoom!(15), zoom!(30)] {
                cache.get_or_insert_with(fingerprint, zoom, || DocumentRender::no_data(None));
            }
        }
        assert_eq!(cache.len(), 4);

        cache.retain_fingerprint(2);
        assert_eq!(cache.len(), 2);

        // Still cached
        let mut computed = false;
        cache.get_or_insert_with(2, zoom!(15), || {
            computed = true;
            DocumentRender::no_data(None)
        });
        assert!(!computed);
    }
}
