//! Open/closed state of the FAQ accordion.
//!
//! DESIGN
//! ======
//! Items are addressed by their index in `content::FAQ_ENTRIES`. Each item
//! opens and closes on its own; opening one never collapses another.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use std::collections::BTreeSet;

/// Class placed on an answer while it is expanded.
pub const ACTIVE_CLASS: &str = "active";

/// Set of currently expanded FAQ items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    open: BTreeSet<usize>,
}

impl FaqState {
    /// Flip item `index` and return whether it is now open.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.open.remove(&index) {
            false
        } else {
            self.open.insert(index);
            true
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Number of expanded items.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}
