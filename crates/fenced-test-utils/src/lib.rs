//! Test utilities for fenced buffers.
//!
//! - [`ReleaseLog`] / [`DropProbe`]: elements that record when they are
//!   dropped, for observing when (and how often) a buffer releases its
//!   contents.
//! - [`fatal_child`]: run one test in a child process so that an abort can
//!   be observed from the parent.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fatal_child;

use std::sync::{Arc, Mutex};

/// Shared, thread-safe log of [`DropProbe`] tags in drop order.
#[derive(Clone, Debug, Default)]
pub struct ReleaseLog {
    events: Arc<Mutex<Vec<u32>>>,
}

impl ReleaseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe that records `tag` in this log when dropped.
    pub fn probe(&self, tag: u32) -> DropProbe {
        DropProbe {
            tag,
            log: self.clone(),
        }
    }

    /// Every recorded tag, in drop order.
    pub fn events(&self) -> Vec<u32> {
        self.events.lock().unwrap().clone()
    }

    /// How many probes with `tag` have been dropped.
    pub fn count(&self, tag: u32) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|&&t| t == tag)
            .count()
    }

    /// Tags in drop order with consecutive repeats collapsed, i.e. the order
    /// in which whole buffers of probes were released.
    pub fn release_order(&self) -> Vec<u32> {
        let mut order = self.events();
        order.dedup();
        order
    }

    fn record(&self, tag: u32) {
        self.events.lock().unwrap().push(tag);
    }
}

/// An element that logs its tag on drop.
#[derive(Debug)]
pub struct DropProbe {
    tag: u32,
    log: ReleaseLog,
}

impl DropProbe {
    pub fn tag(&self) -> u32 {
        self.tag
    }
}

impl Drop for DropProbe {
    fn drop(&mut self) {
        self.log.record(self.tag);
    }
}
