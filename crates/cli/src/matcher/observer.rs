// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Observation points of a search.

use super::Anchor;

/// Receives progress events while a landscape is scanned.
///
/// Every method has an empty default so observers only implement the events
/// they care about.
pub trait SearchObserver {
    /// A candidate position for the first pattern line was found.
    fn anchor_found(&mut self, _anchor: Anchor) {}

    /// A full bug was confirmed at `anchor`; `total` counts it.
    fn bug_found(&mut self, _anchor: Anchor, _total: usize) {}
}

/// Emits `tracing` debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn anchor_found(&mut self, anchor: Anchor) {
        tracing::debug!(line = anchor.line, column = anchor.column, "found possible bug");
    }

    fn bug_found(&mut self, anchor: Anchor, total: usize) {
        tracing::debug!(line = anchor.line, column = anchor.column, total, "bug found");
    }
}

/// Forwards every event to both observers, left first.
impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn anchor_found(&mut self, anchor: Anchor) {
        self.0.anchor_found(anchor);
        self.1.anchor_found(anchor);
    }

    fn bug_found(&mut self, anchor: Anchor, total: usize) {
        self.0.bug_found(anchor, total);
        self.1.bug_found(anchor, total);
    }
}

/// Records every event, in order. Useful to inspect a search.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub anchors: Vec<Anchor>,
    pub bugs: Vec<Anchor>,
}

impl SearchObserver for RecordingObserver {
    fn anchor_found(&mut self, anchor: Anchor) {
        self.anchors.push(anchor);
    }

    fn bug_found(&mut self, anchor: Anchor, _total: usize) {
        self.bugs.push(anchor);
    }
}
