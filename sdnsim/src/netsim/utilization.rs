// SdnSim: Simulating a Software-Defined Network Controller
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Utilization Tracker
//!
//! Counts the traffic units that were routed over every directed link. Counters are created along
//! with the link, and removed along with it.

use crate::netsim::NodeId;

use itertools::Itertools;
use std::collections::btree_map::Iter;
use std::collections::BTreeMap;

/// Per-directed-link counters of in-flight traffic units. The counters are kept ordered by their
/// key, such that reports are deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtilizationTracker {
    counters: BTreeMap<(NodeId, NodeId), usize>,
}

impl UtilizationTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset (or create) both directed counters of the link `u -- v` to 0.
    pub(crate) fn init_link(&mut self, u: NodeId, v: NodeId) {
        self.counters.insert((u, v), 0);
        self.counters.insert((v, u), 0);
    }

    /// Remove both directed counters of the link `u -- v`.
    pub(crate) fn remove_link(&mut self, u: NodeId, v: NodeId) {
        self.counters.remove(&(u, v));
        self.counters.remove(&(v, u));
    }

    /// Account one traffic unit along the path. Both directions of every hop are incremented by
    /// one. Missing counters are created.
    pub(crate) fn account_path(&mut self, path: &[NodeId]) {
        for (a, b) in path.iter().tuple_windows() {
            *self.counters.entry((*a, *b)).or_insert(0) += 1;
            *self.counters.entry((*b, *a)).or_insert(0) += 1;
        }
    }

    /// Returns the counter of the directed link `u -> v`, or `None` if it is not tracked.
    pub fn get(&self, u: NodeId, v: NodeId) -> Option<usize> {
        self.counters.get(&(u, v)).copied()
    }

    /// Total utilization of a path, which is the sum of all directed counters along the path.
    /// Counters which are not tracked count as 0.
    pub fn path_utilization(&self, path: &[NodeId]) -> usize {
        path.iter().tuple_windows().map(|(a, b)| self.get(*a, *b).unwrap_or(0)).sum()
    }

    /// Iterate over all tracked directed links, ordered by `(source, target)`.
    pub fn iter(&self) -> Iter<'_, (NodeId, NodeId), usize> {
        self.counters.iter()
    }

    /// Number of tracked directed links
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Returns true if no link is tracked
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
