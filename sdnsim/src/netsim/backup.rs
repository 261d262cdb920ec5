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

//! # Backup Path Registry
//!
//! Alternative paths for every (source, destination) pair, kept in reserve to replace the
//! installed path when one of its links fails. Each backup path is used at most once.

use crate::netsim::{NodeId, Path};

use std::collections::{HashMap, VecDeque};

/// Queues of backup paths, keyed by (source, destination).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackupPaths {
    paths: HashMap<(NodeId, NodeId), VecDeque<Path>>,
}

impl BackupPaths {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the backup paths of a pair. If `paths` is empty, the entry is removed.
    pub(crate) fn set(&mut self, src: NodeId, dst: NodeId, paths: Vec<Path>) {
        if paths.is_empty() {
            self.paths.remove(&(src, dst));
        } else {
            self.paths.insert((src, dst), paths.into());
        }
    }

    /// Remove all backup paths of a pair.
    pub(crate) fn clear(&mut self, src: NodeId, dst: NodeId) {
        self.paths.remove(&(src, dst));
    }

    /// Take the first queued backup path of a pair.
    pub(crate) fn pop_front(&mut self, src: NodeId, dst: NodeId) -> Option<Path> {
        self.paths.get_mut(&(src, dst)).and_then(|q| q.pop_front())
    }

    /// Returns the queued backup paths of a pair, in the order in which they will be used.
    pub fn get(&self, src: NodeId, dst: NodeId) -> Option<&VecDeque<Path>> {
        self.paths.get(&(src, dst))
    }

    /// Number of backup paths queued for a pair
    pub fn len(&self, src: NodeId, dst: NodeId) -> usize {
        self.paths.get(&(src, dst)).map(|q| q.len()).unwrap_or(0)
    }

    /// Returns true if no backup path is queued for the pair
    pub fn is_empty(&self, src: NodeId, dst: NodeId) -> bool {
        self.len(src, dst) == 0
    }
}
