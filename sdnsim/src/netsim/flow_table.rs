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

//! # Flow Table
//!
//! Every node owns a table mapping the destination to the installed forwarding path. An entry is
//! either a path (`Some`) or marked as unreachable (`None`). A pair for which no entry exists was
//! never processed by the path computation.

use crate::netsim::{NodeId, Path};

use itertools::Itertools;
use std::collections::BTreeMap;

/// Flow tables of all nodes in the network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowTable {
    tables: BTreeMap<NodeId, BTreeMap<NodeId, Option<Path>>>,
}

impl FlowTable {
    /// Create an empty flow table
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure that the node owns a (possibly empty) table.
    pub(crate) fn register_node(&mut self, node: NodeId) {
        self.tables.entry(node).or_insert_with(BTreeMap::new);
    }

    /// Install the entry for `src -> dst`, overwriting any previous entry.
    pub(crate) fn install(&mut self, src: NodeId, dst: NodeId, path: Option<Path>) {
        self.tables.entry(src).or_insert_with(BTreeMap::new).insert(dst, path);
    }

    /// Returns the entry for `src -> dst`. The outer `Option` is `None` if the pair was never
    /// computed, the inner one is `None` if the destination is unreachable.
    pub fn get(&self, src: NodeId, dst: NodeId) -> Option<&Option<Path>> {
        self.tables.get(&src).and_then(|t| t.get(&dst))
    }

    /// Returns the table owned by a single node.
    pub fn table_of(&self, node: NodeId) -> Option<&BTreeMap<NodeId, Option<Path>>> {
        self.tables.get(&node)
    }

    /// Iterate over all entries, ordered by source and then by destination.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId, &Option<Path>)> {
        self.tables
            .iter()
            .flat_map(|(src, t)| t.iter().map(move |(dst, path)| (*src, *dst, path)))
    }

    /// Returns all pairs whose installed path traverses the link `u -- v` in either direction.
    pub fn flows_using_link(&self, u: NodeId, v: NodeId) -> Vec<(NodeId, NodeId)> {
        self.iter()
            .filter(|(_, _, path)| path.as_ref().map(|p| path_uses_link(p, u, v)).unwrap_or(false))
            .map(|(src, dst, _)| (src, dst))
            .collect()
    }
}

/// Returns true if the path traverses the link `u -- v` in either direction.
pub fn path_uses_link(path: &[NodeId], u: NodeId, v: NodeId) -> bool {
    path.iter().tuple_windows().any(|(a, b)| (*a == u && *b == v) || (*a == v && *b == u))
}
