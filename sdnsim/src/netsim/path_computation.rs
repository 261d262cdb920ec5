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

//! # Path Computation Engine
//!
//! Functions to enumerate all simple paths between two nodes, and to select the one to install
//! based on the traffic class. Critical traffic takes the path with the smallest total weight,
//! while all other traffic is balanced by taking the path with the smallest total utilization.
//!
//! The enumeration is exhaustive, and its cost grows exponentially with the number of nodes. It is
//! only meant for small, simulated topologies.

use crate::netsim::{LinkWeight, NodeId, Path, Topology, TrafficClass, UtilizationTracker};

use itertools::Itertools;
use petgraph::algo;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Enumerate all simple paths from `src` to `dst`. The order is determined by the depth-first
/// search over the topology, and is fixed for a fixed topology. If `src == dst`, or if there
/// exists no path, the result is empty.
pub fn all_simple_paths(topology: &Topology, src: NodeId, dst: NodeId) -> Vec<Path> {
    if src == dst || !topology.contains_node(src) || !topology.contains_node(dst) {
        return Vec::new();
    }
    algo::all_simple_paths::<Path, _>(topology, src, dst, 0, None).collect()
}

/// Total weight of a path. Returns `None` if two consecutive nodes are not connected.
pub fn path_weight(topology: &Topology, path: &[NodeId]) -> Option<LinkWeight> {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| topology.find_edge(*a, *b).and_then(|e| topology.edge_weight(e)))
        .map(|link| link.map(|l| l.weight))
        .sum()
}

/// Returns true if the path is a simple path in the current topology, i.e., all nodes exist, no
/// node is visited twice, and every two consecutive nodes are connected by a link.
pub fn is_valid_path(topology: &Topology, path: &[NodeId]) -> bool {
    let mut visited: HashSet<NodeId> = HashSet::with_capacity(path.len());
    path.iter().all(|n| topology.contains_node(*n) && visited.insert(*n))
        && path.iter().tuple_windows().all(|(a, b)| topology.find_edge(*a, *b).is_some())
}

/// Select the path to install out of `candidates`, and return its index. Critical traffic takes
/// the path with the smallest weight, every other class the path with the smallest utilization.
/// Ties are broken by taking the first candidate. Returns `None` if there are no candidates.
pub fn select_path(
    candidates: &[Path],
    class: TrafficClass,
    topology: &Topology,
    utilization: &UtilizationTracker,
) -> Option<usize> {
    match class {
        TrafficClass::Critical => candidates
            .iter()
            .map(|p| path_weight(topology, p).unwrap_or(LinkWeight::INFINITY))
            .enumerate()
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|(i, _)| i),
        TrafficClass::Important | TrafficClass::Default => candidates
            .iter()
            .map(|p| utilization.path_utilization(p))
            .enumerate()
            .min_by_key(|(_, u)| *u)
            .map(|(i, _)| i),
    }
}
