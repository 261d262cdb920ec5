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

//! Module containing all type definitions

use petgraph::prelude::*;
use petgraph::stable_graph::StableGraph;
use std::fmt;
use thiserror::Error;

type IndexType = u32;
/// Node Identification (and index into the graph)
pub type NodeId = NodeIndex<IndexType>;
/// Routing cost of a link
pub type LinkWeight = f32;
/// Number of traffic units a link can carry before it is saturated
pub type LinkCapacity = f32;
/// Forwarding path, starting at the source and ending at the destination
pub type Path = Vec<NodeId>;
/// Physical topology. Nodes carry their name, edges carry the link attributes. We use a
/// `StableGraph`, such that removing links never invalidates any `NodeId`.
pub type Topology = StableGraph<String, Link, Undirected, IndexType>;

/// Attributes of an undirected link. Both weight and capacity apply to the pair, while the
/// utilization is tracked separately for each direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Routing cost, used for critical traffic
    pub weight: LinkWeight,
    /// Capacity in traffic units
    pub capacity: LinkCapacity,
}

impl Link {
    /// Create a new link, checking that the weight is non-negative and the capacity is positive.
    pub fn new(weight: LinkWeight, capacity: LinkCapacity) -> Result<Self, NetworkError> {
        if weight.is_nan() || weight < 0.0 {
            return Err(NetworkError::InvalidLinkWeight(weight));
        }
        if capacity.is_nan() || capacity <= 0.0 {
            return Err(NetworkError::InvalidLinkCapacity(capacity));
        }
        Ok(Self { weight, capacity })
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w={} c={}", self.weight, self.capacity)
    }
}

/// Network Errors
#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    /// Node is not present in the topology
    #[error("Node was not found in topology: {0:?}")]
    NodeNotFound(NodeId),
    /// Node name is not present in the topology
    #[error("Node name was not found in topology: {0}")]
    NodeNameNotFound(String),
    /// A link cannot connect a node with itself
    #[error("Cannot create a link from {0:?} to itself")]
    SelfLoop(NodeId),
    /// Link weights must be non-negative numbers
    #[error("Invalid link weight: {0}")]
    InvalidLinkWeight(LinkWeight),
    /// Link capacities must be positive numbers
    #[error("Invalid link capacity: {0}")]
    InvalidLinkCapacity(LinkCapacity),
}
