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

//! Module for defining the reports of the controller

use crate::netsim::{NodeId, Path};

/// Result of injecting a flow into the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectionResult {
    /// The flow was routed along the installed path, and the utilization was accounted.
    Routed(Path),
    /// The destination was marked as unreachable by the last path computation or by the failure
    /// handler.
    NoPath,
    /// The pair was never processed by the path computation.
    NoRouteComputed,
}

impl InjectionResult {
    /// Returns the path if the flow was routed.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Routed(p) => Some(p),
            _ => None,
        }
    }

    /// Returns true if the flow was routed.
    pub fn is_routed(&self) -> bool {
        matches!(self, Self::Routed(_))
    }
}

/// Action taken by the failure handler for a single affected flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailoverEvent {
    /// The flow was moved onto a backup path.
    Rerouted {
        /// Source of the flow
        src: NodeId,
        /// Destination of the flow
        dst: NodeId,
        /// Newly installed path
        path: Path,
    },
    /// A queued backup path did no longer exist in the topology, and was dropped.
    DiscardedStaleBackup {
        /// Source of the flow
        src: NodeId,
        /// Destination of the flow
        dst: NodeId,
        /// Dropped backup path
        path: Path,
    },
    /// No backup path was left, and the destination is now unreachable.
    Unreachable {
        /// Source of the flow
        src: NodeId,
        /// Destination of the flow
        dst: NodeId,
    },
}

impl FailoverEvent {
    /// Returns the (source, destination) pair this event talks about.
    pub fn flow(&self) -> (NodeId, NodeId) {
        match self {
            Self::Rerouted { src, dst, .. }
            | Self::DiscardedStaleBackup { src, dst, .. }
            | Self::Unreachable { src, dst } => (*src, *dst),
        }
    }
}
