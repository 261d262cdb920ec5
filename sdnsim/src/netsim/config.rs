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

//! # Controller configuration
//!
//! Settings which change how the controller behaves, independent of the topology.

use crate::netsim::LinkCapacity;

/// Capacity reported for counters whose link no longer exists
pub const DEFAULT_FALLBACK_CAPACITY: LinkCapacity = 100.0;
/// Topologies larger than this trigger a warning when enumerating all paths
pub const DEFAULT_PATH_ENUMERATION_WARN_NODES: usize = 8;

/// Configuration of the [`Network`](crate::netsim::Network).
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    /// Check every backup path against the current topology before installing it. Stale backups
    /// are dropped, and the next one is tried.
    ///
    /// If this is disabled, the first queued backup is installed without any check. Since the
    /// backups are only computed by [`Network::compute_all_paths`](crate::netsim::Network), a
    /// second link failure may then install a path over a link that no longer exists. This is a
    /// known bug, kept only to reproduce the behavior of unchecked failover.
    pub validate_backups: bool,
    /// Capacity used in the utilization report if the link of a counter no longer exists.
    pub fallback_capacity: LinkCapacity,
    /// Number of nodes above which the exhaustive path enumeration logs a warning.
    pub path_enumeration_warn_nodes: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            validate_backups: true,
            fallback_capacity: DEFAULT_FALLBACK_CAPACITY,
            path_enumeration_warn_nodes: DEFAULT_PATH_ENUMERATION_WARN_NODES,
        }
    }
}

impl NetworkConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the validation of backup paths
    pub fn validate_backups(mut self, validate: bool) -> Self {
        self.validate_backups = validate;
        self
    }

    /// Set the capacity reported for counters without a link
    pub fn fallback_capacity(mut self, capacity: LinkCapacity) -> Self {
        self.fallback_capacity = capacity;
        self
    }
}
