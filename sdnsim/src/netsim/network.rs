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

//! # Top-level Network module
//!
//! This module represents the controller: it owns the topology, computes the forwarding paths,
//! accounts the utilization of injected traffic, and reroutes flows when a link fails.

use crate::netsim::backup::BackupPaths;
use crate::netsim::config::NetworkConfig;
use crate::netsim::event::{FailoverEvent, InjectionResult};
use crate::netsim::flow_table::FlowTable;
use crate::netsim::path_computation::{all_simple_paths, is_valid_path, select_path};
use crate::netsim::traffic::TrafficDescriptor;
use crate::netsim::utilization::UtilizationTracker;
use crate::netsim::{Link, LinkCapacity, LinkWeight, NetworkError, NodeId, Path, Topology};

use log::*;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use std::collections::BTreeMap;

/// One line of the utilization report, describing a single directed link.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilizationReportEntry {
    /// Source of the directed link
    pub source: NodeId,
    /// Target of the directed link
    pub target: NodeId,
    /// Number of traffic units routed over the directed link
    pub usage: usize,
    /// Capacity of the link
    pub capacity: LinkCapacity,
    /// Usage relative to the capacity, in percent
    pub percentage: f32,
}

/// # Network struct
/// The struct contains the entire state of the controller: The topology (nodes and undirected
/// links), the flow table of every node, the traffic descriptors of every injected flow, the
/// utilization counters of every directed link, and the backup paths of every pair.
///
/// ## Path computation
///
/// Paths are only computed by calling [`Network::compute_all_paths`]. This function enumerates
/// all simple paths for every ordered pair of distinct nodes, and selects one of them based on
/// the class of the traffic injected for this pair (see
/// [`select_path`](crate::netsim::path_computation::select_path)). All other paths are kept as
/// backups. Neither changing the topology, nor injecting traffic triggers a new computation.
///
/// ## Link failures
///
/// Removing a link triggers the failure handler. Every flow whose installed path traverses the
/// removed link is moved onto its first backup path, and the utilization along the new path is
/// accounted as if the traffic resumed. If no backup is left, the destination is marked as
/// unreachable. Unaffected flows are left untouched, and the backups are never replenished.
///
/// All operations run to completion. If the network is shared between multiple threads, it must
/// be wrapped in a lock, such that the utilization counters are never updated concurrently.
#[derive(Debug, Clone, Default)]
pub struct Network {
    topology: Topology,
    flow_table: FlowTable,
    traffic: BTreeMap<(NodeId, NodeId), TrafficDescriptor>,
    utilization: UtilizationTracker,
    backups: BackupPaths,
    config: NetworkConfig,
}

impl Network {
    /// Generate an empty Network with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate an empty Network with the given configuration
    pub fn with_config(config: NetworkConfig) -> Self {
        Self { config, ..Default::default() }
    }

    /// Returns the current configuration
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Replace the configuration. The new configuration applies to all subsequent operations.
    pub fn set_config(&mut self, config: NetworkConfig) {
        self.config = config;
    }

    /// Add a new node to the topology, and return its ID. If a node with the same name already
    /// exists, nothing is changed, and the ID of the existing node is returned.
    pub fn add_node<S: Into<String>>(&mut self, name: S) -> NodeId {
        let name = name.into();
        if let Ok(id) = self.get_node_id(&name) {
            return id;
        }
        let id = self.topology.add_node(name);
        self.flow_table.register_node(id);
        info!("Added node {}", self.topology[id]);
        id
    }

    /// Add multiple nodes at once. See [`Network::add_node`].
    pub fn add_nodes<I, S>(&mut self, names: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(|n| self.add_node(n)).collect()
    }

    /// Create (or replace) the undirected link between `u` and `v`. The utilization counters of
    /// both directions are reset to 0. The forwarding paths are not recomputed.
    ///
    /// ```rust
    /// # use sdnsim::netsim::Network;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut net = Network::new();
    /// let a = net.add_node("A");
    /// let b = net.add_node("B");
    /// net.add_link(a, b, 1.0, 10.0)?;
    /// assert_eq!(net.get_utilization().get(a, b), Some(0));
    /// assert!(net.add_link(a, a, 1.0, 10.0).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_link(
        &mut self,
        u: NodeId,
        v: NodeId,
        weight: LinkWeight,
        capacity: LinkCapacity,
    ) -> Result<(), NetworkError> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(NetworkError::SelfLoop(u));
        }
        let link = Link::new(weight, capacity)?;
        self.topology.update_edge(u, v, link);
        self.utilization.init_link(u, v);
        info!(
            "Added link {} -- {} (weight: {}, capacity: {})",
            self.topology[u], self.topology[v], weight, capacity
        );
        Ok(())
    }

    /// Remove the link between `u` and `v`, along with both utilization counters, and let the
    /// failure handler reroute all flows that used the link. If the link does not exist, nothing
    /// happens. Returns the actions taken by the failure handler.
    pub fn remove_link(&mut self, u: NodeId, v: NodeId) -> Vec<FailoverEvent> {
        let edge = match self.topology.find_edge(u, v) {
            Some(e) => e,
            None => {
                debug!("Ignore removal of non-existing link {:?} -- {:?}", u, v);
                return Vec::new();
            }
        };
        self.topology.remove_edge(edge);
        self.utilization.remove_link(u, v);
        info!("Removed link {} -- {}", self.topology[u], self.topology[v]);
        self.handle_link_failure(u, v)
    }

    /// Simulate the failure of a link. This is the same as [`Network::remove_link`].
    pub fn fail_link(&mut self, u: NodeId, v: NodeId) -> Vec<FailoverEvent> {
        self.remove_link(u, v)
    }

    /// Compute the forwarding path for every ordered pair of distinct nodes. The flow table and
    /// the backup paths of every pair are overwritten. If there exists no path, the destination
    /// is marked as unreachable.
    pub fn compute_all_paths(&mut self) {
        let nodes: Vec<NodeId> = self.topology.node_indices().collect();
        if nodes.len() > self.config.path_enumeration_warn_nodes {
            warn!(
                "Enumerating all simple paths in a topology with {} nodes may take very long!",
                nodes.len()
            );
        }
        for src in nodes.iter() {
            for dst in nodes.iter().filter(|dst| *dst != src) {
                self.compute_path(*src, *dst);
            }
        }
        info!("Recomputed all paths");
    }

    /// Compute the path of a single pair, and update the flow table and the backup paths.
    fn compute_path(&mut self, src: NodeId, dst: NodeId) {
        let mut candidates = all_simple_paths(&self.topology, src, dst);
        let class = self.traffic.get(&(src, dst)).map(|t| t.class).unwrap_or_default();

        let chosen = match select_path(&candidates, class, &self.topology, &self.utilization) {
            Some(idx) => candidates.remove(idx),
            None => {
                debug!("No path from {} to {}", self.topology[src], self.topology[dst]);
                self.flow_table.install(src, dst, None);
                self.backups.clear(src, dst);
                return;
            }
        };

        debug!(
            "{} traffic from {} to {}: chose {:?}, {} backup paths",
            class,
            self.topology[src],
            self.topology[dst],
            chosen,
            candidates.len()
        );
        self.flow_table.install(src, dst, Some(chosen));
        self.backups.set(src, dst, candidates);
    }

    /// Inject a flow from `src` to `dst`. The traffic descriptor of the pair is updated with the
    /// class derived from `label`. If a path is installed, the utilization along it is
    /// incremented. The paths are never recomputed, so the new class only affects the next call
    /// to [`Network::compute_all_paths`].
    pub fn inject_flow(
        &mut self,
        src: NodeId,
        dst: NodeId,
        label: impl Into<String>,
    ) -> Result<InjectionResult, NetworkError> {
        self.check_node(src)?;
        self.check_node(dst)?;
        let descriptor = TrafficDescriptor::new(label);
        let class = descriptor.class;
        self.traffic.insert((src, dst), descriptor);

        Ok(match self.flow_table.get(src, dst) {
            Some(Some(path)) => {
                let path = path.clone();
                self.utilization.account_path(&path);
                info!(
                    "Routing {} flow from {} to {} via {:?}",
                    class, self.topology[src], self.topology[dst], path
                );
                InjectionResult::Routed(path)
            }
            Some(None) => {
                warn!(
                    "No available path for flow from {} to {}",
                    self.topology[src], self.topology[dst]
                );
                InjectionResult::NoPath
            }
            None => {
                warn!(
                    "No routing information for {} to {}",
                    self.topology[src], self.topology[dst]
                );
                InjectionResult::NoRouteComputed
            }
        })
    }

    /// Move every flow that used the (already removed) link `u -- v` onto a backup path.
    fn handle_link_failure(&mut self, u: NodeId, v: NodeId) -> Vec<FailoverEvent> {
        let mut events = Vec::new();
        for (src, dst) in self.flow_table.flows_using_link(u, v) {
            loop {
                match self.backups.pop_front(src, dst) {
                    Some(path)
                        if self.config.validate_backups
                            && !is_valid_path(&self.topology, &path) =>
                    {
                        warn!("Drop stale backup path {:?} for {:?} -> {:?}", path, src, dst);
                        events.push(FailoverEvent::DiscardedStaleBackup { src, dst, path });
                    }
                    Some(path) => {
                        self.utilization.account_path(&path);
                        self.flow_table.install(src, dst, Some(path.clone()));
                        info!(
                            "Rerouted {}-{} to backup path: {:?}",
                            self.topology[src], self.topology[dst], path
                        );
                        events.push(FailoverEvent::Rerouted { src, dst, path });
                        break;
                    }
                    None => {
                        warn!(
                            "No backup path available for {}-{}",
                            self.topology[src], self.topology[dst]
                        );
                        self.flow_table.install(src, dst, None);
                        events.push(FailoverEvent::Unreachable { src, dst });
                        break;
                    }
                }
            }
        }
        events
    }

    /// Returns the utilization of every tracked directed link, ordered by the link. If the link
    /// of a counter does no longer exist, the configured fallback capacity is reported.
    pub fn get_utilization_report(&self) -> Vec<UtilizationReportEntry> {
        self.utilization
            .iter()
            .map(|((source, target), usage)| {
                let capacity = self
                    .get_link(*source, *target)
                    .map(|l| l.capacity)
                    .unwrap_or(self.config.fallback_capacity);
                UtilizationReportEntry {
                    source: *source,
                    target: *target,
                    usage: *usage,
                    capacity,
                    percentage: *usage as f32 / capacity * 100.0,
                }
            })
            .collect()
    }

    /// Returns a copy of all flow table entries, ordered by source and destination. `None` marks
    /// an unreachable destination.
    pub fn get_flow_table_snapshot(&self) -> Vec<(NodeId, NodeId, Option<Path>)> {
        self.flow_table.iter().map(|(src, dst, path)| (src, dst, path.clone())).collect()
    }

    /// Returns a copy of all traffic descriptors, ordered by source and destination.
    pub fn get_traffic_snapshot(&self) -> Vec<((NodeId, NodeId), TrafficDescriptor)> {
        self.traffic.iter().map(|(k, t)| (*k, t.clone())).collect()
    }

    /// Returns the traffic descriptor of a pair, if any flow was injected.
    pub fn get_traffic(&self, src: NodeId, dst: NodeId) -> Option<&TrafficDescriptor> {
        self.traffic.get(&(src, dst))
    }

    /// Returns the installed path from `src` to `dst`, or `None` if there is no path installed.
    pub fn get_route(&self, src: NodeId, dst: NodeId) -> Option<&Path> {
        self.flow_table.get(src, dst).and_then(|p| p.as_ref())
    }

    /// Returns a reference to the flow table
    pub fn get_flow_table(&self) -> &FlowTable {
        &self.flow_table
    }

    /// Returns a reference to the backup paths
    pub fn get_backup_paths(&self) -> &BackupPaths {
        &self.backups
    }

    /// Returns a reference to the utilization counters
    pub fn get_utilization(&self) -> &UtilizationTracker {
        &self.utilization
    }

    /// Returns a reference to the topology
    pub fn get_topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns the attributes of the link `u -- v`, if it exists.
    pub fn get_link(&self, u: NodeId, v: NodeId) -> Option<Link> {
        self.topology.find_edge(u, v).and_then(|e| self.topology.edge_weight(e)).copied()
    }

    /// Returns all links, as `(u, v, link)`.
    pub fn get_links(&self) -> Vec<(NodeId, NodeId, Link)> {
        self.topology.edge_references().map(|e| (e.source(), e.target(), *e.weight())).collect()
    }

    /// Returns all nodes, in the order in which they were added.
    pub fn get_nodes(&self) -> Vec<NodeId> {
        self.topology.node_indices().collect()
    }

    /// Returns the number of nodes
    pub fn num_nodes(&self) -> usize {
        self.topology.node_count()
    }

    /// Get the ID of a node by its name
    pub fn get_node_id(&self, name: impl AsRef<str>) -> Result<NodeId, NetworkError> {
        self.topology
            .node_indices()
            .find(|n| self.topology[*n] == name.as_ref())
            .ok_or_else(|| NetworkError::NodeNameNotFound(name.as_ref().to_string()))
    }

    /// Get the name of a node by its ID
    pub fn get_node_name(&self, id: NodeId) -> Result<&str, NetworkError> {
        self.topology.node_weight(id).map(|s| s.as_str()).ok_or(NetworkError::NodeNotFound(id))
    }

    fn check_node(&self, id: NodeId) -> Result<(), NetworkError> {
        if self.topology.contains_node(id) {
            Ok(())
        } else {
            Err(NetworkError::NodeNotFound(id))
        }
    }
}
