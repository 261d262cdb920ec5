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

//! # Helper (printer) functions for the Network
//! Module containing helper functions to get formatted strings and print information about the
//! network.

use crate::netsim::event::{FailoverEvent, InjectionResult};
use crate::netsim::network::{Network, UtilizationReportEntry};
use crate::netsim::{NetworkError, NodeId};

/// Returns the path as a list of node names, formatted as `[A, B, C]`.
pub fn path(net: &Network, path: &[NodeId]) -> Result<String, NetworkError> {
    Ok(format!(
        "[{}]",
        path.iter().map(|n| net.get_node_name(*n)).collect::<Result<Vec<_>, _>>()?.join(", ")
    ))
}

/// Returns a formatted string for a single flow table entry.
pub fn flow_entry(
    net: &Network,
    src: NodeId,
    dst: NodeId,
    entry: Option<&[NodeId]>,
) -> Result<String, NetworkError> {
    Ok(format!(
        "{} -> {}: {}{}",
        net.get_node_name(src)?,
        net.get_node_name(dst)?,
        match entry {
            Some(p) => path(net, p)?,
            None => String::from("unreachable"),
        },
        match net.get_traffic(src, dst) {
            Some(t) => format!(" ({}, priority {})", t.label, t.priority()),
            None => String::new(),
        }
    ))
}

/// Returns a formatted string for a line of the utilization report, like
/// `Link A-B: 3/10 packets (30.0%)`.
pub fn utilization_entry(
    net: &Network,
    entry: &UtilizationReportEntry,
) -> Result<String, NetworkError> {
    Ok(format!(
        "Link {}-{}: {}/{} packets ({:.1}%)",
        net.get_node_name(entry.source)?,
        net.get_node_name(entry.target)?,
        entry.usage,
        entry.capacity,
        entry.percentage
    ))
}

/// Returns a formatted string for the result of a flow injection.
pub fn injection_result(
    net: &Network,
    src: NodeId,
    dst: NodeId,
    result: &InjectionResult,
) -> Result<String, NetworkError> {
    let src_name = net.get_node_name(src)?;
    let dst_name = net.get_node_name(dst)?;
    Ok(match result {
        InjectionResult::Routed(p) => {
            let label = net.get_traffic(src, dst).map(|t| t.label.as_str()).unwrap_or("default");
            let p = path(net, p)?;
            format!("Routing {} flow from {} to {} via {}", label, src_name, dst_name, p)
        }
        InjectionResult::NoPath => {
            format!("No available path for flow from {} to {}", src_name, dst_name)
        }
        InjectionResult::NoRouteComputed => {
            format!("No routing information for {} to {}", src_name, dst_name)
        }
    })
}

/// Returns a formatted string for an action of the failure handler.
pub fn failover_event(net: &Network, event: &FailoverEvent) -> Result<String, NetworkError> {
    Ok(match event {
        FailoverEvent::Rerouted { src, dst, path: p } => format!(
            "Rerouted {}-{} to backup path: {}",
            net.get_node_name(*src)?,
            net.get_node_name(*dst)?,
            path(net, p)?
        ),
        FailoverEvent::DiscardedStaleBackup { src, dst, path: p } => format!(
            "Dropped stale backup path for {}-{}: {}",
            net.get_node_name(*src)?,
            net.get_node_name(*dst)?,
            path(net, p)?
        ),
        FailoverEvent::Unreachable { src, dst } => format!(
            "No backup path available for {}-{}",
            net.get_node_name(*src)?,
            net.get_node_name(*dst)?
        ),
    })
}

/// Print the utilization report to stdout
pub fn print_utilization(net: &Network) -> Result<(), NetworkError> {
    println!("\nLink Utilization:");
    for entry in net.get_utilization_report() {
        println!("{}", utilization_entry(net, &entry)?);
    }
    Ok(())
}

/// Print the flow tables of all nodes to stdout
pub fn print_flow_table(net: &Network) -> Result<(), NetworkError> {
    println!("\nFlow Tables:");
    for (src, dst, entry) in net.get_flow_table_snapshot() {
        println!("    {}", flow_entry(net, src, dst, entry.as_deref())?);
    }
    Ok(())
}
