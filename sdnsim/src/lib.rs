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

#![deny(missing_docs)]

//! # SdnSim: Simulating a Software-Defined Network Controller
//! This is a library for simulating the control plane of a software-defined network. It keeps a
//! topology of nodes and undirected links, computes a forwarding path for every pair of nodes,
//! accounts the utilization caused by injected traffic, and reroutes flows onto precomputed backup
//! paths when a link fails.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`NetSim`](netsim)**: The controller itself. See the main structure
//!   [`Network`](netsim::Network), which owns the topology, the
//!   [flow tables](netsim::FlowTable), the [utilization counters](netsim::UtilizationTracker)
//!   and the [backup paths](netsim::BackupPaths).
//!
//! - **[`PathComputation`](netsim::path_computation)**: Enumeration of all simple paths, and
//!   selection of the path to install. [Critical](netsim::TrafficClass::Critical) traffic takes
//!   the path with the smallest weight, all other traffic is balanced by taking the path with the
//!   smallest utilization.
//!
//! - **[`Render`](netsim::render)**: Projection of the controller state onto a graph in the
//!   Graphviz DOT format, with the active paths highlighted by their traffic class.
//!
//! - **[`ExampleNetworks`](example_networks)**: Collection of prepared networks, and a generator
//!   for small random topologies.
//!
//! ## Usage
//!
//! Build the topology, compute the paths, and inject traffic. Removing a link triggers the
//! failure handler, which reports every flow it moved.
//!
//! ```
//! use sdnsim::netsim::{printer, Network};
//! use sdnsim::Error;
//!
//! fn main() -> Result<(), Error> {
//!     let mut net = Network::new();
//!     let nodes = net.add_nodes(vec!["A", "B", "C", "D"]);
//!     net.add_link(nodes[0], nodes[1], 1.0, 100.0)?;
//!     net.add_link(nodes[1], nodes[3], 1.0, 100.0)?;
//!     net.add_link(nodes[0], nodes[2], 1.0, 100.0)?;
//!     net.add_link(nodes[2], nodes[3], 1.0, 100.0)?;
//!
//!     net.compute_all_paths();
//!     net.inject_flow(nodes[0], nodes[3], "important")?;
//!
//!     for event in net.fail_link(nodes[0], nodes[1]) {
//!         println!("{}", printer::failover_event(&net, &event)?);
//!     }
//!     printer::print_utilization(&net)?;
//!
//!     Ok(())
//! }
//! ```
// test modules
pub mod example_networks;
mod test;

mod error;
pub mod netsim;

pub use error::Error;
