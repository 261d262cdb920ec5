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

#![deny(missing_docs, missing_debug_implementations)]

//! # NetSim
//!
//! This is a library for simulating the control plane of a software-defined network. The
//! controller keeps the topology, computes a forwarding path for every pair of nodes based on the
//! priority of the traffic, tracks the utilization of every link, and reroutes flows onto backup
//! paths when a link fails.
//!
//! ## Example usage
//!
//! The following example builds a triangle `A`, `B`, `C`, where the direct link `A -- C` is more
//! expensive than the detour over `B`. Critical traffic takes the cheapest path, and is moved to
//! the direct link once `A -- B` fails.
//!
//! ```rust
//! use sdnsim::netsim::{Network, InjectionResult, FailoverEvent};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//!     let mut net = Network::new();
//!
//!     let a = net.add_node("A");
//!     let b = net.add_node("B");
//!     let c = net.add_node("C");
//!
//!     net.add_link(a, b, 1.0, 10.0)?;
//!     net.add_link(b, c, 1.0, 10.0)?;
//!     net.add_link(a, c, 5.0, 10.0)?;
//!
//!     // mark the traffic as critical, and recompute the paths
//!     net.inject_flow(a, c, "critical")?;
//!     net.compute_all_paths();
//!     assert_eq!(net.get_route(a, c), Some(&vec![a, b, c]));
//!
//!     // injecting traffic accounts the utilization along the path
//!     assert_eq!(net.inject_flow(a, c, "critical")?, InjectionResult::Routed(vec![a, b, c]));
//!     assert_eq!(net.get_utilization().get(b, c), Some(1));
//!
//!     // the failure handler moves the flow onto the backup path
//!     let events = net.remove_link(a, b);
//!     assert!(events.contains(&FailoverEvent::Rerouted { src: a, dst: c, path: vec![a, c] }));
//!     assert_eq!(net.get_route(a, c), Some(&vec![a, c]));
//!
//!     Ok(())
//! }
//! ```

pub(crate) mod backup;
pub mod config;
pub(crate) mod event;
pub(crate) mod flow_table;
pub(crate) mod network;
pub mod path_computation;
pub mod printer;
pub mod render;
pub(crate) mod traffic;
pub(crate) mod types;
pub(crate) mod utilization;

pub use backup::BackupPaths;
pub use config::NetworkConfig;
pub use event::{FailoverEvent, InjectionResult};
pub use flow_table::{path_uses_link, FlowTable};
pub use network::{Network, UtilizationReportEntry};
pub use traffic::{TrafficClass, TrafficDescriptor};
pub use types::{Link, LinkCapacity, LinkWeight, NetworkError, NodeId, Path, Topology};
pub use utilization::UtilizationTracker;
