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

//! # Visualization
//!
//! Pure projection of the controller state onto a renderable graph. Links used by the installed
//! path of an injected flow are highlighted with the color of its traffic class. Nothing in this
//! module modifies the network.

use crate::netsim::{Link, Network, NodeId, Topology, TrafficClass};

use itertools::Itertools;
use petgraph::dot::{Config, Dot};
use petgraph::stable_graph::EdgeReference;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Returns the links to highlight, along with the class that determines their color. The key is
/// the link as `(min(u, v), max(u, v))`. If multiple highlighted paths share a link, the most
/// critical class is kept.
pub fn highlighted_links(net: &Network) -> HashMap<(NodeId, NodeId), TrafficClass> {
    let mut result: HashMap<(NodeId, NodeId), TrafficClass> = HashMap::new();
    for ((src, dst), traffic) in net.get_traffic_snapshot() {
        let path = match net.get_route(src, dst) {
            Some(p) => p,
            None => continue,
        };
        for (a, b) in path.iter().tuple_windows() {
            let class = result.entry(link_key(*a, *b)).or_insert(traffic.class);
            if traffic.class > *class {
                *class = traffic.class;
            }
        }
    }
    result
}

/// Render the topology in the Graphviz DOT format. Every link is labelled with its weight, and
/// highlighted links are colored by their traffic class (critical: red, important: orange,
/// default: green).
pub fn to_dot(net: &Network) -> String {
    let highlights = highlighted_links(net);
    let topology = net.get_topology();
    let edge_attrs = |_: &Topology, e: EdgeReference<'_, Link>| -> String {
        let link = e.weight();
        match highlights.get(&link_key(e.source(), e.target())) {
            Some(class) => {
                format!("label = \"{}\" color = {} penwidth = 2 ", link.weight, class.color())
            }
            None => format!("label = \"{}\" color = gray ", link.weight),
        }
    };
    let node_attrs = |_: &Topology, _: (NodeId, &String)| -> String {
        String::from("style = filled fillcolor = lightblue ")
    };
    format!(
        "{}",
        Dot::with_attr_getters(topology, &[Config::EdgeNoLabel], &edge_attrs, &node_attrs)
    )
}

fn link_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
