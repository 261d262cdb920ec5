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

//! Test the visualization projection and the printer functions.

use crate::example_networks::{ExampleNetwork, TriangleNet};
use crate::netsim::render::{highlighted_links, to_dot};
use crate::netsim::{printer, FailoverEvent, InjectionResult, Network, NodeId, TrafficClass};
use lazy_static::lazy_static;
use maplit::hashmap;

lazy_static! {
    static ref A: NodeId = 0.into();
    static ref B: NodeId = 1.into();
    static ref C: NodeId = 2.into();
}

/// Line network `A -- B -- C`, with one critical flow from `A` to `C`, and one important flow from
/// `B` to `C`.
fn get_line_net() -> Network {
    let mut net = Network::new();
    net.add_nodes(vec!["A", "B", "C"]);
    net.add_link(*A, *B, 1.0, 10.0).unwrap();
    net.add_link(*B, *C, 2.0, 10.0).unwrap();
    net.inject_flow(*A, *C, "critical").unwrap();
    net.inject_flow(*B, *C, "important").unwrap();
    net.compute_all_paths();
    net
}

#[test]
fn test_highlighted_links() {
    let mut net = get_line_net();
    assert_eq!(
        highlighted_links(&net),
        hashmap! {
            (*A, *B) => TrafficClass::Critical,
            (*B, *C) => TrafficClass::Critical,
        }
    );

    // a flow in the opposite direction is highlighted on the same links
    let d = net.add_node("D");
    net.add_link(d, *A, 1.0, 10.0).unwrap();
    net.inject_flow(d, *A, "default").unwrap();
    net.compute_all_paths();
    let links = highlighted_links(&net);
    assert_eq!(links.get(&(*A, d)), Some(&TrafficClass::Default));
    assert_eq!(links.get(&(*A, *B)), Some(&TrafficClass::Critical));
    assert_eq!(links.len(), 3);
}

#[test]
fn test_highlighted_links_without_path() {
    let mut net = get_line_net();
    net.remove_link(*A, *B);
    let links = highlighted_links(&net);
    assert_eq!(links, hashmap! { (*B, *C) => TrafficClass::Important });
}

#[test]
fn test_render_does_not_mutate() {
    let net = get_line_net();
    let flows = net.get_flow_table_snapshot();
    let utilization = net.get_utilization().clone();
    let dot = to_dot(&net);
    assert_eq!(net.get_flow_table_snapshot(), flows);
    assert_eq!(net.get_utilization(), &utilization);

    assert!(dot.starts_with("graph {"));
    assert!(dot.contains("--"));
    assert!(dot.contains("color = red"));
    assert!(!dot.contains("color = gray"));
}

#[test]
fn test_render_colors() {
    let mut net = TriangleNet::net();
    net.inject_flow(*A, *C, "critical").unwrap();
    net.compute_all_paths();
    let dot = to_dot(&net);
    assert_eq!(dot.matches("color = red").count(), 2);
    assert_eq!(dot.matches("color = gray").count(), 1);
    assert_eq!(dot.matches("fillcolor = lightblue").count(), 3);
}

#[test]
fn test_printer() {
    let mut net = TriangleNet::net();
    net.inject_flow(*A, *C, "critical").unwrap();
    net.compute_all_paths();
    let result = net.inject_flow(*A, *C, "critical").unwrap();

    assert_eq!(printer::path(&net, &[*A, *B, *C]).unwrap(), "[A, B, C]");
    assert!(printer::path(&net, &[*A, 5.into()]).is_err());
    assert_eq!(
        printer::injection_result(&net, *A, *C, &result).unwrap(),
        "Routing critical flow from A to C via [A, B, C]"
    );
    assert_eq!(
        printer::injection_result(&net, *A, *C, &InjectionResult::NoPath).unwrap(),
        "No available path for flow from A to C"
    );
    assert_eq!(
        printer::injection_result(&net, *A, *C, &InjectionResult::NoRouteComputed).unwrap(),
        "No routing information for A to C"
    );
    assert_eq!(
        printer::flow_entry(&net, *A, *C, net.get_route(*A, *C).map(|p| p.as_slice())).unwrap(),
        "A -> C: [A, B, C] (critical, priority 3)"
    );
    assert_eq!(printer::flow_entry(&net, *C, *A, None).unwrap(), "C -> A: unreachable");

    let report = net.get_utilization_report();
    let ab = report.iter().find(|e| e.source == *A && e.target == *B).unwrap();
    assert_eq!(printer::utilization_entry(&net, ab).unwrap(), "Link A-B: 1/10 packets (10.0%)");

    let event = FailoverEvent::Rerouted { src: *A, dst: *C, path: vec![*A, *C] };
    assert_eq!(
        printer::failover_event(&net, &event).unwrap(),
        "Rerouted A-C to backup path: [A, C]"
    );
    let event = FailoverEvent::Unreachable { src: *A, dst: *C };
    assert_eq!(printer::failover_event(&net, &event).unwrap(), "No backup path available for A-C");
}
