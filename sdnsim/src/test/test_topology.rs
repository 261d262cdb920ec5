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

//! Test the topology store: nodes, links and the utilization counters created along with them.

use crate::netsim::{Network, NetworkError, NodeId, TrafficClass, TrafficDescriptor};
use lazy_static::lazy_static;

lazy_static! {
    static ref A: NodeId = 0.into();
    static ref B: NodeId = 1.into();
    static ref C: NodeId = 2.into();
}

fn get_test_net() -> Network {
    let mut net = Network::new();
    assert_eq!(*A, net.add_node("A"));
    assert_eq!(*B, net.add_node("B"));
    assert_eq!(*C, net.add_node("C"));
    net.add_link(*A, *B, 1.0, 10.0).unwrap();
    net.add_link(*B, *C, 1.0, 10.0).unwrap();
    net
}

#[test]
fn test_add_node_idempotent() {
    let mut net = get_test_net();
    assert_eq!(net.add_node("B"), *B);
    assert_eq!(net.num_nodes(), 3);
    assert_eq!(net.add_nodes(vec!["C", "D"]), vec![*C, 3.into()]);
    assert_eq!(net.num_nodes(), 4);

    // every node owns an empty flow table
    for n in net.get_nodes() {
        assert_eq!(net.get_flow_table().table_of(n).map(|t| t.len()), Some(0));
    }
}

#[test]
fn test_node_names() {
    let net = get_test_net();
    assert_eq!(net.get_node_id("A"), Ok(*A));
    assert_eq!(net.get_node_id("C"), Ok(*C));
    assert_eq!(net.get_node_name(*B), Ok("B"));
    assert_eq!(net.get_node_id("X"), Err(NetworkError::NodeNameNotFound("X".to_string())));
    assert_eq!(net.get_node_name(10.into()), Err(NetworkError::NodeNotFound(10.into())));
}

#[test]
fn test_add_link_initializes_counters() {
    let net = get_test_net();
    assert_eq!(net.get_utilization().len(), 4);
    assert_eq!(net.get_utilization().get(*A, *B), Some(0));
    assert_eq!(net.get_utilization().get(*B, *A), Some(0));
    assert_eq!(net.get_utilization().get(*A, *C), None);
    assert_eq!(net.get_links().len(), 2);
}

#[test]
fn test_add_link_replaces() {
    let mut net = get_test_net();
    net.compute_all_paths();
    net.inject_flow(*A, *C, "default").unwrap();
    assert_eq!(net.get_utilization().get(*A, *B), Some(1));

    // replace the link in reverse direction
    net.add_link(*B, *A, 3.0, 20.0).unwrap();
    assert_eq!(net.get_links().len(), 2);
    let link = net.get_link(*A, *B).unwrap();
    assert_eq!(link.weight, 3.0);
    assert_eq!(link.capacity, 20.0);
    assert_eq!(net.get_utilization().get(*A, *B), Some(0));
    assert_eq!(net.get_utilization().get(*B, *A), Some(0));
    // the other link is untouched
    assert_eq!(net.get_utilization().get(*B, *C), Some(1));
}

#[test]
fn test_add_link_errors() {
    let mut net = get_test_net();
    assert_eq!(net.add_link(*A, *A, 1.0, 10.0), Err(NetworkError::SelfLoop(*A)));
    assert_eq!(net.add_link(*A, 7.into(), 1.0, 10.0), Err(NetworkError::NodeNotFound(7.into())));
    assert_eq!(net.add_link(*A, *C, -1.0, 10.0), Err(NetworkError::InvalidLinkWeight(-1.0)));
    assert_eq!(net.add_link(*A, *C, 1.0, 0.0), Err(NetworkError::InvalidLinkCapacity(0.0)));
    assert!(matches!(
        net.add_link(*A, *C, f32::NAN, 10.0),
        Err(NetworkError::InvalidLinkWeight(_))
    ));
    // zero weight is allowed
    net.add_link(*A, *C, 0.0, 10.0).unwrap();

    // nothing was added by the failed calls
    assert_eq!(net.get_links().len(), 3);
    assert_eq!(net.get_utilization().len(), 6);
}

#[test]
fn test_remove_link() {
    let mut net = get_test_net();
    let events = net.remove_link(*A, *B);
    assert!(events.is_empty());
    assert_eq!(net.get_link(*A, *B), None);
    assert_eq!(net.get_utilization().get(*A, *B), None);
    assert_eq!(net.get_utilization().get(*B, *A), None);
    assert_eq!(net.get_utilization().get(*B, *C), Some(0));
}

#[test]
fn test_remove_missing_link() {
    let mut net = get_test_net();
    net.compute_all_paths();
    let flows = net.get_flow_table_snapshot();
    let utilization = net.get_utilization().clone();

    assert!(net.remove_link(*A, *C).is_empty());
    assert!(net.fail_link(*C, *A).is_empty());
    assert!(net.remove_link(*A, 42.into()).is_empty());

    assert_eq!(net.get_flow_table_snapshot(), flows);
    assert_eq!(net.get_utilization(), &utilization);
    assert_eq!(net.get_links().len(), 2);
}

#[test]
fn test_traffic_class() {
    assert_eq!(TrafficClass::from_label("critical"), TrafficClass::Critical);
    assert_eq!(TrafficClass::from_label("CRITICAL"), TrafficClass::Critical);
    assert_eq!(TrafficClass::from_label("Important"), TrafficClass::Important);
    assert_eq!(TrafficClass::from_label("default"), TrafficClass::Default);
    assert_eq!(TrafficClass::from_label("video"), TrafficClass::Default);
    assert_eq!(TrafficClass::from_label(""), TrafficClass::Default);

    assert_eq!(TrafficClass::Critical.priority(), 3);
    assert_eq!(TrafficClass::Important.priority(), 2);
    assert_eq!(TrafficClass::Default.priority(), 1);
    assert!(TrafficClass::Critical > TrafficClass::Important);
    assert!(TrafficClass::Important > TrafficClass::Default);

    let t = TrafficDescriptor::new("Voice");
    assert_eq!(t.label, "Voice");
    assert_eq!(t.class, TrafficClass::Default);
    assert_eq!(t.priority(), 1);
    assert_eq!(TrafficDescriptor::default().class, TrafficClass::Default);
}

#[test]
fn test_network_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Network>();
}
