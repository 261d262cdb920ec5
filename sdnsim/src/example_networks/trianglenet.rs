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

//! # Triangle Network

use super::ExampleNetwork;
use crate::netsim::Network;

/// # Triangle
///
/// ```text
///      B
///   1 / \ 1
///    /   \
///   A --- C
///      5
/// ```
///
/// All links have a capacity of 10. The detour over `B` is cheaper than the direct link.
pub struct TriangleNet {}

impl ExampleNetwork for TriangleNet {
    fn net() -> Network {
        let mut net = Network::new();

        let a = net.add_node("A");
        let b = net.add_node("B");
        let c = net.add_node("C");

        net.add_link(a, b, 1.0, 10.0).unwrap();
        net.add_link(b, c, 1.0, 10.0).unwrap();
        net.add_link(a, c, 5.0, 10.0).unwrap();

        net
    }
}
