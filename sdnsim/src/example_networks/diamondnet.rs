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

//! # Diamond Network

use super::ExampleNetwork;
use crate::netsim::Network;

/// # Diamond
///
/// ```text
///        B
///    1 / | \ 1
///     /  |  \
///    A   |2  D
///     \  |  /
///    2 \ | / 2
///        C
/// ```
///
/// All links have a capacity of 100. `A` reaches `D` over two disjoint paths, the upper one being
/// cheaper. The cross link `B -- C` adds two more (longer) paths.
pub struct DiamondNet {}

impl ExampleNetwork for DiamondNet {
    fn net() -> Network {
        let mut net = Network::new();

        let a = net.add_node("A");
        let b = net.add_node("B");
        let c = net.add_node("C");
        let d = net.add_node("D");

        net.add_link(a, b, 1.0, 100.0).unwrap();
        net.add_link(b, d, 1.0, 100.0).unwrap();
        net.add_link(a, c, 2.0, 100.0).unwrap();
        net.add_link(c, d, 2.0, 100.0).unwrap();
        net.add_link(b, c, 2.0, 100.0).unwrap();

        net
    }
}
