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

//! # Random Network
//!
//! Small random topologies, generated from a seed such that they are reproducible.

use crate::netsim::{LinkCapacity, LinkWeight, Network};
use crate::Error;

use rand::prelude::*;

/// Generator for random connected topologies.
pub struct RandomNet {}

impl RandomNet {
    /// Generate a connected network with `num_nodes` nodes, named `n0`, `n1`, etc. Every node is
    /// first attached to a random node added before it. Then, every remaining pair is connected
    /// with probability `link_probability`. Weights are integers between 1 and 9, capacities
    /// multiples of 10 between 10 and 100.
    ///
    /// Keep the networks small, since the path computation enumerates every simple path.
    pub fn generate(
        num_nodes: usize,
        link_probability: f64,
        seed: u64,
    ) -> Result<Network, Error> {
        if num_nodes == 0 {
            return Err(Error::InvalidNetworkParameters("at least one node is required"));
        }
        if !(0.0..=1.0).contains(&link_probability) {
            return Err(Error::InvalidNetworkParameters("link probability must be in [0, 1]"));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut net = Network::new();
        let nodes = net.add_nodes((0..num_nodes).map(|i| format!("n{}", i)));

        for i in 1..num_nodes {
            let j = rng.gen_range(0, i);
            let (weight, capacity) = random_link(&mut rng);
            net.add_link(nodes[i], nodes[j], weight, capacity)?;
        }

        for i in 0..num_nodes {
            for j in (i + 1)..num_nodes {
                if net.get_link(nodes[i], nodes[j]).is_none() && rng.gen_bool(link_probability) {
                    let (weight, capacity) = random_link(&mut rng);
                    net.add_link(nodes[i], nodes[j], weight, capacity)?;
                }
            }
        }

        Ok(net)
    }
}

fn random_link(rng: &mut StdRng) -> (LinkWeight, LinkCapacity) {
    (rng.gen_range(1, 10) as LinkWeight, (rng.gen_range(1, 11) * 10) as LinkCapacity)
}
