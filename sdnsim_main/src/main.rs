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

use sdnsim::example_networks::{DiamondNet, ExampleNetwork, TriangleNet};
use sdnsim::netsim::config::DEFAULT_FALLBACK_CAPACITY;
use sdnsim::netsim::{Network, NetworkConfig};

use clap::{Parser, ValueEnum};
use log::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

mod shell;
use shell::{execute, parse_command, print_help, Flow};

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    let config = NetworkConfig::new()
        .validate_backups(!args.no_validate_backups)
        .fallback_capacity(args.fallback_capacity);

    let mut net = match args.example {
        Some(ExampleSelection::Triangle) => TriangleNet::net(),
        Some(ExampleSelection::Diamond) => DiamondNet::net(),
        None => Network::new(),
    };
    net.set_config(config);
    if let Some(example) = args.example {
        info!("Loaded the {:?} network with {} nodes", example, net.num_nodes());
        net.compute_all_paths();
    }

    match args.script {
        Some(filename) => {
            info!("Reading commands from {}", filename);
            let reader = BufReader::new(File::open(filename)?);
            run_shell(&mut net, reader, false)?;
        }
        None => {
            println!("SDN Controller CLI. Type 'help' for commands.");
            print_help();
            let stdin = io::stdin();
            run_shell(&mut net, stdin.lock(), true)?;
        }
    }

    Ok(())
}

/// Read commands line by line, until `exit` or the end of the input. Errors of a single command
/// are printed, and do not stop the shell.
fn run_shell<R: BufRead>(net: &mut Network, reader: R, interactive: bool) -> io::Result<()> {
    let mut lines = reader.lines();
    loop {
        if interactive {
            print!("(sdn) ");
            io::stdout().flush()?;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };
        debug!("Executing {:?}", command);
        match execute(net, command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => println!("Error: {}", e),
        }
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[clap(name = "SdnSim Controller Shell", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Read the commands from a file instead of the standard input
    #[clap(short = 's', long)]
    script: Option<String>,
    /// Install backup paths without checking them against the current topology
    #[clap(long)]
    no_validate_backups: bool,
    /// Capacity reported for utilization counters whose link was removed
    #[clap(long, default_value_t = DEFAULT_FALLBACK_CAPACITY)]
    fallback_capacity: f32,
    /// Start with an example network, and compute its paths
    #[clap(short = 'e', long, value_enum)]
    example: Option<ExampleSelection>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ExampleSelection {
    /// Triangle A, B, C with an expensive direct link A -- C
    Triangle,
    /// Diamond A, B, C, D with a cross link B -- C
    Diamond,
}
