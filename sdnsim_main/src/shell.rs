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

//! # Controller Shell
//!
//! Parses single command lines, and executes them on the network. Every command maps to exactly
//! one operation of the controller.

use sdnsim::netsim::{printer, LinkCapacity, LinkWeight, Network, NetworkError, NodeId};
use sdnsim::netsim::render::to_dot;

use log::*;
use std::fs::write;
use thiserror::Error;

/// Weight of a link, if not specified
pub const DEFAULT_WEIGHT: LinkWeight = 1.0;
/// Capacity of a link, if not specified
pub const DEFAULT_CAPACITY: LinkCapacity = 100.0;

/// Command of the controller shell
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add one or more nodes
    AddNodes(Vec<String>),
    /// Add or replace a link
    AddLink { u: String, v: String, weight: LinkWeight, capacity: LinkCapacity },
    /// Remove a link, triggering the failure handler. Both `remove_link` and `fail_link` map here.
    RemoveLink { u: String, v: String },
    /// Inject a flow
    InjectFlow { src: String, dst: String, label: String },
    /// Recompute all paths
    ComputePaths,
    /// Print the utilization of every directed link
    ShowUtilization,
    /// Print the flow tables
    ShowFlows,
    /// Render the topology as DOT, either to stdout or into a file
    Show(Option<String>),
    /// Print the command list
    Help,
    /// Leave the shell
    Exit,
}

/// Whether the shell should continue reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Shell Errors
#[derive(Debug, Error)]
pub enum ShellError {
    /// The command is not known
    #[error("Unknown command: {0}. Type 'help' for available commands")]
    UnknownCommand(String),
    /// The command was called with the wrong arguments
    #[error("Usage: {0}")]
    Usage(&'static str),
    /// A numeric argument cannot be parsed
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    /// Error propagated from the network
    #[error("{0}")]
    NetworkError(#[from] NetworkError),
    /// The DOT file cannot be written
    #[error("Cannot write the file: {0}")]
    Io(#[from] std::io::Error),
}

const USAGE_ADD_NODE: &str = "add_node <n1> <n2> <n...>";
const USAGE_ADD_LINK: &str = "add_link <node1> <node2> [weight=1] [capacity=100]";
const USAGE_REMOVE_LINK: &str = "remove_link <node1> <node2>";
const USAGE_FAIL_LINK: &str = "fail_link <node1> <node2>";
const USAGE_INJECT_FLOW: &str = "inject_flow <src> <dst> [critical|important|default]";
const USAGE_SHOW: &str = "show [file.dot]";

const HELP: [(&str, &str); 11] = [
    ("add_node <n1> <n2> <n...>", "Add nodes to the topology"),
    ("add_link <n1> <n2> [w] [c]", "Add link between nodes (weight, capacity)"),
    ("remove_link <n1> <n2>", "Remove a link between nodes"),
    ("inject_flow <src> <dst> [type]", "Inject flow (critical/important/default)"),
    ("fail_link <n1> <n2>", "Simulate link failure"),
    ("show_util", "Show link utilization statistics"),
    ("show_flows", "Show the flow tables of all nodes"),
    ("show [file.dot]", "Render the network in the DOT format"),
    ("compute_paths", "Recompute all paths"),
    ("help", "Show this command list"),
    ("exit", "Exit the CLI"),
];

/// Parse a single line. Returns `Ok(None)` for empty lines and comments (starting with `#`).
pub fn parse_command(line: &str) -> Result<Option<Command>, ShellError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let cmd = words.next().unwrap_or_default();
    let args: Vec<String> = words.map(String::from).collect();

    Ok(Some(match cmd {
        "add_node" => {
            if args.is_empty() {
                return Err(ShellError::Usage(USAGE_ADD_NODE));
            }
            Command::AddNodes(args)
        }
        "add_link" => match args.as_slice() {
            [u, v, rest @ ..] if rest.len() <= 2 => Command::AddLink {
                u: u.clone(),
                v: v.clone(),
                weight: parse_number(rest.get(0), DEFAULT_WEIGHT)?,
                capacity: parse_number(rest.get(1), DEFAULT_CAPACITY)?,
            },
            _ => return Err(ShellError::Usage(USAGE_ADD_LINK)),
        },
        "remove_link" | "fail_link" => match args.as_slice() {
            [u, v] => Command::RemoveLink { u: u.clone(), v: v.clone() },
            _ if cmd == "remove_link" => return Err(ShellError::Usage(USAGE_REMOVE_LINK)),
            _ => return Err(ShellError::Usage(USAGE_FAIL_LINK)),
        },
        "inject_flow" => match args.as_slice() {
            [src, dst] => Command::InjectFlow {
                src: src.clone(),
                dst: dst.clone(),
                label: String::from("default"),
            },
            [src, dst, label] => {
                Command::InjectFlow { src: src.clone(), dst: dst.clone(), label: label.clone() }
            }
            _ => return Err(ShellError::Usage(USAGE_INJECT_FLOW)),
        },
        "compute_paths" => Command::ComputePaths,
        "show_util" => Command::ShowUtilization,
        "show_flows" => Command::ShowFlows,
        "show" => match args.as_slice() {
            [] => Command::Show(None),
            [file] => Command::Show(Some(file.clone())),
            _ => return Err(ShellError::Usage(USAGE_SHOW)),
        },
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    }))
}

fn parse_number(arg: Option<&String>, default: f32) -> Result<f32, ShellError> {
    match arg {
        Some(s) => s.parse().map_err(|_| ShellError::InvalidNumber(s.clone())),
        None => Ok(default),
    }
}

/// Execute a single command on the network, and print the result to stdout.
pub fn execute(net: &mut Network, command: Command) -> Result<Flow, ShellError> {
    match command {
        Command::AddNodes(names) => {
            for name in names {
                net.add_node(name.as_str());
                println!("Node {} added.", name);
            }
        }
        Command::AddLink { u, v, weight, capacity } => {
            let (u_id, v_id) = resolve(net, &u, &v)?;
            net.add_link(u_id, v_id, weight, capacity)?;
            println!("Link {}-{} added with weight {}, capacity {}.", u, v, weight, capacity);
        }
        Command::RemoveLink { u, v } => {
            let (u_id, v_id) = resolve(net, &u, &v)?;
            if net.get_link(u_id, v_id).is_none() {
                debug!("Link {}-{} does not exist", u, v);
            }
            for event in net.remove_link(u_id, v_id) {
                println!("{}", printer::failover_event(net, &event)?);
            }
        }
        Command::InjectFlow { src, dst, label } => {
            let (src_id, dst_id) = resolve(net, &src, &dst)?;
            let result = net.inject_flow(src_id, dst_id, label)?;
            println!("{}", printer::injection_result(net, src_id, dst_id, &result)?);
        }
        Command::ComputePaths => {
            net.compute_all_paths();
            println!("All paths recomputed.");
        }
        Command::ShowUtilization => printer::print_utilization(net)?,
        Command::ShowFlows => printer::print_flow_table(net)?,
        Command::Show(None) => print!("{}", to_dot(net)),
        Command::Show(Some(file)) => {
            write(&file, to_dot(net))?;
            println!("Topology written to {}", file);
        }
        Command::Help => print_help(),
        Command::Exit => {
            println!("Exiting SDN controller.");
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

fn resolve(net: &Network, a: &str, b: &str) -> Result<(NodeId, NodeId), NetworkError> {
    Ok((net.get_node_id(a)?, net.get_node_id(b)?))
}

/// Print the list of all commands
pub fn print_help() {
    println!("\nSDN Controller Command List:");
    println!("{}", "=".repeat(80));
    println!("{:<32} {}", "Command", "Description");
    println!("{}", "-".repeat(80));
    for (cmd, desc) in HELP.iter() {
        println!("{:<32} {}", cmd, desc);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sdnsim::example_networks::{ExampleNetwork, TriangleNet};

    #[test]
    fn test_parse_empty() {
        assert!(parse_command("").unwrap().is_none());
        assert!(parse_command("   ").unwrap().is_none());
        assert!(parse_command("# comment").unwrap().is_none());
    }

    #[test]
    fn test_parse_add_node() {
        assert_eq!(
            parse_command("add_node A B C").unwrap(),
            Some(Command::AddNodes(vec!["A".into(), "B".into(), "C".into()]))
        );
        assert!(matches!(parse_command("add_node"), Err(ShellError::Usage(_))));
    }

    #[test]
    fn test_parse_add_link() {
        assert_eq!(
            parse_command("add_link A B").unwrap(),
            Some(Command::AddLink { u: "A".into(), v: "B".into(), weight: 1.0, capacity: 100.0 })
        );
        assert_eq!(
            parse_command("add_link A B 5").unwrap(),
            Some(Command::AddLink { u: "A".into(), v: "B".into(), weight: 5.0, capacity: 100.0 })
        );
        assert_eq!(
            parse_command("  add_link A  B 2.5 10 ").unwrap(),
            Some(Command::AddLink { u: "A".into(), v: "B".into(), weight: 2.5, capacity: 10.0 })
        );
        assert!(matches!(parse_command("add_link A"), Err(ShellError::Usage(_))));
        assert!(matches!(parse_command("add_link A B 1 2 3"), Err(ShellError::Usage(_))));
        assert!(matches!(parse_command("add_link A B x"), Err(ShellError::InvalidNumber(_))));
    }

    #[test]
    fn test_parse_fail_link_is_remove_link() {
        let remove = parse_command("remove_link A B").unwrap();
        assert_eq!(remove, Some(Command::RemoveLink { u: "A".into(), v: "B".into() }));
        assert_eq!(parse_command("fail_link A B").unwrap(), remove);
        assert!(matches!(parse_command("fail_link A"), Err(ShellError::Usage(USAGE_FAIL_LINK))));
        assert!(matches!(
            parse_command("remove_link A B C"),
            Err(ShellError::Usage(USAGE_REMOVE_LINK))
        ));
    }

    #[test]
    fn test_parse_inject_flow() {
        assert_eq!(
            parse_command("inject_flow A C").unwrap(),
            Some(Command::InjectFlow { src: "A".into(), dst: "C".into(), label: "default".into() })
        );
        assert_eq!(
            parse_command("inject_flow A C critical").unwrap(),
            Some(Command::InjectFlow { src: "A".into(), dst: "C".into(), label: "critical".into() })
        );
        assert!(matches!(parse_command("inject_flow A"), Err(ShellError::Usage(_))));
    }

    #[test]
    fn test_parse_other() {
        assert_eq!(parse_command("compute_paths").unwrap(), Some(Command::ComputePaths));
        assert_eq!(parse_command("show_util").unwrap(), Some(Command::ShowUtilization));
        assert_eq!(parse_command("show_flows").unwrap(), Some(Command::ShowFlows));
        assert_eq!(parse_command("show").unwrap(), Some(Command::Show(None)));
        assert_eq!(parse_command("show a.dot").unwrap(), Some(Command::Show(Some("a.dot".into()))));
        assert_eq!(parse_command("help").unwrap(), Some(Command::Help));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Exit));
        assert!(matches!(parse_command("watermark"), Err(ShellError::UnknownCommand(_))));
    }

    #[test]
    fn test_execute() {
        let mut net = Network::new();
        let run = |net: &mut Network, line: &str| {
            execute(net, parse_command(line).unwrap().unwrap()).unwrap()
        };
        assert_eq!(run(&mut net, "add_node A B C"), Flow::Continue);
        run(&mut net, "add_link A B 1 10");
        run(&mut net, "add_link B C 1 10");
        run(&mut net, "add_link A C 5 10");
        run(&mut net, "inject_flow A C critical");
        run(&mut net, "compute_paths");
        run(&mut net, "inject_flow A C critical");

        let a = net.get_node_id("A").unwrap();
        let b = net.get_node_id("B").unwrap();
        let c = net.get_node_id("C").unwrap();
        assert_eq!(net.get_route(a, c), Some(&vec![a, b, c]));
        assert_eq!(net.get_utilization().get(a, b), Some(1));

        run(&mut net, "fail_link A B");
        assert_eq!(net.get_route(a, c), Some(&vec![a, c]));
        assert_eq!(net.get_link(a, b), None);
        assert_eq!(run(&mut net, "exit"), Flow::Exit);
    }

    #[test]
    fn test_execute_errors() {
        let mut net = TriangleNet::net();
        let cmd = parse_command("add_link A X").unwrap().unwrap();
        assert!(matches!(
            execute(&mut net, cmd),
            Err(ShellError::NetworkError(NetworkError::NodeNameNotFound(_)))
        ));
        let cmd = parse_command("add_link A A").unwrap().unwrap();
        assert!(matches!(
            execute(&mut net, cmd),
            Err(ShellError::NetworkError(NetworkError::SelfLoop(_)))
        ));
        // removing a missing link is not an error
        let cmd = parse_command("remove_link A B").unwrap().unwrap();
        execute(&mut net, cmd.clone()).unwrap();
        execute(&mut net, cmd).unwrap();
    }
}
