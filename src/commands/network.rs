//! `waypath network` - fewest-hops connection queries

use tracing::debug;

use waypath_core::error::Result;
use waypath_core::format::OutputFormat;
use waypath_core::graph::Edge;
use waypath_core::network;

use crate::cli::{Cli, NetworkArgs};

pub fn run(cli: &Cli, args: &NetworkArgs) -> Result<()> {
    let records = network::parse_records(&args.data)?;
    let graph = network::build_graph(&records)?;
    debug!(
        records = records.len(),
        nodes = graph.len(),
        "network graph built"
    );

    let hops = network::find_connection(&graph, &args.from, &args.to)?;

    match cli.format {
        OutputFormat::Json => print_json(args, hops.as_deref())?,
        OutputFormat::Human => print_human(cli, args, hops.as_deref()),
    }
    Ok(())
}

fn print_human(cli: &Cli, args: &NetworkArgs, hops: Option<&[Edge<String, String>]>) {
    let Some(hops) = hops else {
        println!("no path found from {} to {}", args.from, args.to);
        return;
    };

    if !cli.quiet {
        println!("path from {} to {}:", args.from, args.to);
    }
    for edge in hops {
        println!(
            "{} -> {} ({})",
            edge.parent().data(),
            edge.child().data(),
            edge.label()
        );
    }
}

fn print_json(args: &NetworkArgs, hops: Option<&[Edge<String, String>]>) -> Result<()> {
    let hop_entries: Vec<serde_json::Value> = hops
        .unwrap_or_default()
        .iter()
        .map(|edge| {
            serde_json::json!({
                "from": edge.parent().data(),
                "to": edge.child().data(),
                "group": edge.label(),
            })
        })
        .collect();

    let doc = serde_json::json!({
        "from": args.from,
        "to": args.to,
        "found": hops.is_some(),
        "path_length": hops.map_or(0, <[_]>::len),
        "hops": hop_entries,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
