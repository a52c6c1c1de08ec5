//! `waypath atlas` - shortest walking route queries

use tracing::debug;

use waypath_core::atlas::{Atlas, Point};
use waypath_core::error::{Result, WaypathError};
use waypath_core::format::OutputFormat;
use waypath_core::graph::Path;

use crate::cli::{AtlasArgs, Cli};

pub fn run(cli: &Cli, args: &AtlasArgs) -> Result<()> {
    let atlas = Atlas::from_files(&args.landmarks, &args.segments)?;
    debug!(points = atlas.point_count(), "atlas built");

    if args.list {
        return print_landmarks(cli, &atlas);
    }

    // clap guarantees these when --list is absent
    let (from, to) = match (args.from.as_deref(), args.to.as_deref()) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            return Err(WaypathError::UsageError(
                "from and to landmarks are required unless --list is given".to_string(),
            ))
        }
    };

    let route = atlas.shortest_route(from, to)?;

    match cli.format {
        OutputFormat::Json => print_json(&atlas, from, to, route.as_ref())?,
        OutputFormat::Human => print_human(cli, &atlas, from, to, route.as_ref())?,
    }
    Ok(())
}

fn print_landmarks(cli: &Cli, atlas: &Atlas) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = atlas
                .landmark_names()
                .iter()
                .map(|(short, long)| serde_json::json!({ "short": short, "long": long }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            for (short, long) in atlas.landmark_names() {
                println!("{}: {}", short, long);
            }
        }
    }
    Ok(())
}

fn print_human(
    cli: &Cli,
    atlas: &Atlas,
    from: &str,
    to: &str,
    route: Option<&Path<Point>>,
) -> Result<()> {
    let Some(route) = route else {
        println!("no route found from {} to {}", from, to);
        return Ok(());
    };

    if !cli.quiet {
        println!(
            "route from {} ({}) to {} ({}):",
            from,
            atlas.long_name_for(from)?,
            to,
            atlas.long_name_for(to)?
        );
    }

    let mut previous = *route.start();
    for step in route.steps() {
        println!(
            "  walk {:.1} units from ({:.1}, {:.1}) to ({:.1}, {:.1})",
            step.cost.value(),
            previous.x,
            previous.y,
            step.destination.x,
            step.destination.y
        );
        previous = step.destination;
    }
    println!("total distance: {:.1} units", route.total_cost().value());
    Ok(())
}

fn print_json(atlas: &Atlas, from: &str, to: &str, route: Option<&Path<Point>>) -> Result<()> {
    let doc = serde_json::json!({
        "from": from,
        "from_name": atlas.long_name_for(from)?,
        "to": to,
        "to_name": atlas.long_name_for(to)?,
        "found": route.is_some(),
        "total_distance": route.map(|r| r.total_cost().value()),
        "route": route,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
