use std::time::Instant;

use anyhow::{Context, Result};
use mapsplit::{color_report, read_aabb_list};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ColorArgs) -> Result<()> {
    let start = Instant::now();
    let aabbs = read_aabb_list(&args.aabbs)
        .with_context(|| format!("[color] failed to load boxes from {}", args.aabbs.display()))?;
    let report = color_report(&aabbs, args.broadphase.into())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Graph has {} vertices, {} edges", report.vertices, report.edges);
    for (i, group) in report.groups.iter().enumerate() {
        let members = group.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        println!("Color {i}: vertices {}", members.join(", "));
    }
    println!("Execution took {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
