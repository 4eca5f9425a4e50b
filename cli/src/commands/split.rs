use anyhow::{Context, Result};
use mapsplit::{split_map, SplitOptions};
use tracing::debug;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::SplitArgs) -> Result<()> {
    let options = SplitOptions {
        broadphase: args.broadphase.into(),
        exports: args.exports.clone(),
        prefix: args.prefix.clone(),
        interior_ext: args.interior_ext.clone(),
        group_ext: args.group_ext.clone(),
    };
    debug!(?options, "resolved split options");

    println!("[split] reading map from {}", args.map.display());
    let summary = split_map(&args.map, &options)
        .with_context(|| format!("[split] failed to split {}", args.map.display()))?;

    println!("Found {} brushes.", summary.brushes);
    for (path, group) in summary.written.iter().zip(&summary.groups) {
        println!("[split] wrote {} ({} brushes)", path.display(), group.len());
    }
    if let Some(exports) = &summary.exports {
        println!("[split] wrote exports to {}", exports.display());
    }

    Ok(())
}
