use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{package::scan, runtime::Runtime};

use super::paths::default_packages_root;

/// List cached packages, optionally filtered by a free-text query.
#[tracing::instrument(skip(runtime, packages_root))]
pub fn list<R: Runtime>(
    runtime: R,
    packages_root: Option<PathBuf>,
    query: Option<&str>,
    json: bool,
) -> Result<()> {
    let root = match packages_root {
        Some(path) => path,
        None => default_packages_root(&runtime)?,
    };

    debug!("Listing packages from {:?}", root);

    let mut packages = scan(&runtime, &root)?;
    if let Some(query) = query {
        packages.retain(|p| p.matches(query));
    }

    debug!("Found {} package(s)", packages.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&packages)?);
        return Ok(());
    }

    if packages.is_empty() {
        println!("No packages in the cache.");
        return Ok(());
    }

    for package in &packages {
        let version = package.newest_version().unwrap_or("(unknown)");
        if package.display_name != package.id {
            println!("{} {} ({})", package.id, version, package.display_name);
        } else {
            println!("{} {}", package.id, version);
        }
    }

    Ok(())
}
