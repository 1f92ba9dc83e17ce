//! Package cache scanning.
//!
//! Directory structure: `<root>/<package-id>/<version>/<package-id>.nuspec`.
//! The scan builds one [`PackageSummary`] per package directory that has at
//! least one version with a readable metadata document.

use anyhow::Result;
use log::warn;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

use super::nuspec::Nuspec;
use super::summary::{IconSource, PackageSummary};
use super::version;

/// macOS directory-listing artifact; skipped, never treated as a package.
const DS_STORE: &str = ".DS_Store";

/// Scan the package cache root.
///
/// A missing root yields an empty list. Packages whose directory cannot be
/// listed are logged and skipped; packages without a readable metadata
/// document in any version are omitted silently. The result keeps the
/// root's directory-listing order.
#[tracing::instrument(skip(runtime, root))]
pub fn scan<R: Runtime>(runtime: &R, root: &Path) -> Result<Vec<PackageSummary>> {
    if !runtime.exists(root) {
        return Ok(Vec::new());
    }

    let mut summaries = Vec::new();
    for entry in runtime.read_dir(root)? {
        let Some(id) = entry.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if id == DS_STORE || !runtime.is_dir(&entry) {
            continue;
        }
        match scan_package(runtime, &entry, id) {
            Ok(Some(summary)) => summaries.push(summary),
            Ok(None) => {}
            Err(e) => warn!("Skipping package {}: {}", id, e),
        }
    }

    Ok(summaries)
}

/// Build the summary for a single package directory.
///
/// Returns `None` when no version directory carries a readable metadata
/// document. Descriptive fields and the icon come from the newest readable
/// version only.
pub fn scan_package<R: Runtime>(
    runtime: &R,
    package_dir: &Path,
    id: &str,
) -> Result<Option<PackageSummary>> {
    let mut versions: Vec<String> = runtime
        .read_dir(package_dir)?
        .into_iter()
        .filter(|entry| runtime.is_dir(entry))
        .filter_map(|entry| {
            entry
                .file_name()
                .and_then(|n| n.to_str())
                .map(String::from)
        })
        .collect();
    versions.sort_by(|a, b| version::compare(a, b));
    versions.reverse();

    // Only version directories carrying the metadata document count.
    let versions: Vec<String> = versions
        .into_iter()
        .filter(|v| runtime.exists(&nuspec_path(package_dir, id, v)))
        .collect();

    let Some((version_dir, doc)) = newest_document(runtime, package_dir, id, &versions) else {
        return Ok(None);
    };

    let icon = resolve_icon(runtime, &version_dir, &doc);
    let owners = if doc.owners == doc.authors {
        None
    } else {
        doc.owners
    };

    Ok(Some(PackageSummary {
        id: id.to_string(),
        display_name: doc.title.unwrap_or_else(|| id.to_string()),
        path: package_dir.to_path_buf(),
        description: doc.description,
        authors: doc.authors,
        owners,
        tags: doc.tags,
        project_url: doc.project_url,
        license_url: doc.license_url,
        repository_url: doc.repository_url,
        icon,
        versions,
    }))
}

/// Find the newest version whose document reads successfully; the walk is
/// descending, so the first hit determines the package's fields.
fn newest_document<R: Runtime>(
    runtime: &R,
    package_dir: &Path,
    id: &str,
    versions: &[String],
) -> Option<(PathBuf, Nuspec)> {
    for version in versions {
        match runtime.read_to_string(&nuspec_path(package_dir, id, version)) {
            Ok(text) => return Some((package_dir.join(version), Nuspec::parse(&text))),
            Err(e) => warn!("Failed to read metadata for {} {}: {}", id, version, e),
        }
    }
    None
}

fn nuspec_path(package_dir: &Path, id: &str, version: &str) -> PathBuf {
    package_dir.join(version).join(format!("{}.nuspec", id))
}

/// Resolve the package icon, first match wins:
/// a conventional `icon.png` in the version directory, then a remote URL
/// from the metadata, then a metadata file reference relative to the
/// version directory.
fn resolve_icon<R: Runtime>(
    runtime: &R,
    version_dir: &Path,
    doc: &Nuspec,
) -> Option<IconSource> {
    let conventional = version_dir.join("icon.png");
    if runtime.exists(&conventional) {
        return Some(IconSource::File(conventional));
    }

    let reference = doc.icon_url.as_deref().or(doc.icon.as_deref())?;
    if reference.starts_with("http") {
        return Some(IconSource::Url(reference.to_string()));
    }

    let local = version_dir.join(reference);
    runtime
        .exists(&local)
        .then(|| IconSource::File(local))
}
