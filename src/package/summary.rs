//! Summary records produced by the cache scan.

use serde::Serialize;
use std::path::PathBuf;

/// Where a package's display icon comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconSource {
    /// An image file inside the newest version directory.
    File(PathBuf),
    /// A remote URL taken verbatim from the metadata document.
    Url(String),
}

/// One cached package, with descriptive fields resolved from the newest
/// version whose metadata document was readable.
///
/// Summaries are built fresh on every scan and carry no state across
/// invocations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageSummary {
    /// The package directory name; stable identity within the cache.
    pub id: String,
    /// The metadata title, falling back to the id.
    pub display_name: String,
    /// Absolute path of the package directory.
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    /// Omitted when textually identical to `authors`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<String>,
    /// Space-delimited tag list as found in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconSource>,
    /// Version directory names that contained a metadata document,
    /// newest first.
    pub versions: Vec<String>,
}

impl PackageSummary {
    /// The newest version with a metadata document, when any exists.
    pub fn newest_version(&self) -> Option<&str> {
        self.versions.first().map(String::as_str)
    }

    /// Case-insensitive free-text match over id, display name,
    /// description, and tags. Used by the list command's search filter.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.id.to_lowercase().contains(&query)
            || self.display_name.to_lowercase().contains(&query)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
            || self
                .tags
                .as_ref()
                .is_some_and(|t| t.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_summary() -> PackageSummary {
        PackageSummary {
            id: "Serilog.Sinks.Console".into(),
            display_name: "Serilog Console Sink".into(),
            path: PathBuf::from("/home/user/.nuget/packages/serilog.sinks.console"),
            description: Some("Writes log events to the console".into()),
            authors: Some("Serilog Contributors".into()),
            owners: None,
            tags: Some("serilog console logging".into()),
            project_url: Some("https://serilog.net".into()),
            license_url: None,
            repository_url: None,
            icon: None,
            versions: vec!["4.1.0".into(), "4.0.1".into()],
        }
    }

    #[test]
    fn test_matches_id_case_insensitive() {
        let summary = make_summary();
        assert!(summary.matches("serilog"));
        assert!(summary.matches("SINKS"));
    }

    #[test]
    fn test_matches_display_name_and_description() {
        let summary = make_summary();
        assert!(summary.matches("console sink"));
        assert!(summary.matches("log events"));
    }

    #[test]
    fn test_matches_tags() {
        let summary = make_summary();
        assert!(summary.matches("logging"));
        assert!(!summary.matches("database"));
    }

    #[test]
    fn test_newest_version() {
        let summary = make_summary();
        assert_eq!(summary.newest_version(), Some("4.1.0"));

        let empty = PackageSummary {
            versions: vec![],
            ..summary
        };
        assert_eq!(empty.newest_version(), None);
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let summary = make_summary();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["id"], "Serilog.Sinks.Console");
        assert_eq!(json["versions"][0], "4.1.0");
        assert!(json.get("owners").is_none());
        assert!(json.get("icon").is_none());
    }

    #[test]
    fn test_icon_source_serialization() {
        let url = IconSource::Url("https://example.com/icon.png".into());
        let json = serde_json::to_value(&url).unwrap();
        assert_eq!(json["url"], "https://example.com/icon.png");

        let file = IconSource::File(PathBuf::from("/cache/pkg/1.0.0/icon.png"));
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["file"], "/cache/pkg/1.0.0/icon.png");
    }
}
