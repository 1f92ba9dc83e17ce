use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{
    package::{IconSource, scan_package},
    runtime::Runtime,
};

use super::paths::default_packages_root;

/// Show detailed information about a cached package.
#[tracing::instrument(skip(runtime, packages_root))]
pub fn show<R: Runtime>(
    runtime: R,
    id: &str,
    packages_root: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let root = match packages_root {
        Some(path) => path,
        None => default_packages_root(&runtime)?,
    };
    debug!("Using packages root: {:?}", root);

    let package_dir = root.join(id);
    if !runtime.exists(&package_dir) {
        anyhow::bail!("Package {} is not in the local cache.", id);
    }

    let Some(package) = scan_package(&runtime, &package_dir, id)? else {
        anyhow::bail!("Package {} has no readable metadata in any version.", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&package)?);
        return Ok(());
    }

    println!("Package: {}", package.display_name);
    println!("Directory: {}", package.path.display());

    if let Some(ref description) = package.description {
        println!("\nDescription: {}", description);
    }
    if let Some(ref authors) = package.authors {
        println!("Authors: {}", authors);
    }
    if let Some(ref owners) = package.owners {
        println!("Owners: {}", owners);
    }
    if let Some(ref tags) = package.tags {
        // The model keeps the raw space-delimited string; split for display
        let tags: Vec<&str> = tags.split_whitespace().collect();
        println!("Tags: {}", tags.join(", "));
    }
    if let Some(ref project_url) = package.project_url {
        println!("Project URL: {}", project_url);
    }
    if let Some(ref license_url) = package.license_url {
        println!("License URL: {}", license_url);
    }
    if let Some(ref repository_url) = package.repository_url {
        println!("Repository: {}", repository_url);
    }
    match package.icon {
        Some(IconSource::File(ref path)) => println!("Icon: {}", path.display()),
        Some(IconSource::Url(ref url)) => println!("Icon: {}", url),
        None => {}
    }

    println!("\nVersions:");
    for (index, version) in package.versions.iter().enumerate() {
        if index == 0 {
            println!("  {} (latest)", version);
        } else {
            println!("  {}", version);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{configure_mock_runtime_basics, test_root};
    use mockall::predicate::*;

    const NUSPEC: &str = r#"<package><metadata>
        <id>Foo</id>
        <title>Foo Library</title>
        <description>A test package</description>
        <authors>Acme</authors>
        <owners>Example Corp</owners>
        <tags>foo tools</tags>
        <projectUrl>https://example.com/foo</projectUrl>
        <repository type="git" url="https://github.com/example/foo" />
    </metadata></package>"#;

    fn expect_package(runtime: &mut MockRuntime, versions: &[&str], intact: &[&str]) {
        let package_dir = test_root().join("Foo");

        runtime
            .expect_exists()
            .with(eq(package_dir.clone()))
            .returning(|_| true);

        let entries: Vec<PathBuf> = versions.iter().map(|v| package_dir.join(v)).collect();
        runtime
            .expect_read_dir()
            .with(eq(package_dir.clone()))
            .returning(move |_| Ok(entries.clone()));

        for version in versions {
            runtime
                .expect_is_dir()
                .with(eq(package_dir.join(version)))
                .returning(|_| true);

            let has_nuspec = intact.contains(version);
            runtime
                .expect_exists()
                .with(eq(package_dir.join(version).join("Foo.nuspec")))
                .returning(move |_| has_nuspec);
        }

        for version in intact {
            runtime
                .expect_read_to_string()
                .with(eq(package_dir.join(version).join("Foo.nuspec")))
                .returning(|_| Ok(NUSPEC.to_string()));
            runtime
                .expect_exists()
                .with(eq(package_dir.join(version).join("icon.png")))
                .returning(|_| false);
        }
    }

    #[test]
    fn test_show_package_info() {
        let mut runtime = MockRuntime::new();
        configure_mock_runtime_basics(&mut runtime);
        expect_package(&mut runtime, &["1.0.0", "2.0.0"], &["1.0.0", "2.0.0"]);

        let result = show(runtime, "Foo", None, false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_show_json_output() {
        let mut runtime = MockRuntime::new();
        configure_mock_runtime_basics(&mut runtime);
        expect_package(&mut runtime, &["1.0.0"], &["1.0.0"]);

        let result = show(runtime, "Foo", None, true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_show_missing_package_fails() {
        let mut runtime = MockRuntime::new();
        let root = PathBuf::from("/custom/root");

        runtime
            .expect_exists()
            .with(eq(root.join("Foo")))
            .returning(|_| false);

        let result = show(runtime, "Foo", Some(root), false);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("not in the local cache")
        );
    }

    #[test]
    fn test_show_package_without_metadata_fails() {
        let mut runtime = MockRuntime::new();
        configure_mock_runtime_basics(&mut runtime);
        // Version directory present but no nuspec anywhere
        expect_package(&mut runtime, &["1.0.0"], &[]);

        let result = show(runtime, "Foo", None, false);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("no readable metadata")
        );
    }
}
