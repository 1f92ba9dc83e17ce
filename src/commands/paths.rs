use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Get the default packages root: the NuGet global packages folder
/// under the user's home directory.
#[tracing::instrument(skip(runtime))]
pub fn default_packages_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let home_dir = runtime
        .home_dir()
        .context("Could not find home directory")?;
    Ok(home_dir.join(".nuget").join("packages"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{configure_mock_runtime_basics, test_root};

    #[test]
    fn test_default_packages_root() {
        let mut runtime = MockRuntime::new();
        configure_mock_runtime_basics(&mut runtime);

        let root = default_packages_root(&runtime).unwrap();
        assert_eq!(root, test_root());
    }

    #[test]
    fn test_default_packages_root_no_home() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| None);

        let result = default_packages_root(&runtime);
        assert!(result.is_err());
    }
}
