//! Command implementations for the CLI.

mod list;
mod paths;
mod show;

pub use list::list;
pub use paths::default_packages_root;
pub use show::show;
