//! Default configuration values

/// Metadata record stored inside every playground directory
pub const METADATA_FILE: &str = ".rshed.toml";

/// Template used when none is given or the requested one is unknown
pub const DEFAULT_TEMPLATE: &str = "basic";

/// Editor launched by `rshed open` when nothing else is configured
pub const DEFAULT_EDITOR: &str = "code";

/// Default staleness threshold for `rshed clean`
pub const DEFAULT_CLEANUP_AGE: &str = "720h"; // 30 days

/// Subdirectory of the data dir holding the default projects root
pub const PROJECTS_SUBDIR: &str = "projects";

/// Subdirectory of the data dir holding named workspaces
pub const WORKSPACES_SUBDIR: &str = "workspaces";

/// Global configuration file name
pub const CONFIG_FILE: &str = "config.toml";

/// Entries written to `.gitignore` when version control is initialized
pub const GITIGNORE_ENTRIES: &[&str] = &[METADATA_FILE, "/target"];

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
