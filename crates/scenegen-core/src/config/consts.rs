//! Constants shared across the workspace

/// Config file name looked up at the project root
pub const CONFIG_FILE: &str = "scenegen.toml";

/// Default user template root, relative to the project root
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Default date format for file headers (`5/20/18`)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%y";

/// Header template file name, looked up in the user template root
pub const HEADER_TEMPLATE: &str = "header.swift";
