//! Centralized path helpers for cache and log locations.

use std::path::PathBuf;

use crate::core::app;

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", "text-analyzer", app::NAME)
}

/// Cache directory (~/.cache/text-analyzer/).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Log file used while the terminal page owns the screen.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|d| d.join(format!("{}.log", app::NAME)))
}
