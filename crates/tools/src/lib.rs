//! OS helper layer for the vidl-gui desktop front-end.
//!
//! Thin, structured wrappers around the handful of OS interactions the GUI
//! needs: resolving user paths, finding the application icon, opening folders
//! in the file manager, creating directories and shutting the machine down
//! once a download queue finishes.

pub mod os_capabilities;
pub mod timefmt;

pub use os_capabilities::{OsError, OsResult};
pub use timefmt::{split_seconds, TimeSplit};

/// Filename of the external downloader binary the GUI drives.
#[cfg(windows)]
pub const DOWNLOADER_BIN: &str = "yt-dlp.exe";
#[cfg(not(windows))]
pub const DOWNLOADER_BIN: &str = "yt-dlp";
