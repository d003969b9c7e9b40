//! Application icon discovery across standard system locations

use std::env;
use std::path::{Path, PathBuf};

/// Sizes to try, largest first.
const ICON_SIZES: [&str; 6] = ["256x256", "128x128", "64x64", "48x48", "32x32", "16x16"];

fn icon_name(size: &str) -> String {
    format!("vidl-gui_{size}.png")
}

/// Scan a single directory for the application icon, preferring larger sizes.
pub fn find_icon_in_dir(dir: &Path) -> Option<PathBuf> {
    ICON_SIZES
        .iter()
        .map(|size| dir.join(icon_name(size)))
        .find(|candidate| candidate.exists())
}

/// Search for the application icon.
///
/// Looks in `icons/` next to the executable first. On Unix it then walks each
/// `$XDG_DATA_DIRS` entry under `icons/hicolor/<size>/apps/` and finally
/// `/usr/share/pixmaps`. Returns the first match or `None`.
pub fn find_icon() -> Option<PathBuf> {
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            if let Some(found) = find_icon_in_dir(&dir.join("icons")) {
                return Some(found);
            }
        }
    }

    #[cfg(unix)]
    {
        if let Some(data_dirs) = env::var_os("XDG_DATA_DIRS") {
            for data_dir in env::split_paths(&data_dirs) {
                let hicolor = data_dir.join("icons").join("hicolor");
                for size in ICON_SIZES {
                    let candidate = hicolor.join(size).join("apps").join(icon_name(size));
                    if candidate.exists() {
                        tracing::debug!("Found app icon: {}", candidate.display());
                        return Some(candidate);
                    }
                }
            }
        }

        if let Some(found) = find_icon_in_dir(Path::new("/usr/share/pixmaps")) {
            return Some(found);
        }
    }

    None
}
