use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::error::{GenError, GenResult};
use crate::types::{ADAPTIVE_ICON_DIR, PLAIN_DESCRIPTOR, ROUND_DESCRIPTOR};

pub const ADAPTIVE_ICON_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/ic_launcher_background"/>
    <foreground android:drawable="@mipmap/ic_launcher_foreground"/>
</adaptive-icon>
"#;

// Round variant references the same layers.
pub const ADAPTIVE_ICON_ROUND_XML: &str = ADAPTIVE_ICON_XML;

/// Writes `ic_launcher.xml` and `ic_launcher_round.xml` under
/// `<output_root>/mipmap-anydpi-v26/` and returns their paths.
pub fn write_descriptors(output_root: &Path) -> GenResult<Vec<PathBuf>> {
    let dir = output_root.join(ADAPTIVE_ICON_DIR);
    fs::create_dir_all(&dir).map_err(|source| GenError::Io { path: dir.clone(), source })?;

    let mut written = Vec::with_capacity(2);
    for (name, content) in [(PLAIN_DESCRIPTOR, ADAPTIVE_ICON_XML), (ROUND_DESCRIPTOR, ADAPTIVE_ICON_ROUND_XML)] {
        let path = dir.join(name);
        fs::write(&path, content).map_err(|source| GenError::Io { path: path.clone(), source })?;
        info!("  ✓ {}", path.display());
        written.push(path);
    }
    Ok(written)
}
