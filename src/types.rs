use std::path::{Path, PathBuf};

/// One output density: the resource directory name and the square edge length in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEntry {
    pub label: &'static str,
    pub edge: u32,
}

impl SizeEntry {
    pub const fn new(label: &'static str, edge: u32) -> Self {
        Self { label, edge }
    }

    pub fn dir(&self, output_root: &Path) -> PathBuf {
        output_root.join(self.label)
    }

    pub fn plain_path(&self, output_root: &Path) -> PathBuf {
        self.dir(output_root).join(PLAIN_FILENAME)
    }

    pub fn round_path(&self, output_root: &Path) -> PathBuf {
        self.dir(output_root).join(ROUND_FILENAME)
    }
}

/// Android launcher densities (mdpi = 48 px baseline).
pub const ICON_SIZES: [SizeEntry; 5] = [
    SizeEntry::new("mipmap-mdpi", 48),
    SizeEntry::new("mipmap-hdpi", 72),
    SizeEntry::new("mipmap-xhdpi", 96),
    SizeEntry::new("mipmap-xxhdpi", 144),
    SizeEntry::new("mipmap-xxxhdpi", 192),
];

pub const PLAIN_FILENAME: &str = "ic_launcher.png";
pub const ROUND_FILENAME: &str = "ic_launcher_round.png";

/// Directory for the adaptive-icon descriptors (API 26+).
pub const ADAPTIVE_ICON_DIR: &str = "mipmap-anydpi-v26";
pub const PLAIN_DESCRIPTOR: &str = "ic_launcher.xml";
pub const ROUND_DESCRIPTOR: &str = "ic_launcher_round.xml";
