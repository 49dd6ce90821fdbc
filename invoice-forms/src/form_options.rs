use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Image assets laid down on every form page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    pub header_image_path: PathBuf,
    pub footer_image_path: PathBuf,
    pub address_line_image_path: PathBuf,
}

impl Default for FormOptions {
    /// The letterhead, footer and address-window images bundled with the crate.
    fn default() -> Self {
        FormOptions {
            header_image_path: bundled_asset("letter-head.png"),
            footer_image_path: bundled_asset("letter-foot.png"),
            address_line_image_path: bundled_asset("address-line.png"),
        }
    }
}

impl FormOptions {
    pub fn new(
        header_image_path: impl Into<PathBuf>,
        footer_image_path: impl Into<PathBuf>,
        address_line_image_path: impl Into<PathBuf>,
    ) -> Self {
        FormOptions {
            header_image_path: header_image_path.into(),
            footer_image_path: footer_image_path.into(),
            address_line_image_path: address_line_image_path.into(),
        }
    }

    /// Relative paths re-rooted at `base`; absolute paths are kept.
    pub fn relative_to(&self, base: &Path) -> FormOptions {
        let rebase = |p: &PathBuf| if p.is_absolute() { p.clone() } else { base.join(p) };
        FormOptions {
            header_image_path: rebase(&self.header_image_path),
            footer_image_path: rebase(&self.footer_image_path),
            address_line_image_path: rebase(&self.address_line_image_path),
        }
    }
}

pub fn bundled_asset(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("img")
        .join(name)
}
