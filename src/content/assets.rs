// Image lookup in the configured assets directory
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct AssetCatalog {
    dir: PathBuf,
    resolved: RefCell<HashMap<String, String>>,
    /// Missing names already logged
    reported: RefCell<HashSet<String>>,
}

impl AssetCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            resolved: RefCell::new(HashMap::new()),
            reported: RefCell::new(HashSet::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `file://` URI for `name`, or `None` when the file is not there.
    ///
    /// Only hits are cached: an image added while running shows up on the
    /// next lookup. A missing image is logged once.
    pub fn uri(&self, name: &str) -> Option<String> {
        if let Some(uri) = self.resolved.borrow().get(name) {
            return Some(uri.clone());
        }
        match self.dir.join(name).canonicalize() {
            Ok(path) if path.is_file() => {
                let uri = format!("file://{}", path.display());
                self.resolved
                    .borrow_mut()
                    .insert(name.to_string(), uri.clone());
                self.reported.borrow_mut().remove(name);
                Some(uri)
            }
            _ => {
                if self.reported.borrow_mut().insert(name.to_string()) {
                    debug!(asset = name, dir = %self.dir.display(), "image not found, skipping");
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_existing_asset_resolves_to_file_uri() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("bit-hero.png"), b"png").expect("write");
        let catalog = AssetCatalog::new(dir.path());

        let uri = catalog.uri("bit-hero.png").expect("uri");
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("bit-hero.png"));
    }

    #[test]
    fn test_asset_added_later_is_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog = AssetCatalog::new(dir.path());
        assert_eq!(catalog.uri("late.png"), None);
        assert_eq!(catalog.uri("late.png"), None);

        fs::write(dir.path().join("late.png"), b"png").expect("write");
        let uri = catalog.uri("late.png").expect("uri");
        assert!(uri.ends_with("late.png"));
    }

    #[test]
    fn test_directories_are_not_assets() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("nested")).expect("mkdir");
        let catalog = AssetCatalog::new(dir.path());
        assert_eq!(catalog.uri("nested"), None);
    }
}
