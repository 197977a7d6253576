//! Test helpers for writing review collections to disk.

use camino::{Utf8Path, Utf8PathBuf};
use mieayam_core::ReviewRecord;
use tempfile::TempDir;

/// A temporary directory holding a reviews file.
#[derive(Debug)]
pub(super) struct ReviewsFile {
    _dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl ReviewsFile {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("reviews.json");
        Self {
            _dir: dir,
            root,
            path,
        }
    }

    pub(super) fn with_reviews(reviews: &[ReviewRecord]) -> Self {
        let file = Self::new();
        file.write_reviews(reviews);
        file
    }

    pub(super) fn write_reviews(&self, reviews: &[ReviewRecord]) {
        let payload = serde_json::to_string_pretty(reviews).expect("serialise reviews");
        write_utf8(&self.path, payload.as_bytes());
    }

    pub(super) fn write_raw(&self, contents: &[u8]) {
        write_utf8(&self.path, contents);
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}
