//! Filesystem-backed tree source
//!
//! Walks the root recursively with `walkdir`, sorted by file name so that
//! repeated snapshots of an unchanged tree enumerate identically. Only regular
//! files are returned; symlinks are neither followed nor recorded. Hidden
//! files are included.

use crate::errors::{io_error, walk_error, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use treesnap_core::errors::TreeSnapError;
use treesnap_core::hashing::{hash_reader, ContentHash};
use treesnap_core::paths::relative_display_path;
use treesnap_core::{TreeEntry, TreeSource};
use walkdir::WalkDir;

/// A directory on disk
#[derive(Debug, Clone)]
pub struct FsTree {
    root: PathBuf,
}

impl FsTree {
    /// Create a tree rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn check_root(&self) -> Result<()> {
        let display = self.root.display().to_string();
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(TreeSnapError::RootNotDirectory { path: display }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(TreeSnapError::RootNotFound { path: display })
            }
            Err(e) => Err(io_error("stat_root", &self.root, e)),
        }
    }
}

impl TreeSource for FsTree {
    fn entries(&self) -> Result<Vec<TreeEntry>> {
        self.check_root()?;

        let mut entries = Vec::new();
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for item in walker {
            let item = item.map_err(|e| walk_error(&self.root, e))?;
            if !item.file_type().is_file() {
                continue;
            }
            let Some(relative_path) = relative_display_path(&self.root, item.path()) else {
                continue;
            };
            let metadata = item.metadata().map_err(|e| walk_error(&self.root, e))?;

            entries.push(TreeEntry {
                relative_path,
                file_name: item.file_name().to_string_lossy().into_owned(),
                size_bytes: metadata.len(),
                location: item.into_path(),
            });
        }

        tracing::debug!(
            root = %self.root.display(),
            file_count = entries.len(),
            "enumerated tree"
        );
        Ok(entries)
    }

    fn content_hash(&self, entry: &TreeEntry) -> Result<ContentHash> {
        let file =
            File::open(&entry.location).map_err(|e| io_error("open_file", &entry.location, e))?;
        hash_reader(file).map_err(|e| io_error("hash_file", &entry.location, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::MAIN_SEPARATOR;
    use tempfile::TempDir;
    use treesnap_core::hashing::hash_bytes;

    fn setup_tree() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), b"bee").unwrap();
        fs::create_dir_all(temp_dir.path().join("Sub").join("deeper")).unwrap();
        fs::write(temp_dir.path().join("Sub").join("A.txt"), b"hello").unwrap();
        fs::write(temp_dir.path().join("Sub").join("deeper").join(".hidden"), b"").unwrap();
        temp_dir
    }

    #[test]
    fn test_entries_are_recursive_sorted_and_files_only() {
        let dir = setup_tree();
        let tree = FsTree::new(dir.path());

        let paths: Vec<String> = tree
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.relative_path)
            .collect();

        let sep = MAIN_SEPARATOR;
        assert_eq!(
            paths,
            vec![
                format!("Sub{sep}A.txt"),
                format!("Sub{sep}deeper{sep}.hidden"),
                "b.txt".to_string(),
            ]
        );
    }

    #[test]
    fn test_entry_size_and_hash() {
        let dir = setup_tree();
        let tree = FsTree::new(dir.path());

        let entries = tree.entries().unwrap();
        let a = entries.iter().find(|e| e.file_name == "A.txt").unwrap();

        assert_eq!(a.size_bytes, 5);
        assert_eq!(tree.content_hash(a).unwrap(), hash_bytes(b"hello"));
    }

    #[test]
    fn test_vanished_file_is_io_error() {
        let dir = setup_tree();
        let tree = FsTree::new(dir.path());
        let entries = tree.entries().unwrap();
        let b = entries.iter().find(|e| e.file_name == "b.txt").unwrap();

        fs::remove_file(&b.location).unwrap();

        let err = tree.content_hash(b).unwrap_err();
        assert!(matches!(err, TreeSnapError::Io { ref op, .. } if op == "open_file"));
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let tree = FsTree::new(dir.path().join("nope"));

        assert!(matches!(
            tree.entries().unwrap_err(),
            TreeSnapError::RootNotFound { .. }
        ));
    }

    #[test]
    fn test_root_is_a_file() {
        let dir = setup_tree();
        let tree = FsTree::new(dir.path().join("b.txt"));

        assert!(matches!(
            tree.entries().unwrap_err(),
            TreeSnapError::RootNotDirectory { .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_not_recorded() {
        let dir = setup_tree();
        std::os::unix::fs::symlink(dir.path().join("b.txt"), dir.path().join("link.txt"))
            .unwrap();
        let tree = FsTree::new(dir.path());

        let entries = tree.entries().unwrap();
        assert!(entries.iter().all(|e| e.file_name != "link.txt"));
        assert_eq!(entries.len(), 3);
    }
}
