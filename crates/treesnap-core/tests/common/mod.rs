use std::cell::RefCell;
use std::path::PathBuf;
use treesnap_core::errors::{Result, TreeSnapError};
use treesnap_core::hashing::{hash_bytes, ContentHash};
use treesnap_core::{TreeEntry, TreeSource};

/// In-memory tree that records every hash request.
///
/// Paths use `/` and keep insertion order as enumeration order.
#[derive(Debug, Default)]
pub struct MemTree {
    files: Vec<(String, Vec<u8>)>,
    hashed: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl MemTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, content: &[u8]) -> Self {
        self.put(path, content);
        self
    }

    /// Insert or overwrite a file, keeping its enumeration position.
    pub fn put(&mut self, path: &str, content: &[u8]) {
        match self.files.iter_mut().find(|(p, _)| p == path) {
            Some((_, existing)) => *existing = content.to_vec(),
            None => self.files.push((path.to_string(), content.to_vec())),
        }
    }

    pub fn remove(&mut self, path: &str) {
        self.files.retain(|(p, _)| p != path);
    }

    pub fn hash_calls(&self) -> usize {
        self.hashed.borrow().len()
    }

    pub fn hashed_paths(&self) -> Vec<String> {
        self.hashed.borrow().clone()
    }

    pub fn reset_hash_calls(&self) {
        self.hashed.borrow_mut().clear();
    }
}

impl TreeSource for MemTree {
    fn entries(&self) -> Result<Vec<TreeEntry>> {
        Ok(self
            .files
            .iter()
            .map(|(path, content)| TreeEntry {
                relative_path: path.clone(),
                file_name: path.rsplit('/').next().unwrap_or(path).to_string(),
                size_bytes: content.len() as u64,
                location: PathBuf::from(path),
            })
            .collect())
    }

    fn content_hash(&self, entry: &TreeEntry) -> Result<ContentHash> {
        self.hashed.borrow_mut().push(entry.relative_path.clone());
        self.files
            .iter()
            .find(|(p, _)| *p == entry.relative_path)
            .map(|(_, content)| hash_bytes(content))
            .ok_or_else(|| TreeSnapError::Io {
                op: "hash_file".to_string(),
                path: entry.relative_path.clone(),
                message: "file vanished".to_string(),
            })
    }
}
