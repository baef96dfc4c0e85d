use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("No such file or directory")]
    NotFound(String),
    #[error("Not a directory")]
    NotADirectory(String),
    #[error("Is a directory")]
    IsADirectory(String),
    #[error("File exists")]
    AlreadyExists(String),
    #[error("Directory not empty")]
    DirectoryNotEmpty(String),
}

impl From<VfsError> for String {
    fn from(e: VfsError) -> String {
        e.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub content: String,
    pub mime_type: Option<String>,
}

impl FileEntry {
    pub fn new(content: impl Into<String>, mime_type: Option<String>) -> Self {
        Self { content: content.into(), mime_type }
    }
}

/// Flat, path-keyed filesystem for one terminal session. Directories are a
/// sorted set of canonical paths, files a sorted map of canonical path to
/// content. Every ancestor of every stored path is itself in `directories`.
/// All paths coming in here are already resolved by the caller.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    cwd: String,
    directories: BTreeSet<String>,
    files: BTreeMap<String, FileEntry>,
    // bumped on every successful mutation; the interpreter diffs it around a
    // handler run to know when to re-export the tree
    generation: u64,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystem {
    pub fn new() -> Self {
        let mut directories = BTreeSet::new();
        directories.insert("/".to_string());
        Self {
            cwd: "/".to_string(),
            directories,
            files: BTreeMap::new(),
            generation: 0,
        }
    }

    pub fn current_dir(&self) -> &str {
        &self.cwd
    }

    /// cwd must always name a known directory.
    pub fn set_current_dir(&mut self, path: &str) -> Result<(), VfsError> {
        if self.is_file(path) {
            return Err(VfsError::NotADirectory(path.to_string()));
        }
        if !self.is_directory(path) {
            return Err(VfsError::NotFound(path.to_string()));
        }
        self.cwd = path.to_string();
        Ok(())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn exists(&self, path: &str) -> bool {
        self.is_directory(path) || self.is_file(path)
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.directories.contains(path)
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn read_file(&self, path: &str) -> Result<&FileEntry, VfsError> {
        self.files
            .get(path)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))
    }

    /// Direct children only, split into (directories, files), both sorted.
    /// Unknown path lists as empty - callers check `exists` first.
    pub fn list_children(&self, path: &str) -> (Vec<String>, Vec<String>) {
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for d in &self.directories {
            if d != "/" && path::parent(d) == path {
                dirs.push(path::basename(d).to_string());
            }
        }
        for f in self.files.keys() {
            if path::parent(f) == path {
                files.push(path::basename(f).to_string());
            }
        }
        (dirs, files)
    }

    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.directories.iter().map(String::as_str)
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &FileEntry)> {
        self.files.iter().map(|(p, e)| (p.as_str(), e))
    }

    /// Every known path (directories and files) strictly inside `root`,
    /// sorted. Used by `find` and `tree`.
    pub fn paths_under(&self, root: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .directories
            .iter()
            .chain(self.files.keys())
            .filter(|p| path::is_inside(p, root))
            .cloned()
            .collect();
        out.sort();
        out
    }

    /// Add one directory. Idempotent, but the parent must already exist -
    /// we never create orphaned paths.
    pub fn create_directory(&mut self, path: &str) -> Result<(), VfsError> {
        if self.is_file(path) {
            return Err(VfsError::AlreadyExists(path.to_string()));
        }
        if self.is_directory(path) {
            return Ok(());
        }
        let parent = path::parent(path);
        if !self.is_directory(&parent) {
            return Err(VfsError::NotFound(parent));
        }
        tracing::trace!(path, "vfs create dir");
        self.directories.insert(path.to_string());
        self.generation += 1;
        Ok(())
    }

    /// Add a directory and any missing ancestors (mkdir -p, tree import).
    pub fn create_dir_all(&mut self, path: &str) -> Result<(), VfsError> {
        let mut current = "/".to_string();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = path::join(&current, segment);
            self.create_directory(&current)?;
        }
        Ok(())
    }

    /// Create or overwrite. The path must not name a directory and its
    /// parent directory must exist.
    pub fn write_file(&mut self, path: &str, entry: FileEntry) -> Result<(), VfsError> {
        if self.is_directory(path) {
            return Err(VfsError::IsADirectory(path.to_string()));
        }
        let parent = path::parent(path);
        if !self.is_directory(&parent) {
            return Err(VfsError::NotFound(parent));
        }
        tracing::trace!(path, bytes = entry.content.len(), "vfs write file");
        self.files.insert(path.to_string(), entry);
        self.generation += 1;
        Ok(())
    }

    pub fn delete_file(&mut self, path: &str) -> Result<(), VfsError> {
        if self.files.remove(path).is_none() {
            return Err(VfsError::NotFound(path.to_string()));
        }
        tracing::trace!(path, "vfs delete file");
        self.generation += 1;
        Ok(())
    }

    pub fn delete_directory(&mut self, path: &str, recursive: bool) -> Result<(), VfsError> {
        if path == "/" {
            // refuse to remove the root itself
            return Err(VfsError::DirectoryNotEmpty(path.to_string()));
        }
        if !self.is_directory(path) {
            return Err(VfsError::NotFound(path.to_string()));
        }
        let nested: Vec<String> = self.paths_under(path);
        if !nested.is_empty() && !recursive {
            return Err(VfsError::DirectoryNotEmpty(path.to_string()));
        }
        for p in nested {
            self.directories.remove(&p);
            self.files.remove(&p);
        }
        self.directories.remove(path);
        // cwd cannot be left dangling inside a removed tree
        if self.cwd == path || path::is_inside(&self.cwd, path) {
            self.cwd = path::parent(path);
        }
        tracing::trace!(path, recursive, "vfs delete dir");
        self.generation += 1;
        Ok(())
    }

    /// File-level move/copy. `keep_source = true` is cp, false is mv.
    /// Overwrites the destination if present.
    pub fn move_or_copy(
        &mut self,
        source: &str,
        dest: &str,
        keep_source: bool,
    ) -> Result<(), VfsError> {
        let entry = self
            .files
            .get(source)
            .cloned()
            .ok_or_else(|| VfsError::NotFound(source.to_string()))?;
        self.write_file(dest, entry)?;
        if !keep_source {
            self.files.remove(source);
            self.generation += 1;
        }
        Ok(())
    }
}
