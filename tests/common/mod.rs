//! Common test utilities for pkgfiles integration tests

use std::path::PathBuf;

use tempfile::TempDir;

use pkgfiles::path_utils::to_forward_slashes;

/// A temporary source tree for integration tests
#[allow(dead_code)]
pub struct TestTree {
    /// Temporary directory, removed on drop
    pub temp: TempDir,
    /// Path to the tree root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the tree, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Create an empty directory in the tree
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir_path = self.path.join(path);
        std::fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path
    }

    /// Check if a path exists in the tree
    pub fn exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Absolute path of a tree entry as a manifest source string,
    /// forward-slash separated so it can be used in glob patterns
    pub fn source(&self, path: &str) -> String {
        to_forward_slashes(&self.path.join(path))
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_creation() {
        let tree = TestTree::new();
        assert!(tree.path.exists());
    }

    #[test]
    fn test_tree_file_operations() {
        let tree = TestTree::new();
        tree.write_file("nested/file.txt", "hello");
        assert!(tree.exists("nested/file.txt"));
        assert!(tree.source("nested/file.txt").ends_with("nested/file.txt"));
    }
}
