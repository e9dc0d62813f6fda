use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Keep the paths that exist, in their original order. Missing ones are logged and dropped.
pub fn existing_files<P: AsRef<Path>>(candidates: &[P]) -> Vec<PathBuf> {
    let mut kept = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let path = candidate.as_ref();
        if path.exists() {
            debug!("Found {}", path.display());
            kept.push(path.to_path_buf());
        } else {
            warn!("File not found, skipping: {}", path.display());
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn drops_missing_paths_and_keeps_order() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.epub");
        let b = dir.path().join("b.epub");
        let c = dir.path().join("c.mobi");
        fs::write(&a, b"epub").unwrap();
        fs::write(&c, b"mobi").unwrap();

        let kept = existing_files(&[a.clone(), b, c.clone()]);
        assert_eq!(kept, vec![a, c]);
    }

    #[test]
    fn all_missing_yields_empty() {
        let kept = existing_files(&["/no/such/book.epub", "/no/such/other.pdf"]);
        assert!(kept.is_empty());
    }
}
