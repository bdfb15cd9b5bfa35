use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};
use walkdir::WalkDir;
use crate::error::HashError;
use crate::sha256::{digest, Digest};

pub fn hash_file(path: &Path) -> Result<Digest, HashError> {
    debug!("Hashing file: {}", path.display());
    let data = fs::read(path)?;
    digest(&data)
}

/// Hashes every regular file below `root`, sorted by path.
pub fn hash_directory(root: &Path) -> Result<Vec<(PathBuf, Digest)>, HashError> {
    if !root.is_dir() {
        return Err(HashError::InvalidInput(format!("not a directory: {}", root.display())));
    }

    let mut results = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            let d = hash_file(entry.path())?;
            results.push((entry.into_path(), d));
        }
    }

    info!("Hashed {} files under {}", results.len(), root.display());
    Ok(results)
}
