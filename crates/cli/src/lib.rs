use std::env;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rubric_core::rubric::RubricConfig;
use sha2::{Digest, Sha256};

pub mod commands;

/// Resolve a user-supplied path against the current working directory.
///
/// Existing paths are canonicalized; paths that do not exist yet (e.g. a report
/// file about to be written) are joined onto the current directory instead.
pub fn resolve_path(raw: &str) -> Result<PathBuf> {
    let path = Path::new(raw);
    match path.canonicalize() {
        Ok(p) => Ok(p),
        Err(_) if path.is_absolute() => Ok(path.to_path_buf()),
        Err(_) => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Ok(cwd.join(path))
        }
    }
}

/// Load the rubric configuration at `path`, or the built-in rubric when `None`.
pub fn load_rubric(path: Option<&str>) -> Result<RubricConfig> {
    match path {
        Some(p) => RubricConfig::load(p).with_context(|| format!("Failed to load rubric {p}")),
        None => Ok(RubricConfig::default()),
    }
}

/// Compute the SHA-256 digest of an archive file as a hex string.
pub fn sha256_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open archive for hashing: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];

    loop {
        let n = reader
            .read(&mut buf)
            .with_context(|| format!("Failed to read archive for hashing: {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
