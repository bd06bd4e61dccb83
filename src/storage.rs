//! Filesystem side of a fetch: parent directories, and temp files that
//! land on their final path by rename.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the final rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Creates the directory chain leading to file `path`. No-op when the
/// parent already exists or the path has no parent (plain filename in the
/// current directory). Tolerates the parent being created concurrently by
/// another actor.
pub fn ensure_parent_dirs(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Path for the in-flight download: appends `.part` to the final path
/// (e.g. `jquery.js` → `jquery.js.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut os = final_path.as_os_str().to_owned();
    os.push(TEMP_SUFFIX);
    PathBuf::from(os)
}

/// In-flight download file. Written sequentially, then renamed onto the
/// final path so a failed transfer never leaves a truncated target behind.
pub struct TempFile {
    file: File,
    path: PathBuf,
}

impl TempFile {
    /// Creates (or truncates) the temp file next to `final_path`.
    pub fn create(final_path: &Path) -> Result<Self> {
        let path = temp_path(final_path);
        let file = File::create(&path)
            .with_context(|| format!("failed to create temp file: {}", path.display()))?;
        Ok(TempFile { file, path })
    }

    /// The open file handle, for the transport to write into.
    pub fn file_mut(&mut self) -> &mut File {
        &mut self.file
    }

    /// Renames the temp file onto `final_path`, closing the handle first.
    pub fn finalize(self, final_path: &Path) -> Result<()> {
        let TempFile { file, path } = self;
        drop(file);
        fs::rename(&path, final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                path.display(),
                final_path.display()
            )
        })
    }

    /// Removes the temp file after a failed transfer. Best-effort.
    pub fn discard(self) {
        let TempFile { file, path } = self;
        drop(file);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), "could not remove temp file: {}", e);
            }
        }
    }
}
