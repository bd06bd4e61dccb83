//! The clean pass: delete previously fetched files. Directories are left
//! alone, even when they end up empty.

use anyhow::{Context, Result};
use std::fs;

use crate::statics::Staticfetcher;

impl Staticfetcher {
    /// Removes the static files managed by this table.
    ///
    /// Targets with no local file are silently skipped; a target whose path
    /// is occupied by a directory is not touched.
    pub fn clean(&self) -> Result<()> {
        println!("Cleaning static files...");

        for target in self.statics().keys() {
            let path = self.static_path(target)?;
            if !path.is_file() {
                tracing::debug!(file = %path.display(), "nothing to remove");
                continue;
            }
            println!("  rm {}", path.display());
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        }

        Ok(())
    }
}
