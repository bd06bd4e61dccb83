//! The fetch pass: download every target that is missing locally (or all
//! of them under force), creating directories as needed.

use anyhow::{Context, Result};

use crate::downloader;
use crate::statics::Staticfetcher;
use crate::storage::{self, TempFile};

impl Staticfetcher {
    /// Fetches the configured static files.
    ///
    /// Files already present locally are left untouched unless `force` is
    /// true. The directory hierarchy for the static files is created
    /// automatically. Stops at the first retrieval or filesystem error;
    /// entries fetched before the error stay on disk.
    pub fn fetch(&self, force: bool) -> Result<()> {
        println!(
            "Fetching static files ({})...",
            if force {
                "force download all"
            } else {
                "only nonexistent ones"
            }
        );

        for (target, source) in self.statics() {
            let path = self.static_path(target)?;

            if !force && path.exists() {
                println!("  {} (existing)", path.display());
                tracing::debug!(file = %path.display(), "already present, not re-fetched");
                continue;
            }

            storage::ensure_parent_dirs(&path)
                .with_context(|| format!("failed to create directories for {}", path.display()))?;

            println!("  {} <- {}", path.display(), source);
            let mut temp = TempFile::create(&path)?;
            match downloader::retrieve(source, temp.file_mut(), self.retrieve_options()) {
                Ok(bytes) => {
                    temp.finalize(&path)?;
                    tracing::debug!(file = %path.display(), bytes, "fetched");
                }
                Err(e) => {
                    temp.discard();
                    return Err(e).with_context(|| format!("failed to fetch {source}"));
                }
            }
        }

        Ok(())
    }
}
