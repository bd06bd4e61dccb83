//! The statics table and the service type over it.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::downloader::RetrieveOptions;
use crate::resolver;

/// Mapping from target file name (relative to the root directory) to the URL
/// from which to get the file. Keys are unique; inserting a target twice
/// keeps the last URL.
pub type StaticsMap = BTreeMap<String, String>;

/// Handles the static files given in a [`StaticsMap`], located under a root
/// directory. The table is read-only input: fetch and clean never mutate it.
#[derive(Debug, Clone)]
pub struct Staticfetcher {
    statics: StaticsMap,
    root_dir: PathBuf,
    retrieve: RetrieveOptions,
}

impl Staticfetcher {
    /// Creates a Staticfetcher for the files given in `statics`, placed
    /// under `root_dir`. Use `"."` for the current directory.
    pub fn new(statics: StaticsMap, root_dir: impl Into<PathBuf>) -> Self {
        Staticfetcher {
            statics,
            root_dir: root_dir.into(),
            retrieve: RetrieveOptions::default(),
        }
    }

    /// Creates a Staticfetcher whose targets resolve in the current
    /// directory, the default root.
    pub fn in_current_dir(statics: StaticsMap) -> Self {
        Staticfetcher::new(statics, ".")
    }

    /// Caps the total time of each retrieval. Without a cap, a hung server
    /// blocks the whole fetch call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.retrieve.timeout = Some(timeout);
        self
    }

    /// The configured target → URL table.
    pub fn statics(&self) -> &StaticsMap {
        &self.statics
    }

    /// The top-level directory under which the static files are placed.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub(crate) fn retrieve_options(&self) -> &RetrieveOptions {
        &self.retrieve
    }

    /// Local path for `target`: canonical under the root directory,
    /// re-expressed relative to the current working directory. Fetch and
    /// clean agree on this path, so a file written by fetch is exactly the
    /// file clean removes.
    pub fn static_path(&self, target: &str) -> Result<PathBuf> {
        resolver::static_path(&self.root_dir, target)
            .with_context(|| format!("failed to resolve local path for target: {target}"))
    }
}
