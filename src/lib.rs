//! Fetches static files.
//!
//! Downloads a configured set of remote files into a local directory tree,
//! skipping files that already exist unless forced, and removes previously
//! fetched files on request. Meant for vendoring third-party static assets
//! (e.g. JS libraries) into a project's file structure.
//!
//! ```no_run
//! use staticfetcher::{Staticfetcher, StaticsMap};
//!
//! let mut statics = StaticsMap::new();
//! statics.insert(
//!     "jquery/jquery.js".to_string(),
//!     "http://code.jquery.com/jquery.min.js".to_string(),
//! );
//! statics.insert(
//!     "underscore.js".to_string(),
//!     "http://documentcloud.github.com/underscore/underscore.js".to_string(),
//! );
//!
//! Staticfetcher::new(statics, "js").fetch(false)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! A project that wants a `fetch`/`clean` command keeps its table in its own
//! binary and hands the process arguments over:
//!
//! ```no_run
//! use staticfetcher::{Staticfetcher, StaticsMap};
//!
//! fn main() {
//!     let statics = StaticsMap::new(); // filled in by the project
//!     let fetcher = Staticfetcher::new(statics, ".");
//!     if let Err(err) = fetcher.run() {
//!         eprintln!("staticfetcher error: {:#}", err);
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod cleaner;
mod fetcher;
mod statics;

pub mod cli;
pub mod downloader;
pub mod logging;
pub mod resolver;
pub mod storage;

pub use statics::{Staticfetcher, StaticsMap};
