//! Single-stream retrieval of a source URL into a local file.
//!
//! One blocking GET via libcurl, body written sequentially to the
//! destination. Redirects are followed by the transport; non-HTTP schemes
//! libcurl speaks (`file://`, FTP) work the same way.

use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Transfer tuning for a retrieval. `timeout` bounds the whole transfer;
/// `None` lets a slow server take as long as it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrieveOptions {
    pub connect_timeout: Duration,
    pub timeout: Option<Duration>,
}

impl Default for RetrieveOptions {
    fn default() -> Self {
        RetrieveOptions {
            connect_timeout: Duration::from_secs(30),
            timeout: None,
        }
    }
}

/// Error from a single retrieval: unusable URL, transport failure, HTTP
/// error status, or a failed write on the local side.
#[derive(Debug, Error)]
pub enum RetrieveError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Curl(#[from] curl::Error),
    #[error("HTTP {0}")]
    Http(u32),
    #[error("write failed: {0}")]
    Storage(#[source] io::Error),
}

/// Retrieves `source` with a single GET, writing the body sequentially to
/// `dest`. Returns the number of bytes written.
pub fn retrieve(
    source: &str,
    dest: &mut File,
    options: &RetrieveOptions,
) -> Result<u64, RetrieveError> {
    Url::parse(source)?;

    let mut easy = curl::easy::Easy::new();
    easy.url(source)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(options.connect_timeout)?;
    if let Some(timeout) = options.timeout {
        easy.timeout(timeout)?;
    }

    let mut written: u64 = 0;
    let mut write_error: Option<io::Error> = None;
    {
        let perform_result = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match dest.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort the transfer
                }
            })?;
            transfer.perform()
        };
        if let Err(e) = perform_result {
            return Err(match write_error.take() {
                Some(io_err) => RetrieveError::Storage(io_err),
                None => RetrieveError::Curl(e),
            });
        }
    }

    let code = easy.response_code()?;
    // file:// and FTP transfers report no HTTP status (0).
    if code != 0 && !(200..300).contains(&code) {
        return Err(RetrieveError::Http(code));
    }
    Ok(written)
}
