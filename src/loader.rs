//! Raw snapshot log loading from files, URLs or inline text.
//!
//! Gzip-compressed logs (`.gz`) are decompressed transparently. Everything a
//! source can fail with surfaces as a [`WordStatsError`]; the parsed records
//! never carry partial errors because malformed lines are dropped by the
//! normalizer.

use crate::error::{Result, WordStatsError};
use crate::models::SnapshotRecord;
use crate::stats::normalize;
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, ETAG, LAST_MODIFIED};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

/// Where the snapshot log comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    File(PathBuf),
    Url(String),
    /// Log text already held in memory (e.g. an uploaded file).
    Inline(String),
}

impl RecordSource {
    fn is_gzip(&self) -> bool {
        match self {
            RecordSource::File(path) => path.extension().and_then(|e| e.to_str()) == Some("gz"),
            RecordSource::Url(url) => url.split(['?', '#']).next().unwrap_or("").ends_with(".gz"),
            RecordSource::Inline(_) => false,
        }
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::File(path) => write!(f, "file:{}", path.display()),
            RecordSource::Url(url) => write!(f, "url:{}", url),
            RecordSource::Inline(text) => write!(f, "inline:{}b", text.len()),
        }
    }
}

/// Reads and normalizes a snapshot log.
pub struct SnapshotLoader {
    source: RecordSource,
    /// If true, never fetch URL sources.
    pub offline: bool,
    timeout: Duration,
    client: Option<Client>,
}

impl SnapshotLoader {
    pub fn new(source: RecordSource, offline: bool, timeout: Duration) -> Self {
        Self {
            source,
            offline,
            timeout,
            client: None,
        }
    }

    pub fn source(&self) -> &RecordSource {
        &self.source
    }

    /// Fingerprint of the source as it is right now, used to detect stale
    /// cache entries.
    ///
    /// Files and inline text are hashed by content. URLs are checked with a
    /// `HEAD` request and fingerprinted by their `ETag` or `Last-Modified`
    /// header. Returns `None` when the source cannot be checked (missing file,
    /// offline, unreachable host, no validator headers); callers should then
    /// treat any cached copy as fresh.
    pub fn fingerprint(&mut self) -> Result<Option<String>> {
        match self.source.clone() {
            RecordSource::Inline(text) => Ok(Some(self.tagged(&sha256_hex(text.as_bytes())))),
            RecordSource::File(path) => {
                if !path.exists() {
                    return Ok(None);
                }
                let bytes = fs::read(&path)?;
                Ok(Some(self.tagged(&sha256_hex(&bytes))))
            }
            RecordSource::Url(url) => {
                if self.offline {
                    return Ok(None);
                }
                let client = self.client()?.clone();
                match client.head(&url).send().and_then(|r| r.error_for_status()) {
                    Ok(resp) => Ok(validator(resp.headers()).map(|v| self.tagged(&v))),
                    Err(e) => {
                        tracing::warn!(%url, error = %e, "could not check snapshot log version");
                        Ok(None)
                    }
                }
            }
        }
    }

    fn tagged(&self, version: &str) -> String {
        format!("{}#{}", self.source, version)
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| WordStatsError::InvalidArgument("HTTP client unavailable".into()))
    }

    /// Read the raw log text together with the fingerprint of what was read.
    fn fetch(&mut self) -> Result<(String, String)> {
        let gzip = self.source.is_gzip();
        match self.source.clone() {
            RecordSource::Inline(text) => {
                let fingerprint = self.tagged(&sha256_hex(text.as_bytes()));
                Ok((text, fingerprint))
            }
            RecordSource::File(path) => {
                if !path.exists() {
                    return Err(WordStatsError::NotFound(format!(
                        "Snapshot log {} does not exist",
                        path.display()
                    )));
                }
                let bytes = fs::read(&path)?;
                let text = decode(&bytes, gzip).map_err(|e| WordStatsError::Load {
                    source_name: path.display().to_string(),
                    message: e.to_string(),
                })?;
                Ok((text, self.tagged(&sha256_hex(&bytes))))
            }
            RecordSource::Url(url) => {
                if self.offline {
                    return Err(WordStatsError::NotFound(format!(
                        "Snapshot log {} cannot be fetched in offline mode",
                        url
                    )));
                }
                tracing::info!(%url, "fetching snapshot log");
                let resp = self.client()?.get(&url).send()?.error_for_status()?;
                let version = validator(resp.headers());
                let bytes = resp.bytes()?;
                let text = decode(&bytes, gzip).map_err(|e| WordStatsError::Load {
                    source_name: url.clone(),
                    message: e.to_string(),
                })?;
                let version = version.unwrap_or_else(|| sha256_hex(&bytes));
                Ok((text, self.tagged(&version)))
            }
        }
    }

    /// Read the raw log text.
    pub fn read_text(&mut self) -> Result<String> {
        Ok(self.fetch()?.0)
    }

    /// Read and normalize the log.
    pub fn load(&mut self) -> Result<Vec<SnapshotRecord>> {
        Ok(self.load_versioned()?.0)
    }

    /// Read and normalize the log, also returning the fingerprint of the
    /// content that was read.
    pub fn load_versioned(&mut self) -> Result<(Vec<SnapshotRecord>, String)> {
        let (text, fingerprint) = self.fetch()?;
        let records = normalize::parse_log(&text);
        tracing::info!(source = %self.source, records = records.len(), "loaded snapshots");
        Ok((records, fingerprint))
    }

    /// Close the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// `ETag`, falling back to `Last-Modified`.
fn validator(headers: &HeaderMap) -> Option<String> {
    if let Some(etag) = headers.get(ETAG).and_then(|v| v.to_str().ok()) {
        return Some(format!("etag:{}", etag));
    }
    headers
        .get(LAST_MODIFIED)
        .and_then(|v| v.to_str().ok())
        .map(|v| format!("modified:{}", v))
}

fn decode(bytes: &[u8], gzip: bool) -> std::io::Result<String> {
    if gzip {
        let mut contents = String::new();
        GzDecoder::new(bytes).read_to_string(&mut contents)?;
        Ok(contents)
    } else {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
